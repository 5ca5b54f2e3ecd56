//! Core library modules for rokim-todo.
//!
//! - **Data**: [`todo`] records and the synchronized [`index`]
//! - **State**: the [`store`] mediating every remote mutation, and the
//!   per-category [`filter`] state
//! - **Presentation**: [`board`] derives what to show, [`view`] and
//!   [`formatter`] render it
//! - **Infrastructure**: [`config`], [`data_storage`], [`messages`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rokim_todo::api::{TodoApi, TodoApiConfig};
//! use rokim_todo::libs::store::TodoStore;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let mut store = TodoStore::new(TodoApi::new(&TodoApiConfig::new("http://localhost:8080"))?);
//! store.load_all().await?;
//! store.toggle_show_completed("Work")?;
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod config;
pub mod data_storage;
pub mod filter;
pub mod formatter;
pub mod index;
pub mod messages;
pub mod store;
pub mod todo;
pub mod view;
