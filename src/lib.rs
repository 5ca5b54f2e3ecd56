//! # Rokim Todo - client for a remote todo service
//!
//! A command-line client that keeps a local, category-grouped view of the
//! todos stored by a remote service and keeps that view in step with every
//! change it sends.
//!
//! ## Features
//!
//! - **Category board**: Todos grouped by category, with per-category collapse and completed-todo filters
//! - **Todo management**: Create, edit, complete, reopen and delete todos
//! - **Details**: Per-todo expansion showing the full description and creation date
//! - **Sign-in detection**: Redirects from the service are reported as a sign-in request
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rokim_todo::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
