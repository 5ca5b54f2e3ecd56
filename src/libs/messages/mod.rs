//! User-facing messages: the [`Message`] enum, its text, and the output macros.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
