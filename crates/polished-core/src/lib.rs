//! Client-side logic for the Polished resume-review flow.
//!
//! Everything in this crate is pure state manipulation: file validation,
//! the append-only transcript, the single-flight chat turn machine, the
//! preview pane state, and the top-level workspace lifecycle. No HTTP
//! happens here -- `polished-client` owns the wire.

pub mod chat;
pub mod preview;
pub mod transcript;
pub mod upload;
pub mod workspace;
