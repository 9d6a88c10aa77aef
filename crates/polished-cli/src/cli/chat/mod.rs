//! Interactive chat loop for an active review session.

mod banner;
mod commands;
mod input;
mod loop_runner;
mod renderer;

pub use loop_runner::{run_chat_loop, ChatOutcome};
