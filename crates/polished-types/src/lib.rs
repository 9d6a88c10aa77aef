//! Shared domain types for the Polished resume-review client.
//!
//! This crate contains the types used across the client: chat messages,
//! the session handle, the wire types for the backend API, and their
//! associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod api;
pub mod chat;
pub mod config;
pub mod error;
pub mod session;
