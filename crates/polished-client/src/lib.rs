//! Infrastructure for the Polished client: the backend HTTP client and
//! on-disk configuration loading.

pub mod api;
pub mod config;

pub use api::ReviewApi;
