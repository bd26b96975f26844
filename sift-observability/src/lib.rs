//! # sift-observability
//!
//! Structured JSON tracing with an env-driven filter, and the structured
//! events the retrieval engine emits.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, try_init_tracing_with_filter};
