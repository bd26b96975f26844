//! # sift-core
//!
//! Foundation crate for the Sift hybrid retrieval system.
//! Defines the document and candidate model, the collaborator traits
//! (embedding provider, document store, answer generator), errors, config,
//! and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SiftConfig;
pub use errors::{SiftError, SiftResult};
pub use models::{Candidate, Document, MatchMethod, ResultSet, SearchHit};
