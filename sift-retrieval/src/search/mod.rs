//! The two retrieval signals. Each is a thin, fallible wrapper over a
//! collaborator; neither recovers locally from a collaborator failure.

pub mod keyword;
pub mod semantic;

pub use keyword::keyword_search;
pub use semantic::semantic_search;
