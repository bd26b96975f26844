//! Data model shared by the store, the embedding layer and the retrieval core.

mod candidate;
mod corpus_stats;
mod document;
mod generation_context;
mod result_set;

pub use candidate::{Candidate, MatchMethod};
pub use corpus_stats::{CorpusStats, DocumentSummary};
pub use document::Document;
pub use generation_context::{ContextBlock, GenerationContext};
pub use result_set::{DegradationNotice, ResultSet, SearchHit};
