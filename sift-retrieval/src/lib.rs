//! # sift-retrieval
//!
//! The query engine. A question fans out to a vector search and a keyword
//! search over the same corpus; the two candidate sets are reconciled by
//! document url and cut down to a source-diversified result list.
//!
//! ## Architecture
//!
//! ```text
//! RetrievalEngine
//! ├── Preprocess (stop words, punctuation, short tokens)
//! ├── Search
//! │   ├── Semantic (embed → nearest, similarity = 1 - distance)
//! │   └── Keyword (first N keywords → match_any, similarity = 1.0)
//! ├── Reconcile (CandidatePool, keyword overwrites semantic)
//! └── Ranking (stable sort → coverage pass → fill pass)
//! GenerationOrchestrator
//! └── ContextBuilder (labelled evidence blocks)
//! CorpusInspector (counts, recency, stats)
//! ```

pub mod corpus;
pub mod engine;
pub mod generation;
pub mod preprocess;
pub mod ranking;
pub mod reconcile;
pub mod search;

pub use corpus::CorpusInspector;
pub use engine::RetrievalEngine;
pub use generation::{AnswerOutcome, GenerationOrchestrator};
pub use preprocess::extract_keywords;
pub use ranking::rank_and_limit;
pub use reconcile::{reconcile, CandidatePool};
