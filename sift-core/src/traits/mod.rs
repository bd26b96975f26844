//! Collaborator contracts consumed by the retrieval core.

mod answer_generator;
mod document_store;
mod embedding;

pub use answer_generator::IAnswerGenerator;
pub use document_store::IDocumentStore;
pub use embedding::IEmbeddingProvider;
