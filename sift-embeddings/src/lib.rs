//! # sift-embeddings
//!
//! Text-to-vector providers for the retrieval core.
//! A deterministic hashed TF-IDF provider works offline; an Ollama provider
//! talks to a local model server. Both sit behind an in-memory cache.
//!
//! ## Architecture
//!
//! ```text
//! EmbeddingEngine (IEmbeddingProvider)
//! ├── provider (chosen by create_provider)
//! │   ├── OllamaProvider (HTTP, health-checked)
//! │   └── HashedTfIdfProvider (always available)
//! └── EmbeddingCache (moka, blake3 keys)
//! ```

pub mod cache;
pub mod engine;
pub mod providers;

pub use cache::EmbeddingCache;
pub use engine::EmbeddingEngine;
pub use providers::{create_provider, HashedTfIdfProvider, OllamaProvider};
