//! Provider registry.
//!
//! `ollama` is used when its server answers the health check; anything else,
//! or an unreachable server, gets the hashed TF-IDF provider.

pub mod hashed_tfidf;
pub mod ollama_provider;

pub use hashed_tfidf::HashedTfIdfProvider;
pub use ollama_provider::OllamaProvider;

use sift_core::config::EmbeddingConfig;
use sift_core::errors::SiftError;
use sift_core::traits::IEmbeddingProvider;
use tracing::{info, warn};

/// The provider chosen for a config, plus the fallback taken if the
/// configured one could not be used.
pub struct ProviderSelection {
    pub provider: Box<dyn IEmbeddingProvider>,
    pub degraded: Option<SiftError>,
}

/// Create the configured provider, falling back to the hashed provider.
pub fn create_provider(config: &EmbeddingConfig) -> ProviderSelection {
    match config.provider.as_str() {
        "ollama" => match OllamaProvider::new(&config.model, config.dimensions, &config.base_url) {
            Ok(provider) if provider.health_check() => {
                info!(provider = "ollama", model = %config.model, "embedding provider connected");
                ProviderSelection {
                    provider: Box::new(provider),
                    degraded: None,
                }
            }
            Ok(_) => {
                warn!(base_url = %config.base_url, "Ollama unavailable, falling back to hashed TF-IDF");
                hashed_fallback(config, "ollama")
            }
            Err(e) => {
                warn!(error = %e, "Ollama client failed to build, falling back to hashed TF-IDF");
                hashed_fallback(config, "ollama")
            }
        },
        "hashed" => {
            info!(provider = "hashed-tfidf", "using hashed TF-IDF embedding provider");
            ProviderSelection {
                provider: Box::new(HashedTfIdfProvider::new(config.dimensions)),
                degraded: None,
            }
        }
        other => {
            warn!(provider = other, "unknown provider, using hashed TF-IDF");
            hashed_fallback(config, other)
        }
    }
}

fn hashed_fallback(config: &EmbeddingConfig, component: &str) -> ProviderSelection {
    ProviderSelection {
        provider: Box::new(HashedTfIdfProvider::new(config.dimensions)),
        degraded: Some(SiftError::DegradedMode {
            component: component.to_string(),
            fallback: "hashed-tfidf".to_string(),
        }),
    }
}
