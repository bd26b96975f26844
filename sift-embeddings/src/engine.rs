//! EmbeddingEngine: the entry point for sift-embeddings.
//!
//! Wraps the selected provider with a content-addressed cache and a
//! dimension check. Implements `IEmbeddingProvider`, so it can be injected
//! anywhere a provider is expected.

use sift_core::config::EmbeddingConfig;
use sift_core::errors::{EmbeddingError, SiftError, SiftResult};
use sift_core::traits::IEmbeddingProvider;
use tracing::{debug, info};

use crate::cache::EmbeddingCache;
use crate::providers;

pub struct EmbeddingEngine {
    provider: Box<dyn IEmbeddingProvider>,
    cache: EmbeddingCache,
    dimensions: usize,
    degraded: Option<SiftError>,
}

impl EmbeddingEngine {
    /// Create an engine from configuration, selecting and health-checking
    /// the provider once.
    pub fn new(config: &EmbeddingConfig) -> Self {
        let selection = providers::create_provider(config);
        let engine = Self {
            provider: selection.provider,
            cache: EmbeddingCache::new(config.cache_size),
            dimensions: config.dimensions,
            degraded: selection.degraded,
        };
        info!(
            provider = engine.provider.name(),
            dims = engine.dimensions,
            cache_size = config.cache_size,
            "EmbeddingEngine initialized"
        );
        engine
    }

    /// Wrap an already-constructed provider.
    pub fn with_provider(provider: Box<dyn IEmbeddingProvider>, cache_size: u64) -> Self {
        let dimensions = provider.dimensions();
        Self {
            provider,
            cache: EmbeddingCache::new(cache_size),
            dimensions,
            degraded: None,
        }
    }

    pub fn active_provider(&self) -> &str {
        self.provider.name()
    }

    /// The `DegradedMode` error describing the startup fallback, if one was taken.
    pub fn degradation(&self) -> Option<&SiftError> {
        self.degraded.as_ref()
    }

    pub fn cache_len(&self) -> u64 {
        self.cache.len()
    }

    fn validate(&self, embedding: &[f32]) -> SiftResult<()> {
        if embedding.len() != self.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: embedding.len(),
            }
            .into());
        }
        Ok(())
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> SiftResult<Vec<f32>> {
        let key = EmbeddingCache::key_for(text);
        if let Some(hit) = self.cache.get(&key) {
            debug!(key = %key, "embedding cache hit");
            return Ok(hit);
        }

        let embedding = self.provider.embed(text)?;
        self.validate(&embedding)?;
        self.cache.insert(key, embedding.clone());
        Ok(embedding)
    }

    fn embed_batch(&self, texts: &[String]) -> SiftResult<Vec<Vec<f32>>> {
        let keys: Vec<String> = texts.iter().map(|t| EmbeddingCache::key_for(t)).collect();
        let mut results: Vec<Option<Vec<f32>>> = keys.iter().map(|k| self.cache.get(k)).collect();

        let missing: Vec<usize> = (0..texts.len()).filter(|&i| results[i].is_none()).collect();
        if !missing.is_empty() {
            let batch: Vec<String> = missing.iter().map(|&i| texts[i].clone()).collect();
            let embedded = self.provider.embed_batch(&batch)?;
            if embedded.len() != batch.len() {
                return Err(EmbeddingError::InferenceFailed {
                    reason: format!(
                        "provider returned {} embeddings for {} inputs",
                        embedded.len(),
                        batch.len()
                    ),
                }
                .into());
            }
            for (&i, embedding) in missing.iter().zip(embedded) {
                self.validate(&embedding)?;
                self.cache.insert(keys[i].clone(), embedding.clone());
                results[i] = Some(embedding);
            }
        }
        debug!(total = texts.len(), embedded = missing.len(), "batch embedded");

        Ok(results.into_iter().flatten().collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        self.provider.name()
    }

    fn is_available(&self) -> bool {
        self.provider.is_available()
    }
}
