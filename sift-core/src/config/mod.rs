//! Layered configuration. Every section defaults independently, so a TOML
//! file only needs the keys it overrides.

pub mod defaults;
mod embedding_config;
mod retrieval_config;
mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use embedding_config::EmbeddingConfig;
pub use retrieval_config::{CoveragePolicy, RetrievalConfig};
pub use storage_config::StorageConfig;

use crate::errors::{SiftError, SiftResult};

/// Top-level configuration for a Sift deployment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiftConfig {
    pub storage: StorageConfig,
    pub embedding: EmbeddingConfig,
    pub retrieval: RetrievalConfig,
}

impl SiftConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> SiftResult<Self> {
        let config: SiftConfig =
            toml::from_str(raw).map_err(|e| SiftError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load, parse and validate a TOML file.
    pub fn load(path: &Path) -> SiftResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| SiftError::ConfigError(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }

    /// Reject values that would make retrieval meaningless.
    pub fn validate(&self) -> SiftResult<()> {
        let r = &self.retrieval;
        let checks: [(&str, usize); 5] = [
            ("retrieval.semantic_top_k", r.semantic_top_k),
            ("retrieval.keyword_top_k", r.keyword_top_k),
            ("retrieval.max_keywords", r.max_keywords),
            ("retrieval.default_limit", r.default_limit),
            ("embedding.dimensions", self.embedding.dimensions),
        ];
        for (key, value) in checks {
            if value == 0 {
                return Err(SiftError::ConfigError(format!("{key} must be greater than 0")));
            }
        }
        if r.deadline_ms == 0 {
            return Err(SiftError::ConfigError(
                "retrieval.deadline_ms must be greater than 0".to_string(),
            ));
        }
        if self.storage.read_pool_size == 0 {
            return Err(SiftError::ConfigError(
                "storage.read_pool_size must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
