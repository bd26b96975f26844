//! Ollama local embedding provider.
//!
//! Connects to an Ollama server for embedding generation. Health-checked at
//! construction. Uses the blocking client: construct and call it from a plain
//! thread or a `spawn_blocking` task, never directly on an async worker.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use sift_core::errors::{EmbeddingError, SiftResult};
use sift_core::traits::IEmbeddingProvider;
use tracing::{debug, warn};

const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);
const EMBED_TIMEOUT: Duration = Duration::from_secs(30);

/// Ollama embedding provider.
pub struct OllamaProvider {
    client: reqwest::blocking::Client,
    base_url: String,
    model: String,
    dimensions: usize,
    available: AtomicBool,
}

#[derive(Serialize)]
struct OllamaEmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct OllamaEmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

impl OllamaProvider {
    pub fn new(model: impl Into<String>, dimensions: usize, base_url: impl Into<String>) -> SiftResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(EMBED_TIMEOUT)
            .build()
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("http client: {e}"),
            })?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            dimensions,
            // Must pass health check first.
            available: AtomicBool::new(false),
        })
    }

    /// Check if the Ollama server is reachable. Updates availability.
    pub fn health_check(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        let ok = match self.client.get(&url).timeout(HEALTH_CHECK_TIMEOUT).send() {
            Ok(resp) if resp.status().is_success() => {
                debug!(model = %self.model, "Ollama health check passed");
                true
            }
            Ok(resp) => {
                warn!(status = %resp.status(), "Ollama health check failed");
                false
            }
            Err(e) => {
                warn!(error = %e, "Ollama unreachable");
                false
            }
        };
        self.available.store(ok, Ordering::Relaxed);
        ok
    }

    fn request_embeddings(&self, texts: &[String]) -> SiftResult<Vec<Vec<f32>>> {
        if !self.available.load(Ordering::Relaxed) {
            return Err(EmbeddingError::ProviderUnavailable {
                provider: self.name().to_string(),
            }
            .into());
        }

        let url = format!("{}/api/embed", self.base_url);
        let request = OllamaEmbedRequest {
            model: &self.model,
            input: texts,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("Ollama HTTP error: {e}"),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("Ollama returned {status}: {body}"),
            }
            .into());
        }

        let resp: OllamaEmbedResponse =
            response.json().map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("Ollama JSON parse error: {e}"),
            })?;

        if resp.embeddings.len() != texts.len() {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!(
                    "Ollama returned {} embeddings for {} inputs",
                    resp.embeddings.len(),
                    texts.len()
                ),
            }
            .into());
        }

        let dims = self.dimensions;
        Ok(resp
            .embeddings
            .into_iter()
            .map(|mut v| {
                v.resize(dims, 0.0);
                v
            })
            .collect())
    }
}

impl IEmbeddingProvider for OllamaProvider {
    fn embed(&self, text: &str) -> SiftResult<Vec<f32>> {
        let results = self.request_embeddings(&[text.to_string()])?;
        results.into_iter().next().ok_or_else(|| {
            EmbeddingError::InferenceFailed {
                reason: "empty Ollama response".to_string(),
            }
            .into()
        })
    }

    fn embed_batch(&self, texts: &[String]) -> SiftResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.request_embeddings(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }
}
