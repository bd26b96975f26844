use serde::{Deserialize, Serialize};

use crate::config::defaults::DEFAULT_CONTEXT_SEPARATOR;

/// One rendered evidence block handed to the answer generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextBlock {
    /// Human label for the source, e.g. "Runbook".
    pub label: String,
    pub title: String,
    pub content: String,
    pub url: String,
    pub similarity: f64,
}

impl ContextBlock {
    pub fn render(&self) -> String {
        format!(
            "{}: {}\n\nContent: {}\n\nURL: {}",
            self.label, self.title, self.content, self.url
        )
    }
}

/// Evidence for one question, in result-set order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationContext {
    pub blocks: Vec<ContextBlock>,
}

impl GenerationContext {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Blocks joined by a horizontal-rule separator.
    pub fn render(&self) -> String {
        self.blocks
            .iter()
            .map(ContextBlock::render)
            .collect::<Vec<_>>()
            .join(DEFAULT_CONTEXT_SEPARATOR)
    }
}
