//! Renders a ResultSet into labelled evidence blocks for the answer generator.

use sift_core::models::{ContextBlock, GenerationContext, ResultSet};

/// Human label for a source tag. Unknown tags are shown as-is.
pub fn source_label(source: &str) -> &str {
    match source {
        "blog" => "Blog Post",
        "documentation" => "Runbook",
        "microsoft" => "Microsoft Docs",
        "servicenow" => "ServiceNow Incident",
        other => other,
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    max_content_chars: Option<usize>,
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cut each document's content to at most `chars` characters.
    pub fn with_max_content_chars(mut self, chars: usize) -> Self {
        self.max_content_chars = Some(chars);
        self
    }

    /// One block per hit, in result-set order.
    pub fn build(&self, results: &ResultSet) -> GenerationContext {
        let blocks = results
            .candidates()
            .iter()
            .map(|c| ContextBlock {
                label: source_label(c.source()).to_string(),
                title: c.document.title.clone(),
                content: self.clip(&c.document.content),
                url: c.document.url.clone(),
                similarity: c.similarity,
            })
            .collect();
        GenerationContext { blocks }
    }

    fn clip(&self, content: &str) -> String {
        match self.max_content_chars {
            Some(max) => match content.char_indices().nth(max) {
                Some((cut, _)) => format!("{}...", &content[..cut]),
                None => content.to_string(),
            },
            None => content.to_string(),
        }
    }
}
