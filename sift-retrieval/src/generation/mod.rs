//! GenerationOrchestrator: search, build evidence context, call the answer
//! generator. An empty result set never reaches the generator.

pub mod context_builder;

use sift_core::errors::SiftResult;
use sift_core::models::{DegradationNotice, SearchHit};
use sift_core::traits::IAnswerGenerator;
use tracing::info;

pub use context_builder::{source_label, ContextBuilder};

use crate::engine::RetrievalEngine;

/// What the orchestrator produced for one question.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerOutcome {
    /// Retrieval found nothing. The generator was not called.
    NoEvidence,
    Answered {
        text: String,
        sources: Vec<SearchHit>,
        /// Present when the evidence came from one retrieval signal only.
        degradation: Option<DegradationNotice>,
    },
}

pub struct GenerationOrchestrator<'a> {
    engine: &'a RetrievalEngine,
    generator: &'a dyn IAnswerGenerator,
    builder: ContextBuilder,
}

impl<'a> GenerationOrchestrator<'a> {
    pub fn new(engine: &'a RetrievalEngine, generator: &'a dyn IAnswerGenerator) -> Self {
        Self {
            engine,
            generator,
            builder: ContextBuilder::new(),
        }
    }

    pub fn with_context_builder(mut self, builder: ContextBuilder) -> Self {
        self.builder = builder;
        self
    }

    pub fn answer(&self, question: &str, limit: usize) -> SiftResult<AnswerOutcome> {
        let results = self.engine.search(question, limit)?;
        if results.is_empty() {
            info!("no evidence found, generator not called");
            return Ok(AnswerOutcome::NoEvidence);
        }

        let context = self.builder.build(&results);
        let text = self.generator.generate(question, &context)?;
        info!(sources = results.len(), "answer generated");

        let degradation = results.degradation().cloned();
        Ok(AnswerOutcome::Answered {
            text,
            sources: results.into_hits(),
            degradation,
        })
    }
}
