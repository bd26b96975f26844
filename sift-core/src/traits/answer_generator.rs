use crate::errors::SiftResult;
use crate::models::GenerationContext;

/// Downstream language-model answerer. Never called with empty evidence.
pub trait IAnswerGenerator: Send + Sync {
    fn generate(&self, question: &str, context: &GenerationContext) -> SiftResult<String>;
}
