use std::sync::Arc;

use interview_core::score::score_or_default;

use crate::chat::ChatCompletions;
use crate::error::ChatError;

pub(crate) const EVALUATOR_PERSONA: &str = "You are an expert evaluator.";

/// Free-text critique plus the score extracted from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub feedback: String,
    pub score: u32,
}

/// Requests a scored critique for one answer.
#[derive(Clone)]
pub struct AnswerEvaluator {
    chat: Arc<dyn ChatCompletions>,
}

impl AnswerEvaluator {
    #[must_use]
    pub fn new(chat: Arc<dyn ChatCompletions>) -> Self {
        Self { chat }
    }

    fn prompt(question: &str, answer: &str) -> String {
        format!(
            "Evaluate this answer. Give short feedback and a score out of 10.\n\n\
             Question: {question}\n\nAnswer: {answer}"
        )
    }

    /// Evaluate one answer against its question.
    ///
    /// The score is extracted from the feedback text; a missing token is
    /// silently recovered via the fixed default and never surfaced as an
    /// error.
    ///
    /// # Errors
    ///
    /// Propagates any `ChatError` from the remote call.
    pub async fn evaluate(&self, question: &str, answer: &str) -> Result<Evaluation, ChatError> {
        let feedback = self
            .chat
            .complete(EVALUATOR_PERSONA, &Self::prompt(question, answer))
            .await?;
        let score = score_or_default(&feedback);
        Ok(Evaluation { feedback, score })
    }
}
