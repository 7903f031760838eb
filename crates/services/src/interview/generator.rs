use std::sync::Arc;

use interview_core::model::{InterviewMode, QUESTIONS_PER_SESSION, TargetRole};

use crate::chat::ChatCompletions;
use crate::error::ChatError;

pub(crate) const INTERVIEWER_PERSONA: &str = "You are a professional interviewer.";

/// Produces interview questions through the chat completion seam.
#[derive(Clone)]
pub struct QuestionGenerator {
    chat: Arc<dyn ChatCompletions>,
}

impl QuestionGenerator {
    #[must_use]
    pub fn new(chat: Arc<dyn ChatCompletions>) -> Self {
        Self { chat }
    }

    fn prompt(role: TargetRole, mode: InterviewMode) -> String {
        format!(
            "Act like a professional interviewer. Ask 1 {} interview question for a {}.",
            mode.label().to_lowercase(),
            role
        )
    }

    /// Generate a single question for the given role and mode.
    ///
    /// # Errors
    ///
    /// Propagates any `ChatError` from the remote call.
    pub async fn generate(
        &self,
        role: TargetRole,
        mode: InterviewMode,
    ) -> Result<String, ChatError> {
        self.chat
            .complete(INTERVIEWER_PERSONA, &Self::prompt(role, mode))
            .await
    }

    /// Generate the full question set with one remote call per question.
    ///
    /// Calls are sequential and independent; duplicate questions across the
    /// set are possible and accepted. The first failing call aborts the set.
    ///
    /// # Errors
    ///
    /// Propagates any `ChatError` from the remote calls.
    pub async fn generate_set(
        &self,
        role: TargetRole,
        mode: InterviewMode,
    ) -> Result<Vec<String>, ChatError> {
        let mut questions = Vec::with_capacity(QUESTIONS_PER_SESSION);
        for _ in 0..QUESTIONS_PER_SESSION {
            questions.push(self.generate(role, mode).await?);
        }
        Ok(questions)
    }
}
