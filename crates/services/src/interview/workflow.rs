use std::sync::Arc;

use interview_core::Clock;
use interview_core::model::{
    InterviewMode, InterviewSession, Leaderboard, SessionError, TargetRole,
};

use crate::chat::ChatCompletions;
use crate::error::InterviewError;
use super::evaluator::AnswerEvaluator;
use super::generator::QuestionGenerator;

/// Result of answering a single question in an interview.
#[derive(Debug, Clone, PartialEq)]
pub struct InterviewAnswerResult {
    pub feedback: String,
    pub score: u32,
    pub is_complete: bool,
    pub average_score: Option<f64>,
}

/// Orchestrates interview start, answer evaluation, and completion.
///
/// All session mutation goes through this service; display code only ever
/// reads the session.
#[derive(Clone)]
pub struct InterviewLoopService {
    clock: Clock,
    questions: QuestionGenerator,
    evaluator: AnswerEvaluator,
}

impl InterviewLoopService {
    #[must_use]
    pub fn new(clock: Clock, chat: Arc<dyn ChatCompletions>) -> Self {
        Self {
            clock,
            questions: QuestionGenerator::new(Arc::clone(&chat)),
            evaluator: AnswerEvaluator::new(chat),
        }
    }

    /// Start a fresh interview: generate five questions and build the session.
    ///
    /// Calling this while another session is in progress or completed simply
    /// produces a new session; the caller drops the old one, which resets
    /// answers and scores.
    ///
    /// # Errors
    ///
    /// Returns `InterviewError::Chat` when question generation fails.
    pub async fn start_interview(
        &self,
        role: TargetRole,
        mode: InterviewMode,
    ) -> Result<InterviewSession, InterviewError> {
        let questions = self.questions.generate_set(role, mode).await?;
        let session = InterviewSession::new(role, mode, questions, self.clock.now())?;
        tracing::info!(role = %role, mode = %mode, "interview started");
        Ok(session)
    }

    /// Evaluate the answer to the current question and advance the session.
    ///
    /// The emptiness guard runs before the remote call, so a blank submission
    /// costs nothing and mutates nothing. A remote failure also leaves the
    /// session untouched: state is only written after a successful response.
    ///
    /// # Errors
    ///
    /// Returns `InterviewError::Session` for validation failures
    /// (empty answer, already completed) and `InterviewError::Chat` for
    /// remote failures.
    pub async fn answer_current(
        &self,
        session: &mut InterviewSession,
        answer: &str,
    ) -> Result<InterviewAnswerResult, InterviewError> {
        if answer.trim().is_empty() {
            return Err(SessionError::EmptyAnswer.into());
        }
        let question = session
            .current_question()
            .ok_or(SessionError::Completed)?
            .to_string();

        let evaluation = self.evaluator.evaluate(&question, answer).await?;
        session.record_review(
            answer.to_string(),
            evaluation.feedback.clone(),
            evaluation.score,
            self.clock.now(),
        )?;

        if session.is_complete() {
            tracing::info!(average = ?session.average_score(), "interview completed");
        }

        Ok(InterviewAnswerResult {
            feedback: evaluation.feedback,
            score: evaluation.score,
            is_complete: session.is_complete(),
            average_score: session.average_score(),
        })
    }

    /// Append the completed session's average to the leaderboard, once.
    ///
    /// The append is gated on the completion event: it requires a completed
    /// session, a non-empty trimmed name, and an unposted session. Repeated
    /// calls (e.g. from a re-rendered completed view) are no-ops and return
    /// `false`.
    pub fn record_completion(
        &self,
        session: &mut InterviewSession,
        name: &str,
        leaderboard: &mut Leaderboard,
    ) -> bool {
        if !session.is_complete() || session.posted_to_leaderboard() {
            return false;
        }
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let Some(average) = session.average_score() else {
            return false;
        };

        leaderboard.record(name, average);
        session.mark_posted_to_leaderboard();
        tracing::info!(name, average, "leaderboard entry recorded");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interview_core::model::QUESTIONS_PER_SESSION;
    use interview_core::time::fixed_clock;

    use crate::error::ChatError;
    use crate::interview::testing::ScriptedChat;

    fn scripted_interview() -> (Arc<ScriptedChat>, InterviewLoopService) {
        // Five question responses followed by five feedback responses.
        let chat = Arc::new(ScriptedChat::replying(&[
            "Q1", "Q2", "Q3", "Q4", "Q5", "good 8/10", "ok 6/10", "fine 7/10", "strong 9/10",
            "no score token",
        ]));
        let service =
            InterviewLoopService::new(fixed_clock(), Arc::clone(&chat) as Arc<dyn ChatCompletions>);
        (chat, service)
    }

    #[tokio::test]
    async fn full_interview_runs_to_completion() {
        let (chat, service) = scripted_interview();
        let mut session = service
            .start_interview(TargetRole::BackendDeveloper, InterviewMode::Technical)
            .await
            .unwrap();
        assert_eq!(chat.call_count(), QUESTIONS_PER_SESSION);

        let mut last = None;
        for i in 0..QUESTIONS_PER_SESSION {
            let result = service
                .answer_current(&mut session, &format!("answer {i}"))
                .await
                .unwrap();
            last = Some(result);
        }

        let last = last.unwrap();
        assert!(last.is_complete);
        // 8 + 6 + 7 + 9 + 7 (default) = 37 -> 7.4
        assert_eq!(last.average_score, Some(7.4));
        assert_eq!(session.scores(), &[8, 6, 7, 9, 7]);
    }

    #[tokio::test]
    async fn empty_answer_skips_the_remote_call() {
        let (chat, service) = scripted_interview();
        let mut session = service
            .start_interview(TargetRole::SoftwareEngineer, InterviewMode::Behavioral)
            .await
            .unwrap();
        let calls_after_start = chat.call_count();

        let err = service.answer_current(&mut session, "   ").await.unwrap_err();
        assert!(matches!(
            err,
            InterviewError::Session(SessionError::EmptyAnswer)
        ));
        assert_eq!(chat.call_count(), calls_after_start);
        assert_eq!(session.current_index(), 0);
    }

    #[tokio::test]
    async fn remote_failure_preserves_session_state() {
        let chat = Arc::new(ScriptedChat::new(vec![
            Ok("Q1".into()),
            Ok("Q2".into()),
            Ok("Q3".into()),
            Ok("Q4".into()),
            Ok("Q5".into()),
            Err(ChatError::Disabled),
        ]));
        let service =
            InterviewLoopService::new(fixed_clock(), Arc::clone(&chat) as Arc<dyn ChatCompletions>);
        let mut session = service
            .start_interview(TargetRole::DataScientist, InterviewMode::Technical)
            .await
            .unwrap();

        let err = service
            .answer_current(&mut session, "a real answer")
            .await
            .unwrap_err();
        assert!(matches!(err, InterviewError::Chat(ChatError::Disabled)));
        assert_eq!(session.current_index(), 0);
        assert!(session.reviews().is_empty());
        assert!(session.scores().is_empty());
    }

    #[tokio::test]
    async fn completion_posts_to_leaderboard_exactly_once() {
        let (_, service) = scripted_interview();
        let mut session = service
            .start_interview(TargetRole::FrontendDeveloper, InterviewMode::Technical)
            .await
            .unwrap();
        for i in 0..QUESTIONS_PER_SESSION {
            service
                .answer_current(&mut session, &format!("answer {i}"))
                .await
                .unwrap();
        }

        let mut board = Leaderboard::new();
        assert!(service.record_completion(&mut session, "Sam", &mut board));
        // A re-rendered completed view calling again must not duplicate.
        assert!(!service.record_completion(&mut session, "Sam", &mut board));
        assert_eq!(board.len(), 1);
        assert_eq!(board.entries()[0].name, "Sam");
        assert_eq!(board.entries()[0].score, 7.4);
    }

    #[tokio::test]
    async fn completion_without_name_records_nothing() {
        let (_, service) = scripted_interview();
        let mut session = service
            .start_interview(TargetRole::ProductManager, InterviewMode::Behavioral)
            .await
            .unwrap();
        for i in 0..QUESTIONS_PER_SESSION {
            service
                .answer_current(&mut session, &format!("answer {i}"))
                .await
                .unwrap();
        }

        let mut board = Leaderboard::new();
        assert!(!service.record_completion(&mut session, "   ", &mut board));
        assert!(board.is_empty());
        // The gate stays open for a later submission with a real name.
        assert!(service.record_completion(&mut session, "Late Entry", &mut board));
        assert_eq!(board.len(), 1);
    }

    #[tokio::test]
    async fn record_completion_on_unfinished_session_is_rejected() {
        let (_, service) = scripted_interview();
        let mut session = service
            .start_interview(TargetRole::SoftwareEngineer, InterviewMode::Technical)
            .await
            .unwrap();

        let mut board = Leaderboard::new();
        assert!(!service.record_completion(&mut session, "Early", &mut board));
        assert!(board.is_empty());
    }
}
