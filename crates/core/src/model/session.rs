use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::role::{InterviewMode, TargetRole};

/// Number of questions in a full mock interview.
pub const QUESTIONS_PER_SESSION: usize = 5;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised by session state transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("expected {QUESTIONS_PER_SESSION} questions, got {len}")]
    WrongQuestionCount { len: usize },

    #[error("answer is empty")]
    EmptyAnswer,

    #[error("interview already completed")]
    Completed,
}

//
// ─── ANSWER REVIEW ────────────────────────────────────────────────────────────
//

/// One submitted answer together with the evaluator's feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerReview {
    pub answer: String,
    pub feedback: String,
}

/// Question/answer/feedback triple for the summary view and the PDF export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscriptEntry<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub feedback: &'a str,
}

/// Aggregated view of session progress, useful for front-ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

/// In-memory state of one mock interview attempt.
///
/// Holds the five generated questions and steps through them sequentially.
/// `questions[i]`, `reviews[i]` and `scores[i]` stay index-aligned because
/// reviews are append-only and never reordered. Mutation happens only through
/// [`InterviewSession::record_review`]; display paths get shared references.
pub struct InterviewSession {
    role: TargetRole,
    mode: InterviewMode,
    questions: Vec<String>,
    reviews: Vec<AnswerReview>,
    scores: Vec<u32>,
    current: usize,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    posted_to_leaderboard: bool,
}

impl InterviewSession {
    /// Create a session from a freshly generated question set.
    ///
    /// Starting over while a session is in progress or completed is modeled
    /// as constructing a new session; the old lists are dropped with it.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WrongQuestionCount` unless exactly
    /// [`QUESTIONS_PER_SESSION`] questions are supplied.
    pub fn new(
        role: TargetRole,
        mode: InterviewMode,
        questions: Vec<String>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        if questions.len() != QUESTIONS_PER_SESSION {
            return Err(SessionError::WrongQuestionCount {
                len: questions.len(),
            });
        }

        Ok(Self {
            role,
            mode,
            questions,
            reviews: Vec::new(),
            scores: Vec::new(),
            current: 0,
            started_at,
            completed_at: None,
            posted_to_leaderboard: false,
        })
    }

    #[must_use]
    pub fn role(&self) -> TargetRole {
        self.role
    }

    #[must_use]
    pub fn mode(&self) -> InterviewMode {
        self.mode
    }

    #[must_use]
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    #[must_use]
    pub fn reviews(&self) -> &[AnswerReview] {
        &self.reviews
    }

    #[must_use]
    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    /// Zero-based index of the question awaiting an answer.
    ///
    /// Equals [`QUESTIONS_PER_SESSION`] once the session is completed.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Whether this session's average has already been recorded on a
    /// leaderboard. The append is gated on the completion transition, so a
    /// re-rendered completed view can never post a second entry.
    #[must_use]
    pub fn posted_to_leaderboard(&self) -> bool {
        self.posted_to_leaderboard
    }

    /// Marks the leaderboard append as done. Called by the interview loop
    /// after a successful `record_completion`.
    pub fn mark_posted_to_leaderboard(&mut self) {
        self.posted_to_leaderboard = true;
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&str> {
        self.questions.get(self.current).map(String::as_str)
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.questions.len(),
            answered: self.reviews.len(),
            remaining: self.questions.len().saturating_sub(self.current),
            is_complete: self.is_complete(),
        }
    }

    /// Record the evaluation of the current question's answer and advance.
    ///
    /// The raw answer is stored as submitted; only the emptiness check trims.
    /// `answered_at` should come from the services layer clock.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished,
    /// or `SessionError::EmptyAnswer` if the answer is blank after trimming.
    /// Neither error mutates any state.
    pub fn record_review(
        &mut self,
        answer: String,
        feedback: String,
        score: u32,
        answered_at: DateTime<Utc>,
    ) -> Result<&AnswerReview, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        if answer.trim().is_empty() {
            return Err(SessionError::EmptyAnswer);
        }

        self.reviews.push(AnswerReview { answer, feedback });
        self.scores.push(score);

        self.current += 1;
        if self.current >= self.questions.len() {
            self.completed_at = Some(answered_at);
        }

        self.reviews.last().ok_or(SessionError::Completed)
    }

    /// Average of the five scores rounded to two decimals.
    ///
    /// `None` until the session completes.
    #[must_use]
    pub fn average_score(&self) -> Option<f64> {
        if !self.is_complete() {
            return None;
        }
        let sum: u32 = self.scores.iter().sum();
        let avg = f64::from(sum) / QUESTIONS_PER_SESSION as f64;
        Some((avg * 100.0).round() / 100.0)
    }

    /// Ordered question/answer/feedback triples for every answered question.
    #[must_use]
    pub fn transcript(&self) -> Vec<TranscriptEntry<'_>> {
        self.questions
            .iter()
            .zip(&self.reviews)
            .map(|(question, review)| TranscriptEntry {
                question,
                answer: &review.answer,
                feedback: &review.feedback,
            })
            .collect()
    }
}

impl fmt::Debug for InterviewSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterviewSession")
            .field("role", &self.role)
            .field("mode", &self.mode)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("reviews_len", &self.reviews.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .field("posted_to_leaderboard", &self.posted_to_leaderboard)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn build_questions() -> Vec<String> {
        (1..=QUESTIONS_PER_SESSION)
            .map(|i| format!("Question {i}?"))
            .collect()
    }

    fn build_session() -> InterviewSession {
        InterviewSession::new(
            TargetRole::SoftwareEngineer,
            InterviewMode::Technical,
            build_questions(),
            fixed_now(),
        )
        .unwrap()
    }

    #[test]
    fn rejects_wrong_question_count() {
        let err = InterviewSession::new(
            TargetRole::DataScientist,
            InterviewMode::Behavioral,
            vec!["only one".into()],
            fixed_now(),
        )
        .unwrap_err();
        assert_eq!(err, SessionError::WrongQuestionCount { len: 1 });
    }

    #[test]
    fn empty_answer_leaves_state_unchanged() {
        let mut session = build_session();

        for blank in ["", "   ", "\t\n"] {
            let err = session
                .record_review(blank.into(), "n/a".into(), 7, fixed_now())
                .unwrap_err();
            assert_eq!(err, SessionError::EmptyAnswer);
        }

        assert_eq!(session.current_index(), 0);
        assert!(session.reviews().is_empty());
        assert!(session.scores().is_empty());
    }

    #[test]
    fn session_advances_and_completes() {
        let mut session = build_session();

        for i in 0..QUESTIONS_PER_SESSION {
            assert!(!session.is_complete());
            assert_eq!(
                session.current_question(),
                Some(format!("Question {}?", i + 1).as_str())
            );
            session
                .record_review(
                    format!("answer {i}"),
                    format!("feedback {i}"),
                    8,
                    fixed_now(),
                )
                .unwrap();
            assert_eq!(session.reviews().len(), session.scores().len());
            assert_eq!(session.reviews().len(), session.current_index());
        }

        assert!(session.is_complete());
        assert_eq!(session.completed_at(), Some(fixed_now()));
        assert_eq!(session.current_question(), None);
        assert_eq!(session.reviews().len(), QUESTIONS_PER_SESSION);
        assert_eq!(session.scores().len(), QUESTIONS_PER_SESSION);

        let err = session
            .record_review("late".into(), "n/a".into(), 5, fixed_now())
            .unwrap_err();
        assert_eq!(err, SessionError::Completed);
    }

    #[test]
    fn average_rounds_to_two_decimals() {
        let mut session = build_session();
        assert_eq!(session.average_score(), None);

        for score in [8, 7, 7, 7, 7] {
            session
                .record_review("a".into(), "f".into(), score, fixed_now())
                .unwrap();
        }

        // 36 / 5 = 7.2
        assert_eq!(session.average_score(), Some(7.2));
    }

    #[test]
    fn average_keeps_unclamped_scores() {
        let mut session = build_session();
        for score in [15, 10, 10, 10, 10] {
            session
                .record_review("a".into(), "f".into(), score, fixed_now())
                .unwrap();
        }
        assert_eq!(session.average_score(), Some(11.0));
    }

    #[test]
    fn transcript_stays_index_aligned() {
        let mut session = build_session();
        session
            .record_review("first answer".into(), "first feedback".into(), 6, fixed_now())
            .unwrap();
        session
            .record_review("second answer".into(), "second feedback".into(), 9, fixed_now())
            .unwrap();

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].question, "Question 1?");
        assert_eq!(transcript[0].answer, "first answer");
        assert_eq!(transcript[1].feedback, "second feedback");
    }

    #[test]
    fn progress_tracks_remaining_questions() {
        let mut session = build_session();
        session
            .record_review("a".into(), "f".into(), 7, fixed_now())
            .unwrap();

        let progress = session.progress();
        assert_eq!(progress.total, QUESTIONS_PER_SESSION);
        assert_eq!(progress.answered, 1);
        assert_eq!(progress.remaining, QUESTIONS_PER_SESSION - 1);
        assert!(!progress.is_complete);
    }

    #[test]
    fn leaderboard_gate_starts_closed() {
        let mut session = build_session();
        assert!(!session.posted_to_leaderboard());
        session.mark_posted_to_leaderboard();
        assert!(session.posted_to_leaderboard());
    }
}
