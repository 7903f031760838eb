mod leaderboard;
mod role;
mod session;

pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use role::{InterviewMode, SelectionError, TargetRole};
pub use session::{
    AnswerReview, InterviewSession, QUESTIONS_PER_SESSION, SessionError, SessionProgress,
    TranscriptEntry,
};
