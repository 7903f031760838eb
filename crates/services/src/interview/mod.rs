mod evaluator;
mod generator;
mod workflow;

// Public API of the interview subsystem.
pub use crate::error::InterviewError;
pub use evaluator::{AnswerEvaluator, Evaluation};
pub use generator::QuestionGenerator;
pub use workflow::{InterviewAnswerResult, InterviewLoopService};
