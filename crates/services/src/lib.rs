#![forbid(unsafe_code)]

pub mod app_services;
pub mod chat;
pub mod error;
pub mod export;
pub mod interview;

pub use interview_core::Clock;

pub use app_services::AppServices;
pub use chat::{ChatCompletions, ChatConfig, OpenAiChat};
pub use error::{ChatError, ExportError, InterviewError};
pub use export::SummaryPdf;
pub use interview::{
    AnswerEvaluator, Evaluation, InterviewAnswerResult, InterviewLoopService, QuestionGenerator,
};
