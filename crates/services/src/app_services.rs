use std::path::PathBuf;
use std::sync::Arc;

use interview_core::Clock;

use crate::chat::{ChatCompletions, ChatConfig, OpenAiChat};
use crate::export::SummaryPdf;
use crate::interview::InterviewLoopService;

/// Assembles app-facing services around one chat client.
#[derive(Clone)]
pub struct AppServices {
    interview_loop: Arc<InterviewLoopService>,
    summary_pdf: Arc<SummaryPdf>,
    chat_enabled: bool,
}

impl AppServices {
    /// Build services from an explicit chat configuration.
    ///
    /// A `None` configuration still builds: the first remote call will fail
    /// with a disabled-client error rather than at startup.
    #[must_use]
    pub fn new(clock: Clock, config: Option<ChatConfig>, out_dir: impl Into<PathBuf>) -> Self {
        let chat = OpenAiChat::new(config);
        let chat_enabled = chat.enabled();
        let chat: Arc<dyn ChatCompletions> = Arc::new(chat);

        Self {
            interview_loop: Arc::new(InterviewLoopService::new(clock, chat)),
            summary_pdf: Arc::new(SummaryPdf::new(out_dir)),
            chat_enabled,
        }
    }

    /// Build services from the environment.
    #[must_use]
    pub fn from_env(clock: Clock, out_dir: impl Into<PathBuf>) -> Self {
        Self::new(clock, ChatConfig::from_env(), out_dir)
    }

    #[must_use]
    pub fn interview_loop(&self) -> Arc<InterviewLoopService> {
        Arc::clone(&self.interview_loop)
    }

    #[must_use]
    pub fn summary_pdf(&self) -> Arc<SummaryPdf> {
        Arc::clone(&self.summary_pdf)
    }

    /// Whether an API key was present when the services were built.
    #[must_use]
    pub fn chat_enabled(&self) -> bool {
        self.chat_enabled
    }
}
