use std::sync::Arc;

use services::QuizLoopService;

/// The application as seen by the UI layer. The composition root
/// (`crates/app`) provides the real implementation; tests provide fakes.
pub trait UiApp: Send + Sync {
    fn default_question_count(&self) -> u32;
    fn quiz_loop(&self) -> Arc<QuizLoopService>;
}

#[derive(Clone)]
pub struct AppContext {
    default_question_count: u32,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            default_question_count: app.default_question_count(),
            quiz_loop: app.quiz_loop(),
        }
    }

    /// Preselected question count on the home screen.
    #[must_use]
    pub fn default_question_count(&self) -> u32 {
        self.default_question_count
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
