use std::sync::Arc;

use services::{AppSettingsService, Clock, QuizLoaderService};

pub trait UiApp: Send + Sync {
    fn quiz_loader(&self) -> Arc<QuizLoaderService>;
    fn app_settings(&self) -> Arc<AppSettingsService>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_loader: Arc<QuizLoaderService>,
    app_settings: Arc<AppSettingsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_loader: app.quiz_loader(),
            app_settings: app.app_settings(),
        }
    }

    #[must_use]
    pub fn quiz_loader(&self) -> Arc<QuizLoaderService> {
        Arc::clone(&self.quiz_loader)
    }

    #[must_use]
    pub fn app_settings(&self) -> Arc<AppSettingsService> {
        Arc::clone(&self.app_settings)
    }

    /// Time source shared with the services layer.
    #[must_use]
    pub fn clock(&self) -> Clock {
        self.quiz_loader.clock()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
