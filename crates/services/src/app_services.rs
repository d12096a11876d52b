use std::path::PathBuf;
use std::sync::Arc;

use storage::repository::Storage;

use crate::app_settings_service::AppSettingsService;
use crate::error::AppServicesError;
use crate::quiz_loader::QuizLoaderService;
use crate::Clock;

/// Assembles app-facing services.
#[derive(Clone)]
pub struct AppServices {
    quiz_loader: Arc<QuizLoaderService>,
    app_settings: Arc<AppSettingsService>,
}

impl AppServices {
    /// Build services reading questions from `data_dir` and keeping
    /// preferences in `SQLite`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        data_dir: impl Into<PathBuf>,
        db_url: &str,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::open(data_dir, db_url).await?;
        Ok(Self::from_storage(&storage, clock))
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock) -> Self {
        let quiz_loader = Arc::new(QuizLoaderService::new(
            clock,
            Arc::clone(&storage.questions),
        ));
        let app_settings = Arc::new(AppSettingsService::new(Arc::clone(&storage.app_settings)));
        Self {
            quiz_loader,
            app_settings,
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
}
