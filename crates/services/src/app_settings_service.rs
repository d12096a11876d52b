use std::sync::Arc;

use quiz_core::model::{AppSettings, Theme};
use storage::repository::AppSettingsRepository;

use crate::error::SettingsError;

#[derive(Clone)]
pub struct AppSettingsService {
    repo: Arc<dyn AppSettingsRepository>,
}

impl AppSettingsService {
    #[must_use]
    pub fn new(repo: Arc<dyn AppSettingsRepository>) -> Self {
        Self { repo }
    }

    /// Load persisted settings (or defaults if missing).
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` on storage failures.
    pub async fn load(&self) -> Result<AppSettings, SettingsError> {
        let settings = self.repo.get_settings().await?;
        Ok(settings.unwrap_or_default())
    }

    /// Load the theme, falling back to light when the stored value is unusable.
    pub async fn load_theme(&self) -> Theme {
        match self.load().await {
            Ok(settings) => settings.theme(),
            Err(err) => {
                tracing::warn!(error = %err, "stored theme unreadable, using default");
                Theme::default()
            }
        }
    }

    /// Persist a theme choice.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if persistence fails.
    pub async fn save_theme(&self, theme: Theme) -> Result<AppSettings, SettingsError> {
        let settings = AppSettings::new(theme);
        self.repo.save_settings(&settings).await?;
        tracing::debug!(theme = %theme, "theme saved");
        Ok(settings)
    }

    /// Flip between light and dark and persist the result.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if persistence fails.
    pub async fn toggle_theme(&self, current: Theme) -> Result<Theme, SettingsError> {
        let settings = self.save_theme(current.toggled()).await?;
        Ok(settings.theme())
    }
}
