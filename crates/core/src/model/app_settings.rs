use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key of the display preference.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AppSettingsError {
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// CSS class applied to the root container.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = AppSettingsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(AppSettingsError::UnknownTheme(other.to_string())),
        }
    }
}

/// Persisted user preferences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AppSettings {
    theme: Theme,
}

impl AppSettings {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Rehydrate settings from the stored theme value.
    ///
    /// # Errors
    ///
    /// Returns `AppSettingsError::UnknownTheme` for values other than `light`/`dark`.
    pub fn from_persisted(theme: Option<&str>) -> Result<Self, AppSettingsError> {
        let theme = theme.map(str::parse::<Theme>).transpose()?.unwrap_or_default();
        Ok(Self { theme })
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn with_theme(self, theme: Theme) -> Self {
        Self { theme }
    }
}
