use async_trait::async_trait;
use quiz_core::model::{AppSettings, QuestionError, QuestionSet, QuestionSetKind};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("i/o error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid question #{index} in {origin}: {error}")]
    InvalidQuestion {
        origin: String,
        index: usize,
        error: QuestionError,
    },
}

/// Read-only provider of question content.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Load and validate a complete question set.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the content is missing, unreadable, or any
    /// question fails validation. No partial set is returned.
    async fn load_set(&self, kind: QuestionSetKind) -> Result<QuestionSet, StorageError>;
}

/// Persistence for user preferences.
#[async_trait]
pub trait AppSettingsRepository: Send + Sync {
    /// Fetch stored settings, `None` when nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on read failures or unreadable stored values.
    async fn get_settings(&self) -> Result<Option<AppSettings>, StorageError>;

    /// Persist settings, replacing earlier values.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the settings cannot be stored.
    async fn save_settings(&self, settings: &AppSettings) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    sets: Arc<Mutex<HashMap<QuestionSetKind, QuestionSet>>>,
    settings: Arc<Mutex<Option<AppSettings>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the content returned for `kind`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn insert_set(&self, kind: QuestionSetKind, set: QuestionSet) -> Result<(), StorageError> {
        let mut guard = self
            .sets
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(kind, set);
        Ok(())
    }

    #[must_use]
    pub fn with_set(self, kind: QuestionSetKind, set: QuestionSet) -> Self {
        if let Ok(mut guard) = self.sets.lock() {
            guard.insert(kind, set);
        }
        self
    }
}

#[async_trait]
impl QuestionSource for InMemoryRepository {
    async fn load_set(&self, kind: QuestionSetKind) -> Result<QuestionSet, StorageError> {
        let guard = self
            .sets
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.get(&kind).cloned().ok_or(StorageError::NotFound)
    }
}

#[async_trait]
impl AppSettingsRepository for InMemoryRepository {
    async fn get_settings(&self) -> Result<Option<AppSettings>, StorageError> {
        let guard = self
            .settings
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(*guard)
    }

    async fn save_settings(&self, settings: &AppSettings) -> Result<(), StorageError> {
        let mut guard = self
            .settings
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(*settings);
        Ok(())
    }
}

/// Aggregates the question source and settings repository behind trait objects.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionSource>,
    pub app_settings: Arc<dyn AppSettingsRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repository(InMemoryRepository::new())
    }

    #[must_use]
    pub fn from_repository(repo: InMemoryRepository) -> Self {
        let questions: Arc<dyn QuestionSource> = Arc::new(repo.clone());
        let app_settings: Arc<dyn AppSettingsRepository> = Arc::new(repo);
        Self {
            questions,
            app_settings,
        }
    }
}
