use std::sync::Arc;

use quiz_core::model::{QuestionSet, QuestionSetKind};
use storage::repository::{QuestionSource, StorageError};

use crate::error::QuizLoadError;
use crate::sessions::{ExamSession, StudySession};
use crate::Clock;

/// Loads question sets and starts study or exam sessions over them.
#[derive(Clone)]
pub struct QuizLoaderService {
    clock: Clock,
    questions: Arc<dyn QuestionSource>,
}

impl QuizLoaderService {
    #[must_use]
    pub fn new(clock: Clock, questions: Arc<dyn QuestionSource>) -> Self {
        Self { clock, questions }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Load and validate a complete question set.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoadError::Missing` when the source has no content for
    /// `kind`, or `QuizLoadError::Storage` for read, parse or validation failures.
    pub async fn load(&self, kind: QuestionSetKind) -> Result<Arc<QuestionSet>, QuizLoadError> {
        match self.questions.load_set(kind).await {
            Ok(set) => {
                tracing::info!(kind = %kind, questions = set.total(), "question set loaded");
                Ok(Arc::new(set))
            }
            Err(StorageError::NotFound) => {
                tracing::warn!(kind = %kind, "question set not found");
                Err(QuizLoadError::Missing(kind))
            }
            Err(err) => {
                tracing::warn!(kind = %kind, error = %err, "failed to load question set");
                Err(QuizLoadError::Storage(err))
            }
        }
    }

    /// Load `kind` and open an untimed study session over it.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoadError` if the set cannot be loaded.
    pub async fn start_study(&self, kind: QuestionSetKind) -> Result<StudySession, QuizLoadError> {
        let set = self.load(kind).await?;
        Ok(StudySession::new(set))
    }

    /// Load `kind` and start a timed exam over it.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoadError` if the set cannot be loaded.
    pub async fn start_exam(&self, kind: QuestionSetKind) -> Result<ExamSession, QuizLoadError> {
        let set = self.load(kind).await?;
        Ok(ExamSession::new(set, self.clock))
    }
}
