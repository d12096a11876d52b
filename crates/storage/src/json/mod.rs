//! Question content read from the static JSON data files.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use quiz_core::model::{QuestionSet, QuestionSetKind};

use crate::repository::{QuestionSource, StorageError};

mod mapping;

pub use mapping::{OptionsRecord, QuestionRecord, ScenarioRecord};

/// File name holding the content for `kind`.
#[must_use]
pub fn file_name(kind: QuestionSetKind) -> &'static str {
    match kind {
        QuestionSetKind::Normal => "normal-questions.json",
        QuestionSetKind::Scenario => "scenario-questions.json",
    }
}

/// Parse a complete question set from JSON text.
///
/// `origin` only labels errors.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON and
/// `StorageError::InvalidQuestion` for the first question that fails validation.
pub fn parse_question_set(
    kind: QuestionSetKind,
    text: &str,
    origin: &str,
) -> Result<QuestionSet, StorageError> {
    match kind {
        QuestionSetKind::Normal => {
            let records: Vec<QuestionRecord> = serde_json::from_str(text)
                .map_err(|err| StorageError::Serialization(format!("{origin}: {err}")))?;
            let questions = records
                .into_iter()
                .enumerate()
                .map(|(index, record)| {
                    record
                        .into_question()
                        .map_err(|error| StorageError::InvalidQuestion {
                            origin: origin.to_string(),
                            index: index + 1,
                            error,
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(QuestionSet::Flat(questions))
        }
        QuestionSetKind::Scenario => {
            let records: Vec<ScenarioRecord> = serde_json::from_str(text)
                .map_err(|err| StorageError::Serialization(format!("{origin}: {err}")))?;
            let mut scenarios = Vec::with_capacity(records.len());
            let mut offset = 0;
            for record in records {
                let count = record.questions.len();
                let scenario = record.into_scenario().map_err(|(index, error)| {
                    StorageError::InvalidQuestion {
                        origin: origin.to_string(),
                        index: offset + index + 1,
                        error,
                    }
                })?;
                offset += count;
                scenarios.push(scenario);
            }
            Ok(QuestionSet::Scenarios(scenarios))
        }
    }
}

/// Reads `normal-questions.json` / `scenario-questions.json` from a directory.
#[derive(Clone, Debug)]
pub struct JsonQuestionSource {
    data_dir: PathBuf,
}

impl JsonQuestionSource {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn path_for(&self, kind: QuestionSetKind) -> PathBuf {
        self.data_dir.join(file_name(kind))
    }
}

#[async_trait]
impl QuestionSource for JsonQuestionSource {
    async fn load_set(&self, kind: QuestionSetKind) -> Result<QuestionSet, StorageError> {
        let path = self.path_for(kind);
        let text = tokio::fs::read_to_string(&path).await.map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                StorageError::NotFound
            } else {
                StorageError::Io(format!("{}: {err}", path.display()))
            }
        })?;
        let set = parse_question_set(kind, &text, &path.display().to_string())?;
        tracing::debug!(
            kind = %kind,
            path = %path.display(),
            questions = set.total(),
            "question set parsed"
        );
        Ok(set)
    }
}
