use quiz_core::model::{OptionSet, Question, QuestionDraft, QuestionError, Scenario};
use serde::Deserialize;
use serde_json::{Map, Value};

/// `options` in the data files: either a list of strings or a key → text object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OptionsRecord {
    Ordered(Vec<String>),
    Keyed(Map<String, Value>),
}

impl OptionsRecord {
    fn into_option_set(self) -> OptionSet {
        match self {
            OptionsRecord::Ordered(items) => OptionSet::Ordered(items),
            OptionsRecord::Keyed(map) => OptionSet::Keyed(pairs(map)),
        }
    }
}

/// Persisted shape of one question.
///
/// Legacy files spell the optional fields `bakok_*`; both spellings are read.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub options: OptionsRecord,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default, alias = "bakok_explanation")]
    pub babok_explanation: Option<String>,
    #[serde(default, alias = "bakok_reference")]
    pub babok_reference: Option<String>,
    #[serde(default)]
    pub why_others_are_wrong: Option<Map<String, Value>>,
}

impl QuestionRecord {
    #[must_use]
    pub fn into_draft(self) -> QuestionDraft {
        let explanation = self
            .explanation
            .filter(|text| !text.trim().is_empty())
            .or(self.babok_explanation);
        QuestionDraft {
            prompt: self.question,
            options: self.options.into_option_set(),
            correct_answer: self.correct_answer,
            explanation,
            rationale: self.why_others_are_wrong.map(pairs).unwrap_or_default(),
            reference: self.babok_reference,
        }
    }

    /// Convert the record into a validated domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the record violates question invariants.
    pub fn into_question(self) -> Result<Question, QuestionError> {
        self.into_draft().validate()
    }
}

/// Persisted shape of one scenario. The narrative lives under `scenario`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioRecord {
    pub title: String,
    #[serde(alias = "description")]
    pub scenario: String,
    #[serde(default)]
    pub questions: Vec<QuestionRecord>,
}

impl ScenarioRecord {
    /// Validate every question and build the domain `Scenario`.
    ///
    /// # Errors
    ///
    /// Returns the index (within this scenario) and error of the first invalid question.
    pub fn into_scenario(self) -> Result<Scenario, (usize, QuestionError)> {
        let questions = self
            .questions
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_question().map_err(|err| (index, err)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Scenario::new(self.title, self.scenario, questions))
    }
}

fn pairs(map: Map<String, Value>) -> Vec<(String, String)> {
    map.into_iter()
        .map(|(key, value)| {
            let text = match value {
                Value::String(text) => text,
                other => other.to_string(),
            };
            (key, text)
        })
        .collect()
}
