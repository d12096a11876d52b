use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt is empty")]
    EmptyPrompt,

    #[error("question has no options")]
    NoOptions,

    #[error("duplicate option: {0}")]
    DuplicateOption(String),

    #[error("correct answer {0:?} does not match any option")]
    UnknownCorrectAnswer(String),
}

//
// ─── OPTIONS ──────────────────────────────────────────────────────────────────
//

/// The value recorded when a learner picks an option and compared against the key.
///
/// For ordered option lists this is the option text itself; for keyed options
/// it is the short key (`"A"`, `"B"`, ...), never the display text.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionId(String);

impl OptionId {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OptionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OptionId({:?})", self.0)
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Options exactly as they appear in the source data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionSet {
    /// A plain list; each entry is both identity and text.
    Ordered(Vec<String>),
    /// Key → text pairs in document order.
    Keyed(Vec<(String, String)>),
}

impl OptionSet {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            OptionSet::Ordered(items) => items.len(),
            OptionSet::Keyed(items) => items.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten either shape into `(identity, display)` pairs.
    #[must_use]
    pub fn normalize(&self) -> Vec<AnswerOption> {
        match self {
            OptionSet::Ordered(items) => items
                .iter()
                .map(|text| AnswerOption {
                    id: OptionId::new(text.clone()),
                    text: text.clone(),
                    label: text.clone(),
                })
                .collect(),
            OptionSet::Keyed(items) => items
                .iter()
                .map(|(key, text)| AnswerOption {
                    id: OptionId::new(key.clone()),
                    text: text.clone(),
                    label: format!("{key}. {text}"),
                })
                .collect(),
        }
    }
}

/// One normalized, selectable option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    pub id: OptionId,
    pub text: String,
    /// Text shown on the option button (`"A. text"` for keyed options).
    pub label: String,
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// Unvalidated question as read from a data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub prompt: String,
    pub options: OptionSet,
    pub correct_answer: String,
    pub explanation: Option<String>,
    /// Why each other option is wrong, keyed by option identity.
    pub rationale: Vec<(String, String)>,
    pub reference: Option<String>,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(prompt: impl Into<String>, options: OptionSet, correct_answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            options,
            correct_answer: correct_answer.into(),
            explanation: None,
            rationale: Vec::new(),
            reference: None,
        }
    }

    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    #[must_use]
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    #[must_use]
    pub fn with_rationale(mut self, option: impl Into<String>, reason: impl Into<String>) -> Self {
        self.rationale.push((option.into(), reason.into()));
        self
    }

    /// Validate the draft into an immutable question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt is blank, there are no options,
    /// option identities repeat, or the correct answer names no option.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let prompt = self.prompt.trim().to_string();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if self.options.is_empty() {
            return Err(QuestionError::NoOptions);
        }

        let options = self.options.normalize();
        let mut seen = HashSet::with_capacity(options.len());
        for option in &options {
            if !seen.insert(option.id.as_str()) {
                return Err(QuestionError::DuplicateOption(option.id.to_string()));
            }
        }

        // Exact identity match; whitespace is significant on both sides.
        let correct_index = options
            .iter()
            .position(|option| option.id.as_str() == self.correct_answer)
            .ok_or_else(|| QuestionError::UnknownCorrectAnswer(self.correct_answer.clone()))?;

        let rationale = self
            .rationale
            .into_iter()
            .filter_map(|(option, reason)| {
                normalize_optional(Some(reason)).map(|reason| (OptionId::new(option), reason))
            })
            .collect();

        Ok(Question {
            prompt,
            keyed: matches!(self.options, OptionSet::Keyed(_)),
            options,
            correct_index,
            explanation: normalize_optional(self.explanation),
            rationale,
            reference: normalize_optional(self.reference),
        })
    }
}

/// A validated multiple-choice question. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    keyed: bool,
    options: Vec<AnswerOption>,
    correct_index: usize,
    explanation: Option<String>,
    rationale: Vec<(OptionId, String)>,
    reference: Option<String>,
}

impl Question {
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Whether the options came from a key → text mapping.
    #[must_use]
    pub fn is_keyed(&self) -> bool {
        self.keyed
    }

    #[must_use]
    pub fn option(&self, id: &OptionId) -> Option<&AnswerOption> {
        self.options.iter().find(|option| &option.id == id)
    }

    #[must_use]
    pub fn correct_option(&self) -> &AnswerOption {
        &self.options[self.correct_index]
    }

    #[must_use]
    pub fn correct_answer(&self) -> &OptionId {
        &self.correct_option().id
    }

    /// Exact identity comparison against the answer key.
    #[must_use]
    pub fn is_correct(&self, id: &OptionId) -> bool {
        self.correct_answer() == id
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    #[must_use]
    pub fn rationale(&self) -> &[(OptionId, String)] {
        &self.rationale
    }

    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyed() -> OptionSet {
        OptionSet::Keyed(vec![
            ("A".into(), "Stakeholder map".into()),
            ("B".into(), "Process model".into()),
            ("C".into(), "Data dictionary".into()),
        ])
    }

    #[test]
    fn keyed_options_compare_by_key() {
        let question = QuestionDraft::new("Which technique?", keyed(), "A")
            .validate()
            .unwrap();

        assert!(question.is_keyed());
        assert_eq!(question.correct_answer(), &OptionId::from("A"));
        assert!(question.is_correct(&OptionId::from("A")));
        assert!(!question.is_correct(&OptionId::from("Stakeholder map")));
        assert_eq!(question.options()[0].label, "A. Stakeholder map");
        assert_eq!(question.options()[0].text, "Stakeholder map");
    }

    #[test]
    fn ordered_options_compare_by_text() {
        let question = QuestionDraft::new(
            "Pick one",
            OptionSet::Ordered(vec!["Red".into(), "Blue".into()]),
            "Blue",
        )
        .validate()
        .unwrap();

        assert!(!question.is_keyed());
        assert_eq!(question.correct_option().label, "Blue");
        assert!(question.is_correct(&OptionId::from("Blue")));
    }

    #[test]
    fn rejects_correct_answer_outside_options() {
        let err = QuestionDraft::new("Which?", keyed(), "Stakeholder map")
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            QuestionError::UnknownCorrectAnswer("Stakeholder map".into())
        );
    }

    #[test]
    fn correct_answer_matches_option_exactly_including_whitespace() {
        let question = QuestionDraft::new(
            "Pick",
            OptionSet::Ordered(vec!["Plan ".into(), "Build".into()]),
            "Plan ",
        )
        .validate()
        .unwrap();
        assert_eq!(question.correct_answer(), &OptionId::from("Plan "));
        assert!(!question.is_correct(&OptionId::from("Plan")));

        let err = QuestionDraft::new(
            "Pick",
            OptionSet::Ordered(vec!["Plan".into(), "Build".into()]),
            "Plan ",
        )
        .validate()
        .unwrap_err();
        assert_eq!(err, QuestionError::UnknownCorrectAnswer("Plan ".into()));
    }

    #[test]
    fn rejects_blank_prompt_and_empty_options() {
        let blank = QuestionDraft::new("   ", keyed(), "A").validate();
        assert_eq!(blank.unwrap_err(), QuestionError::EmptyPrompt);

        let empty = QuestionDraft::new("Q", OptionSet::Ordered(Vec::new()), "A").validate();
        assert_eq!(empty.unwrap_err(), QuestionError::NoOptions);
    }

    #[test]
    fn rejects_duplicate_options() {
        let err = QuestionDraft::new(
            "Q",
            OptionSet::Ordered(vec!["Same".into(), "Same".into()]),
            "Same",
        )
        .validate()
        .unwrap_err();
        assert_eq!(err, QuestionError::DuplicateOption("Same".into()));
    }

    #[test]
    fn keeps_rationale_order_and_drops_blank_text() {
        let question = QuestionDraft::new("Which?", keyed(), "A")
            .with_rationale("C", "Describes data, not people.")
            .with_rationale("B", "  ")
            .with_rationale("B", "Shows flow, not interest.")
            .with_explanation("  Maps influence and interest. ")
            .validate()
            .unwrap();

        let keys: Vec<&str> = question
            .rationale()
            .iter()
            .map(|(id, _)| id.as_str())
            .collect();
        assert_eq!(keys, vec!["C", "B"]);
        assert_eq!(question.explanation(), Some("Maps influence and interest."));
        assert_eq!(question.reference(), None);
    }
}
