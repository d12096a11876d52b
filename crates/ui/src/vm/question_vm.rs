use quiz_core::model::{OptionId, Position, Question, Scenario};
use services::{SessionProgress, StudyFeedback};

/// How an option button is highlighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionTone {
    Neutral,
    Selected,
    Correct,
    Incorrect,
}

impl OptionTone {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            OptionTone::Neutral => "option",
            OptionTone::Selected => "option option--selected",
            OptionTone::Correct => "option option--correct",
            OptionTone::Incorrect => "option option--incorrect",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub id: OptionId,
    pub label: String,
    pub tone: OptionTone,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RationaleVm {
    pub label: String,
    pub reason: String,
    pub selected: bool,
}

/// Revealed answer block under a study question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub headline: &'static str,
    pub css_class: &'static str,
    /// Shown unless the learner picked the correct option.
    pub correct_label: Option<String>,
    pub explanation: Option<String>,
    pub rationale: Vec<RationaleVm>,
    pub reference: Option<String>,
}

impl From<&StudyFeedback> for FeedbackVm {
    fn from(feedback: &StudyFeedback) -> Self {
        let (headline, css_class) = match feedback.is_correct {
            Some(true) => ("✓ Correct!", "feedback feedback--correct"),
            Some(false) => ("✗ Incorrect", "feedback feedback--incorrect"),
            None => ("Answer", "feedback feedback--neutral"),
        };
        Self {
            headline,
            css_class,
            correct_label: (feedback.is_correct != Some(true))
                .then(|| feedback.correct.label.clone()),
            explanation: feedback.explanation.clone(),
            rationale: feedback
                .rationale
                .iter()
                .map(|entry| RationaleVm {
                    label: entry.label.clone(),
                    reason: entry.reason.clone(),
                    selected: entry.selected,
                })
                .collect(),
            reference: feedback.reference.clone(),
        }
    }
}

/// One rendered question card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub position: Position,
    pub title: String,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub revealed: bool,
    pub feedback: Option<FeedbackVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScenarioVm {
    pub title: String,
    pub narrative: String,
}

impl From<&Scenario> for ScenarioVm {
    fn from(scenario: &Scenario) -> Self {
        Self {
            title: scenario.title().to_owned(),
            narrative: scenario.narrative().to_owned(),
        }
    }
}

/// Build option rows; correctness only shows once `revealed` is set.
pub(crate) fn map_options(
    question: &Question,
    selected: Option<&OptionId>,
    revealed: bool,
) -> Vec<OptionVm> {
    question
        .options()
        .iter()
        .map(|option| {
            let is_selected = selected == Some(&option.id);
            let tone = match (revealed, is_selected, question.is_correct(&option.id)) {
                (true, _, true) => OptionTone::Correct,
                (true, true, false) => OptionTone::Incorrect,
                (_, true, _) => OptionTone::Selected,
                _ => OptionTone::Neutral,
            };
            OptionVm {
                id: option.id.clone(),
                label: option.label.clone(),
                tone,
            }
        })
        .collect()
}

#[must_use]
pub fn progress_label(progress: SessionProgress) -> String {
    format!("{} / {}", progress.current_number, progress.total)
}
