use std::sync::Arc;

use quiz_core::model::{OptionId, Position, QuestionSet};
use services::{PickerEntry, StudyLayout, StudySession};

use super::question_vm::{FeedbackVm, QuestionCardVm, ScenarioVm, map_options, progress_label};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StudyIntent {
    Select(Position, OptionId),
    ToggleReveal(Position),
    Next,
    Previous,
    Jump(Position),
    NextScenario,
    PreviousScenario,
    SetLayout(StudyLayout),
}

pub struct StudyVm {
    session: StudySession,
}

impl StudyVm {
    #[must_use]
    pub fn new(set: Arc<QuestionSet>) -> Self {
        Self {
            session: StudySession::new(set),
        }
    }

    pub fn apply(&mut self, intent: StudyIntent) {
        match intent {
            StudyIntent::Select(position, option) => {
                self.session.select_at(position, option);
            }
            StudyIntent::ToggleReveal(position) => {
                self.session.toggle_reveal(position);
            }
            StudyIntent::Next => {
                self.session.next();
            }
            StudyIntent::Previous => {
                self.session.previous();
            }
            StudyIntent::Jump(position) => {
                self.session.jump_to(position);
            }
            StudyIntent::NextScenario => {
                self.session.next_scenario();
            }
            StudyIntent::PreviousScenario => {
                self.session.previous_scenario();
            }
            StudyIntent::SetLayout(layout) => self.session.set_layout(layout),
        }
    }

    #[must_use]
    pub fn layout(&self) -> StudyLayout {
        self.session.layout()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.session.current_question().is_none()
    }

    #[must_use]
    pub fn scenario(&self) -> Option<ScenarioVm> {
        self.session.current_scenario().map(ScenarioVm::from)
    }

    /// Cards for the active layout, in display order.
    #[must_use]
    pub fn cards(&self) -> Vec<QuestionCardVm> {
        let total = self.session.progress().total;
        let layout = self.layout();
        self.session
            .visible_positions()
            .into_iter()
            .filter_map(|position| {
                let question = self.session.set().question(position)?;
                let number = self.session.navigator().number_of(position)?;
                let revealed = self.session.is_revealed(position);
                let title = match layout {
                    StudyLayout::OneByOne => format!("Question {number} of {total}"),
                    StudyLayout::List => format!("Question {number}"),
                };
                Some(QuestionCardVm {
                    position,
                    title,
                    prompt: question.prompt().to_owned(),
                    options: map_options(question, self.session.selection(position), revealed),
                    revealed,
                    feedback: self
                        .session
                        .feedback(position)
                        .as_ref()
                        .map(FeedbackVm::from),
                })
            })
            .collect()
    }

    #[must_use]
    pub fn picker(&self) -> Vec<PickerEntry> {
        self.session.picker()
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        progress_label(self.session.progress())
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        !self.is_empty() && !self.session.navigator().is_first()
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        !self.is_empty() && !self.session.navigator().is_last()
    }

    #[must_use]
    pub fn has_previous_scenario(&self) -> bool {
        self.session.navigator().previous_scenario_start().is_some()
    }

    #[must_use]
    pub fn has_next_scenario(&self) -> bool {
        self.session.navigator().next_scenario_start().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{OptionSet, QuestionDraft};

    fn vm() -> StudyVm {
        let questions = ["One", "Two"]
            .into_iter()
            .map(|prompt| {
                QuestionDraft::new(
                    prompt,
                    OptionSet::Ordered(vec!["Yes".into(), "No".into()]),
                    "Yes",
                )
                .with_explanation("Always yes.")
                .validate()
                .unwrap()
            })
            .collect();
        StudyVm::new(Arc::new(QuestionSet::Flat(questions)))
    }

    #[test]
    fn select_shows_feedback_on_current_card() {
        let mut vm = vm();
        assert!(!vm.can_go_previous());
        vm.apply(StudyIntent::Select(Position::start(), OptionId::from("No")));

        let card = &vm.cards()[0];
        assert_eq!(card.title, "Question 1 of 2");
        let feedback = card.feedback.as_ref().unwrap();
        assert_eq!(feedback.headline, "✗ Incorrect");
        assert_eq!(feedback.correct_label.as_deref(), Some("Yes"));
        assert_eq!(feedback.explanation.as_deref(), Some("Always yes."));
    }

    #[test]
    fn list_layout_renders_every_question() {
        let mut vm = vm();
        vm.apply(StudyIntent::SetLayout(StudyLayout::List));
        let titles: Vec<String> = vm.cards().into_iter().map(|card| card.title).collect();
        assert_eq!(titles, vec!["Question 1", "Question 2"]);
        assert!(vm.scenario().is_none());
    }

    #[test]
    fn navigation_updates_progress() {
        let mut vm = vm();
        vm.apply(StudyIntent::Next);
        assert_eq!(vm.progress_label(), "2 / 2");
        assert!(!vm.can_go_next());
        vm.apply(StudyIntent::Jump(Position::start()));
        assert_eq!(vm.progress_label(), "1 / 2");
    }
}
