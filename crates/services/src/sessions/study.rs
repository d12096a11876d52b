use std::collections::HashSet;
use std::sync::Arc;

use quiz_core::model::{AnswerOption, OptionId, Position, Question, QuestionSet, Scenario};
use quiz_core::{AnswerLedger, NavStep, SessionNavigator};

use super::progress::{PickerEntry, SessionProgress};

//
// ─── FEEDBACK ──────────────────────────────────────────────────────────────────
//

/// How the study view lays out questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StudyLayout {
    #[default]
    OneByOne,
    /// Every question of the current scenario at once.
    List,
}

/// Why one of the other options is wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RationaleEntry {
    pub option: OptionId,
    /// Display label of the option, or its identity when the entry names no option.
    pub label: String,
    pub reason: String,
    /// The learner picked this option.
    pub selected: bool,
}

/// Feedback for a revealed question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyFeedback {
    pub position: Position,
    pub selected: Option<OptionId>,
    /// `None` when the answer was revealed without a selection.
    pub is_correct: Option<bool>,
    pub correct: AnswerOption,
    pub explanation: Option<String>,
    pub rationale: Vec<RationaleEntry>,
    pub reference: Option<String>,
}

impl StudyFeedback {
    fn build(position: Position, question: &Question, selected: Option<&OptionId>) -> Self {
        let correct = question.correct_option().clone();
        let rationale = question
            .rationale()
            .iter()
            .filter(|(option, _)| option != &correct.id)
            .map(|(option, reason)| RationaleEntry {
                option: option.clone(),
                label: question
                    .option(option)
                    .map_or_else(|| option.to_string(), |found| found.label.clone()),
                reason: reason.clone(),
                selected: selected == Some(option),
            })
            .collect();

        Self {
            position,
            selected: selected.cloned(),
            is_correct: selected.map(|id| question.is_correct(id)),
            correct,
            explanation: question.explanation().map(str::to_owned),
            rationale,
            reference: question.reference().map(str::to_owned),
        }
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Untimed self-study over one question set.
///
/// Selecting an option reveals its feedback; the learner may change the
/// selection at any time, which re-evaluates correctness but keeps the
/// question revealed. Only an explicit toggle hides it again.
#[derive(Debug, Clone)]
pub struct StudySession {
    set: Arc<QuestionSet>,
    navigator: SessionNavigator,
    ledger: AnswerLedger,
    revealed: HashSet<Position>,
    layout: StudyLayout,
}

impl StudySession {
    #[must_use]
    pub fn new(set: Arc<QuestionSet>) -> Self {
        let navigator = SessionNavigator::for_set(&set);
        Self {
            set,
            navigator,
            ledger: AnswerLedger::new(),
            revealed: HashSet::new(),
            layout: StudyLayout::default(),
        }
    }

    #[must_use]
    pub fn set(&self) -> &QuestionSet {
        &self.set
    }

    #[must_use]
    pub fn navigator(&self) -> &SessionNavigator {
        &self.navigator
    }

    #[must_use]
    pub fn ledger(&self) -> &AnswerLedger {
        &self.ledger
    }

    #[must_use]
    pub fn layout(&self) -> StudyLayout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: StudyLayout) {
        self.layout = layout;
    }

    #[must_use]
    pub fn current_position(&self) -> Option<Position> {
        self.navigator.current()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current_position()
            .and_then(|position| self.set.question(position))
    }

    /// Scenario the cursor is in; `None` for flat sets.
    #[must_use]
    pub fn current_scenario(&self) -> Option<&Scenario> {
        self.current_position()
            .and_then(|position| self.set.scenario(position.scenario()))
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.navigator.total(),
            answered: self.ledger.len(),
            current_number: self.navigator.question_number(),
        }
    }

    /// Positions rendered by the current layout.
    #[must_use]
    pub fn visible_positions(&self) -> Vec<Position> {
        let Some(current) = self.current_position() else {
            return Vec::new();
        };
        match self.layout {
            StudyLayout::OneByOne => vec![current],
            StudyLayout::List => (0..self.set.questions_in(current.scenario()).len())
                .map(|question| Position::new(current.scenario(), question))
                .collect(),
        }
    }

    #[must_use]
    pub fn picker(&self) -> Vec<PickerEntry> {
        let current = self.current_position();
        picker_entries(&self.set, &self.ledger, current)
    }

    //
    // ─── ANSWERS ──────────────────────────────────────────────────────────────
    //

    /// Select an option for the current question.
    pub fn select(&mut self, option: OptionId) -> Option<StudyFeedback> {
        let position = self.current_position()?;
        self.select_at(position, option)
    }

    /// Select an option for any question, as the list layout does.
    ///
    /// Returns `None` and records nothing if the position or option is unknown.
    pub fn select_at(&mut self, position: Position, option: OptionId) -> Option<StudyFeedback> {
        let question = self.set.question(position)?;
        question.option(&option)?;
        self.ledger.record(position, option);
        self.revealed.insert(position);
        self.feedback(position)
    }

    #[must_use]
    pub fn selection(&self, position: Position) -> Option<&OptionId> {
        self.ledger.get(position)
    }

    /// Reveal the current question's answer.
    pub fn reveal(&mut self) -> Option<StudyFeedback> {
        let position = self.current_position()?;
        self.reveal_at(position)
    }

    pub fn reveal_at(&mut self, position: Position) -> Option<StudyFeedback> {
        if !self.set.contains(position) {
            return None;
        }
        self.revealed.insert(position);
        self.feedback(position)
    }

    /// Flip the revealed state; returns whether the question is now revealed.
    pub fn toggle_reveal(&mut self, position: Position) -> bool {
        if !self.set.contains(position) {
            return false;
        }
        if self.revealed.remove(&position) {
            false
        } else {
            self.revealed.insert(position);
            true
        }
    }

    #[must_use]
    pub fn is_revealed(&self, position: Position) -> bool {
        self.revealed.contains(&position)
    }

    /// Feedback for a revealed question, `None` while it is hidden.
    #[must_use]
    pub fn feedback(&self, position: Position) -> Option<StudyFeedback> {
        if !self.is_revealed(position) {
            return None;
        }
        let question = self.set.question(position)?;
        Some(StudyFeedback::build(
            position,
            question,
            self.ledger.get(position),
        ))
    }

    //
    // ─── NAVIGATION ───────────────────────────────────────────────────────────
    //

    pub fn next(&mut self) -> NavStep {
        self.navigator.advance()
    }

    pub fn previous(&mut self) -> NavStep {
        self.navigator.retreat()
    }

    /// Jump from the question picker; unknown positions are ignored.
    pub fn jump_to(&mut self, position: Position) -> bool {
        if !self.navigator.contains(position) {
            return false;
        }
        self.navigator.jump_to(position);
        true
    }

    /// Move to the first question of the next non-empty scenario.
    pub fn next_scenario(&mut self) -> bool {
        match self.navigator.next_scenario_start() {
            Some(position) => self.jump_to(position),
            None => false,
        }
    }

    /// Move to the first question of the previous non-empty scenario.
    pub fn previous_scenario(&mut self) -> bool {
        match self.navigator.previous_scenario_start() {
            Some(position) => self.jump_to(position),
            None => false,
        }
    }
}

pub(crate) fn picker_entries(
    set: &QuestionSet,
    ledger: &AnswerLedger,
    current: Option<Position>,
) -> Vec<PickerEntry> {
    set.positions()
        .into_iter()
        .enumerate()
        .map(|(index, position)| PickerEntry {
            position,
            number: index + 1,
            answered: ledger.is_answered(position),
            current: current == Some(position),
        })
        .collect()
}
