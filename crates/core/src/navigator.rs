use crate::model::{Position, QuestionSet};

/// Result of moving the cursor one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavStep {
    Moved(Position),
    /// `advance` past the last question; the cursor did not move.
    End,
    /// `retreat` before the first question; the cursor did not move.
    Start,
}

/// Cursor over the flattened question sequence of one session.
///
/// Crosses scenario boundaries transparently and skips scenarios without
/// questions. Never wraps around.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionNavigator {
    lengths: Vec<usize>,
    current: Position,
}

impl SessionNavigator {
    /// Build a navigator from per-scenario question counts.
    #[must_use]
    pub fn new(lengths: Vec<usize>) -> Self {
        let mut navigator = Self {
            lengths,
            current: Position::start(),
        };
        navigator.reset();
        navigator
    }

    #[must_use]
    pub fn for_set(set: &QuestionSet) -> Self {
        Self::new(set.scenario_lengths())
    }

    /// Move back to the first question.
    pub fn reset(&mut self) {
        self.current = self
            .first_in(0..self.lengths.len())
            .map_or(Position::start(), |s| Position::new(s, 0));
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.lengths.iter().sum()
    }

    #[must_use]
    pub fn scenario_count(&self) -> usize {
        self.lengths.len()
    }

    /// Current position, or `None` when the set has no questions.
    #[must_use]
    pub fn current(&self) -> Option<Position> {
        self.contains(self.current).then_some(self.current)
    }

    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.lengths
            .get(position.scenario())
            .is_some_and(|len| position.question() < *len)
    }

    pub fn advance(&mut self) -> NavStep {
        if self.current().is_none() {
            return NavStep::End;
        }
        let scenario = self.current.scenario();
        let next = self.current.question() + 1;
        if next < self.lengths[scenario] {
            self.current = Position::new(scenario, next);
            return NavStep::Moved(self.current);
        }
        match self.first_in(scenario + 1..self.lengths.len()) {
            Some(s) => {
                self.current = Position::new(s, 0);
                NavStep::Moved(self.current)
            }
            None => NavStep::End,
        }
    }

    pub fn retreat(&mut self) -> NavStep {
        if self.current().is_none() {
            return NavStep::Start;
        }
        let scenario = self.current.scenario();
        if let Some(previous) = self.current.question().checked_sub(1) {
            self.current = Position::new(scenario, previous);
            return NavStep::Moved(self.current);
        }
        match self.last_in(0..scenario) {
            Some(s) => {
                self.current = Position::new(s, self.lengths[s] - 1);
                NavStep::Moved(self.current)
            }
            None => NavStep::Start,
        }
    }

    /// Set the cursor directly, e.g. from the question picker.
    ///
    /// # Panics
    ///
    /// Panics if `position` does not name a question of this session.
    pub fn jump_to(&mut self, position: Position) {
        assert!(
            self.contains(position),
            "jump_to({position:?}) is outside the session"
        );
        self.current = position;
    }

    /// First question of the next non-empty scenario, if any.
    #[must_use]
    pub fn next_scenario_start(&self) -> Option<Position> {
        self.first_in(self.current.scenario() + 1..self.lengths.len())
            .map(|s| Position::new(s, 0))
    }

    /// First question of the previous non-empty scenario, if any.
    #[must_use]
    pub fn previous_scenario_start(&self) -> Option<Position> {
        self.last_in(0..self.current.scenario())
            .map(|s| Position::new(s, 0))
    }

    /// 1-based linear index of the cursor; `0` for an empty session.
    #[must_use]
    pub fn question_number(&self) -> usize {
        self.number_of(self.current).unwrap_or(0)
    }

    /// 1-based linear index of any position in this session.
    #[must_use]
    pub fn number_of(&self, position: Position) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }
        let before: usize = self.lengths[..position.scenario()].iter().sum();
        Some(before + position.question() + 1)
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current().is_some() && self.question_number() == 1
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current().is_some() && self.question_number() == self.total()
    }

    fn first_in(&self, mut range: std::ops::Range<usize>) -> Option<usize> {
        range.find(|s| self.lengths[*s] > 0)
    }

    fn last_in(&self, range: std::ops::Range<usize>) -> Option<usize> {
        range.rev().find(|s| self.lengths[*s] > 0)
    }
}
