use serde::{Deserialize, Serialize};
use std::fmt;

/// Location of one question inside a question set.
///
/// Flat sets always use scenario index `0`. Ordering follows the flattened
/// sequence: every question of scenario 0, then scenario 1, and so on.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    scenario: usize,
    question: usize,
}

impl Position {
    #[must_use]
    pub const fn new(scenario: usize, question: usize) -> Self {
        Self { scenario, question }
    }

    /// The first question of a flat set or of the first scenario.
    #[must_use]
    pub const fn start() -> Self {
        Self::new(0, 0)
    }

    #[must_use]
    pub const fn scenario(&self) -> usize {
        self.scenario
    }

    #[must_use]
    pub const fn question(&self) -> usize {
        self.question
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}-{})", self.scenario, self.question)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.scenario, self.question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_scenario_then_question() {
        let mut positions = vec![
            Position::new(1, 0),
            Position::new(0, 2),
            Position::new(0, 0),
            Position::new(1, 1),
        ];
        positions.sort();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(0, 2),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    fn displays_as_compound_key() {
        assert_eq!(Position::new(2, 5).to_string(), "2-5");
    }
}
