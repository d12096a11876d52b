use std::collections::HashMap;

use crate::model::{OptionId, Position};

/// The learner's selections for one session.
///
/// Upsert-only while the session runs; `clear` is reserved for restart.
/// Recording does not check the answer key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerLedger {
    entries: HashMap<Position, OptionId>,
}

impl AnswerLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `option` for `position`, replacing any earlier pick.
    pub fn record(&mut self, position: Position, option: OptionId) {
        self.entries.insert(position, option);
    }

    /// `None` means unanswered.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&OptionId> {
        self.entries.get(&position)
    }

    #[must_use]
    pub fn is_answered(&self, position: Position) -> bool {
        self.entries.contains_key(&position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &OptionId)> + '_ {
        self.entries.iter().map(|(position, option)| (*position, option))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let mut ledger = AnswerLedger::new();
        let position = Position::new(1, 2);

        ledger.record(position, OptionId::from("A"));
        assert_eq!(ledger.get(position), Some(&OptionId::from("A")));

        ledger.record(position, OptionId::from("C"));
        assert_eq!(ledger.get(position), Some(&OptionId::from("C")));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn absent_positions_are_unanswered() {
        let mut ledger = AnswerLedger::new();
        ledger.record(Position::start(), OptionId::from("x"));

        assert!(ledger.get(Position::new(0, 1)).is_none());
        assert!(!ledger.is_answered(Position::new(0, 1)));

        ledger.clear();
        assert!(ledger.is_empty());
    }
}
