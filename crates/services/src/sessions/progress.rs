use quiz_core::model::Position;

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    /// 1-based number of the current question; `0` for an empty session.
    pub current_number: usize,
}

impl SessionProgress {
    #[must_use]
    pub fn unanswered(&self) -> usize {
        self.total.saturating_sub(self.answered)
    }
}

/// One cell of the question picker grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerEntry {
    pub position: Position,
    pub number: usize,
    pub answered: bool,
    pub current: bool,
}
