/// Seconds granted per question in an exam.
pub const SECONDS_PER_QUESTION: u32 = 60;

/// What a single one-second tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Running { remaining: u32 },
    /// This tick consumed the last second.
    Expired,
    /// The countdown was already at zero or the session is not active.
    Inactive,
}

/// Whole-session time budget for an exam.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    budget: u32,
    remaining: u32,
}

impl Countdown {
    #[must_use]
    pub fn new(budget_secs: u32) -> Self {
        Self {
            budget: budget_secs,
            remaining: budget_secs,
        }
    }

    /// `question_count × SECONDS_PER_QUESTION`.
    #[must_use]
    pub fn for_questions(question_count: usize) -> Self {
        let count = u32::try_from(question_count).unwrap_or(u32::MAX);
        Self::new(count.saturating_mul(SECONDS_PER_QUESTION))
    }

    pub fn tick(&mut self) -> TickOutcome {
        match self.remaining {
            0 => TickOutcome::Inactive,
            1 => {
                self.remaining = 0;
                TickOutcome::Expired
            }
            n => {
                self.remaining = n - 1;
                TickOutcome::Running {
                    remaining: self.remaining,
                }
            }
        }
    }

    pub fn reset(&mut self) {
        self.remaining = self.budget;
    }

    #[must_use]
    pub fn budget(&self) -> u32 {
        self.budget
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn elapsed(&self) -> u32 {
        self.budget - self.remaining
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }
}
