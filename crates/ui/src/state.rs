use std::sync::Arc;

use dioxus::prelude::*;
use quiz_core::model::{PracticeMode, QuestionSet, QuestionSetKind, Theme};

/// The question set picked in the selector, handed to the study or exam view.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveQuiz {
    pub kind: QuestionSetKind,
    pub mode: PracticeMode,
    pub set: Arc<QuestionSet>,
}

/// Shell-level state shared by every route.
#[derive(Clone, Copy)]
pub struct AppState {
    pub theme: Signal<Theme>,
    /// Set once the learner toggles; the stored preference no longer applies.
    pub theme_touched: Signal<bool>,
    pub active: Signal<Option<ActiveQuiz>>,
}

impl AppState {
    /// Drop the loaded set; views rebuild their sessions from scratch next time.
    pub fn discard_quiz(mut self) {
        self.active.set(None);
    }

    /// Flip the theme on the learner's request and return the new value.
    pub fn toggle_theme(mut self) -> Theme {
        let next = self.theme.peek().toggled();
        self.theme.set(next);
        self.theme_touched.set(true);
        next
    }

    /// Apply the persisted theme unless the learner already chose one.
    pub fn apply_stored_theme(mut self, stored: Theme) {
        if !*self.theme_touched.peek() {
            self.theme.set(stored);
        }
    }
}

/// Create the shell state and provide it to descendants.
pub fn use_app_state_provider(initial: Option<ActiveQuiz>) -> AppState {
    use_context_provider(move || AppState {
        theme: Signal::new(Theme::default()),
        theme_touched: Signal::new(false),
        active: Signal::new(initial),
    })
}

#[must_use]
pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}
