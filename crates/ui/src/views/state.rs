use services::QuizLoadError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The chosen question file does not exist.
    MissingQuestions,
    /// The file exists but could not be read or contains invalid questions.
    LoadFailed,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::MissingQuestions => {
                "These questions are not available. Check the data directory."
            }
            ViewError::LoadFailed => "The questions could not be loaded. Please try again.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<&QuizLoadError> for ViewError {
    fn from(err: &QuizLoadError) -> Self {
        match err {
            QuizLoadError::Missing(_) => ViewError::MissingQuestions,
            QuizLoadError::Storage(_) => ViewError::LoadFailed,
            _ => ViewError::Unknown,
        }
    }
}

/// Progress of the selector's question-set load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Error(ViewError),
}

impl ViewState {
    #[must_use]
    pub fn is_loading(self) -> bool {
        matches!(self, ViewState::Loading)
    }

    #[must_use]
    pub fn error(self) -> Option<ViewError> {
        match self {
            ViewState::Error(err) => Some(err),
            _ => None,
        }
    }
}
