mod components;
mod exam;
mod results;
mod selector;
mod state;
mod study;
mod theme_toggle;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use exam::ExamView;
pub use results::ExamResults;
pub use selector::SelectorView;
pub use state::{ViewError, ViewState};
pub use study::StudyView;
pub use theme_toggle::ThemeToggle;
