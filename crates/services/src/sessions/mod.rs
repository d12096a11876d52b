mod exam;
mod progress;
mod study;

// Public API of the session subsystem.
pub use exam::{ExamReport, ExamSession, FinishReason, ReviewRow};
pub use progress::{PickerEntry, SessionProgress};
pub use study::{RationaleEntry, StudyFeedback, StudyLayout, StudySession};
