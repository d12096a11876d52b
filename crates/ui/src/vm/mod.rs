mod exam_vm;
mod question_vm;
mod results_vm;
mod study_vm;
mod time_fmt;

pub use exam_vm::{ExamIntent, ExamVm, TimerVm, URGENT_SECS};
pub use question_vm::{
    FeedbackVm, OptionTone, OptionVm, QuestionCardVm, RationaleVm, ScenarioVm, progress_label,
};
pub use results_vm::{RING_CIRCUMFERENCE, ResultRowVm, ResultsVm, map_exam_report};
pub use study_vm::{StudyIntent, StudyVm};
pub use time_fmt::{format_countdown, format_datetime};
