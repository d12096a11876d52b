use std::sync::Arc;

use quiz_core::model::{OptionId, Position, QuestionSet};
use quiz_core::TickOutcome;
use services::{Clock, ExamSession, PickerEntry};

use super::question_vm::{QuestionCardVm, ScenarioVm, map_options, progress_label};
use super::results_vm::{ResultsVm, map_exam_report};
use super::time_fmt::format_countdown;

/// Remaining time at or below which the timer is highlighted.
pub const URGENT_SECS: u32 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExamIntent {
    Select(OptionId),
    Next,
    Previous,
    Jump(Position),
    Finish,
    Restart,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimerVm {
    pub label: String,
    pub urgent: bool,
}

pub struct ExamVm {
    session: ExamSession,
}

impl ExamVm {
    #[must_use]
    pub fn new(set: Arc<QuestionSet>, clock: Clock) -> Self {
        Self {
            session: ExamSession::new(set, clock),
        }
    }

    pub fn apply(&mut self, intent: ExamIntent) {
        match intent {
            ExamIntent::Select(option) => {
                self.session.select(option);
            }
            ExamIntent::Next => {
                self.session.next();
            }
            ExamIntent::Previous => {
                self.session.previous();
            }
            ExamIntent::Jump(position) => {
                self.session.jump_to(position);
            }
            ExamIntent::Finish => {
                self.session.finish();
            }
            ExamIntent::Restart => self.session.restart(),
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.session.tick()
    }

    /// The countdown should be running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    #[must_use]
    pub fn timer(&self) -> TimerVm {
        let remaining = self.session.countdown().remaining();
        TimerVm {
            label: format_countdown(remaining),
            urgent: remaining <= URGENT_SECS,
        }
    }

    #[must_use]
    pub fn scenario(&self) -> Option<ScenarioVm> {
        self.session.current_scenario().map(ScenarioVm::from)
    }

    /// Current question; correctness is never shown while the exam runs.
    #[must_use]
    pub fn card(&self) -> Option<QuestionCardVm> {
        let position = self.session.current_position()?;
        let question = self.session.current_question()?;
        let progress = self.session.progress();
        Some(QuestionCardVm {
            position,
            title: format!(
                "Question {} of {}",
                progress.current_number, progress.total
            ),
            prompt: question.prompt().to_owned(),
            options: map_options(question, self.session.selection(position), false),
            revealed: false,
            feedback: None,
        })
    }

    #[must_use]
    pub fn picker(&self) -> Vec<PickerEntry> {
        self.session.picker()
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        progress_label(self.session.progress())
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.session.current_position().is_some() && !self.session.navigator().is_first()
    }

    /// On the last question the "Next" button turns into "Finish Exam".
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.session.navigator().is_last()
    }

    #[must_use]
    pub fn answered_label(&self) -> String {
        let progress = self.session.progress();
        format!("{} of {} answered", progress.answered, progress.total)
    }

    #[must_use]
    pub fn results(&self) -> Option<ResultsVm> {
        self.session.report().as_ref().map(map_exam_report)
    }
}
