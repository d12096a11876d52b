use services::{ExamReport, FinishReason};

use super::time_fmt::{format_countdown, format_datetime};

/// Circumference of the score ring drawn on the results page.
pub const RING_CIRCUMFERENCE: u32 = 440;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRowVm {
    pub number: usize,
    pub prompt: String,
    pub chosen: String,
    pub correct: String,
    pub is_correct: bool,
    pub explanation: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub percentage: u32,
    pub summary: String,
    pub reason: &'static str,
    pub elapsed: String,
    pub finished_at: String,
    /// `stroke-dashoffset` of the score ring.
    pub ring_offset: u32,
    pub rows: Vec<ResultRowVm>,
}

#[must_use]
pub fn map_exam_report(report: &ExamReport) -> ResultsVm {
    let percentage = report.score.percentage.min(100);
    ResultsVm {
        percentage,
        summary: format!(
            "{} out of {} correct",
            report.score.correct, report.score.total
        ),
        reason: match report.reason {
            FinishReason::Submitted => "Submitted",
            FinishReason::TimeUp => "Time is up",
        },
        elapsed: format_countdown(report.elapsed_secs),
        finished_at: format_datetime(report.finished_at),
        ring_offset: RING_CIRCUMFERENCE - RING_CIRCUMFERENCE * percentage / 100,
        rows: report
            .rows
            .iter()
            .map(|row| ResultRowVm {
                number: row.number,
                prompt: row.prompt.clone(),
                chosen: row.chosen.clone().unwrap_or_else(|| "Unanswered".to_owned()),
                correct: row.correct.clone(),
                is_correct: row.is_correct,
                explanation: row.explanation.clone(),
            })
            .collect(),
    }
}
