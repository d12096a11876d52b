use std::sync::Arc;

use chrono::{DateTime, Utc};
use quiz_core::model::{OptionId, Position, Question, QuestionSet, Scenario};
use quiz_core::{AnswerLedger, Clock, Countdown, NavStep, Score, SessionNavigator, TickOutcome};

use super::progress::{PickerEntry, SessionProgress};
use super::study::picker_entries;

/// How an exam came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// The learner pressed "Finish".
    Submitted,
    /// The countdown ran out.
    TimeUp,
}

/// One reviewed question in the results list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
    pub position: Position,
    pub number: usize,
    pub prompt: String,
    /// Label of the chosen option; `None` when unanswered.
    pub chosen: Option<String>,
    pub correct: String,
    pub is_correct: bool,
    pub explanation: Option<String>,
}

/// Scored summary of a finished exam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamReport {
    pub score: Score,
    pub reason: FinishReason,
    pub elapsed_secs: u32,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub rows: Vec<ReviewRow>,
}

impl ExamReport {
    /// Rows the learner got wrong or skipped.
    #[must_use]
    pub fn missed(&self) -> impl Iterator<Item = &ReviewRow> {
        self.rows.iter().filter(|row| !row.is_correct)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Finished {
    reason: FinishReason,
    at: DateTime<Utc>,
}

/// Timed exam over one question set.
///
/// Correctness stays hidden until the session finishes, either explicitly or
/// when the whole-session countdown expires. Once finished, every mutating
/// call is ignored until `restart`.
#[derive(Debug, Clone)]
pub struct ExamSession {
    set: Arc<QuestionSet>,
    navigator: SessionNavigator,
    ledger: AnswerLedger,
    countdown: Countdown,
    clock: Clock,
    started_at: DateTime<Utc>,
    finished: Option<Finished>,
}

impl ExamSession {
    /// Start an exam; the countdown budget is one minute per question.
    #[must_use]
    pub fn new(set: Arc<QuestionSet>, clock: Clock) -> Self {
        let navigator = SessionNavigator::for_set(&set);
        let countdown = Countdown::for_questions(set.total());
        Self {
            set,
            navigator,
            ledger: AnswerLedger::new(),
            countdown,
            clock,
            started_at: clock.now(),
            finished: None,
        }
    }

    #[must_use]
    pub fn set(&self) -> &QuestionSet {
        &self.set
    }

    #[must_use]
    pub fn navigator(&self) -> &SessionNavigator {
        &self.navigator
    }

    #[must_use]
    pub fn ledger(&self) -> &AnswerLedger {
        &self.ledger
    }

    #[must_use]
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    /// Running and with questions to answer; the countdown only ticks while active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.is_finished() && !self.set.is_empty()
    }

    #[must_use]
    pub fn finish_reason(&self) -> Option<FinishReason> {
        self.finished.map(|finished| finished.reason)
    }

    #[must_use]
    pub fn current_position(&self) -> Option<Position> {
        self.navigator.current()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current_position()
            .and_then(|position| self.set.question(position))
    }

    #[must_use]
    pub fn current_scenario(&self) -> Option<&Scenario> {
        self.current_position()
            .and_then(|position| self.set.scenario(position.scenario()))
    }

    #[must_use]
    pub fn selection(&self, position: Position) -> Option<&OptionId> {
        self.ledger.get(position)
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.navigator.total(),
            answered: self.ledger.len(),
            current_number: self.navigator.question_number(),
        }
    }

    #[must_use]
    pub fn picker(&self) -> Vec<PickerEntry> {
        picker_entries(&self.set, &self.ledger, self.current_position())
    }

    /// Record an answer for the current question. Returns whether it was recorded.
    pub fn select(&mut self, option: OptionId) -> bool {
        if self.is_finished() {
            return false;
        }
        let Some(position) = self.current_position() else {
            return false;
        };
        let known = self
            .set
            .question(position)
            .is_some_and(|question| question.option(&option).is_some());
        if known {
            self.ledger.record(position, option);
        }
        known
    }

    /// Advance one question. Moving past the last question does not finish the exam.
    pub fn next(&mut self) -> NavStep {
        if self.is_finished() {
            return NavStep::End;
        }
        self.navigator.advance()
    }

    pub fn previous(&mut self) -> NavStep {
        if self.is_finished() {
            return NavStep::Start;
        }
        self.navigator.retreat()
    }

    pub fn jump_to(&mut self, position: Position) -> bool {
        if self.is_finished() || !self.navigator.contains(position) {
            return false;
        }
        self.navigator.jump_to(position);
        true
    }

    /// Consume one second. Expiry finishes the session with `FinishReason::TimeUp`.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_active() {
            return TickOutcome::Inactive;
        }
        let outcome = self.countdown.tick();
        if outcome == TickOutcome::Expired {
            tracing::info!(answered = self.ledger.len(), "exam time is up");
            self.finish_with(FinishReason::TimeUp);
        }
        outcome
    }

    /// Submit the exam. Returns `false` if it had already finished.
    pub fn finish(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.finish_with(FinishReason::Submitted);
        true
    }

    /// Clear answers and start over from the first question with a full budget.
    pub fn restart(&mut self) {
        self.ledger.clear();
        self.navigator.reset();
        self.countdown.reset();
        self.started_at = self.clock.now();
        self.finished = None;
    }

    /// Results, available once the exam has finished.
    #[must_use]
    pub fn report(&self) -> Option<ExamReport> {
        let finished = self.finished?;
        let rows = self
            .set
            .iter()
            .enumerate()
            .map(|(index, (position, question))| {
                let chosen = self.ledger.get(position);
                ReviewRow {
                    position,
                    number: index + 1,
                    prompt: question.prompt().to_owned(),
                    chosen: chosen.map(|id| {
                        question
                            .option(id)
                            .map_or_else(|| id.to_string(), |option| option.label.clone())
                    }),
                    correct: question.correct_option().label.clone(),
                    is_correct: chosen.is_some_and(|id| question.is_correct(id)),
                    explanation: question.explanation().map(str::to_owned),
                }
            })
            .collect();

        Some(ExamReport {
            score: quiz_core::score(&self.set, &self.ledger),
            reason: finished.reason,
            elapsed_secs: self.countdown.elapsed(),
            started_at: self.started_at,
            finished_at: finished.at,
            rows,
        })
    }

    fn finish_with(&mut self, reason: FinishReason) {
        let score = quiz_core::score(&self.set, &self.ledger);
        tracing::info!(
            ?reason,
            correct = score.correct,
            total = score.total,
            percentage = score.percentage,
            "exam finished"
        );
        self.finished = Some(Finished {
            reason,
            at: self.clock.now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{OptionSet, QuestionDraft};
    use quiz_core::time::{fixed_clock, fixed_now};

    fn question(prompt: &str, correct: &str) -> Question {
        QuestionDraft::new(
            prompt,
            OptionSet::Ordered(vec!["Yes".into(), "No".into()]),
            correct,
        )
        .with_explanation(format!("{prompt} is {correct}."))
        .validate()
        .unwrap()
    }

    fn exam(count: usize) -> ExamSession {
        let questions = (0..count)
            .map(|i| question(&format!("Q{}", i + 1), if i % 2 == 0 { "Yes" } else { "No" }))
            .collect();
        ExamSession::new(Arc::new(QuestionSet::Flat(questions)), fixed_clock())
    }

    #[test]
    fn expires_after_budget_and_force_finishes() {
        let mut session = exam(2);
        for _ in 0..119 {
            assert!(matches!(session.tick(), TickOutcome::Running { .. }));
        }
        assert_eq!(session.tick(), TickOutcome::Expired);
        assert_eq!(session.finish_reason(), Some(FinishReason::TimeUp));
        assert_eq!(session.tick(), TickOutcome::Inactive);

        let report = session.report().unwrap();
        assert_eq!(report.elapsed_secs, 120);
        assert_eq!(report.score.correct, 0);
    }

    #[test]
    fn next_at_last_question_does_not_finish() {
        let mut session = exam(2);
        assert!(matches!(session.next(), NavStep::Moved(_)));
        assert_eq!(session.next(), NavStep::End);
        assert!(!session.is_finished());
        assert!(session.report().is_none());
    }

    #[test]
    fn scores_and_reports_every_question() {
        let mut session = exam(3);
        assert!(session.select(OptionId::from("Yes")));
        session.next();
        assert!(session.select(OptionId::from("Yes")));
        session.tick();
        session.tick();
        assert!(session.finish());

        let report = session.report().unwrap();
        assert_eq!(report.reason, FinishReason::Submitted);
        assert_eq!(report.score.correct, 1);
        assert_eq!(report.score.total, 3);
        assert_eq!(report.score.percentage, 33);
        assert_eq!(report.elapsed_secs, 2);
        assert_eq!(report.finished_at, fixed_now());

        assert_eq!(report.rows.len(), 3);
        assert!(report.rows[0].is_correct);
        assert_eq!(report.rows[1].chosen.as_deref(), Some("Yes"));
        assert_eq!(report.rows[1].correct, "No");
        assert_eq!(report.rows[2].chosen, None);
        assert_eq!(report.missed().count(), 2);
        assert_eq!(report.rows[2].explanation.as_deref(), Some("Q3 is Yes."));
    }

    #[test]
    fn operations_after_finish_are_ignored() {
        let mut session = exam(2);
        session.finish();
        assert!(!session.finish());
        assert!(!session.select(OptionId::from("Yes")));
        assert_eq!(session.next(), NavStep::End);
        assert!(!session.jump_to(Position::new(0, 1)));
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn restart_clears_answers_and_countdown() {
        let mut session = exam(2);
        session.select(OptionId::from("Yes"));
        session.next();
        session.tick();
        session.finish();

        session.restart();
        assert!(!session.is_finished());
        assert!(session.ledger().is_empty());
        assert_eq!(session.current_position(), Some(Position::start()));
        assert_eq!(session.countdown().remaining(), 120);
    }

    #[test]
    fn unknown_option_is_rejected() {
        let mut session = exam(1);
        assert!(!session.select(OptionId::from("Maybe")));
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn empty_exam_never_ticks() {
        let mut session = exam(0);
        assert!(!session.is_active());
        assert_eq!(session.tick(), TickOutcome::Inactive);
        assert!(session.current_question().is_none());
    }
}
