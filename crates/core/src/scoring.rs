use crate::ledger::AnswerLedger;
use crate::model::QuestionSet;

/// Outcome of comparing a ledger to the answer key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
    pub percentage: u32,
}

impl Score {
    #[must_use]
    pub fn new(correct: usize, total: usize) -> Self {
        Self {
            correct,
            total,
            percentage: percentage(correct, total),
        }
    }

    #[must_use]
    pub fn incorrect(&self) -> usize {
        self.total.saturating_sub(self.correct)
    }
}

/// Score every question of `set` in flattened order.
///
/// Unanswered questions count as incorrect.
#[must_use]
pub fn score(set: &QuestionSet, ledger: &AnswerLedger) -> Score {
    let mut total = 0_usize;
    let mut correct = 0_usize;
    for (position, question) in set.iter() {
        total += 1;
        if ledger
            .get(position)
            .is_some_and(|picked| question.is_correct(picked))
        {
            correct += 1;
        }
    }
    Score::new(correct, total)
}

/// `round(100 * correct / total)` with halves rounded up; `0` when `total` is `0`.
#[must_use]
pub fn percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total) as u64;
    let total = total as u64;
    let rounded = (200 * correct + total) / (2 * total);
    u32::try_from(rounded).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OptionId, OptionSet, Position, Question, QuestionDraft, Scenario};

    fn question(correct: &str) -> Question {
        QuestionDraft::new(
            format!("Pick {correct}"),
            OptionSet::Ordered(vec!["a".into(), "b".into(), "c".into()]),
            correct,
        )
        .validate()
        .unwrap()
    }

    fn flat(n: usize) -> QuestionSet {
        QuestionSet::Flat((0..n).map(|_| question("a")).collect())
    }

    #[test]
    fn empty_ledger_scores_zero() {
        let set = flat(4);
        let result = score(&set, &AnswerLedger::new());
        assert_eq!(result, Score::new(0, 4));
        assert_eq!(result.percentage, 0);
    }

    #[test]
    fn empty_set_scores_zero_percent() {
        let result = score(&QuestionSet::Flat(Vec::new()), &AnswerLedger::new());
        assert_eq!(result.total, 0);
        assert_eq!(result.percentage, 0);
    }

    #[test]
    fn all_correct_across_scenarios() {
        let set = QuestionSet::Scenarios(vec![
            Scenario::new("One", "first", vec![question("a"), question("b")]),
            Scenario::new("Two", "second", vec![question("c"), question("a")]),
        ]);
        let mut ledger = AnswerLedger::new();
        for (position, q) in set.iter() {
            ledger.record(position, q.correct_answer().clone());
        }

        let result = score(&set, &ledger);
        assert_eq!(
            result,
            Score {
                correct: 4,
                total: 4,
                percentage: 100
            }
        );
    }

    #[test]
    fn three_of_five_is_sixty_percent() {
        let set = flat(5);
        let mut ledger = AnswerLedger::new();
        for q in 0..3 {
            ledger.record(Position::new(0, q), OptionId::from("a"));
        }
        for q in 3..5 {
            ledger.record(Position::new(0, q), OptionId::from("b"));
        }

        let result = score(&set, &ledger);
        assert_eq!(result.correct, 3);
        assert_eq!(result.incorrect(), 2);
        assert_eq!(result.percentage, 60);
    }

    #[test]
    fn unanswered_counts_as_incorrect() {
        let set = flat(3);
        let mut ledger = AnswerLedger::new();
        ledger.record(Position::new(0, 0), OptionId::from("a"));
        ledger.record(Position::new(0, 1), OptionId::from("a"));

        let result = score(&set, &ledger);
        assert_eq!(result.correct, 2);
        assert_eq!(result.percentage, 67);
    }

    #[test]
    fn keyed_questions_score_against_the_key() {
        let keyed = QuestionDraft::new(
            "Which?",
            OptionSet::Keyed(vec![("A".into(), "Alpha".into()), ("B".into(), "Beta".into())]),
            "A",
        )
        .validate()
        .unwrap();
        let set = QuestionSet::Flat(vec![keyed.clone(), keyed]);
        let mut ledger = AnswerLedger::new();
        ledger.record(Position::new(0, 0), OptionId::from("A"));
        ledger.record(Position::new(0, 1), OptionId::from("Alpha"));

        assert_eq!(score(&set, &ledger).correct, 1);
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(5, 5), 100);
    }
}
