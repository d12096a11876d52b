use crate::model::position::Position;
use crate::model::question::Question;

/// A themed group of questions sharing one narrative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    title: String,
    narrative: String,
    questions: Vec<Question>,
}

impl Scenario {
    #[must_use]
    pub fn new(title: impl Into<String>, narrative: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            narrative: narrative.into(),
            questions,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn narrative(&self) -> &str {
        &self.narrative
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

/// Loaded question content for one session. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSet {
    Flat(Vec<Question>),
    Scenarios(Vec<Scenario>),
}

impl QuestionSet {
    #[must_use]
    pub fn is_scenario_set(&self) -> bool {
        matches!(self, QuestionSet::Scenarios(_))
    }

    /// Question count per scenario; a flat set reports a single group.
    #[must_use]
    pub fn scenario_lengths(&self) -> Vec<usize> {
        match self {
            QuestionSet::Flat(questions) => vec![questions.len()],
            QuestionSet::Scenarios(scenarios) => {
                scenarios.iter().map(|s| s.questions.len()).collect()
            }
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.scenario_lengths().iter().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Scenario metadata; `None` for flat sets.
    #[must_use]
    pub fn scenario(&self, index: usize) -> Option<&Scenario> {
        match self {
            QuestionSet::Flat(_) => None,
            QuestionSet::Scenarios(scenarios) => scenarios.get(index),
        }
    }

    #[must_use]
    pub fn questions_in(&self, scenario: usize) -> &[Question] {
        match self {
            QuestionSet::Flat(questions) if scenario == 0 => questions,
            QuestionSet::Flat(_) => &[],
            QuestionSet::Scenarios(scenarios) => scenarios
                .get(scenario)
                .map(|s| s.questions.as_slice())
                .unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn question(&self, position: Position) -> Option<&Question> {
        self.questions_in(position.scenario())
            .get(position.question())
    }

    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.question(position).is_some()
    }

    /// Every question paired with its position, in flattened order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Question)> + '_ {
        let groups = match self {
            QuestionSet::Flat(questions) => vec![questions.as_slice()],
            QuestionSet::Scenarios(scenarios) => {
                scenarios.iter().map(|s| s.questions.as_slice()).collect()
            }
        };
        groups.into_iter().enumerate().flat_map(|(s, questions)| {
            questions
                .iter()
                .enumerate()
                .map(move |(q, question)| (Position::new(s, q), question))
        })
    }

    #[must_use]
    pub fn positions(&self) -> Vec<Position> {
        self.iter().map(|(position, _)| position).collect()
    }

    /// 1-based number of `position` in flattened order.
    ///
    /// Sums the real length of every earlier scenario, so scenarios of any
    /// size number correctly.
    #[must_use]
    pub fn question_number(&self, position: Position) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }
        let before: usize = self
            .scenario_lengths()
            .iter()
            .take(position.scenario())
            .sum();
        Some(before + position.question() + 1)
    }
}
