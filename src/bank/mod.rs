//! Question catalog
//!
//! The bank is an immutable, ordered catalog of category-tagged questions.
//! Sessions take private copies of subsets to shuffle and iterate, so the
//! catalog ordering is never disturbed. A separate [`BossSchedule`] keys
//! distinguished boss questions by chapter checkpoint.

pub mod builtin;

use std::collections::{HashMap, HashSet};

/// XP map key reserved for boss-encounter rewards
pub const BOSS_CATEGORY: &str = "Boss";

/// A single question/answer pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Category the question (and its XP) belongs to
    pub category: String,
    /// Prompt shown to the player
    pub prompt: String,
    /// Canonical answer, compared leniently
    pub answer: String,
}

impl Question {
    /// Create a new question
    pub fn new(
        category: impl Into<String>,
        prompt: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self { category: category.into(), prompt: prompt.into(), answer: answer.into() }
    }
}

/// The ordered, read-only question catalog
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Create a bank from an ordered list of questions
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Number of questions in the catalog
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the catalog holds no questions
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut list = Vec::new();
        for q in &self.questions {
            if seen.insert(q.category.as_str()) {
                list.push(q.category.as_str());
            }
        }
        list
    }

    /// Copy of the full catalog, in catalog order
    pub fn all(&self) -> Vec<Question> {
        self.questions.clone()
    }

    /// Copy of the questions whose category matches `category`
    /// (case-insensitive). May be empty.
    pub fn matching(&self, category: &str) -> Vec<Question> {
        self.questions
            .iter()
            .filter(|q| q.category.eq_ignore_ascii_case(category))
            .cloned()
            .collect()
    }
}

/// Boss questions keyed by chapter checkpoint
///
/// A checkpoint is the count of answered questions divided by the boss
/// interval; checkpoints without an entry simply have no encounter.
#[derive(Debug, Clone, Default)]
pub struct BossSchedule {
    bosses: HashMap<usize, Question>,
}

impl BossSchedule {
    /// Build a schedule from (checkpoint, question) pairs
    pub fn new(bosses: impl IntoIterator<Item = (usize, Question)>) -> Self {
        Self { bosses: bosses.into_iter().collect() }
    }

    /// The boss waiting at `checkpoint`, if any
    pub fn at_checkpoint(&self, checkpoint: usize) -> Option<&Question> {
        self.bosses.get(&checkpoint)
    }

    /// Whether any bosses are scheduled
    pub fn is_empty(&self) -> bool {
        self.bosses.is_empty()
    }
}
