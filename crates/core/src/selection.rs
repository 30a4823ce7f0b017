use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::{CategoryId, Difficulty};

/// Question count used until the user picks one.
pub const DEFAULT_QUESTION_COUNT: u32 = 10;

/// Raw question-count input, kept exactly as entered.
///
/// The setter never validates and the text is sent to the provider as typed.
/// [`QuestionCount::amount`] interprets it for callers that need a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionCount(String);

impl QuestionCount {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Positive integer value, if the input holds one.
    #[must_use]
    pub fn amount(&self) -> Option<u32> {
        self.0.trim().parse::<u32>().ok().filter(|n| *n > 0)
    }
}

impl Default for QuestionCount {
    fn default() -> Self {
        Self::from(DEFAULT_QUESTION_COUNT)
    }
}

impl From<u32> for QuestionCount {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for QuestionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Snapshot of the parameters for one question fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRequest {
    pub category_id: CategoryId,
    pub count: QuestionCount,
    pub difficulty: Difficulty,
}

/// User-chosen category, question count and difficulty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionParameters {
    category_id: Option<CategoryId>,
    question_count: QuestionCount,
    difficulty: Difficulty,
}

impl SelectionParameters {
    #[must_use]
    pub fn category_id(&self) -> Option<CategoryId> {
        self.category_id
    }

    #[must_use]
    pub fn question_count(&self) -> &QuestionCount {
        &self.question_count
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_category(&mut self, category_id: Option<CategoryId>) {
        self.category_id = category_id;
    }

    pub fn set_question_count(&mut self, count: impl Into<QuestionCount>) {
        self.question_count = count.into();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// The fetch these parameters describe, or `None` until a category is chosen.
    #[must_use]
    pub fn request(&self) -> Option<QuestionRequest> {
        self.category_id.map(|category_id| QuestionRequest {
            category_id,
            count: self.question_count.clone(),
            difficulty: self.difficulty,
        })
    }
}

impl From<String> for QuestionCount {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for QuestionCount {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
