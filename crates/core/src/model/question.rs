use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::model::Difficulty;
use crate::text::decode_entities;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid question type: {0:?}")]
pub struct ParseQuestionKindError(pub String);

//
// ─── QUESTION KIND ────────────────────────────────────────────────────────────
//

/// Answer format of a question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// One correct answer among several (usually four) choices.
    #[default]
    Multiple,
    /// True / False.
    Boolean,
}

impl FromStr for QuestionKind {
    type Err = ParseQuestionKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "multiple" => Ok(QuestionKind::Multiple),
            "boolean" => Ok(QuestionKind::Boolean),
            other => Err(ParseQuestionKindError(other.to_string())),
        }
    }
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A single trivia question.
///
/// All text is stored entity-decoded: `Question::new` runs every field through
/// [`decode_entities`], so no `&quot;`-style references survive construction.
/// Deserialization goes through the same constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredQuestion")]
pub struct Question {
    prompt: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
    category: String,
    difficulty: Difficulty,
    kind: QuestionKind,
}

impl Question {
    #[must_use]
    pub fn new<S: AsRef<str>>(
        prompt: impl AsRef<str>,
        correct_answer: impl AsRef<str>,
        incorrect_answers: impl IntoIterator<Item = S>,
    ) -> Self {
        let incorrect_answers: Vec<String> = incorrect_answers
            .into_iter()
            .map(|answer| decode_entities(answer.as_ref()))
            .collect();
        let kind = if incorrect_answers.len() == 1 {
            QuestionKind::Boolean
        } else {
            QuestionKind::Multiple
        };

        Self {
            prompt: decode_entities(prompt.as_ref()),
            correct_answer: decode_entities(correct_answer.as_ref()),
            incorrect_answers,
            category: String::new(),
            difficulty: Difficulty::default(),
            kind,
        }
    }

    /// Attach the provider metadata that travels with each question.
    #[must_use]
    pub fn with_meta(
        mut self,
        category: impl AsRef<str>,
        difficulty: Difficulty,
        kind: QuestionKind,
    ) -> Self {
        self.category = decode_entities(category.as_ref());
        self.difficulty = difficulty;
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn incorrect_answers(&self) -> &[String] {
        &self.incorrect_answers
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    /// Exact string comparison against the correct answer.
    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }

    /// Incorrect answers followed by the correct one.
    #[must_use]
    pub fn answers(&self) -> Vec<&str> {
        self.incorrect_answers
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.correct_answer.as_str()))
            .collect()
    }
}

#[derive(Deserialize)]
struct StoredQuestion {
    prompt: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
    #[serde(default)]
    category: String,
    #[serde(default)]
    difficulty: Difficulty,
    #[serde(default)]
    kind: Option<QuestionKind>,
}

impl From<StoredQuestion> for Question {
    fn from(stored: StoredQuestion) -> Self {
        let question = Question::new(
            stored.prompt,
            stored.correct_answer,
            stored.incorrect_answers,
        );
        let kind = stored.kind.unwrap_or(question.kind);
        question.with_meta(stored.category, stored.difficulty, kind)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
