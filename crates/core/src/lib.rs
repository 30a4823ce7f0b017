#![forbid(unsafe_code)]

pub mod model;
pub mod quiz;
pub mod selection;
pub mod text;

pub use model::{
    Category, CategoryId, Difficulty, ParseDifficultyError, ParseQuestionKindError, Question,
    QuestionKind,
};
pub use quiz::{AnswerOutcome, QuizProgress, QuizSession};
pub use selection::{QuestionCount, QuestionRequest, SelectionParameters};
pub use text::decode_entities;
