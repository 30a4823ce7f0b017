mod category;
mod difficulty;
mod ids;
mod question;

pub use ids::CategoryId;

pub use category::Category;
pub use difficulty::{Difficulty, ParseDifficultyError};
pub use question::{ParseQuestionKindError, Question, QuestionKind};
