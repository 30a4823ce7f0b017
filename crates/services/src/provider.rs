use async_trait::async_trait;

use trivia_core::{Category, Question, QuestionRequest};

use crate::error::NetworkError;

/// Source of trivia categories and questions.
///
/// Implementations return entity-decoded text. No caching and no retry:
/// each call is exactly one request.
#[async_trait]
pub trait TriviaProvider: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, NetworkError>;

    async fn list_questions(&self, request: QuestionRequest)
    -> Result<Vec<Question>, NetworkError>;
}
