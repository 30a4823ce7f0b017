use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use tracing::debug;

use trivia_core::{Category, CategoryId, Difficulty, Question, QuestionKind, QuestionRequest};

use crate::config::ProviderConfig;
use crate::error::{ConfigError, NetworkError};
use crate::provider::TriviaProvider;

/// Open Trivia DB client.
#[derive(Clone)]
pub struct OpenTdbClient {
    client: Client,
    config: ProviderConfig,
}

impl OpenTdbClient {
    /// # Errors
    ///
    /// Returns `ConfigError` if `TRIVIA_API_URL` is set to an unusable URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(ProviderConfig::from_env()?))
    }

    #[must_use]
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    async fn fetch_text(&self, request: RequestBuilder) -> Result<String, NetworkError> {
        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(NetworkError::Status(response.status()));
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl TriviaProvider for OpenTdbClient {
    async fn list_categories(&self) -> Result<Vec<Category>, NetworkError> {
        let url = self.config.categories_url().clone();
        debug!(%url, "fetching trivia categories");

        let body = self.fetch_text(self.client.get(url)).await?;
        parse_categories(&body)
    }

    async fn list_questions(
        &self,
        request: QuestionRequest,
    ) -> Result<Vec<Question>, NetworkError> {
        let url = self.config.questions_url().clone();
        let query = question_query(&request);
        debug!(%url, ?query, "fetching trivia questions");

        let body = self.fetch_text(self.client.get(url).query(&query)).await?;
        parse_questions(&body, request.difficulty)
    }
}

/// Query pairs for `api.php`. The count goes out exactly as typed.
fn question_query(request: &QuestionRequest) -> Vec<(&'static str, String)> {
    vec![
        ("amount", request.count.raw().to_string()),
        ("category", request.category_id.to_string()),
        ("difficulty", request.difficulty.as_str().to_string()),
    ]
}

fn parse_categories(body: &str) -> Result<Vec<Category>, NetworkError> {
    let list: CategoryListResponse = serde_json::from_str(body)?;
    Ok(list
        .trivia_categories
        .into_iter()
        .map(|item| Category::new(CategoryId::new(item.id), &item.name))
        .collect())
}

fn parse_questions(body: &str, requested: Difficulty) -> Result<Vec<Question>, NetworkError> {
    let list: QuestionListResponse = serde_json::from_str(body)?;
    if list.response_code != 0 {
        return Err(NetworkError::Rejected {
            code: list.response_code,
        });
    }

    Ok(list
        .results
        .into_iter()
        .map(|item| item.into_question(requested))
        .collect())
}

//
// ─── WIRE TYPES ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct CategoryListResponse {
    trivia_categories: Vec<CategoryItem>,
}

#[derive(Debug, Deserialize)]
struct CategoryItem {
    id: u32,
    name: String,
}

#[derive(Debug, Deserialize)]
struct QuestionListResponse {
    #[serde(default)]
    response_code: u8,
    #[serde(default)]
    results: Vec<QuestionItem>,
}

#[derive(Debug, Deserialize)]
struct QuestionItem {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    category: Option<String>,
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

impl QuestionItem {
    fn into_question(self, requested: Difficulty) -> Question {
        let question = Question::new(&self.question, &self.correct_answer, &self.incorrect_answers);
        let difficulty = self
            .difficulty
            .as_deref()
            .and_then(|raw| raw.parse::<Difficulty>().ok())
            .unwrap_or(requested);
        let kind = self
            .kind
            .as_deref()
            .and_then(|raw| raw.parse::<QuestionKind>().ok())
            .unwrap_or_else(|| question.kind());
        let category = self.category.unwrap_or_default();

        question.with_meta(category, difficulty, kind)
    }
}
