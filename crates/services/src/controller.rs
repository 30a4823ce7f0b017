use rand::rng;
use rand::seq::SliceRandom;
use tracing::{debug, info, warn};

use trivia_core::{
    AnswerOutcome, Category, CategoryId, Difficulty, Question, QuestionCount, QuestionRequest,
    QuizSession, SelectionParameters,
};

use crate::error::NetworkError;
use crate::provider::TriviaProvider;

/// A question fetch issued by the controller.
///
/// The generation orders tickets: only the most recently issued one may start
/// a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    request: QuestionRequest,
}

impl FetchTicket {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn request(&self) -> &QuestionRequest {
        &self.request
    }
}

/// What `apply_questions` did with a fetch result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Started { count: usize },
    /// A newer fetch was issued after this one; the result was dropped.
    Stale,
    /// The fetch failed; the previous session is untouched.
    Failed,
}

/// Owns the quiz state: selection, category list, active session.
///
/// Parameter setters return a [`FetchTicket`] describing the request the
/// caller should run; results are fed back through
/// [`QuizController::apply_questions`].
#[derive(Debug, Clone, Default)]
pub struct QuizController {
    selection: SelectionParameters,
    categories: Vec<Category>,
    session: QuizSession,
    choices: Vec<Vec<String>>,
    generation: u64,
    shuffle_answers: bool,
}

impl QuizController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_shuffle_answers(mut self, shuffle_answers: bool) -> Self {
        self.shuffle_answers = shuffle_answers;
        self
    }

    /// Start from preselected parameters (e.g. from the command line).
    #[must_use]
    pub fn with_selection(mut self, selection: SelectionParameters) -> Self {
        self.selection = selection;
        self
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionParameters {
        &self.selection
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Generation of the most recently issued fetch (0 before any).
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_category(&mut self, category_id: Option<CategoryId>) -> Option<FetchTicket> {
        self.selection.set_category(category_id);
        self.issue()
    }

    pub fn set_question_count(&mut self, count: impl Into<QuestionCount>) -> Option<FetchTicket> {
        self.selection.set_question_count(count);
        self.issue()
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Option<FetchTicket> {
        self.selection.set_difficulty(difficulty);
        self.issue()
    }

    /// Issue a fetch for the current parameters without changing them.
    pub fn refresh(&mut self) -> Option<FetchTicket> {
        self.issue()
    }

    fn issue(&mut self) -> Option<FetchTicket> {
        let request = self.selection.request()?;
        self.generation += 1;
        debug!(generation = self.generation, ?request, "issuing question fetch");
        Some(FetchTicket {
            generation: self.generation,
            request,
        })
    }

    /// Replace the category list, or keep the old one on failure.
    pub fn apply_categories(&mut self, result: Result<Vec<Category>, NetworkError>) {
        match result {
            Ok(categories) => {
                debug!(count = categories.len(), "categories loaded");
                self.categories = categories;
            }
            Err(err) => warn!(error = %err, "error fetching categories"),
        }
    }

    /// Start a session from a fetch result if it is still the latest.
    pub fn apply_questions(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<Question>, NetworkError>,
    ) -> ApplyOutcome {
        if ticket.generation < self.generation {
            debug!(
                generation = ticket.generation,
                latest = self.generation,
                "dropping stale question fetch"
            );
            return ApplyOutcome::Stale;
        }

        match result {
            Ok(questions) => {
                let count = questions.len();
                let shuffle = self.shuffle_answers;
                info!(count, category = %ticket.request.category_id, "starting quiz session");
                self.choices = questions
                    .iter()
                    .map(|question| {
                        let mut answers: Vec<String> =
                            question.answers().into_iter().map(str::to_owned).collect();
                        if shuffle {
                            answers.shuffle(&mut rng());
                        }
                        answers
                    })
                    .collect();
                self.session.start(questions);
                ApplyOutcome::Started { count }
            }
            Err(err) => {
                warn!(error = %err, generation = ticket.generation, "error fetching questions");
                ApplyOutcome::Failed
            }
        }
    }

    pub fn submit_answer(&mut self, answer: &str) -> AnswerOutcome {
        let outcome = self.session.submit_answer(answer);
        if let AnswerOutcome::Recorded { finished: true, .. } = outcome {
            let progress = self.session.progress();
            info!(score = progress.score, total = progress.total, "quiz finished");
        }
        outcome
    }

    pub fn restart(&mut self) {
        self.session.restart();
    }

    /// Answer buttons for the current question, in display order.
    #[must_use]
    pub fn answer_choices(&self) -> &[String] {
        if self.session.current_question().is_none() {
            return &[];
        }
        self.choices
            .get(self.session.current_index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Run the fetch a ticket describes.
///
/// # Errors
///
/// Returns `NetworkError` from the provider unchanged.
pub async fn fetch_questions(
    provider: &dyn TriviaProvider,
    ticket: &FetchTicket,
) -> Result<Vec<Question>, NetworkError> {
    provider.list_questions(ticket.request().clone()).await
}
