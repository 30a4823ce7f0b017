use services::QuizController;
use trivia_core::{CategoryId, Difficulty};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    /// 1-based position for display.
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub choices: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreVm {
    pub score: usize,
    pub total: usize,
}

/// What the quiz area shows below the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    /// No questions yet (no category, fetch pending, failed, or empty result).
    Loading,
    Question(QuestionVm),
    Finished(ScoreVm),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryOptionVm {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionVm {
    pub question_count: String,
    pub difficulty: Difficulty,
    /// Empty string when no category is chosen.
    pub category_value: String,
    pub categories: Vec<CategoryOptionVm>,
}

#[must_use]
pub fn map_quiz_screen(controller: &QuizController) -> QuizScreen {
    let session = controller.session();
    if session.is_empty() {
        return QuizScreen::Loading;
    }
    if session.is_finished() {
        return QuizScreen::Finished(ScoreVm {
            score: session.score(),
            total: session.len(),
        });
    }

    match session.current_question() {
        Some(question) => QuizScreen::Question(QuestionVm {
            number: session.current_index() + 1,
            total: session.len(),
            prompt: question.prompt().to_owned(),
            choices: controller.answer_choices().to_vec(),
        }),
        None => QuizScreen::Loading,
    }
}

#[must_use]
pub fn map_selection(controller: &QuizController) -> SelectionVm {
    let selection = controller.selection();
    SelectionVm {
        question_count: selection.question_count().raw().to_owned(),
        difficulty: selection.difficulty(),
        category_value: selection
            .category_id()
            .map(|id| id.to_string())
            .unwrap_or_default(),
        categories: controller
            .categories()
            .iter()
            .map(|category| CategoryOptionVm {
                value: category.id().to_string(),
                label: category.name().to_owned(),
            })
            .collect(),
    }
}

/// `<select>` value to category; the placeholder option (`""`) means none.
#[must_use]
pub fn category_from_value(value: &str) -> Option<CategoryId> {
    value.parse::<CategoryId>().ok()
}
