use std::sync::Arc;

use dioxus::prelude::*;
use tracing::debug;

use services::{FetchTicket, QuizController, fetch_questions};
use trivia_core::{CategoryId, Difficulty};

use crate::context::AppContext;
use crate::vm::{
    QuestionVm, QuizScreen, SelectionVm, category_from_value, map_quiz_screen, map_selection,
};

/// User actions the quiz screen reacts to.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum QuizIntent {
    SetQuestionCount(String),
    SetDifficulty(Difficulty),
    SetCategory(Option<CategoryId>),
    Answer(String),
    Restart,
}

#[derive(Clone, Copy)]
pub(crate) struct QuizState {
    pub controller: Signal<QuizController>,
    pub dispatch: Callback<QuizIntent>,
}

/// Owns the controller signal and turns intents into controller calls.
///
/// Parameter changes spawn the fetch their ticket describes; results are
/// applied back through the controller so stale ones are dropped.
pub(crate) fn use_quiz_state() -> QuizState {
    let ctx = use_context::<AppContext>();
    let mut controller = use_signal(|| ctx.new_controller());

    let fetch_provider = ctx.provider();
    let run_fetch = use_callback(move |ticket: FetchTicket| {
        let provider = Arc::clone(&fetch_provider);
        spawn(async move {
            let result = fetch_questions(provider.as_ref(), &ticket).await;
            let outcome = controller.write().apply_questions(&ticket, result);
            debug!(generation = ticket.generation(), ?outcome, "question fetch resolved");
        });
    });

    let categories_provider = ctx.provider();
    use_hook(move || {
        spawn(async move {
            let result = categories_provider.list_categories().await;
            controller.write().apply_categories(result);
        });
        let ticket = controller.write().refresh();
        if let Some(ticket) = ticket {
            run_fetch.call(ticket);
        }
    });

    let dispatch = use_callback(move |intent: QuizIntent| {
        let ticket = match intent {
            QuizIntent::SetQuestionCount(raw) => controller.write().set_question_count(raw),
            QuizIntent::SetDifficulty(difficulty) => controller.write().set_difficulty(difficulty),
            QuizIntent::SetCategory(category_id) => controller.write().set_category(category_id),
            QuizIntent::Answer(answer) => {
                controller.write().submit_answer(&answer);
                None
            }
            QuizIntent::Restart => {
                controller.write().restart();
                None
            }
        };
        if let Some(ticket) = ticket {
            run_fetch.call(ticket);
        }
    });

    QuizState {
        controller,
        dispatch,
    }
}

#[component]
pub fn QuizView() -> Element {
    let state = use_quiz_state();
    rsx! {
        QuizPanel { controller: state.controller, dispatch: state.dispatch }
    }
}

#[component]
pub(crate) fn QuizPanel(
    controller: Signal<QuizController>,
    dispatch: Callback<QuizIntent>,
) -> Element {
    let selection = map_selection(&controller.read());
    let screen = map_quiz_screen(&controller.read());

    rsx! {
        div { class: "page",
            div { class: "quiz-card",
                h1 { "Quiz App" }

                SelectionForm {
                    selection,
                    on_count_change: move |raw: String| {
                        dispatch.call(QuizIntent::SetQuestionCount(raw));
                    },
                    on_difficulty_change: move |difficulty: Difficulty| {
                        dispatch.call(QuizIntent::SetDifficulty(difficulty));
                    },
                    on_category_change: move |category_id: Option<CategoryId>| {
                        dispatch.call(QuizIntent::SetCategory(category_id));
                    },
                }

                match screen {
                    QuizScreen::Loading => rsx! {
                        p { class: "quiz-loading", "Loading..." }
                    },
                    QuizScreen::Question(question) => rsx! {
                        QuestionCard {
                            question,
                            on_answer: move |answer: String| dispatch.call(QuizIntent::Answer(answer)),
                        }
                    },
                    QuizScreen::Finished(score) => rsx! {
                        ScoreCard {
                            score: score.score,
                            total: score.total,
                            on_restart: move |()| dispatch.call(QuizIntent::Restart),
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn SelectionForm(
    selection: SelectionVm,
    on_count_change: EventHandler<String>,
    on_difficulty_change: EventHandler<Difficulty>,
    on_category_change: EventHandler<Option<CategoryId>>,
) -> Element {
    let current_difficulty = selection.difficulty;
    let current_category = selection.category_value.clone();

    rsx! {
        div { class: "quiz-field",
            label { r#for: "numQuestions", "Number of Questions:" }
            input {
                id: "numQuestions",
                class: "quiz-input",
                r#type: "number",
                value: "{selection.question_count}",
                oninput: move |evt| on_count_change.call(evt.value()),
            }
        }

        div { class: "quiz-field",
            label { r#for: "difficulty", "Select Difficulty:" }
            select {
                id: "difficulty",
                class: "quiz-input",
                value: "{current_difficulty}",
                onchange: move |evt| {
                    // Options only carry valid values.
                    if let Ok(difficulty) = evt.value().parse::<Difficulty>() {
                        on_difficulty_change.call(difficulty);
                    }
                },
                for difficulty in Difficulty::ALL {
                    option {
                        value: "{difficulty}",
                        selected: difficulty == current_difficulty,
                        "{difficulty.label()}"
                    }
                }
            }
        }

        div { class: "quiz-field",
            label { r#for: "category", "Select Category:" }
            select {
                id: "category",
                class: "quiz-input",
                value: "{current_category}",
                onchange: move |evt| on_category_change.call(category_from_value(&evt.value())),
                option { value: "", "Select your category" }
                for category in selection.categories.clone() {
                    option {
                        key: "{category.value}",
                        value: "{category.value}",
                        selected: category.value == current_category,
                        "{category.label}"
                    }
                }
            }
        }
    }
}

#[component]
fn QuestionCard(question: QuestionVm, on_answer: EventHandler<String>) -> Element {
    rsx! {
        div { class: "quiz-question",
            h2 { "Question {question.number} of {question.total}" }
            p { class: "quiz-prompt", "{question.prompt}" }
            div { class: "quiz-answers",
                for (index, choice) in question.choices.clone().into_iter().enumerate() {
                    AnswerButton { key: "{index}", answer: choice, on_answer }
                }
            }
        }
    }
}

#[component]
fn AnswerButton(answer: String, on_answer: EventHandler<String>) -> Element {
    let submitted = answer.clone();
    rsx! {
        button {
            class: "quiz-answer",
            r#type: "button",
            onclick: move |_| on_answer.call(submitted.clone()),
            "{answer}"
        }
    }
}

#[component]
fn ScoreCard(score: usize, total: usize, on_restart: EventHandler<()>) -> Element {
    rsx! {
        div { class: "quiz-score",
            h2 { "Your score: {score} / {total}" }
            button {
                class: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_restart.call(()),
                "Restart Quiz"
            }
        }
    }
}
