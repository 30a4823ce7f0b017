use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use trivia_core::{CategoryId, Question, SelectionParameters};

use crate::context::{UiApp, build_app_context};

use super::quiz::{QuizIntent, QuizPanel, use_quiz_state};
use super::test_harness::{StubProvider, drive_dom, drive_dom_async, test_app};

#[derive(Clone, Default)]
struct HarnessHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
}

impl HarnessHandles {
    fn dispatch(&self) -> Callback<QuizIntent> {
        self.dispatch
            .borrow()
            .clone()
            .expect("dispatch registered")
    }
}

impl PartialEq for HarnessHandles {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<dyn UiApp>,
    handles: HarnessHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizIntentRoot(props: HarnessProps) -> Element {
    use_context_provider(|| build_app_context(&props.app));
    rsx! { QuizIntentHarness { handles: props.handles.clone() } }
}

#[component]
fn QuizIntentHarness(handles: HarnessHandles) -> Element {
    let state = use_quiz_state();
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *handles.dispatch.borrow_mut() = Some(state.dispatch);
    }
    rsx! {
        QuizPanel { controller: state.controller, dispatch: state.dispatch }
    }
}

fn sample_questions() -> Vec<Question> {
    vec![
        Question::new("Who wrote &quot;Hamlet&quot;?", "Shakespeare", ["Dickens", "Austen", "Twain"]),
        Question::new("2+2?", "4", ["3", "5", "6"]),
    ]
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_intents_smoke_select_answer_finish_restart() {
    let provider = Arc::new(StubProvider {
        questions: sample_questions(),
        ..StubProvider::default()
    });
    let handles = HarnessHandles::default();
    let mut dom = VirtualDom::new_with_props(
        QuizIntentRoot,
        HarnessProps {
            app: test_app(&provider, SelectionParameters::default()),
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    drive_dom_async(&mut dom).await;

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Loading..."), "missing loading state in {html}");
    assert!(provider.requests.lock().unwrap().is_empty());

    let dispatch = handles.dispatch();

    dom.in_runtime(|| dispatch.call(QuizIntent::SetCategory(Some(CategoryId::new(9)))));
    drive_dom_async(&mut dom).await;
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Question 1 of 2"), "missing first question in {html}");
    assert_eq!(provider.requests.lock().unwrap().len(), 1);

    dom.in_runtime(|| dispatch.call(QuizIntent::Answer("Shakespeare".to_string())));
    drive_dom(&mut dom);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Question 2 of 2"), "did not advance in {html}");

    dom.in_runtime(|| dispatch.call(QuizIntent::Answer("3".to_string())));
    drive_dom(&mut dom);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Your score: 1 / 2"), "missing score in {html}");
    assert!(html.contains("Restart Quiz"), "missing restart button in {html}");

    // Answers after the end are ignored.
    dom.in_runtime(|| dispatch.call(QuizIntent::Answer("4".to_string())));
    drive_dom(&mut dom);
    assert!(dioxus_ssr::render(&dom).contains("Your score: 1 / 2"));

    dom.in_runtime(|| dispatch.call(QuizIntent::Restart));
    drive_dom(&mut dom);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Question 1 of 2"), "restart did not reset in {html}");
    assert!(!html.contains("Your score"), "score still shown in {html}");
    assert_eq!(provider.requests.lock().unwrap().len(), 1, "restart must not refetch");

    dom.in_runtime(|| dispatch.call(QuizIntent::SetQuestionCount("abc".to_string())));
    drive_dom_async(&mut dom).await;
    let requests = provider.requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].count.raw(), "abc");
    assert_eq!(requests[1].category_id, CategoryId::new(9));
}
