use std::sync::{Arc, Mutex};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{NetworkError, TriviaProvider};
use trivia_core::{Category, CategoryId, Question, QuestionRequest, SelectionParameters};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;

/// Canned provider; `fail` makes every call error out.
#[derive(Default)]
pub struct StubProvider {
    pub questions: Vec<Question>,
    pub fail: bool,
    pub requests: Mutex<Vec<QuestionRequest>>,
}

#[async_trait::async_trait]
impl TriviaProvider for StubProvider {
    async fn list_categories(&self) -> Result<Vec<Category>, NetworkError> {
        if self.fail {
            return Err(NetworkError::Rejected { code: 5 });
        }
        Ok(vec![
            Category::new(CategoryId::new(9), "General Knowledge"),
            Category::new(CategoryId::new(32), "Entertainment: Cartoon &amp; Animations"),
        ])
    }

    async fn list_questions(
        &self,
        request: QuestionRequest,
    ) -> Result<Vec<Question>, NetworkError> {
        self.requests.lock().unwrap().push(request);
        if self.fail {
            return Err(NetworkError::Rejected { code: 2 });
        }
        Ok(self.questions.clone())
    }
}

struct TestApp {
    provider: Arc<StubProvider>,
    selection: SelectionParameters,
}

impl UiApp for TestApp {
    fn provider(&self) -> Arc<dyn TriviaProvider> {
        self.provider.clone()
    }

    fn initial_selection(&self) -> SelectionParameters {
        self.selection.clone()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<dyn UiApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    use_context_provider(|| build_app_context(&props.app));
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub provider: Arc<StubProvider>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        drive_dom_async(&mut self.dom).await;
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

/// Let spawned fetches resolve and re-render after each round.
pub async fn drive_dom_async(dom: &mut VirtualDom) {
    for _ in 0..4 {
        let _ = tokio::time::timeout(std::time::Duration::from_millis(50), dom.wait_for_work())
            .await;
        dom.render_immediate(&mut NoOpMutations);
        dom.process_events();
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn test_app(provider: &Arc<StubProvider>, selection: SelectionParameters) -> Arc<dyn UiApp> {
    Arc::new(TestApp {
        provider: Arc::clone(provider),
        selection,
    })
}

pub fn setup_view_harness(provider: StubProvider, selection: SelectionParameters) -> ViewHarness {
    let provider = Arc::new(provider);
    let app = test_app(&provider, selection);

    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app });

    ViewHarness { dom, provider }
}
