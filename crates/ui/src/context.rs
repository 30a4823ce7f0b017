use std::sync::Arc;

use services::{QuizController, TriviaProvider};
use trivia_core::SelectionParameters;

pub trait UiApp: Send + Sync {
    fn provider(&self) -> Arc<dyn TriviaProvider>;

    fn shuffle_answers(&self) -> bool {
        false
    }

    /// Parameters the form starts with. A preselected category fetches on launch.
    fn initial_selection(&self) -> SelectionParameters {
        SelectionParameters::default()
    }
}

#[derive(Clone)]
pub struct AppContext {
    provider: Arc<dyn TriviaProvider>,
    shuffle_answers: bool,
    initial_selection: SelectionParameters,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            provider: app.provider(),
            shuffle_answers: app.shuffle_answers(),
            initial_selection: app.initial_selection(),
        }
    }

    #[must_use]
    pub fn provider(&self) -> Arc<dyn TriviaProvider> {
        Arc::clone(&self.provider)
    }

    /// Fresh controller configured from the launch options.
    #[must_use]
    pub fn new_controller(&self) -> QuizController {
        QuizController::new()
            .with_shuffle_answers(self.shuffle_answers)
            .with_selection(self.initial_selection.clone())
    }
}

/// Build the `AppContext` that the binary installs above `App`.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
