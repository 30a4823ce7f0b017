use trivia_core::{CategoryId, Difficulty, Question, SelectionParameters};

use super::test_harness::{StubProvider, setup_view_harness};

fn sample_questions() -> Vec<Question> {
    vec![
        Question::new("Who wrote &quot;Hamlet&quot;?", "Shakespeare", ["Dickens", "Austen", "Twain"]),
        Question::new("2+2?", "4", ["3", "5", "6"]),
    ]
}

fn preselected(category: u32) -> SelectionParameters {
    let mut selection = SelectionParameters::default();
    selection.set_category(Some(CategoryId::new(category)));
    selection.set_question_count(2_u32);
    selection.set_difficulty(Difficulty::Easy);
    selection
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_form_and_loading() {
    let mut harness = setup_view_harness(StubProvider::default(), SelectionParameters::default());
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Quiz App"), "missing title in {html}");
    assert!(html.contains("Number of Questions:"), "missing count field in {html}");
    assert!(html.contains("Select your category"), "missing placeholder in {html}");
    assert!(html.contains("General Knowledge"), "missing category in {html}");
    assert!(html.contains("Cartoon"), "missing second category in {html}");
    assert!(!html.contains("&amp;amp;"), "category rendered still encoded in {html}");
    assert!(html.contains("Loading..."), "missing loading state in {html}");
    assert!(harness.provider.requests.lock().unwrap().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question_for_preselected_category() {
    let provider = StubProvider {
        questions: sample_questions(),
        ..StubProvider::default()
    };
    let mut harness = setup_view_harness(provider, preselected(9));
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Question 1 of 2"), "missing progress in {html}");
    assert!(html.contains("Hamlet"), "missing prompt in {html}");
    assert!(html.contains("Dickens"), "missing choice in {html}");
    assert!(html.contains("Shakespeare"), "missing correct choice in {html}");
    assert!(!html.contains("Loading..."), "should not be loading in {html}");

    let requests = harness.provider.requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].category_id, CategoryId::new(9));
    assert_eq!(requests[0].count.raw(), "2");
    assert_eq!(requests[0].difficulty, Difficulty::Easy);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_stays_loading_when_provider_fails() {
    let provider = StubProvider {
        fail: true,
        ..StubProvider::default()
    };
    let mut harness = setup_view_harness(provider, preselected(9));
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Loading..."), "missing loading state in {html}");
    assert!(!html.contains("General Knowledge"), "unexpected category in {html}");
    assert!(!html.contains("Something went wrong"), "errors are not surfaced in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_empty_result_never_shows_question_one_of_zero() {
    let mut harness = setup_view_harness(StubProvider::default(), preselected(9));
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(!html.contains("of 0"), "rendered an empty question in {html}");
    assert!(!html.contains("Your score"), "empty session should not finish in {html}");
    assert!(html.contains("Loading..."), "missing loading state in {html}");
}
