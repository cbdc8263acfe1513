use std::sync::Arc;

use trivia_core::model::{AnswerReview, ResultsSummary};

use super::test_harness::{StubBackend, ViewKind, build_questions, setup_view_harness};
use crate::vm::QuizIntent;

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_start_controls() {
    let backend = Arc::new(StubBackend::new(Vec::new()));
    let mut harness = setup_view_harness(ViewKind::Home, backend);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Number of questions"), "missing label in {html}");
    assert!(html.contains("5 Questions"), "missing default choice in {html}");
    assert!(html.contains("Start Quiz"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let backend = Arc::new(StubBackend::new(build_questions(2)));
    let mut harness = setup_view_harness(ViewKind::Quiz(2), backend);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Question 1 of 2"), "missing header in {html}");
    assert!(html.contains("General Knowledge"), "missing category in {html}");
    assert!(html.contains("Easy"), "missing difficulty in {html}");
    assert!(html.contains("Question text 1"), "missing question in {html}");
    assert!(html.contains("Right 1"), "missing option in {html}");
    assert!(html.contains("Submit Answer"), "missing submit in {html}");
    assert!(html.contains("disabled"), "submit should start disabled in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_selection_enables_submit() {
    let backend = Arc::new(StubBackend::new(build_questions(2)));
    let mut harness = setup_view_harness(ViewKind::Quiz(2), backend);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    harness.dispatch(QuizIntent::Select(1));
    let html = harness.render();
    assert!(html.contains("option--selected"), "missing selection in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_marks_verdict_and_switches_continue_label() {
    let backend = Arc::new(StubBackend::new(build_questions(2)));
    let mut harness = setup_view_harness(ViewKind::Quiz(2), backend);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    // Answer the first question wrong: option 0 is always correct.
    harness.dispatch(QuizIntent::Select(1));
    harness.dispatch(QuizIntent::Submit);
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("option--correct"), "missing correct mark in {html}");
    assert!(html.contains("option--incorrect"), "missing incorrect mark in {html}");
    assert!(html.contains("Next Question"), "missing continue in {html}");
    assert!(!html.contains("Submit Answer"), "submit should be gone in {html}");

    // Advance to the last question: the continue control must read
    // "View Results" once it is answered.
    harness.dispatch(QuizIntent::Advance);
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Question 2 of 2"), "missing second question in {html}");
    assert!(html.contains("Submit Answer"), "submit should be back in {html}");

    harness.dispatch(QuizIntent::Select(0));
    harness.dispatch(QuizIntent::Submit);
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("View Results"), "missing results label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_error_state_on_failed_start() {
    let backend = Arc::new(StubBackend::new(Vec::new()).failing_start());
    let mut harness = setup_view_harness(ViewKind::Quiz(5), backend);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
    assert!(html.contains("Back to Home"), "missing home link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_failed_submit_keeps_question_answerable() {
    let backend = Arc::new(StubBackend::new(build_questions(1)).fail_next_submit());
    let mut harness = setup_view_harness(ViewKind::Quiz(1), backend);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    harness.dispatch(QuizIntent::Select(0));
    harness.dispatch(QuizIntent::Submit);
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Dismiss"), "missing dismiss in {html}");
    assert!(html.contains("Submit Answer"), "submit should remain in {html}");
    assert!(html.contains("option--selected"), "selection should survive in {html}");

    // Manual retry succeeds and locks the options.
    harness.dispatch(QuizIntent::Submit);
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("option--correct"), "missing correct mark in {html}");
    assert!(html.contains("View Results"), "missing results label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_summary_and_review() {
    let summary = ResultsSummary {
        score: 3,
        total: 5,
        percentage: 60.0,
        answers: vec![
            AnswerReview {
                question_number: 1,
                question: "Q1".into(),
                user_answer: "A".into(),
                correct_answer: "A".into(),
                is_correct: true,
            },
            AnswerReview {
                question_number: 2,
                question: "Q2".into(),
                user_answer: "B".into(),
                correct_answer: "C".into(),
                is_correct: false,
            },
        ],
    };
    let backend = Arc::new(StubBackend::new(Vec::new()).with_summary(summary));
    let mut harness = setup_view_harness(ViewKind::Results("abc".into()), backend);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Quiz Results"), "missing title in {html}");
    assert!(html.contains("60%"), "missing percentage in {html}");
    assert!(html.contains("😊"), "missing band emoji in {html}");
    assert!(html.contains("1. Q1"), "missing first review in {html}");
    assert!(html.contains("Your answer:"), "missing user answer in {html}");
    assert!(html.contains("Correct answer:"), "missing correction in {html}");
    assert!(html.contains("✓ Correct"), "missing correct badge in {html}");
    assert!(html.contains("✗ Incorrect"), "missing incorrect badge in {html}");
    assert!(html.contains("Play Again"), "missing restart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_empty_review_without_error() {
    let summary = ResultsSummary {
        score: 0,
        total: 0,
        percentage: 0.0,
        answers: Vec::new(),
    };
    let backend = Arc::new(StubBackend::new(Vec::new()).with_summary(summary));
    let mut harness = setup_view_harness(ViewKind::Results("abc".into()), backend);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Quiz Results"), "missing title in {html}");
    assert!(!html.contains("answer-card"), "review should be empty in {html}");
    assert!(!html.contains("Something went wrong"), "unexpected error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_error_state_with_retry() {
    let backend = Arc::new(StubBackend::new(Vec::new()).failing_results());
    let mut harness = setup_view_harness(ViewKind::Results("abc".into()), backend);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
    assert!(!html.contains("Play Again"), "should stay on error in {html}");
}
