use dioxus::prelude::*;
use dioxus_router::use_navigator;

use trivia_core::model::SessionId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{AnswerReviewVm, ResultsVm, map_results};

#[component]
pub fn ResultsView(session_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz_loop = ctx.quiz_loop();

    let session_id_for_resource = session_id.clone();
    let resource = use_resource(move || {
        let quiz_loop = quiz_loop.clone();
        let session_id = SessionId::new(session_id_for_resource.clone());

        async move {
            let summary = quiz_loop
                .fetch_results(&session_id)
                .await
                .map_err(|_| ViewError::Unknown)?;

            Ok::<_, ViewError>(map_results(&summary))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page results-page",
            header { class: "view-header",
                h2 { class: "view-title", "Quiz Results" }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    div { class: "loading",
                        div { class: "spinner" }
                        p { "Loading results..." }
                    }
                },
                ViewState::Error(err) => rsx! {
                    // No silent fallback: stay here until a retry succeeds.
                    div { class: "notice notice--error",
                        p { "{err.message()}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                let mut resource = resource;
                                resource.restart();
                            },
                            "Retry"
                        }
                    }
                },
                ViewState::Ready(data) => rsx! {
                    ResultsDetails { results: data.clone() }
                    button {
                        class: "btn btn-primary",
                        id: "play-again",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = navigator.push(Route::Home {});
                        },
                        "Play Again"
                    }
                },
            }
        }
    }
}

#[component]
fn ResultsDetails(results: ResultsVm) -> Element {
    rsx! {
        div { class: "score-card",
            span { class: "score-emoji", "{results.emoji}" }
            p { class: "score-line",
                span { class: "score-value", "{results.score}" }
                " / "
                span { class: "score-total", "{results.total}" }
            }
            p { class: "score-percentage", "{results.percentage_label}" }
        }
        div { class: "answers-review",
            for review in results.reviews.clone() {
                ReviewCard { review }
            }
        }
    }
}

#[component]
fn ReviewCard(review: AnswerReviewVm) -> Element {
    rsx! {
        div { class: "{review.card_class}",
            p { class: "review-question", "{review.heading}" }
            p { class: "review-answer",
                strong { "Your answer: " }
                "{review.user_answer}"
            }
            if let Some(correct) = review.correct_answer.clone() {
                p { class: "review-answer review-answer--correct",
                    strong { "Correct answer: " }
                    "{correct}"
                }
            }
            span { class: "{review.status_class}", "{review.status_label}" }
        }
    }
}
