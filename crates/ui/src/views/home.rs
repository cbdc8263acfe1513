use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;

const QUESTION_CHOICES: [u32; 4] = [5, 10, 15, 20];

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut num_questions = use_signal(|| ctx.default_question_count());

    rsx! {
        div { class: "page home-page",
            header { class: "view-header",
                h2 { class: "view-title", "Ready to play?" }
                p { class: "view-subtitle",
                    "Pick how many questions you want and see how you score."
                }
            }
            div { class: "home-form",
                label { class: "home-label", r#for: "num-questions", "Number of questions" }
                select {
                    class: "home-select",
                    id: "num-questions",
                    value: "{num_questions()}",
                    onchange: move |evt| {
                        if let Ok(value) = evt.value().parse::<u32>() {
                            num_questions.set(value);
                        }
                    },
                    for choice in QUESTION_CHOICES {
                        option { value: "{choice}", "{choice} Questions" }
                    }
                }
                button {
                    class: "btn btn-primary",
                    id: "start-quiz",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Quiz {
                            num_questions: num_questions(),
                        });
                    },
                    "Start Quiz"
                }
            }
        }
    }
}
