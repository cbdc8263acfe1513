use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{HomeView, QuizView, ResultsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz/:num_questions", QuizView)] Quiz { num_questions: u32 },
        #[route("/results/:session_id", ResultsView)] Results { session_id: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "app-header",
                h1 { "Trivia" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
