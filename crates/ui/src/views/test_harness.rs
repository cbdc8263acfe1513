use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use services::{ApiError, QuizBackend, QuizLoopService, StartedQuiz};
use trivia_core::model::{
    AnswerVerdict, Difficulty, Question, ResultsSummary, SessionId,
};

use crate::context::{UiApp, build_app_context};
use crate::views::quiz::QuizTestHandles;
use crate::views::{HomeView, QuizView, ResultsView};

//
// ─── STUB BACKEND ──────────────────────────────────────────────────────────────
//

/// Scripted backend for view tests: option 0 of every question is the
/// correct answer, and failures can be injected per call.
pub struct StubBackend {
    questions: Vec<Question>,
    summary: ResultsSummary,
    fail_start: bool,
    fail_results: bool,
    fail_next_submit: AtomicBool,
}

impl StubBackend {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            summary: ResultsSummary {
                score: 0,
                total: 0,
                percentage: 0.0,
                answers: Vec::new(),
            },
            fail_start: false,
            fail_results: false,
            fail_next_submit: AtomicBool::new(false),
        }
    }

    pub fn with_summary(mut self, summary: ResultsSummary) -> Self {
        self.summary = summary;
        self
    }

    pub fn failing_start(mut self) -> Self {
        self.fail_start = true;
        self
    }

    pub fn failing_results(mut self) -> Self {
        self.fail_results = true;
        self
    }

    pub fn fail_next_submit(self) -> Self {
        self.fail_next_submit.store(true, Ordering::SeqCst);
        self
    }

    fn server_error() -> ApiError {
        ApiError::HttpStatus(reqwest::StatusCode::INTERNAL_SERVER_ERROR)
    }
}

#[async_trait]
impl QuizBackend for StubBackend {
    async fn start_quiz(&self, _num_questions: u32) -> Result<StartedQuiz, ApiError> {
        if self.fail_start {
            return Err(Self::server_error());
        }
        Ok(StartedQuiz {
            session_id: SessionId::new("ui-session"),
            questions: self.questions.clone(),
        })
    }

    async fn submit_answer(
        &self,
        _session_id: &SessionId,
        question_index: usize,
        answer: &str,
    ) -> Result<AnswerVerdict, ApiError> {
        if self.fail_next_submit.swap(false, Ordering::SeqCst) {
            return Err(Self::server_error());
        }
        let correct_answer = self.questions[question_index]
            .option(0)
            .unwrap_or_default()
            .to_string();
        Ok(AnswerVerdict {
            is_correct: answer == correct_answer,
            correct_answer,
        })
    }

    async fn fetch_results(&self, _session_id: &SessionId) -> Result<ResultsSummary, ApiError> {
        if self.fail_results {
            return Err(Self::server_error());
        }
        Ok(self.summary.clone())
    }
}

pub fn build_questions(count: usize) -> Vec<Question> {
    (1..=count)
        .map(|n| {
            Question::new(
                "General Knowledge",
                Difficulty::Easy,
                format!("Question text {n}"),
                vec![
                    format!("Right {n}"),
                    format!("Wrong A{n}"),
                    format!("Wrong B{n}"),
                    format!("Wrong C{n}"),
                ],
            )
        })
        .collect()
}

//
// ─── VIEW HARNESS ──────────────────────────────────────────────────────────────
//

#[derive(Clone)]
struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for TestApp {
    fn default_question_count(&self) -> u32 {
        5
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Quiz(u32),
    Results(String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    quiz_handles: Option<QuizTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    if let Some(handles) = props.quiz_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Quiz(num_questions) => rsx! { QuizView { num_questions } },
        ViewKind::Results(session_id) => rsx! { ResultsView { session_id } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub quiz_handles: Option<QuizTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn dispatch(&mut self, intent: crate::vm::QuizIntent) {
        let handles = self
            .quiz_handles
            .clone()
            .expect("quiz handles registered");
        self.dom.in_runtime(|| handles.dispatch().call(intent));
        drive_dom(&mut self.dom);
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, backend: Arc<dyn QuizBackend>) -> ViewHarness {
    let quiz_loop = Arc::new(QuizLoopService::new(backend));
    let quiz_handles = match view {
        ViewKind::Quiz(_) => Some(QuizTestHandles::default()),
        _ => None,
    };

    let app = Arc::new(TestApp { quiz_loop });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            quiz_handles: quiz_handles.clone(),
        },
    );

    ViewHarness { dom, quiz_handles }
}
