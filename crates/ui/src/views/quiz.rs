use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{OptionRowVm, QuizIntent, QuizOutcome, QuizVm, start_quiz};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LastAction {
    StartQuiz,
    Submit,
}

#[component]
pub fn QuizView(num_questions: u32) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz_loop = ctx.quiz_loop();

    let error = use_signal(|| None::<ViewError>);
    let vm = use_signal(|| None::<QuizVm>);
    let last_action = use_signal(|| None::<LastAction>);

    let quiz_loop_for_resource = quiz_loop.clone();
    let resource = use_resource(move || {
        let quiz_loop = quiz_loop_for_resource.clone();
        let mut error = error;
        let mut vm = vm;
        let mut last_action = last_action;

        async move {
            last_action.set(Some(LastAction::StartQuiz));
            let started = start_quiz(&quiz_loop, num_questions).await?;
            vm.set(Some(started));
            error.set(None);
            Ok::<_, ViewError>(())
        }
    });

    let state = view_state_from_resource(&resource);

    let dispatch = {
        let quiz_loop = quiz_loop.clone();
        use_callback(move |intent: QuizIntent| {
            let mut error = error;
            let mut vm = vm;
            let mut last_action = last_action;

            match intent {
                QuizIntent::Select(index) => {
                    if let Some(vm) = vm.write().as_mut() {
                        vm.select_option(index);
                    }
                }
                QuizIntent::Submit => {
                    let quiz_loop = quiz_loop.clone();
                    spawn(async move {
                        last_action.set(Some(LastAction::Submit));
                        // Take the session out while the request is in flight so
                        // no other intent can touch it.
                        let mut local_vm = {
                            let mut guard = vm.write();
                            guard.take()
                        };

                        let Some(mut vm_value) = local_vm.take() else {
                            error.set(Some(ViewError::Unknown));
                            return;
                        };

                        let result = vm_value.submit_current(&quiz_loop).await;

                        // Always put the session back so the question stays
                        // answerable after a failed submit.
                        {
                            let mut guard = vm.write();
                            *guard = Some(vm_value);
                        }

                        match result {
                            Ok(()) => error.set(None),
                            Err(err) => error.set(Some(err)),
                        }
                    });
                }
                QuizIntent::Advance => {
                    let outcome = {
                        let mut guard = vm.write();
                        guard.as_mut().map(QuizVm::advance)
                    };
                    match outcome {
                        Some(Ok(QuizOutcome::Continue)) => error.set(None),
                        Some(Ok(QuizOutcome::Completed { session_id })) => {
                            let _ = navigator.push(Route::Results {
                                session_id: session_id.to_string(),
                            });
                        }
                        Some(Err(err)) => error.set(Some(err)),
                        None => error.set(Some(ViewError::Unknown)),
                    }
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, vm);
            }
        }
    }

    let retry_action = use_callback(move |()| match last_action() {
        Some(LastAction::StartQuiz) | None => {
            let mut resource = resource;
            resource.restart();
        }
        Some(LastAction::Submit) => {
            dispatch.call(QuizIntent::Submit);
        }
    });
    let dismiss_error = use_callback(move |()| {
        let mut error = error;
        error.set(None);
    });

    let vm_guard = vm.read();
    let card = vm_guard.as_ref().and_then(QuizVm::card);

    rsx! {
        div { class: "page quiz-page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    div { class: "loading",
                        div { class: "spinner" }
                        p { "Loading questions..." }
                    }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "notice notice--error",
                        p { "{err.message()}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| retry_action.call(()),
                            "Retry"
                        }
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            onclick: move |_| {
                                let _ = navigator.push(Route::Home {});
                            },
                            "Back to Home"
                        }
                    }
                },
                ViewState::Ready(()) => rsx! {
                    if let Some(err) = *error.read() {
                        div { class: "notice notice--error",
                            p { "{err.message()}" }
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| retry_action.call(()),
                                "Retry"
                            }
                            button {
                                class: "btn btn-ghost",
                                r#type: "button",
                                onclick: move |_| dismiss_error.call(()),
                                "Dismiss"
                            }
                        }
                    }
                    if let Some(card) = card {
                        div { class: "quiz-card",
                            div { class: "progress",
                                div {
                                    class: "progress-bar",
                                    style: "width: {card.progress_percent}%",
                                }
                            }
                            div { class: "quiz-meta",
                                span { class: "question-number",
                                    "Question {card.number} of {card.total}"
                                }
                                span { class: "category", "{card.category}" }
                                span { class: "difficulty difficulty--{card.difficulty_class}",
                                    "{card.difficulty_label}"
                                }
                            }
                            h3 { class: "question-text", "{card.text}" }
                            div { class: "options",
                                for option in card.options.clone() {
                                    OptionButton {
                                        option,
                                        locked: card.locked,
                                        on_intent: dispatch,
                                    }
                                }
                            }
                            footer { class: "quiz-actions",
                                if card.locked {
                                    button {
                                        class: "btn btn-primary",
                                        id: "quiz-continue",
                                        r#type: "button",
                                        onclick: move |_| dispatch.call(QuizIntent::Advance),
                                        "{card.continue_label}"
                                    }
                                } else {
                                    button {
                                        class: "btn btn-primary",
                                        id: "quiz-submit",
                                        r#type: "button",
                                        disabled: !card.can_submit,
                                        onclick: move |_| dispatch.call(QuizIntent::Submit),
                                        "Submit Answer"
                                    }
                                }
                            }
                        }
                    } else {
                        // Session is checked out while a submit is in flight.
                        div { class: "loading",
                            div { class: "spinner" }
                            p { "Checking answer..." }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn OptionButton(option: OptionRowVm, locked: bool, on_intent: EventHandler<QuizIntent>) -> Element {
    let index = option.index;
    rsx! {
        button {
            class: "{option.marker.css_class()}",
            r#type: "button",
            disabled: locked,
            onclick: move |_| on_intent.call(QuizIntent::Select(index)),
            "{option.text}"
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<QuizVm>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, vm: Signal<Option<QuizVm>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<QuizVm>> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
