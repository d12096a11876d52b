use dioxus::prelude::*;
use dioxus_router::use_navigator;

use quiz_core::model::{PracticeMode, QuestionSetKind};

use crate::context::AppContext;
use crate::routes::Route;
use crate::state::{ActiveQuiz, use_app_state};
use crate::views::{ViewError, ViewState};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn SelectorView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut active = use_app_state().active;
    let mut status = use_signal(ViewState::default);

    let start = use_callback(move |(kind, mode): (QuestionSetKind, PracticeMode)| {
        if status.peek().is_loading() {
            return;
        }
        status.set(ViewState::Loading);
        let loader = ctx.quiz_loader();
        spawn(async move {
            match loader.load(kind).await {
                Ok(set) => {
                    status.set(ViewState::Idle);
                    active.set(Some(ActiveQuiz { kind, mode, set }));
                    let route = match mode {
                        PracticeMode::Study => Route::Study {},
                        PracticeMode::Exam => Route::Exam {},
                    };
                    let _ = navigator.push(route);
                }
                Err(err) => status.set(ViewState::Error(ViewError::from(&err))),
            }
        });
    });

    #[cfg(test)]
    use_hook(|| {
        if let Some(handles) = try_consume_context::<SelectorTestHandles>() {
            handles.register(start);
        }
    });

    let loading = status().is_loading();
    let error = status().error();

    rsx! {
        div { class: "page selector",
            header { class: "selector-header",
                h1 { "CBAP Exam Prep" }
                p { class: "muted", "Choose your question type and learning mode" }
            }
            if let Some(err) = error {
                p { class: "notice notice--error", role: "alert", "{err.message()}" }
            }
            if loading {
                p { class: "notice", "Loading questions..." }
            }
            div { class: "selector-grid",
                SetCard {
                    kind: QuestionSetKind::Normal,
                    blurb: "Standard multiple choice questions",
                    disabled: loading,
                    on_start: start,
                }
                SetCard {
                    kind: QuestionSetKind::Scenario,
                    blurb: "Real-world scenario-based questions",
                    disabled: loading,
                    on_start: start,
                }
            }
        }
    }
}

#[component]
fn SetCard(
    kind: QuestionSetKind,
    blurb: &'static str,
    disabled: bool,
    on_start: Callback<(QuestionSetKind, PracticeMode)>,
) -> Element {
    rsx! {
        section { class: "set-card",
            h2 { "{kind.label()}" }
            p { class: "muted", "{blurb}" }
            div { class: "set-card-actions",
                button {
                    class: "button",
                    r#type: "button",
                    disabled,
                    onclick: move |_| on_start.call((kind, PracticeMode::Study)),
                    "Study Mode"
                }
                button {
                    class: "button button--primary",
                    r#type: "button",
                    disabled,
                    onclick: move |_| on_start.call((kind, PracticeMode::Exam)),
                    "Exam Mode"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SelectorTestHandles {
    start: Rc<RefCell<Option<Callback<(QuestionSetKind, PracticeMode)>>>>,
}

#[cfg(test)]
impl SelectorTestHandles {
    fn register(&self, start: Callback<(QuestionSetKind, PracticeMode)>) {
        *self.start.borrow_mut() = Some(start);
    }

    pub(crate) fn start(&self) -> Callback<(QuestionSetKind, PracticeMode)> {
        (*self.start.borrow()).expect("selector start registered")
    }
}
