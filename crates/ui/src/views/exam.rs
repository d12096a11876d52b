use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use quiz_core::TickOutcome;
use quiz_core::model::{OptionId, Position};

use crate::context::AppContext;
use crate::routes::Route;
use crate::state::{ActiveQuiz, use_app_state};
use crate::views::components::{EmptyState, QuestionCard, QuestionPicker, ScenarioHeader};
use crate::views::results::ExamResults;
use crate::vm::{ExamIntent, ExamVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const EXAM_SUBTITLE: &str = "Select your answer (answers revealed at the end)";

/// The one-second ticker of a running exam. Dropping the handle cancels it.
struct CountdownTask(Task);

impl CountdownTask {
    fn start(mut exam: Signal<ExamVm>) -> Self {
        let task = spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(1)).await;
                let Ok(mut vm) = exam.try_write() else {
                    break;
                };
                if !matches!(vm.tick(), TickOutcome::Running { .. }) {
                    break;
                }
            }
        });
        Self(task)
    }
}

impl Drop for CountdownTask {
    fn drop(&mut self) {
        self.0.cancel();
    }
}

#[component]
pub fn ExamView() -> Element {
    let state = use_app_state();
    let navigator = use_navigator();
    let on_back = use_callback(move |()| {
        state.discard_quiz();
        let _ = navigator.push(Route::Selector {});
    });

    let active = state.active.read().clone();
    match active {
        Some(quiz) => rsx! { ExamSessionPane { quiz, on_back } },
        None => rsx! { EmptyState { on_back } },
    }
}

#[component]
fn ExamSessionPane(quiz: ActiveQuiz, on_back: Callback<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let set = quiz.set.clone();
    let mut vm = use_signal(move || ExamVm::new(set, ctx.clock()));
    let mut ticker = use_signal(|| None::<CountdownTask>);

    use_effect(move || {
        let active = vm.read().is_active();
        let running = ticker.peek().is_some();
        if active && !running {
            ticker.set(Some(CountdownTask::start(vm)));
        } else if !active && running {
            ticker.set(None);
        }
    });

    let dispatch = use_callback(move |intent: ExamIntent| {
        if intent == ExamIntent::Restart {
            ticker.set(None);
        }
        vm.write().apply(intent);
    });
    let on_select = use_callback(move |(_, option): (Position, OptionId)| {
        dispatch.call(ExamIntent::Select(option));
    });
    let on_jump = use_callback(move |position: Position| {
        dispatch.call(ExamIntent::Jump(position));
    });
    let on_restart = use_callback(move |()| dispatch.call(ExamIntent::Restart));

    #[cfg(test)]
    use_hook(|| {
        if let Some(handles) = try_consume_context::<ExamTestHandles>() {
            handles.register(dispatch, ticker);
        }
    });

    let view = vm.read();
    if let Some(results) = view.results() {
        return rsx! { ExamResults { results, on_restart, on_back } };
    }
    let Some(card) = view.card() else {
        return rsx! { EmptyState { on_back } };
    };

    let timer = view.timer();
    let scenario = view.scenario();
    let progress = view.progress_label();
    let answered = view.answered_label();
    let can_previous = view.can_go_previous();
    let is_last = view.is_last();
    let picker = view.picker();

    rsx! {
        div { class: "page exam",
            header { class: "session-header",
                h2 { "Exam Mode" }
                div {
                    class: if timer.urgent { "timer timer--urgent" } else { "timer" },
                    role: "timer",
                    "{timer.label}"
                }
                button {
                    class: "button",
                    r#type: "button",
                    onclick: move |_| on_back.call(()),
                    "Back to Menu"
                }
            }
            if let Some(scenario) = scenario {
                ScenarioHeader { scenario }
            }
            QuestionCard {
                key: "{card.position}",
                card,
                subtitle: EXAM_SUBTITLE,
                on_select,
            }
            nav { class: "session-nav",
                button {
                    class: "button",
                    r#type: "button",
                    disabled: !can_previous,
                    onclick: move |_| dispatch.call(ExamIntent::Previous),
                    "Previous"
                }
                span { class: "session-progress", "{progress}" }
                if is_last {
                    button {
                        class: "button button--primary",
                        r#type: "button",
                        onclick: move |_| dispatch.call(ExamIntent::Finish),
                        "Finish Exam"
                    }
                } else {
                    button {
                        class: "button button--primary",
                        r#type: "button",
                        onclick: move |_| dispatch.call(ExamIntent::Next),
                        "Next"
                    }
                }
            }
            p { class: "muted", "{answered}" }
            QuestionPicker { entries: picker, on_jump }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ExamTestHandles {
    dispatch: Rc<RefCell<Option<Callback<ExamIntent>>>>,
    ticker: Rc<RefCell<Option<Signal<Option<CountdownTask>>>>>,
}

#[cfg(test)]
impl ExamTestHandles {
    fn register(&self, dispatch: Callback<ExamIntent>, ticker: Signal<Option<CountdownTask>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.ticker.borrow_mut() = Some(ticker);
    }

    pub(crate) fn dispatch(&self) -> Callback<ExamIntent> {
        (*self.dispatch.borrow()).expect("exam dispatch registered")
    }

    /// Must be called inside the dom runtime.
    pub(crate) fn countdown_running(&self) -> bool {
        let ticker = (*self.ticker.borrow()).expect("exam ticker registered");
        ticker.peek().is_some()
    }
}
