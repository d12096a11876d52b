use dioxus::prelude::*;
use dioxus_router::use_navigator;

use quiz_core::model::{OptionId, Position};
use services::StudyLayout;

use crate::routes::Route;
use crate::state::{ActiveQuiz, use_app_state};
use crate::views::components::{EmptyState, QuestionCard, QuestionPicker, ScenarioHeader};
use crate::vm::{StudyIntent, StudyVm};

const STUDY_SUBTITLE: &str = "Select an answer to see the explanation";

#[component]
pub fn StudyView() -> Element {
    let state = use_app_state();
    let navigator = use_navigator();
    let on_back = use_callback(move |()| {
        state.discard_quiz();
        let _ = navigator.push(Route::Selector {});
    });

    let active = state.active.read().clone();
    match active {
        Some(quiz) => rsx! { StudySessionPane { quiz, on_back } },
        None => rsx! { EmptyState { on_back } },
    }
}

#[component]
fn StudySessionPane(quiz: ActiveQuiz, on_back: Callback<()>) -> Element {
    let set = quiz.set.clone();
    let mut vm = use_signal(move || StudyVm::new(set));

    let dispatch = use_callback(move |intent: StudyIntent| vm.write().apply(intent));
    let on_select = use_callback(move |(position, option): (Position, OptionId)| {
        dispatch.call(StudyIntent::Select(position, option));
    });
    let on_toggle = use_callback(move |position: Position| {
        dispatch.call(StudyIntent::ToggleReveal(position));
    });
    let on_jump = use_callback(move |position: Position| {
        dispatch.call(StudyIntent::Jump(position));
    });

    let view = vm.read();
    if view.is_empty() {
        return rsx! { EmptyState { on_back } };
    }

    let scenario = view.scenario();
    let cards = view.cards();

    match view.layout() {
        StudyLayout::OneByOne => {
            let progress = view.progress_label();
            let can_previous = view.can_go_previous();
            let can_next = view.can_go_next();
            let picker = view.picker();
            rsx! {
                div { class: "page study",
                    header { class: "session-header",
                        h2 { "Study Mode" }
                        div { class: "session-header-actions",
                            button {
                                class: "button",
                                r#type: "button",
                                onclick: move |_| dispatch.call(StudyIntent::SetLayout(StudyLayout::List)),
                                "List View"
                            }
                            button {
                                class: "button",
                                r#type: "button",
                                onclick: move |_| on_back.call(()),
                                "Back to Menu"
                            }
                        }
                    }
                    if let Some(scenario) = scenario {
                        ScenarioHeader { scenario }
                    }
                    for card in cards {
                        QuestionCard {
                            key: "{card.position}",
                            card,
                            subtitle: STUDY_SUBTITLE,
                            on_select,
                            on_toggle_reveal: Some(on_toggle),
                        }
                    }
                    nav { class: "session-nav",
                        button {
                            class: "button",
                            r#type: "button",
                            disabled: !can_previous,
                            onclick: move |_| dispatch.call(StudyIntent::Previous),
                            "Previous"
                        }
                        span { class: "session-progress", "{progress}" }
                        button {
                            class: "button button--primary",
                            r#type: "button",
                            disabled: !can_next,
                            onclick: move |_| dispatch.call(StudyIntent::Next),
                            "Next"
                        }
                    }
                    QuestionPicker { entries: picker, on_jump }
                }
            }
        }
        StudyLayout::List => {
            let has_previous = view.has_previous_scenario();
            let has_next = view.has_next_scenario();
            rsx! {
                div { class: "page study study--list",
                    header { class: "session-header",
                        h2 { "Study Mode - List View" }
                        div { class: "session-header-actions",
                            button {
                                class: "button",
                                r#type: "button",
                                onclick: move |_| dispatch.call(StudyIntent::SetLayout(StudyLayout::OneByOne)),
                                "One by One"
                            }
                            button {
                                class: "button",
                                r#type: "button",
                                onclick: move |_| on_back.call(()),
                                "Back to Menu"
                            }
                        }
                    }
                    if let Some(scenario) = scenario {
                        ScenarioHeader { scenario }
                    }
                    div { class: "question-list",
                        for card in cards {
                            QuestionCard {
                                key: "{card.position}",
                                card,
                                subtitle: STUDY_SUBTITLE,
                                on_select,
                                on_toggle_reveal: Some(on_toggle),
                            }
                        }
                    }
                    if has_previous || has_next {
                        nav { class: "session-nav",
                            button {
                                class: "button",
                                r#type: "button",
                                disabled: !has_previous,
                                onclick: move |_| dispatch.call(StudyIntent::PreviousScenario),
                                "Previous Scenario"
                            }
                            button {
                                class: "button button--primary",
                                r#type: "button",
                                disabled: !has_next,
                                onclick: move |_| dispatch.call(StudyIntent::NextScenario),
                                "Next Scenario"
                            }
                        }
                    }
                }
            }
        }
    }
}
