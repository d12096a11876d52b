use dioxus::prelude::*;

use quiz_core::model::{OptionId, Position};
use services::PickerEntry;

use crate::vm::{FeedbackVm, OptionVm, QuestionCardVm, ScenarioVm};

#[component]
pub fn ScenarioHeader(scenario: ScenarioVm) -> Element {
    rsx! {
        section { class: "scenario",
            h3 { class: "scenario-title", "{scenario.title}" }
            p { class: "scenario-text", "{scenario.narrative}" }
        }
    }
}

/// A question with its options, plus the reveal toggle and feedback when given one.
#[component]
pub fn QuestionCard(
    card: QuestionCardVm,
    subtitle: &'static str,
    on_select: Callback<(Position, OptionId)>,
    on_toggle_reveal: Option<Callback<Position>>,
) -> Element {
    let position = card.position;
    rsx! {
        article { class: "question-card",
            header { class: "question-card-header",
                h3 { "{card.title}" }
                p { class: "question-card-subtitle", "{subtitle}" }
            }
            p { class: "question-prompt", "{card.prompt}" }
            div { class: "options",
                for option in card.options {
                    OptionButton {
                        key: "{option.id}",
                        option,
                        on_pick: move |id: OptionId| on_select.call((position, id)),
                    }
                }
            }
            if let Some(feedback) = card.feedback {
                FeedbackPanel { feedback }
            }
            if let Some(on_toggle) = on_toggle_reveal {
                button {
                    class: if card.revealed { "reveal reveal--active" } else { "reveal" },
                    r#type: "button",
                    onclick: move |_| on_toggle.call(position),
                    if card.revealed { "Hide Answer" } else { "Reveal Answer" }
                }
            }
        }
    }
}

#[component]
fn OptionButton(option: OptionVm, on_pick: Callback<OptionId>) -> Element {
    let id = option.id.clone();
    rsx! {
        button {
            class: option.tone.css_class(),
            r#type: "button",
            onclick: move |_| on_pick.call(id.clone()),
            "{option.label}"
        }
    }
}

#[component]
fn FeedbackPanel(feedback: FeedbackVm) -> Element {
    rsx! {
        div { class: feedback.css_class,
            p { class: "feedback-headline", "{feedback.headline}" }
            if let Some(correct) = feedback.correct_label {
                p { class: "feedback-correct",
                    strong { "Correct Answer: " }
                    "{correct}"
                }
            }
            if let Some(explanation) = feedback.explanation {
                div { class: "feedback-section",
                    p { class: "feedback-label", "Explanation:" }
                    p { "{explanation}" }
                }
            }
            if !feedback.rationale.is_empty() {
                div { class: "feedback-section",
                    p { class: "feedback-label", "Why other options are incorrect:" }
                    for entry in feedback.rationale {
                        p {
                            class: if entry.selected { "rationale rationale--picked" } else { "rationale" },
                            span { class: "rationale-option", "{entry.label}: " }
                            "{entry.reason}"
                        }
                    }
                }
            }
            if let Some(reference) = feedback.reference {
                p { class: "feedback-reference",
                    strong { "Reference: " }
                    "{reference}"
                }
            }
        }
    }
}

/// Grid of question numbers for jumping around a session.
#[component]
pub fn QuestionPicker(entries: Vec<PickerEntry>, on_jump: Callback<Position>) -> Element {
    rsx! {
        nav { class: "picker", aria_label: "Questions",
            for entry in entries {
                button {
                    key: "{entry.position}",
                    class: picker_class(&entry),
                    r#type: "button",
                    onclick: move |_| on_jump.call(entry.position),
                    "{entry.number}"
                }
            }
        }
    }
}

fn picker_class(entry: &PickerEntry) -> &'static str {
    match (entry.current, entry.answered) {
        (true, _) => "picker-cell picker-cell--current",
        (false, true) => "picker-cell picker-cell--answered",
        (false, false) => "picker-cell",
    }
}

#[component]
pub fn EmptyState(on_back: Callback<()>) -> Element {
    rsx! {
        div { class: "empty",
            p { "No questions available" }
            button {
                class: "button",
                r#type: "button",
                onclick: move |_| on_back.call(()),
                "Back to Menu"
            }
        }
    }
}
