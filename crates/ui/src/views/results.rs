use dioxus::prelude::*;

use crate::vm::{RING_CIRCUMFERENCE, ResultsVm};

/// Score ring, summary and the per-question review of a finished exam.
#[component]
pub fn ExamResults(results: ResultsVm, on_restart: Callback<()>, on_back: Callback<()>) -> Element {
    rsx! {
        div { class: "page results",
            h2 { "Exam Results" }
            div { class: "score-ring",
                svg { width: "160", height: "160", view_box: "0 0 160 160",
                    circle {
                        class: "score-ring-track",
                        cx: "80",
                        cy: "80",
                        r: "70",
                        fill: "none",
                        stroke_width: "12",
                    }
                    circle {
                        class: "score-ring-value",
                        cx: "80",
                        cy: "80",
                        r: "70",
                        fill: "none",
                        stroke_width: "12",
                        stroke_dasharray: "{RING_CIRCUMFERENCE}",
                        stroke_dashoffset: "{results.ring_offset}",
                        transform: "rotate(-90 80 80)",
                    }
                }
                span { class: "score-ring-label", "{results.percentage}%" }
            }
            p { class: "results-summary", "{results.summary}" }
            dl { class: "results-meta",
                dt { "Finished" }
                dd { "{results.reason}" }
                dt { "Time taken" }
                dd { "{results.elapsed}" }
                dt { "Completed at" }
                dd { "{results.finished_at}" }
            }
            ol { class: "review",
                for row in results.rows {
                    li {
                        key: "{row.number}",
                        class: if row.is_correct { "review-row review-row--correct" } else { "review-row review-row--incorrect" },
                        p { class: "review-prompt",
                            strong { "{row.number}. " }
                            "{row.prompt}"
                        }
                        p {
                            span { class: "review-label", "Your answer: " }
                            "{row.chosen}"
                        }
                        if !row.is_correct {
                            p {
                                span { class: "review-label", "Correct answer: " }
                                "{row.correct}"
                            }
                        }
                        if let Some(explanation) = row.explanation {
                            p { class: "review-explanation", "{explanation}" }
                        }
                    }
                }
            }
            div { class: "results-actions",
                button {
                    class: "button button--primary",
                    r#type: "button",
                    onclick: move |_| on_restart.call(()),
                    "Restart Exam"
                }
                button {
                    class: "button",
                    r#type: "button",
                    onclick: move |_| on_back.call(()),
                    "Back to Menu"
                }
            }
        }
    }
}
