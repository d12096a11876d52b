use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use quiz_core::model::{OptionId, PracticeMode, QuestionSet, QuestionSetKind, Theme};
use quiz_core::time::fixed_clock;

use super::results::ExamResults;
use super::test_harness::{
    ViewKind, active_quiz, drive_dom, scenario_set, setup_view_harness,
};
use crate::vm::{ExamIntent, ExamVm, ResultsVm};

#[tokio::test(flavor = "current_thread")]
async fn selector_view_smoke_renders_both_sets() {
    let mut harness = setup_view_harness(ViewKind::Selector, None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("CBAP Exam Prep"), "missing title in {html}");
    assert!(html.contains("Normal Questions"), "missing normal card in {html}");
    assert!(html.contains("Scenario Questions"), "missing scenario card in {html}");
    assert!(html.contains("Study Mode"), "missing study button in {html}");
    assert!(html.contains("Exam Mode"), "missing exam button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_smoke_renders_first_question_of_scenario() {
    let active = active_quiz(PracticeMode::Study, scenario_set());
    let mut harness = setup_view_harness(ViewKind::Study, Some(active));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Loan Origination"), "missing scenario title in {html}");
    assert!(html.contains("Question 1 of 3"), "missing card title in {html}");
    assert!(html.contains("A. Alpha"), "missing keyed label in {html}");
    assert!(html.contains("Reveal Answer"), "missing reveal toggle in {html}");
    assert!(html.contains("1 / 3"), "missing progress in {html}");
    assert!(!html.contains("Explanation:"), "feedback shown before reveal in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_without_loaded_set_shows_empty_state() {
    let mut harness = setup_view_harness(ViewKind::Study, None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("No questions available"), "missing empty state in {html}");
    assert!(html.contains("Back to Menu"), "missing back button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exam_view_smoke_renders_timer_without_correctness() {
    let active = active_quiz(PracticeMode::Exam, scenario_set());
    let mut harness = setup_view_harness(ViewKind::Exam, Some(active));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Exam Mode"), "missing heading in {html}");
    assert!(html.contains("03:00"), "missing countdown in {html}");
    assert!(html.contains("Select your answer"), "missing subtitle in {html}");
    assert!(!html.contains("option--correct"), "correctness leaked in {html}");
    assert!(!html.contains("Reveal Answer"), "reveal toggle shown in exam in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exam_view_with_empty_set_shows_empty_state() {
    let active = active_quiz(PracticeMode::Exam, Arc::new(QuestionSet::Flat(Vec::new())));
    let mut harness = setup_view_harness(ViewKind::Exam, Some(active));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("No questions available"), "missing empty state in {html}");
    assert!(!html.contains("00:00"), "timer shown for empty set in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn theme_toggle_offers_dark_mode_by_default() {
    let mut harness = setup_view_harness(ViewKind::ThemeToggle, None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Dark mode"), "missing toggle label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn selector_load_failure_shows_notice_and_keeps_no_quiz() {
    let mut harness = setup_view_harness(ViewKind::Selector, None);
    harness.rebuild();

    let start = harness.selector().start();
    harness
        .dom
        .in_runtime(|| start.call((QuestionSetKind::Normal, PracticeMode::Exam)));
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("These questions are not available"),
        "missing error notice in {html}"
    );
    assert!(html.contains(r#"role="alert""#), "notice not announced in {html}");
    assert!(!html.contains("Loading questions"), "still loading in {html}");
    let state = harness.state();
    assert!(harness.dom.in_runtime(|| state.active.peek().is_none()));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn exam_countdown_ticks_and_stops_when_finished() {
    let active = active_quiz(PracticeMode::Exam, scenario_set());
    let mut harness = setup_view_harness(ViewKind::Exam, Some(active));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let exam = harness.exam();
    assert!(harness.render().contains("03:00"));
    assert!(harness.dom.in_runtime(|| exam.countdown_running()));

    tokio::time::advance(Duration::from_millis(1500)).await;
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("02:59"), "countdown did not tick in {html}");

    let dispatch = exam.dispatch();
    harness.dom.in_runtime(|| dispatch.call(ExamIntent::Finish));
    harness.drive_async().await;
    harness.drive_async().await;
    let finished = harness.render();
    assert!(finished.contains("Exam Results"), "missing results in {finished}");
    assert!(finished.contains("Submitted"), "wrong finish reason in {finished}");
    assert!(!harness.dom.in_runtime(|| exam.countdown_running()));

    tokio::time::advance(Duration::from_secs(5)).await;
    harness.drive_async().await;
    assert_eq!(harness.render(), finished);
    assert!(!harness.dom.in_runtime(|| exam.countdown_running()));

    harness.dom.in_runtime(|| dispatch.call(ExamIntent::Restart));
    harness.drive_async().await;
    harness.drive_async().await;
    assert!(harness.render().contains("03:00"));
    assert!(harness.dom.in_runtime(|| exam.countdown_running()));
}

#[tokio::test(flavor = "current_thread")]
async fn stored_theme_does_not_override_an_early_toggle() {
    let mut harness = setup_view_harness(ViewKind::ThemeToggle, None);
    harness.rebuild();
    let state = harness.state();

    let toggled = harness.dom.in_runtime(|| state.toggle_theme());
    assert_eq!(toggled, Theme::Dark);
    harness.dom.in_runtime(|| state.apply_stored_theme(Theme::Light));
    harness.drive_async().await;

    assert_eq!(harness.dom.in_runtime(|| *state.theme.peek()), Theme::Dark);
    let html = harness.render();
    assert!(html.contains("Light mode"), "toggle label not flipped in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn stored_theme_applies_before_any_toggle() {
    let mut harness = setup_view_harness(ViewKind::ThemeToggle, None);
    harness.rebuild();
    let state = harness.state();

    harness.dom.in_runtime(|| state.apply_stored_theme(Theme::Dark));
    harness.drive_async().await;

    assert_eq!(harness.dom.in_runtime(|| *state.theme.peek()), Theme::Dark);
}

#[component]
fn ResultsHarness(results: ResultsVm) -> Element {
    rsx! {
        ExamResults { results, on_restart: move |()| {}, on_back: move |()| {} }
    }
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_score_and_review() {
    let mut vm = ExamVm::new(scenario_set(), fixed_clock());
    vm.apply(ExamIntent::Select(OptionId::from("A")));
    vm.apply(ExamIntent::Finish);
    let results = vm.results().expect("finished exam has results");

    let mut dom = VirtualDom::new_with_props(ResultsHarness, ResultsHarnessProps { results });
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("Exam Results"), "missing heading in {html}");
    assert!(html.contains("33%"), "missing percentage in {html}");
    assert!(html.contains("1 out of 3 correct"), "missing summary in {html}");
    assert!(html.contains("Submitted"), "missing finish reason in {html}");
    assert!(html.contains("Unanswered"), "missing unanswered row in {html}");
    assert!(html.contains("Restart Exam"), "missing restart button in {html}");
}
