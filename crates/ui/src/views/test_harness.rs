use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{
    OptionSet, PracticeMode, QuestionDraft, QuestionSet, QuestionSetKind, Scenario,
};
use quiz_core::time::fixed_clock;
use services::{AppServices, AppSettingsService, QuizLoaderService};
use storage::repository::{InMemoryRepository, Storage};

use crate::context::{UiApp, build_app_context};
use crate::state::{ActiveQuiz, AppState, use_app_state_provider};
use crate::views::exam::ExamTestHandles;
use crate::views::selector::SelectorTestHandles;
use crate::views::{ExamView, SelectorView, StudyView, ThemeToggle};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn quiz_loader(&self) -> Arc<QuizLoaderService> {
        self.services.quiz_loader()
    }

    fn app_settings(&self) -> Arc<AppSettingsService> {
        self.services.app_settings()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Selector,
    Study,
    Exam,
    ThemeToggle,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    active: Option<ActiveQuiz>,
    handles: HarnessHandles,
}

#[derive(Clone, Default)]
struct HarnessHandles {
    state: Rc<RefCell<Option<AppState>>>,
    selector: SelectorTestHandles,
    exam: ExamTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.selector.clone());
    use_context_provider(|| props.handles.exam.clone());
    let state = use_app_state_provider(props.active.clone());
    *props.handles.state.borrow_mut() = Some(state);
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
        ViewKind::Selector => rsx! { SelectorView {} },
        ViewKind::Study => rsx! { StudyView {} },
        ViewKind::Exam => rsx! { ExamView {} },
        ViewKind::ThemeToggle => rsx! { ThemeToggle {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: HarnessHandles,
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

    /// Available after `rebuild`.
    pub fn state(&self) -> AppState {
        (*self.handles.state.borrow()).expect("app state provided")
    }

    pub fn selector(&self) -> SelectorTestHandles {
        self.handles.selector.clone()
    }

    pub fn exam(&self) -> ExamTestHandles {
        self.handles.exam.clone()
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

fn keyed_question(prompt: &str, correct: &str) -> quiz_core::model::Question {
    QuestionDraft::new(
        prompt,
        OptionSet::Keyed(vec![
            ("A".into(), "Alpha".into()),
            ("B".into(), "Beta".into()),
            ("C".into(), "Gamma".into()),
        ]),
        correct,
    )
    .with_explanation("Alpha is the documented technique.")
    .with_rationale("B", "Beta only covers estimation.")
    .validate()
    .expect("valid question")
}

/// Two scenarios, three questions in total.
pub fn scenario_set() -> Arc<QuestionSet> {
    Arc::new(QuestionSet::Scenarios(vec![
        Scenario::new(
            "Loan Origination",
            "A regional bank is replacing its loan intake process.",
            vec![
                keyed_question("Which technique comes first?", "A"),
                keyed_question("Who approves the scope?", "A"),
            ],
        ),
        Scenario::new(
            "Claims Portal",
            "An insurer wants self-service claims.",
            vec![keyed_question("What is the primary risk?", "C")],
        ),
    ]))
}

pub fn active_quiz(mode: PracticeMode, set: Arc<QuestionSet>) -> ActiveQuiz {
    ActiveQuiz {
        kind: if set.is_scenario_set() {
            QuestionSetKind::Scenario
        } else {
            QuestionSetKind::Normal
        },
        mode,
        set,
    }
}

pub fn setup_view_harness(view: ViewKind, active: Option<ActiveQuiz>) -> ViewHarness {
    setup_view_harness_with_repo(view, active, InMemoryRepository::new())
}

pub fn setup_view_harness_with_repo(
    view: ViewKind,
    active: Option<ActiveQuiz>,
    repo: InMemoryRepository,
) -> ViewHarness {
    let storage = Storage::from_repository(repo);
    let app = Arc::new(TestApp {
        services: AppServices::from_storage(&storage, fixed_clock()),
    });
    let handles = HarnessHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            active,
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}
