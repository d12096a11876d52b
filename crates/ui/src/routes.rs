use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{ExamView, SelectorView, StudyView, ThemeToggle};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", SelectorView)] Selector {},
        #[route("/study", StudyView)] Study {},
        #[route("/exam", ExamView)] Exam {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                span { class: "topbar-title", "Exam Prep" }
                ThemeToggle {}
            }
            main { class: "content",
                Outlet::<Route> {}
            }
            footer { class: "footer",
                p { "Practice questions for business analysis certification." }
            }
        }
    }
}
