use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::routes::Route;
use crate::state::use_app_state_provider;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_app_state_provider(None);

    let settings = ctx.app_settings();
    use_future(move || {
        let settings = settings.clone();
        async move {
            let stored = settings.load_theme().await;
            state.apply_stored_theme(stored);
        }
    });

    let theme_class = state.theme.read().css_class();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Exam Prep" }

        div { class: "app-root {theme_class}",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
