use dioxus::prelude::*;

use quiz_core::model::Theme;

use crate::context::AppContext;
use crate::state::use_app_state;

#[component]
pub fn ThemeToggle() -> Element {
    let ctx = use_context::<AppContext>();
    let settings = ctx.app_settings();
    let state = use_app_state();
    let theme = state.theme;

    let label = match theme() {
        Theme::Light => "Dark mode",
        Theme::Dark => "Light mode",
    };

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            aria_label: "Toggle theme",
            onclick: move |_| {
                let next = state.toggle_theme();
                let settings = settings.clone();
                spawn(async move {
                    if let Err(err) = settings.save_theme(next).await {
                        tracing::warn!(error = %err, "failed to save theme");
                    }
                });
            },
            "{label}"
        }
    }
}
