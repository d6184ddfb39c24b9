use dioxus::prelude::*;

use storefront::{
    config::SiteConfig,
    theme::{Theme, ThemeMode},
};

use crate::common::storage::{get_local_storage, set_local_storage};

const THEME_MODE_KEY: &str = "theme_mode";

// ThemeProvider
//
// owns the light/dark choice for everything below it.  the stored preference wins over the
// configured default; the active record is emitted as css variables
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let config = use_context::<SiteConfig>();

    let mode = use_context_provider(|| {
        Signal::new(
            get_local_storage::<ThemeMode>(THEME_MODE_KEY).unwrap_or(config.theme.default_mode),
        )
    });

    let variables = Theme::for_mode(mode()).css_variables();

    rsx! {
        style { "{variables}" }
        div { class: "theme-root", "data-theme": "{mode}", {children} }
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut mode = use_context::<Signal<ThemeMode>>();

    let label = match mode() {
        ThemeMode::Light => "Dark mode",
        ThemeMode::Dark => "Light mode",
    };

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            onclick: move |_| {
                let next = mode().toggled();
                mode.set(next);
                set_local_storage(THEME_MODE_KEY, next);
            },
            "{label}"
        }
    }
}
