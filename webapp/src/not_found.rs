use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{Route, components::layout::MobileContainer};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        MobileContainer {
            div { class: "not-found",
                div { class: "not-found-code", "404" }
                p { class: "page-lead", "We looked in every aisle, but /{path} is not here." }
                div { class: "pager",
                    Link { to: Route::Home {}, class: "btn btn-primary", "Back to the front counter" }
                }
            }
        }
    }
}
