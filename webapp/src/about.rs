use dioxus::prelude::*;
use dioxus_router::prelude::*;

use storefront::config::SiteConfig;

use crate::{Route, components::layout::MobileContainer};

const VALUES: &[&str] = &[
    "If we would not use it on our own houses, we do not stock it.",
    "A ten minute conversation beats a wasted trip back to the store.",
    "Contractors and first-time homeowners get the same help at the counter.",
    "We repair what we can before we sell you a replacement.",
];

#[component]
pub fn About() -> Element {
    let config = use_context::<SiteConfig>();
    let business = config.business;

    rsx! {
        MobileContainer {
            div { class: "page-header",
                h1 { class: "page-title", "About {business.name}" }
                p { class: "page-lead", "{business.tagline}" }
            }

            div { class: "prose",
                p {
                    "We started as a two-aisle shop selling nails by the pound to the builders putting up "
                    "the houses on Mill Road. Three generations later the aisles are longer, but the idea "
                    "is the same: the right part, and someone who can tell you how to fit it."
                }
                p {
                    "Today we carry tools and supplies for tradespeople, weekend builders and gardeners, "
                    "and we still cut keys, tint paint and repair screens in the back."
                }
            }

            h2 { class: "section-title", "What we believe" }
            ul { class: "values-list",
                for value in VALUES.iter() {
                    li { "{value}" }
                }
            }

            h2 { class: "section-title", "Store hours" }
            ul { class: "hours-list",
                for line in business.hours.iter() {
                    li { "{line}" }
                }
            }

            div { class: "pager",
                Link { to: Route::Contact {}, class: "btn btn-primary", "Get in touch" }
            }
        }
    }
}
