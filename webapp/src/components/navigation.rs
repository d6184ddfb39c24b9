use std::mem::discriminant;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use storefront::config::SiteConfig;

use crate::{
    Route,
    components::{
        layout::{MobileContainer, use_breakpoint, use_breakpoint_provider},
        scroll::{ScrollToTop, ScrollToTopButton},
        theme::ThemeToggle,
    },
};

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    name: String,
    target: Route,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let name = props.name;
    let target = props.target;

    // compare variants only, so /products?page=3 still lights up the Products link
    let current_path: Route = use_route();
    rsx! {
        Link {
            class: if discriminant(&current_path) == discriminant(&target) { "nav-link active" } else { "nav-link" },
            to: target,
            "{name}"
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let config = use_context::<SiteConfig>();
    let band = use_breakpoint();

    rsx! {
        header { class: if band().is_mobile() { "app-header compact" } else { "app-header" },
            MobileContainer { class: "nav-container",
                div { class: "logo",
                    Link { to: Route::Home {},
                        span { "\u{1F528}" }
                        span { "{config.business.name}" }
                    }
                }

                nav { class: "nav-links",
                    NavBarButton { name: "Home".to_owned(), target: Route::Home {} }
                    NavBarButton {
                        name: "Products".to_owned(),
                        target: Route::Products { page: 1 },
                    }
                    NavBarButton { name: "About".to_owned(), target: Route::About {} }
                    NavBarButton { name: "Contact".to_owned(), target: Route::Contact {} }
                    ThemeToggle {}
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    let config = use_context::<SiteConfig>();
    let business = config.business;

    rsx! {
        footer { class: "app-footer",
            MobileContainer { class: "footer-inner",
                div {
                    strong { "{business.name}" }
                    p { "{business.address}" }
                }
                div {
                    p { "{business.phone}" }
                    p { "{business.email}" }
                }
            }
        }
    }
}

// NavBar
//
// the router layout every page renders inside of.  ScrollToTop has to live here (inside the
// router, outside the outlet) so it survives route changes and sees every one of them.  it
// also owns the breakpoint signal that every responsive component below it reads
#[component]
pub fn NavBar() -> Element {
    use_breakpoint_provider();

    rsx! {
        ScrollToTop {}
        NavBarInner {}
        main { class: "page-content", Outlet::<Route> {} }
        Footer {}
        ScrollToTopButton {}
    }
}
