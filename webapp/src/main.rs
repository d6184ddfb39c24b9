#![allow(non_snake_case)]
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::{Level, error};

use storefront::config::SiteConfig;

mod common;
use common::history::StoreHistory;

mod components;
use components::{navigation::NavBar, theme::ThemeProvider};

mod about;
use about::About;

mod contact;
use contact::Contact;

mod home;
use home::Home;

mod not_found;
use not_found::NotFound;

mod products;
use products::Products;

// edited by the store owner, compiled in so the site stays a static bundle
const SITE_CONFIG: &str = include_str!("../site.toml");

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");

    launch(App);
}

fn load_config() -> SiteConfig {
    match SiteConfig::from_toml(SITE_CONFIG) {
        Ok(config) => config,
        Err(err) => {
            error!("failed to parse site config: {err}");
            panic!("failed to parse site config: {err}");
        }
    }
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/products?:page")]
        Products { page: usize },
        #[route("/about")]
        About {},
        #[route("/contact")]
        Contact {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(load_config);

    // use_scroll_restoration owns the scroll position across route changes, so the stock
    // web history (which resets and restores it on its own) is swapped out at the root
    // before the router first asks for it
    let history = use_context_provider(|| Rc::new(StoreHistory::new()));
    use_hook(move || {
        let history: Rc<dyn History> = history;
        ScopeId::ROOT.provide_context(history);
    });

    rsx! {
        style { "{common::style::MODERN_STYLES}" }
        ThemeProvider {
            Router::<Route> { config: RouterConfig::default }
        }
    }
}
