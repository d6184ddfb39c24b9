use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use dioxus_router::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::{debug, warn};

use storefront::{
    config::{ScrollConfig, SiteConfig},
    scroll::{
        MemoryStore, OffsetStore, ScrollAction, ScrollTracker, route_key_from_location,
        scroll_button_visible,
    },
};

use crate::{
    Route,
    common::{
        browser::{WindowListener, disable_native_scroll_restoration, scroll_offset, scroll_to},
        history::StoreHistory,
        storage::{SessionOffsetStore, session_storage_available},
    },
};

fn offset_store(config: &ScrollConfig) -> Box<dyn OffsetStore> {
    if session_storage_available() {
        Box::new(SessionOffsetStore::new(&config.storage_prefix))
    } else {
        warn!("session storage unavailable, scroll offsets will not survive a reload");
        Box::new(MemoryStore::new())
    }
}

// RestorationState
//
// everything the scroll restoration hook shares between its event listeners, the history
// leave hook and the route-change effect.  it all lives on the ui thread, hence Rc + RefCell
struct RestorationState {
    tracker: RefCell<ScrollTracker<Box<dyn OffsetStore>>>,

    // the scroll we are waiting to perform; replacing or dropping it cancels the timer
    pending: RefCell<Option<Timeout>>,

    listeners: RefCell<Vec<WindowListener>>,
}

impl RestorationState {
    fn new(config: &ScrollConfig) -> Self {
        RestorationState {
            tracker: RefCell::new(ScrollTracker::new(offset_store(config), config)),
            pending: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        }
    }

    fn attach(state: &Rc<Self>, history: &StoreHistory) {
        // push, replace and popstate all come through here before the router renders the
        // new route, so the tracker records the outgoing offset and learns how we moved
        let leaving = state.clone();
        history.set_on_leave(move |target, kind| {
            leaving
                .tracker
                .borrow_mut()
                .leave(&route_key_from_location(target), kind);
        });

        let mut listeners = Vec::new();

        let scrolled = state.clone();
        listeners.extend(WindowListener::new("scroll", move || {
            if let Some(offset) = scroll_offset() {
                scrolled.tracker.borrow_mut().observe(offset);
            }
        }));

        // pagehide covers bfcache-eligible unloads that never fire beforeunload
        for event in ["pagehide", "beforeunload"] {
            let unloading = state.clone();
            listeners.extend(WindowListener::new(event, move || {
                unloading.tracker.borrow_mut().record();
            }));
        }

        *state.listeners.borrow_mut() = listeners;
    }

    fn detach(&self, history: &StoreHistory) {
        history.clear_on_leave();
        self.listeners.borrow_mut().clear();
        self.pending.borrow_mut().take();
    }

    fn route_changed(&self, key: String) {
        let action = self.tracker.borrow_mut().navigate(key);
        if let Some(action) = action {
            self.perform(action);
        }
    }

    fn perform(&self, action: ScrollAction) {
        let (offset, delay_ms) = match action {
            ScrollAction::RestoreTo { offset, delay_ms } => (offset, Some(delay_ms)),
            ScrollAction::ScrollTop { delay_ms } => (0.0, delay_ms),
        };

        match delay_ms {
            Some(delay_ms) => {
                let task = Timeout::new(delay_ms, move || scroll_to(offset, false));
                self.pending.borrow_mut().replace(task);
            }
            None => {
                self.pending.borrow_mut().take();
                scroll_to(offset, false);
            }
        }
    }
}

// use_scroll_restoration
//
// on forward navigation (link clicks, pushes, replaces) the page starts at the top; on
// back/forward it returns to wherever the reader was when they left that route.  offsets
// are mirrored into session storage so a reload keeps them too.  the app's StoreHistory
// tells us how each route change happened
pub fn use_scroll_restoration(config: ScrollConfig) {
    let route = use_route::<Route>();
    let key = route_key_from_location(&route.to_string());
    let history = use_context::<Rc<StoreHistory>>();

    let state = use_hook({
        let history = history.clone();
        move || {
            disable_native_scroll_restoration();

            let state = Rc::new(RestorationState::new(&config));
            RestorationState::attach(&state, &history);
            state
        }
    });

    use_drop({
        let state = state.clone();
        move || state.detach(&history)
    });

    use_effect(use_reactive((&key,), move |(key,)| {
        debug!("route changed to {key}");
        state.route_changed(key);
    }));
}

// ScrollToTop
//
// renders nothing; it exists to give the scroll restoration hook a place in the tree.  it
// needs to sit inside the router, next to the outlet
#[component]
pub fn ScrollToTop() -> Element {
    let config = use_context::<SiteConfig>();

    use_scroll_restoration(config.scroll);

    rsx! {}
}

#[derive(Clone, PartialEq, Props)]
pub struct ScrollToTopButtonProps {
    #[props(default = String::from("Back to top"))]
    label: String,
}

// ScrollToTopButton
//
// a floating button that fades in once the page is scrolled past the configured threshold.
// the visibility check runs on a short timer after the last scroll event instead of on
// every event, and the pending timer goes away with the component
#[component]
pub fn ScrollToTopButton(props: ScrollToTopButtonProps) -> Element {
    let config = use_context::<SiteConfig>();
    let threshold = config.scroll.button_threshold;
    let debounce_ms = config.scroll.button_debounce_ms;

    let mut visible =
        use_signal(|| scroll_button_visible(scroll_offset().unwrap_or(0.0), threshold));

    let watcher = use_hook(move || {
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

        let listener = WindowListener::new("scroll", {
            let pending = pending.clone();
            move || {
                let task = Timeout::new(debounce_ms, move || {
                    let show = scroll_button_visible(scroll_offset().unwrap_or(0.0), threshold);
                    if *visible.peek() != show {
                        visible.set(show);
                    }
                });

                // dropping the previous timer cancels it
                pending.borrow_mut().replace(task);
            }
        });

        Rc::new(RefCell::new(Some((listener, pending))))
    });

    use_drop(move || {
        if let Some((listener, pending)) = watcher.borrow_mut().take() {
            drop(listener);
            pending.borrow_mut().take();
        }
    });

    rsx! {
        button {
            class: if visible() { "scroll-top-button visible" } else { "scroll-top-button" },
            r#type: "button",
            title: "{props.label}",
            "aria-label": "{props.label}",
            "aria-hidden": if visible() { "false" } else { "true" },
            tabindex: if visible() { "0" } else { "-1" },
            onclick: move |_| scroll_to(0.0, true),
            "\u{2191}"
        }
    }
}
