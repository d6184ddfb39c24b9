use std::{cell::RefCell, rc::Rc, sync::Arc};

use dioxus::prelude::History;
use tracing::{debug, error, warn};
use wasm_bindgen::JsValue;

use storefront::scroll::NavigationKind;

use crate::common::browser::WindowListener;

type LeaveHook = Rc<dyn Fn(&str, NavigationKind)>;

// StoreHistory
//
// the router's view of window.history.  unlike the stock web history it never touches the
// scroll position: scroll restoration owns that.  instead, every route change is announced
// through the leave hook before it happens, so the outgoing offset can be recorded while
// the old page is still on screen
#[derive(Clone, Default)]
pub struct StoreHistory {
    on_leave: Rc<RefCell<Option<LeaveHook>>>,
    popstate: Rc<RefCell<Option<WindowListener>>>,
}

impl StoreHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_on_leave(&self, hook: impl Fn(&str, NavigationKind) + 'static) {
        self.on_leave.borrow_mut().replace(Rc::new(hook));
    }

    pub fn clear_on_leave(&self) {
        self.on_leave.borrow_mut().take();
    }

    fn leave(&self, target: &str, kind: NavigationKind) {
        announce(&self.on_leave, target, kind);
    }
}

fn announce(on_leave: &RefCell<Option<LeaveHook>>, target: &str, kind: NavigationKind) {
    // clone out of the cell so the hook is free to swap itself out
    let hook = on_leave.borrow().clone();
    if let Some(hook) = hook {
        hook(target, kind);
    }
}

fn browser_history() -> Option<web_sys::History> {
    web_sys::window()?.history().ok()
}

fn log_failure(what: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        error!("failed to {what}: {err:?}");
    }
}

// path + query, without the fragment
fn location_route() -> String {
    let Some(location) = web_sys::window().map(|window| window.location()) else {
        return "/".to_owned();
    };

    let path = location.pathname().unwrap_or_default();
    let query = location.search().unwrap_or_default();

    let route = path + &query;
    if route.is_empty() { "/".to_owned() } else { route }
}

impl History for StoreHistory {
    fn current_route(&self) -> String {
        location_route()
    }

    fn go_back(&self) {
        match browser_history() {
            Some(history) => log_failure("go back", history.back()),
            None => warn!("no history object, cannot go back"),
        }
    }

    fn go_forward(&self) {
        match browser_history() {
            Some(history) => log_failure("go forward", history.forward()),
            None => warn!("no history object, cannot go forward"),
        }
    }

    fn push(&self, route: String) {
        if route == self.current_route() {
            return;
        }

        let Some(history) = browser_history() else {
            warn!("no history object, cannot push {route}");
            return;
        };

        self.leave(&route, NavigationKind::Push);
        log_failure(
            "push state",
            history.push_state_with_url(&JsValue::NULL, "", Some(&route)),
        );
    }

    fn replace(&self, route: String) {
        let Some(history) = browser_history() else {
            warn!("no history object, cannot replace with {route}");
            return;
        };

        self.leave(&route, NavigationKind::Replace);
        log_failure(
            "replace state",
            history.replace_state_with_url(&JsValue::NULL, "", Some(&route)),
        );
    }

    fn external(&self, url: String) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };

        match window.location().set_href(&url) {
            Ok(()) => true,
            Err(err) => {
                error!("failed to navigate to {url}: {err:?}");
                false
            }
        }
    }

    // the browser has already moved to the new entry when popstate fires, so the leave hook
    // sees the target route; the router re-renders after the callback
    fn updater(&self, callback: Arc<dyn Fn() + Send + Sync>) {
        let on_leave = self.on_leave.clone();
        let listener = WindowListener::new("popstate", move || {
            let target = location_route();
            debug!("popstate to {target}");

            announce(&on_leave, &target, NavigationKind::Pop);
            (*callback)();
        });

        *self.popstate.borrow_mut() = listener;
    }
}
