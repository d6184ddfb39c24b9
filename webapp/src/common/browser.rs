use tracing::warn;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{ScrollBehavior, ScrollRestoration, ScrollToOptions};

// WindowListener
//
// a callback attached to a window event for as long as this value lives.  components keep
// these in a hook and drop them in use_drop(), which detaches the listener again
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new(event: &'static str, callback: impl FnMut() + 'static) -> Option<Self> {
        let Some(window) = web_sys::window() else {
            warn!("no window, not listening for {event}");
            return None;
        };

        let callback = Closure::<dyn FnMut()>::new(callback);

        match window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(WindowListener { event, callback }),
            Err(err) => {
                warn!("failed to listen for {event}: {err:?}");
                None
            }
        }
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}

pub fn scroll_offset() -> Option<f64> {
    web_sys::window()?.scroll_y().ok()
}

pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

pub fn scroll_to(offset: f64, smooth: bool) {
    let Some(window) = web_sys::window() else {
        warn!("no window, cannot scroll to {offset}");
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(offset);
    options.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Instant
    });

    window.scroll_to_with_scroll_to_options(&options);
}

// the app decides where the page lands after a route change, so the browser's own
// restoration has to be switched off or the two fight over the offset
pub fn disable_native_scroll_restoration() {
    let history = web_sys::window().and_then(|window| window.history().ok());

    match history {
        Some(history) => {
            if let Err(err) = history.set_scroll_restoration(ScrollRestoration::Manual) {
                warn!("failed to disable native scroll restoration: {err:?}");
            }
        }
        None => warn!("no history object, native scroll restoration left alone"),
    }
}
