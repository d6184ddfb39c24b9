use std::collections::HashMap;

use anyhow::Result;
use tracing::{debug, warn};

use crate::config::ScrollConfig;

// restores never fire sooner than this, so the incoming page has a chance to render
// enough content to scroll into
pub const MIN_RESTORE_DELAY_MS: u32 = 100;

// route key
//
// the path plus the query string, so that /products?page=1 and /products?page=2 remember
// their offsets separately.  the query may be passed with or without its leading '?'
pub fn route_key(path: &str, query: &str) -> String {
    let path = if path.is_empty() { "/" } else { path };
    let query = query.strip_prefix('?').unwrap_or(query);

    if query.is_empty() {
        path.to_owned()
    } else {
        format!("{path}?{query}")
    }
}

// same as route_key, but for a full location string like the one the router displays
pub fn route_key_from_location(location: &str) -> String {
    match location.split_once('?') {
        Some((path, query)) => route_key(path, query),
        None => route_key(location, ""),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationKind {
    // a new history entry (link click, programmatic push)
    Push,
    // the current entry was swapped out
    Replace,
    // back/forward traversal through existing entries
    Pop,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollAction {
    RestoreTo { offset: f64, delay_ms: u32 },
    ScrollTop { delay_ms: Option<u32> },
}

pub fn scroll_button_visible(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

// OffsetStore
//
// the session-scoped mirror of the offset map.  both operations are best-effort: the
// tracker treats failures as "nothing stored" and keeps going
pub trait OffsetStore {
    fn read(&self, key: &str) -> Result<Option<f64>>;

    fn write(&mut self, key: &str, offset: f64) -> Result<()>;
}

// plain map.  it stands in for session storage when the browser will not hand one out,
// so offsets still survive route changes for the life of the page
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: HashMap<String, f64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OffsetStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<f64>> {
        Ok(self.items.get(key).copied())
    }

    fn write(&mut self, key: &str, offset: f64) -> Result<()> {
        self.items.insert(key.to_owned(), offset);
        Ok(())
    }
}

// lets the webapp pick a store at runtime
impl<S: OffsetStore + ?Sized> OffsetStore for Box<S> {
    fn read(&self, key: &str) -> Result<Option<f64>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, offset: f64) -> Result<()> {
        (**self).write(key, offset)
    }
}

// ScrollTracker
//
// remembers the last vertical offset of every route visited in this session.  the browser
// glue feeds it scroll offsets via observe(), announces an upcoming route change with
// leave() (history push/replace, popstate), and reports the route that actually rendered
// with navigate().  it carries out the ScrollAction it gets back.  everything runs on the
// ui thread, so there is no locking here; the caller shares it behind an Rc<RefCell<_>>
#[derive(Debug)]
pub struct ScrollTracker<S: OffsetStore> {
    offsets: HashMap<String, f64>,
    store: S,
    current: Option<String>,
    latest: f64,

    // how the route change announced by leave() happened; consumed by navigate()
    pending: Option<NavigationKind>,

    restore_delay_ms: u32,
    top_delay_ms: Option<u32>,
}

impl<S: OffsetStore> ScrollTracker<S> {
    pub fn new(store: S, config: &ScrollConfig) -> Self {
        ScrollTracker {
            offsets: HashMap::new(),
            store,
            current: None,
            latest: 0.0,
            pending: None,
            restore_delay_ms: config.restore_delay_ms.max(MIN_RESTORE_DELAY_MS),
            top_delay_ms: config.top_delay_ms,
        }
    }

    // scroll events between leave() and navigate() belong to neither page (the outgoing
    // content being swapped out, or the browser clamping), so they are dropped
    pub fn observe(&mut self, offset: f64) {
        if self.pending.is_some() {
            return;
        }

        if offset.is_finite() {
            self.latest = offset.max(0.0);
        }
    }

    // write the latest observed offset under the current route
    pub fn record(&mut self) {
        let Some(key) = self.current.clone() else {
            return;
        };

        self.offsets.insert(key.clone(), self.latest);

        if let Err(err) = self.store.write(&key, self.latest) {
            warn!("failed to persist scroll offset for {key}: {err}");
        }
    }

    pub fn saved_offset(&self, key: &str) -> f64 {
        if let Some(offset) = self.offsets.get(key) {
            return *offset;
        }

        match self.store.read(key) {
            Ok(Some(offset)) if offset.is_finite() => offset.max(0.0),
            Ok(_) => 0.0,
            Err(err) => {
                warn!("failed to read scroll offset for {key}: {err}");
                0.0
            }
        }
    }

    // a route change towards `target` is about to happen.  the outgoing offset is recorded
    // now, before anything gets a chance to move the page.  a change that stays on the
    // current route (same-key popstate, pushing the page we are on) will never render a
    // new key, so it leaves nothing pending behind
    pub fn leave(&mut self, target: &str, kind: NavigationKind) {
        if self.current.as_deref() == Some(target) {
            self.pending = None;
            return;
        }

        if self.pending.is_none() {
            self.record();
        }

        self.pending = Some(kind);
    }

    // the route that rendered.  returns None when it is the route we are already on
    pub fn navigate(&mut self, key: String) -> Option<ScrollAction> {
        let announced = self.pending.take();

        if self.current.as_deref() == Some(key.as_str()) {
            return None;
        }

        // nothing is current before the first route renders; that first render is either a
        // fresh load or a reload, and in both cases whatever session storage has is correct
        let kind = match (&self.current, announced) {
            (None, _) => NavigationKind::Pop,
            (Some(_), Some(kind)) => kind,
            (Some(_), None) => NavigationKind::Push,
        };

        // unannounced changes still have their outgoing offset to record
        if announced.is_none() {
            self.record();
        }
        self.current = Some(key.clone());

        let action = match kind {
            NavigationKind::Pop => {
                let offset = self.saved_offset(&key);
                ScrollAction::RestoreTo {
                    offset,
                    delay_ms: self.restore_delay_ms,
                }
            }
            NavigationKind::Push | NavigationKind::Replace => ScrollAction::ScrollTop {
                delay_ms: self.top_delay_ms,
            },
        };

        self.latest = match action {
            ScrollAction::RestoreTo { offset, .. } => offset,
            ScrollAction::ScrollTop { .. } => 0.0,
        };

        debug!("navigated to {key} ({kind:?}): {action:?}");
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct BrokenStore;

    impl OffsetStore for BrokenStore {
        fn read(&self, _key: &str) -> Result<Option<f64>> {
            Err(anyhow!("storage disabled"))
        }

        fn write(&mut self, _key: &str, _offset: f64) -> Result<()> {
            Err(anyhow!("storage disabled"))
        }
    }

    fn tracker<S: OffsetStore>(store: S) -> ScrollTracker<S> {
        ScrollTracker::new(store, &ScrollConfig::default())
    }

    // what the webapp does for a link click / history.push
    fn click<S: OffsetStore>(tracker: &mut ScrollTracker<S>, key: &str) -> ScrollAction {
        tracker.leave(key, NavigationKind::Push);
        tracker.navigate(key.to_owned()).unwrap()
    }

    // what the webapp does for back/forward: popstate, then the router re-renders
    fn traverse<S: OffsetStore>(tracker: &mut ScrollTracker<S>, key: &str) -> ScrollAction {
        tracker.leave(key, NavigationKind::Pop);
        tracker.navigate(key.to_owned()).unwrap()
    }

    fn restore_offset(action: ScrollAction) -> f64 {
        match action {
            ScrollAction::RestoreTo { offset, delay_ms } => {
                assert!(delay_ms >= MIN_RESTORE_DELAY_MS);
                offset
            }
            other => panic!("expected a restore, got {other:?}"),
        }
    }

    #[test]
    fn route_keys() {
        assert_eq!(route_key("/products", "page=2"), "/products?page=2");
        assert_eq!(route_key("/products", "?page=2"), "/products?page=2");
        assert_eq!(route_key("/contact", ""), "/contact");
        assert_eq!(route_key("/contact", "?"), "/contact");
        assert_eq!(route_key("", ""), "/");
        assert_eq!(
            route_key_from_location("/products?page=2"),
            "/products?page=2"
        );
        assert_eq!(route_key_from_location("/about"), "/about");
    }

    #[test]
    fn back_navigation_restores_products_page() {
        let mut tracker = tracker(MemoryStore::new());

        tracker.navigate(route_key("/", ""));
        click(&mut tracker, "/products?page=2");
        tracker.observe(450.0);
        click(&mut tracker, "/contact");
        tracker.observe(80.0);

        let action = traverse(&mut tracker, "/products?page=2");
        assert_eq!(restore_offset(action), 450.0);
        assert_eq!(tracker.current.as_deref(), Some("/products?page=2"));

        // and forward again lands on the offset contact was left at
        let action = traverse(&mut tracker, "/contact");
        assert_eq!(restore_offset(action), 80.0);
    }

    #[test]
    fn fresh_navigation_scrolls_to_top() {
        let mut tracker = tracker(MemoryStore::new());

        tracker.navigate(route_key("/", ""));
        tracker.observe(1200.0);

        let action = click(&mut tracker, "/about");
        assert_eq!(action, ScrollAction::ScrollTop { delay_ms: None });
    }

    #[test]
    fn unannounced_change_counts_as_push() {
        let mut tracker = tracker(MemoryStore::new());

        tracker.navigate(route_key("/about", ""));
        tracker.observe(300.0);

        let action = tracker.navigate(route_key("/contact", "")).unwrap();
        assert!(matches!(action, ScrollAction::ScrollTop { .. }));

        // the outgoing offset was still recorded
        assert_eq!(tracker.saved_offset("/about"), 300.0);
    }

    #[test]
    fn replace_scrolls_to_top_even_for_known_routes() {
        let mut tracker = tracker(MemoryStore::new());

        tracker.navigate(route_key("/about", ""));
        tracker.observe(300.0);
        click(&mut tracker, "/");

        tracker.leave("/about", NavigationKind::Replace);
        let action = tracker.navigate(route_key("/about", "")).unwrap();
        assert!(matches!(action, ScrollAction::ScrollTop { .. }));
    }

    #[test]
    fn offset_is_captured_before_the_page_moves() {
        let mut tracker = tracker(MemoryStore::new());

        tracker.navigate(route_key("/products", "page=2"));
        tracker.observe(450.0);

        // the router swaps content after the push; the browser clamps the offset and fires
        // scroll events before the new route is reported
        tracker.leave("/contact", NavigationKind::Push);
        tracker.observe(0.0);
        tracker.observe(12.0);
        tracker.navigate(route_key("/contact", ""));

        let action = traverse(&mut tracker, "/products?page=2");
        assert_eq!(restore_offset(action), 450.0);
    }

    #[test]
    fn same_route_pop_leaves_nothing_pending() {
        let mut tracker = tracker(MemoryStore::new());

        tracker.navigate(route_key("/about", ""));
        tracker.observe(40.0);

        // e.g. a hash-only history entry: popstate fires but the route key is unchanged
        tracker.leave("/about", NavigationKind::Pop);
        assert_eq!(tracker.navigate(route_key("/about", "")), None);

        // observing works again, and the next click is a plain push
        tracker.observe(60.0);
        let action = click(&mut tracker, "/contact");
        assert!(matches!(action, ScrollAction::ScrollTop { .. }));
        assert_eq!(tracker.saved_offset("/about"), 60.0);
    }

    #[test]
    fn same_route_pop_without_render_does_not_leak_into_next_change() {
        let mut tracker = tracker(MemoryStore::new());

        tracker.navigate(route_key("/about", ""));

        // the router never re-renders for this one, so navigate() is not called at all
        tracker.leave("/about", NavigationKind::Pop);

        let action = tracker.navigate(route_key("/contact", "")).unwrap();
        assert!(matches!(action, ScrollAction::ScrollTop { .. }));
    }

    #[test]
    fn rerender_of_current_route_is_not_a_navigation() {
        let mut tracker = tracker(MemoryStore::new());

        tracker.navigate(route_key("/", ""));
        tracker.observe(90.0);

        assert_eq!(tracker.navigate(route_key("/", "")), None);
        assert_eq!(tracker.latest, 90.0);
    }

    #[test]
    fn configured_top_delay_is_passed_through() {
        let config = ScrollConfig {
            top_delay_ms: Some(250),
            ..ScrollConfig::default()
        };
        let mut tracker = ScrollTracker::new(MemoryStore::new(), &config);

        tracker.navigate(route_key("/", ""));
        let action = click(&mut tracker, "/about");
        assert_eq!(action, ScrollAction::ScrollTop { delay_ms: Some(250) });
    }

    #[test]
    fn restore_delay_has_a_floor() {
        let config = ScrollConfig {
            restore_delay_ms: 5,
            ..ScrollConfig::default()
        };
        let mut tracker = ScrollTracker::new(MemoryStore::new(), &config);

        let action = tracker.navigate(route_key("/", ""));
        assert_eq!(
            action,
            Some(ScrollAction::RestoreTo {
                offset: 0.0,
                delay_ms: MIN_RESTORE_DELAY_MS
            })
        );
    }

    #[test]
    fn unknown_route_restores_to_zero() {
        let mut tracker = tracker(MemoryStore::new());

        tracker.navigate(route_key("/", ""));
        let action = traverse(&mut tracker, "/never-seen");
        assert_eq!(restore_offset(action), 0.0);
    }

    #[test]
    fn first_render_restores_from_session_store() {
        // simulates a reload: the previous page life wrote to session storage on unload
        let mut store = MemoryStore::new();
        store.write("/products?page=3", 640.0).unwrap();

        let mut tracker = tracker(store);
        let action = tracker.navigate(route_key("/products", "page=3")).unwrap();
        assert_eq!(restore_offset(action), 640.0);
    }

    #[test]
    fn memory_map_wins_over_store() {
        let mut store = MemoryStore::new();
        store.write("/about", 10.0).unwrap();

        let mut tracker = tracker(store);
        tracker.navigate(route_key("/about", ""));
        tracker.observe(999.0);
        tracker.record();

        assert_eq!(tracker.saved_offset("/about"), 999.0);
    }

    #[test]
    fn record_writes_through_to_store() {
        let mut tracker = tracker(MemoryStore::new());

        tracker.navigate(route_key("/products", ""));
        tracker.observe(321.0);
        tracker.record();

        assert_eq!(tracker.store.read("/products").unwrap(), Some(321.0));
    }

    #[test]
    fn boxed_store_can_be_chosen_at_runtime() {
        let store: Box<dyn OffsetStore> = Box::new(MemoryStore::new());
        let mut tracker = tracker(store);

        tracker.navigate(route_key("/", ""));
        tracker.observe(55.0);
        tracker.record();

        assert_eq!(tracker.store.read("/").unwrap(), Some(55.0));
    }

    #[test]
    fn last_write_wins() {
        let mut tracker = tracker(MemoryStore::new());

        tracker.navigate(route_key("/", ""));
        tracker.observe(100.0);
        tracker.record();
        tracker.observe(200.0);
        tracker.record();

        assert_eq!(tracker.saved_offset("/"), 200.0);
    }

    #[test]
    fn broken_store_never_blocks_navigation() {
        let mut tracker = tracker(BrokenStore);

        tracker.navigate(route_key("/products", "page=2"));
        tracker.observe(450.0);
        tracker.record();

        let action = click(&mut tracker, "/contact");
        assert!(matches!(action, ScrollAction::ScrollTop { .. }));

        // the in-memory map still has it
        let action = traverse(&mut tracker, "/products?page=2");
        assert_eq!(restore_offset(action), 450.0);

        // and a route only the store could have answered for falls back to zero
        let action = traverse(&mut tracker, "/about");
        assert_eq!(restore_offset(action), 0.0);
    }

    #[test]
    fn observe_ignores_garbage() {
        let mut tracker = tracker(MemoryStore::new());

        tracker.navigate(route_key("/", ""));
        tracker.observe(50.0);
        tracker.observe(f64::NAN);
        tracker.observe(f64::INFINITY);
        tracker.record();
        assert_eq!(tracker.saved_offset("/"), 50.0);

        tracker.observe(-30.0);
        tracker.record();
        assert_eq!(tracker.saved_offset("/"), 0.0);
    }

    #[test]
    fn record_without_route_is_a_noop() {
        let mut tracker = tracker(MemoryStore::new());
        tracker.observe(75.0);
        tracker.record();

        assert!(tracker.offsets.is_empty());
        assert_eq!(tracker.current, None);
    }

    #[test]
    fn button_visibility_threshold() {
        assert!(!scroll_button_visible(0.0, 300.0));
        assert!(!scroll_button_visible(300.0, 300.0));
        assert!(scroll_button_visible(301.0, 300.0));
    }
}
