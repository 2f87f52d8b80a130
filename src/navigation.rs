//! In-app navigation: routes, browser-style history, router events
//!
//! The console navigates between top-level routes through a `Router`, and
//! keeps a back/forward stack in `Location`. Both publish events through an
//! `EventEmitter`; `NavigationWatcher` merges the two streams so a slide-in
//! host can close its panel whenever the user navigates.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

// ============================================================================
// Event emitter
// ============================================================================

type Listener<T> = Box<dyn FnMut(&T)>;

struct Listeners<T> {
    next_id: u64,
    entries: Vec<(u64, Listener<T>)>,
}

/// Single-threaded event source with RAII subscriptions
///
/// Listeners run synchronously inside `emit` and must not subscribe to or
/// emit on the same emitter.
pub struct EventEmitter<T> {
    inner: Rc<RefCell<Listeners<T>>>,
}

impl<T: 'static> EventEmitter<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Listeners {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Register a listener. It stays registered until the returned
    /// `Subscription` is dropped or cancelled.
    pub fn subscribe(&self, listener: impl FnMut(&T) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.entries.push((id, Box::new(listener)));
            id
        };

        let weak: Weak<RefCell<Listeners<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().entries.retain(|(entry_id, _)| *entry_id != id);
                }
            })),
        }
    }

    /// Deliver an event to every registered listener, in subscription order
    pub fn emit(&self, event: &T) {
        let mut inner = self.inner.borrow_mut();
        for (_, listener) in inner.entries.iter_mut() {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

impl<T> fmt::Debug for EventEmitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners = self.inner.try_borrow().map(|l| l.entries.len()).ok();
        f.debug_struct("EventEmitter")
            .field("listeners", &listeners)
            .finish()
    }
}

impl<T: 'static> Default for EventEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard for a registered listener; dropping it unsubscribes
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Unsubscribe now instead of on drop
    pub fn cancel(mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

// ============================================================================
// Routes
// ============================================================================

/// Top-level console routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Datasets,
    Snapshots,
    DataProtection,
    Apps,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Dashboard,
        Route::Datasets,
        Route::Snapshots,
        Route::DataProtection,
        Route::Apps,
    ];

    pub fn url(self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::Datasets => "/datasets",
            Route::Snapshots => "/datasets/snapshots",
            Route::DataProtection => "/data-protection",
            Route::Apps => "/apps",
        }
    }

    /// Next route in tab order, wrapping at the end
    pub fn next(self) -> Route {
        let idx = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|r| *r == self).unwrap_or(0)
    }
}

// ============================================================================
// Router
// ============================================================================

/// Router lifecycle events for a single navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterEvent {
    NavigationStart { id: u64, url: &'static str },
    NavigationEnd { id: u64, url: &'static str },
    /// Navigation to the route that is already active
    NavigationSkipped { id: u64, url: &'static str },
}

/// Tracks the active route and publishes navigation events
#[derive(Debug)]
pub struct Router {
    current: Route,
    next_navigation_id: u64,
    events: EventEmitter<RouterEvent>,
}

impl Router {
    pub fn new(initial: Route) -> Self {
        Self {
            current: initial,
            next_navigation_id: 1,
            events: EventEmitter::new(),
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn events(&self) -> &EventEmitter<RouterEvent> {
        &self.events
    }

    /// Navigate to `route`. Returns false if it was already active.
    pub fn navigate(&mut self, route: Route) -> bool {
        let id = self.next_navigation_id;
        self.next_navigation_id += 1;
        let url = route.url();

        self.events.emit(&RouterEvent::NavigationStart { id, url });

        if route == self.current {
            tracing::debug!("navigation {} to {} skipped (already active)", id, url);
            self.events.emit(&RouterEvent::NavigationSkipped { id, url });
            return false;
        }

        self.current = route;
        tracing::debug!("navigation {} to {} completed", id, url);
        self.events.emit(&RouterEvent::NavigationEnd { id, url });
        true
    }
}

// ============================================================================
// Location (browser history)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    Back,
    Forward,
}

/// History change notification (back/forward)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopStateEvent {
    pub url: &'static str,
    pub direction: HistoryDirection,
}

/// Back/forward stack of visited routes
#[derive(Debug)]
pub struct Location {
    entries: Vec<Route>,
    index: usize,
    events: EventEmitter<PopStateEvent>,
}

impl Location {
    pub fn new(initial: Route) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
            events: EventEmitter::new(),
        }
    }

    pub fn events(&self) -> &EventEmitter<PopStateEvent> {
        &self.events
    }

    pub fn current(&self) -> Route {
        self.entries[self.index]
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Record a new entry, dropping any forward history
    pub fn push(&mut self, route: Route) {
        self.entries.truncate(self.index + 1);
        self.entries.push(route);
        self.index = self.entries.len() - 1;
    }

    pub fn back(&mut self) -> Option<Route> {
        if !self.can_go_back() {
            return None;
        }
        self.index -= 1;
        Some(self.pop_state(HistoryDirection::Back))
    }

    pub fn forward(&mut self) -> Option<Route> {
        if !self.can_go_forward() {
            return None;
        }
        self.index += 1;
        Some(self.pop_state(HistoryDirection::Forward))
    }

    fn pop_state(&self, direction: HistoryDirection) -> Route {
        let route = self.current();
        self.events.emit(&PopStateEvent {
            url: route.url(),
            direction,
        });
        route
    }
}

/// Router and history, kept in sync
pub struct Navigation {
    pub location: Location,
    pub router: Router,
}

impl fmt::Debug for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigation")
            .field("route", &self.router.current())
            .field("history_index", &self.location.index)
            .field("history_len", &self.location.entries.len())
            .field("router_listeners", &self.router.events.listener_count())
            .field("history_listeners", &self.location.events.listener_count())
            .finish()
    }
}

impl Navigation {
    pub fn new(initial: Route) -> Self {
        Self {
            location: Location::new(initial),
            router: Router::new(initial),
        }
    }

    pub fn current(&self) -> Route {
        self.router.current()
    }

    /// In-app navigation: route change plus a new history entry
    pub fn navigate(&mut self, route: Route) -> bool {
        let changed = self.router.navigate(route);
        if changed {
            self.location.push(route);
        }
        changed
    }

    /// History back. Emits a pop-state event, then routes to the entry.
    pub fn back(&mut self) -> Option<Route> {
        let route = self.location.back()?;
        self.router.navigate(route);
        Some(route)
    }

    /// History forward. Emits a pop-state event, then routes to the entry.
    pub fn forward(&mut self) -> Option<Route> {
        let route = self.location.forward()?;
        self.router.navigate(route);
        Some(route)
    }
}

// ============================================================================
// Navigation watcher
// ============================================================================

/// Merges history changes and completed router navigations into one callback
///
/// Subscriptions live as long as the watcher; dropping it stops delivery.
pub struct NavigationWatcher {
    subscriptions: Vec<Subscription>,
}

impl NavigationWatcher {
    pub fn new(location: &Location, router: &Router, on_navigation: impl Fn() + 'static) -> Self {
        let handler: Rc<dyn Fn()> = Rc::new(on_navigation);

        let on_history = Rc::clone(&handler);
        let history = location.events().subscribe(move |event: &PopStateEvent| {
            tracing::trace!("history {:?} to {}", event.direction, event.url);
            on_history();
        });

        let on_route = handler;
        let routes = router.events().subscribe(move |event: &RouterEvent| {
            if matches!(event, RouterEvent::NavigationEnd { .. }) {
                on_route();
            }
        });

        Self {
            subscriptions: vec![history, routes],
        }
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<usize>>, impl Fn() + 'static) {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        (count, move || c.set(c.get() + 1))
    }

    #[test]
    fn test_emitter_delivers_to_all_listeners() {
        let emitter: EventEmitter<u32> = EventEmitter::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let s1 = {
            let seen = Rc::clone(&seen);
            emitter.subscribe(move |v| seen.borrow_mut().push(("a", *v)))
        };
        let s2 = {
            let seen = Rc::clone(&seen);
            emitter.subscribe(move |v| seen.borrow_mut().push(("b", *v)))
        };

        emitter.emit(&7);
        assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7)]);

        drop(s1);
        emitter.emit(&8);
        assert_eq!(seen.borrow().last(), Some(&("b", 8)));
        assert_eq!(emitter.listener_count(), 1);

        s2.cancel();
        assert_eq!(emitter.listener_count(), 0);
    }

    #[test]
    fn test_navigation_debug_reports_route_and_listeners() {
        let mut nav = Navigation::new(Route::Dashboard);
        let (_, handler) = counter();
        let _watcher = NavigationWatcher::new(&nav.location, &nav.router, handler);
        nav.navigate(Route::Apps);

        let debug = format!("{:?}", nav);
        assert!(debug.contains("route: Apps"));
        assert!(debug.contains("history_index: 1"));
        assert!(debug.contains("router_listeners: 1"));
        assert!(debug.contains("history_listeners: 1"));
    }

    #[test]
    fn test_subscription_outliving_emitter_is_harmless() {
        let emitter: EventEmitter<()> = EventEmitter::new();
        let sub = emitter.subscribe(|_| {});
        drop(emitter);
        drop(sub);
    }

    #[test]
    fn test_router_skips_same_route() {
        let mut router = Router::new(Route::Dashboard);
        let events = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let events = Rc::clone(&events);
            router
                .events()
                .subscribe(move |e: &RouterEvent| events.borrow_mut().push(*e))
        };

        assert!(!router.navigate(Route::Dashboard));
        assert!(router.navigate(Route::Apps));

        let events = events.borrow();
        assert!(matches!(events[0], RouterEvent::NavigationStart { id: 1, .. }));
        assert!(matches!(events[1], RouterEvent::NavigationSkipped { id: 1, .. }));
        assert!(matches!(
            events[3],
            RouterEvent::NavigationEnd { id: 2, url: "/apps" }
        ));
        assert_eq!(router.current(), Route::Apps);
    }

    #[test]
    fn test_location_back_forward() {
        let mut location = Location::new(Route::Dashboard);
        location.push(Route::Datasets);
        location.push(Route::Snapshots);

        assert_eq!(location.back(), Some(Route::Datasets));
        assert_eq!(location.back(), Some(Route::Dashboard));
        assert_eq!(location.back(), None);
        assert_eq!(location.forward(), Some(Route::Datasets));

        // New entry drops forward history
        location.push(Route::Apps);
        assert!(!location.can_go_forward());
        assert_eq!(location.back(), Some(Route::Datasets));
    }

    #[test]
    fn test_watcher_fires_on_navigation_end_only() {
        let mut nav = Navigation::new(Route::Dashboard);
        let (count, handler) = counter();
        let _watcher = NavigationWatcher::new(&nav.location, &nav.router, handler);

        nav.navigate(Route::Datasets);
        assert_eq!(count.get(), 1);

        // Skipped navigation does not count
        nav.navigate(Route::Datasets);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_watcher_merges_history_and_router() {
        let mut nav = Navigation::new(Route::Dashboard);
        nav.navigate(Route::Datasets);

        let (count, handler) = counter();
        let _watcher = NavigationWatcher::new(&nav.location, &nav.router, handler);

        // Pop-state plus the router navigation it triggers
        assert_eq!(nav.back(), Some(Route::Dashboard));
        assert_eq!(count.get(), 2);
        assert_eq!(nav.current(), Route::Dashboard);
    }

    #[test]
    fn test_dropping_watcher_unsubscribes() {
        let mut nav = Navigation::new(Route::Dashboard);
        let (count, handler) = counter();
        let watcher = NavigationWatcher::new(&nav.location, &nav.router, handler);
        assert_eq!(watcher.subscription_count(), 2);
        assert_eq!(nav.router.events().listener_count(), 1);
        assert_eq!(nav.location.events().listener_count(), 1);

        drop(watcher);
        nav.navigate(Route::Apps);
        nav.back();

        assert_eq!(count.get(), 0);
        assert_eq!(nav.router.events().listener_count(), 0);
        assert_eq!(nav.location.events().listener_count(), 0);
    }

    #[test]
    fn test_route_next_wraps() {
        assert_eq!(Route::Dashboard.next(), Route::Datasets);
        assert_eq!(Route::Apps.next(), Route::Dashboard);
    }
}
