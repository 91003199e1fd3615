use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};

use crate::domain::AppState;

use super::{actions::Action, events::DomainEvent, reducer::reduce};

/// Callback invoked with every newly published snapshot.
pub type Listener = Arc<dyn Fn(&AppState) + Send + Sync>;

/// The read / dispatch / subscribe contract views are written against.
pub trait StateStore {
    /// Current snapshot. Never fails and has no side effects.
    fn get_state(&self) -> Arc<AppState>;

    /// Submits an action. Must be callable while a view is mounting.
    fn dispatch(&self, action: Action);

    /// Registers `listener` until the returned handle is dropped.
    fn subscribe(&self, listener: Listener) -> Subscription;
}

struct Entry {
    id: u64,
    active: Arc<AtomicBool>,
    listener: Listener,
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<Entry>,
}

#[derive(Clone)]
pub struct AppStore {
    state: Arc<RwLock<Arc<AppState>>>,
    listeners: Arc<Mutex<Listeners>>,
}

impl AppStore {
    pub fn new(state: AppState) -> Self {
        Self {
            state: Arc::new(RwLock::new(Arc::new(state))),
            listeners: Arc::new(Mutex::new(Listeners::default())),
        }
    }

    pub fn state(&self) -> Arc<AppState> {
        self.state.read().clone()
    }

    /// Reduces `ev` into a new snapshot and notifies listeners if it differs
    /// from the previous one.
    pub fn apply(&self, ev: DomainEvent) {
        let next = {
            let mut guard = self.state.write();
            let next = reduce(AppState::clone(&guard), ev);
            if next == **guard {
                return;
            }
            let next = Arc::new(next);
            *guard = next.clone();
            next
        };

        self.notify(&next);
    }

    pub fn subscribe(&self, listener: Listener) -> Subscription {
        let mut guard = self.listeners.lock();
        let id = guard.next_id;
        guard.next_id += 1;
        let active = Arc::new(AtomicBool::new(true));
        guard.entries.push(Entry {
            id,
            active: active.clone(),
            listener,
        });

        Subscription {
            id,
            active,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.lock().entries.len()
    }

    fn notify(&self, state: &AppState) {
        // Listeners run without the registry lock held so they may read the
        // store or unsubscribe themselves. The active flag is rechecked per
        // call because an earlier listener in this pass may have dropped a
        // later one's subscription.
        let listeners: Vec<(Arc<AtomicBool>, Listener)> = self
            .listeners
            .lock()
            .entries
            .iter()
            .map(|e| (e.active.clone(), e.listener.clone()))
            .collect();

        for (active, listener) in listeners {
            if active.load(Ordering::Acquire) {
                listener(state);
            }
        }
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

/// Unsubscribe handle returned by [`StateStore::subscribe`].
#[must_use = "dropping a Subscription unsubscribes its listener"]
pub struct Subscription {
    id: u64,
    active: Arc<AtomicBool>,
    listeners: Weak<Mutex<Listeners>>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.active.store(false, Ordering::Release);
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.lock().entries.retain(|e| e.id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use builder_core::Project;
    use std::sync::atomic::AtomicUsize;

    fn counting_listener() -> (Listener, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        let listener: Listener = Arc::new(move |_state: &AppState| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        (listener, count)
    }

    #[test]
    fn apply_publishes_a_new_snapshot() {
        let store = AppStore::default();
        let before = store.state();

        store.apply(DomainEvent::ProjectsLoaded(vec![Project::new("core", "redis")]));

        let after = store.state();
        assert!(before.projects.is_empty(), "old snapshot must not change");
        assert_eq!(after.projects, vec![Project::new("core", "redis")]);
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn listeners_are_notified_on_change_only() {
        let store = AppStore::default();
        let (listener, count) = counting_listener();
        let _sub = store.subscribe(listener);

        store.apply(DomainEvent::ProjectsLoaded(vec![Project::new("core", "redis")]));
        store.apply(DomainEvent::ProjectsFetchFailed {
            message: "boom".into(),
        });

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dropped_subscription_stops_notifications() {
        let store = AppStore::default();
        let (listener, count) = counting_listener();
        let sub = store.subscribe(listener);
        assert_eq!(store.subscriber_count(), 1);

        sub.unsubscribe();
        assert_eq!(store.subscriber_count(), 0);

        store.apply(DomainEvent::ProjectsLoaded(vec![Project::new("core", "redis")]));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn listener_can_read_the_store_reentrantly() {
        let store = AppStore::default();
        let seen = Arc::new(AtomicUsize::new(0));

        let reader = store.clone();
        let s = seen.clone();
        let _sub = store.subscribe(Arc::new(move |_state: &AppState| {
            s.store(reader.state().projects.len(), Ordering::SeqCst);
        }));

        store.apply(DomainEvent::ProjectsLoaded(vec![
            Project::new("a", "x"),
            Project::new("b", "y"),
        ]));

        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn listener_unsubscribed_mid_notification_is_skipped() {
        let store = AppStore::default();
        let victim: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

        let slot = victim.clone();
        let _first = store.subscribe(Arc::new(move |_state: &AppState| {
            let sub = slot.lock().take();
            drop(sub);
        }));
        let (listener, count) = counting_listener();
        *victim.lock() = Some(store.subscribe(listener));

        store.apply(DomainEvent::ProjectsLoaded(vec![Project::new("core", "redis")]));

        assert_eq!(store.subscriber_count(), 1);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
