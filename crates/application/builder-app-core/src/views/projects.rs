use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::app_core::{Action, Listener, StateStore, Subscription};
use crate::domain::AppState;
use crate::viewmodel::{projects_view_vm, ProjectsViewVm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Detached,
    /// Mounted and the fetch dispatched; no state change observed yet.
    MountedPending,
    /// At least one state change has been observed since mounting.
    MountedRendered,
}

#[derive(Default)]
struct ChangeFlags {
    dirty: AtomicBool,
    notified: AtomicBool,
}

/// Lists the projects held by the store and triggers their fetch on mount.
///
/// The view keeps no copy of the list: every render reads the store's
/// current snapshot.
pub struct ProjectsView {
    subscription: Option<Subscription>,
    flags: Arc<ChangeFlags>,
}

impl Default for ProjectsView {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectsView {
    pub fn new() -> Self {
        Self {
            subscription: None,
            flags: Arc::new(ChangeFlags::default()),
        }
    }

    pub fn mount<S>(&mut self, store: &S)
    where
        S: StateStore + ?Sized,
    {
        self.mount_with(store, || {});
    }

    /// Subscribes to `store` and dispatches [`Action::FetchProjects`].
    ///
    /// `on_change` runs after every store notification, on whichever thread
    /// published the snapshot. Mounting an already mounted view does nothing.
    pub fn mount_with<S, F>(&mut self, store: &S, on_change: F)
    where
        S: StateStore + ?Sized,
        F: Fn() + Send + Sync + 'static,
    {
        if self.subscription.is_some() {
            debug!("projects view already mounted");
            return;
        }

        let flags = Arc::new(ChangeFlags::default());
        flags.dirty.store(true, Ordering::Release);
        self.flags = flags.clone();

        let listener: Listener = Arc::new(move |_state: &AppState| {
            flags.notified.store(true, Ordering::Release);
            flags.dirty.store(true, Ordering::Release);
            on_change();
        });

        // Subscribe first so a store that reduces synchronously cannot
        // publish before we are listening.
        self.subscription = Some(store.subscribe(listener));
        store.dispatch(Action::FetchProjects);
    }

    pub fn unmount(&mut self) {
        if let Some(sub) = self.subscription.take() {
            sub.unsubscribe();
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn phase(&self) -> ViewPhase {
        if self.subscription.is_none() {
            ViewPhase::Detached
        } else if self.flags.notified.load(Ordering::Acquire) {
            ViewPhase::MountedRendered
        } else {
            ViewPhase::MountedPending
        }
    }

    /// True after mounting and after each store change, until the next render.
    pub fn needs_render(&self) -> bool {
        self.flags.dirty.load(Ordering::Acquire)
    }

    pub fn render<S>(&mut self, store: &S) -> ProjectsViewVm
    where
        S: StateStore + ?Sized,
    {
        self.flags.dirty.store(false, Ordering::Release);
        let state = store.get_state();
        projects_view_vm(&state.projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_core::{AppStore, DomainEvent};
    use builder_core::Project;
    use parking_lot::Mutex;

    /// Store double that records dispatched actions and never runs effects.
    #[derive(Default)]
    struct RecordingStore {
        inner: AppStore,
        dispatched: Mutex<Vec<Action>>,
    }

    impl StateStore for RecordingStore {
        fn get_state(&self) -> Arc<AppState> {
            self.inner.state()
        }

        fn dispatch(&self, action: Action) {
            self.dispatched.lock().push(action);
        }

        fn subscribe(&self, listener: Listener) -> Subscription {
            self.inner.subscribe(listener)
        }
    }

    #[test]
    fn mount_subscribes_then_dispatches_once() {
        let store = RecordingStore::default();
        let mut view = ProjectsView::new();

        view.mount(&store);
        view.mount(&store);

        assert_eq!(*store.dispatched.lock(), vec![Action::FetchProjects]);
        assert_eq!(store.inner.subscriber_count(), 1);
        assert_eq!(view.phase(), ViewPhase::MountedPending);
        assert!(view.needs_render());
    }

    #[test]
    fn renders_do_not_dispatch() {
        let store = RecordingStore::default();
        let mut view = ProjectsView::new();
        view.mount(&store);

        for _ in 0..5 {
            let _ = view.render(&store);
        }

        assert_eq!(store.dispatched.lock().len(), 1);
        assert!(!view.needs_render());
    }

    #[test]
    fn store_change_marks_view_dirty_and_rendered() {
        let store = RecordingStore::default();
        let mut view = ProjectsView::new();
        view.mount(&store);
        let _ = view.render(&store);

        store
            .inner
            .apply(DomainEvent::ProjectsLoaded(vec![Project::new("core", "redis")]));

        assert!(view.needs_render());
        assert_eq!(view.phase(), ViewPhase::MountedRendered);
        assert_eq!(view.render(&store).items()[0].label, "core / redis");
        assert!(!view.needs_render());
    }

    #[test]
    fn unmount_releases_subscription() {
        let store = RecordingStore::default();
        let mut view = ProjectsView::new();
        view.mount(&store);

        view.unmount();

        assert_eq!(store.inner.subscriber_count(), 0);
        assert_eq!(view.phase(), ViewPhase::Detached);
    }

    #[test]
    fn dropping_the_view_unsubscribes() {
        let store = RecordingStore::default();
        {
            let mut view = ProjectsView::new();
            view.mount(&store);
            assert_eq!(store.inner.subscriber_count(), 1);
        }
        assert_eq!(store.inner.subscriber_count(), 0);
    }

    #[test]
    fn remount_is_a_new_mount() {
        let store = RecordingStore::default();
        let mut view = ProjectsView::new();

        view.mount(&store);
        view.unmount();
        view.mount(&store);

        assert_eq!(store.dispatched.lock().len(), 2);
        assert_eq!(view.phase(), ViewPhase::MountedPending);
    }

    #[test]
    fn on_change_hook_runs_per_notification() {
        let store = RecordingStore::default();
        let hits = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let mut view = ProjectsView::new();

        let h = hits.clone();
        view.mount_with(&store, move || {
            h.fetch_add(1, Ordering::SeqCst);
        });

        store
            .inner
            .apply(DomainEvent::ProjectsLoaded(vec![Project::new("a", "x")]));
        store
            .inner
            .apply(DomainEvent::ProjectsLoaded(vec![Project::new("b", "y")]));

        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }
}
