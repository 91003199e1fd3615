use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::app_core::{Action, AppStore, DomainEvent, Listener, StateStore, Subscription};
use crate::domain::AppState;
use crate::ports::ProjectsSource;

/// Store plus effect runner: the concrete [`StateStore`] the shells mount
/// views on.
///
/// Effects run on worker threads and report back through a channel; `tick`
/// drains it on the caller's thread, which is where listeners fire. A shell
/// that only ticks when woken (an egui frame loop) installs a wake hook so
/// finished effects schedule the next tick.
pub struct AppKernel<P> {
    pub store: AppStore,
    projects: Arc<P>,
    wake: Option<WakeHook>,

    tx: mpsc::Sender<DomainEvent>,
    rx: mpsc::Receiver<DomainEvent>,
}

/// Called from worker threads after an event has been queued for `tick`.
pub type WakeHook = Arc<dyn Fn() + Send + Sync>;

impl<P> AppKernel<P>
where
    P: ProjectsSource,
{
    pub fn new(store: AppStore, projects: P) -> Self {
        let (tx, rx) = mpsc::channel(builder_config::EVENT_CHANNEL_CAPACITY);
        Self {
            store,
            projects: Arc::new(projects),
            wake: None,
            tx,
            rx,
        }
    }

    pub fn with_wake_hook<F>(mut self, wake: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.wake = Some(Arc::new(wake));
        self
    }

    pub fn dispatch(&self, action: Action) {
        debug!(action = action.kind(), "dispatch");
        match action {
            Action::FetchProjects => self.fetch_projects(),
            Action::Navigate(r) => self.store.apply(DomainEvent::RouteChanged(r)),
        }
    }

    fn fetch_projects(&self) {
        let tx = self.tx.clone();
        let projects = self.projects.clone();
        let wake = self.wake.clone();
        let spawn_res = std::thread::Builder::new()
            .name("builder-fetch-projects".into())
            .spawn(move || {
                let ev = match projects.fetch_projects() {
                    Ok(p) => DomainEvent::ProjectsLoaded(p),
                    Err(e) => DomainEvent::ProjectsFetchFailed {
                        message: format!("{e:#}"),
                    },
                };
                if tx.blocking_send(ev).is_ok() {
                    if let Some(wake) = wake {
                        wake();
                    }
                }
            });

        if let Err(e) = spawn_res {
            self.handle(DomainEvent::ProjectsFetchFailed {
                message: format!("Failed to start fetch worker thread: {e}"),
            });
        }
    }

    /// Applies every event the workers have reported so far. Returns how many
    /// were processed.
    pub fn tick(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(ev) = self.rx.try_recv() {
            self.handle(ev);
            processed += 1;
        }
        processed
    }

    fn handle(&self, ev: DomainEvent) {
        match &ev {
            DomainEvent::ProjectsLoaded(p) => info!("Loaded {} projects", p.len()),
            DomainEvent::ProjectsFetchFailed { message } => {
                warn!("Failed to fetch projects: {message}")
            }
            DomainEvent::RouteChanged(_) => {}
        }
        self.store.apply(ev);
    }

    pub fn sender(&self) -> mpsc::Sender<DomainEvent> {
        self.tx.clone()
    }
}

impl<P> StateStore for AppKernel<P>
where
    P: ProjectsSource,
{
    fn get_state(&self) -> Arc<AppState> {
        self.store.state()
    }

    fn dispatch(&self, action: Action) {
        AppKernel::dispatch(self, action)
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        self.store.subscribe(listener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use builder_core::Project;
    use std::sync::mpsc as std_mpsc;
    use std::time::Duration;

    struct Immediate;

    impl ProjectsSource for Immediate {
        fn fetch_projects(&self) -> anyhow::Result<Vec<Project>> {
            Ok(vec![Project::new("core", "redis")])
        }
    }

    #[test]
    fn finished_fetch_wakes_the_shell_without_a_tick() {
        let (woke_tx, woke_rx) = std_mpsc::channel();
        let woke_tx = parking_lot::Mutex::new(woke_tx);
        let mut kernel = AppKernel::new(AppStore::default(), Immediate).with_wake_hook(move || {
            let _ = woke_tx.lock().send(());
        });

        kernel.dispatch(Action::FetchProjects);

        woke_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("wake hook after fetch");
        assert!(kernel.get_state().projects.is_empty(), "not applied before tick");

        assert_eq!(kernel.tick(), 1);
        assert_eq!(kernel.get_state().projects, vec![Project::new("core", "redis")]);
    }

    #[test]
    fn navigate_applies_without_waking() {
        let (woke_tx, woke_rx) = std_mpsc::channel::<()>();
        let woke_tx = parking_lot::Mutex::new(woke_tx);
        let kernel = AppKernel::new(AppStore::default(), Immediate).with_wake_hook(move || {
            let _ = woke_tx.lock().send(());
        });

        kernel.dispatch(Action::Navigate(crate::Route::ProjectCreate));

        assert_eq!(kernel.get_state().route, crate::Route::ProjectCreate);
        assert!(woke_rx.try_recv().is_err());
    }
}
