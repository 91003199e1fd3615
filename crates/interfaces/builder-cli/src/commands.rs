use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use builder_app_core::app_core::AppStore;
use builder_app_core::persistence::FilePersistence;
use builder_app_core::ports::{ProjectsSource, SettingsRepo};
use builder_app_core::sources::{FileProjectsSource, HttpProjectsSource};
use builder_app_core::viewmodel::ProjectsViewVm;
use builder_app_core::{AppKernel, ClientSettings, ProjectsView};
use tracing::{debug, warn};

use crate::ProjectsFrom;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub fn projects_source(
    from: ProjectsFrom,
    settings: &ClientSettings,
) -> Result<Box<dyn ProjectsSource>> {
    Ok(match from {
        ProjectsFrom::Depot(url) => {
            let settings = ClientSettings {
                depot_url: url,
                ..settings.clone()
            };
            Box::new(HttpProjectsSource::new(&settings)?)
        }
        ProjectsFrom::File(path) => Box::new(FileProjectsSource::new(path)),
    })
}

/// Mounts a projects view, waits up to `wait` for the fetch to report back,
/// and returns what the view renders at that point.
pub fn cmd_projects(source: Box<dyn ProjectsSource>, wait: Duration) -> ProjectsViewVm {
    let mut kernel = AppKernel::new(AppStore::default(), source);
    let mut view = ProjectsView::new();
    view.mount(&kernel);

    let deadline = Instant::now() + wait;
    let mut reported = false;
    while Instant::now() < deadline {
        if kernel.tick() > 0 {
            reported = true;
            break;
        }
        std::thread::sleep(POLL_INTERVAL);
    }

    if !reported {
        warn!("Timed out after {:?} waiting for projects", wait);
    }
    debug!(phase = ?view.phase(), "rendering projects");

    let vm = view.render(&kernel);
    view.unmount();
    vm
}

pub fn cmd_settings_show(repo: &impl SettingsRepo) -> Result<String> {
    let settings = repo.load()?;
    serde_json::to_string_pretty(&settings).context("Failed to serialize settings")
}

pub fn cmd_settings_set_depot_url(repo: &impl SettingsRepo, url: &str) -> Result<ClientSettings> {
    let depot_url = builder_infra::normalize_base_url(url)?;
    let mut settings = repo.load()?;
    settings.depot_url = depot_url.to_string();
    repo.save(&settings)?;
    Ok(settings)
}

pub fn cmd_settings_set_timeout(repo: &impl SettingsRepo, secs: u64) -> Result<ClientSettings> {
    let mut settings = repo.load()?;
    settings.request_timeout_secs = builder_config::clamp_timeout_secs(secs);
    repo.save(&settings)?;
    Ok(settings)
}

pub fn load_settings(persistence: &FilePersistence) -> ClientSettings {
    match persistence.load_settings() {
        Ok(s) => s.with_env_override(),
        Err(e) => {
            warn!("Failed to load settings, using defaults: {e:#}");
            ClientSettings::default().with_env_override()
        }
    }
}
