use std::time::Duration;

use builder_core::{Project, ProjectIdent};
use serde::{Deserialize, Serialize};

fn default_depot_url() -> String {
    builder_config::DEFAULT_DEPOT_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    builder_config::DEFAULT_REQUEST_TIMEOUT_SECS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    #[serde(default = "default_depot_url")]
    pub depot_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            depot_url: default_depot_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ClientSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(builder_config::clamp_timeout_secs(
            self.request_timeout_secs,
        ))
    }

    /// Applies `BUILDER_DEPOT_URL` if it is set and non-empty.
    pub fn with_env_override(mut self) -> Self {
        if let Ok(url) = std::env::var(builder_config::DEPOT_URL_ENV) {
            if !url.trim().is_empty() {
                self.depot_url = url.trim().to_string();
            }
        }
        self
    }
}

/// Symbolic navigation targets. Views emit these; they never build URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    #[default]
    Projects,
    ProjectCreate,
    Project(ProjectIdent),
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Projects => "Projects",
            Route::ProjectCreate => "ProjectCreate",
            Route::Project(_) => "Project",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub route: Route,
    pub projects: Vec<Project>,
}
