use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use builder_core::Project;
use builder_infra::DepotClient;
use tokio::runtime::Runtime;

use crate::domain::ClientSettings;
use crate::ports::ProjectsSource;

/// Reads the projects list from a JSON file shaped like the depot response.
pub struct FileProjectsSource {
    path: PathBuf,
}

impl FileProjectsSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProjectsSource for FileProjectsSource {
    fn fetch_projects(&self) -> anyhow::Result<Vec<Project>> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let projects: Vec<Project> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse projects from {}", self.path.display()))?;
        Ok(projects)
    }
}

/// Runtime shared by every HTTP source, built on first fetch. A build failure
/// is kept so later fetches report it instead of retrying.
fn http_runtime() -> anyhow::Result<&'static Runtime> {
    static RUNTIME: OnceLock<Result<Runtime, String>> = OnceLock::new();

    RUNTIME
        .get_or_init(|| {
            tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .thread_name("builder-http")
                .enable_all()
                .build()
                .map_err(|e| e.to_string())
        })
        .as_ref()
        .map_err(|message| anyhow::anyhow!("Failed to start HTTP runtime: {message}"))
}

/// Fetches projects from the depot over HTTP.
///
/// Blocks the calling thread on the shared runtime, so it must be driven from
/// a worker thread rather than from inside an async context.
pub struct HttpProjectsSource {
    depot: DepotClient,
}

impl HttpProjectsSource {
    pub fn new(settings: &ClientSettings) -> anyhow::Result<Self> {
        let client = builder_infra::default_http_client(settings.request_timeout())
            .context("Failed to build HTTP client")?;
        let depot = DepotClient::new(client, &settings.depot_url)?;
        Ok(Self { depot })
    }

    pub fn depot_url(&self) -> &str {
        self.depot.base_url().as_str()
    }
}

impl ProjectsSource for HttpProjectsSource {
    fn fetch_projects(&self) -> anyhow::Result<Vec<Project>> {
        let projects = http_runtime()?
            .block_on(self.depot.list_projects())
            .with_context(|| format!("Failed to list projects from {}", self.depot_url()))?;
        Ok(projects)
    }
}
