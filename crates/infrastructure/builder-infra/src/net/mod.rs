use std::time::Duration;

use builder_core::Project;
use reqwest::{Client, Url};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DepotError {
    #[error("invalid depot url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("depot request failed: {0}")]
    Http(#[source] reqwest::Error),
    #[error("depot returned HTTP {status} for {url}")]
    Status { status: u16, url: String },
    #[error("failed to decode depot response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Builds the shared HTTP client used for every depot call.
pub fn default_http_client(timeout: Duration) -> Result<Client, DepotError> {
    Client::builder()
        .user_agent(builder_config::USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(DepotError::Http)
}

/// Parses a depot base URL and turns it into a directory base, so that
/// joining `projects` appends to the path instead of replacing its last
/// segment. Only http(s) is accepted.
pub fn normalize_base_url(url: &str) -> Result<Url, DepotError> {
    let invalid = |reason: String| DepotError::InvalidUrl {
        url: url.to_string(),
        reason,
    };

    let mut parsed = Url::parse(url.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }

    parsed.set_query(None);
    parsed.set_fragment(None);
    if !parsed.path().ends_with('/') {
        parsed.set_path(&format!("{}/", parsed.path()));
    }
    Ok(parsed)
}

/// Thin client over the depot's project endpoints.
#[derive(Debug, Clone)]
pub struct DepotClient {
    client: Client,
    base_url: Url,
}

impl DepotClient {
    pub fn new(client: Client, base_url: &str) -> Result<Self, DepotError> {
        let base_url = normalize_base_url(base_url)?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn projects_url(&self) -> Result<Url, DepotError> {
        self.base_url
            .join("projects")
            .map_err(|e| DepotError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    /// `GET {base}/projects`, returned in the order the depot sent them.
    pub async fn list_projects(&self) -> Result<Vec<Project>, DepotError> {
        let url = self.projects_url()?;
        debug!("GET {url}");

        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(DepotError::Http)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(DepotError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        resp.json::<Vec<Project>>()
            .await
            .map_err(|source| DepotError::Decode {
                url: url.to_string(),
                source,
            })
    }
}
