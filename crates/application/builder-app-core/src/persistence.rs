use crate::domain::ClientSettings;
use crate::ports::SettingsRepo;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const QUALIFIER: &str = "sh";
const ORG: &str = "builder";
const APP: &str = "builder";

/// Settings stored as `settings.json` in the platform config directory, or
/// under an explicit root.
pub struct FilePersistence {
    root: Option<PathBuf>,
}

impl Default for FilePersistence {
    fn default() -> Self {
        Self::new()
    }
}

impl FilePersistence {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn config_dir(&self) -> Result<PathBuf> {
        let config_dir = match &self.root {
            Some(root) => root.clone(),
            None => ProjectDirs::from(QUALIFIER, ORG, APP)
                .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
                .config_dir()
                .to_path_buf(),
        };

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).with_context(|| {
                format!("Failed to create config dir {}", config_dir.display())
            })?;
        }
        Ok(config_dir)
    }

    pub fn settings_path(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("settings.json"))
    }

    pub fn load_settings(&self) -> Result<ClientSettings> {
        let path = self.settings_path()?;
        if !path.exists() {
            return Ok(ClientSettings::default());
        }
        let content = fs::read_to_string(&path).context("Failed to read settings")?;
        let settings: ClientSettings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    pub fn save_settings(&self, settings: &ClientSettings) -> Result<()> {
        let path = self.settings_path()?;
        let json = serde_json::to_string_pretty(settings)?;
        atomic_write(&path, json.as_bytes()).context("Failed to write settings")?;
        Ok(())
    }
}

impl SettingsRepo for FilePersistence {
    fn load(&self) -> Result<ClientSettings> {
        self.load_settings()
    }

    fn save(&self, settings: &ClientSettings) -> Result<()> {
        self.save_settings(settings)
    }
}

fn atomic_write(path: &Path, contents: &[u8]) -> Result<()> {
    let tmp_path = {
        let mut name = path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    };

    let mut file = fs::File::create(&tmp_path)
        .with_context(|| format!("Failed to create temp file {}", tmp_path.display()))?;

    file.write_all(contents)
        .with_context(|| format!("Failed to write temp file {}", tmp_path.display()))?;
    file.sync_all()
        .with_context(|| format!("Failed to sync temp file {}", tmp_path.display()))?;
    drop(file);

    match fs::rename(&tmp_path, path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            fs::remove_file(path).ok();
            fs::rename(&tmp_path, path).with_context(|| {
                format!("Failed to replace destination file {}", path.display())
            })?;
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!(
                    "Failed to rename temp file {} to {}",
                    tmp_path.display(),
                    path.display()
                )
            });
        }
    }

    Ok(())
}
