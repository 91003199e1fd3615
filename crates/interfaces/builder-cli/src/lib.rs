pub mod commands;

use std::path::PathBuf;

/// Where the `projects` command reads its list from.
#[derive(Debug, Clone)]
pub enum ProjectsFrom {
    Depot(String),
    File(PathBuf),
}
