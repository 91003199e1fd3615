use builder_core::Project;

use crate::domain::ClientSettings;

/// The collaborator that populates the projects slice.
pub trait ProjectsSource: Send + Sync + 'static {
    fn fetch_projects(&self) -> anyhow::Result<Vec<Project>>;
}

impl<T: ProjectsSource + ?Sized> ProjectsSource for Box<T> {
    fn fetch_projects(&self) -> anyhow::Result<Vec<Project>> {
        (**self).fetch_projects()
    }
}

pub trait SettingsRepo: Send + Sync + 'static {
    fn load(&self) -> anyhow::Result<ClientSettings>;
    fn save(&self, settings: &ClientSettings) -> anyhow::Result<()>;
}
