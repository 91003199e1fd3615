use serde::{Deserialize, Serialize};

use crate::domain::Route;

/// A request for a state transition, submitted through [`StateStore::dispatch`].
///
/// [`StateStore::dispatch`]: super::StateStore::dispatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    FetchProjects,
    Navigate(Route),
}

impl Action {
    pub const FETCH_PROJECTS: &'static str = "FETCH_PROJECTS";
    pub const NAVIGATE: &'static str = "NAVIGATE";

    /// Wire discriminator, as found in the `type` field.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::FetchProjects => Self::FETCH_PROJECTS,
            Action::Navigate(_) => Self::NAVIGATE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use builder_core::ProjectIdent;

    #[test]
    fn fetch_projects_serializes_with_type_discriminator() {
        let json = serde_json::to_value(Action::FetchProjects).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "FETCH_PROJECTS" }));
        assert_eq!(Action::FetchProjects.kind(), "FETCH_PROJECTS");
    }

    #[test]
    fn navigate_carries_symbolic_route() {
        let action = Action::Navigate(Route::ProjectCreate);
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "NAVIGATE", "payload": "ProjectCreate" })
        );

        let back: Action = serde_json::from_value(json).unwrap();
        assert_eq!(back, action);

        let detail = Action::Navigate(Route::Project(ProjectIdent::new("core", "redis")));
        assert_eq!(detail.kind(), Action::NAVIGATE);
    }
}
