use builder_core::Project;

use crate::domain::Route;

#[derive(Debug, Clone)]
pub enum DomainEvent {
    // Projects slice
    ProjectsLoaded(Vec<Project>),
    ProjectsFetchFailed { message: String },

    // Navigation
    RouteChanged(Route),
}
