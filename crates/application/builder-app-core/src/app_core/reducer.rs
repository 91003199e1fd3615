use crate::domain::AppState;

use super::events::DomainEvent;

pub fn reduce(mut state: AppState, ev: DomainEvent) -> AppState {
    match ev {
        DomainEvent::ProjectsLoaded(projects) => state.projects = projects,

        // The slice carries no error or loading flag; a failed fetch keeps
        // whatever the store already holds.
        DomainEvent::ProjectsFetchFailed { .. } => {}

        DomainEvent::RouteChanged(r) => state.route = r,
    }
    state
}
