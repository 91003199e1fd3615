use std::fmt::Write as _;

use builder_core::Project;

use crate::domain::Route;

pub const PROJECTS_TITLE: &str = "Projects";
pub const EMPTY_STATE_MESSAGE: &str = "You don't have any projects yet.";
pub const EMPTY_STATE_CALL_TO_ACTION: &str = "Why not create one?";
pub const CREATE_PROJECT_LABEL: &str = "New Project";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkVm {
    pub label: String,
    pub route: Route,
}

impl LinkVm {
    fn new(label: impl Into<String>, route: Route) -> Self {
        Self {
            label: label.into(),
            route,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyStateVm {
    pub message: String,
    pub call_to_action: LinkVm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectListItemVm {
    pub derivation: String,
    pub name: String,
    pub label: String,
    pub link: LinkVm,
}

impl From<&Project> for ProjectListItemVm {
    fn from(p: &Project) -> Self {
        let label = p.display_label();
        Self {
            derivation: p.derivation.clone(),
            name: p.name.clone(),
            link: LinkVm::new(label.clone(), Route::Project(p.ident())),
            label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectsBody {
    Empty(EmptyStateVm),
    List(Vec<ProjectListItemVm>),
}

/// Everything the projects screen shows for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectsViewVm {
    pub title: &'static str,
    pub body: ProjectsBody,
    pub create_link: LinkVm,
}

impl ProjectsViewVm {
    pub fn items(&self) -> &[ProjectListItemVm] {
        match &self.body {
            ProjectsBody::Empty(_) => &[],
            ProjectsBody::List(items) => items.as_slice(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.body, ProjectsBody::Empty(_))
    }

    /// Plain-text rendering for terminals.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        match &self.body {
            ProjectsBody::Empty(empty) => {
                let _ = writeln!(
                    out,
                    "  {} {} [{}]",
                    empty.message,
                    empty.call_to_action.label,
                    empty.call_to_action.route.name()
                );
            }
            ProjectsBody::List(items) => {
                for item in items {
                    let _ = writeln!(out, "  {}", item.label);
                }
            }
        }
        let _ = writeln!(
            out,
            "{} [{}]",
            self.create_link.label,
            self.create_link.route.name()
        );
        out
    }
}

pub fn projects_view_vm(projects: &[Project]) -> ProjectsViewVm {
    let body = if projects.is_empty() {
        ProjectsBody::Empty(EmptyStateVm {
            message: EMPTY_STATE_MESSAGE.to_string(),
            call_to_action: LinkVm::new(EMPTY_STATE_CALL_TO_ACTION, Route::ProjectCreate),
        })
    } else {
        ProjectsBody::List(projects.iter().map(ProjectListItemVm::from).collect())
    };

    ProjectsViewVm {
        title: PROJECTS_TITLE,
        body,
        create_link: LinkVm::new(CREATE_PROJECT_LABEL, Route::ProjectCreate),
    }
}
