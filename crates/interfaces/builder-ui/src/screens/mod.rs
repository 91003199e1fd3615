pub mod project;
pub mod project_create;
pub mod projects;
