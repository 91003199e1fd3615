pub mod projects;

pub use projects::{ProjectsView, ViewPhase};
