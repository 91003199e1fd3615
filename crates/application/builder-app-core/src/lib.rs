pub mod app_core;
pub mod domain;
pub mod kernel;
pub mod persistence;
pub mod ports;
pub mod sources;
pub mod viewmodel;
pub mod views;

pub use app_core::*;
pub use builder_core::{Project, ProjectIdent};
pub use domain::{AppState, ClientSettings, Route};
pub use kernel::{AppKernel, WakeHook};
pub use ports::*;
pub use views::{ProjectsView, ViewPhase};
