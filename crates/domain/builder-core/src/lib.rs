use serde::{Deserialize, Serialize};

pub mod ident;

pub use ident::{ProjectIdent, ProjectIdentError};

/// A project hosted on the depot, owned by a derivation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Project {
    pub derivation: String,
    pub name: String,
}

impl Project {
    pub fn new(derivation: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            derivation: derivation.into(),
            name: name.into(),
        }
    }

    pub fn ident(&self) -> ProjectIdent {
        ProjectIdent {
            derivation: self.derivation.clone(),
            name: self.name.clone(),
        }
    }

    /// Display form used by project listings: `derivation / name`.
    pub fn display_label(&self) -> String {
        format!("{} / {}", self.derivation, self.name)
    }
}
