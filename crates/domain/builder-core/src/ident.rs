use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectIdentError {
    #[error("project identifier is empty")]
    Empty,
    #[error("project identifier '{0}' must have the form derivation/name")]
    MissingSeparator(String),
    #[error("project identifier '{0}' has an empty derivation")]
    EmptyDerivation(String),
    #[error("project identifier '{0}' has an empty name")]
    EmptyName(String),
    #[error("project identifier '{0}' has too many segments")]
    TooManySegments(String),
}

/// Fully qualified project identifier, `derivation/name`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ProjectIdent {
    pub derivation: String,
    pub name: String,
}

impl ProjectIdent {
    pub fn new(derivation: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            derivation: derivation.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ProjectIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.derivation, self.name)
    }
}

impl FromStr for ProjectIdent {
    type Err = ProjectIdentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ProjectIdentError::Empty);
        }

        let (derivation, name) = s
            .split_once('/')
            .ok_or_else(|| ProjectIdentError::MissingSeparator(s.to_string()))?;

        if name.contains('/') {
            return Err(ProjectIdentError::TooManySegments(s.to_string()));
        }
        if derivation.trim().is_empty() {
            return Err(ProjectIdentError::EmptyDerivation(s.to_string()));
        }
        if name.trim().is_empty() {
            return Err(ProjectIdentError::EmptyName(s.to_string()));
        }

        Ok(Self::new(derivation.trim(), name.trim()))
    }
}
