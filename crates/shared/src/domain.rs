use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ParseError;

/// Reserved id carried by every process root blade.
pub const ROOT_BLADE_ID: &str = "root";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BladeId(String);

impl BladeId {
    /// A fresh, never-reused id for a newly constructed blade.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn root() -> Self {
        Self(ROOT_BLADE_ID.to_string())
    }

    pub fn is_root(&self) -> bool {
        self.0 == ROOT_BLADE_ID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BladeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for BladeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for BladeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Top-level workflow grouping. Each process owns one root blade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Process {
    #[default]
    Staging,
    Topology,
}

impl Process {
    pub const ALL: [Process; 2] = [Process::Staging, Process::Topology];

    pub fn as_str(self) -> &'static str {
        match self {
            Process::Staging => "staging",
            Process::Topology => "topology",
        }
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Process {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Process::ALL
            .into_iter()
            .find(|process| process.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownProcess(s.to_string()))
    }
}

/// Kind of the most recently applied reducer. Presentation hint only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LastAction {
    #[default]
    Init,
    Push,
    Pop,
    Replace,
    Reset,
}
