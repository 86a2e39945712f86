//! Closed catalogue of blade types and their typed payloads.
//!
//! `BladeProps` is the single source of truth: one variant per blade type, each
//! carrying exactly the payload that type renders from. Adding a blade type means
//! adding a variant here and a tag to `BladeType`; every exhaustive `match` in the
//! workspace then points at the remaining places to extend.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{domain::BladeId, error::ParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BladeType {
    StagingChanges,
    TopologyGraph,
    CommitListFallback,
    CommitDetails,
    Diff,
    ViewerNupkg,
    ViewerImage,
    ViewerMarkdown,
    #[serde(rename = "viewer-3d")]
    Viewer3d,
    ViewerCode,
    ViewerPlaintext,
    BranchManager,
    RepoBrowser,
    Settings,
    Changelog,
    GitflowCheatsheet,
    InitRepo,
    ConventionalCommit,
    ExtensionManager,
    ExtensionDetail,
    WelcomeScreen,
}

impl BladeType {
    pub const ALL: [BladeType; 21] = [
        BladeType::StagingChanges,
        BladeType::TopologyGraph,
        BladeType::CommitListFallback,
        BladeType::CommitDetails,
        BladeType::Diff,
        BladeType::ViewerNupkg,
        BladeType::ViewerImage,
        BladeType::ViewerMarkdown,
        BladeType::Viewer3d,
        BladeType::ViewerCode,
        BladeType::ViewerPlaintext,
        BladeType::BranchManager,
        BladeType::RepoBrowser,
        BladeType::Settings,
        BladeType::Changelog,
        BladeType::GitflowCheatsheet,
        BladeType::InitRepo,
        BladeType::ConventionalCommit,
        BladeType::ExtensionManager,
        BladeType::ExtensionDetail,
        BladeType::WelcomeScreen,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BladeType::StagingChanges => "staging-changes",
            BladeType::TopologyGraph => "topology-graph",
            BladeType::CommitListFallback => "commit-list-fallback",
            BladeType::CommitDetails => "commit-details",
            BladeType::Diff => "diff",
            BladeType::ViewerNupkg => "viewer-nupkg",
            BladeType::ViewerImage => "viewer-image",
            BladeType::ViewerMarkdown => "viewer-markdown",
            BladeType::Viewer3d => "viewer-3d",
            BladeType::ViewerCode => "viewer-code",
            BladeType::ViewerPlaintext => "viewer-plaintext",
            BladeType::BranchManager => "branch-manager",
            BladeType::RepoBrowser => "repo-browser",
            BladeType::Settings => "settings",
            BladeType::Changelog => "changelog",
            BladeType::GitflowCheatsheet => "gitflow-cheatsheet",
            BladeType::InitRepo => "init-repo",
            BladeType::ConventionalCommit => "conventional-commit",
            BladeType::ExtensionManager => "extension-manager",
            BladeType::ExtensionDetail => "extension-detail",
            BladeType::WelcomeScreen => "welcome-screen",
        }
    }
}

impl fmt::Display for BladeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BladeType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        BladeType::ALL
            .into_iter()
            .find(|blade_type| blade_type.as_str() == tag)
            .ok_or_else(|| ParseError::UnknownBladeType(s.to_string()))
    }
}

/// Where a diff blade reads its two sides from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DiffSource {
    Commit { oid: String, file_path: String },
    Staging { file_path: String, staged: bool },
}

impl DiffSource {
    pub fn file_path(&self) -> &str {
        match self {
            DiffSource::Commit { file_path, .. } | DiffSource::Staging { file_path, .. } => {
                file_path
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "props", rename_all = "kebab-case")]
pub enum BladeProps {
    StagingChanges,
    TopologyGraph,
    CommitListFallback,
    CommitDetails {
        oid: String,
    },
    Diff {
        source: DiffSource,
    },
    ViewerNupkg {
        file_path: String,
    },
    ViewerImage {
        file_path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        oid: Option<String>,
    },
    ViewerMarkdown {
        file_path: String,
    },
    #[serde(rename = "viewer-3d")]
    Viewer3d {
        file_path: String,
    },
    ViewerCode {
        file_path: String,
    },
    ViewerPlaintext {
        file_path: String,
    },
    BranchManager,
    RepoBrowser {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path: Option<String>,
    },
    Settings,
    Changelog,
    GitflowCheatsheet,
    InitRepo {
        directory_path: String,
    },
    ConventionalCommit {
        #[serde(default)]
        amend: bool,
    },
    ExtensionManager,
    ExtensionDetail {
        extension_id: String,
    },
    WelcomeScreen,
}

impl BladeProps {
    pub fn blade_type(&self) -> BladeType {
        match self {
            BladeProps::StagingChanges => BladeType::StagingChanges,
            BladeProps::TopologyGraph => BladeType::TopologyGraph,
            BladeProps::CommitListFallback => BladeType::CommitListFallback,
            BladeProps::CommitDetails { .. } => BladeType::CommitDetails,
            BladeProps::Diff { .. } => BladeType::Diff,
            BladeProps::ViewerNupkg { .. } => BladeType::ViewerNupkg,
            BladeProps::ViewerImage { .. } => BladeType::ViewerImage,
            BladeProps::ViewerMarkdown { .. } => BladeType::ViewerMarkdown,
            BladeProps::Viewer3d { .. } => BladeType::Viewer3d,
            BladeProps::ViewerCode { .. } => BladeType::ViewerCode,
            BladeProps::ViewerPlaintext { .. } => BladeType::ViewerPlaintext,
            BladeProps::BranchManager => BladeType::BranchManager,
            BladeProps::RepoBrowser { .. } => BladeType::RepoBrowser,
            BladeProps::Settings => BladeType::Settings,
            BladeProps::Changelog => BladeType::Changelog,
            BladeProps::GitflowCheatsheet => BladeType::GitflowCheatsheet,
            BladeProps::InitRepo { .. } => BladeType::InitRepo,
            BladeProps::ConventionalCommit { .. } => BladeType::ConventionalCommit,
            BladeProps::ExtensionManager => BladeType::ExtensionManager,
            BladeProps::ExtensionDetail { .. } => BladeType::ExtensionDetail,
            BladeProps::WelcomeScreen => BladeType::WelcomeScreen,
        }
    }

    /// File the blade is about, for viewer and diff blades.
    pub fn file_path(&self) -> Option<&str> {
        match self {
            BladeProps::Diff { source } => Some(source.file_path()),
            BladeProps::ViewerNupkg { file_path }
            | BladeProps::ViewerImage { file_path, .. }
            | BladeProps::ViewerMarkdown { file_path }
            | BladeProps::Viewer3d { file_path }
            | BladeProps::ViewerCode { file_path }
            | BladeProps::ViewerPlaintext { file_path } => Some(file_path),
            _ => None,
        }
    }
}

/// A navigable panel instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blade {
    pub id: BladeId,
    pub title: String,
    #[serde(flatten)]
    pub props: BladeProps,
}

impl Blade {
    /// Builds a blade with a freshly generated id.
    pub fn new(title: impl Into<String>, props: BladeProps) -> Self {
        Self {
            id: BladeId::generate(),
            title: title.into(),
            props,
        }
    }

    pub fn blade_type(&self) -> BladeType {
        self.props.blade_type()
    }
}
