use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use shared::{BladeType, Process};

use crate::error::ConfigError;

pub const DEFAULT_MAX_STACK_DEPTH: usize = 8;
pub const DEFAULT_CONFIG_FILE: &str = "navigation.toml";

/// Blade types that may appear at most once in the stack unless configured otherwise.
pub const DEFAULT_SINGLETON_TYPES: [BladeType; 4] = [
    BladeType::Settings,
    BladeType::Changelog,
    BladeType::GitflowCheatsheet,
    BladeType::ConventionalCommit,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationConfig {
    pub initial_process: Process,
    pub max_stack_depth: usize,
    pub singleton_types: BTreeSet<BladeType>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            initial_process: Process::Staging,
            max_stack_depth: DEFAULT_MAX_STACK_DEPTH,
            singleton_types: DEFAULT_SINGLETON_TYPES.into_iter().collect(),
        }
    }
}

impl NavigationConfig {
    pub fn is_singleton(&self, blade_type: BladeType) -> bool {
        self.singleton_types.contains(&blade_type)
    }

    pub fn with_max_stack_depth(mut self, max_stack_depth: usize) -> Result<Self, ConfigError> {
        if max_stack_depth == 0 {
            return Err(ConfigError::InvalidMaxDepth(max_stack_depth.to_string()));
        }
        self.max_stack_depth = max_stack_depth;
        Ok(self)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    initial_process: Option<String>,
    max_stack_depth: Option<i64>,
    singleton_types: Option<Vec<String>>,
}

/// Defaults, then the TOML file, then environment overrides.
///
/// With `path == None` a missing `navigation.toml` in the working directory is
/// not an error; an explicitly named file must exist.
pub fn load_config(path: Option<&Path>) -> Result<NavigationConfig, ConfigError> {
    let mut config = NavigationConfig::default();

    let (path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };
    if required || path.exists() {
        let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        config = apply_file(config, &raw, &path)?;
        tracing::debug!(path = %path.display(), "loaded navigation config file");
    }

    apply_env_overrides(config, |key| std::env::var(key).ok())
}

fn apply_file(
    mut config: NavigationConfig,
    raw: &str,
    path: &Path,
) -> Result<NavigationConfig, ConfigError> {
    let file_cfg: FileConfig = toml::from_str(raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(v) = file_cfg.initial_process {
        config.initial_process = v.parse()?;
    }
    if let Some(v) = file_cfg.max_stack_depth {
        config.max_stack_depth = positive_depth(&v.to_string())?;
    }
    if let Some(tags) = file_cfg.singleton_types {
        config.singleton_types = parse_blade_types(tags.iter().map(String::as_str))?;
    }

    Ok(config)
}

/// Environment wins over the file. `APP__*` keys take precedence over `NAVIGATION_*`.
pub(crate) fn apply_env_overrides(
    mut config: NavigationConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<NavigationConfig, ConfigError> {
    if let Some(v) = lookup("NAVIGATION_INITIAL_PROCESS") {
        config.initial_process = v.parse()?;
    }
    if let Some(v) = lookup("APP__INITIAL_PROCESS") {
        config.initial_process = v.parse()?;
    }

    if let Some(v) = lookup("NAVIGATION_MAX_STACK_DEPTH") {
        config.max_stack_depth = positive_depth(&v)?;
    }
    if let Some(v) = lookup("APP__MAX_STACK_DEPTH") {
        config.max_stack_depth = positive_depth(&v)?;
    }

    if let Some(v) = lookup("NAVIGATION_SINGLETON_TYPES") {
        config.singleton_types =
            parse_blade_types(v.split(',').map(str::trim).filter(|tag| !tag.is_empty()))?;
    }

    Ok(config)
}

fn positive_depth(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(depth) if depth > 0 => Ok(depth),
        _ => Err(ConfigError::InvalidMaxDepth(raw.to_string())),
    }
}

fn parse_blade_types<'a>(
    tags: impl Iterator<Item = &'a str>,
) -> Result<BTreeSet<BladeType>, ConfigError> {
    tags.map(|tag| tag.parse::<BladeType>().map_err(ConfigError::from))
        .collect()
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
