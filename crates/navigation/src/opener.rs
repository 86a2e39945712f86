//! Caller-side helpers that build push/replace events.
//!
//! Nothing here touches navigation state. Titles are resolved before the event
//! reaches the controller, which only ever sees finished strings.

use shared::{BladeProps, BladeType, DiffSource, NavigationEvent};

/// Lookup into the renderable blade catalogue.
pub trait BladeRegistry {
    fn default_title(&self, props: &BladeProps) -> String;
    fn blade_exists(&self, blade_type: BladeType) -> bool;
}

/// Every built-in blade type, with its stock titles.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRegistry;

impl BladeRegistry for BuiltinRegistry {
    fn default_title(&self, props: &BladeProps) -> String {
        match props {
            BladeProps::StagingChanges => "Changes".to_string(),
            BladeProps::TopologyGraph => "Topology".to_string(),
            BladeProps::CommitListFallback => "Commits".to_string(),
            BladeProps::CommitDetails { oid } => format!("Commit {}", short_oid(oid)),
            BladeProps::Diff { source } => file_name(source.file_path()).to_string(),
            BladeProps::ViewerNupkg { file_path }
            | BladeProps::ViewerImage { file_path, .. }
            | BladeProps::ViewerMarkdown { file_path }
            | BladeProps::Viewer3d { file_path }
            | BladeProps::ViewerCode { file_path }
            | BladeProps::ViewerPlaintext { file_path } => file_name(file_path).to_string(),
            BladeProps::BranchManager => "Branches".to_string(),
            BladeProps::RepoBrowser { .. } => "Repository Browser".to_string(),
            BladeProps::Settings => "Settings".to_string(),
            BladeProps::Changelog => "Changelog".to_string(),
            BladeProps::GitflowCheatsheet => "Gitflow Guide".to_string(),
            BladeProps::InitRepo { .. } => "Initialize Repository".to_string(),
            BladeProps::ConventionalCommit { amend: true } => "Amend Commit".to_string(),
            BladeProps::ConventionalCommit { amend: false } => "Conventional Commit".to_string(),
            BladeProps::ExtensionManager => "Extensions".to_string(),
            BladeProps::ExtensionDetail { extension_id } => format!("Extension: {extension_id}"),
            BladeProps::WelcomeScreen => "Welcome".to_string(),
        }
    }

    fn blade_exists(&self, _blade_type: BladeType) -> bool {
        true
    }
}

/// Where a file is being opened from; decides the fallback for unmapped extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileContext {
    #[default]
    Diff,
    Browse,
}

const BINARY_EXTENSIONS: &[&str] = &[
    "exe", "dll", "so", "dylib", "bin", "dat", "wasm", "zip", "tar", "gz", "7z", "rar", "pdf",
    "doc", "docx", "xls", "xlsx", "mp3", "wav", "ogg", "mp4", "avi", "mov", "woff", "woff2",
    "ttf", "otf", "eot", "obj", "fbx", "stl",
];

fn extension(file_path: &str) -> String {
    file_name(file_path)
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default()
}

fn mapped_viewer(ext: &str) -> Option<BladeType> {
    match ext {
        "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" | "ico" | "bmp" => {
            Some(BladeType::ViewerImage)
        }
        "md" | "mdx" => Some(BladeType::ViewerMarkdown),
        "glb" | "gltf" => Some(BladeType::Viewer3d),
        "nupkg" => Some(BladeType::ViewerNupkg),
        _ => None,
    }
}

pub fn blade_type_for_file(file_path: &str, context: FileContext) -> BladeType {
    if let Some(mapped) = mapped_viewer(&extension(file_path)) {
        return mapped;
    }
    match context {
        FileContext::Browse => BladeType::ViewerPlaintext,
        FileContext::Diff => BladeType::Diff,
    }
}

pub fn has_specialized_viewer(file_path: &str) -> bool {
    mapped_viewer(&extension(file_path)).is_some()
}

pub fn is_binary_extension(file_path: &str) -> bool {
    BINARY_EXTENSIONS.contains(&extension(file_path).as_str())
}

/// Last path segment, or the whole path if it has none.
pub fn file_name(file_path: &str) -> &str {
    file_path
        .rsplit(['/', '\\'])
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or(file_path)
}

fn short_oid(oid: &str) -> &str {
    oid.get(..7).unwrap_or(oid)
}

pub struct BladeOpener<R> {
    registry: R,
}

impl<R: BladeRegistry> BladeOpener<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    fn title_for(&self, props: &BladeProps, title: Option<&str>) -> String {
        match title {
            Some(title) => title.to_string(),
            None => self.registry.default_title(props),
        }
    }

    pub fn open(&self, props: BladeProps, title: Option<&str>) -> NavigationEvent {
        NavigationEvent::push(self.title_for(&props, title), props)
    }

    pub fn replace_with(&self, props: BladeProps, title: Option<&str>) -> NavigationEvent {
        NavigationEvent::replace(self.title_for(&props, title), props)
    }

    /// Diff or specialised viewer for a file as of commit `oid`.
    pub fn open_commit_diff(&self, oid: &str, file_path: &str) -> NavigationEvent {
        let diff = BladeProps::Diff {
            source: DiffSource::Commit {
                oid: oid.to_string(),
                file_path: file_path.to_string(),
            },
        };
        let props = self.viewer_or(file_path, Some(oid), diff);
        NavigationEvent::push(file_name(file_path), props)
    }

    /// Diff or specialised viewer for a working-tree file.
    pub fn open_staging_diff(&self, file_path: &str, staged: bool) -> NavigationEvent {
        let diff = BladeProps::Diff {
            source: DiffSource::Staging {
                file_path: file_path.to_string(),
                staged,
            },
        };
        let props = self.viewer_or(file_path, None, diff);
        NavigationEvent::push(file_name(file_path), props)
    }

    /// Opens a file from the repository browser.
    pub fn open_browsed_file(&self, file_path: &str) -> NavigationEvent {
        let plaintext = BladeProps::ViewerPlaintext {
            file_path: file_path.to_string(),
        };
        let props = match blade_type_for_file(file_path, FileContext::Browse) {
            BladeType::ViewerPlaintext => plaintext,
            _ => self.viewer_or(file_path, None, plaintext),
        };
        NavigationEvent::push(file_name(file_path), props)
    }

    pub fn open_commit_details(&self, oid: &str) -> NavigationEvent {
        self.open(
            BladeProps::CommitDetails {
                oid: oid.to_string(),
            },
            None,
        )
    }

    pub fn open_settings(&self) -> NavigationEvent {
        self.open(BladeProps::Settings, None)
    }

    pub fn go_back(&self) -> NavigationEvent {
        NavigationEvent::Pop
    }

    pub fn go_to_root(&self) -> NavigationEvent {
        NavigationEvent::Reset
    }

    /// Specialised viewer props for `file_path`, or `fallback` when the file has
    /// none or the registry cannot render it. Markdown in a diff context stays a diff.
    fn viewer_or(&self, file_path: &str, oid: Option<&str>, fallback: BladeProps) -> BladeProps {
        let file_path_owned = file_path.to_string();
        let viewer = match mapped_viewer(&extension(file_path)) {
            Some(BladeType::ViewerImage) => Some(BladeProps::ViewerImage {
                file_path: file_path_owned,
                oid: oid.map(str::to_string),
            }),
            Some(BladeType::Viewer3d) => Some(BladeProps::Viewer3d {
                file_path: file_path_owned,
            }),
            Some(BladeType::ViewerNupkg) => Some(BladeProps::ViewerNupkg {
                file_path: file_path_owned,
            }),
            Some(BladeType::ViewerMarkdown) if fallback.blade_type() != BladeType::Diff => {
                Some(BladeProps::ViewerMarkdown {
                    file_path: file_path_owned,
                })
            }
            _ => None,
        };

        match viewer {
            Some(props) if self.registry.blade_exists(props.blade_type()) => props,
            _ => fallback,
        }
    }
}

impl Default for BladeOpener<BuiltinRegistry> {
    fn default() -> Self {
        Self::new(BuiltinRegistry)
    }
}

#[cfg(test)]
#[path = "tests/opener_tests.rs"]
mod tests;
