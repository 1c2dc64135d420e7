//! The files written into a new project.
//!
//! Every artifact is rendered in memory first; nothing here touches the
//! filesystem.

pub mod package;
pub mod serverless;
pub mod source;
pub mod tsconfig;
pub mod webpack;

pub const GITIGNORE_PATH: &str = ".gitignore";

/// A generated file: where it goes, relative to the project root, and
/// what it contains.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub path: &'static str,
    pub contents: String,
}

impl Artifact {
    pub fn new(path: &'static str, contents: impl Into<String>) -> Self {
        Artifact {
            path,
            contents: contents.into(),
        }
    }
}

/// Ignores the dependency cache. Written without a trailing newline.
pub fn gitignore() -> Artifact {
    Artifact::new(GITIGNORE_PATH, "node_modules")
}
