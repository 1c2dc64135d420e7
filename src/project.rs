use std::{
    fmt::{self, Display},
    path::{Path, PathBuf},
};

/// Relative path of the source directory inside a generated project.
pub const SOURCE_DIR: &str = "src";

/// The one user input of a scaffolding run.
///
/// The name is taken verbatim: it becomes both the project directory and
/// the name written into the generated manifests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    name: String,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Project { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory the project is created in, below `base_dir`.
    pub fn root(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.name)
    }

    pub fn source_dir(&self, base_dir: &Path) -> PathBuf {
        self.root(base_dir).join(SOURCE_DIR)
    }
}

impl Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
