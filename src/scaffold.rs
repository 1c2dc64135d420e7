//! Creating a project: the ordered list of side effects and their execution.
//!
//! A run is strictly linear. The first failing step ends it, and whatever
//! was created up to that point is left in place.

use crate::{
    artifact::{self, Artifact},
    config::Config,
    error::ScaffoldError,
    process::{CommandRunner, OutputMode},
    project::Project,
};
use std::{
    fmt::{self, Display},
    fs,
    path::{Path, PathBuf},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    CreateProjectDirectory,
    InitVersionControl,
    WriteFile(Artifact),
    CreateSourceDirectory,
    InstallDependencies,
}

impl Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::CreateProjectDirectory => write!(f, "Creating the project directory"),
            Step::InitVersionControl => write!(f, "Initializing version control"),
            Step::WriteFile(artifact) => write!(f, "Writing {}", artifact.path),
            Step::CreateSourceDirectory => write!(f, "Creating the source directory"),
            Step::InstallDependencies => write!(f, "Installing dependencies"),
        }
    }
}

/// Every step needed to scaffold one project, in execution order.
///
/// All artifacts are rendered when the plan is built, so an invalid plan
/// fails before anything is created.
#[derive(Clone, Debug)]
pub struct Plan {
    steps: Vec<Step>,
}

impl Plan {
    pub fn new(project: &Project) -> Result<Self, ScaffoldError> {
        let steps = vec![
            Step::CreateProjectDirectory,
            Step::InitVersionControl,
            Step::WriteFile(artifact::webpack::render()),
            Step::WriteFile(artifact::serverless::render(project)?),
            Step::WriteFile(artifact::package::render(project)?),
            Step::WriteFile(artifact::tsconfig::render()?),
            Step::CreateSourceDirectory,
            Step::WriteFile(artifact::source::handler()),
            Step::WriteFile(artifact::source::middleware()),
            Step::WriteFile(artifact::gitignore()),
            Step::InstallDependencies,
        ];
        Ok(Plan { steps })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[cfg(test)]
    fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
        self.steps.iter().filter_map(|step| match step {
            Step::WriteFile(artifact) => Some(artifact),
            _ => None,
        })
    }
}

pub struct Scaffolder<'a, R: CommandRunner> {
    project: &'a Project,
    config: &'a Config,
    base_dir: PathBuf,
    runner: R,
}

impl<'a, R: CommandRunner> Scaffolder<'a, R> {
    /// Prepares to create `project` as a sub-directory of `base_dir`.
    pub fn new(project: &'a Project, config: &'a Config, base_dir: PathBuf, runner: R) -> Self {
        Scaffolder {
            project,
            config,
            base_dir,
            runner,
        }
    }

    pub fn project_dir(&self) -> PathBuf {
        self.project.root(&self.base_dir)
    }

    /// Renders the plan and carries it out. Returns the project directory.
    pub fn run(&mut self) -> Result<PathBuf, ScaffoldError> {
        let plan = Plan::new(self.project)?;
        for step in plan.steps() {
            log::info!("{}", step);
            self.execute(step)?;
        }
        Ok(self.project_dir())
    }

    fn execute(&mut self, step: &Step) -> Result<(), ScaffoldError> {
        let root = self.project_dir();
        match step {
            Step::CreateProjectDirectory => create_dir(&root),
            Step::InitVersionControl => {
                self.runner
                    .run(&self.config.vcs, &root, OutputMode::Captured)
            }
            Step::WriteFile(artifact) => write_artifact(&root, artifact),
            Step::CreateSourceDirectory => create_dir(&self.project.source_dir(&self.base_dir)),
            Step::InstallDependencies => {
                self.runner
                    .run(&self.config.package_manager, &root, OutputMode::Inherited)
            }
        }
    }

    pub fn into_runner(self) -> R {
        self.runner
    }
}

/// Fails if `path` already exists, so an existing project is never touched.
fn create_dir(path: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir(path).map_err(|source| ScaffoldError::CreateDirectory {
        path: path.to_path_buf(),
        source,
    })
}

fn write_artifact(root: &Path, artifact: &Artifact) -> Result<(), ScaffoldError> {
    let path = root.join(artifact.path);
    log::debug!("{} bytes to {}", artifact.contents.len(), path.to_string_lossy());
    fs::write(&path, &artifact.contents).map_err(|source| ScaffoldError::WriteFile { path, source })
}
