use crate::{
    config::LoadedConfig,
    error::ScaffoldError,
    process::CommandRunner,
    project::Project,
    scaffold::Scaffolder,
};
use colored::Colorize;
use std::path::PathBuf;

const BANNER_RULE: &str = "============================";

/// Scaffolds `name` inside the current directory, announcing the start and
/// the end of the run on stdout.
pub fn create<R: CommandRunner>(
    config: &LoadedConfig,
    name: &str,
    runner: R,
) -> Result<PathBuf, ScaffoldError> {
    let base_dir = std::env::current_dir().map_err(ScaffoldError::CurrentDir)?;
    create_in(base_dir, config, name, runner)
}

pub fn create_in<R: CommandRunner>(
    base_dir: PathBuf,
    config: &LoadedConfig,
    name: &str,
    runner: R,
) -> Result<PathBuf, ScaffoldError> {
    let project = Project::new(name);

    println!("Create Simple Serverless App");
    println!("App Name: {}", project);

    let project_dir = Scaffolder::new(&project, &config.config, base_dir, runner).run()?;

    println!("{}", BANNER_RULE);
    println!("{}", "[Setting Complete!]".green());
    println!("{}", BANNER_RULE);
    log::info!("Created {}", project_dir.to_string_lossy());

    Ok(project_dir)
}
