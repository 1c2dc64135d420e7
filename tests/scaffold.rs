//! Scaffolding into scratch directories, with the external commands
//! recorded instead of executed.

use create_simple_serverless_app::{
    config::Config,
    error::ScaffoldError,
    process::{CommandRunner, CommandSpec, OutputMode},
    project::Project,
    scaffold::Scaffolder,
};
use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

/// The eight entries every scaffolded project starts with.
const EXPECTED_ENTRIES: &[&str] = &[
    ".gitignore",
    "package.json",
    "serverless.yml",
    "src",
    "src/handler.ts",
    "src/middleware.ts",
    "tsconfig.json",
    "webpack.config.js",
];

#[derive(Debug)]
struct Call {
    command: String,
    cwd: PathBuf,
    mode: OutputMode,
    entries_before: BTreeSet<String>,
}

#[derive(Default)]
struct RecordingRunner {
    calls: Vec<Call>,
    fail: Option<&'static str>,
}

impl CommandRunner for RecordingRunner {
    fn run(
        &mut self,
        command: &CommandSpec,
        cwd: &Path,
        mode: OutputMode,
    ) -> Result<(), ScaffoldError> {
        self.calls.push(Call {
            command: command.to_string(),
            cwd: cwd.to_path_buf(),
            mode,
            entries_before: entries(cwd),
        });
        if self.fail == Some(command.program.as_str()) {
            return Err(ScaffoldError::CommandFailed {
                command: command.to_string(),
                code: Some(128),
                stderr: "refusing".to_string(),
            });
        }
        Ok(())
    }
}

/// Relative paths of everything below `root`.
fn entries(root: &Path) -> BTreeSet<String> {
    fn visit(root: &Path, dir: &Path, found: &mut BTreeSet<String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            let relative = path.strip_prefix(root).unwrap();
            found.insert(relative.to_string_lossy().replace('\\', "/"));
            if path.is_dir() {
                visit(root, &path, found);
            }
        }
    }
    let mut found = BTreeSet::new();
    visit(root, root, &mut found);
    found
}

fn expected() -> BTreeSet<String> {
    EXPECTED_ENTRIES.iter().map(|e| e.to_string()).collect()
}

#[test]
fn creates_exactly_the_scaffold() {
    let base = tempfile::tempdir().unwrap();
    let project = Project::new("my-app");
    let config = Config::default();

    let mut scaffolder = Scaffolder::new(
        &project,
        &config,
        base.path().to_path_buf(),
        RecordingRunner::default(),
    );
    let root = scaffolder.run().unwrap();

    assert_eq!(root, base.path().join("my-app"));
    assert_eq!(entries(&root), expected());

    let package = fs::read_to_string(root.join("package.json")).unwrap();
    assert!(package.contains(r#""name": "my-app""#));
    let serverless = fs::read_to_string(root.join("serverless.yml")).unwrap();
    assert!(serverless.contains("service: my-app"));
    let gitignore = fs::read(root.join(".gitignore")).unwrap();
    assert_eq!(gitignore, b"node_modules");
}

#[test]
fn vcs_runs_first_and_install_runs_last() {
    let base = tempfile::tempdir().unwrap();
    let project = Project::new("my-app");
    let config = Config::default();

    let mut scaffolder = Scaffolder::new(
        &project,
        &config,
        base.path().to_path_buf(),
        RecordingRunner::default(),
    );
    let root = scaffolder.run().unwrap();
    let calls = scaffolder.into_runner().calls;

    assert_eq!(calls.len(), 2);

    assert_eq!(calls[0].command, "git init");
    assert_eq!(calls[0].cwd, root);
    assert_eq!(calls[0].mode, OutputMode::Captured);
    assert!(calls[0].entries_before.is_empty());

    assert_eq!(calls[1].command, "yarn");
    assert_eq!(calls[1].cwd, root);
    assert_eq!(calls[1].mode, OutputMode::Inherited);
    assert_eq!(calls[1].entries_before, expected());
}

#[test]
fn configured_commands_are_used() {
    let base = tempfile::tempdir().unwrap();
    let project = Project::new("configured");
    let config = Config {
        package_manager: CommandSpec::new("npm", &["install", "--no-audit"]),
        ..Config::default()
    };

    let mut scaffolder = Scaffolder::new(
        &project,
        &config,
        base.path().to_path_buf(),
        RecordingRunner::default(),
    );
    scaffolder.run().unwrap();
    let commands: Vec<String> = scaffolder
        .into_runner()
        .calls
        .into_iter()
        .map(|c| c.command)
        .collect();
    assert_eq!(commands, vec!["git init", "npm install --no-audit"]);
}

#[test]
fn failing_vcs_stops_before_any_file() {
    let base = tempfile::tempdir().unwrap();
    let project = Project::new("my-app");
    let config = Config::default();
    let runner = RecordingRunner {
        fail: Some("git"),
        ..RecordingRunner::default()
    };

    let mut scaffolder = Scaffolder::new(&project, &config, base.path().to_path_buf(), runner);
    let err = scaffolder.run().unwrap_err();
    assert_eq!(err.exit_code(), 128);

    // The directory itself is not rolled back.
    let root = base.path().join("my-app");
    assert!(root.is_dir());
    assert!(entries(&root).is_empty());
    assert_eq!(scaffolder.into_runner().calls.len(), 1);
}

#[test]
fn failing_install_leaves_the_files() {
    let base = tempfile::tempdir().unwrap();
    let project = Project::new("my-app");
    let config = Config::default();
    let runner = RecordingRunner {
        fail: Some("yarn"),
        ..RecordingRunner::default()
    };

    let mut scaffolder = Scaffolder::new(&project, &config, base.path().to_path_buf(), runner);
    assert!(matches!(
        scaffolder.run(),
        Err(ScaffoldError::CommandFailed { .. })
    ));
    assert_eq!(entries(&base.path().join("my-app")), expected());
}

#[test]
fn existing_directory_is_left_alone() {
    let base = tempfile::tempdir().unwrap();
    let root = base.path().join("taken");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("package.json"), "keep me").unwrap();

    let project = Project::new("taken");
    let config = Config::default();
    let mut scaffolder = Scaffolder::new(
        &project,
        &config,
        base.path().to_path_buf(),
        RecordingRunner::default(),
    );
    let err = scaffolder.run().unwrap_err();

    assert!(matches!(err, ScaffoldError::CreateDirectory { .. }));
    assert_eq!(err.exit_code(), exitcode::CANTCREAT);
    assert_eq!(
        fs::read_to_string(root.join("package.json")).unwrap(),
        "keep me"
    );
    assert_eq!(entries(&root).len(), 1);
    assert!(scaffolder.into_runner().calls.is_empty());
}

#[test]
fn names_with_spaces_are_kept_verbatim() {
    let base = tempfile::tempdir().unwrap();
    let project = Project::new("my app (v2)");
    let config = Config::default();

    let root = Scaffolder::new(
        &project,
        &config,
        base.path().to_path_buf(),
        RecordingRunner::default(),
    )
    .run()
    .unwrap();

    assert_eq!(root.file_name().unwrap(), "my app (v2)");
    let package: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(root.join("package.json")).unwrap()).unwrap();
    assert_eq!(package["name"], "my app (v2)");
    let serverless: serde_yaml::Value =
        serde_yaml::from_str(&fs::read_to_string(root.join("serverless.yml")).unwrap()).unwrap();
    assert_eq!(serverless["service"].as_str(), Some("my app (v2)"));
}
