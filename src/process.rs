//! Blocking execution of the external commands a scaffold needs.

use crate::error::ScaffoldError;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    path::Path,
    process::{Command, Stdio},
};

/// A program together with its arguments, as found in the configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: &str, args: &[&str]) -> Self {
        CommandSpec {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// What happens to a command's output streams.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    /// Output is collected; stdout is logged, stderr is kept for errors.
    Captured,
    /// The command shares this process' terminal.
    Inherited,
}

pub trait CommandRunner {
    /// Runs `command` inside `cwd` to completion. A non-zero exit is an error.
    fn run(&mut self, command: &CommandSpec, cwd: &Path, mode: OutputMode)
        -> Result<(), ScaffoldError>;
}

/// Runs commands as real child processes.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(
        &mut self,
        command: &CommandSpec,
        cwd: &Path,
        mode: OutputMode,
    ) -> Result<(), ScaffoldError> {
        let mut child = Command::new(&command.program);
        child.args(&command.args).current_dir(cwd);

        let spawn_error = |source| ScaffoldError::Spawn {
            command: command.to_string(),
            source,
        };

        let (status, stderr) = match mode {
            OutputMode::Captured => {
                let output = child
                    .stdin(Stdio::null())
                    .output()
                    .map_err(spawn_error)?;
                let stdout = String::from_utf8_lossy(&output.stdout);
                if !stdout.trim().is_empty() {
                    log::debug!("{}: {}", command, stdout.trim_end());
                }
                (
                    output.status,
                    String::from_utf8_lossy(&output.stderr).into_owned(),
                )
            }
            OutputMode::Inherited => {
                let status = child
                    .stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()
                    .map_err(spawn_error)?;
                (status, String::new())
            }
        };

        if status.success() {
            Ok(())
        } else {
            Err(ScaffoldError::CommandFailed {
                command: command.to_string(),
                code: status.code(),
                stderr,
            })
        }
    }
}
