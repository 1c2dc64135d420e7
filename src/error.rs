//! Error types for a scaffolding run.

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Could not read the current directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("Could not create '{}': {}", .path.to_string_lossy(), .source)]
    CreateDirectory { path: PathBuf, source: io::Error },

    #[error("Could not write '{}': {}", .path.to_string_lossy(), .source)]
    WriteFile { path: PathBuf, source: io::Error },

    #[error("Could not render {file}: {source}")]
    RenderJson {
        file: &'static str,
        source: serde_json::Error,
    },

    #[error("Could not render {file}: {source}")]
    RenderYaml {
        file: &'static str,
        source: serde_yaml::Error,
    },

    #[error("Could not run `{command}`: {source}")]
    Spawn { command: String, source: io::Error },

    #[error("`{}` failed ({})", .command, describe_failure(.code, .stderr))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn describe_failure(code: &Option<i32>, stderr: &str) -> String {
    let status = match code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    };
    let stderr = stderr.trim();
    if stderr.is_empty() {
        status
    } else {
        format!("{}:\n{}", status, stderr)
    }
}

impl ScaffoldError {
    /// The process exit code this error should terminate with.
    pub fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            ScaffoldError::CurrentDir(_) => exitcode::IOERR,
            ScaffoldError::CreateDirectory { .. } => exitcode::CANTCREAT,
            ScaffoldError::WriteFile { .. } => exitcode::IOERR,
            ScaffoldError::RenderJson { .. } | ScaffoldError::RenderYaml { .. } => {
                exitcode::SOFTWARE
            }
            ScaffoldError::Spawn { .. } => exitcode::UNAVAILABLE,
            ScaffoldError::CommandFailed { code, .. } => match code {
                Some(code) if *code != 0 => *code,
                _ => exitcode::SOFTWARE,
            },
        }
    }
}
