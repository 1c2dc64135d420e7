use colored::Colorize;
use shellexpand::LookupError;
use std::{env::VarError, io, path::PathBuf, str::FromStr};
use thiserror::Error;

/// A directory given by the user, with `~` and environment variables
/// expanded, that is known to exist.
#[derive(Clone, PartialEq, Eq)]
pub struct UserDir {
    pub path_buf: PathBuf,
}

#[derive(Debug, Error)]
pub enum UserPathErr {
    #[error("Error resolving the given path: {0}")]
    ShellExpand(#[from] LookupError<VarError>),
    #[error("{0}")]
    Canonicalize(#[from] io::Error),
    #[error("{} is not a directory.", .0.to_string_lossy())]
    NotDirectory(PathBuf),
}

impl std::fmt::Debug for UserDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.path_buf.fmt(f)
    }
}

impl FromStr for UserDir {
    type Err = UserPathErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let expanded = shellexpand::full(s)?;
        let path_buf = PathBuf::from(expanded.into_owned()).canonicalize()?;
        if !path_buf.is_dir() {
            return Err(UserPathErr::NotDirectory(path_buf));
        }
        Ok(UserDir { path_buf })
    }
}

/// Tries to convert the configuration directory given by the user into a
/// `UserDir`. If it fails, returns an error message for the terminal.
pub fn to_config_dir(path: &str) -> Result<UserDir, String> {
    UserDir::from_str(path).map_err(|e| match &e {
        UserPathErr::ShellExpand(_) => e.to_string().red().to_string(),
        UserPathErr::Canonicalize(err) if err.kind() == io::ErrorKind::NotFound => format!(
            "The specified configuration directory (\"{}\") does not exist.",
            path
        ),
        UserPathErr::Canonicalize(err) if err.kind() == io::ErrorKind::PermissionDenied => {
            format!("Permission denied for {}", path)
        }
        _ => e.to_string(),
    })
}
