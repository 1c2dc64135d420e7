use crate::process::CommandSpec;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::{self, BufReader},
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Name of the directory holding this tool's configuration, inside
/// the platform configuration directory.
pub const CONFIG_DIR_NAME: &str = "create-simple-serverless-app";

/// Given the base configuration folder path, returns
/// the path of the configuration JSON file.
fn get_json_path(config_path: &Path) -> PathBuf {
    config_path.join("config.json")
}

/// Gets the default directory for the configuration file, namely
/// `(default config directory)/create-simple-serverless-app`, where the
/// default configuration directory is given by the `dirs` crate.
///
/// Unlike a regular settings directory, this one is never created:
/// when it does not exist, the defaults are used.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initializes version control inside the new project.
    pub vcs: CommandSpec,
    /// Installs the generated project's dependencies.
    pub package_manager: CommandSpec,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            vcs: CommandSpec::new("git", &["init"]),
            package_manager: CommandSpec::new("yarn", &[]),
        }
    }
}

impl Config {
    fn load_config(path: &Path) -> Result<Option<Config>, ConfigError> {
        let json_path = get_json_path(path);
        if !json_path.exists() {
            return Ok(None);
        }
        if !json_path.is_file() {
            return Err(ConfigError::NotAFile(json_path));
        }
        let json_file = fs::File::open(&json_path)
            .map_err(|e| ConfigError::FileError(e, json_path.clone()))?;
        let reader = BufReader::new(json_file);
        serde_json::from_reader::<_, Config>(reader)
            .map_err(|e| ConfigError::BadDeserialization(e, json_path))
            .map(Some)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Configuration JSON path ('{}') exists, but is not a file!",
        .0.to_string_lossy()
    )]
    NotAFile(PathBuf),

    #[error(
        "Error opening the configuration JSON file ('{}') for reading: {}",
        .1.to_string_lossy(),
        .0
    )]
    FileError(#[source] io::Error, PathBuf),

    #[error(
        "Error parsing the configuration JSON file: {}\n\
        You can attempt to fix the file manually, or delete it \
        to go back to the defaults.\n\
        The configuration file can be found in '{}'",
        .0,
        .1.to_string_lossy()
    )]
    BadDeserialization(#[source] serde_json::Error, PathBuf),
}

#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
}

impl LoadedConfig {
    /// Loads `config.json` from the directory `path`, falling back to
    /// the defaults if there is no such file.
    pub fn load_config(path: PathBuf) -> Result<Self, ConfigError> {
        let config = match Config::load_config(&path)? {
            Some(config) => {
                log::debug!(
                    "Loaded configuration from {}",
                    get_json_path(&path).to_string_lossy()
                );
                config
            }
            None => {
                log::debug!(
                    "No configuration in {}, using defaults",
                    path.to_string_lossy()
                );
                Config::default()
            }
        };
        Ok(LoadedConfig { config })
    }

    /// The configuration used when no configuration directory is
    /// known for this platform.
    pub fn defaults() -> Self {
        LoadedConfig {
            config: Config::default(),
        }
    }
}
