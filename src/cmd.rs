pub mod create;

pub const BIN_NAME: &str = "create-simple-serverless-app";
pub const PROJECT_NAME_ARG: &str = "PROJECT_NAME";
pub const CONFIG_DIR_ARG: &str = "config_dir";
pub const CONFIG_DIR_ENV: &str = "CREATE_SLS_APP_CONFIG";
pub const VERBOSITY_ARG: &str = "v";

/// Printed to stdout, exactly, whenever the positional argument count is wrong.
pub const USAGE: &str = "Usage: create-simple-serverless-app <project-name>";

/// Exit code for a wrong positional argument count.
pub const USAGE_EXIT_CODE: exitcode::ExitCode = 1;
