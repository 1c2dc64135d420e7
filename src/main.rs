use clap::{App, Arg};
use colored::Colorize;
use create_simple_serverless_app::{
    cmd::{self, create},
    config::{self, LoadedConfig},
    process::SystemRunner,
    userpath,
    verbosity::{self, Verbosity},
    VERSION,
};

fn main() {
    let matches = App::new(cmd::BIN_NAME)
        .version(VERSION)
        .author("Miguel Murça <zvthryzhepn+rot13@gmail.com>")
        .about("Creates a new TypeScript project for the Serverless Framework.")
        .usage(&cmd::USAGE["Usage: ".len()..])
        .arg(
            Arg::with_name(cmd::VERBOSITY_ARG)
                .short("v")
                .multiple(true)
                .help("Sets the level of verbosity"),
        )
        .arg(
            Arg::with_name(cmd::CONFIG_DIR_ARG)
                .long("config-dir")
                .takes_value(true)
                .hidden(true)
                .env(cmd::CONFIG_DIR_ENV),
        )
        .arg(
            // Any number of values is accepted here so that a wrong count
            // is answered with the usage line rather than a clap error.
            Arg::with_name(cmd::PROJECT_NAME_ARG)
                .help("The name for the new project")
                .long_help(
                    "The name for the new project. \
                    This will be the name of the created folder, \
                    of the package and of the Serverless service.",
                )
                .multiple(true),
        )
        .get_matches();

    let names: Vec<&str> = matches
        .values_of(cmd::PROJECT_NAME_ARG)
        .map(|values| values.collect())
        .unwrap_or_default();
    let name = match names.as_slice() {
        [name] => *name,
        _ => {
            println!("{}", cmd::USAGE);
            std::process::exit(cmd::USAGE_EXIT_CODE);
        }
    };

    let verbosity = Verbosity::from(matches.occurrences_of(cmd::VERBOSITY_ARG));
    if let Err(err) = verbosity::init_logger(verbosity) {
        eprintln!("{} {}", "Could not set up logging:".yellow(), err);
    }

    // Checked only once the positional count is known to be right.
    let config_dir = match matches.value_of(cmd::CONFIG_DIR_ARG) {
        Some(user_path) => match userpath::to_config_dir(user_path) {
            Ok(dir) => Some(dir.path_buf),
            Err(message) => {
                eprintln!("{}", message);
                std::process::exit(exitcode::CONFIG);
            }
        },
        None => config::default_config_dir(),
    };

    let config = match config_dir {
        Some(dir) => match LoadedConfig::load_config(dir) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{}", err.to_string().red());
                std::process::exit(exitcode::CONFIG);
            }
        },
        None => LoadedConfig::defaults(),
    };
    log::debug!("{:?}", config);

    if let Err(err) = create::create(&config, name, SystemRunner) {
        eprintln!("{} {}", "Could not create the project:".red(), err);
        std::process::exit(err.exit_code());
    }
}
