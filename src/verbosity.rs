use log::{LevelFilter, SetLoggerError};
use num_traits::PrimInt;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    None,
    Some,
    Very,
}

impl<X> From<X> for Verbosity
where
    X: PrimInt,
{
    fn from(value: X) -> Self {
        if value.lt(&X::one()) {
            Verbosity::None
        } else if value.lt(&(X::one() + X::one())) {
            Verbosity::Some
        } else {
            Verbosity::Very
        }
    }
}

impl From<Verbosity> for LevelFilter {
    fn from(verbosity: Verbosity) -> Self {
        match verbosity {
            Verbosity::None => LevelFilter::Warn,
            Verbosity::Some => LevelFilter::Info,
            Verbosity::Very => LevelFilter::Debug,
        }
    }
}

/// Installs the terminal logger at the level implied by `verbosity`.
///
/// Log lines go to stderr, so that stdout only carries the banners
/// and the usage message.
pub fn init_logger(verbosity: Verbosity) -> Result<(), SetLoggerError> {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();
    TermLogger::init(
        verbosity.into(),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
}
