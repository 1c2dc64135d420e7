//! Scaffolds a TypeScript Serverless Framework project: a directory with
//! version control, deployment and build configuration, a hello-world
//! handler and its installed dependencies.

pub mod artifact;
pub mod cmd;
pub mod config;
pub mod error;
pub mod process;
pub mod project;
pub mod scaffold;
pub mod userpath;
pub mod verbosity;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
