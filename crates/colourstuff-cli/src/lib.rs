pub mod commands;
pub mod config;
pub mod convert;
pub mod error;
pub mod log;
pub mod probe;

pub use commands::{Args, Subcommands};
pub use config::CliConfig;
pub use error::Error;

type Result<T> = std::result::Result<T, Error>;
