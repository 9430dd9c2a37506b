use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Default)]
pub(crate) enum LoggingLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

/// Reports whether the host OS, or a given PE executable, is 32 or 64 bit x86.
#[derive(Parser, Debug)]
pub(crate) struct CliArgs {
    /// Report the architecture of this executable instead of the host's.
    /// Falls back to the host architecture if the file does not exist.
    #[arg(long, value_name = "PATH_TO_BINARY")]
    pub(crate) exe: Option<PathBuf>,
    /// Set winarch's logging level
    #[arg(long, default_value_t, value_enum)]
    pub(crate) logging: LoggingLevel,
}
