use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use winarch::executable_arch;
use winarch::host_arch;

mod args;

use crate::args::CliArgs;
use crate::args::LoggingLevel;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let level = match args.logging {
        LoggingLevel::Trace => Level::TRACE,
        LoggingLevel::Debug => Level::DEBUG,
        LoggingLevel::Info => Level::INFO,
        LoggingLevel::Warn => Level::WARN,
        LoggingLevel::Error => Level::ERROR,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let arch = match &args.exe {
        Some(path) => {
            debug!("detecting the architecture of {}", path.display());
            executable_arch(path)?
        }
        None => host_arch()?,
    };

    println!("{}", arch);
    Ok(())
}
