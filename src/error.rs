use std::io;
use std::path::PathBuf;

use object::FileKind;
use thiserror::Error;

/// Errors returned by the detection entry points.
#[derive(Debug, Error)]
pub enum ArchError {
    /// No recognized architecture signal: an environment variable or a PE
    /// machine code held a value this crate does not know about, or no
    /// environment variable was set at all.
    #[error("unknown architecture")]
    UnknownArch,
    #[error("failed to read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse `{}` as a PE image: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: ImageFormatError,
    },
}

/// Error of the machine-type decoder, independent of any file handling.
#[derive(Debug, Error)]
pub enum ImageFormatError {
    #[error("malformed PE image: {0}")]
    Malformed(#[from] object::read::Error),
    #[error("not a PE image but {0:?}")]
    UnsupportedFormat(FileKind),
}
