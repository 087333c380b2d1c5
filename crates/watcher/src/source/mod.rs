//! Source module — line producers feeding the record filters.
//!
//! A line source yields successive raw lines, UTF-8 decoded, terminators
//! stripped, in the exact order the bytes arrived. Two producers exist:
//! a local file tail and a wrapper over any piped byte stream.

pub mod pipe;
pub mod tail;

pub use pipe::piped_lines;
pub use tail::tail_file;

use std::path::PathBuf;
use std::pin::Pin;

use thiserror::Error;
use tokio_stream::Stream;

/// The shape every line producer shares.
pub type LineStream = Pin<Box<dyn Stream<Item = Result<String, SourceError>> + Send>>;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read log stream: {0}")]
    Read(std::io::Error),

    #[error("Log stream is not valid UTF-8")]
    NonUtf8,
}

/// UTF-8 decode failures surface as their own variant; everything else is
/// a plain read error.
pub(crate) fn map_read_err(err: std::io::Error) -> SourceError {
    if err.kind() == std::io::ErrorKind::InvalidData {
        SourceError::NonUtf8
    } else {
        SourceError::Read(err)
    }
}
