use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input file missing, unreadable, or not valid UTF-8.
    #[error("Error reading file {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing to file {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Extraction produced zero records.
    #[error("No links were found or processed")]
    NoLinksFound,
}

pub type ConvertResult<T> = Result<T, ConvertError>;
