use std::path::PathBuf;
use thiserror::Error;

type Cause = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing file exists but could not be read or parsed.
    #[error("Failed to read the trade log at '{path}': {source}")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: Cause,
    },

    #[error("Failed to write the trade log at '{path}': {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: Cause,
    },
}
