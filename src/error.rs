//! Error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while ranking a word list
#[derive(Debug, Error)]
pub enum Error {
    /// The word list could not be opened
    #[error("cannot open word list {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The reader thread could not be started
    #[error("cannot start word list reader")]
    Spawn(#[source] io::Error),
}

/// Result alias for ranking operations
pub type Result<T, E = Error> = std::result::Result<T, E>;
