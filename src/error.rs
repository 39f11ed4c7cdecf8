use std::io;
use thiserror::Error;

/// Failures outside the language itself: reading input, driving the terminal.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, DriverError>;
