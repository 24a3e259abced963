use std::num::ParseIntError;

use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, ThisError, PartialEq, Eq, Clone)]
pub enum Error {
    /// A key fell outside of the `[1, 99]` domain accepted by the tree.
    #[error("key not within valid range [1, 99]: {0}")]
    KeyOutOfRange(i64),

    /// A command line did not match any known keyword, or its argument was
    /// not a number.
    #[error("malformed command line: {0:?}")]
    MalformedLine(String),

    #[error("failed to deserialize: {0}")]
    FailedDeserialization(String),

    #[error("io error: {0}")]
    Io(String),
}

impl From<ParseIntError> for Error {
    fn from(error: ParseIntError) -> Self {
        Error::FailedDeserialization(format!("invalid number format: {}", error))
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io(format!("{}", error))
    }
}
