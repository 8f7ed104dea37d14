use seekwell_core::error::ResolveError;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind taxonomy.
///

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<ResolveError> for Error {
    fn from(err: ResolveError) -> Self {
        let kind = match &err {
            ResolveError::InvalidCallName { .. } => ErrorKind::InvalidCallName,
            ResolveError::MissingArgument { .. } => ErrorKind::MissingArgument,
            ResolveError::UnsupportedStatement { .. } => ErrorKind::UnsupportedStatement,
            ResolveError::InvalidOrderDirection { .. } => ErrorKind::InvalidOrderDirection,
            ResolveError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
        };

        Self::new(kind, err.to_string())
    }
}

///
/// ErrorKind
///
/// Every kind marks a malformed call site. Nothing here is transient;
/// retrying the same call yields the same error.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum ErrorKind {
    InvalidCallName,
    MissingArgument,
    UnsupportedStatement,
    InvalidOrderDirection,
    InvalidArgument,
}
