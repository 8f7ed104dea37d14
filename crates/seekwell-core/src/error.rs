use thiserror::Error as ThisError;

///
/// ResolveError
///
/// Raised synchronously at resolution time, before any backend interaction.
/// Every variant marks a malformed call site, never a transient condition;
/// the backend is never invoked with a partially resolved spec.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ResolveError {
    #[error("call name '{name}' is not a valid finder name")]
    InvalidCallName { name: String },

    #[error("missing argument for field '{field}'; check your call site")]
    MissingArgument { field: String },

    #[error("the statement '{token}' is not supported")]
    UnsupportedStatement { token: String },

    #[error("valid order directions are 'asc' and 'desc', got '{direction}'")]
    InvalidOrderDirection { direction: String },

    #[error("argument for '{context}' must be {expected}")]
    InvalidArgument {
        context: String,
        expected: &'static str,
    },
}
