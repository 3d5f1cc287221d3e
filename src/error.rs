//! Error types for switchcase.

use thiserror::Error;

/// Main error type for all switch operations.
#[derive(Debug, Error)]
pub enum SwitchError {
    /// A case declaration was given no match values.
    #[error("No case arguments. Use a default declaration to define the default case.")]
    MalformedDeclaration,

    /// A binding was declared under the name reserved for the resolver.
    #[error("The name '{0}' is reserved for the switch entry point")]
    ReservedName(String),

    /// More than one default declaration in one switch.
    #[error("Multiple default declarations in one switch")]
    DuplicateDefault,

    /// A case value was bound twice while duplicates are disallowed.
    #[error("Duplicate case value: {0}")]
    DuplicateCaseValue(String),

    /// No case matches the query and no default is defined.
    #[error("No case matches {0} and no default is defined")]
    NoMatch(String),

    /// No handler is registered under the given name.
    #[error("No handler named '{0}'")]
    UnknownHandler(String),

    /// A positional or keyword argument was requested but not supplied.
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    /// JSON serialization/deserialization error (arguments and results).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error raised from inside a handler.
    #[error("Handler error: {0}")]
    Handler(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SwitchError {
    /// Wrap any error (or message) raised by a handler.
    pub fn handler<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Handler(err.into())
    }
}

/// Result type alias using SwitchError.
pub type Result<T> = std::result::Result<T, SwitchError>;
