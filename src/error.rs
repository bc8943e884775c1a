use thiserror::Error;

/// Errors raised at the untyped boundary of the library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The value was present but not of the expected primitive type.
    #[error("expected {expected}, found {found}")]
    InvalidType {
        expected: &'static str,
        found: &'static str,
    },

    /// A required argument was absent or null.
    #[error("missing required argument `{name}`")]
    MissingArgument { name: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
