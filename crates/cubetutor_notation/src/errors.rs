use thiserror::Error;

/// Error produced when parsing a move token.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum InvalidMoveToken {
    /// Empty token
    #[error("empty move token")]
    Empty,
    /// Unrecognized family letter
    #[error("unrecognized move letter {0:?}")]
    UnknownFamily(char),
    /// Malformed suffix
    #[error("malformed move suffix {0:?}")]
    BadSuffix(String),
}
