use thiserror::Error;

/// Errors related to [Series](crate::prelude::Series) access
/// and per body queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// First or last element (or min/max) requested on a [Series](crate::prelude::Series)
    /// that does not contain anything yet.
    #[error("empty series")]
    EmptySeries,
    /// Body identifier was never fed to the tracker
    #[error("unknown body \"{0}\"")]
    UnknownBody(String),
}

/// Errors while parsing sample records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParsingError {
    #[error("empty body identifier")]
    EmptyIdentifier,
    #[error("missing field(s): expecting \"<id> <time> <x> <y>\"")]
    MissingField,
    #[error("failed to parse {0} field")]
    FloatParsing(&'static str),
}
