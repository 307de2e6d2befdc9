use thiserror::Error;

/// Top-level error type for the spanvert library.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpanvertError {
    #[error("invalid configuration: got {count} direction vectors, expected 2 or 3")]
    InvalidConfiguration { count: usize },
}

/// Convenience type alias for results using [`SpanvertError`].
pub type Result<T> = std::result::Result<T, SpanvertError>;
