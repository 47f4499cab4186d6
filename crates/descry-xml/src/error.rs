//! Error types for XML reading and writing.

use thiserror::Error;

/// Errors that can occur while parsing or writing descriptor XML.
#[derive(Debug, Error)]
pub enum Error {
    /// Low-level XML tokenization or well-formedness fault.
    #[error("XML parse error: {0}")]
    Parse(String),

    /// XML serialization fault.
    #[error("XML write error: {0}")]
    Write(String),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The document contained no root element.
    #[error("document has no root element")]
    NoRoot,

    /// An attribute was written while no start element was pending.
    #[error("attribute {0:?} written outside a start element")]
    MisplacedAttribute(String),
}

/// Result type for XML operations.
pub type Result<T> = std::result::Result<T, Error>;
