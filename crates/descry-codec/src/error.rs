//! Fatal codec errors.
//!
//! Everything recoverable is a [`crate::Diagnostic`]; this enum is only
//! for faults that abort a whole document.

use descry_xml::OwnedName;
use thiserror::Error;

/// Errors that abort reading or writing a descriptor document.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed XML or a serialization fault in the underlying layer.
    #[error(transparent)]
    Xml(#[from] descry_xml::Error),

    /// The document's root element is not the one the descriptor type
    /// declares.
    #[error("unexpected root element {found}, expected {expected}")]
    UnexpectedRoot {
        found: OwnedName,
        expected: OwnedName,
    },
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
