//! Qualified XML names.

use std::fmt;

/// An owned (namespace URI, local name) pair.
///
/// Formats in the conventional expanded-name notation, `{namespace}local`,
/// with the braces omitted when the name has no namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnedName {
    /// Namespace URI; empty for unqualified names.
    pub ns: String,
    /// Local part of the name.
    pub local: String,
}

impl OwnedName {
    /// Create a name from namespace URI and local part.
    pub fn new(ns: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            ns: ns.into(),
            local: local.into(),
        }
    }
}

impl fmt::Display for OwnedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ns.is_empty() {
            write!(f, "{}", self.local)
        } else {
            write!(f, "{{{}}}{}", self.ns, self.local)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let name = OwnedName::new("urn:x", "item");
        assert_eq!(name.to_string(), "{urn:x}item");

        let plain = OwnedName::new("", "id");
        assert_eq!(plain.to_string(), "id");
    }
}
