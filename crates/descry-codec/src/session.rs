//! Per-document decode/encode session: diagnostics and the id registry.

use descry_xml::OwnedName;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// A recoverable condition collected while walking a descriptor.
///
/// Diagnostics never abort the walk; the engine reports them and keeps
/// going so a schema-deviant document still yields a best-effort record
/// graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Diagnostic {
    /// An element asserted an `xsi:type` other than the expected complex
    /// type; its subtree was not decoded.
    #[error("unexpected xsi:type {found}, expected {expected}")]
    UnexpectedXsiType {
        found: OwnedName,
        expected: OwnedName,
    },

    /// An attribute with no binding on the record type.
    #[error("unexpected attribute {found} on {type_name}; expected one of: {}", name_list(.expected))]
    UnexpectedAttribute {
        type_name: &'static str,
        found: OwnedName,
        expected: Vec<OwnedName>,
    },

    /// A child element with no binding and no extension bucket to fall
    /// back on.
    #[error("unexpected element {found} in {type_name}; expected one of: {}", name_list(.expected))]
    UnexpectedElement {
        type_name: &'static str,
        found: OwnedName,
        expected: Vec<OwnedName>,
    },

    /// A scalar value failed its bound adapter; the field was left unset.
    #[error("{adapter} adapter failed for {type_name}.{field}: {message}")]
    AdapterError {
        type_name: &'static str,
        field: &'static str,
        adapter: &'static str,
        message: String,
    },

    /// An enumeration element held a token outside its lexical space; the
    /// field was left unset.
    #[error("unexpected value {found:?} for {type_name}.{field}; expected one of: {}", .expected.join(", "))]
    UnexpectedEnumValue {
        type_name: &'static str,
        field: &'static str,
        found: String,
        expected: &'static [&'static str],
    },

    /// A required field was unset at encode time; the element was
    /// omitted.
    #[error("unexpected null value for required field {type_name}.{field}")]
    UnexpectedNullValue {
        type_name: &'static str,
        field: &'static str,
    },

    /// An `id` attribute value was already registered in this session;
    /// the first registration wins.
    #[error("duplicate id {id:?} (first seen on {first_type})")]
    DuplicateId { id: String, first_type: &'static str },
}

fn name_list(names: &[OwnedName]) -> String {
    names
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Where an `id` attribute was registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdEntry {
    /// Descriptor type name of the owning record.
    pub type_name: &'static str,
    /// Zero-based registration order within the session.
    pub ordinal: usize,
}

/// Registry of `id` attribute values seen during one decode session, for
/// ID/IDREF-style cross-reference resolution by the surrounding loader.
#[derive(Debug, Default)]
pub struct IdRegistry {
    entries: FxHashMap<String, IdEntry>,
}

impl IdRegistry {
    /// Register an id. Returns the existing entry if the id was already
    /// taken (first registration wins).
    pub fn register(&mut self, id: &str, type_name: &'static str) -> Option<&IdEntry> {
        if self.entries.contains_key(id) {
            return self.entries.get(id);
        }
        let ordinal = self.entries.len();
        self.entries
            .insert(id.to_owned(), IdEntry { type_name, ordinal });
        None
    }

    /// Look up the record type registered for an id.
    pub fn get(&self, id: &str) -> Option<&IdEntry> {
        self.entries.get(id)
    }

    /// Number of registered ids.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no ids were registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// State for one decode or encode pass over a single document.
///
/// Sessions are cheap and single-use: one per document, never shared
/// across threads or documents.
#[derive(Debug, Default)]
pub struct Session {
    diagnostics: Vec<Diagnostic>,
    ids: IdRegistry,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(target: "descry", %diagnostic, "descriptor diagnostic");
        self.diagnostics.push(diagnostic);
    }

    /// Register an `id` attribute value for the given record type.
    pub fn register_id(&mut self, id: &str, type_name: &'static str) {
        if let Some(existing) = self.ids.register(id, type_name) {
            let first_type = existing.type_name;
            self.report(Diagnostic::DuplicateId {
                id: id.to_owned(),
                first_type,
            });
        }
    }

    /// Diagnostics collected so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The id registry.
    pub fn ids(&self) -> &IdRegistry {
        &self.ids
    }

    /// Consume the session, yielding diagnostics and the id registry.
    pub fn into_parts(self) -> (Vec<Diagnostic>, IdRegistry) {
        (self.diagnostics, self.ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_keeps_first() {
        let mut session = Session::new();
        session.register_id("a1", "EjbJar");
        session.register_id("a1", "WebApp");

        assert_eq!(session.ids().get("a1").unwrap().type_name, "EjbJar");
        assert_eq!(session.diagnostics().len(), 1);
        assert!(matches!(
            &session.diagnostics()[0],
            Diagnostic::DuplicateId { id, first_type } if id == "a1" && *first_type == "EjbJar"
        ));
    }

    #[test]
    fn test_registration_order() {
        let mut session = Session::new();
        session.register_id("x", "A");
        session.register_id("y", "B");

        assert_eq!(session.ids().get("x").unwrap().ordinal, 0);
        assert_eq!(session.ids().get("y").unwrap().ordinal, 1);
        assert_eq!(session.ids().len(), 2);
    }

    #[test]
    fn test_diagnostic_display() {
        let d = Diagnostic::UnexpectedEnumValue {
            type_name: "SessionBean",
            field: "session-type",
            found: "Pooled".into(),
            expected: &["Stateful", "Stateless", "Singleton"],
        };
        let text = d.to_string();
        assert!(text.contains("SessionBean.session-type"));
        assert!(text.contains("Stateful, Stateless, Singleton"));
    }
}
