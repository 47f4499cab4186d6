//! In-scope namespace prefix bindings.

use std::rc::Rc;

/// Namespace bindings in scope at one element.
///
/// Scopes form a parent-linked chain mirroring element nesting; an element
/// that declares no `xmlns` attributes shares its parent's scope. The
/// default namespace is stored under the empty prefix.
#[derive(Debug, Default)]
pub struct NsScope {
    bindings: Vec<(String, String)>,
    parent: Option<Rc<NsScope>>,
}

impl NsScope {
    /// Create a child scope with additional `(prefix, namespace)` bindings.
    pub fn child(parent: &Rc<NsScope>, bindings: Vec<(String, String)>) -> Rc<NsScope> {
        Rc::new(NsScope {
            bindings,
            parent: Some(parent.clone()),
        })
    }

    /// Resolve a prefix to its namespace URI, walking outward.
    ///
    /// The empty prefix resolves the default namespace. Returns `None` for
    /// an unbound prefix.
    pub fn resolve(&self, prefix: &str) -> Option<&str> {
        let mut scope = self;
        loop {
            if let Some((_, uri)) = scope.bindings.iter().rev().find(|(p, _)| p == prefix) {
                // An empty URI un-declares the binding.
                return if uri.is_empty() { None } else { Some(uri) };
            }
            scope = scope.parent.as_deref()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_walks_chain() {
        let root = Rc::new(NsScope::default());
        let outer = NsScope::child(&root, vec![("a".into(), "urn:a".into())]);
        let inner = NsScope::child(&outer, vec![("b".into(), "urn:b".into())]);

        assert_eq!(inner.resolve("a"), Some("urn:a"));
        assert_eq!(inner.resolve("b"), Some("urn:b"));
        assert_eq!(outer.resolve("b"), None);
        assert_eq!(inner.resolve("missing"), None);
    }

    #[test]
    fn test_inner_binding_shadows_outer() {
        let root = Rc::new(NsScope::default());
        let outer = NsScope::child(&root, vec![("p".into(), "urn:outer".into())]);
        let inner = NsScope::child(&outer, vec![("p".into(), "urn:inner".into())]);

        assert_eq!(inner.resolve("p"), Some("urn:inner"));
        assert_eq!(outer.resolve("p"), Some("urn:outer"));
    }

    #[test]
    fn test_default_namespace() {
        let root = Rc::new(NsScope::default());
        let scoped = NsScope::child(&root, vec![(String::new(), "urn:default".into())]);

        assert_eq!(scoped.resolve(""), Some("urn:default"));
        assert_eq!(root.resolve(""), None);
    }

    #[test]
    fn test_empty_uri_undeclares() {
        let root = Rc::new(NsScope::default());
        let outer = NsScope::child(&root, vec![(String::new(), "urn:x".into())]);
        let inner = NsScope::child(&outer, vec![(String::new(), String::new())]);

        assert_eq!(inner.resolve(""), None);
    }
}
