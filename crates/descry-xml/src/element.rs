//! Owned, namespace-resolved element tree.

use std::rc::Rc;

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;

use crate::{Error, NsScope, OwnedName, Result, XSI_NS};

/// A namespace-resolved attribute.
///
/// `xmlns` declarations are not materialized as attributes; they feed the
/// element's [`NsScope`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// Namespace URI; empty for unqualified attributes (the common case).
    pub ns: String,
    /// Local name.
    pub local: String,
    /// Unescaped attribute value.
    pub value: String,
}

/// One element of a parsed document.
#[derive(Debug, Clone)]
pub struct Element {
    /// Namespace URI the element name resolved to; empty if unqualified.
    pub ns: String,
    /// Local name.
    pub local: String,
    /// Attributes in document order, excluding `xmlns` declarations.
    pub attributes: Vec<Attribute>,
    /// Child elements in document order.
    pub children: Vec<Element>,
    /// Concatenated character content, unescaped, whitespace preserved.
    pub text: String,
    scope: Rc<NsScope>,
}

impl Element {
    /// Parse an XML document into its root element.
    ///
    /// Malformed XML is fatal and propagates as [`Error::Parse`]; anything
    /// after the root element is ignored.
    pub fn parse(xml: &str) -> Result<Element> {
        let mut reader = NsReader::from_str(xml);

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;
        let mut scopes: Vec<Rc<NsScope>> = vec![Rc::new(NsScope::default())];

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    let elem = open_element(&reader, &e, scopes.last().expect("scope stack"))?;
                    scopes.push(elem.scope.clone());
                    stack.push(elem);
                }
                Ok(Event::Empty(e)) => {
                    let elem = open_element(&reader, &e, scopes.last().expect("scope stack"))?;
                    attach(elem, &mut stack, &mut root);
                }
                Ok(Event::End(_)) => {
                    scopes.pop();
                    if let Some(elem) = stack.pop() {
                        attach(elem, &mut stack, &mut root);
                    }
                }
                Ok(Event::Text(e)) => {
                    if let Some(top) = stack.last_mut() {
                        let text = e.unescape().map_err(|e| Error::Parse(e.to_string()))?;
                        top.text.push_str(&text);
                    }
                }
                Ok(Event::CData(e)) => {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(std::str::from_utf8(&e.into_inner())?);
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {} // Declarations, comments, processing instructions.
                Err(e) => return Err(Error::Parse(e.to_string())),
            }
        }

        root.ok_or(Error::NoRoot)
    }

    /// The element's qualified name.
    pub fn name(&self) -> OwnedName {
        OwnedName::new(self.ns.clone(), self.local.clone())
    }

    /// Look up an attribute value by namespace and local name.
    pub fn attribute(&self, ns: &str, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.local == local && a.ns == ns)
            .map(|a| a.value.as_str())
    }

    /// Whether the element carries an explicit `xsi:nil` marker.
    pub fn is_nil(&self) -> bool {
        matches!(self.attribute(XSI_NS, "nil"), Some("true") | Some("1"))
    }

    /// The element's `xsi:type` assertion, if any, with the prefix
    /// resolved against the in-scope bindings.
    ///
    /// An unbound prefix yields a name with an empty namespace, which will
    /// never match an expected type and is reported as a mismatch by the
    /// caller.
    pub fn xsi_type(&self) -> Option<OwnedName> {
        let raw = self.attribute(XSI_NS, "type")?.trim();
        Some(match raw.split_once(':') {
            Some((prefix, local)) => OwnedName::new(
                self.scope.resolve(prefix).unwrap_or_default(),
                local,
            ),
            None => OwnedName::new(self.scope.resolve("").unwrap_or_default(), raw),
        })
    }

    /// Resolve QName-valued text against the element's in-scope bindings.
    ///
    /// Returns `(namespace, local)`; `None` if the text uses an unbound
    /// prefix. Unprefixed names resolve to the default namespace, or to no
    /// namespace when none is in scope.
    pub fn resolve_qname(&self, text: &str) -> Option<(String, String)> {
        let text = text.trim();
        match text.split_once(':') {
            Some((prefix, local)) => {
                let ns = self.scope.resolve(prefix)?;
                Some((ns.to_owned(), local.to_owned()))
            }
            None => Some((
                self.scope.resolve("").unwrap_or_default().to_owned(),
                text.to_owned(),
            )),
        }
    }

    /// The namespace bindings in scope at this element.
    pub fn scope(&self) -> &Rc<NsScope> {
        &self.scope
    }
}

/// Build an element from a start tag: resolve its name, split `xmlns`
/// declarations out of the attribute list, and derive its scope.
fn open_element(
    reader: &NsReader<&[u8]>,
    start: &BytesStart<'_>,
    parent_scope: &Rc<NsScope>,
) -> Result<Element> {
    let mut declarations: Vec<(String, String)> = Vec::new();
    let mut attributes: Vec<Attribute> = Vec::new();

    for attr in start.attributes() {
        let attr = attr.map_err(|e| Error::Parse(e.to_string()))?;
        let key = attr.key;
        let value = attr
            .unescape_value()
            .map_err(|e| Error::Parse(e.to_string()))?
            .into_owned();

        if key.as_ref() == b"xmlns" {
            declarations.push((String::new(), value));
        } else if let Some(prefix) = key.as_ref().strip_prefix(b"xmlns:") {
            declarations.push((std::str::from_utf8(prefix)?.to_owned(), value));
        } else {
            let (resolved, local) = reader.resolve_attribute(key);
            attributes.push(Attribute {
                ns: namespace_of(&resolved)?,
                local: std::str::from_utf8(local.as_ref())?.to_owned(),
                value,
            });
        }
    }

    let scope = if declarations.is_empty() {
        parent_scope.clone()
    } else {
        NsScope::child(parent_scope, declarations)
    };

    let (resolved, local) = reader.resolve_element(start.name());
    Ok(Element {
        ns: namespace_of(&resolved)?,
        local: std::str::from_utf8(local.as_ref())?.to_owned(),
        attributes,
        children: Vec::new(),
        text: String::new(),
        scope,
    })
}

fn namespace_of(resolved: &ResolveResult<'_>) -> Result<String> {
    Ok(match resolved {
        ResolveResult::Bound(ns) => std::str::from_utf8(ns.as_ref())?.to_owned(),
        _ => String::new(),
    })
}

fn attach(elem: Element, stack: &mut Vec<Element>, root: &mut Option<Element>) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(elem);
    } else if root.is_none() {
        *root = Some(elem);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolves_namespaces() {
        let root = Element::parse(
            r#"<ejb-jar xmlns="http://java.sun.com/xml/ns/javaee" version="3.1">
                <ejb-client-jar>client.jar</ejb-client-jar>
            </ejb-jar>"#,
        )
        .unwrap();

        assert_eq!(root.ns, "http://java.sun.com/xml/ns/javaee");
        assert_eq!(root.local, "ejb-jar");
        assert_eq!(root.attribute("", "version"), Some("3.1"));

        let child = &root.children[0];
        assert_eq!(child.ns, "http://java.sun.com/xml/ns/javaee");
        assert_eq!(child.local, "ejb-client-jar");
        assert_eq!(child.text, "client.jar");
    }

    #[test]
    fn test_xmlns_not_an_attribute() {
        let root = Element::parse(r#"<a xmlns="urn:x" xmlns:p="urn:p" id="r"/>"#).unwrap();
        assert_eq!(root.attributes.len(), 1);
        assert_eq!(root.attribute("", "id"), Some("r"));
    }

    #[test]
    fn test_nil_and_xsi_type() {
        let root = Element::parse(concat!(
            r#"<a xmlns="urn:x" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            r#"<b xsi:nil="true"/>"#,
            r#"<c xsi:type="aType"/>"#,
            "</a>",
        ))
        .unwrap();

        assert!(root.children[0].is_nil());
        assert!(!root.children[1].is_nil());

        let xsi = root.children[1].xsi_type().unwrap();
        assert_eq!(xsi.ns, "urn:x");
        assert_eq!(xsi.local, "aType");
    }

    #[test]
    fn test_resolve_qname_text() {
        let root = Element::parse(
            r#"<a xmlns="urn:default" xmlns:svc="urn:services"><q>svc:Port</q><u>Plain</u></a>"#,
        )
        .unwrap();

        let q = &root.children[0];
        assert_eq!(
            q.resolve_qname(&q.text),
            Some(("urn:services".into(), "Port".into()))
        );

        let u = &root.children[1];
        assert_eq!(
            u.resolve_qname(&u.text),
            Some(("urn:default".into(), "Plain".into()))
        );

        assert_eq!(q.resolve_qname("missing:Name"), None);
    }

    #[test]
    fn test_text_preserved_verbatim() {
        let root = Element::parse("<a><v>  two  spaces  </v></a>").unwrap();
        assert_eq!(root.children[0].text, "  two  spaces  ");
    }

    #[test]
    fn test_entities_unescaped() {
        let root = Element::parse(r#"<a note="x &amp; y">1 &lt; 2</a>"#).unwrap();
        assert_eq!(root.text, "1 < 2");
        assert_eq!(root.attribute("", "note"), Some("x & y"));
    }

    #[test]
    fn test_empty_document_is_error() {
        assert!(matches!(Element::parse(""), Err(Error::NoRoot)));
        assert!(matches!(Element::parse("<a><b></a>"), Err(Error::Parse(_))));
    }
}
