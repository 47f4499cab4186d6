//! Value adapters: bidirectional string/typed-value conversion at the
//! XML boundary.
//!
//! Adapters are stateless unit types resolved through the schema table,
//! never shared mutable singletons. Parsing may fail (reported as an
//! adapter-error diagnostic by the engine); printing never fails.

use std::fmt;

use descry_xml::{Element, XmlWriter};

/// Failure of a value adapter on parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterError(pub String);

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A bidirectional string-to-typed-value converter.
///
/// `parse` receives the owning element so QName-valued text can resolve
/// prefixes against the in-scope bindings; most adapters ignore it.
/// `print` receives the writer so QName values can allocate a prefix.
pub trait ValueAdapter {
    /// The decoded value type.
    type Value;

    /// Adapter name used in diagnostics.
    const NAME: &'static str;

    /// Decode text content into a value.
    fn parse(text: &str, element: &Element) -> Result<Self::Value, AdapterError>;

    /// Encode a value as text content.
    fn print(value: &Self::Value, writer: &mut XmlWriter) -> String;
}

/// Trim and collapse internal whitespace runs to single spaces, per the
/// XML Schema `token` rules. Used by almost every text field.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Collapsed-string adapter (XML Schema `token` semantics). Never fails.
#[derive(Debug)]
pub struct CollapsedString;

impl ValueAdapter for CollapsedString {
    type Value = String;
    const NAME: &'static str = "collapsed-string";

    fn parse(text: &str, _element: &Element) -> Result<String, AdapterError> {
        Ok(collapse_whitespace(text))
    }

    fn print(value: &String, _writer: &mut XmlWriter) -> String {
        value.clone()
    }
}

/// Raw-string adapter: whitespace preserved verbatim, for values whose
/// formatting matters (an env-entry's literal value). Never fails.
#[derive(Debug)]
pub struct RawString;

impl ValueAdapter for RawString {
    type Value = String;
    const NAME: &'static str = "raw-string";

    fn parse(text: &str, _element: &Element) -> Result<String, AdapterError> {
        Ok(text.to_owned())
    }

    fn print(value: &String, _writer: &mut XmlWriter) -> String {
        value.clone()
    }
}

/// Lenient boolean adapter: the literal text `"1"` or `"true"` is true,
/// anything else (including malformed input) is false. This is looser
/// than the XML Schema boolean lexical space on purpose; descriptors in
/// the wild rely on it.
#[derive(Debug)]
pub struct XmlBool;

impl ValueAdapter for XmlBool {
    type Value = bool;
    const NAME: &'static str = "boolean";

    fn parse(text: &str, _element: &Element) -> Result<bool, AdapterError> {
        Ok(text == "1" || text == "true")
    }

    fn print(value: &bool, _writer: &mut XmlWriter) -> String {
        value.to_string()
    }
}

/// Strict 32-bit integer adapter.
#[derive(Debug)]
pub struct XmlInt;

impl ValueAdapter for XmlInt {
    type Value = i32;
    const NAME: &'static str = "int";

    fn parse(text: &str, _element: &Element) -> Result<i32, AdapterError> {
        text.trim()
            .parse()
            .map_err(|_| AdapterError(format!("not a valid int: {text:?}")))
    }

    fn print(value: &i32, _writer: &mut XmlWriter) -> String {
        value.to_string()
    }
}

/// Strict 64-bit integer adapter.
#[derive(Debug)]
pub struct XmlLong;

impl ValueAdapter for XmlLong {
    type Value = i64;
    const NAME: &'static str = "long";

    fn parse(text: &str, _element: &Element) -> Result<i64, AdapterError> {
        text.trim()
            .parse()
            .map_err(|_| AdapterError(format!("not a valid long: {text:?}")))
    }

    fn print(value: &i64, _writer: &mut XmlWriter) -> String {
        value.to_string()
    }
}

/// A decoded qualified-name value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QnameValue {
    /// Namespace URI the prefix resolved to; empty for no namespace.
    pub ns: String,
    /// Local part.
    pub local: String,
}

impl QnameValue {
    /// Create a qualified-name value.
    pub fn new(ns: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            ns: ns.into(),
            local: local.into(),
        }
    }
}

/// Qualified-name adapter: resolves prefixed text against the in-scope
/// namespace bindings; an unbound prefix is an adapter error.
#[derive(Debug)]
pub struct Qname;

impl ValueAdapter for Qname {
    type Value = QnameValue;
    const NAME: &'static str = "qname";

    fn parse(text: &str, element: &Element) -> Result<QnameValue, AdapterError> {
        let (ns, local) = element
            .resolve_qname(text)
            .ok_or_else(|| AdapterError(format!("unbound namespace prefix in {text:?}")))?;
        Ok(QnameValue { ns, local })
    }

    fn print(value: &QnameValue, writer: &mut XmlWriter) -> String {
        writer.qname(&value.ns, &value.local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(xml: &str) -> Element {
        Element::parse(xml).unwrap()
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a  b \n c  "), "a b c");
        assert_eq!(collapse_whitespace("plain"), "plain");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn test_boolean_leniency() {
        let el = element("<b/>");
        assert_eq!(XmlBool::parse("1", &el), Ok(true));
        assert_eq!(XmlBool::parse("true", &el), Ok(true));
        assert_eq!(XmlBool::parse("0", &el), Ok(false));
        assert_eq!(XmlBool::parse("TRUE", &el), Ok(false));
        assert_eq!(XmlBool::parse("yes", &el), Ok(false));
    }

    #[test]
    fn test_int_strictness() {
        let el = element("<i/>");
        assert_eq!(XmlInt::parse(" 42 ", &el), Ok(42));
        assert!(XmlInt::parse("forty-two", &el).is_err());
        assert!(XmlInt::parse("", &el).is_err());
    }

    #[test]
    fn test_raw_preserves_whitespace() {
        let el = element("<v/>");
        assert_eq!(RawString::parse("  keep  me  ", &el).unwrap(), "  keep  me  ");
    }

    #[test]
    fn test_qname_resolution() {
        let el = element(r#"<q xmlns:svc="urn:services">svc:EchoPort</q>"#);
        assert_eq!(
            Qname::parse(&el.text, &el).unwrap(),
            QnameValue::new("urn:services", "EchoPort")
        );
        assert!(Qname::parse("nope:Thing", &el).is_err());
    }
}
