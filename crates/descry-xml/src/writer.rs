//! Buffering XML writer with per-document prefix management.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::{Element, Error, Result, XSI_NS};

/// Streaming XML writer for descriptor documents.
///
/// quick-xml wants every attribute before the start event is written, so
/// the current start element is buffered until its first child, text, or
/// `end` arrives; an element closed while still pending is emitted as a
/// self-closing tag.
///
/// Namespaces get one generated prefix per document scope (`ns1`, `ns2`,
/// …; the XML Schema Instance namespace is always `xsi`). The `xmlns`
/// declaration for a prefix is attached to the element that first uses
/// it.
pub struct XmlWriter {
    inner: Writer<Vec<u8>>,
    pending: Option<Pending>,
    open: Vec<String>,
    prefixes: Vec<(String, String)>,
    next_prefix: usize,
    fresh: Vec<(String, String)>,
}

#[derive(Debug)]
struct Pending {
    qualified: String,
    attrs: Vec<(String, String)>,
}

impl XmlWriter {
    /// Create a writer producing 2-space indented output.
    pub fn new() -> Self {
        Self {
            inner: Writer::new_with_indent(Vec::new(), b' ', 2),
            pending: None,
            open: Vec::new(),
            prefixes: Vec::new(),
            next_prefix: 0,
            fresh: Vec::new(),
        }
    }

    /// Write the XML declaration. Call once, before the root element.
    pub fn declaration(&mut self) -> Result<()> {
        self.inner
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
            .map_err(|e| Error::Write(e.to_string()))
    }

    /// Open an element in the given namespace.
    pub fn begin(&mut self, ns: &str, local: &str) -> Result<()> {
        self.flush_pending()?;
        let qualified = self.qualify(ns, local);
        let attrs = self
            .fresh
            .drain(..)
            .map(|(prefix, uri)| (format!("xmlns:{prefix}"), uri))
            .collect();
        self.pending = Some(Pending { qualified, attrs });
        Ok(())
    }

    /// Attach an unqualified attribute to the pending start element.
    pub fn attr(&mut self, local: &str, value: &str) -> Result<()> {
        let pending = self
            .pending
            .as_mut()
            .ok_or_else(|| Error::MisplacedAttribute(local.to_owned()))?;
        pending.attrs.push((local.to_owned(), value.to_owned()));
        Ok(())
    }

    /// Attach a namespace-qualified attribute to the pending start element.
    pub fn attr_ns(&mut self, ns: &str, local: &str, value: &str) -> Result<()> {
        let qualified = self.qualify(ns, local);
        let pending = self
            .pending
            .as_mut()
            .ok_or_else(|| Error::MisplacedAttribute(local.to_owned()))?;
        for (prefix, uri) in self.fresh.drain(..) {
            pending.attrs.push((format!("xmlns:{prefix}"), uri));
        }
        pending.attrs.push((qualified, value.to_owned()));
        Ok(())
    }

    /// Mark the pending element as explicitly nil (`xsi:nil="true"`).
    pub fn nil(&mut self) -> Result<()> {
        self.attr_ns(XSI_NS, "nil", "true")
    }

    /// Write character content inside the current element.
    pub fn text(&mut self, text: &str) -> Result<()> {
        self.flush_pending()?;
        self.inner
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(|e| Error::Write(e.to_string()))
    }

    /// Close the current element.
    pub fn end(&mut self) -> Result<()> {
        if let Some(pending) = self.pending.take() {
            let mut start = BytesStart::new(pending.qualified.as_str());
            for (name, value) in &pending.attrs {
                start.push_attribute((name.as_str(), value.as_str()));
            }
            return self
                .inner
                .write_event(Event::Empty(start))
                .map_err(|e| Error::Write(e.to_string()));
        }
        let qualified = self.open.pop().ok_or_else(|| {
            Error::Write("end() called with no open element".to_owned())
        })?;
        self.inner
            .write_event(Event::End(BytesEnd::new(qualified.as_str())))
            .map_err(|e| Error::Write(e.to_string()))
    }

    /// The prefixed form of a name, allocating a prefix for the namespace
    /// on first use. Used for QName-valued text content; the backing
    /// `xmlns` declaration lands on the pending element.
    pub fn qname(&mut self, ns: &str, local: &str) -> String {
        let qualified = self.qualify(ns, local);
        if !self.fresh.is_empty() {
            if let Some(pending) = self.pending.as_mut() {
                for (prefix, uri) in self.fresh.drain(..) {
                    pending.attrs.push((format!("xmlns:{prefix}"), uri));
                }
            }
        }
        qualified
    }

    /// Re-emit a captured element subtree verbatim.
    ///
    /// Names keep their original namespaces (re-qualified with this
    /// document's prefixes); attribute and child order is preserved.
    pub fn element(&mut self, elem: &Element) -> Result<()> {
        self.begin(&elem.ns, &elem.local)?;
        for attr in &elem.attributes {
            if attr.ns.is_empty() {
                self.attr(&attr.local, &attr.value)?;
            } else {
                self.attr_ns(&attr.ns, &attr.local, &attr.value)?;
            }
        }
        if elem.children.is_empty() {
            if !elem.text.is_empty() {
                self.text(&elem.text)?;
            }
        } else {
            for child in &elem.children {
                self.element(child)?;
            }
            // Inter-element whitespace was not significant.
            if !elem.text.trim().is_empty() {
                self.text(&elem.text)?;
            }
        }
        self.end()
    }

    /// Finish and return the serialized document.
    pub fn into_string(self) -> Result<String> {
        String::from_utf8(self.inner.into_inner()).map_err(|e| Error::Write(e.to_string()))
    }

    fn flush_pending(&mut self) -> Result<()> {
        if let Some(pending) = self.pending.take() {
            let mut start = BytesStart::new(pending.qualified.as_str());
            for (name, value) in &pending.attrs {
                start.push_attribute((name.as_str(), value.as_str()));
            }
            self.inner
                .write_event(Event::Start(start))
                .map_err(|e| Error::Write(e.to_string()))?;
            self.open.push(pending.qualified);
        }
        Ok(())
    }

    fn qualify(&mut self, ns: &str, local: &str) -> String {
        if ns.is_empty() {
            return local.to_owned();
        }
        let prefix = self.prefix_for(ns);
        format!("{prefix}:{local}")
    }

    fn prefix_for(&mut self, ns: &str) -> String {
        // The xml prefix is predefined and must not be redeclared.
        if ns == crate::XML_NS {
            return "xml".to_owned();
        }
        if let Some((_, prefix)) = self.prefixes.iter().find(|(uri, _)| uri == ns) {
            return prefix.clone();
        }
        let prefix = if ns == XSI_NS {
            "xsi".to_owned()
        } else {
            self.next_prefix += 1;
            format!("ns{}", self.next_prefix)
        };
        self.prefixes.push((ns.to_owned(), prefix.clone()));
        self.fresh.push((prefix.clone(), ns.to_owned()));
        prefix
    }
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Element;

    #[test]
    fn test_prefix_declared_on_first_use() {
        let mut w = XmlWriter::new();
        w.begin("urn:x", "root").unwrap();
        w.begin("urn:x", "child").unwrap();
        w.text("v").unwrap();
        w.end().unwrap();
        w.end().unwrap();

        let out = w.into_string().unwrap();
        assert!(out.starts_with("<ns1:root xmlns:ns1=\"urn:x\">"));
        assert!(out.contains("<ns1:child>v</ns1:child>"));
        assert!(out.ends_with("</ns1:root>"));
        // Declared exactly once.
        assert_eq!(out.matches("xmlns:ns1").count(), 1);
    }

    #[test]
    fn test_empty_element_self_closes() {
        let mut w = XmlWriter::new();
        w.begin("urn:x", "root").unwrap();
        w.attr("id", "r1").unwrap();
        w.end().unwrap();

        assert_eq!(
            w.into_string().unwrap(),
            "<ns1:root xmlns:ns1=\"urn:x\" id=\"r1\"/>"
        );
    }

    #[test]
    fn test_nil_marker() {
        let mut w = XmlWriter::new();
        w.begin("urn:x", "value").unwrap();
        w.nil().unwrap();
        w.end().unwrap();

        let out = w.into_string().unwrap();
        assert!(out.contains("xsi:nil=\"true\""));
        assert!(out.contains("xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\""));
    }

    #[test]
    fn test_attribute_outside_start_is_error() {
        let mut w = XmlWriter::new();
        w.begin("", "a").unwrap();
        w.text("t").unwrap();
        assert!(matches!(
            w.attr("late", "x"),
            Err(Error::MisplacedAttribute(_))
        ));
    }

    #[test]
    fn test_text_escaped() {
        let mut w = XmlWriter::new();
        w.begin("", "a").unwrap();
        w.text("1 < 2 & 3").unwrap();
        w.end().unwrap();

        assert_eq!(w.into_string().unwrap(), "<a>1 &lt; 2 &amp; 3</a>");
    }

    #[test]
    fn test_verbatim_round_trip() {
        let source = r#"<ext xmlns="urn:ext" flag="on"><inner>payload</inner></ext>"#;
        let parsed = Element::parse(source).unwrap();

        let mut w = XmlWriter::new();
        w.element(&parsed).unwrap();
        let rewritten = w.into_string().unwrap();

        let reparsed = Element::parse(&rewritten).unwrap();
        assert_eq!(reparsed.ns, "urn:ext");
        assert_eq!(reparsed.local, "ext");
        assert_eq!(reparsed.attribute("", "flag"), Some("on"));
        assert_eq!(reparsed.children[0].text, "payload");
    }
}
