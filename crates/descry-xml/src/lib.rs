//! Namespace-aware XML element tree and writer.
//!
//! Deployment descriptors are small, namespace-qualified XML documents, so
//! this crate parses a whole document into an owned [`Element`] tree up
//! front and lets the codec layer walk it. Every element carries its
//! resolved namespace URI, its attributes (also namespace-resolved), and
//! the prefix bindings that were in scope where it appeared, which is what
//! QName-valued text content needs to resolve against.
//!
//! Writing goes through [`XmlWriter`], which buffers the current start
//! element so attributes and namespace declarations can still be attached
//! after `begin`, generates one prefix per namespace per document, and
//! knows how to emit an `xsi:nil` marker.
//!
//! # Example
//!
//! ```
//! use descry_xml::{Element, XmlWriter};
//!
//! let root = Element::parse(r#"<a xmlns="urn:x"><b>hi</b></a>"#)?;
//! assert_eq!(root.ns, "urn:x");
//! assert_eq!(root.children[0].text, "hi");
//!
//! let mut writer = XmlWriter::new();
//! writer.begin("urn:x", "a")?;
//! writer.text("hi")?;
//! writer.end()?;
//! assert_eq!(writer.into_string()?, "<ns1:a xmlns:ns1=\"urn:x\">hi</ns1:a>");
//! # Ok::<(), descry_xml::Error>(())
//! ```

mod element;
mod error;
mod name;
mod scope;
mod writer;

pub use element::{Attribute, Element};
pub use error::{Error, Result};
pub use name::OwnedName;
pub use scope::NsScope;
pub use writer::XmlWriter;

/// The XML Schema Instance namespace (`xsi:nil`, `xsi:type`).
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// The XML namespace, bound to the reserved `xml` prefix (`xml:lang`).
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";
