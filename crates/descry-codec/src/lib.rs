//! Schema-driven XML codec engine for deployment descriptors.
//!
//! One generic engine decodes XML element subtrees into typed records and
//! encodes them back, driven entirely by per-type schema tables. A record
//! type opts in by implementing [`Descriptor`], which hands the engine a
//! [`Schema`]: the expected element and `xsi:type` names, attribute and
//! child-element bindings (each pairing a decode closure with an encode
//! closure through a [value adapter](adapter)), an optional extension
//! bucket for unknown children, and optional lifecycle hooks.
//!
//! Decoding is deliberately forgiving: per-field problems (unknown
//! attributes or elements, adapter failures, out-of-vocabulary enum
//! tokens) are collected as [`Diagnostic`]s on the [`Session`] and the
//! walk continues, so a partially-malformed descriptor still yields a
//! best-effort record graph. Only structural violations are fatal:
//! malformed XML, a wrong root element, or an `xsi:type` that contradicts
//! the expected type (which aborts that subtree with a diagnostic).
//!
//! # Example
//!
//! ```
//! use descry_codec::{read_document, Descriptor, Schema, SchemaBuilder};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Greeting {
//!     message: Option<String>,
//! }
//!
//! impl Descriptor for Greeting {
//!     fn schema() -> &'static Schema<Self> {
//!         static SCHEMA: std::sync::OnceLock<Schema<Greeting>> = std::sync::OnceLock::new();
//!         SCHEMA.get_or_init(|| {
//!             SchemaBuilder::new("Greeting", "urn:hello", "greeting", "greetingType")
//!                 .text("message", |r: &Self| r.message.as_deref(), |r, v| r.message = Some(v))
//!                 .build()
//!         })
//!     }
//! }
//!
//! let decoded = read_document::<Greeting>(
//!     r#"<greeting xmlns="urn:hello"><message>hi there</message></greeting>"#,
//! )?;
//! assert_eq!(decoded.value.unwrap().message.as_deref(), Some("hi there"));
//! # Ok::<(), descry_codec::Error>(())
//! ```

pub mod adapter;

mod engine;
mod error;
mod keyed;
mod schema;
mod session;

pub use engine::{decode, encode_value, read_document, write_document, Decoded, Encoded};
pub use error::{Error, Result};
pub use keyed::{Keyed, KeyedCollection};
pub use schema::{Descriptor, DescriptorEnum, Name, Schema, SchemaBuilder};
pub use session::{Diagnostic, IdEntry, IdRegistry, Session};
