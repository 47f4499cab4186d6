//! Descry - Java EE / Jakarta EE deployment-descriptor codec library.
//!
//! This crate provides a unified interface to the Descry library
//! ecosystem for reading and writing deployment descriptors.
//!
//! # Crates
//!
//! - [`descry_xml`] - Namespace-aware XML element tree and writer
//! - [`descry_codec`] - The generic schema-driven codec engine
//! - [`descry_javaee`] - Descriptor record types and schema tables
//!
//! # Example
//!
//! ```
//! use descry::prelude::*;
//!
//! let decoded = read_web_app(
//!     r#"<web-app xmlns="http://java.sun.com/xml/ns/javaee" version="3.0">
//!          <session-config>
//!            <cookie-config><http-only>true</http-only></cookie-config>
//!          </session-config>
//!        </web-app>"#,
//! )?;
//!
//! let app = decoded.value.unwrap();
//! let cookies = app.session_config.unwrap().cookie_config.unwrap();
//! assert_eq!(cookies.http_only, Some(true));
//! # Ok::<(), descry_codec::Error>(())
//! ```

// Re-export all sub-crates
pub use descry_codec as codec;
pub use descry_javaee as javaee;
pub use descry_xml as xml;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use descry_codec::{
        read_document, write_document, Decoded, Descriptor, Diagnostic, Encoded, Session,
    };
    pub use descry_javaee::{
        read_ejb_jar, read_faces_config, read_tld, read_web_app, write_ejb_jar,
        write_faces_config, write_tld, write_web_app, EjbJar, FacesConfig, TldTaglib, WebApp,
    };
    pub use descry_xml::{Element, XmlWriter};
}

// Re-export commonly used types at the crate root
pub use descry_codec::{Decoded, Diagnostic, Encoded};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
