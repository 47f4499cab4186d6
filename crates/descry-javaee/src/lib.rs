//! Java EE / Jakarta EE deployment-descriptor types.
//!
//! Typed records and schema tables for the descriptor families a
//! container loads: `ejb-jar.xml`, `web.xml`, tag library descriptors
//! and `faces-config.xml`. The records are plain data holders; all
//! marshalling behavior lives in the generic `descry-codec` engine,
//! driven by the per-type schemas declared alongside each record.
//!
//! # Quick Start
//!
//! ```
//! use descry_javaee::read_ejb_jar;
//!
//! let decoded = read_ejb_jar(
//!     r#"<ejb-jar xmlns="http://java.sun.com/xml/ns/javaee" version="3.1">
//!          <ejb-client-jar>client.jar</ejb-client-jar>
//!        </ejb-jar>"#,
//! )?;
//!
//! let jar = decoded.value.unwrap();
//! assert_eq!(jar.version.as_deref(), Some("3.1"));
//! assert_eq!(jar.ejb_client_jar.as_deref(), Some("client.jar"));
//! assert!(decoded.diagnostics.is_empty());
//! # Ok::<(), descry_codec::Error>(())
//! ```
//!
//! Any root type round-trips through [`descry_codec::write_document`]:
//!
//! ```
//! use descry_javaee::{EjbJar, write_ejb_jar};
//!
//! let jar = EjbJar { version: Some("3.1".into()), ..Default::default() };
//! let encoded = write_ejb_jar(&jar)?;
//! assert!(encoded.xml.contains("version=\"3.1\""));
//! # Ok::<(), descry_codec::Error>(())
//! ```

mod common;
mod enums;
mod faces;
mod refs;
mod tld;

pub mod ejb;
pub mod web;

pub use common::{
    Empty, Icon, InjectionTarget, LifecycleCallback, Listener, MessageDestination, Method,
    MethodParams, ParamValue, RunAs, SecurityIdentity, SecurityRole, SecurityRoleRef, Text,
};
pub use enums::{
    ConcurrencyManagementType, Dispatcher, EjbRefType, MessageDestinationUsage, MethodIntf,
    ResAuth, ResSharingScope, SessionType, TrackingMode, TransAttribute, TransactionType,
    TransportGuarantee,
};
pub use faces::{
    FacesApplication, FacesConfig, FacesLocaleConfig, FacesManagedBean, FacesManagedProperty,
    FacesNavigationCase, FacesNavigationRule, FacesRedirect,
};
pub use refs::{
    EjbLocalRef, EjbRef, EnvEntry, MessageDestinationRef, ResourceEnvRef, ResourceRef, ServiceRef,
};
pub use tld::{TldAttribute, TldFunction, TldTag, TldTaglib, TldValidator, TldVariable};

pub use ejb::{EjbJar, SessionBean};
pub use web::WebApp;

use descry_codec::{read_document, write_document, Decoded, Encoded, Result};

/// The Java EE descriptor namespace every schema in this crate binds to.
pub const JAVAEE: &str = "http://java.sun.com/xml/ns/javaee";

/// Read an `ejb-jar.xml` document.
pub fn read_ejb_jar(xml: &str) -> Result<Decoded<EjbJar>> {
    read_document(xml)
}

/// Read a `web.xml` document.
pub fn read_web_app(xml: &str) -> Result<Decoded<WebApp>> {
    read_document(xml)
}

/// Read a tag library descriptor.
pub fn read_tld(xml: &str) -> Result<Decoded<TldTaglib>> {
    read_document(xml)
}

/// Read a `faces-config.xml` document.
pub fn read_faces_config(xml: &str) -> Result<Decoded<FacesConfig>> {
    read_document(xml)
}

/// Write an `ejb-jar.xml` document.
pub fn write_ejb_jar(jar: &EjbJar) -> Result<Encoded> {
    write_document(jar)
}

/// Write a `web.xml` document.
pub fn write_web_app(app: &WebApp) -> Result<Encoded> {
    write_document(app)
}

/// Write a tag library descriptor.
pub fn write_tld(taglib: &TldTaglib) -> Result<Encoded> {
    write_document(taglib)
}

/// Write a `faces-config.xml` document.
pub fn write_faces_config(config: &FacesConfig) -> Result<Encoded> {
    write_document(config)
}
