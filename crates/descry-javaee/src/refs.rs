//! Environment entries and resource references, shared by beans, web
//! apps and interceptors.
//!
//! All of these live in keyed collections on their owners, keyed by the
//! reference name, so a redefinition replaces rather than duplicates.

use std::sync::OnceLock;

use descry_codec::adapter::QnameValue;
use descry_codec::{Descriptor, Keyed, Schema, SchemaBuilder};

use crate::common::{Icon, InjectionTarget, Text};
use crate::enums::{EjbRefType, MessageDestinationUsage, ResAuth, ResSharingScope};
use crate::JAVAEE;

/// A named environment entry with a literal value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvEntry {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub env_entry_name: Option<String>,
    pub env_entry_type: Option<String>,
    pub env_entry_value: Option<String>,
    pub mapped_name: Option<String>,
    pub injection_targets: Vec<InjectionTarget>,
    pub lookup_name: Option<String>,
}

impl Keyed for EnvEntry {
    fn key(&self) -> Option<&str> {
        self.env_entry_name.as_deref()
    }
}

impl Descriptor for EnvEntry {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<EnvEntry>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("EnvEntry", JAVAEE, "env-entry", "env-entryType")
                .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
                .sequence(
                    "description",
                    |r| &r.descriptions,
                    |r, v| r.descriptions.push(v),
                    |r| r.descriptions.clear(),
                )
                .text_required(
                    "env-entry-name",
                    |r| r.env_entry_name.as_deref(),
                    |r, v| r.env_entry_name = Some(v),
                )
                .text(
                    "env-entry-type",
                    |r| r.env_entry_type.as_deref(),
                    |r, v| r.env_entry_type = Some(v),
                )
                // The literal value: whitespace is significant.
                .raw_text(
                    "env-entry-value",
                    |r| r.env_entry_value.as_deref(),
                    |r, v| r.env_entry_value = Some(v),
                )
                .text(
                    "mapped-name",
                    |r| r.mapped_name.as_deref(),
                    |r, v| r.mapped_name = Some(v),
                )
                .sequence(
                    "injection-target",
                    |r| &r.injection_targets,
                    |r, v| r.injection_targets.push(v),
                    |r| r.injection_targets.clear(),
                )
                .text(
                    "lookup-name",
                    |r| r.lookup_name.as_deref(),
                    |r, v| r.lookup_name = Some(v),
                )
                .build()
        })
    }
}

/// A reference to a remote enterprise bean.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EjbRef {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub ejb_ref_name: Option<String>,
    pub ejb_ref_type: Option<EjbRefType>,
    pub home: Option<String>,
    pub remote: Option<String>,
    pub ejb_link: Option<String>,
    pub mapped_name: Option<String>,
    pub injection_targets: Vec<InjectionTarget>,
    pub lookup_name: Option<String>,
}

impl Keyed for EjbRef {
    fn key(&self) -> Option<&str> {
        self.ejb_ref_name.as_deref()
    }
}

impl Descriptor for EjbRef {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<EjbRef>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("EjbRef", JAVAEE, "ejb-ref", "ejb-refType")
                .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
                .sequence(
                    "description",
                    |r| &r.descriptions,
                    |r, v| r.descriptions.push(v),
                    |r| r.descriptions.clear(),
                )
                .text_required(
                    "ejb-ref-name",
                    |r| r.ejb_ref_name.as_deref(),
                    |r, v| r.ejb_ref_name = Some(v),
                )
                .enumeration(
                    "ejb-ref-type",
                    |r| r.ejb_ref_type,
                    |r, v| r.ejb_ref_type = Some(v),
                )
                .text("home", |r| r.home.as_deref(), |r, v| r.home = Some(v))
                .text("remote", |r| r.remote.as_deref(), |r, v| r.remote = Some(v))
                .text(
                    "ejb-link",
                    |r| r.ejb_link.as_deref(),
                    |r, v| r.ejb_link = Some(v),
                )
                .text(
                    "mapped-name",
                    |r| r.mapped_name.as_deref(),
                    |r, v| r.mapped_name = Some(v),
                )
                .sequence(
                    "injection-target",
                    |r| &r.injection_targets,
                    |r, v| r.injection_targets.push(v),
                    |r| r.injection_targets.clear(),
                )
                .text(
                    "lookup-name",
                    |r| r.lookup_name.as_deref(),
                    |r, v| r.lookup_name = Some(v),
                )
                .build()
        })
    }
}

/// A reference to an enterprise bean through its local view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EjbLocalRef {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub ejb_ref_name: Option<String>,
    pub ejb_ref_type: Option<EjbRefType>,
    pub local_home: Option<String>,
    pub local: Option<String>,
    pub ejb_link: Option<String>,
    pub mapped_name: Option<String>,
    pub injection_targets: Vec<InjectionTarget>,
    pub lookup_name: Option<String>,
}

impl Keyed for EjbLocalRef {
    fn key(&self) -> Option<&str> {
        self.ejb_ref_name.as_deref()
    }
}

impl Descriptor for EjbLocalRef {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<EjbLocalRef>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("EjbLocalRef", JAVAEE, "ejb-local-ref", "ejb-local-refType")
                .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
                .sequence(
                    "description",
                    |r| &r.descriptions,
                    |r, v| r.descriptions.push(v),
                    |r| r.descriptions.clear(),
                )
                .text_required(
                    "ejb-ref-name",
                    |r| r.ejb_ref_name.as_deref(),
                    |r, v| r.ejb_ref_name = Some(v),
                )
                .enumeration(
                    "ejb-ref-type",
                    |r| r.ejb_ref_type,
                    |r, v| r.ejb_ref_type = Some(v),
                )
                .text(
                    "local-home",
                    |r| r.local_home.as_deref(),
                    |r, v| r.local_home = Some(v),
                )
                .text("local", |r| r.local.as_deref(), |r, v| r.local = Some(v))
                .text(
                    "ejb-link",
                    |r| r.ejb_link.as_deref(),
                    |r, v| r.ejb_link = Some(v),
                )
                .text(
                    "mapped-name",
                    |r| r.mapped_name.as_deref(),
                    |r, v| r.mapped_name = Some(v),
                )
                .sequence(
                    "injection-target",
                    |r| &r.injection_targets,
                    |r, v| r.injection_targets.push(v),
                    |r| r.injection_targets.clear(),
                )
                .text(
                    "lookup-name",
                    |r| r.lookup_name.as_deref(),
                    |r, v| r.lookup_name = Some(v),
                )
                .build()
        })
    }
}

/// A reference to a resource-manager connection factory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceRef {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub res_ref_name: Option<String>,
    pub res_type: Option<String>,
    pub res_auth: Option<ResAuth>,
    pub res_sharing_scope: Option<ResSharingScope>,
    pub mapped_name: Option<String>,
    pub injection_targets: Vec<InjectionTarget>,
    pub lookup_name: Option<String>,
}

impl Keyed for ResourceRef {
    fn key(&self) -> Option<&str> {
        self.res_ref_name.as_deref()
    }
}

impl Descriptor for ResourceRef {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<ResourceRef>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("ResourceRef", JAVAEE, "resource-ref", "resource-refType")
                .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
                .sequence(
                    "description",
                    |r| &r.descriptions,
                    |r, v| r.descriptions.push(v),
                    |r| r.descriptions.clear(),
                )
                .text_required(
                    "res-ref-name",
                    |r| r.res_ref_name.as_deref(),
                    |r, v| r.res_ref_name = Some(v),
                )
                .text(
                    "res-type",
                    |r| r.res_type.as_deref(),
                    |r, v| r.res_type = Some(v),
                )
                .enumeration("res-auth", |r| r.res_auth, |r, v| r.res_auth = Some(v))
                .enumeration(
                    "res-sharing-scope",
                    |r| r.res_sharing_scope,
                    |r, v| r.res_sharing_scope = Some(v),
                )
                .text(
                    "mapped-name",
                    |r| r.mapped_name.as_deref(),
                    |r, v| r.mapped_name = Some(v),
                )
                .sequence(
                    "injection-target",
                    |r| &r.injection_targets,
                    |r, v| r.injection_targets.push(v),
                    |r| r.injection_targets.clear(),
                )
                .text(
                    "lookup-name",
                    |r| r.lookup_name.as_deref(),
                    |r, v| r.lookup_name = Some(v),
                )
                .build()
        })
    }
}

/// A reference to an administered object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceEnvRef {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub resource_env_ref_name: Option<String>,
    pub resource_env_ref_type: Option<String>,
    pub mapped_name: Option<String>,
    pub injection_targets: Vec<InjectionTarget>,
    pub lookup_name: Option<String>,
}

impl Keyed for ResourceEnvRef {
    fn key(&self) -> Option<&str> {
        self.resource_env_ref_name.as_deref()
    }
}

impl Descriptor for ResourceEnvRef {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<ResourceEnvRef>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "ResourceEnvRef",
                JAVAEE,
                "resource-env-ref",
                "resource-env-refType",
            )
            .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
            .sequence(
                "description",
                |r| &r.descriptions,
                |r, v| r.descriptions.push(v),
                |r| r.descriptions.clear(),
            )
            .text_required(
                "resource-env-ref-name",
                |r| r.resource_env_ref_name.as_deref(),
                |r, v| r.resource_env_ref_name = Some(v),
            )
            .text(
                "resource-env-ref-type",
                |r| r.resource_env_ref_type.as_deref(),
                |r, v| r.resource_env_ref_type = Some(v),
            )
            .text(
                "mapped-name",
                |r| r.mapped_name.as_deref(),
                |r, v| r.mapped_name = Some(v),
            )
            .sequence(
                "injection-target",
                |r| &r.injection_targets,
                |r, v| r.injection_targets.push(v),
                |r| r.injection_targets.clear(),
            )
            .text(
                "lookup-name",
                |r| r.lookup_name.as_deref(),
                |r, v| r.lookup_name = Some(v),
            )
            .build()
        })
    }
}

/// A reference to a message destination.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageDestinationRef {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub message_destination_ref_name: Option<String>,
    pub message_destination_type: Option<String>,
    pub message_destination_usage: Option<MessageDestinationUsage>,
    pub message_destination_link: Option<String>,
    pub mapped_name: Option<String>,
    pub injection_targets: Vec<InjectionTarget>,
    pub lookup_name: Option<String>,
}

impl Keyed for MessageDestinationRef {
    fn key(&self) -> Option<&str> {
        self.message_destination_ref_name.as_deref()
    }
}

impl Descriptor for MessageDestinationRef {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<MessageDestinationRef>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "MessageDestinationRef",
                JAVAEE,
                "message-destination-ref",
                "message-destination-refType",
            )
            .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
            .sequence(
                "description",
                |r| &r.descriptions,
                |r, v| r.descriptions.push(v),
                |r| r.descriptions.clear(),
            )
            .text_required(
                "message-destination-ref-name",
                |r| r.message_destination_ref_name.as_deref(),
                |r, v| r.message_destination_ref_name = Some(v),
            )
            .text(
                "message-destination-type",
                |r| r.message_destination_type.as_deref(),
                |r, v| r.message_destination_type = Some(v),
            )
            .enumeration(
                "message-destination-usage",
                |r| r.message_destination_usage,
                |r, v| r.message_destination_usage = Some(v),
            )
            .text(
                "message-destination-link",
                |r| r.message_destination_link.as_deref(),
                |r, v| r.message_destination_link = Some(v),
            )
            .text(
                "mapped-name",
                |r| r.mapped_name.as_deref(),
                |r, v| r.mapped_name = Some(v),
            )
            .sequence(
                "injection-target",
                |r| &r.injection_targets,
                |r, v| r.injection_targets.push(v),
                |r| r.injection_targets.clear(),
            )
            .text(
                "lookup-name",
                |r| r.lookup_name.as_deref(),
                |r, v| r.lookup_name = Some(v),
            )
            .build()
        })
    }
}

/// A reference to a web service, including the qualified service name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceRef {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub display_names: Vec<Text>,
    pub icons: Vec<Icon>,
    pub service_ref_name: Option<String>,
    pub service_interface: Option<String>,
    pub service_ref_type: Option<String>,
    pub wsdl_file: Option<String>,
    pub jaxrpc_mapping_file: Option<String>,
    pub service_qname: Option<QnameValue>,
    pub mapped_name: Option<String>,
    pub injection_targets: Vec<InjectionTarget>,
    pub lookup_name: Option<String>,
}

impl Keyed for ServiceRef {
    fn key(&self) -> Option<&str> {
        self.service_ref_name.as_deref()
    }
}

impl Descriptor for ServiceRef {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<ServiceRef>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("ServiceRef", JAVAEE, "service-ref", "service-refType")
                .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
                .sequence(
                    "description",
                    |r| &r.descriptions,
                    |r, v| r.descriptions.push(v),
                    |r| r.descriptions.clear(),
                )
                .sequence(
                    "display-name",
                    |r| &r.display_names,
                    |r, v| r.display_names.push(v),
                    |r| r.display_names.clear(),
                )
                .sequence(
                    "icon",
                    |r| &r.icons,
                    |r, v| r.icons.push(v),
                    |r| r.icons.clear(),
                )
                .text_required(
                    "service-ref-name",
                    |r| r.service_ref_name.as_deref(),
                    |r, v| r.service_ref_name = Some(v),
                )
                .text_required(
                    "service-interface",
                    |r| r.service_interface.as_deref(),
                    |r, v| r.service_interface = Some(v),
                )
                .text(
                    "service-ref-type",
                    |r| r.service_ref_type.as_deref(),
                    |r, v| r.service_ref_type = Some(v),
                )
                .text(
                    "wsdl-file",
                    |r| r.wsdl_file.as_deref(),
                    |r, v| r.wsdl_file = Some(v),
                )
                .text(
                    "jaxrpc-mapping-file",
                    |r| r.jaxrpc_mapping_file.as_deref(),
                    |r, v| r.jaxrpc_mapping_file = Some(v),
                )
                .qname(
                    "service-qname",
                    |r| r.service_qname.as_ref(),
                    |r, v| r.service_qname = Some(v),
                )
                .text(
                    "mapped-name",
                    |r| r.mapped_name.as_deref(),
                    |r, v| r.mapped_name = Some(v),
                )
                .sequence(
                    "injection-target",
                    |r| &r.injection_targets,
                    |r, v| r.injection_targets.push(v),
                    |r| r.injection_targets.clear(),
                )
                .text(
                    "lookup-name",
                    |r| r.lookup_name.as_deref(),
                    |r, v| r.lookup_name = Some(v),
                )
                .build()
        })
    }
}
