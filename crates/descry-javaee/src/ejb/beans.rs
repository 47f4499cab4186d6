//! Session and message-driven bean declarations.

use std::sync::OnceLock;

use descry_codec::{Descriptor, Keyed, KeyedCollection, Schema, SchemaBuilder};

use crate::common::{Empty, Icon, LifecycleCallback, SecurityIdentity, SecurityRoleRef, Text};
use crate::enums::{ConcurrencyManagementType, SessionType, TransactionType};
use crate::refs::{
    EjbLocalRef, EjbRef, EnvEntry, MessageDestinationRef, ResourceEnvRef, ResourceRef, ServiceRef,
};
use crate::JAVAEE;

/// An interceptor method invoked around business methods.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AroundInvoke {
    pub class: Option<String>,
    pub method_name: Option<String>,
}

impl Descriptor for AroundInvoke {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<AroundInvoke>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("AroundInvoke", JAVAEE, "around-invoke", "around-invokeType")
                .text("class", |r: &Self| r.class.as_deref(), |r, v| r.class = Some(v))
                .text_required(
                    "method-name",
                    |r| r.method_name.as_deref(),
                    |r, v| r.method_name = Some(v),
                )
                .build()
        })
    }
}

/// A session bean declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionBean {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub display_names: Vec<Text>,
    pub icons: Vec<Icon>,
    pub ejb_name: Option<String>,
    pub mapped_name: Option<String>,
    pub home: Option<String>,
    pub remote: Option<String>,
    pub local_home: Option<String>,
    pub local: Option<String>,
    pub business_local: Vec<String>,
    pub business_remote: Vec<String>,
    pub local_bean: Option<Empty>,
    pub service_endpoint: Option<String>,
    pub ejb_class: Option<String>,
    pub session_type: Option<SessionType>,
    pub init_on_startup: Option<bool>,
    pub concurrency_management_type: Option<ConcurrencyManagementType>,
    pub transaction_type: Option<TransactionType>,
    pub around_invokes: Vec<AroundInvoke>,
    pub env_entries: KeyedCollection<EnvEntry>,
    pub ejb_refs: KeyedCollection<EjbRef>,
    pub ejb_local_refs: KeyedCollection<EjbLocalRef>,
    pub service_refs: KeyedCollection<ServiceRef>,
    pub resource_refs: KeyedCollection<ResourceRef>,
    pub resource_env_refs: KeyedCollection<ResourceEnvRef>,
    pub message_destination_refs: KeyedCollection<MessageDestinationRef>,
    pub post_constructs: Vec<LifecycleCallback>,
    pub pre_destroys: Vec<LifecycleCallback>,
    pub security_role_refs: Vec<SecurityRoleRef>,
    pub security_identity: Option<SecurityIdentity>,
}

impl Keyed for SessionBean {
    fn key(&self) -> Option<&str> {
        self.ejb_name.as_deref()
    }
}

impl Descriptor for SessionBean {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<SessionBean>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("SessionBean", JAVAEE, "session", "session-beanType")
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
                    "ejb-name",
                    |r| r.ejb_name.as_deref(),
                    |r, v| r.ejb_name = Some(v),
                )
                .text(
                    "mapped-name",
                    |r| r.mapped_name.as_deref(),
                    |r, v| r.mapped_name = Some(v),
                )
                .text("home", |r| r.home.as_deref(), |r, v| r.home = Some(v))
                .text("remote", |r| r.remote.as_deref(), |r, v| r.remote = Some(v))
                .text(
                    "local-home",
                    |r| r.local_home.as_deref(),
                    |r, v| r.local_home = Some(v),
                )
                .text("local", |r| r.local.as_deref(), |r, v| r.local = Some(v))
                .texts(
                    "business-local",
                    |r| &r.business_local,
                    |r, v| r.business_local.push(v),
                    |r| r.business_local.clear(),
                )
                .texts(
                    "business-remote",
                    |r| &r.business_remote,
                    |r, v| r.business_remote.push(v),
                    |r| r.business_remote.clear(),
                )
                .element(
                    "local-bean",
                    |r| r.local_bean.as_ref(),
                    |r, v| r.local_bean = v,
                )
                .text(
                    "service-endpoint",
                    |r| r.service_endpoint.as_deref(),
                    |r, v| r.service_endpoint = Some(v),
                )
                .text(
                    "ejb-class",
                    |r| r.ejb_class.as_deref(),
                    |r, v| r.ejb_class = Some(v),
                )
                .enumeration(
                    "session-type",
                    |r| r.session_type,
                    |r, v| r.session_type = Some(v),
                )
                .boolean(
                    "init-on-startup",
                    |r| r.init_on_startup,
                    |r, v| r.init_on_startup = Some(v),
                )
                .enumeration(
                    "concurrency-management-type",
                    |r| r.concurrency_management_type,
                    |r, v| r.concurrency_management_type = Some(v),
                )
                .enumeration(
                    "transaction-type",
                    |r| r.transaction_type,
                    |r, v| r.transaction_type = Some(v),
                )
                .sequence(
                    "around-invoke",
                    |r| &r.around_invokes,
                    |r, v| r.around_invokes.push(v),
                    |r| r.around_invokes.clear(),
                )
                .sequence(
                    "env-entry",
                    |r| r.env_entries.as_slice(),
                    |r, v| r.env_entries.push(v),
                    |r| r.env_entries.clear(),
                )
                .sequence(
                    "ejb-ref",
                    |r| r.ejb_refs.as_slice(),
                    |r, v| r.ejb_refs.push(v),
                    |r| r.ejb_refs.clear(),
                )
                .sequence(
                    "ejb-local-ref",
                    |r| r.ejb_local_refs.as_slice(),
                    |r, v| r.ejb_local_refs.push(v),
                    |r| r.ejb_local_refs.clear(),
                )
                .sequence(
                    "service-ref",
                    |r| r.service_refs.as_slice(),
                    |r, v| r.service_refs.push(v),
                    |r| r.service_refs.clear(),
                )
                .sequence(
                    "resource-ref",
                    |r| r.resource_refs.as_slice(),
                    |r, v| r.resource_refs.push(v),
                    |r| r.resource_refs.clear(),
                )
                .sequence(
                    "resource-env-ref",
                    |r| r.resource_env_refs.as_slice(),
                    |r, v| r.resource_env_refs.push(v),
                    |r| r.resource_env_refs.clear(),
                )
                .sequence(
                    "message-destination-ref",
                    |r| r.message_destination_refs.as_slice(),
                    |r, v| r.message_destination_refs.push(v),
                    |r| r.message_destination_refs.clear(),
                )
                .sequence(
                    "post-construct",
                    |r| &r.post_constructs,
                    |r, v| r.post_constructs.push(v),
                    |r| r.post_constructs.clear(),
                )
                .sequence(
                    "pre-destroy",
                    |r| &r.pre_destroys,
                    |r, v| r.pre_destroys.push(v),
                    |r| r.pre_destroys.clear(),
                )
                .sequence(
                    "security-role-ref",
                    |r| &r.security_role_refs,
                    |r, v| r.security_role_refs.push(v),
                    |r| r.security_role_refs.clear(),
                )
                .element(
                    "security-identity",
                    |r| r.security_identity.as_ref(),
                    |r, v| r.security_identity = v,
                )
                .build()
        })
    }
}

/// A message-driven bean declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageDrivenBean {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub display_names: Vec<Text>,
    pub icons: Vec<Icon>,
    pub ejb_name: Option<String>,
    pub mapped_name: Option<String>,
    pub ejb_class: Option<String>,
    pub messaging_type: Option<String>,
    pub transaction_type: Option<TransactionType>,
    pub message_destination_type: Option<String>,
    pub message_destination_link: Option<String>,
    pub activation_config: Option<ActivationConfig>,
    pub around_invokes: Vec<AroundInvoke>,
    pub env_entries: KeyedCollection<EnvEntry>,
    pub ejb_refs: KeyedCollection<EjbRef>,
    pub ejb_local_refs: KeyedCollection<EjbLocalRef>,
    pub service_refs: KeyedCollection<ServiceRef>,
    pub resource_refs: KeyedCollection<ResourceRef>,
    pub resource_env_refs: KeyedCollection<ResourceEnvRef>,
    pub message_destination_refs: KeyedCollection<MessageDestinationRef>,
    pub post_constructs: Vec<LifecycleCallback>,
    pub pre_destroys: Vec<LifecycleCallback>,
    pub security_identity: Option<SecurityIdentity>,
}

impl Keyed for MessageDrivenBean {
    fn key(&self) -> Option<&str> {
        self.ejb_name.as_deref()
    }
}

impl Descriptor for MessageDrivenBean {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<MessageDrivenBean>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "MessageDrivenBean",
                JAVAEE,
                "message-driven",
                "message-driven-beanType",
            )
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
                "ejb-name",
                |r| r.ejb_name.as_deref(),
                |r, v| r.ejb_name = Some(v),
            )
            .text(
                "mapped-name",
                |r| r.mapped_name.as_deref(),
                |r, v| r.mapped_name = Some(v),
            )
            .text(
                "ejb-class",
                |r| r.ejb_class.as_deref(),
                |r, v| r.ejb_class = Some(v),
            )
            .text(
                "messaging-type",
                |r| r.messaging_type.as_deref(),
                |r, v| r.messaging_type = Some(v),
            )
            .enumeration(
                "transaction-type",
                |r| r.transaction_type,
                |r, v| r.transaction_type = Some(v),
            )
            .text(
                "message-destination-type",
                |r| r.message_destination_type.as_deref(),
                |r, v| r.message_destination_type = Some(v),
            )
            .text(
                "message-destination-link",
                |r| r.message_destination_link.as_deref(),
                |r, v| r.message_destination_link = Some(v),
            )
            .element(
                "activation-config",
                |r| r.activation_config.as_ref(),
                |r, v| r.activation_config = v,
            )
            .sequence(
                "around-invoke",
                |r| &r.around_invokes,
                |r, v| r.around_invokes.push(v),
                |r| r.around_invokes.clear(),
            )
            .sequence(
                "env-entry",
                |r| r.env_entries.as_slice(),
                |r, v| r.env_entries.push(v),
                |r| r.env_entries.clear(),
            )
            .sequence(
                "ejb-ref",
                |r| r.ejb_refs.as_slice(),
                |r, v| r.ejb_refs.push(v),
                |r| r.ejb_refs.clear(),
            )
            .sequence(
                "ejb-local-ref",
                |r| r.ejb_local_refs.as_slice(),
                |r, v| r.ejb_local_refs.push(v),
                |r| r.ejb_local_refs.clear(),
            )
            .sequence(
                "service-ref",
                |r| r.service_refs.as_slice(),
                |r, v| r.service_refs.push(v),
                |r| r.service_refs.clear(),
            )
            .sequence(
                "resource-ref",
                |r| r.resource_refs.as_slice(),
                |r, v| r.resource_refs.push(v),
                |r| r.resource_refs.clear(),
            )
            .sequence(
                "resource-env-ref",
                |r| r.resource_env_refs.as_slice(),
                |r, v| r.resource_env_refs.push(v),
                |r| r.resource_env_refs.clear(),
            )
            .sequence(
                "message-destination-ref",
                |r| r.message_destination_refs.as_slice(),
                |r, v| r.message_destination_refs.push(v),
                |r| r.message_destination_refs.clear(),
            )
            .sequence(
                "post-construct",
                |r| &r.post_constructs,
                |r, v| r.post_constructs.push(v),
                |r| r.post_constructs.clear(),
            )
            .sequence(
                "pre-destroy",
                |r| &r.pre_destroys,
                |r, v| r.pre_destroys.push(v),
                |r| r.pre_destroys.clear(),
            )
            .element(
                "security-identity",
                |r| r.security_identity.as_ref(),
                |r, v| r.security_identity = v,
            )
            .build()
        })
    }
}

/// How a message-driven bean connects to its messaging provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivationConfig {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub properties: Vec<ActivationConfigProperty>,
}

impl Descriptor for ActivationConfig {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<ActivationConfig>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "ActivationConfig",
                JAVAEE,
                "activation-config",
                "activation-configType",
            )
            .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
            .sequence(
                "description",
                |r| &r.descriptions,
                |r, v| r.descriptions.push(v),
                |r| r.descriptions.clear(),
            )
            .sequence(
                "activation-config-property",
                |r| &r.properties,
                |r, v| r.properties.push(v),
                |r| r.properties.clear(),
            )
            .build()
        })
    }
}

/// One activation-config name/value pair. The value is verbatim text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivationConfigProperty {
    pub id: Option<String>,
    pub name: Option<String>,
    pub value: Option<String>,
}

impl Descriptor for ActivationConfigProperty {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<ActivationConfigProperty>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "ActivationConfigProperty",
                JAVAEE,
                "activation-config-property",
                "activation-config-propertyType",
            )
            .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
            .text_required(
                "activation-config-property-name",
                |r| r.name.as_deref(),
                |r, v| r.name = Some(v),
            )
            .raw_text_required(
                "activation-config-property-value",
                |r| r.value.as_deref(),
                |r, v| r.value = Some(v),
            )
            .build()
        })
    }
}
