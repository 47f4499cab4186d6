//! Assembly descriptor: roles, permissions, transactions, exceptions.

use std::sync::OnceLock;

use descry_codec::{Descriptor, Keyed, KeyedCollection, Schema, SchemaBuilder};

use crate::common::{Empty, MessageDestination, Method, SecurityRole, Text};
use crate::ejb::interceptor::InterceptorBinding;
use crate::enums::TransAttribute;
use crate::JAVAEE;

/// The `assembly-descriptor` of an ejb-jar. Application exceptions are
/// keyed by exception class, so redeclaring one replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssemblyDescriptor {
    pub id: Option<String>,
    pub security_roles: Vec<SecurityRole>,
    pub method_permissions: Vec<MethodPermission>,
    pub container_transactions: Vec<ContainerTransaction>,
    pub interceptor_bindings: Vec<InterceptorBinding>,
    pub message_destinations: Vec<MessageDestination>,
    pub exclude_list: Option<ExcludeList>,
    pub application_exceptions: KeyedCollection<ApplicationException>,
}

impl Descriptor for AssemblyDescriptor {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<AssemblyDescriptor>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "AssemblyDescriptor",
                JAVAEE,
                "assembly-descriptor",
                "assembly-descriptorType",
            )
            .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
            .sequence(
                "security-role",
                |r| &r.security_roles,
                |r, v| r.security_roles.push(v),
                |r| r.security_roles.clear(),
            )
            .sequence(
                "method-permission",
                |r| &r.method_permissions,
                |r, v| r.method_permissions.push(v),
                |r| r.method_permissions.clear(),
            )
            .sequence(
                "container-transaction",
                |r| &r.container_transactions,
                |r, v| r.container_transactions.push(v),
                |r| r.container_transactions.clear(),
            )
            .sequence(
                "interceptor-binding",
                |r| &r.interceptor_bindings,
                |r, v| r.interceptor_bindings.push(v),
                |r| r.interceptor_bindings.clear(),
            )
            .sequence(
                "message-destination",
                |r| &r.message_destinations,
                |r, v| r.message_destinations.push(v),
                |r| r.message_destinations.clear(),
            )
            .element(
                "exclude-list",
                |r| r.exclude_list.as_ref(),
                |r, v| r.exclude_list = v,
            )
            .sequence(
                "application-exception",
                |r| r.application_exceptions.as_slice(),
                |r, v| r.application_exceptions.push(v),
                |r| r.application_exceptions.clear(),
            )
            .build()
        })
    }
}

/// Grants roles (or everyone, via `unchecked`) access to methods.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MethodPermission {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub role_names: Vec<String>,
    pub unchecked: Option<Empty>,
    pub methods: Vec<Method>,
}

impl Descriptor for MethodPermission {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<MethodPermission>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "MethodPermission",
                JAVAEE,
                "method-permission",
                "method-permissionType",
            )
            .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
            .sequence(
                "description",
                |r| &r.descriptions,
                |r, v| r.descriptions.push(v),
                |r| r.descriptions.clear(),
            )
            .texts(
                "role-name",
                |r| &r.role_names,
                |r, v| r.role_names.push(v),
                |r| r.role_names.clear(),
            )
            .element(
                "unchecked",
                |r| r.unchecked.as_ref(),
                |r, v| r.unchecked = v,
            )
            .sequence(
                "method",
                |r| &r.methods,
                |r, v| r.methods.push(v),
                |r| r.methods.clear(),
            )
            .build()
        })
    }
}

/// Assigns a transaction attribute to methods.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContainerTransaction {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub methods: Vec<Method>,
    pub trans_attribute: Option<TransAttribute>,
}

impl Descriptor for ContainerTransaction {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<ContainerTransaction>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "ContainerTransaction",
                JAVAEE,
                "container-transaction",
                "container-transactionType",
            )
            .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
            .sequence(
                "description",
                |r| &r.descriptions,
                |r, v| r.descriptions.push(v),
                |r| r.descriptions.clear(),
            )
            .sequence(
                "method",
                |r| &r.methods,
                |r, v| r.methods.push(v),
                |r| r.methods.clear(),
            )
            .enumeration(
                "trans-attribute",
                |r| r.trans_attribute,
                |r, v| r.trans_attribute = Some(v),
            )
            .build()
        })
    }
}

/// Methods that must not be called.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExcludeList {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub methods: Vec<Method>,
}

impl Descriptor for ExcludeList {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<ExcludeList>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("ExcludeList", JAVAEE, "exclude-list", "exclude-listType")
                .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
                .sequence(
                    "description",
                    |r| &r.descriptions,
                    |r, v| r.descriptions.push(v),
                    |r| r.descriptions.clear(),
                )
                .sequence(
                    "method",
                    |r| &r.methods,
                    |r, v| r.methods.push(v),
                    |r| r.methods.clear(),
                )
                .build()
        })
    }
}

/// Marks a checked exception as an application exception.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationException {
    pub id: Option<String>,
    pub exception_class: Option<String>,
    pub rollback: Option<bool>,
    pub inherited: Option<bool>,
}

impl Keyed for ApplicationException {
    fn key(&self) -> Option<&str> {
        self.exception_class.as_deref()
    }
}

impl Descriptor for ApplicationException {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<ApplicationException>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "ApplicationException",
                JAVAEE,
                "application-exception",
                "application-exceptionType",
            )
            .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
            .text_required(
                "exception-class",
                |r| r.exception_class.as_deref(),
                |r, v| r.exception_class = Some(v),
            )
            .boolean("rollback", |r| r.rollback, |r, v| r.rollback = Some(v))
            .boolean("inherited", |r| r.inherited, |r, v| r.inherited = Some(v))
            .build()
        })
    }
}
