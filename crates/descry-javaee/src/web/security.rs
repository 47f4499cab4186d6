//! Web security constraints.

use std::sync::OnceLock;

use descry_codec::{Descriptor, Schema, SchemaBuilder};

use crate::common::Text;
use crate::enums::TransportGuarantee;
use crate::JAVAEE;

/// Protects a set of web resources.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecurityConstraint {
    pub id: Option<String>,
    pub display_names: Vec<Text>,
    pub web_resource_collections: Vec<WebResourceCollection>,
    pub auth_constraint: Option<AuthConstraint>,
    pub user_data_constraint: Option<UserDataConstraint>,
}

impl Descriptor for SecurityConstraint {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<SecurityConstraint>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "SecurityConstraint",
                JAVAEE,
                "security-constraint",
                "security-constraintType",
            )
            .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
            .sequence(
                "display-name",
                |r| &r.display_names,
                |r, v| r.display_names.push(v),
                |r| r.display_names.clear(),
            )
            .sequence(
                "web-resource-collection",
                |r| &r.web_resource_collections,
                |r, v| r.web_resource_collections.push(v),
                |r| r.web_resource_collections.clear(),
            )
            .element(
                "auth-constraint",
                |r| r.auth_constraint.as_ref(),
                |r, v| r.auth_constraint = v,
            )
            .element(
                "user-data-constraint",
                |r| r.user_data_constraint.as_ref(),
                |r, v| r.user_data_constraint = v,
            )
            .build()
        })
    }
}

/// URL patterns and methods a constraint covers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebResourceCollection {
    pub id: Option<String>,
    pub web_resource_name: Option<String>,
    pub descriptions: Vec<Text>,
    pub url_patterns: Vec<String>,
    pub http_methods: Vec<String>,
}

impl Descriptor for WebResourceCollection {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<WebResourceCollection>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "WebResourceCollection",
                JAVAEE,
                "web-resource-collection",
                "web-resource-collectionType",
            )
            .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
            .text_required(
                "web-resource-name",
                |r| r.web_resource_name.as_deref(),
                |r, v| r.web_resource_name = Some(v),
            )
            .sequence(
                "description",
                |r| &r.descriptions,
                |r, v| r.descriptions.push(v),
                |r| r.descriptions.clear(),
            )
            .texts(
                "url-pattern",
                |r| &r.url_patterns,
                |r, v| r.url_patterns.push(v),
                |r| r.url_patterns.clear(),
            )
            .texts(
                "http-method",
                |r| &r.http_methods,
                |r, v| r.http_methods.push(v),
                |r| r.http_methods.clear(),
            )
            .build()
        })
    }
}

/// Roles allowed through a constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthConstraint {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub role_names: Vec<String>,
}

impl Descriptor for AuthConstraint {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<AuthConstraint>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "AuthConstraint",
                JAVAEE,
                "auth-constraint",
                "auth-constraintType",
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
            .build()
        })
    }
}

/// Transport-level protection for a constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDataConstraint {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub transport_guarantee: Option<TransportGuarantee>,
}

impl Descriptor for UserDataConstraint {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<UserDataConstraint>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "UserDataConstraint",
                JAVAEE,
                "user-data-constraint",
                "user-data-constraintType",
            )
            .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
            .sequence(
                "description",
                |r| &r.descriptions,
                |r, v| r.descriptions.push(v),
                |r| r.descriptions.clear(),
            )
            .enumeration(
                "transport-guarantee",
                |r| r.transport_guarantee,
                |r, v| r.transport_guarantee = Some(v),
            )
            .build()
        })
    }
}
