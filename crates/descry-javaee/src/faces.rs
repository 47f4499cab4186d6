//! A `faces-config.xml` subset.
//!
//! JSF configs grow vendor extension elements freely, so the root type
//! declares an extension bucket: children the schema does not know are
//! captured verbatim and re-emitted on write.

use std::sync::OnceLock;

use descry_codec::{Descriptor, Schema, SchemaBuilder};
use descry_xml::Element;

use crate::common::{Empty, Icon, Text};
use crate::JAVAEE;

/// The `faces-config.xml` root.
#[derive(Debug, Clone, Default)]
pub struct FacesConfig {
    pub id: Option<String>,
    pub version: Option<String>,
    pub applications: Vec<FacesApplication>,
    pub managed_beans: Vec<FacesManagedBean>,
    pub navigation_rules: Vec<FacesNavigationRule>,
    /// Unrecognized children, kept for forward compatibility.
    pub others: Vec<Element>,
}

impl Descriptor for FacesConfig {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<FacesConfig>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("FacesConfig", JAVAEE, "faces-config", "faces-configType")
                .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
                .attr(
                    "version",
                    |r| r.version.as_deref(),
                    |r, v| r.version = Some(v),
                )
                .sequence(
                    "application",
                    |r| &r.applications,
                    |r, v| r.applications.push(v),
                    |r| r.applications.clear(),
                )
                .sequence(
                    "managed-bean",
                    |r| &r.managed_beans,
                    |r, v| r.managed_beans.push(v),
                    |r| r.managed_beans.clear(),
                )
                .sequence(
                    "navigation-rule",
                    |r| &r.navigation_rules,
                    |r, v| r.navigation_rules.push(v),
                    |r| r.navigation_rules.clear(),
                )
                .any(
                    |r| &r.others,
                    |r, v| r.others.push(v),
                    |r| r.others.clear(),
                )
                .build()
        })
    }
}

/// Application-level JSF settings (subset).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacesApplication {
    pub id: Option<String>,
    pub message_bundles: Vec<String>,
    pub locale_configs: Vec<FacesLocaleConfig>,
}

impl Descriptor for FacesApplication {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<FacesApplication>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "FacesApplication",
                JAVAEE,
                "application",
                "faces-config-applicationType",
            )
            .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
            .texts(
                "message-bundle",
                |r| &r.message_bundles,
                |r, v| r.message_bundles.push(v),
                |r| r.message_bundles.clear(),
            )
            .sequence(
                "locale-config",
                |r| &r.locale_configs,
                |r, v| r.locale_configs.push(v),
                |r| r.locale_configs.clear(),
            )
            .build()
        })
    }
}

/// Supported locales for an application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacesLocaleConfig {
    pub id: Option<String>,
    pub default_locale: Option<String>,
    pub supported_locales: Vec<String>,
}

impl Descriptor for FacesLocaleConfig {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<FacesLocaleConfig>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "FacesLocaleConfig",
                JAVAEE,
                "locale-config",
                "faces-config-locale-configType",
            )
            .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
            .text(
                "default-locale",
                |r| r.default_locale.as_deref(),
                |r, v| r.default_locale = Some(v),
            )
            .texts(
                "supported-locale",
                |r| &r.supported_locales,
                |r, v| r.supported_locales.push(v),
                |r| r.supported_locales.clear(),
            )
            .build()
        })
    }
}

/// A managed bean declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacesManagedBean {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub display_names: Vec<Text>,
    pub icons: Vec<Icon>,
    pub managed_bean_name: Option<String>,
    pub managed_bean_class: Option<String>,
    pub managed_bean_scope: Option<String>,
    pub managed_properties: Vec<FacesManagedProperty>,
}

impl Descriptor for FacesManagedBean {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<FacesManagedBean>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "FacesManagedBean",
                JAVAEE,
                "managed-bean",
                "faces-config-managed-beanType",
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
                "managed-bean-name",
                |r| r.managed_bean_name.as_deref(),
                |r, v| r.managed_bean_name = Some(v),
            )
            .text_required(
                "managed-bean-class",
                |r| r.managed_bean_class.as_deref(),
                |r, v| r.managed_bean_class = Some(v),
            )
            .text_required(
                "managed-bean-scope",
                |r| r.managed_bean_scope.as_deref(),
                |r, v| r.managed_bean_scope = Some(v),
            )
            .sequence(
                "managed-property",
                |r| &r.managed_properties,
                |r, v| r.managed_properties.push(v),
                |r| r.managed_properties.clear(),
            )
            .build()
        })
    }
}

/// A managed-property initializer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacesManagedProperty {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub property_name: Option<String>,
    pub property_class: Option<String>,
    pub value: Option<String>,
    pub null_value: Option<Empty>,
}

impl Descriptor for FacesManagedProperty {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<FacesManagedProperty>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "FacesManagedProperty",
                JAVAEE,
                "managed-property",
                "faces-config-managed-propertyType",
            )
            .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
            .sequence(
                "description",
                |r| &r.descriptions,
                |r, v| r.descriptions.push(v),
                |r| r.descriptions.clear(),
            )
            .text_required(
                "property-name",
                |r| r.property_name.as_deref(),
                |r, v| r.property_name = Some(v),
            )
            .text(
                "property-class",
                |r| r.property_class.as_deref(),
                |r, v| r.property_class = Some(v),
            )
            .raw_text("value", |r| r.value.as_deref(), |r, v| r.value = Some(v))
            .element(
                "null-value",
                |r| r.null_value.as_ref(),
                |r, v| r.null_value = v,
            )
            .build()
        })
    }
}

/// Navigation from one view to others.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacesNavigationRule {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub from_view_id: Option<String>,
    pub navigation_cases: Vec<FacesNavigationCase>,
}

impl Descriptor for FacesNavigationRule {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<FacesNavigationRule>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "FacesNavigationRule",
                JAVAEE,
                "navigation-rule",
                "faces-config-navigation-ruleType",
            )
            .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
            .sequence(
                "description",
                |r| &r.descriptions,
                |r, v| r.descriptions.push(v),
                |r| r.descriptions.clear(),
            )
            .text(
                "from-view-id",
                |r| r.from_view_id.as_deref(),
                |r, v| r.from_view_id = Some(v),
            )
            .sequence(
                "navigation-case",
                |r| &r.navigation_cases,
                |r, v| r.navigation_cases.push(v),
                |r| r.navigation_cases.clear(),
            )
            .build()
        })
    }
}

/// One navigation outcome.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacesNavigationCase {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub from_action: Option<String>,
    pub from_outcome: Option<String>,
    pub to_view_id: Option<String>,
    pub redirect: Option<FacesRedirect>,
}

impl Descriptor for FacesNavigationCase {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<FacesNavigationCase>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "FacesNavigationCase",
                JAVAEE,
                "navigation-case",
                "faces-config-navigation-caseType",
            )
            .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
            .sequence(
                "description",
                |r| &r.descriptions,
                |r, v| r.descriptions.push(v),
                |r| r.descriptions.clear(),
            )
            .text(
                "from-action",
                |r| r.from_action.as_deref(),
                |r, v| r.from_action = Some(v),
            )
            .text(
                "from-outcome",
                |r| r.from_outcome.as_deref(),
                |r, v| r.from_outcome = Some(v),
            )
            .text_required(
                "to-view-id",
                |r| r.to_view_id.as_deref(),
                |r, v| r.to_view_id = Some(v),
            )
            .element("redirect", |r| r.redirect.as_ref(), |r, v| r.redirect = v)
            .build()
        })
    }
}

/// Marks a navigation case as a redirect.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacesRedirect {
    pub id: Option<String>,
    pub include_view_params: Option<bool>,
}

impl Descriptor for FacesRedirect {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<FacesRedirect>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "FacesRedirect",
                JAVAEE,
                "redirect",
                "faces-config-redirectType",
            )
            .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
            .bool_attr(
                "include-view-params",
                |r| r.include_view_params,
                |r, v| r.include_view_params = Some(v),
            )
            .build()
        })
    }
}
