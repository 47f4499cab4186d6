//! Servlet and filter declarations.

use std::sync::OnceLock;

use descry_codec::{Descriptor, Keyed, Schema, SchemaBuilder};

use crate::common::{Icon, ParamValue, RunAs, SecurityRoleRef, Text};
use crate::enums::Dispatcher;
use crate::JAVAEE;

/// A servlet declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Servlet {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub display_names: Vec<Text>,
    pub icons: Vec<Icon>,
    pub servlet_name: Option<String>,
    pub servlet_class: Option<String>,
    pub jsp_file: Option<String>,
    pub init_params: Vec<ParamValue>,
    pub load_on_startup: Option<i32>,
    pub enabled: Option<bool>,
    pub async_supported: Option<bool>,
    pub run_as: Option<RunAs>,
    pub security_role_refs: Vec<SecurityRoleRef>,
    pub multipart_config: Option<MultipartConfig>,
}

impl Keyed for Servlet {
    fn key(&self) -> Option<&str> {
        self.servlet_name.as_deref()
    }
}

impl Descriptor for Servlet {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<Servlet>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("Servlet", JAVAEE, "servlet", "servletType")
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
                    "servlet-name",
                    |r| r.servlet_name.as_deref(),
                    |r, v| r.servlet_name = Some(v),
                )
                .text(
                    "servlet-class",
                    |r| r.servlet_class.as_deref(),
                    |r, v| r.servlet_class = Some(v),
                )
                .text(
                    "jsp-file",
                    |r| r.jsp_file.as_deref(),
                    |r, v| r.jsp_file = Some(v),
                )
                .sequence(
                    "init-param",
                    |r| &r.init_params,
                    |r, v| r.init_params.push(v),
                    |r| r.init_params.clear(),
                )
                .int(
                    "load-on-startup",
                    |r| r.load_on_startup,
                    |r, v| r.load_on_startup = Some(v),
                )
                .boolean("enabled", |r| r.enabled, |r, v| r.enabled = Some(v))
                .boolean(
                    "async-supported",
                    |r| r.async_supported,
                    |r, v| r.async_supported = Some(v),
                )
                .element("run-as", |r| r.run_as.as_ref(), |r, v| r.run_as = v)
                .sequence(
                    "security-role-ref",
                    |r| &r.security_role_refs,
                    |r, v| r.security_role_refs.push(v),
                    |r| r.security_role_refs.clear(),
                )
                .element(
                    "multipart-config",
                    |r| r.multipart_config.as_ref(),
                    |r, v| r.multipart_config = v,
                )
                .build()
        })
    }
}

/// Maps a servlet to URL patterns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServletMapping {
    pub id: Option<String>,
    pub servlet_name: Option<String>,
    pub url_patterns: Vec<String>,
}

impl Descriptor for ServletMapping {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<ServletMapping>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "ServletMapping",
                JAVAEE,
                "servlet-mapping",
                "servlet-mappingType",
            )
            .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
            .text_required(
                "servlet-name",
                |r| r.servlet_name.as_deref(),
                |r, v| r.servlet_name = Some(v),
            )
            .texts(
                "url-pattern",
                |r| &r.url_patterns,
                |r, v| r.url_patterns.push(v),
                |r| r.url_patterns.clear(),
            )
            .build()
        })
    }
}

/// A filter declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub display_names: Vec<Text>,
    pub icons: Vec<Icon>,
    pub filter_name: Option<String>,
    pub filter_class: Option<String>,
    pub async_supported: Option<bool>,
    pub init_params: Vec<ParamValue>,
}

impl Descriptor for Filter {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<Filter>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("Filter", JAVAEE, "filter", "filterType")
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
                    "filter-name",
                    |r| r.filter_name.as_deref(),
                    |r, v| r.filter_name = Some(v),
                )
                .text(
                    "filter-class",
                    |r| r.filter_class.as_deref(),
                    |r, v| r.filter_class = Some(v),
                )
                .boolean(
                    "async-supported",
                    |r| r.async_supported,
                    |r, v| r.async_supported = Some(v),
                )
                .sequence(
                    "init-param",
                    |r| &r.init_params,
                    |r, v| r.init_params.push(v),
                    |r| r.init_params.clear(),
                )
                .build()
        })
    }
}

/// Maps a filter to URL patterns, servlets and dispatcher kinds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterMapping {
    pub id: Option<String>,
    pub filter_name: Option<String>,
    pub url_patterns: Vec<String>,
    pub servlet_names: Vec<String>,
    pub dispatchers: Vec<Dispatcher>,
}

impl Descriptor for FilterMapping {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<FilterMapping>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "FilterMapping",
                JAVAEE,
                "filter-mapping",
                "filter-mappingType",
            )
            .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
            .text_required(
                "filter-name",
                |r| r.filter_name.as_deref(),
                |r, v| r.filter_name = Some(v),
            )
            .texts(
                "url-pattern",
                |r| &r.url_patterns,
                |r, v| r.url_patterns.push(v),
                |r| r.url_patterns.clear(),
            )
            .texts(
                "servlet-name",
                |r| &r.servlet_names,
                |r, v| r.servlet_names.push(v),
                |r| r.servlet_names.clear(),
            )
            .enumerations(
                "dispatcher",
                |r| &r.dispatchers,
                |r, v| r.dispatchers.push(v),
                |r| r.dispatchers.clear(),
            )
            .build()
        })
    }
}

/// Multipart request handling limits for a servlet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartConfig {
    pub location: Option<String>,
    pub max_file_size: Option<i64>,
    pub max_request_size: Option<i64>,
    pub file_size_threshold: Option<i32>,
}

impl Descriptor for MultipartConfig {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<MultipartConfig>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "MultipartConfig",
                JAVAEE,
                "multipart-config",
                "multipart-configType",
            )
            .text(
                "location",
                |r: &Self| r.location.as_deref(),
                |r, v| r.location = Some(v),
            )
            .long(
                "max-file-size",
                |r| r.max_file_size,
                |r, v| r.max_file_size = Some(v),
            )
            .long(
                "max-request-size",
                |r| r.max_request_size,
                |r, v| r.max_request_size = Some(v),
            )
            .int(
                "file-size-threshold",
                |r| r.file_size_threshold,
                |r, v| r.file_size_threshold = Some(v),
            )
            .build()
        })
    }
}
