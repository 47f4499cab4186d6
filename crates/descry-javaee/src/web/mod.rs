//! The `web.xml` descriptor family.

mod config;
mod security;
mod servlet;

pub use config::{
    CookieConfig, ErrorPage, FormLoginConfig, LoginConfig, MimeMapping, SessionConfig,
    WelcomeFileList,
};
pub use security::{AuthConstraint, SecurityConstraint, UserDataConstraint, WebResourceCollection};
pub use servlet::{Filter, FilterMapping, MultipartConfig, Servlet, ServletMapping};

use std::sync::OnceLock;

use descry_codec::{Descriptor, KeyedCollection, Schema, SchemaBuilder};

use crate::common::{Empty, Icon, LifecycleCallback, Listener, MessageDestination, ParamValue, SecurityRole, Text};
use crate::refs::{
    EjbLocalRef, EjbRef, EnvEntry, MessageDestinationRef, ResourceEnvRef, ResourceRef, ServiceRef,
};
use crate::JAVAEE;

/// The `web.xml` root. Servlets are keyed by `servlet-name`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebApp {
    pub id: Option<String>,
    pub metadata_complete: Option<bool>,
    pub version: Option<String>,
    pub descriptions: Vec<Text>,
    pub display_names: Vec<Text>,
    pub icons: Vec<Icon>,
    pub distributable: Option<Empty>,
    pub context_params: Vec<ParamValue>,
    pub filters: Vec<Filter>,
    pub filter_mappings: Vec<FilterMapping>,
    pub listeners: Vec<Listener>,
    pub servlets: KeyedCollection<Servlet>,
    pub servlet_mappings: Vec<ServletMapping>,
    pub session_config: Option<SessionConfig>,
    pub mime_mappings: Vec<MimeMapping>,
    pub welcome_file_list: Option<WelcomeFileList>,
    pub error_pages: Vec<ErrorPage>,
    pub security_constraints: Vec<SecurityConstraint>,
    pub login_config: Option<LoginConfig>,
    pub security_roles: Vec<SecurityRole>,
    pub env_entries: KeyedCollection<EnvEntry>,
    pub ejb_refs: KeyedCollection<EjbRef>,
    pub ejb_local_refs: KeyedCollection<EjbLocalRef>,
    pub service_refs: KeyedCollection<ServiceRef>,
    pub resource_refs: KeyedCollection<ResourceRef>,
    pub resource_env_refs: KeyedCollection<ResourceEnvRef>,
    pub message_destination_refs: KeyedCollection<MessageDestinationRef>,
    pub post_constructs: Vec<LifecycleCallback>,
    pub pre_destroys: Vec<LifecycleCallback>,
    pub message_destinations: Vec<MessageDestination>,
    pub module_name: Option<String>,
}

impl Descriptor for WebApp {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<WebApp>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("WebApp", JAVAEE, "web-app", "web-appType")
                .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
                .bool_attr(
                    "metadata-complete",
                    |r| r.metadata_complete,
                    |r, v| r.metadata_complete = Some(v),
                )
                .attr(
                    "version",
                    |r| r.version.as_deref(),
                    |r, v| r.version = Some(v),
                )
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
                .element(
                    "distributable",
                    |r| r.distributable.as_ref(),
                    |r, v| r.distributable = v,
                )
                .sequence(
                    "context-param",
                    |r| &r.context_params,
                    |r, v| r.context_params.push(v),
                    |r| r.context_params.clear(),
                )
                .sequence(
                    "filter",
                    |r| &r.filters,
                    |r, v| r.filters.push(v),
                    |r| r.filters.clear(),
                )
                .sequence(
                    "filter-mapping",
                    |r| &r.filter_mappings,
                    |r, v| r.filter_mappings.push(v),
                    |r| r.filter_mappings.clear(),
                )
                .sequence(
                    "listener",
                    |r| &r.listeners,
                    |r, v| r.listeners.push(v),
                    |r| r.listeners.clear(),
                )
                .sequence(
                    "servlet",
                    |r| r.servlets.as_slice(),
                    |r, v| r.servlets.push(v),
                    |r| r.servlets.clear(),
                )
                .sequence(
                    "servlet-mapping",
                    |r| &r.servlet_mappings,
                    |r, v| r.servlet_mappings.push(v),
                    |r| r.servlet_mappings.clear(),
                )
                .element(
                    "session-config",
                    |r| r.session_config.as_ref(),
                    |r, v| r.session_config = v,
                )
                .sequence(
                    "mime-mapping",
                    |r| &r.mime_mappings,
                    |r, v| r.mime_mappings.push(v),
                    |r| r.mime_mappings.clear(),
                )
                .element(
                    "welcome-file-list",
                    |r| r.welcome_file_list.as_ref(),
                    |r, v| r.welcome_file_list = v,
                )
                .sequence(
                    "error-page",
                    |r| &r.error_pages,
                    |r, v| r.error_pages.push(v),
                    |r| r.error_pages.clear(),
                )
                .sequence(
                    "security-constraint",
                    |r| &r.security_constraints,
                    |r, v| r.security_constraints.push(v),
                    |r| r.security_constraints.clear(),
                )
                .element(
                    "login-config",
                    |r| r.login_config.as_ref(),
                    |r, v| r.login_config = v,
                )
                .sequence(
                    "security-role",
                    |r| &r.security_roles,
                    |r, v| r.security_roles.push(v),
                    |r| r.security_roles.clear(),
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
                    "message-destination",
                    |r| &r.message_destinations,
                    |r, v| r.message_destinations.push(v),
                    |r| r.message_destinations.clear(),
                )
                .text(
                    "module-name",
                    |r| r.module_name.as_deref(),
                    |r, v| r.module_name = Some(v),
                )
                .build()
        })
    }
}
