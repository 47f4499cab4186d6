//! The `ejb-jar.xml` descriptor family.

mod assembly;
mod beans;
mod interceptor;

pub use assembly::{
    ApplicationException, AssemblyDescriptor, ContainerTransaction, ExcludeList, MethodPermission,
};
pub use beans::{
    ActivationConfig, ActivationConfigProperty, AroundInvoke, MessageDrivenBean, SessionBean,
};
pub use interceptor::{Interceptor, InterceptorBinding, InterceptorOrder, Interceptors};

use std::sync::OnceLock;

use descry_codec::{Descriptor, KeyedCollection, Schema, SchemaBuilder};

use crate::common::{Icon, Text};
use crate::JAVAEE;

/// The `ejb-jar.xml` root.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EjbJar {
    pub id: Option<String>,
    pub metadata_complete: Option<bool>,
    pub version: Option<String>,
    pub module_name: Option<String>,
    pub descriptions: Vec<Text>,
    pub display_names: Vec<Text>,
    pub icons: Vec<Icon>,
    pub enterprise_beans: Option<EnterpriseBeans>,
    pub interceptors: Option<Interceptors>,
    pub assembly_descriptor: Option<AssemblyDescriptor>,
    pub ejb_client_jar: Option<String>,
}

impl Descriptor for EjbJar {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<EjbJar>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("EjbJar", JAVAEE, "ejb-jar", "ejb-jarType")
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
                .text(
                    "module-name",
                    |r| r.module_name.as_deref(),
                    |r, v| r.module_name = Some(v),
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
                    "enterprise-beans",
                    |r| r.enterprise_beans.as_ref(),
                    |r, v| r.enterprise_beans = v,
                )
                .element(
                    "interceptors",
                    |r| r.interceptors.as_ref(),
                    |r, v| r.interceptors = v,
                )
                .element(
                    "assembly-descriptor",
                    |r| r.assembly_descriptor.as_ref(),
                    |r, v| r.assembly_descriptor = v,
                )
                .text(
                    "ejb-client-jar",
                    |r| r.ejb_client_jar.as_deref(),
                    |r, v| r.ejb_client_jar = Some(v),
                )
                .build()
        })
    }
}

/// The `enterprise-beans` wrapper. Beans are keyed by `ejb-name`, so a
/// redeclared bean replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnterpriseBeans {
    pub id: Option<String>,
    pub session: KeyedCollection<SessionBean>,
    pub message_driven: KeyedCollection<MessageDrivenBean>,
}

impl Descriptor for EnterpriseBeans {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<EnterpriseBeans>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "EnterpriseBeans",
                JAVAEE,
                "enterprise-beans",
                "enterprise-beansType",
            )
            .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
            .sequence(
                "session",
                |r| r.session.as_slice(),
                |r, v| r.session.push(v),
                |r| r.session.clear(),
            )
            .sequence(
                "message-driven",
                |r| r.message_driven.as_slice(),
                |r, v| r.message_driven.push(v),
                |r| r.message_driven.clear(),
            )
            .build()
        })
    }
}
