//! Interceptor declarations and bindings.

use std::sync::OnceLock;

use descry_codec::{Descriptor, KeyedCollection, Schema, SchemaBuilder};

use crate::common::{LifecycleCallback, Method, Text};
use crate::ejb::beans::AroundInvoke;
use crate::refs::{
    EjbLocalRef, EjbRef, EnvEntry, MessageDestinationRef, ResourceEnvRef, ResourceRef, ServiceRef,
};
use crate::JAVAEE;

/// The `interceptors` wrapper of an ejb-jar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Interceptors {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub interceptors: Vec<Interceptor>,
}

impl Descriptor for Interceptors {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<Interceptors>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("Interceptors", JAVAEE, "interceptors", "interceptorsType")
                .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
                .sequence(
                    "description",
                    |r| &r.descriptions,
                    |r, v| r.descriptions.push(v),
                    |r| r.descriptions.clear(),
                )
                .sequence(
                    "interceptor",
                    |r| &r.interceptors,
                    |r, v| r.interceptors.push(v),
                    |r| r.interceptors.clear(),
                )
                .build()
        })
    }
}

/// One interceptor class with its environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Interceptor {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub interceptor_class: Option<String>,
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
}

impl Descriptor for Interceptor {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<Interceptor>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("Interceptor", JAVAEE, "interceptor", "interceptorType")
                .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
                .sequence(
                    "description",
                    |r| &r.descriptions,
                    |r, v| r.descriptions.push(v),
                    |r| r.descriptions.clear(),
                )
                .text_required(
                    "interceptor-class",
                    |r| r.interceptor_class.as_deref(),
                    |r, v| r.interceptor_class = Some(v),
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
                .build()
        })
    }
}

/// Binds interceptor classes to a bean or business method.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterceptorBinding {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub ejb_name: Option<String>,
    pub interceptor_classes: Vec<String>,
    pub interceptor_order: Option<InterceptorOrder>,
    pub exclude_default_interceptors: Option<bool>,
    pub exclude_class_interceptors: Option<bool>,
    pub method: Option<Method>,
}

impl Descriptor for InterceptorBinding {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<InterceptorBinding>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "InterceptorBinding",
                JAVAEE,
                "interceptor-binding",
                "interceptor-bindingType",
            )
            .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
            .sequence(
                "description",
                |r| &r.descriptions,
                |r, v| r.descriptions.push(v),
                |r| r.descriptions.clear(),
            )
            .text_required(
                "ejb-name",
                |r| r.ejb_name.as_deref(),
                |r, v| r.ejb_name = Some(v),
            )
            .texts(
                "interceptor-class",
                |r| &r.interceptor_classes,
                |r, v| r.interceptor_classes.push(v),
                |r| r.interceptor_classes.clear(),
            )
            .element(
                "interceptor-order",
                |r| r.interceptor_order.as_ref(),
                |r, v| r.interceptor_order = v,
            )
            .boolean(
                "exclude-default-interceptors",
                |r| r.exclude_default_interceptors,
                |r, v| r.exclude_default_interceptors = Some(v),
            )
            .boolean(
                "exclude-class-interceptors",
                |r| r.exclude_class_interceptors,
                |r, v| r.exclude_class_interceptors = Some(v),
            )
            .element("method", |r| r.method.as_ref(), |r, v| r.method = v)
            .build()
        })
    }
}

/// A total ordering of interceptor classes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterceptorOrder {
    pub id: Option<String>,
    pub interceptor_classes: Vec<String>,
}

impl Descriptor for InterceptorOrder {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<InterceptorOrder>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "InterceptorOrder",
                JAVAEE,
                "interceptor-order",
                "interceptor-orderType",
            )
            .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
            .texts(
                "interceptor-class",
                |r| &r.interceptor_classes,
                |r, v| r.interceptor_classes.push(v),
                |r| r.interceptor_classes.clear(),
            )
            .build()
        })
    }
}
