//! Complex types shared by every descriptor family.

use std::sync::OnceLock;

use descry_codec::{Descriptor, Schema, SchemaBuilder};
use descry_xml::XML_NS;

use crate::enums::MethodIntf;
use crate::JAVAEE;

/// Language-tagged text with simple content: `description`,
/// `display-name` and friends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    pub lang: Option<String>,
    pub value: Option<String>,
}

impl Text {
    /// Untagged text.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            lang: None,
            value: Some(value.into()),
        }
    }
}

impl Descriptor for Text {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<Text>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("Text", JAVAEE, "description", "descriptionType")
                .qualified_attr(
                    XML_NS,
                    "lang",
                    |r: &Self| r.lang.as_deref(),
                    |r, v| r.lang = Some(v),
                )
                .raw_content(|r| r.value.as_deref(), |r, v| r.value = Some(v))
                .build()
        })
    }
}

/// An icon pair for tools.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Icon {
    pub id: Option<String>,
    pub lang: Option<String>,
    pub small_icon: Option<String>,
    pub large_icon: Option<String>,
}

impl Descriptor for Icon {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<Icon>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("Icon", JAVAEE, "icon", "iconType")
                .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
                .qualified_attr(
                    XML_NS,
                    "lang",
                    |r| r.lang.as_deref(),
                    |r, v| r.lang = Some(v),
                )
                .text(
                    "small-icon",
                    |r| r.small_icon.as_deref(),
                    |r, v| r.small_icon = Some(v),
                )
                .text(
                    "large-icon",
                    |r| r.large_icon.as_deref(),
                    |r, v| r.large_icon = Some(v),
                )
                .build()
        })
    }
}

/// A contentless marker element (`local-bean`, `distributable`,
/// `unchecked`, `use-caller-identity`). Presence is the information.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Empty {
    pub id: Option<String>,
}

impl Descriptor for Empty {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<Empty>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("Empty", JAVAEE, "empty", "emptyType")
                .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
                .build()
        })
    }
}

/// Where a resolved reference gets injected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InjectionTarget {
    pub injection_target_class: Option<String>,
    pub injection_target_name: Option<String>,
}

impl Descriptor for InjectionTarget {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<InjectionTarget>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "InjectionTarget",
                JAVAEE,
                "injection-target",
                "injection-targetType",
            )
            .text_required(
                "injection-target-class",
                |r: &Self| r.injection_target_class.as_deref(),
                |r, v| r.injection_target_class = Some(v),
            )
            .text_required(
                "injection-target-name",
                |r| r.injection_target_name.as_deref(),
                |r, v| r.injection_target_name = Some(v),
            )
            .build()
        })
    }
}

/// A named parameter (`context-param`, `init-param`). The value keeps
/// its whitespace; deployers put significant formatting in there.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamValue {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub param_name: Option<String>,
    pub param_value: Option<String>,
}

impl Descriptor for ParamValue {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<ParamValue>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("ParamValue", JAVAEE, "init-param", "param-valueType")
                .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
                .sequence(
                    "description",
                    |r| &r.descriptions,
                    |r, v| r.descriptions.push(v),
                    |r| r.descriptions.clear(),
                )
                .text_required(
                    "param-name",
                    |r| r.param_name.as_deref(),
                    |r, v| r.param_name = Some(v),
                )
                .raw_text_required(
                    "param-value",
                    |r| r.param_value.as_deref(),
                    |r, v| r.param_value = Some(v),
                )
                .build()
        })
    }
}

/// A web or JSF event listener declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listener {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub display_names: Vec<Text>,
    pub icons: Vec<Icon>,
    pub listener_class: Option<String>,
}

impl Descriptor for Listener {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<Listener>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("Listener", JAVAEE, "listener", "listenerType")
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
                    "listener-class",
                    |r| r.listener_class.as_deref(),
                    |r, v| r.listener_class = Some(v),
                )
                .build()
        })
    }
}

/// A `post-construct` / `pre-destroy` callback.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LifecycleCallback {
    pub lifecycle_callback_class: Option<String>,
    pub lifecycle_callback_method: Option<String>,
}

impl Descriptor for LifecycleCallback {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<LifecycleCallback>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "LifecycleCallback",
                JAVAEE,
                "lifecycle-callback",
                "lifecycle-callbackType",
            )
            .text(
                "lifecycle-callback-class",
                |r: &Self| r.lifecycle_callback_class.as_deref(),
                |r, v| r.lifecycle_callback_class = Some(v),
            )
            .text_required(
                "lifecycle-callback-method",
                |r| r.lifecycle_callback_method.as_deref(),
                |r, v| r.lifecycle_callback_method = Some(v),
            )
            .build()
        })
    }
}

/// A declared security role.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecurityRole {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub role_name: Option<String>,
}

impl Descriptor for SecurityRole {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<SecurityRole>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("SecurityRole", JAVAEE, "security-role", "security-roleType")
                .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
                .sequence(
                    "description",
                    |r| &r.descriptions,
                    |r, v| r.descriptions.push(v),
                    |r| r.descriptions.clear(),
                )
                .text_required(
                    "role-name",
                    |r| r.role_name.as_deref(),
                    |r, v| r.role_name = Some(v),
                )
                .build()
        })
    }
}

/// A component-local alias for a security role.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecurityRoleRef {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub role_name: Option<String>,
    pub role_link: Option<String>,
}

impl Descriptor for SecurityRoleRef {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<SecurityRoleRef>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "SecurityRoleRef",
                JAVAEE,
                "security-role-ref",
                "security-role-refType",
            )
            .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
            .sequence(
                "description",
                |r| &r.descriptions,
                |r, v| r.descriptions.push(v),
                |r| r.descriptions.clear(),
            )
            .text_required(
                "role-name",
                |r| r.role_name.as_deref(),
                |r, v| r.role_name = Some(v),
            )
            .text(
                "role-link",
                |r| r.role_link.as_deref(),
                |r, v| r.role_link = Some(v),
            )
            .build()
        })
    }
}

/// The role a component runs as.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunAs {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub role_name: Option<String>,
}

impl Descriptor for RunAs {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<RunAs>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("RunAs", JAVAEE, "run-as", "run-asType")
                .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
                .sequence(
                    "description",
                    |r| &r.descriptions,
                    |r, v| r.descriptions.push(v),
                    |r| r.descriptions.clear(),
                )
                .text_required(
                    "role-name",
                    |r| r.role_name.as_deref(),
                    |r, v| r.role_name = Some(v),
                )
                .build()
        })
    }
}

/// Whose identity an enterprise bean executes under.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecurityIdentity {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub use_caller_identity: Option<Empty>,
    pub run_as: Option<RunAs>,
}

impl Descriptor for SecurityIdentity {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<SecurityIdentity>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "SecurityIdentity",
                JAVAEE,
                "security-identity",
                "security-identityType",
            )
            .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
            .sequence(
                "description",
                |r| &r.descriptions,
                |r, v| r.descriptions.push(v),
                |r| r.descriptions.clear(),
            )
            .element(
                "use-caller-identity",
                |r| r.use_caller_identity.as_ref(),
                |r, v| r.use_caller_identity = v,
            )
            .element("run-as", |r| r.run_as.as_ref(), |r, v| r.run_as = v)
            .build()
        })
    }
}

/// A logical destination for messaging.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageDestination {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub display_names: Vec<Text>,
    pub icons: Vec<Icon>,
    pub message_destination_name: Option<String>,
    pub mapped_name: Option<String>,
    pub lookup_name: Option<String>,
}

impl Descriptor for MessageDestination {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<MessageDestination>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "MessageDestination",
                JAVAEE,
                "message-destination",
                "message-destinationType",
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
                "message-destination-name",
                |r| r.message_destination_name.as_deref(),
                |r, v| r.message_destination_name = Some(v),
            )
            .text(
                "mapped-name",
                |r| r.mapped_name.as_deref(),
                |r, v| r.mapped_name = Some(v),
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

/// A method designator inside method permissions, container
/// transactions and exclude lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Method {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub ejb_name: Option<String>,
    pub method_intf: Option<MethodIntf>,
    pub method_name: Option<String>,
    pub method_params: Option<MethodParams>,
}

impl Descriptor for Method {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<Method>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("Method", JAVAEE, "method", "methodType")
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
                .enumeration(
                    "method-intf",
                    |r| r.method_intf,
                    |r, v| r.method_intf = Some(v),
                )
                .text_required(
                    "method-name",
                    |r| r.method_name.as_deref(),
                    |r, v| r.method_name = Some(v),
                )
                .element(
                    "method-params",
                    |r| r.method_params.as_ref(),
                    |r, v| r.method_params = v,
                )
                .build()
        })
    }
}

/// An ordered list of fully-qualified parameter types.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MethodParams {
    pub id: Option<String>,
    pub method_params: Vec<String>,
}

impl Descriptor for MethodParams {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<MethodParams>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("MethodParams", JAVAEE, "method-params", "method-paramsType")
                .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
                .texts(
                    "method-param",
                    |r| &r.method_params,
                    |r, v| r.method_params.push(v),
                    |r| r.method_params.clear(),
                )
                .build()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use descry_codec::{decode, Session};
    use descry_xml::Element;

    #[test]
    fn test_text_simple_content_with_lang() {
        let el = Element::parse(
            r#"<description xmlns="http://java.sun.com/xml/ns/javaee" xml:lang="de">Ein  Konto</description>"#,
        )
        .unwrap();
        let mut session = Session::new();
        let text: Text = decode(&el, &mut session).unwrap();

        assert_eq!(text.lang.as_deref(), Some("de"));
        // Simple content is raw: internal spacing survives.
        assert_eq!(text.value.as_deref(), Some("Ein  Konto"));
        assert!(session.diagnostics().is_empty());
    }

    #[test]
    fn test_empty_marker_carries_only_id() {
        let el = Element::parse(
            r#"<use-caller-identity xmlns="http://java.sun.com/xml/ns/javaee" id="uci"/>"#,
        )
        .unwrap();
        let mut session = Session::new();
        let empty: Empty = decode(&el, &mut session).unwrap();

        assert_eq!(empty.id.as_deref(), Some("uci"));
        assert!(session.diagnostics().is_empty());
    }
}
