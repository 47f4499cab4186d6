//! Tag library descriptors (`.tld`).

use std::sync::OnceLock;

use descry_codec::{Descriptor, Schema, SchemaBuilder};

use crate::common::{Icon, ParamValue, Text};
use crate::JAVAEE;

/// A tag library descriptor root.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TldTaglib {
    pub id: Option<String>,
    pub version: Option<String>,
    pub descriptions: Vec<Text>,
    pub display_names: Vec<Text>,
    pub icons: Vec<Icon>,
    pub tlib_version: Option<String>,
    pub short_name: Option<String>,
    pub uri: Option<String>,
    pub validator: Option<TldValidator>,
    pub listener_classes: Vec<String>,
    pub tags: Vec<TldTag>,
    pub functions: Vec<TldFunction>,
}

impl Descriptor for TldTaglib {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<TldTaglib>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("TldTaglib", JAVAEE, "taglib", "tldTaglibType")
                .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
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
                .text_required(
                    "tlib-version",
                    |r| r.tlib_version.as_deref(),
                    |r, v| r.tlib_version = Some(v),
                )
                .text_required(
                    "short-name",
                    |r| r.short_name.as_deref(),
                    |r, v| r.short_name = Some(v),
                )
                .text("uri", |r| r.uri.as_deref(), |r, v| r.uri = Some(v))
                .element(
                    "validator",
                    |r| r.validator.as_ref(),
                    |r, v| r.validator = v,
                )
                .texts(
                    "listener",
                    |r| &r.listener_classes,
                    |r, v| r.listener_classes.push(v),
                    |r| r.listener_classes.clear(),
                )
                .sequence("tag", |r| &r.tags, |r, v| r.tags.push(v), |r| {
                    r.tags.clear()
                })
                .sequence(
                    "function",
                    |r| &r.functions,
                    |r, v| r.functions.push(v),
                    |r| r.functions.clear(),
                )
                .build()
        })
    }
}

/// One custom tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TldTag {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub display_names: Vec<Text>,
    pub icons: Vec<Icon>,
    pub name: Option<String>,
    pub tag_class: Option<String>,
    pub tei_class: Option<String>,
    pub body_content: Option<String>,
    pub variables: Vec<TldVariable>,
    pub attributes: Vec<TldAttribute>,
    pub dynamic_attributes: Option<bool>,
    pub example: Option<String>,
}

impl Descriptor for TldTag {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<TldTag>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("TldTag", JAVAEE, "tag", "tagType")
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
                .text_required("name", |r| r.name.as_deref(), |r, v| r.name = Some(v))
                .text_required(
                    "tag-class",
                    |r| r.tag_class.as_deref(),
                    |r, v| r.tag_class = Some(v),
                )
                .text(
                    "tei-class",
                    |r| r.tei_class.as_deref(),
                    |r, v| r.tei_class = Some(v),
                )
                .text(
                    "body-content",
                    |r| r.body_content.as_deref(),
                    |r, v| r.body_content = Some(v),
                )
                .sequence(
                    "variable",
                    |r| &r.variables,
                    |r, v| r.variables.push(v),
                    |r| r.variables.clear(),
                )
                .sequence(
                    "attribute",
                    |r| &r.attributes,
                    |r, v| r.attributes.push(v),
                    |r| r.attributes.clear(),
                )
                .boolean(
                    "dynamic-attributes",
                    |r| r.dynamic_attributes,
                    |r, v| r.dynamic_attributes = Some(v),
                )
                .raw_text(
                    "example",
                    |r| r.example.as_deref(),
                    |r, v| r.example = Some(v),
                )
                .build()
        })
    }
}

/// One declared tag attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TldAttribute {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub name: Option<String>,
    pub required: Option<bool>,
    pub rtexprvalue: Option<bool>,
    pub attribute_type: Option<String>,
    pub fragment: Option<bool>,
}

impl Descriptor for TldAttribute {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<TldAttribute>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("TldAttribute", JAVAEE, "attribute", "tld-attributeType")
                .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
                .sequence(
                    "description",
                    |r| &r.descriptions,
                    |r, v| r.descriptions.push(v),
                    |r| r.descriptions.clear(),
                )
                .text_required("name", |r| r.name.as_deref(), |r, v| r.name = Some(v))
                .boolean("required", |r| r.required, |r, v| r.required = Some(v))
                .boolean(
                    "rtexprvalue",
                    |r| r.rtexprvalue,
                    |r, v| r.rtexprvalue = Some(v),
                )
                .text(
                    "type",
                    |r| r.attribute_type.as_deref(),
                    |r, v| r.attribute_type = Some(v),
                )
                .boolean("fragment", |r| r.fragment, |r, v| r.fragment = Some(v))
                .build()
        })
    }
}

/// A scripting variable exposed by a tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TldVariable {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub name_given: Option<String>,
    pub name_from_attribute: Option<String>,
    pub variable_class: Option<String>,
    pub declare: Option<bool>,
    pub scope: Option<String>,
}

impl Descriptor for TldVariable {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<TldVariable>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("TldVariable", JAVAEE, "variable", "variableType")
                .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
                .sequence(
                    "description",
                    |r| &r.descriptions,
                    |r, v| r.descriptions.push(v),
                    |r| r.descriptions.clear(),
                )
                .text(
                    "name-given",
                    |r| r.name_given.as_deref(),
                    |r, v| r.name_given = Some(v),
                )
                .text(
                    "name-from-attribute",
                    |r| r.name_from_attribute.as_deref(),
                    |r, v| r.name_from_attribute = Some(v),
                )
                .text(
                    "variable-class",
                    |r| r.variable_class.as_deref(),
                    |r, v| r.variable_class = Some(v),
                )
                .boolean("declare", |r| r.declare, |r, v| r.declare = Some(v))
                .text("scope", |r| r.scope.as_deref(), |r, v| r.scope = Some(v))
                .build()
        })
    }
}

/// An EL function exported by the library.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TldFunction {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub display_names: Vec<Text>,
    pub icons: Vec<Icon>,
    pub name: Option<String>,
    pub function_class: Option<String>,
    pub function_signature: Option<String>,
    pub example: Option<String>,
}

impl Descriptor for TldFunction {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<TldFunction>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("TldFunction", JAVAEE, "function", "functionType")
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
                .text_required("name", |r| r.name.as_deref(), |r, v| r.name = Some(v))
                .text_required(
                    "function-class",
                    |r| r.function_class.as_deref(),
                    |r, v| r.function_class = Some(v),
                )
                .text_required(
                    "function-signature",
                    |r| r.function_signature.as_deref(),
                    |r, v| r.function_signature = Some(v),
                )
                .raw_text(
                    "example",
                    |r| r.example.as_deref(),
                    |r, v| r.example = Some(v),
                )
                .build()
        })
    }
}

/// A validator for pages using the library.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TldValidator {
    pub id: Option<String>,
    pub descriptions: Vec<Text>,
    pub validator_class: Option<String>,
    pub init_params: Vec<ParamValue>,
}

impl Descriptor for TldValidator {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<TldValidator>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("TldValidator", JAVAEE, "validator", "validatorType")
                .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
                .sequence(
                    "description",
                    |r| &r.descriptions,
                    |r, v| r.descriptions.push(v),
                    |r| r.descriptions.clear(),
                )
                .text_required(
                    "validator-class",
                    |r| r.validator_class.as_deref(),
                    |r, v| r.validator_class = Some(v),
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
