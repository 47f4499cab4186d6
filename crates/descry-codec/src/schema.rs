//! Per-type schema tables: the declarative side of the codec.
//!
//! A [`Schema`] describes one descriptor complex type: its element and
//! `xsi:type` names, attribute bindings, child-element bindings in
//! declaration order, an optional extension bucket, and optional
//! lifecycle hooks. Bindings pair a decode closure with an encode
//! closure; [`SchemaBuilder`] manufactures them from plain field
//! accessors so the per-type tables stay data-shaped.
//!
//! Dispatch is a local-name map built once at schema construction, with
//! the namespace verified against the matched binding — never a
//! sequential branch chain.

use descry_xml::{Element, OwnedName, XmlWriter};
use rustc_hash::FxHashMap;

use crate::adapter::{
    collapse_whitespace, CollapsedString, Qname, QnameValue, RawString, ValueAdapter, XmlBool,
    XmlInt, XmlLong,
};
use crate::session::{Diagnostic, Session};

/// A record type decodable and encodable through a schema table.
pub trait Descriptor: Default + Sized + 'static {
    /// The type's schema, built once and cached.
    fn schema() -> &'static Schema<Self>;
}

/// An XSD enumeration with a fixed lexical space.
pub trait DescriptorEnum: Copy + 'static {
    /// Enumeration name used in diagnostics.
    const NAME: &'static str;
    /// The lexical alternatives, for diagnostics.
    const VALUES: &'static [&'static str];

    /// Parse a collapsed token; `None` when out of vocabulary.
    fn parse(text: &str) -> Option<Self>;

    /// The token this variant serializes as.
    fn as_str(&self) -> &'static str;
}

/// A qualified name with static storage, as held by schema tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Name {
    /// Namespace URI; empty for unqualified names.
    pub ns: &'static str,
    /// Local name.
    pub local: &'static str,
}

impl Name {
    /// Create a name.
    pub const fn new(ns: &'static str, local: &'static str) -> Self {
        Self { ns, local }
    }

    /// The owned form, for diagnostics.
    pub fn to_owned_name(self) -> OwnedName {
        OwnedName::new(self.ns, self.local)
    }
}

type ReadFn<T> = Box<dyn Fn(&mut T, &Element, bool, &mut Session) + Send + Sync>;
type WriteFn<T> = Box<dyn Fn(&T, &mut XmlWriter, &mut Session) -> descry_xml::Result<()> + Send + Sync>;
type AttrReadFn<T> = Box<dyn Fn(&mut T, &str, &Element, &mut Session) + Send + Sync>;

/// Binding of one attribute to a record field.
pub struct AttrBinding<T> {
    pub(crate) ns: &'static str,
    pub(crate) local: &'static str,
    pub(crate) read: AttrReadFn<T>,
    pub(crate) write: WriteFn<T>,
}

/// Binding of the element's own text content, for complex types with
/// simple content (description, display-name).
pub struct ContentBinding<T> {
    pub(crate) read: ReadFn<T>,
    pub(crate) write: WriteFn<T>,
}

/// Binding of one child element to a record field.
pub struct ElementBinding<T> {
    pub(crate) name: Name,
    pub(crate) read: ReadFn<T>,
    pub(crate) write: WriteFn<T>,
}

/// The extension bucket: unrecognized child elements captured verbatim.
pub struct AnyBinding<T> {
    pub(crate) push: fn(&mut T, Element),
    pub(crate) entries: fn(&T) -> &[Element],
    pub(crate) clear: fn(&mut T),
}

/// The complete schema for one descriptor type.
pub struct Schema<T> {
    pub(crate) type_name: &'static str,
    pub(crate) element: Name,
    pub(crate) xsi_type: Name,
    pub(crate) attributes: Vec<AttrBinding<T>>,
    pub(crate) elements: Vec<ElementBinding<T>>,
    pub(crate) element_index: FxHashMap<&'static str, usize>,
    pub(crate) attribute_index: FxHashMap<&'static str, usize>,
    pub(crate) content: Option<ContentBinding<T>>,
    pub(crate) any: Option<AnyBinding<T>>,
    pub(crate) after_decode: Option<fn(&mut T, &mut Session)>,
    pub(crate) before_encode: Option<fn(&T, &mut Session)>,
}

impl<T> Schema<T> {
    /// The descriptor type name used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The element name instances of this type bind to.
    pub fn element(&self) -> Name {
        self.element
    }

    /// The complex-type name checked against `xsi:type` assertions.
    pub fn xsi_type(&self) -> Name {
        self.xsi_type
    }

    pub(crate) fn find_element(&self, ns: &str, local: &str) -> Option<(usize, &ElementBinding<T>)> {
        let index = *self.element_index.get(local)?;
        let binding = &self.elements[index];
        (binding.name.ns == ns).then_some((index, binding))
    }

    pub(crate) fn find_attribute(&self, ns: &str, local: &str) -> Option<&AttrBinding<T>> {
        let index = *self.attribute_index.get(local)?;
        let binding = &self.attributes[index];
        (binding.ns == ns).then_some(binding)
    }

    pub(crate) fn element_names(&self) -> Vec<OwnedName> {
        self.elements
            .iter()
            .map(|b| b.name.to_owned_name())
            .collect()
    }

    pub(crate) fn attribute_names(&self) -> Vec<OwnedName> {
        self.attributes
            .iter()
            .map(|b| OwnedName::new(b.ns, b.local))
            .collect()
    }
}

/// Builder assembling a [`Schema`] from field accessors.
///
/// All accessor parameters are plain `fn` pointers, so per-type tables
/// read as declarations. Elements are dispatched in the namespace given
/// to [`SchemaBuilder::new`] and emitted in the order they are declared
/// here, which must follow the complex type's sequence order.
pub struct SchemaBuilder<T> {
    type_name: &'static str,
    ns: &'static str,
    element: &'static str,
    xsi_type: &'static str,
    attributes: Vec<AttrBinding<T>>,
    elements: Vec<ElementBinding<T>>,
    content: Option<ContentBinding<T>>,
    any: Option<AnyBinding<T>>,
    after_decode: Option<fn(&mut T, &mut Session)>,
    before_encode: Option<fn(&T, &mut Session)>,
}

impl<T: 'static> SchemaBuilder<T> {
    /// Start a schema for `type_name`, bound to `element` in `ns` with
    /// the given `xsi:type` local name.
    pub fn new(
        type_name: &'static str,
        ns: &'static str,
        element: &'static str,
        xsi_type: &'static str,
    ) -> Self {
        Self {
            type_name,
            ns,
            element,
            xsi_type,
            attributes: Vec::new(),
            elements: Vec::new(),
            content: None,
            any: None,
            after_decode: None,
            before_encode: None,
        }
    }

    /// The `id` attribute: collapsed string, registered in the session's
    /// id registry on decode.
    pub fn id(
        mut self,
        get: fn(&T) -> Option<&str>,
        set: fn(&mut T, String),
    ) -> Self {
        let type_name = self.type_name;
        self.attributes.push(AttrBinding {
            ns: "",
            local: "id",
            read: Box::new(move |record, value, _el, session| {
                let id = collapse_whitespace(value);
                session.register_id(&id, type_name);
                set(record, id);
            }),
            write: Box::new(move |record, writer, _session| {
                if let Some(value) = get(record) {
                    writer.attr("id", value)?;
                }
                Ok(())
            }),
        });
        self
    }

    /// A collapsed-string attribute.
    pub fn attr(
        mut self,
        local: &'static str,
        get: fn(&T) -> Option<&str>,
        set: fn(&mut T, String),
    ) -> Self {
        self.attributes.push(AttrBinding {
            ns: "",
            local,
            read: Box::new(move |record, value, _el, _session| {
                set(record, collapse_whitespace(value));
            }),
            write: Box::new(move |record, writer, _session| {
                if let Some(value) = get(record) {
                    writer.attr(local, value)?;
                }
                Ok(())
            }),
        });
        self
    }

    /// A boolean attribute (lenient lexical space).
    pub fn bool_attr(
        mut self,
        local: &'static str,
        get: fn(&T) -> Option<bool>,
        set: fn(&mut T, bool),
    ) -> Self {
        self.attributes.push(AttrBinding {
            ns: "",
            local,
            read: Box::new(move |record, value, _el, _session| {
                set(record, value == "1" || value == "true");
            }),
            write: Box::new(move |record, writer, _session| {
                if let Some(value) = get(record) {
                    writer.attr(local, if value { "true" } else { "false" })?;
                }
                Ok(())
            }),
        });
        self
    }

    /// A namespace-qualified collapsed-string attribute (`xml:lang`).
    pub fn qualified_attr(
        mut self,
        ns: &'static str,
        local: &'static str,
        get: fn(&T) -> Option<&str>,
        set: fn(&mut T, String),
    ) -> Self {
        self.attributes.push(AttrBinding {
            ns,
            local,
            read: Box::new(move |record, value, _el, _session| {
                set(record, collapse_whitespace(value));
            }),
            write: Box::new(move |record, writer, _session| {
                if let Some(value) = get(record) {
                    writer.attr_ns(ns, local, value)?;
                }
                Ok(())
            }),
        });
        self
    }

    /// The element's own text content, collapsed. For complex types with
    /// simple content; mutually exclusive with child-element bindings.
    pub fn content(
        self,
        get: fn(&T) -> Option<&str>,
        set: fn(&mut T, String),
    ) -> Self {
        self.content_binding::<CollapsedString>(get, set)
    }

    /// The element's own text content, whitespace preserved.
    pub fn raw_content(
        self,
        get: fn(&T) -> Option<&str>,
        set: fn(&mut T, String),
    ) -> Self {
        self.content_binding::<RawString>(get, set)
    }

    /// A repeated enumeration element.
    pub fn enumerations<E: DescriptorEnum>(
        mut self,
        local: &'static str,
        get: fn(&T) -> &[E],
        push: fn(&mut T, E),
        clear: fn(&mut T),
    ) -> Self {
        let (ns, type_name) = (self.ns, self.type_name);
        self.elements.push(ElementBinding {
            name: Name::new(ns, local),
            read: Box::new(move |record, el, first, session| {
                if first {
                    clear(record);
                }
                let token = collapse_whitespace(&el.text);
                match E::parse(&token) {
                    Some(value) => push(record, value),
                    None => session.report(Diagnostic::UnexpectedEnumValue {
                        type_name,
                        field: local,
                        found: token,
                        expected: E::VALUES,
                    }),
                }
            }),
            write: Box::new(move |record, writer, _session| {
                for value in get(record) {
                    writer.begin(ns, local)?;
                    writer.text(value.as_str())?;
                    writer.end()?;
                }
                Ok(())
            }),
        });
        self
    }

    /// An optional collapsed-string element.
    pub fn text(
        self,
        local: &'static str,
        get: fn(&T) -> Option<&str>,
        set: fn(&mut T, String),
    ) -> Self {
        self.string_element::<CollapsedString>(local, false, get, set)
    }

    /// A required collapsed-string element: unset at encode time reports
    /// an unexpected-null-value diagnostic (the element is omitted).
    pub fn text_required(
        self,
        local: &'static str,
        get: fn(&T) -> Option<&str>,
        set: fn(&mut T, String),
    ) -> Self {
        self.string_element::<CollapsedString>(local, true, get, set)
    }

    /// An optional raw-string element (whitespace preserved).
    pub fn raw_text(
        self,
        local: &'static str,
        get: fn(&T) -> Option<&str>,
        set: fn(&mut T, String),
    ) -> Self {
        self.string_element::<RawString>(local, false, get, set)
    }

    /// A required raw-string element.
    pub fn raw_text_required(
        self,
        local: &'static str,
        get: fn(&T) -> Option<&str>,
        set: fn(&mut T, String),
    ) -> Self {
        self.string_element::<RawString>(local, true, get, set)
    }

    /// An optional boolean element (lenient lexical space).
    pub fn boolean(
        self,
        local: &'static str,
        get: fn(&T) -> Option<bool>,
        set: fn(&mut T, bool),
    ) -> Self {
        self.value_element::<XmlBool>(local, false, get, set)
    }

    /// An optional 32-bit integer element.
    pub fn int(
        self,
        local: &'static str,
        get: fn(&T) -> Option<i32>,
        set: fn(&mut T, i32),
    ) -> Self {
        self.value_element::<XmlInt>(local, false, get, set)
    }

    /// An optional 64-bit integer element.
    pub fn long(
        self,
        local: &'static str,
        get: fn(&T) -> Option<i64>,
        set: fn(&mut T, i64),
    ) -> Self {
        self.value_element::<XmlLong>(local, false, get, set)
    }

    /// An optional qualified-name element.
    pub fn qname(
        mut self,
        local: &'static str,
        get: fn(&T) -> Option<&QnameValue>,
        set: fn(&mut T, QnameValue),
    ) -> Self {
        let (ns, type_name) = (self.ns, self.type_name);
        self.elements.push(ElementBinding {
            name: Name::new(ns, local),
            read: Box::new(move |record, el, _first, session| {
                match Qname::parse(&el.text, el) {
                    Ok(value) => set(record, value),
                    Err(e) => session.report(Diagnostic::AdapterError {
                        type_name,
                        field: local,
                        adapter: Qname::NAME,
                        message: e.0,
                    }),
                }
            }),
            write: Box::new(move |record, writer, _session| {
                if let Some(value) = get(record) {
                    writer.begin(ns, local)?;
                    let text = Qname::print(value, writer);
                    writer.text(&text)?;
                    writer.end()?;
                }
                Ok(())
            }),
        });
        self
    }

    /// An optional enumeration element. Out-of-vocabulary tokens report
    /// an unexpected-enum-value diagnostic and leave the field unset.
    pub fn enumeration<E: DescriptorEnum>(
        mut self,
        local: &'static str,
        get: fn(&T) -> Option<E>,
        set: fn(&mut T, E),
    ) -> Self {
        let (ns, type_name) = (self.ns, self.type_name);
        self.elements.push(ElementBinding {
            name: Name::new(ns, local),
            read: Box::new(move |record, el, _first, session| {
                let token = collapse_whitespace(&el.text);
                match E::parse(&token) {
                    Some(value) => set(record, value),
                    None => session.report(Diagnostic::UnexpectedEnumValue {
                        type_name,
                        field: local,
                        found: token,
                        expected: E::VALUES,
                    }),
                }
            }),
            write: Box::new(move |record, writer, _session| {
                if let Some(value) = get(record) {
                    writer.begin(ns, local)?;
                    writer.text(value.as_str())?;
                    writer.end()?;
                }
                Ok(())
            }),
        });
        self
    }

    /// A repeated collapsed-string element.
    pub fn texts(
        mut self,
        local: &'static str,
        get: fn(&T) -> &[String],
        push: fn(&mut T, String),
        clear: fn(&mut T),
    ) -> Self {
        let ns = self.ns;
        self.elements.push(ElementBinding {
            name: Name::new(ns, local),
            read: Box::new(move |record, el, first, _session| {
                if first {
                    clear(record);
                }
                push(record, collapse_whitespace(&el.text));
            }),
            write: Box::new(move |record, writer, _session| {
                for value in get(record) {
                    writer.begin(ns, local)?;
                    writer.text(value)?;
                    writer.end()?;
                }
                Ok(())
            }),
        });
        self
    }

    /// An optional nested-record element. A later occurrence overwrites
    /// an earlier one; an explicit `xsi:nil` child stores `None`.
    pub fn element<C: Descriptor>(
        self,
        local: &'static str,
        get: fn(&T) -> Option<&C>,
        set: fn(&mut T, Option<C>),
    ) -> Self {
        self.record_element(local, false, get, set)
    }

    /// A required nested-record element.
    pub fn element_required<C: Descriptor>(
        self,
        local: &'static str,
        get: fn(&T) -> Option<&C>,
        set: fn(&mut T, Option<C>),
    ) -> Self {
        self.record_element(local, true, get, set)
    }

    /// A repeated nested-record element. The backing collection is
    /// cleared on the first occurrence within a decode, so re-populating
    /// an instance overrides rather than merges.
    pub fn sequence<C: Descriptor>(
        mut self,
        local: &'static str,
        get: fn(&T) -> &[C],
        push: fn(&mut T, C),
        clear: fn(&mut T),
    ) -> Self {
        let ns = self.ns;
        self.elements.push(ElementBinding {
            name: Name::new(ns, local),
            read: Box::new(move |record, el, first, session| {
                if first {
                    clear(record);
                }
                if let Some(item) = crate::engine::decode::<C>(el, session) {
                    push(record, item);
                }
            }),
            write: Box::new(move |record, writer, session| {
                for item in get(record) {
                    writer.begin(ns, local)?;
                    crate::engine::encode_value(Some(item), writer, session)?;
                    writer.end()?;
                }
                Ok(())
            }),
        });
        self
    }

    /// Declare the extension bucket: children matching no binding are
    /// captured verbatim instead of reported.
    pub fn any(
        mut self,
        entries: fn(&T) -> &[Element],
        push: fn(&mut T, Element),
        clear: fn(&mut T),
    ) -> Self {
        self.any = Some(AnyBinding {
            push,
            entries,
            clear,
        });
        self
    }

    /// Hook run on the freshly decoded record, after all children.
    pub fn after_decode(mut self, hook: fn(&mut T, &mut Session)) -> Self {
        self.after_decode = Some(hook);
        self
    }

    /// Hook run on the record just before its fields are emitted.
    pub fn before_encode(mut self, hook: fn(&T, &mut Session)) -> Self {
        self.before_encode = Some(hook);
        self
    }

    /// Finish the schema, resolving the dispatch tables.
    pub fn build(self) -> Schema<T> {
        let element_index = self
            .elements
            .iter()
            .enumerate()
            .map(|(index, binding)| (binding.name.local, index))
            .collect();
        let attribute_index = self
            .attributes
            .iter()
            .enumerate()
            .map(|(index, binding)| (binding.local, index))
            .collect();
        Schema {
            type_name: self.type_name,
            element: Name::new(self.ns, self.element),
            xsi_type: Name::new(self.ns, self.xsi_type),
            attributes: self.attributes,
            elements: self.elements,
            element_index,
            attribute_index,
            content: self.content,
            any: self.any,
            after_decode: self.after_decode,
            before_encode: self.before_encode,
        }
    }

    fn content_binding<A>(
        mut self,
        get: fn(&T) -> Option<&str>,
        set: fn(&mut T, String),
    ) -> Self
    where
        A: ValueAdapter<Value = String>,
    {
        let type_name = self.type_name;
        self.content = Some(ContentBinding {
            read: Box::new(move |record, el, _first, session| {
                match A::parse(&el.text, el) {
                    Ok(value) => set(record, value),
                    Err(e) => session.report(Diagnostic::AdapterError {
                        type_name,
                        field: "(content)",
                        adapter: A::NAME,
                        message: e.0,
                    }),
                }
            }),
            write: Box::new(move |record, writer, _session| {
                if let Some(value) = get(record) {
                    writer.text(value)?;
                }
                Ok(())
            }),
        });
        self
    }

    fn string_element<A>(
        mut self,
        local: &'static str,
        required: bool,
        get: fn(&T) -> Option<&str>,
        set: fn(&mut T, String),
    ) -> Self
    where
        A: ValueAdapter<Value = String>,
    {
        let (ns, type_name) = (self.ns, self.type_name);
        self.elements.push(ElementBinding {
            name: Name::new(ns, local),
            read: Box::new(move |record, el, _first, session| {
                match A::parse(&el.text, el) {
                    Ok(value) => set(record, value),
                    Err(e) => session.report(Diagnostic::AdapterError {
                        type_name,
                        field: local,
                        adapter: A::NAME,
                        message: e.0,
                    }),
                }
            }),
            write: Box::new(move |record, writer, session| {
                match get(record) {
                    Some(value) => {
                        writer.begin(ns, local)?;
                        writer.text(value)?;
                        writer.end()?;
                    }
                    None if required => session.report(Diagnostic::UnexpectedNullValue {
                        type_name,
                        field: local,
                    }),
                    None => {}
                }
                Ok(())
            }),
        });
        self
    }

    fn value_element<A>(
        mut self,
        local: &'static str,
        required: bool,
        get: fn(&T) -> Option<A::Value>,
        set: fn(&mut T, A::Value),
    ) -> Self
    where
        A: ValueAdapter,
        A::Value: 'static,
    {
        let (ns, type_name) = (self.ns, self.type_name);
        self.elements.push(ElementBinding {
            name: Name::new(ns, local),
            read: Box::new(move |record, el, _first, session| {
                match A::parse(&el.text, el) {
                    Ok(value) => set(record, value),
                    Err(e) => session.report(Diagnostic::AdapterError {
                        type_name,
                        field: local,
                        adapter: A::NAME,
                        message: e.0,
                    }),
                }
            }),
            write: Box::new(move |record, writer, session| {
                match get(record) {
                    Some(value) => {
                        writer.begin(ns, local)?;
                        let text = A::print(&value, writer);
                        writer.text(&text)?;
                        writer.end()?;
                    }
                    None if required => session.report(Diagnostic::UnexpectedNullValue {
                        type_name,
                        field: local,
                    }),
                    None => {}
                }
                Ok(())
            }),
        });
        self
    }

    fn record_element<C: Descriptor>(
        mut self,
        local: &'static str,
        required: bool,
        get: fn(&T) -> Option<&C>,
        set: fn(&mut T, Option<C>),
    ) -> Self {
        let (ns, type_name) = (self.ns, self.type_name);
        self.elements.push(ElementBinding {
            name: Name::new(ns, local),
            read: Box::new(move |record, el, _first, session| {
                set(record, crate::engine::decode::<C>(el, session));
            }),
            write: Box::new(move |record, writer, session| {
                match get(record) {
                    Some(value) => {
                        writer.begin(ns, local)?;
                        crate::engine::encode_value(Some(value), writer, session)?;
                        writer.end()?;
                    }
                    None if required => session.report(Diagnostic::UnexpectedNullValue {
                        type_name,
                        field: local,
                    }),
                    None => {}
                }
                Ok(())
            }),
        });
        self
    }
}
