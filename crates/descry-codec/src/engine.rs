//! The generic decode/encode engine.

use descry_xml::{Element, XmlWriter, XSI_NS};

use crate::error::{Error, Result};
use crate::schema::Descriptor;
use crate::session::{Diagnostic, IdRegistry, Session};

/// Decode one element subtree into a record.
///
/// Returns `None` for an explicit `xsi:nil` marker, and for an `xsi:type`
/// assertion that contradicts the expected complex type (which also
/// reports a diagnostic). Per-field problems are reported on the session
/// and decoding continues.
pub fn decode<T: Descriptor>(element: &Element, session: &mut Session) -> Option<T> {
    let schema = T::schema();

    if element.is_nil() {
        return None;
    }

    if let Some(asserted) = element.xsi_type() {
        let expected = schema.xsi_type();
        if asserted.local != expected.local || asserted.ns != expected.ns {
            session.report(Diagnostic::UnexpectedXsiType {
                found: asserted,
                expected: expected.to_owned_name(),
            });
            return None;
        }
    }

    let mut record = T::default();

    for attribute in &element.attributes {
        // Schema-instance attributes (nil, type, schemaLocation) are the
        // reader's business, not the record's.
        if attribute.ns == XSI_NS {
            continue;
        }
        match schema.find_attribute(&attribute.ns, &attribute.local) {
            Some(binding) => (binding.read)(&mut record, &attribute.value, element, session),
            None => session.report(Diagnostic::UnexpectedAttribute {
                type_name: schema.type_name(),
                found: descry_xml::OwnedName::new(attribute.ns.clone(), attribute.local.clone()),
                expected: schema.attribute_names(),
            }),
        }
    }

    if let Some(content) = &schema.content {
        (content.read)(&mut record, element, true, session);
    }

    let mut seen = vec![false; schema.elements.len()];
    let mut any_seen = false;

    for child in &element.children {
        match schema.find_element(&child.ns, &child.local) {
            Some((index, binding)) => {
                let first = !seen[index];
                seen[index] = true;
                (binding.read)(&mut record, child, first, session);
            }
            None => {
                if let Some(any) = &schema.any {
                    if !any_seen {
                        (any.clear)(&mut record);
                        any_seen = true;
                    }
                    (any.push)(&mut record, child.clone());
                } else {
                    session.report(Diagnostic::UnexpectedElement {
                        type_name: schema.type_name(),
                        found: child.name(),
                        expected: schema.element_names(),
                    });
                }
            }
        }
    }

    if let Some(hook) = schema.after_decode {
        hook(&mut record, session);
    }

    Some(record)
}

/// Encode a record's attributes and children into the writer's pending
/// element, or mark it nil when the value is absent.
///
/// The caller owns the surrounding `begin`/`end` pair; this writes only
/// what goes inside, in schema-declaration order. Unset optional fields
/// are omitted entirely; unset required fields report a diagnostic and
/// are omitted (lenient policy).
pub fn encode_value<T: Descriptor>(
    value: Option<&T>,
    writer: &mut XmlWriter,
    session: &mut Session,
) -> descry_xml::Result<()> {
    let Some(record) = value else {
        return writer.nil();
    };

    let schema = T::schema();

    if let Some(hook) = schema.before_encode {
        hook(record, session);
    }

    for binding in &schema.attributes {
        (binding.write)(record, writer, session)?;
    }
    if let Some(content) = &schema.content {
        (content.write)(record, writer, session)?;
    }
    for binding in &schema.elements {
        (binding.write)(record, writer, session)?;
    }
    if let Some(any) = &schema.any {
        for entry in (any.entries)(record) {
            writer.element(entry)?;
        }
    }

    Ok(())
}

/// Outcome of decoding a whole document.
#[derive(Debug)]
pub struct Decoded<T> {
    /// The decoded record; `None` when the root was explicitly nil or
    /// carried a mismatched `xsi:type`.
    pub value: Option<T>,
    /// Diagnostics collected during the decode, in encounter order.
    pub diagnostics: Vec<Diagnostic>,
    /// Every `id` attribute registered during the decode.
    pub ids: IdRegistry,
}

/// Outcome of encoding a whole document.
#[derive(Debug)]
pub struct Encoded {
    /// The serialized document.
    pub xml: String,
    /// Diagnostics collected during the encode (required-but-unset
    /// fields, adapter faults).
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse and decode a whole descriptor document.
///
/// The root element must be the one `T`'s schema declares; anything else
/// is a fatal [`Error::UnexpectedRoot`]. Malformed XML propagates from
/// the parser.
pub fn read_document<T: Descriptor>(xml: &str) -> Result<Decoded<T>> {
    let root = Element::parse(xml).map_err(Error::Xml)?;
    let expected = T::schema().element();
    if root.local != expected.local || root.ns != expected.ns {
        return Err(Error::UnexpectedRoot {
            found: root.name(),
            expected: expected.to_owned_name(),
        });
    }

    let mut session = Session::new();
    let value = decode::<T>(&root, &mut session);
    let (diagnostics, ids) = session.into_parts();
    Ok(Decoded {
        value,
        diagnostics,
        ids,
    })
}

/// Encode a record as a whole descriptor document, with XML declaration
/// and 2-space indentation.
pub fn write_document<T: Descriptor>(value: &T) -> Result<Encoded> {
    let element = T::schema().element();
    let mut writer = XmlWriter::new();
    let mut session = Session::new();

    writer.declaration().map_err(Error::Xml)?;
    writer.begin(element.ns, element.local).map_err(Error::Xml)?;
    encode_value(Some(value), &mut writer, &mut session).map_err(Error::Xml)?;
    writer.end().map_err(Error::Xml)?;

    let (diagnostics, _) = session.into_parts();
    Ok(Encoded {
        xml: writer.into_string().map_err(Error::Xml)?,
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Schema, SchemaBuilder};
    use std::sync::OnceLock;

    const NS: &str = "urn:fixture";

    #[derive(Debug, Default, PartialEq)]
    struct Port {
        id: Option<String>,
        name: Option<String>,
        number: Option<i32>,
    }

    impl Descriptor for Port {
        fn schema() -> &'static Schema<Self> {
            static SCHEMA: OnceLock<Schema<Port>> = OnceLock::new();
            SCHEMA.get_or_init(|| {
                SchemaBuilder::new("Port", NS, "port", "portType")
                    .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
                    .text_required("name", |r| r.name.as_deref(), |r, v| r.name = Some(v))
                    .int("number", |r| r.number, |r, v| r.number = Some(v))
                    .build()
            })
        }
    }

    #[derive(Debug, Default)]
    struct Device {
        label: Option<String>,
        primary: Option<Port>,
        spares: Vec<Port>,
        tags: Vec<String>,
        extensions: Vec<Element>,
        decoded_hook_ran: bool,
    }

    impl Descriptor for Device {
        fn schema() -> &'static Schema<Self> {
            static SCHEMA: OnceLock<Schema<Device>> = OnceLock::new();
            SCHEMA.get_or_init(|| {
                SchemaBuilder::new("Device", NS, "device", "deviceType")
                    .text("label", |r: &Self| r.label.as_deref(), |r, v| r.label = Some(v))
                    .element::<Port>(
                        "primary",
                        |r| r.primary.as_ref(),
                        |r, v| r.primary = v,
                    )
                    .sequence::<Port>(
                        "spare",
                        |r| &r.spares,
                        |r, v| r.spares.push(v),
                        |r| r.spares.clear(),
                    )
                    .texts(
                        "tag",
                        |r| &r.tags,
                        |r, v| r.tags.push(v),
                        |r| r.tags.clear(),
                    )
                    .any(
                        |r| &r.extensions,
                        |r, v| r.extensions.push(v),
                        |r| r.extensions.clear(),
                    )
                    .after_decode(|r, _s| r.decoded_hook_ran = true)
                    .build()
            })
        }
    }

    fn parse(xml: &str) -> Element {
        Element::parse(xml).unwrap()
    }

    #[test]
    fn test_decode_populates_fields() {
        let el = parse(&format!(
            r#"<device xmlns="{NS}">
                 <label>router</label>
                 <primary id="p0"><name>eth0</name><number>1</number></primary>
                 <spare><name>eth1</name></spare>
                 <spare><name>eth2</name></spare>
                 <tag>edge</tag>
               </device>"#
        ));
        let mut session = Session::new();
        let device: Device = decode(&el, &mut session).unwrap();

        assert_eq!(device.label.as_deref(), Some("router"));
        assert_eq!(device.primary.as_ref().unwrap().name.as_deref(), Some("eth0"));
        assert_eq!(device.primary.as_ref().unwrap().number, Some(1));
        assert_eq!(device.spares.len(), 2);
        assert_eq!(device.tags, ["edge"]);
        assert!(device.decoded_hook_ran);
        assert!(session.diagnostics().is_empty());
        assert_eq!(session.ids().get("p0").unwrap().type_name, "Port");
    }

    #[test]
    fn test_nil_short_circuits() {
        let el = parse(&format!(
            r#"<port xmlns="{NS}"
                     xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
                     xsi:nil="true"><name>ignored</name></port>"#
        ));
        let mut session = Session::new();
        assert_eq!(decode::<Port>(&el, &mut session), None);
        assert!(session.diagnostics().is_empty());
    }

    #[test]
    fn test_xsi_type_mismatch_aborts_subtree() {
        let el = parse(&format!(
            r#"<port xmlns="{NS}"
                     xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
                     xsi:type="deviceType"/>"#
        ));
        let mut session = Session::new();
        assert_eq!(decode::<Port>(&el, &mut session), None);
        assert!(matches!(
            session.diagnostics(),
            [Diagnostic::UnexpectedXsiType { .. }]
        ));
    }

    #[test]
    fn test_matching_xsi_type_accepted() {
        let el = parse(&format!(
            r#"<port xmlns="{NS}"
                     xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
                     xsi:type="portType"><name>eth0</name></port>"#
        ));
        let mut session = Session::new();
        let port: Port = decode(&el, &mut session).unwrap();
        assert_eq!(port.name.as_deref(), Some("eth0"));
    }

    #[test]
    fn test_unexpected_attribute_reported_and_skipped() {
        let el = parse(&format!(r#"<port xmlns="{NS}" vendor="acme"><name>eth0</name></port>"#));
        let mut session = Session::new();
        let port: Port = decode(&el, &mut session).unwrap();

        assert_eq!(port.name.as_deref(), Some("eth0"));
        let [Diagnostic::UnexpectedAttribute { found, expected, .. }] = session.diagnostics()
        else {
            panic!("expected one unexpected-attribute diagnostic");
        };
        assert_eq!(found.local, "vendor");
        assert!(expected.iter().any(|n| n.local == "id"));
    }

    #[test]
    fn test_adapter_error_leaves_field_unset() {
        let el = parse(&format!(
            r#"<port xmlns="{NS}"><name>eth0</name><number>lots</number></port>"#
        ));
        let mut session = Session::new();
        let port: Port = decode(&el, &mut session).unwrap();

        assert_eq!(port.name.as_deref(), Some("eth0"));
        assert_eq!(port.number, None);
        assert!(matches!(
            session.diagnostics(),
            [Diagnostic::AdapterError { field: "number", .. }]
        ));
    }

    #[test]
    fn test_unknown_child_without_bucket_lists_expected() {
        let el = parse(&format!(r#"<port xmlns="{NS}"><surprise/></port>"#));
        let mut session = Session::new();
        let _port: Port = decode(&el, &mut session).unwrap();

        let [Diagnostic::UnexpectedElement { found, expected, .. }] = session.diagnostics()
        else {
            panic!("expected one unexpected-element diagnostic");
        };
        assert_eq!(found.local, "surprise");
        let locals: Vec<_> = expected.iter().map(|n| n.local.as_str()).collect();
        assert!(locals.contains(&"name"));
        assert!(locals.contains(&"number"));
    }

    #[test]
    fn test_unknown_child_lands_in_bucket() {
        let el = parse(&format!(
            r#"<device xmlns="{NS}"><label>d</label><vendor-extension><knob/></vendor-extension></device>"#
        ));
        let mut session = Session::new();
        let device: Device = decode(&el, &mut session).unwrap();

        assert!(session.diagnostics().is_empty());
        assert_eq!(device.extensions.len(), 1);
        assert_eq!(device.extensions[0].local, "vendor-extension");
        assert_eq!(device.extensions[0].children[0].local, "knob");
    }

    #[test]
    fn test_repeated_field_cleared_on_first_encounter() {
        let el = parse(&format!(r#"<device xmlns="{NS}"><spare><name>new</name></spare></device>"#));
        // Simulate re-populating an instance that already held entries.
        let mut device = Device::default();
        device.spares.push(Port {
            id: None,
            name: Some("stale".into()),
            number: None,
        });

        // decode() always starts from a fresh record, so drive the
        // binding directly the way a merge-decode would.
        let schema = Device::schema();
        let mut session = Session::new();
        let (index, binding) = schema.find_element(NS, "spare").unwrap();
        assert_eq!(index, 2);
        (binding.read)(&mut device, &el.children[0], true, &mut session);

        assert_eq!(device.spares.len(), 1);
        assert_eq!(device.spares[0].name.as_deref(), Some("new"));
    }

    #[test]
    fn test_encode_skips_unset_optionals() {
        let port = Port {
            id: None,
            name: Some("eth0".into()),
            number: None,
        };
        let encoded = write_document(&port).unwrap();
        assert!(encoded.diagnostics.is_empty());
        assert!(!encoded.xml.contains("number"));
        assert!(!encoded.xml.contains("id="));
    }

    #[test]
    fn test_encode_reports_missing_required_field() {
        let port = Port::default();
        let encoded = write_document(&port).unwrap();
        assert!(matches!(
            encoded.diagnostics.as_slice(),
            [Diagnostic::UnexpectedNullValue { field: "name", .. }]
        ));
        assert!(!encoded.xml.contains("<name"));
    }

    #[test]
    fn test_nil_round_trip() {
        let mut writer = XmlWriter::new();
        let mut session = Session::new();
        writer.begin(NS, "port").unwrap();
        encode_value::<Port>(None, &mut writer, &mut session).unwrap();
        writer.end().unwrap();
        let xml = writer.into_string().unwrap();
        assert!(xml.contains("xsi:nil=\"true\""));

        let el = parse(&xml);
        let mut session = Session::new();
        assert_eq!(decode::<Port>(&el, &mut session), None);
    }

    #[test]
    fn test_document_round_trip() {
        let device = Device {
            label: Some("router".into()),
            primary: Some(Port {
                id: Some("p0".into()),
                name: Some("eth0".into()),
                number: Some(1),
            }),
            spares: vec![Port {
                id: None,
                name: Some("eth1".into()),
                number: None,
            }],
            tags: vec!["edge".into(), "lab".into()],
            extensions: Vec::new(),
            decoded_hook_ran: false,
        };

        let encoded = write_document(&device).unwrap();
        assert!(encoded.diagnostics.is_empty());

        let decoded = read_document::<Device>(&encoded.xml).unwrap();
        assert!(decoded.diagnostics.is_empty());
        let back = decoded.value.unwrap();

        assert_eq!(back.label, device.label);
        assert_eq!(back.primary, device.primary);
        assert_eq!(back.spares, device.spares);
        assert_eq!(back.tags, device.tags);
        assert_eq!(decoded.ids.get("p0").unwrap().type_name, "Port");
    }

    #[derive(Debug, Default)]
    struct Checked {
        name: Option<String>,
    }

    impl Descriptor for Checked {
        fn schema() -> &'static Schema<Self> {
            static SCHEMA: OnceLock<Schema<Checked>> = OnceLock::new();
            SCHEMA.get_or_init(|| {
                SchemaBuilder::new("Checked", NS, "checked", "checkedType")
                    .text("name", |r: &Self| r.name.as_deref(), |r, v| r.name = Some(v))
                    .before_encode(|record, session| {
                        if record.name.is_none() {
                            session.report(Diagnostic::UnexpectedNullValue {
                                type_name: "Checked",
                                field: "name",
                            });
                        }
                    })
                    .build()
            })
        }
    }

    #[test]
    fn test_before_encode_hook_runs() {
        let encoded = write_document(&Checked::default()).unwrap();
        assert!(matches!(
            encoded.diagnostics.as_slice(),
            [Diagnostic::UnexpectedNullValue { field: "name", .. }]
        ));

        let encoded = write_document(&Checked {
            name: Some("ok".into()),
        })
        .unwrap();
        assert!(encoded.diagnostics.is_empty());
    }

    #[test]
    fn test_wrong_root_is_fatal() {
        let err = read_document::<Port>(&format!(r#"<device xmlns="{NS}"/>"#)).unwrap_err();
        assert!(matches!(err, Error::UnexpectedRoot { .. }));
    }
}
