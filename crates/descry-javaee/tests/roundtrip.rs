//! Whole-document round trips across the descriptor families.

use descry_codec::{read_document, write_document, Diagnostic};
use descry_javaee::ejb::{ApplicationException, AssemblyDescriptor, EnterpriseBeans};
use descry_javaee::{
    read_ejb_jar, read_faces_config, read_tld, read_web_app, write_ejb_jar, write_faces_config,
    write_tld, write_web_app, EjbJar, EnvEntry, FacesConfig, SecurityRole, SessionBean,
    SessionType, Text, TldTaglib, WebApp,
};

#[test]
fn assembly_descriptor_end_to_end() {
    let xml = r#"<assembly-descriptor xmlns="http://java.sun.com/xml/ns/javaee" id="ad1">
        <security-role>
            <role-name>admin</role-name>
        </security-role>
        <method-permission>
            <role-name>admin</role-name>
            <method>
                <ejb-name>CalculatorBean</ejb-name>
                <method-name>*</method-name>
            </method>
        </method-permission>
    </assembly-descriptor>"#;

    let decoded = read_document::<AssemblyDescriptor>(xml).unwrap();
    assert!(decoded.diagnostics.is_empty());
    let ad = decoded.value.unwrap();

    assert_eq!(ad.id.as_deref(), Some("ad1"));
    assert_eq!(ad.security_roles.len(), 1);
    assert_eq!(ad.security_roles[0].role_name.as_deref(), Some("admin"));
    assert_eq!(ad.method_permissions.len(), 1);
    assert_eq!(ad.method_permissions[0].role_names, ["admin"]);
    assert_eq!(
        ad.method_permissions[0].methods[0].ejb_name.as_deref(),
        Some("CalculatorBean")
    );
    assert!(ad.container_transactions.is_empty());
    assert!(ad.interceptor_bindings.is_empty());
    assert!(ad.exclude_list.is_none());
    assert!(ad.application_exceptions.is_empty());
    assert_eq!(decoded.ids.get("ad1").unwrap().type_name, "AssemblyDescriptor");

    // Re-encode and compare field-for-field after a second decode.
    let encoded = write_document(&ad).unwrap();
    assert!(encoded.diagnostics.is_empty());
    let again = read_document::<AssemblyDescriptor>(&encoded.xml).unwrap();
    assert_eq!(again.value.unwrap(), ad);

    // Element order is schema order: security-role before method-permission.
    let role_pos = encoded.xml.find("security-role").unwrap();
    let perm_pos = encoded.xml.find("method-permission").unwrap();
    assert!(role_pos < perm_pos);
}

#[test]
fn ejb_jar_round_trip() {
    let xml = r#"<ejb-jar xmlns="http://java.sun.com/xml/ns/javaee" version="3.1" metadata-complete="true">
        <module-name>accounts</module-name>
        <description xml:lang="en">Account processing module</description>
        <enterprise-beans>
            <session>
                <ejb-name>AccountBean</ejb-name>
                <business-local>org.example.Account</business-local>
                <ejb-class>org.example.AccountBean</ejb-class>
                <session-type>Stateless</session-type>
                <env-entry>
                    <env-entry-name>greeting</env-entry-name>
                    <env-entry-type>java.lang.String</env-entry-type>
                    <env-entry-value>  hello  world  </env-entry-value>
                </env-entry>
            </session>
            <message-driven>
                <ejb-name>AuditListener</ejb-name>
                <ejb-class>org.example.AuditListener</ejb-class>
                <activation-config>
                    <activation-config-property>
                        <activation-config-property-name>destinationType</activation-config-property-name>
                        <activation-config-property-value>javax.jms.Queue</activation-config-property-value>
                    </activation-config-property>
                </activation-config>
            </message-driven>
        </enterprise-beans>
        <assembly-descriptor>
            <container-transaction>
                <method>
                    <ejb-name>AccountBean</ejb-name>
                    <method-name>*</method-name>
                </method>
                <trans-attribute>Required</trans-attribute>
            </container-transaction>
        </assembly-descriptor>
        <ejb-client-jar>accounts-client.jar</ejb-client-jar>
    </ejb-jar>"#;

    let decoded = read_ejb_jar(xml).unwrap();
    assert!(decoded.diagnostics.is_empty());
    let jar = decoded.value.unwrap();

    assert_eq!(jar.version.as_deref(), Some("3.1"));
    assert_eq!(jar.metadata_complete, Some(true));
    assert_eq!(jar.module_name.as_deref(), Some("accounts"));
    assert_eq!(jar.descriptions[0].lang.as_deref(), Some("en"));
    assert_eq!(
        jar.descriptions[0].value.as_deref(),
        Some("Account processing module")
    );

    let beans = jar.enterprise_beans.as_ref().unwrap();
    let session = beans.session.get("AccountBean").unwrap();
    assert_eq!(session.session_type, Some(SessionType::Stateless));
    assert_eq!(session.business_local, ["org.example.Account"]);

    // The env-entry value keeps its whitespace verbatim.
    let entry = session.env_entries.get("greeting").unwrap();
    assert_eq!(entry.env_entry_value.as_deref(), Some("  hello  world  "));

    let mdb = beans.message_driven.get("AuditListener").unwrap();
    let config = mdb.activation_config.as_ref().unwrap();
    assert_eq!(
        config.properties[0].value.as_deref(),
        Some("javax.jms.Queue")
    );

    let encoded = write_ejb_jar(&jar).unwrap();
    assert!(encoded.diagnostics.is_empty());
    let again = read_ejb_jar(&encoded.xml).unwrap();
    assert!(again.diagnostics.is_empty());
    assert_eq!(again.value.unwrap(), jar);
}

#[test]
fn web_app_round_trip_and_boolean_leniency() {
    let xml = r#"<web-app xmlns="http://java.sun.com/xml/ns/javaee" version="3.0">
        <context-param>
            <param-name>theme</param-name>
            <param-value>dark</param-value>
        </context-param>
        <servlet>
            <servlet-name>main</servlet-name>
            <servlet-class>org.example.MainServlet</servlet-class>
            <load-on-startup>1</load-on-startup>
            <async-supported>1</async-supported>
        </servlet>
        <servlet-mapping>
            <servlet-name>main</servlet-name>
            <url-pattern>/main/*</url-pattern>
        </servlet-mapping>
        <session-config>
            <session-timeout>30</session-timeout>
            <cookie-config>
                <http-only>true</http-only>
                <secure>0</secure>
            </cookie-config>
            <tracking-mode>COOKIE</tracking-mode>
        </session-config>
        <welcome-file-list>
            <welcome-file>index.jsp</welcome-file>
            <welcome-file>index.html</welcome-file>
        </welcome-file-list>
    </web-app>"#;

    let decoded = read_web_app(xml).unwrap();
    assert!(decoded.diagnostics.is_empty());
    let app = decoded.value.unwrap();

    let servlet = app.servlets.get("main").unwrap();
    assert_eq!(servlet.load_on_startup, Some(1));
    // "1" is a lenient true.
    assert_eq!(servlet.async_supported, Some(true));

    let session_config = app.session_config.as_ref().unwrap();
    assert_eq!(session_config.session_timeout, Some(30));
    let cookies = session_config.cookie_config.as_ref().unwrap();
    assert_eq!(cookies.http_only, Some(true));
    // Anything that is not "1" or "true" is false.
    assert_eq!(cookies.secure, Some(false));

    let welcome = app.welcome_file_list.as_ref().unwrap();
    assert_eq!(welcome.welcome_files, ["index.jsp", "index.html"]);

    let encoded = write_web_app(&app).unwrap();
    assert!(encoded.diagnostics.is_empty());
    let again = read_web_app(&encoded.xml).unwrap();
    assert_eq!(again.value.unwrap(), app);
}

#[test]
fn tld_round_trip() {
    let xml = r#"<taglib xmlns="http://java.sun.com/xml/ns/javaee" version="2.1">
        <tlib-version>1.2</tlib-version>
        <short-name>fmt</short-name>
        <uri>http://example.org/tags/fmt</uri>
        <tag>
            <name>formatDate</name>
            <tag-class>org.example.FormatDateTag</tag-class>
            <body-content>empty</body-content>
            <attribute>
                <name>pattern</name>
                <required>false</required>
                <rtexprvalue>true</rtexprvalue>
            </attribute>
        </tag>
        <function>
            <name>trim</name>
            <function-class>org.example.Functions</function-class>
            <function-signature>java.lang.String trim(java.lang.String)</function-signature>
        </function>
    </taglib>"#;

    let decoded = read_tld(xml).unwrap();
    assert!(decoded.diagnostics.is_empty());
    let taglib = decoded.value.unwrap();

    assert_eq!(taglib.short_name.as_deref(), Some("fmt"));
    assert_eq!(taglib.tags[0].attributes[0].rtexprvalue, Some(true));
    assert_eq!(taglib.functions[0].name.as_deref(), Some("trim"));

    let encoded = write_tld(&taglib).unwrap();
    assert!(encoded.diagnostics.is_empty());
    let again = read_tld(&encoded.xml).unwrap();
    assert_eq!(again.value.unwrap(), taglib);
}

#[test]
fn faces_config_extension_bucket_round_trips() {
    let xml = r#"<faces-config xmlns="http://java.sun.com/xml/ns/javaee" version="2.0">
        <managed-bean>
            <managed-bean-name>cart</managed-bean-name>
            <managed-bean-class>org.example.Cart</managed-bean-class>
            <managed-bean-scope>session</managed-bean-scope>
        </managed-bean>
        <vendor-settings>
            <render-kit-hint>fast</render-kit-hint>
        </vendor-settings>
    </faces-config>"#;

    let decoded = read_faces_config(xml).unwrap();
    // The unknown child went into the bucket, not the diagnostics.
    assert!(decoded.diagnostics.is_empty());
    let config = decoded.value.unwrap();

    assert_eq!(config.managed_beans.len(), 1);
    assert_eq!(config.others.len(), 1);
    assert_eq!(config.others[0].local, "vendor-settings");
    assert_eq!(config.others[0].children[0].text, "fast");

    let encoded = write_faces_config(&config).unwrap();
    let again = read_faces_config(&encoded.xml).unwrap().value.unwrap();
    assert_eq!(again.others.len(), 1);
    assert_eq!(again.others[0].children[0].local, "render-kit-hint");
    assert_eq!(again.others[0].children[0].text, "fast");
}

#[test]
fn unknown_element_without_bucket_reports_and_continues() {
    let xml = r#"<env-entry xmlns="http://java.sun.com/xml/ns/javaee">
        <env-entry-name>timeout</env-entry-name>
        <not-in-schema>x</not-in-schema>
        <env-entry-value>5</env-entry-value>
    </env-entry>"#;

    let decoded = read_document::<EnvEntry>(xml).unwrap();
    let entry = decoded.value.unwrap();

    // Exactly one diagnostic; the rest of the record decoded fine.
    assert_eq!(decoded.diagnostics.len(), 1);
    let Diagnostic::UnexpectedElement { found, expected, .. } = &decoded.diagnostics[0] else {
        panic!("expected an unexpected-element diagnostic");
    };
    assert_eq!(found.local, "not-in-schema");
    assert!(expected.iter().any(|n| n.local == "env-entry-value"));
    assert_eq!(entry.env_entry_name.as_deref(), Some("timeout"));
    assert_eq!(entry.env_entry_value.as_deref(), Some("5"));
}

#[test]
fn duplicate_application_exception_replaces_first() {
    let xml = r#"<assembly-descriptor xmlns="http://java.sun.com/xml/ns/javaee">
        <application-exception>
            <exception-class>org.example.OverdraftException</exception-class>
            <rollback>false</rollback>
        </application-exception>
        <application-exception>
            <exception-class>org.example.OverdraftException</exception-class>
            <rollback>true</rollback>
        </application-exception>
    </assembly-descriptor>"#;

    let decoded = read_document::<AssemblyDescriptor>(xml).unwrap();
    let ad = decoded.value.unwrap();

    assert_eq!(ad.application_exceptions.len(), 1);
    let exception = ad
        .application_exceptions
        .get("org.example.OverdraftException")
        .unwrap();
    // The second declaration won.
    assert_eq!(exception.rollback, Some(true));
}

#[test]
fn duplicate_session_bean_replaces_first() {
    let xml = r#"<enterprise-beans xmlns="http://java.sun.com/xml/ns/javaee">
        <session>
            <ejb-name>AccountBean</ejb-name>
            <ejb-class>org.example.Old</ejb-class>
        </session>
        <session>
            <ejb-name>AccountBean</ejb-name>
            <ejb-class>org.example.New</ejb-class>
        </session>
    </enterprise-beans>"#;

    let decoded = read_document::<EnterpriseBeans>(xml).unwrap();
    let beans = decoded.value.unwrap();
    assert_eq!(beans.session.len(), 1);
    assert_eq!(
        beans.session.get("AccountBean").unwrap().ejb_class.as_deref(),
        Some("org.example.New")
    );
}

#[test]
fn optional_fields_omitted_when_unset() {
    let jar = EjbJar {
        version: Some("3.1".into()),
        ..Default::default()
    };

    let encoded = write_ejb_jar(&jar).unwrap();
    assert!(encoded.diagnostics.is_empty());
    assert!(!encoded.xml.contains("module-name"));
    assert!(!encoded.xml.contains("enterprise-beans"));
    assert!(!encoded.xml.contains("metadata-complete"));

    let again = read_ejb_jar(&encoded.xml).unwrap().value.unwrap();
    assert_eq!(again.module_name, None);
    assert_eq!(again.enterprise_beans, None);
    assert_eq!(again.metadata_complete, None);
    assert_eq!(again, jar);
}

#[test]
fn ids_registered_across_document() {
    let xml = r#"<ejb-jar xmlns="http://java.sun.com/xml/ns/javaee" id="jar1">
        <assembly-descriptor id="ad1">
            <security-role id="role1">
                <role-name>admin</role-name>
            </security-role>
        </assembly-descriptor>
    </ejb-jar>"#;

    let decoded = read_ejb_jar(xml).unwrap();
    assert_eq!(decoded.ids.len(), 3);
    assert_eq!(decoded.ids.get("jar1").unwrap().type_name, "EjbJar");
    assert_eq!(decoded.ids.get("ad1").unwrap().type_name, "AssemblyDescriptor");
    assert_eq!(decoded.ids.get("role1").unwrap().type_name, "SecurityRole");
}

#[test]
fn duplicate_id_keeps_first_and_reports() {
    let xml = r#"<assembly-descriptor xmlns="http://java.sun.com/xml/ns/javaee" id="dup">
        <security-role id="dup"><role-name>a</role-name></security-role>
    </assembly-descriptor>"#;

    let decoded = read_document::<AssemblyDescriptor>(xml).unwrap();
    assert_eq!(
        decoded.ids.get("dup").unwrap().type_name,
        "AssemblyDescriptor"
    );
    assert!(decoded
        .diagnostics
        .iter()
        .any(|d| matches!(d, Diagnostic::DuplicateId { id, .. } if id == "dup")));
}

#[test]
fn enum_out_of_vocabulary_leaves_field_unset() {
    let xml = r#"<enterprise-beans xmlns="http://java.sun.com/xml/ns/javaee">
        <session>
            <ejb-name>A</ejb-name>
            <session-type>Pooled</session-type>
        </session>
    </enterprise-beans>"#;

    let decoded = read_document::<EnterpriseBeans>(xml).unwrap();
    let beans = decoded.value.unwrap();
    assert_eq!(beans.session.get("A").unwrap().session_type, None);
    assert!(decoded.diagnostics.iter().any(|d| matches!(
        d,
        Diagnostic::UnexpectedEnumValue { found, .. } if found == "Pooled"
    )));
}

#[test]
fn collapsed_strings_collapse_and_raw_strings_do_not() {
    let xml = r#"<env-entry xmlns="http://java.sun.com/xml/ns/javaee">
        <env-entry-name>
            spaced
            name
        </env-entry-name>
        <env-entry-value>line one
line two</env-entry-value>
    </env-entry>"#;

    let entry = read_document::<EnvEntry>(xml).unwrap().value.unwrap();
    assert_eq!(entry.env_entry_name.as_deref(), Some("spaced name"));
    assert_eq!(entry.env_entry_value.as_deref(), Some("line one\nline two"));
}

#[test]
fn programmatic_construction_round_trips() {
    let mut jar = EjbJar::default();
    jar.version = Some("3.1".into());

    let mut bean = SessionBean::default();
    bean.ejb_name = Some("CartBean".into());
    bean.session_type = Some(SessionType::Stateful);
    bean.descriptions.push(Text::new("shopping cart"));

    let mut beans = EnterpriseBeans::default();
    beans.session.push(bean);
    jar.enterprise_beans = Some(beans);

    let mut role = SecurityRole::default();
    role.role_name = Some("shopper".into());
    let mut ad = AssemblyDescriptor::default();
    ad.security_roles.push(role);

    let mut exception = ApplicationException::default();
    exception.exception_class = Some("org.example.CartException".into());
    exception.inherited = Some(true);
    ad.application_exceptions.push(exception);
    jar.assembly_descriptor = Some(ad);

    let encoded = write_ejb_jar(&jar).unwrap();
    assert!(encoded.diagnostics.is_empty());
    let decoded = read_ejb_jar(&encoded.xml).unwrap();
    assert!(decoded.diagnostics.is_empty());
    assert_eq!(decoded.value.unwrap(), jar);
}

#[test]
fn nil_propagation() {
    use descry_codec::{decode, encode_value, Session};
    use descry_xml::{Element, XmlWriter};

    // Encoding the absent record emits only the nil marker.
    let mut writer = XmlWriter::new();
    let mut session = Session::new();
    writer
        .begin("http://java.sun.com/xml/ns/javaee", "env-entry")
        .unwrap();
    encode_value::<EnvEntry>(None, &mut writer, &mut session).unwrap();
    writer.end().unwrap();
    let xml = writer.into_string().unwrap();

    assert!(xml.contains("xsi:nil=\"true\""));
    assert!(!xml.contains("env-entry-name"));

    // Decoding it comes back as no value, not a defaulted record.
    let element = Element::parse(&xml).unwrap();
    let mut session = Session::new();
    assert_eq!(decode::<EnvEntry>(&element, &mut session), None);
    assert!(session.diagnostics().is_empty());
}

#[test]
fn wrong_root_element_is_fatal() {
    let err = read_document::<WebApp>(
        r#"<ejb-jar xmlns="http://java.sun.com/xml/ns/javaee"/>"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("web-app"));
}

#[test]
fn malformed_xml_is_fatal() {
    assert!(read_tld("<taglib><tag></taglib>").is_err());
    assert!(read_faces_config("").is_err());
}

#[test]
fn empty_roots_decode_to_defaults() {
    let app = read_web_app(r#"<web-app xmlns="http://java.sun.com/xml/ns/javaee"/>"#)
        .unwrap()
        .value
        .unwrap();
    assert_eq!(app, WebApp::default());

    let taglib = read_tld(r#"<taglib xmlns="http://java.sun.com/xml/ns/javaee"/>"#)
        .unwrap()
        .value
        .unwrap();
    assert_eq!(taglib, TldTaglib::default());

    let config: FacesConfig =
        read_faces_config(r#"<faces-config xmlns="http://java.sun.com/xml/ns/javaee"/>"#)
            .unwrap()
            .value
            .unwrap();
    assert!(config.managed_beans.is_empty());
    assert!(config.others.is_empty());
}
