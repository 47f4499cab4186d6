//! Session, page and login configuration.

use std::sync::OnceLock;

use descry_codec::{Descriptor, Schema, SchemaBuilder};

use crate::enums::TrackingMode;
use crate::JAVAEE;

/// Session lifetime, cookie policy and tracking modes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionConfig {
    pub id: Option<String>,
    pub session_timeout: Option<i32>,
    pub cookie_config: Option<CookieConfig>,
    pub tracking_modes: Vec<TrackingMode>,
}

impl Descriptor for SessionConfig {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<SessionConfig>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "SessionConfig",
                JAVAEE,
                "session-config",
                "session-configType",
            )
            .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
            .int(
                "session-timeout",
                |r| r.session_timeout,
                |r, v| r.session_timeout = Some(v),
            )
            .element(
                "cookie-config",
                |r| r.cookie_config.as_ref(),
                |r, v| r.cookie_config = v,
            )
            .enumerations(
                "tracking-mode",
                |r| &r.tracking_modes,
                |r, v| r.tracking_modes.push(v),
                |r| r.tracking_modes.clear(),
            )
            .build()
        })
    }
}

/// Session-cookie attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CookieConfig {
    pub id: Option<String>,
    pub name: Option<String>,
    pub domain: Option<String>,
    pub path: Option<String>,
    pub comment: Option<String>,
    pub http_only: Option<bool>,
    pub secure: Option<bool>,
    pub max_age: Option<i32>,
}

impl Descriptor for CookieConfig {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<CookieConfig>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("CookieConfig", JAVAEE, "cookie-config", "cookie-configType")
                .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
                .text("name", |r| r.name.as_deref(), |r, v| r.name = Some(v))
                .text("domain", |r| r.domain.as_deref(), |r, v| r.domain = Some(v))
                .text("path", |r| r.path.as_deref(), |r, v| r.path = Some(v))
                .text(
                    "comment",
                    |r| r.comment.as_deref(),
                    |r, v| r.comment = Some(v),
                )
                .boolean("http-only", |r| r.http_only, |r, v| r.http_only = Some(v))
                .boolean("secure", |r| r.secure, |r, v| r.secure = Some(v))
                .int("max-age", |r| r.max_age, |r, v| r.max_age = Some(v))
                .build()
        })
    }
}

/// The ordered welcome-file list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WelcomeFileList {
    pub id: Option<String>,
    pub welcome_files: Vec<String>,
}

impl Descriptor for WelcomeFileList {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<WelcomeFileList>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "WelcomeFileList",
                JAVAEE,
                "welcome-file-list",
                "welcome-file-listType",
            )
            .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
            .texts(
                "welcome-file",
                |r| &r.welcome_files,
                |r, v| r.welcome_files.push(v),
                |r| r.welcome_files.clear(),
            )
            .build()
        })
    }
}

/// Maps an error code or exception type to a page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorPage {
    pub id: Option<String>,
    pub error_code: Option<i32>,
    pub exception_type: Option<String>,
    pub location: Option<String>,
}

impl Descriptor for ErrorPage {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<ErrorPage>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("ErrorPage", JAVAEE, "error-page", "error-pageType")
                .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
                .int(
                    "error-code",
                    |r| r.error_code,
                    |r, v| r.error_code = Some(v),
                )
                .text(
                    "exception-type",
                    |r| r.exception_type.as_deref(),
                    |r, v| r.exception_type = Some(v),
                )
                .text_required(
                    "location",
                    |r| r.location.as_deref(),
                    |r, v| r.location = Some(v),
                )
                .build()
        })
    }
}

/// Maps a file extension to a MIME type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MimeMapping {
    pub id: Option<String>,
    pub extension: Option<String>,
    pub mime_type: Option<String>,
}

impl Descriptor for MimeMapping {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<MimeMapping>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("MimeMapping", JAVAEE, "mime-mapping", "mime-mappingType")
                .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
                .text_required(
                    "extension",
                    |r| r.extension.as_deref(),
                    |r, v| r.extension = Some(v),
                )
                .text_required(
                    "mime-type",
                    |r| r.mime_type.as_deref(),
                    |r, v| r.mime_type = Some(v),
                )
                .build()
        })
    }
}

/// How users authenticate to the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginConfig {
    pub id: Option<String>,
    pub auth_method: Option<String>,
    pub realm_name: Option<String>,
    pub form_login_config: Option<FormLoginConfig>,
}

impl Descriptor for LoginConfig {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<LoginConfig>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new("LoginConfig", JAVAEE, "login-config", "login-configType")
                .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
                .text(
                    "auth-method",
                    |r| r.auth_method.as_deref(),
                    |r, v| r.auth_method = Some(v),
                )
                .text(
                    "realm-name",
                    |r| r.realm_name.as_deref(),
                    |r, v| r.realm_name = Some(v),
                )
                .element(
                    "form-login-config",
                    |r| r.form_login_config.as_ref(),
                    |r, v| r.form_login_config = v,
                )
                .build()
        })
    }
}

/// Login and error pages for form-based authentication.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormLoginConfig {
    pub id: Option<String>,
    pub form_login_page: Option<String>,
    pub form_error_page: Option<String>,
}

impl Descriptor for FormLoginConfig {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<FormLoginConfig>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new(
                "FormLoginConfig",
                JAVAEE,
                "form-login-config",
                "form-login-configType",
            )
            .id(|r: &Self| r.id.as_deref(), |r, v| r.id = Some(v))
            .text_required(
                "form-login-page",
                |r| r.form_login_page.as_deref(),
                |r, v| r.form_login_page = Some(v),
            )
            .text_required(
                "form-error-page",
                |r| r.form_error_page.as_deref(),
                |r, v| r.form_error_page = Some(v),
            )
            .build()
        })
    }
}
