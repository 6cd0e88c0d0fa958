//! Integration transport protocol configurations.
//!
//! An integration system delivers its output through at most one transport
//! of each kind. Password fields are redacted in Debug output.

use serde::{Deserialize, Serialize};

use crate::reference::AuthenticationTypeObject;
use crate::schema::{FieldSpec, SchemaType};

/// Transport configuration of an integration system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportProtocolData {
    #[serde(rename = "SFTP_Data", default, skip_serializing_if = "Option::is_none")]
    pub sftp: Option<SftpTransportData>,
    #[serde(rename = "HTTP_Data", default, skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpTransportData>,
    #[serde(rename = "Email_Data", default, skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailTransportData>,
    #[serde(
        rename = "Workday_Attachment_Data",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub attachment: Option<AttachmentTransportData>,
}

impl TransportProtocolData {
    /// Names of the transports that are configured.
    pub fn configured(&self) -> Vec<&'static str> {
        let mut kinds = Vec::new();
        if self.sftp.is_some() {
            kinds.push(SftpTransportData::ELEMENT);
        }
        if self.http.is_some() {
            kinds.push(HttpTransportData::ELEMENT);
        }
        if self.email.is_some() {
            kinds.push(EmailTransportData::ELEMENT);
        }
        if self.attachment.is_some() {
            kinds.push(AttachmentTransportData::ELEMENT);
        }
        kinds
    }
}

impl SchemaType for TransportProtocolData {
    const ELEMENT: &'static str = "Integration_Transport_Protocol_Data";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::element("SFTP_Data"),
        FieldSpec::element("HTTP_Data"),
        FieldSpec::element("Email_Data"),
        FieldSpec::element("Workday_Attachment_Data"),
    ];
}

/// Delivery to an SFTP server.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SftpTransportData {
    /// `sftp://host:port` address.
    #[serde(rename = "SFTP_Address")]
    pub address: String,
    #[serde(rename = "Directory", default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    /// Upload under a temporary name and rename once complete.
    #[serde(rename = "Use_Temp_File", default, skip_serializing_if = "Option::is_none")]
    pub use_temp_file: Option<bool>,
    #[serde(rename = "User_ID", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(rename = "Password", default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl std::fmt::Debug for SftpTransportData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SftpTransportData")
            .field("address", &self.address)
            .field("directory", &self.directory)
            .field("use_temp_file", &self.use_temp_file)
            .field("user_id", &self.user_id)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl SchemaType for SftpTransportData {
    const ELEMENT: &'static str = "SFTP_Data";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::element("SFTP_Address").required().max_length(255),
        FieldSpec::element("Directory").max_length(255),
        FieldSpec::element("Use_Temp_File"),
        FieldSpec::element("User_ID").max_length(100),
        FieldSpec::element("Password").max_length(100),
    ];
}

/// Delivery by HTTP(S) request.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpTransportData {
    #[serde(rename = "Endpoint_URL")]
    pub endpoint_url: String,
    /// `POST` or `PUT`.
    #[serde(rename = "HTTP_Method", default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(
        rename = "Authentication_Type_Reference",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub authentication_type: Option<AuthenticationTypeObject>,
    #[serde(rename = "User_ID", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(rename = "Password", default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl std::fmt::Debug for HttpTransportData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransportData")
            .field("endpoint_url", &self.endpoint_url)
            .field("method", &self.method)
            .field("authentication_type", &self.authentication_type)
            .field("user_id", &self.user_id)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl SchemaType for HttpTransportData {
    const ELEMENT: &'static str = "HTTP_Data";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::element("Endpoint_URL").required().max_length(2000),
        FieldSpec::element("HTTP_Method").max_length(10),
        FieldSpec::element("Authentication_Type_Reference"),
        FieldSpec::element("User_ID").max_length(100),
        FieldSpec::element("Password").max_length(100),
    ];
}

/// Delivery as an email attachment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailTransportData {
    #[serde(rename = "To_Address", default)]
    pub to: Vec<String>,
    #[serde(rename = "Cc_Address", default, skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<String>,
    #[serde(rename = "Subject", default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(rename = "Body", default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl SchemaType for EmailTransportData {
    const ELEMENT: &'static str = "Email_Data";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::element("To_Address").required().repeated().max_length(255),
        FieldSpec::element("Cc_Address").repeated().max_length(255),
        FieldSpec::element("Subject").max_length(255),
        FieldSpec::element("Body"),
    ];
}

/// Output kept as a Workday attachment on the integration event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentTransportData {
    #[serde(
        rename = "Document_Retention_Days",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub retention_days: Option<u16>,
}

impl SchemaType for AttachmentTransportData {
    const ELEMENT: &'static str = "Workday_Attachment_Data";
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::element("Document_Retention_Days").digits(4, 0)];
}
