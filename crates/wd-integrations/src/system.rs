//! Integration system bindings (`Get_Integration_Systems`,
//! `Put_Integration_System`).

use serde::{Deserialize, Serialize};

use crate::common::{ResponseFilter, ResponseResults};
use crate::envelope::response_body;
use crate::reference::{IntegrationSystemObject, IntegrationTemplateObject};
use crate::schema::{FieldSpec, SchemaType};
use crate::transport::TransportProtocolData;

// =============================================================================
// Data
// =============================================================================

/// Definition of an integration system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationSystemData {
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Integration_System_Name")]
    pub name: String,
    #[serde(rename = "Comment", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(
        rename = "Integration_Template_Reference",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub template: Option<IntegrationTemplateObject>,
    #[serde(
        rename = "Integration_Transport_Protocol_Data",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub transport: Option<TransportProtocolData>,
}

impl SchemaType for IntegrationSystemData {
    const ELEMENT: &'static str = "Integration_System_Data";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::element("ID"),
        FieldSpec::element("Integration_System_Name").required().max_length(255),
        FieldSpec::element("Comment"),
        FieldSpec::element("Integration_Template_Reference"),
        FieldSpec::element("Integration_Transport_Protocol_Data"),
    ];
}

/// An integration system as returned by Workday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationSystem {
    #[serde(
        rename = "Integration_System_Reference",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub reference: Option<IntegrationSystemObject>,
    #[serde(
        rename = "Integration_System_Data",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<IntegrationSystemData>,
}

impl SchemaType for IntegrationSystem {
    const ELEMENT: &'static str = "Integration_System";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::element("Integration_System_Reference"),
        FieldSpec::element("Integration_System_Data"),
    ];
}

// =============================================================================
// Get_Integration_Systems
// =============================================================================

/// Specific integration systems to return.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationSystemRequestReferences {
    #[serde(rename = "Integration_System_Reference", default)]
    pub references: Vec<IntegrationSystemObject>,
}

impl SchemaType for IntegrationSystemRequestReferences {
    const ELEMENT: &'static str = "Integration_System_Request_References";
    const FIELDS: &'static [FieldSpec] =
        &[FieldSpec::element("Integration_System_Reference").required().repeated()];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationSystemRequestCriteria {
    /// Substring match on the system name.
    #[serde(
        rename = "Integration_System_Name",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        rename = "Integration_Template_Reference",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub templates: Vec<IntegrationTemplateObject>,
}

impl SchemaType for IntegrationSystemRequestCriteria {
    const ELEMENT: &'static str = "Integration_System_Request_Criteria";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::element("Integration_System_Name").max_length(255),
        FieldSpec::element("Integration_Template_Reference").repeated(),
    ];
}

/// `Get_Integration_Systems_Request`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Get_Integration_Systems_Request")]
pub struct GetIntegrationSystemsRequest {
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "Request_References", default, skip_serializing_if = "Option::is_none")]
    pub request_references: Option<IntegrationSystemRequestReferences>,
    #[serde(rename = "Request_Criteria", default, skip_serializing_if = "Option::is_none")]
    pub request_criteria: Option<IntegrationSystemRequestCriteria>,
    #[serde(rename = "Response_Filter", default, skip_serializing_if = "Option::is_none")]
    pub response_filter: Option<ResponseFilter>,
}

impl GetIntegrationSystemsRequest {
    /// Request the given systems by reference.
    pub fn by_reference(references: Vec<IntegrationSystemObject>) -> Self {
        Self {
            request_references: Some(IntegrationSystemRequestReferences { references }),
            ..Default::default()
        }
    }
}

impl SchemaType for GetIntegrationSystemsRequest {
    const ELEMENT: &'static str = "Get_Integration_Systems_Request";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::attribute("version"),
        FieldSpec::element("Request_References"),
        FieldSpec::element("Request_Criteria"),
        FieldSpec::element("Response_Filter"),
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationSystemResponseData {
    #[serde(rename = "Integration_System", default, skip_serializing_if = "Vec::is_empty")]
    pub systems: Vec<IntegrationSystem>,
}

/// `Get_Integration_Systems_Response`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Get_Integration_Systems_Response")]
pub struct GetIntegrationSystemsResponse {
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "Request_References", default, skip_serializing_if = "Option::is_none")]
    pub request_references: Option<IntegrationSystemRequestReferences>,
    #[serde(rename = "Request_Criteria", default, skip_serializing_if = "Option::is_none")]
    pub request_criteria: Option<IntegrationSystemRequestCriteria>,
    #[serde(rename = "Response_Filter", default, skip_serializing_if = "Option::is_none")]
    pub response_filter: Option<ResponseFilter>,
    #[serde(rename = "Response_Results", default, skip_serializing_if = "Option::is_none")]
    pub response_results: Option<ResponseResults>,
    #[serde(rename = "Response_Data", default, skip_serializing_if = "Option::is_none")]
    pub response_data: Option<IntegrationSystemResponseData>,
}

impl GetIntegrationSystemsResponse {
    pub fn systems(&self) -> &[IntegrationSystem] {
        self.response_data
            .as_ref()
            .map(|d| d.systems.as_slice())
            .unwrap_or_default()
    }
}

impl SchemaType for GetIntegrationSystemsResponse {
    const ELEMENT: &'static str = "Get_Integration_Systems_Response";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::attribute("version"),
        FieldSpec::element("Request_References"),
        FieldSpec::element("Request_Criteria"),
        FieldSpec::element("Response_Filter"),
        FieldSpec::element("Response_Results"),
        FieldSpec::element("Response_Data"),
    ];
}

response_body!(
    /// SOAP body of a `Get_Integration_Systems` reply.
    GetIntegrationSystemsBody => "Get_Integration_Systems_Response",
    GetIntegrationSystemsResponse
);

// =============================================================================
// Put_Integration_System
// =============================================================================

/// `Put_Integration_System_Request`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Put_Integration_System_Request")]
pub struct PutIntegrationSystemRequest {
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "@Add_Only", default, skip_serializing_if = "Option::is_none")]
    pub add_only: Option<bool>,
    #[serde(
        rename = "Integration_System_Reference",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub reference: Option<IntegrationSystemObject>,
    #[serde(rename = "Integration_System_Data")]
    pub data: IntegrationSystemData,
}

impl SchemaType for PutIntegrationSystemRequest {
    const ELEMENT: &'static str = "Put_Integration_System_Request";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::attribute("version"),
        FieldSpec::attribute("Add_Only"),
        FieldSpec::element("Integration_System_Reference"),
        FieldSpec::element("Integration_System_Data").required(),
    ];
}

/// `Put_Integration_System_Response`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Put_Integration_System_Response")]
pub struct PutIntegrationSystemResponse {
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(
        rename = "Integration_System_Reference",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub reference: Option<IntegrationSystemObject>,
}

impl SchemaType for PutIntegrationSystemResponse {
    const ELEMENT: &'static str = "Put_Integration_System_Response";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::attribute("version"),
        FieldSpec::element("Integration_System_Reference"),
    ];
}

response_body!(
    /// SOAP body of a `Put_Integration_System` reply.
    PutIntegrationSystemBody => "Put_Integration_System_Response",
    PutIntegrationSystemResponse
);
