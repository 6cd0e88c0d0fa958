//! Sequence generator bindings (`Get_Sequence_Generators`,
//! `Put_Sequence_Generator`).

use serde::{Deserialize, Serialize};

use crate::common::{ResponseFilter, ResponseResults};
use crate::envelope::response_body;
use crate::reference::{
    RestartPeriodObject, SequenceGeneratorObject, SequenceGeneratorUsageObject, TimeZoneObject,
};
use crate::schema::{FieldSpec, SchemaType};

// =============================================================================
// Data
// =============================================================================

/// Settings of one sequence generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceGeneratorData {
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Sequence_Name")]
    pub sequence_name: String,
    /// Pattern such as `JE-[YY]-[Sequence]`.
    #[serde(rename = "Format_Syntax")]
    pub format_syntax: String,
    #[serde(rename = "Start_Number")]
    pub start_number: u64,
    #[serde(rename = "Increment_By")]
    pub increment_by: u64,
    #[serde(rename = "Padding_Digits", default, skip_serializing_if = "Option::is_none")]
    pub padding_digits: Option<u8>,
    #[serde(
        rename = "Restart_Period_Reference",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub restart_period: Option<RestartPeriodObject>,
    #[serde(rename = "Time_Zone_Reference", default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<TimeZoneObject>,
    #[serde(
        rename = "Sequence_Generator_Usage_Reference",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub usages: Vec<SequenceGeneratorUsageObject>,
    #[serde(
        rename = "Default_Sequence_Generator",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub default_generator: Option<bool>,
    #[serde(rename = "Inactive", default, skip_serializing_if = "Option::is_none")]
    pub inactive: Option<bool>,
}

impl SchemaType for SequenceGeneratorData {
    const ELEMENT: &'static str = "Sequence_Generator_Data";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::element("ID"),
        FieldSpec::element("Sequence_Name").required().max_length(100),
        FieldSpec::element("Format_Syntax").required().max_length(100),
        FieldSpec::element("Start_Number").required().digits(12, 0),
        FieldSpec::element("Increment_By").required().digits(12, 0),
        FieldSpec::element("Padding_Digits").digits(2, 0),
        FieldSpec::element("Restart_Period_Reference"),
        FieldSpec::element("Time_Zone_Reference"),
        FieldSpec::element("Sequence_Generator_Usage_Reference").repeated(),
        FieldSpec::element("Default_Sequence_Generator"),
        FieldSpec::element("Inactive"),
    ];
}

/// A sequence generator as returned by Workday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceGenerator {
    #[serde(
        rename = "Sequence_Generator_Reference",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub reference: Option<SequenceGeneratorObject>,
    #[serde(
        rename = "Sequence_Generator_Data",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<SequenceGeneratorData>,
}

impl SchemaType for SequenceGenerator {
    const ELEMENT: &'static str = "Sequence_Generator";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::element("Sequence_Generator_Reference"),
        FieldSpec::element("Sequence_Generator_Data"),
    ];
}

// =============================================================================
// Get_Sequence_Generators
// =============================================================================

/// Specific sequence generators to return.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceGeneratorRequestReferences {
    #[serde(rename = "Sequence_Generator_Reference", default)]
    pub references: Vec<SequenceGeneratorObject>,
}

impl SchemaType for SequenceGeneratorRequestReferences {
    const ELEMENT: &'static str = "Sequence_Generator_Request_References";
    const FIELDS: &'static [FieldSpec] =
        &[FieldSpec::element("Sequence_Generator_Reference").required().repeated()];
}

/// Search criteria when no references are given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceGeneratorRequestCriteria {
    #[serde(
        rename = "Sequence_Generator_Usage_Reference",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub usages: Vec<SequenceGeneratorUsageObject>,
    #[serde(rename = "Include_Inactive", default, skip_serializing_if = "Option::is_none")]
    pub include_inactive: Option<bool>,
}

impl SchemaType for SequenceGeneratorRequestCriteria {
    const ELEMENT: &'static str = "Sequence_Generator_Request_Criteria";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::element("Sequence_Generator_Usage_Reference").repeated(),
        FieldSpec::element("Include_Inactive"),
    ];
}

/// `Get_Sequence_Generators_Request`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Get_Sequence_Generators_Request")]
pub struct GetSequenceGeneratorsRequest {
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "Request_References", default, skip_serializing_if = "Option::is_none")]
    pub request_references: Option<SequenceGeneratorRequestReferences>,
    #[serde(rename = "Request_Criteria", default, skip_serializing_if = "Option::is_none")]
    pub request_criteria: Option<SequenceGeneratorRequestCriteria>,
    #[serde(rename = "Response_Filter", default, skip_serializing_if = "Option::is_none")]
    pub response_filter: Option<ResponseFilter>,
}

impl SchemaType for GetSequenceGeneratorsRequest {
    const ELEMENT: &'static str = "Get_Sequence_Generators_Request";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::attribute("version"),
        FieldSpec::element("Request_References"),
        FieldSpec::element("Request_Criteria"),
        FieldSpec::element("Response_Filter"),
    ];
}

/// Payload of `Get_Sequence_Generators_Response`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceGeneratorResponseData {
    #[serde(rename = "Sequence_Generator", default, skip_serializing_if = "Vec::is_empty")]
    pub generators: Vec<SequenceGenerator>,
}

/// `Get_Sequence_Generators_Response`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Get_Sequence_Generators_Response")]
pub struct GetSequenceGeneratorsResponse {
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "Request_References", default, skip_serializing_if = "Option::is_none")]
    pub request_references: Option<SequenceGeneratorRequestReferences>,
    #[serde(rename = "Response_Filter", default, skip_serializing_if = "Option::is_none")]
    pub response_filter: Option<ResponseFilter>,
    #[serde(rename = "Response_Results", default, skip_serializing_if = "Option::is_none")]
    pub response_results: Option<ResponseResults>,
    #[serde(rename = "Response_Data", default, skip_serializing_if = "Option::is_none")]
    pub response_data: Option<SequenceGeneratorResponseData>,
}

impl GetSequenceGeneratorsResponse {
    /// Returned generators, empty when the response carried no data.
    pub fn generators(&self) -> &[SequenceGenerator] {
        self.response_data
            .as_ref()
            .map(|d| d.generators.as_slice())
            .unwrap_or_default()
    }
}

impl SchemaType for GetSequenceGeneratorsResponse {
    const ELEMENT: &'static str = "Get_Sequence_Generators_Response";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::attribute("version"),
        FieldSpec::element("Request_References"),
        FieldSpec::element("Response_Filter"),
        FieldSpec::element("Response_Results"),
        FieldSpec::element("Response_Data"),
    ];
}

response_body!(
    /// SOAP body of a `Get_Sequence_Generators` reply.
    GetSequenceGeneratorsBody => "Get_Sequence_Generators_Response",
    GetSequenceGeneratorsResponse
);

// =============================================================================
// Put_Sequence_Generator
// =============================================================================

/// `Put_Sequence_Generator_Request`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Put_Sequence_Generator_Request")]
pub struct PutSequenceGeneratorRequest {
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Reject the request if the generator already exists.
    #[serde(rename = "@Add_Only", default, skip_serializing_if = "Option::is_none")]
    pub add_only: Option<bool>,
    #[serde(
        rename = "Sequence_Generator_Reference",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub reference: Option<SequenceGeneratorObject>,
    #[serde(rename = "Sequence_Generator_Data")]
    pub data: SequenceGeneratorData,
}

impl SchemaType for PutSequenceGeneratorRequest {
    const ELEMENT: &'static str = "Put_Sequence_Generator_Request";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::attribute("version"),
        FieldSpec::attribute("Add_Only"),
        FieldSpec::element("Sequence_Generator_Reference"),
        FieldSpec::element("Sequence_Generator_Data").required(),
    ];
}

/// `Put_Sequence_Generator_Response`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Put_Sequence_Generator_Response")]
pub struct PutSequenceGeneratorResponse {
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(
        rename = "Sequence_Generator_Reference",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub reference: Option<SequenceGeneratorObject>,
}

impl SchemaType for PutSequenceGeneratorResponse {
    const ELEMENT: &'static str = "Put_Sequence_Generator_Response";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::attribute("version"),
        FieldSpec::element("Sequence_Generator_Reference"),
    ];
}

response_body!(
    /// SOAP body of a `Put_Sequence_Generator` reply.
    PutSequenceGeneratorBody => "Put_Sequence_Generator_Response",
    PutSequenceGeneratorResponse
);
