//! Integration event bindings (`Launch_Integration_Event`,
//! `Get_Integration_Events`).
//!
//! Launching an integration creates an event; the event then moves through
//! background-process statuses (`Processing`, `Completed`, `Failed`, ...)
//! which the Get operation polls.

use serde::{Deserialize, Serialize};

use crate::common::{ResponseFilter, ResponseResults};
use crate::envelope::response_body;
use crate::reference::{
    IntegrationEventObject, IntegrationSystemObject, LaunchParameterObject, ObjectId,
    ProcessStatusObject, SeverityLevelObject,
};
use crate::schema::{FieldSpec, SchemaType};

/// ID type of process status references.
pub const PROCESS_STATUS_ID: &str = "Background_Process_Instance_Status_ID";

// =============================================================================
// Launch data
// =============================================================================

/// Value supplied for one launch parameter. Exactly one field is expected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchParameterValue {
    #[serde(rename = "Text", default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// xsd:date.
    #[serde(rename = "Date", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "Boolean", default, skip_serializing_if = "Option::is_none")]
    pub boolean: Option<bool>,
    /// xsd:decimal, kept as written.
    #[serde(rename = "Numeric", default, skip_serializing_if = "Option::is_none")]
    pub numeric: Option<String>,
}

impl SchemaType for LaunchParameterValue {
    const ELEMENT: &'static str = "Launch_Parameter_Value_Data";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::element("Text"),
        FieldSpec::element("Date"),
        FieldSpec::element("Boolean"),
        FieldSpec::element("Numeric").digits(26, 6),
    ];
}

/// A launch parameter and its value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchParameterData {
    #[serde(rename = "Launch_Parameter_Reference")]
    pub parameter: LaunchParameterObject,
    #[serde(rename = "Launch_Parameter_Value_Data")]
    pub value: LaunchParameterValue,
}

impl LaunchParameterData {
    /// Text-valued parameter identified by name under its integration system.
    pub fn text(system_id: &str, name: &str, value: impl Into<String>) -> Self {
        Self {
            parameter: Self::named(system_id, name),
            value: LaunchParameterValue {
                text: Some(value.into()),
                ..Default::default()
            },
        }
    }

    /// Date-valued parameter identified by name under its integration system.
    pub fn date(system_id: &str, name: &str, date: impl Into<String>) -> Self {
        Self {
            parameter: Self::named(system_id, name),
            value: LaunchParameterValue {
                date: Some(date.into()),
                ..Default::default()
            },
        }
    }

    fn named(system_id: &str, name: &str) -> LaunchParameterObject {
        LaunchParameterObject::from_id(
            ObjectId::new("Launch_Parameter_Name", name)
                .with_parent("Integration_System_ID", system_id),
        )
    }
}

impl SchemaType for LaunchParameterData {
    const ELEMENT: &'static str = "Integration_Launch_Parameter_Data";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::element("Launch_Parameter_Reference").required(),
        FieldSpec::element("Launch_Parameter_Value_Data").required(),
    ];
}

/// Parameters of an integration launch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchIntegrationEventData {
    #[serde(
        rename = "Integration_Launch_Parameter_Data",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub parameters: Vec<LaunchParameterData>,
    #[serde(rename = "Comment", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl SchemaType for LaunchIntegrationEventData {
    const ELEMENT: &'static str = "Launch_Integration_Event_Data";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::element("Integration_Launch_Parameter_Data").repeated(),
        FieldSpec::element("Comment"),
    ];
}

// =============================================================================
// Event data
// =============================================================================

/// A message logged by a running integration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationMessage {
    #[serde(
        rename = "Severity_Level_Reference",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub severity: Option<SeverityLevelObject>,
    #[serde(rename = "Summary", default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(rename = "Detail", default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl SchemaType for IntegrationMessage {
    const ELEMENT: &'static str = "Integration_Response_Message_Data";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::element("Severity_Level_Reference"),
        FieldSpec::element("Summary").max_length(1000),
        FieldSpec::element("Detail"),
    ];
}

/// State of one integration run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationEventData {
    #[serde(
        rename = "Integration_System_Reference",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub system: Option<IntegrationSystemObject>,
    /// xsd:dateTime.
    #[serde(rename = "Initiated_DateTime", default, skip_serializing_if = "Option::is_none")]
    pub initiated: Option<String>,
    /// xsd:dateTime, absent while the event is running.
    #[serde(rename = "Completed_DateTime", default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<String>,
    #[serde(
        rename = "Background_Process_Instance_Status_Reference",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<ProcessStatusObject>,
    /// xsd:decimal between 0 and 1.
    #[serde(rename = "Percent_Complete", default, skip_serializing_if = "Option::is_none")]
    pub percent_complete: Option<String>,
    #[serde(
        rename = "Integration_Response_Message_Data",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub messages: Vec<IntegrationMessage>,
}

impl IntegrationEventData {
    /// Status ID such as `Completed`, if reported.
    pub fn status_id(&self) -> Option<&str> {
        self.status.as_ref()?.id_of_type(PROCESS_STATUS_ID)
    }

    /// Whether the event has a completion timestamp.
    pub fn is_finished(&self) -> bool {
        self.completed.is_some()
    }
}

impl SchemaType for IntegrationEventData {
    const ELEMENT: &'static str = "Integration_Event_Data";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::element("Integration_System_Reference"),
        FieldSpec::element("Initiated_DateTime"),
        FieldSpec::element("Completed_DateTime"),
        FieldSpec::element("Background_Process_Instance_Status_Reference"),
        FieldSpec::element("Percent_Complete").digits(5, 4),
        FieldSpec::element("Integration_Response_Message_Data").repeated(),
    ];
}

/// An integration event as returned by Workday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationEvent {
    #[serde(
        rename = "Integration_Event_Reference",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub reference: Option<IntegrationEventObject>,
    #[serde(
        rename = "Integration_Event_Data",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<IntegrationEventData>,
}

impl SchemaType for IntegrationEvent {
    const ELEMENT: &'static str = "Integration_Event";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::element("Integration_Event_Reference"),
        FieldSpec::element("Integration_Event_Data"),
    ];
}

// =============================================================================
// Launch_Integration_Event
// =============================================================================

/// `Launch_Integration_Event_Request`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Launch_Integration_Event_Request")]
pub struct LaunchIntegrationEventRequest {
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "Integration_System_Reference")]
    pub system: IntegrationSystemObject,
    #[serde(
        rename = "Launch_Integration_Event_Data",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<LaunchIntegrationEventData>,
}

impl LaunchIntegrationEventRequest {
    /// Launch the given system with no parameters.
    pub fn new(system: IntegrationSystemObject) -> Self {
        Self {
            version: None,
            system,
            data: None,
        }
    }

    /// Append a launch parameter.
    pub fn with_parameter(mut self, parameter: LaunchParameterData) -> Self {
        self.data.get_or_insert_with(Default::default).parameters.push(parameter);
        self
    }
}

impl SchemaType for LaunchIntegrationEventRequest {
    const ELEMENT: &'static str = "Launch_Integration_Event_Request";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::attribute("version"),
        FieldSpec::element("Integration_System_Reference").required(),
        FieldSpec::element("Launch_Integration_Event_Data"),
    ];
}

/// `Launch_Integration_Event_Response`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Launch_Integration_Event_Response")]
pub struct LaunchIntegrationEventResponse {
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "Integration_Event", default, skip_serializing_if = "Option::is_none")]
    pub event: Option<IntegrationEvent>,
}

impl SchemaType for LaunchIntegrationEventResponse {
    const ELEMENT: &'static str = "Launch_Integration_Event_Response";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::attribute("version"),
        FieldSpec::element("Integration_Event"),
    ];
}

response_body!(
    /// SOAP body of a `Launch_Integration_Event` reply.
    LaunchIntegrationEventBody => "Launch_Integration_Event_Response",
    LaunchIntegrationEventResponse
);

// =============================================================================
// Get_Integration_Events
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationEventRequestReferences {
    #[serde(rename = "Integration_Event_Reference", default)]
    pub references: Vec<IntegrationEventObject>,
}

impl SchemaType for IntegrationEventRequestReferences {
    const ELEMENT: &'static str = "Integration_Event_Request_References";
    const FIELDS: &'static [FieldSpec] =
        &[FieldSpec::element("Integration_Event_Reference").required().repeated()];
}

/// Search criteria for events: by system and by launch time window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationEventRequestCriteria {
    #[serde(
        rename = "Integration_System_Reference",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub systems: Vec<IntegrationSystemObject>,
    /// xsd:dateTime.
    #[serde(rename = "Sent_After", default, skip_serializing_if = "Option::is_none")]
    pub sent_after: Option<String>,
    /// xsd:dateTime.
    #[serde(rename = "Sent_Before", default, skip_serializing_if = "Option::is_none")]
    pub sent_before: Option<String>,
}

impl SchemaType for IntegrationEventRequestCriteria {
    const ELEMENT: &'static str = "Integration_Event_Request_Criteria";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::element("Integration_System_Reference").repeated(),
        FieldSpec::element("Sent_After"),
        FieldSpec::element("Sent_Before"),
    ];
}

/// `Get_Integration_Events_Request`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Get_Integration_Events_Request")]
pub struct GetIntegrationEventsRequest {
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "Request_References", default, skip_serializing_if = "Option::is_none")]
    pub request_references: Option<IntegrationEventRequestReferences>,
    #[serde(rename = "Request_Criteria", default, skip_serializing_if = "Option::is_none")]
    pub request_criteria: Option<IntegrationEventRequestCriteria>,
    #[serde(rename = "Response_Filter", default, skip_serializing_if = "Option::is_none")]
    pub response_filter: Option<ResponseFilter>,
}

impl SchemaType for GetIntegrationEventsRequest {
    const ELEMENT: &'static str = "Get_Integration_Events_Request";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::attribute("version"),
        FieldSpec::element("Request_References"),
        FieldSpec::element("Request_Criteria"),
        FieldSpec::element("Response_Filter"),
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationEventResponseData {
    #[serde(rename = "Integration_Event", default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<IntegrationEvent>,
}

/// `Get_Integration_Events_Response`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Get_Integration_Events_Response")]
pub struct GetIntegrationEventsResponse {
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "Request_References", default, skip_serializing_if = "Option::is_none")]
    pub request_references: Option<IntegrationEventRequestReferences>,
    #[serde(rename = "Request_Criteria", default, skip_serializing_if = "Option::is_none")]
    pub request_criteria: Option<IntegrationEventRequestCriteria>,
    #[serde(rename = "Response_Filter", default, skip_serializing_if = "Option::is_none")]
    pub response_filter: Option<ResponseFilter>,
    #[serde(rename = "Response_Results", default, skip_serializing_if = "Option::is_none")]
    pub response_results: Option<ResponseResults>,
    #[serde(rename = "Response_Data", default, skip_serializing_if = "Option::is_none")]
    pub response_data: Option<IntegrationEventResponseData>,
}

impl GetIntegrationEventsResponse {
    pub fn events(&self) -> &[IntegrationEvent] {
        self.response_data
            .as_ref()
            .map(|d| d.events.as_slice())
            .unwrap_or_default()
    }
}

impl SchemaType for GetIntegrationEventsResponse {
    const ELEMENT: &'static str = "Get_Integration_Events_Response";
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
    /// SOAP body of a `Get_Integration_Events` reply.
    GetIntegrationEventsBody => "Get_Integration_Events_Response",
    GetIntegrationEventsResponse
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::Envelope;

    #[test]
    fn test_launch_request_with_parameters() {
        let request = LaunchIntegrationEventRequest::new(IntegrationSystemObject::from_id(
            ObjectId::new("Integration_System_ID", "INT_PAYROLL_EXPORT"),
        ))
        .with_parameter(LaunchParameterData::date(
            "INT_PAYROLL_EXPORT",
            "As_Of_Date",
            "2024-03-31",
        ))
        .with_parameter(LaunchParameterData::text(
            "INT_PAYROLL_EXPORT",
            "Pay_Group",
            "US_BIWEEKLY",
        ));

        let data = request.data.as_ref().unwrap();
        assert_eq!(data.parameters.len(), 2);
        assert_eq!(data.parameters[0].value.date.as_deref(), Some("2024-03-31"));

        let id = &data.parameters[1].parameter.ids[0];
        assert_eq!(id.parent_id.as_deref(), Some("INT_PAYROLL_EXPORT"));
        assert_eq!(id.value, "Pay_Group");

        let xml = quick_xml::se::to_string(&request).unwrap();
        assert!(xml.starts_with("<Launch_Integration_Event_Request"));
        assert!(xml.contains(r#"parent_type="Integration_System_ID""#));
        assert!(xml.contains("<Text>US_BIWEEKLY</Text>"));
    }

    #[test]
    fn test_launch_response() {
        let xml = r#"<Envelope>
            <Body>
                <Launch_Integration_Event_Response version="v42.0">
                    <Integration_Event>
                        <Integration_Event_Reference>
                            <ID type="WID">0c1d2e3f4a5b10003c4d5e6f7a8b0000</ID>
                        </Integration_Event_Reference>
                        <Integration_Event_Data>
                            <Integration_System_Reference>
                                <ID type="Integration_System_ID">INT_PAYROLL_EXPORT</ID>
                            </Integration_System_Reference>
                            <Initiated_DateTime>2024-04-01T02:00:00.000-07:00</Initiated_DateTime>
                            <Background_Process_Instance_Status_Reference>
                                <ID type="Background_Process_Instance_Status_ID">Processing</ID>
                            </Background_Process_Instance_Status_Reference>
                            <Percent_Complete>0</Percent_Complete>
                        </Integration_Event_Data>
                    </Integration_Event>
                </Launch_Integration_Event_Response>
            </Body>
        </Envelope>"#;

        let envelope: Envelope<LaunchIntegrationEventBody> = quick_xml::de::from_str(xml).unwrap();
        let event = envelope.body.into_result().unwrap().event.unwrap();
        let data = event.data.unwrap();

        assert_eq!(
            event.reference.unwrap().wid(),
            Some("0c1d2e3f4a5b10003c4d5e6f7a8b0000")
        );
        assert_eq!(data.status_id(), Some("Processing"));
        assert!(!data.is_finished());
        assert!(data.messages.is_empty());
    }

    #[test]
    fn test_get_integration_events_response() {
        let xml = r#"<Body>
            <Get_Integration_Events_Response>
                <Response_Results>
                    <Total_Results>1</Total_Results>
                    <Total_Pages>1</Total_Pages>
                    <Page_Results>1</Page_Results>
                    <Page>1</Page>
                </Response_Results>
                <Response_Data>
                    <Integration_Event>
                        <Integration_Event_Data>
                            <Initiated_DateTime>2024-04-01T02:00:00.000-07:00</Initiated_DateTime>
                            <Completed_DateTime>2024-04-01T02:03:12.000-07:00</Completed_DateTime>
                            <Background_Process_Instance_Status_Reference>
                                <ID type="Background_Process_Instance_Status_ID">Completed</ID>
                            </Background_Process_Instance_Status_Reference>
                            <Percent_Complete>1</Percent_Complete>
                            <Integration_Response_Message_Data>
                                <Severity_Level_Reference>
                                    <ID type="Severity_Level_ID">Warning</ID>
                                </Severity_Level_Reference>
                                <Summary>2 workers skipped: missing bank account</Summary>
                            </Integration_Response_Message_Data>
                        </Integration_Event_Data>
                    </Integration_Event>
                </Response_Data>
            </Get_Integration_Events_Response>
        </Body>"#;

        let body: GetIntegrationEventsBody = quick_xml::de::from_str(xml).unwrap();
        let response = body.into_result().unwrap();
        let data = response.events()[0].data.as_ref().unwrap();

        assert_eq!(data.status_id(), Some("Completed"));
        assert!(data.is_finished());
        assert_eq!(data.percent_complete.as_deref(), Some("1"));
        assert_eq!(
            data.messages[0]
                .severity
                .as_ref()
                .unwrap()
                .id_of_type("Severity_Level_ID"),
            Some("Warning")
        );
    }

    #[test]
    fn test_event_schema() {
        assert_eq!(
            LaunchIntegrationEventRequest::required_fields(),
            vec!["Integration_System_Reference"]
        );
        assert_eq!(
            LaunchParameterValue::field("Numeric").unwrap().fraction_digits,
            Some(6)
        );
    }
}
