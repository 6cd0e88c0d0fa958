//! Workday Integrations bindings driven through quick-xml.

use busbar_saas_api::workday::envelope::{Envelope, Header, WorkdayCommonHeader};
use busbar_saas_api::workday::event::{
    GetIntegrationEventsBody, GetIntegrationEventsRequest, IntegrationEventRequestCriteria,
    LaunchIntegrationEventRequest, LaunchParameterData,
};
use busbar_saas_api::workday::reference::IntegrationSystemObject;
use busbar_saas_api::workday::sequence::{
    PutSequenceGeneratorBody, PutSequenceGeneratorRequest, SequenceGeneratorData,
};
use busbar_saas_api::workday::{operation, service_url, ObjectId, ResponseFilter, SchemaType};

#[derive(serde::Serialize)]
struct LaunchBody {
    #[serde(rename = "Launch_Integration_Event_Request")]
    request: LaunchIntegrationEventRequest,
}

#[derive(serde::Serialize)]
struct GetEventsBody {
    #[serde(rename = "Get_Integration_Events_Request")]
    request: GetIntegrationEventsRequest,
}

fn payroll_system() -> IntegrationSystemObject {
    IntegrationSystemObject::from_id(ObjectId::new("Integration_System_ID", "INT_PAYROLL_EXPORT"))
}

#[test]
fn test_launch_envelope_matches_operation() {
    let op = operation("Launch_Integration_Event").unwrap();

    let request = LaunchIntegrationEventRequest {
        version: Some(busbar_saas_api::workday::DEFAULT_VERSION.to_string()),
        ..LaunchIntegrationEventRequest::new(payroll_system())
    }
    .with_parameter(LaunchParameterData::date(
        "INT_PAYROLL_EXPORT",
        "As_Of_Date",
        "2024-03-31",
    ));

    let envelope = Envelope::new(LaunchBody { request }).with_header(Header {
        common: Some(WorkdayCommonHeader {
            include_reference_descriptors: Some(true),
        }),
    });

    let xml = quick_xml::se::to_string(&envelope).unwrap();

    assert!(xml.starts_with("<Envelope>"));
    assert!(xml.contains(&format!("<{} version=\"v42.0\">", op.input)));
    assert!(xml.contains(
        "<Include_Reference_Descriptors_In_Response>true</Include_Reference_Descriptors_In_Response>"
    ));
    assert!(xml.contains("<Date>2024-03-31</Date>"));
}

#[test]
fn test_get_events_request_with_criteria() {
    let request = GetIntegrationEventsRequest {
        request_criteria: Some(IntegrationEventRequestCriteria {
            systems: vec![payroll_system()],
            sent_after: Some("2024-04-01T00:00:00Z".to_string()),
            sent_before: None,
        }),
        response_filter: Some(ResponseFilter::page(1, 50)),
        ..Default::default()
    };

    let xml = quick_xml::se::to_string(&Envelope::new(GetEventsBody { request })).unwrap();

    assert!(xml.contains("<Sent_After>2024-04-01T00:00:00Z</Sent_After>"));
    assert!(!xml.contains("Sent_Before"));
    assert!(xml.contains("<Page>1</Page><Count>50</Count>"));
}

#[test]
fn test_validation_fault_from_put() {
    let xml = r#"<Envelope xmlns="http://schemas.xmlsoap.org/soap/envelope/">
        <Body>
            <Fault>
                <faultcode>SOAP-ENV:Client.validationError</faultcode>
                <faultstring>Validation error occurred. Element Content 'Start_Number' is required</faultstring>
                <detail>
                    <Validation_Fault>
                        <Validation_Error>
                            <Message>Element Content 'Start_Number' is required</Message>
                            <Xpath>/Put_Sequence_Generator_Request[1]/Sequence_Generator_Data[1]</Xpath>
                        </Validation_Error>
                    </Validation_Fault>
                </detail>
            </Fault>
        </Body>
    </Envelope>"#;

    let envelope: Envelope<PutSequenceGeneratorBody> = quick_xml::de::from_str(xml).unwrap();
    let fault = envelope.body.into_result().unwrap_err();

    let errors = fault.validation_errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0]
        .xpath
        .as_deref()
        .unwrap()
        .starts_with(&format!("/{}", PutSequenceGeneratorRequest::ELEMENT)));
    assert!(SequenceGeneratorData::required_fields().contains(&"Start_Number"));
}

#[test]
fn test_empty_events_response() {
    let xml = r#"<Envelope>
        <Body>
            <Get_Integration_Events_Response version="v42.0">
                <Response_Results>
                    <Total_Results>0</Total_Results>
                    <Total_Pages>0</Total_Pages>
                    <Page_Results>0</Page_Results>
                    <Page>0</Page>
                </Response_Results>
            </Get_Integration_Events_Response>
        </Body>
    </Envelope>"#;

    let envelope: Envelope<GetIntegrationEventsBody> = quick_xml::de::from_str(xml).unwrap();
    let response = envelope.body.into_result().unwrap();

    assert!(response.events().is_empty());
    assert!(!response.response_results.unwrap().has_more());
}

#[test]
fn test_service_url_for_operation() {
    let url = service_url("wd2-impl-services1.workday.com", "acme_preview", None);
    assert!(url.ends_with("/Integrations/v42.0"));
    assert_eq!(
        operation("Get_Integration_Events").unwrap().soap_action,
        "Get_Integration_Events"
    );
}
