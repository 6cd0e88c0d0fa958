//! SOAP envelope and fault wrappers.

use serde::{Deserialize, Serialize};

use crate::schema::{FieldSpec, SchemaType, SOAP_ENV_NAMESPACE};

/// SOAP 1.1 envelope around a body payload `B`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Envelope")]
pub struct Envelope<B> {
    #[serde(rename = "Header", default, skip_serializing_if = "Option::is_none")]
    pub header: Option<Header>,
    #[serde(rename = "Body")]
    pub body: B,
}

impl<B> Envelope<B> {
    /// Wrap a body without a header.
    pub fn new(body: B) -> Self {
        Self { header: None, body }
    }

    /// Attach a header.
    pub fn with_header(mut self, header: Header) -> Self {
        self.header = Some(header);
        self
    }
}

/// SOAP header blocks understood by Workday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    #[serde(
        rename = "Workday_Common_Header",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub common: Option<WorkdayCommonHeader>,
}

/// `Workday_Common_Header`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkdayCommonHeader {
    /// Ask Workday to populate `Descriptor` attributes on references.
    #[serde(
        rename = "Include_Reference_Descriptors_In_Response",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub include_reference_descriptors: Option<bool>,
}

impl SchemaType for WorkdayCommonHeader {
    const ELEMENT: &'static str = "Workday_Common_Header";
    const FIELDS: &'static [FieldSpec] =
        &[FieldSpec::element("Include_Reference_Descriptors_In_Response")];
}

/// SOAP fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Fault")]
pub struct SoapFault {
    #[serde(rename = "faultcode")]
    pub fault_code: String,
    #[serde(rename = "faultstring")]
    pub fault_string: String,
    #[serde(rename = "detail", default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<FaultDetail>,
}

impl SoapFault {
    /// Validation errors carried in the fault detail, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        self.detail
            .as_ref()
            .and_then(|d| d.validation_fault.as_ref())
            .map(|v| v.errors.as_slice())
            .unwrap_or_default()
    }
}

impl std::fmt::Display for SoapFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SOAP Fault: {} - {}", self.fault_code, self.fault_string)
    }
}

impl std::error::Error for SoapFault {}

impl SchemaType for SoapFault {
    const ELEMENT: &'static str = "Fault";
    const NAMESPACE: &'static str = SOAP_ENV_NAMESPACE;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::element("faultcode").required(),
        FieldSpec::element("faultstring").required(),
        FieldSpec::element("detail"),
    ];
}

/// `detail` element of a Workday fault.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultDetail {
    #[serde(
        rename = "Validation_Fault",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub validation_fault: Option<ValidationFault>,
    #[serde(
        rename = "Processing_Fault",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub processing_fault: Option<ProcessingFault>,
}

/// Request failed schema or business-rule validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFault {
    #[serde(rename = "Validation_Error", default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

impl SchemaType for ValidationFault {
    const ELEMENT: &'static str = "Validation_Fault";
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::element("Validation_Error").repeated()];
}

/// One validation failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    #[serde(rename = "Message", default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "Detail_Message", default, skip_serializing_if = "Option::is_none")]
    pub detail_message: Option<String>,
    /// XPath of the offending request element.
    #[serde(rename = "Xpath", default, skip_serializing_if = "Option::is_none")]
    pub xpath: Option<String>,
}

impl SchemaType for ValidationError {
    const ELEMENT: &'static str = "Validation_Error";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::element("Message"),
        FieldSpec::element("Detail_Message"),
        FieldSpec::element("Xpath"),
    ];
}

/// Request was valid but could not be processed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingFault {
    #[serde(rename = "Detail_Message", default, skip_serializing_if = "Option::is_none")]
    pub detail_message: Option<String>,
}

impl SchemaType for ProcessingFault {
    const ELEMENT: &'static str = "Processing_Fault";
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::element("Detail_Message")];
}

/// Declare the SOAP body for one operation response: either the response
/// element or a fault.
macro_rules! response_body {
    ($(#[$meta:meta])* $name:ident => $element:literal, $response:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            #[serde(rename = $element, default, skip_serializing_if = "Option::is_none")]
            pub response: Option<$response>,
            #[serde(rename = "Fault", default, skip_serializing_if = "Option::is_none")]
            pub fault: Option<$crate::envelope::SoapFault>,
        }

        impl $name {
            /// Body carrying a successful response.
            pub fn ok(response: $response) -> Self {
                Self {
                    response: Some(response),
                    fault: None,
                }
            }

            /// The response, or the fault Workday returned instead.
            ///
            /// A body with neither is reported as a client-side fault.
            pub fn into_result(self) -> Result<$response, $crate::envelope::SoapFault> {
                match (self.response, self.fault) {
                    (_, Some(fault)) => Err(fault),
                    (Some(response), None) => Ok(response),
                    (None, None) => Err($crate::envelope::SoapFault {
                        fault_code: "Client".to_string(),
                        fault_string: concat!("SOAP body has no ", $element).to_string(),
                        detail: None,
                    }),
                }
            }
        }
    };
}

pub(crate) use response_body;

#[cfg(test)]
mod tests {
    use super::*;

    /// Body that only ever carries a fault.
    #[derive(Debug, Deserialize)]
    struct FaultBody {
        #[serde(rename = "Fault")]
        fault: SoapFault,
    }

    #[test]
    fn test_validation_fault_envelope() {
        let xml = r#"<Envelope xmlns="http://schemas.xmlsoap.org/soap/envelope/">
            <Body>
                <Fault>
                    <faultcode>SOAP-ENV:Client.validationError</faultcode>
                    <faultstring>Validation error occurred. Invalid ID value.</faultstring>
                    <detail>
                        <Validation_Fault>
                            <Validation_Error>
                                <Message>Invalid ID value.  'SEQ-9999' is not a valid ID value for type = 'Sequence_Generator_ID'</Message>
                                <Detail_Message>Invalid ID value.</Detail_Message>
                                <Xpath>/Get_Sequence_Generators_Request[1]/Request_References[1]</Xpath>
                            </Validation_Error>
                        </Validation_Fault>
                    </detail>
                </Fault>
            </Body>
        </Envelope>"#;

        let envelope: Envelope<FaultBody> = quick_xml::de::from_str(xml).unwrap();
        let fault = envelope.body.fault;

        assert!(envelope.header.is_none());
        assert_eq!(fault.fault_code, "SOAP-ENV:Client.validationError");
        assert_eq!(fault.validation_errors().len(), 1);
        assert_eq!(
            fault.validation_errors()[0].xpath.as_deref(),
            Some("/Get_Sequence_Generators_Request[1]/Request_References[1]")
        );
        assert!(fault.to_string().contains("Client.validationError"));
    }

    #[test]
    fn test_processing_fault() {
        let xml = r#"<Fault>
            <faultcode>SOAP-ENV:Client.processingError</faultcode>
            <faultstring>Processing error occurred.</faultstring>
            <detail>
                <Processing_Fault>
                    <Detail_Message>The task submitted is not authorized.</Detail_Message>
                </Processing_Fault>
            </detail>
        </Fault>"#;

        let fault: SoapFault = quick_xml::de::from_str(xml).unwrap();
        let detail = fault.detail.as_ref().unwrap();

        assert!(detail.validation_fault.is_none());
        assert_eq!(
            detail.processing_fault.as_ref().unwrap().detail_message.as_deref(),
            Some("The task submitted is not authorized.")
        );
        assert!(fault.validation_errors().is_empty());
    }

    #[test]
    fn test_header() {
        let xml = r#"<Envelope>
            <Header>
                <Workday_Common_Header>
                    <Include_Reference_Descriptors_In_Response>true</Include_Reference_Descriptors_In_Response>
                </Workday_Common_Header>
            </Header>
            <Body><Fault><faultcode>Server</faultcode><faultstring>x</faultstring></Fault></Body>
        </Envelope>"#;

        let envelope: Envelope<FaultBody> = quick_xml::de::from_str(xml).unwrap();
        let common = envelope.header.unwrap().common.unwrap();
        assert_eq!(common.include_reference_descriptors, Some(true));
    }

    #[test]
    fn test_fault_metadata_namespace() {
        assert_eq!(SoapFault::NAMESPACE, SOAP_ENV_NAMESPACE);
        assert_eq!(SoapFault::required_fields(), vec!["faultcode", "faultstring"]);
    }
}
