//! Operation descriptors for the Integrations port.
//!
//! Every operation uses document/literal style over SOAP-over-HTTP, and its
//! SOAP action is the operation name itself.

use crate::event::{
    GetIntegrationEventsRequest, GetIntegrationEventsResponse, LaunchIntegrationEventRequest,
    LaunchIntegrationEventResponse,
};
use crate::schema::SchemaType;
use crate::sequence::{
    GetSequenceGeneratorsRequest, GetSequenceGeneratorsResponse, PutSequenceGeneratorRequest,
    PutSequenceGeneratorResponse,
};
use crate::system::{
    GetIntegrationSystemsRequest, GetIntegrationSystemsResponse, PutIntegrationSystemRequest,
    PutIntegrationSystemResponse,
};

/// SOAP-over-HTTP transport URI.
pub const SOAP_HTTP_TRANSPORT: &str = "http://schemas.xmlsoap.org/soap/http";

/// WSDL binding style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingStyle {
    Document,
    Rpc,
}

impl BindingStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BindingStyle::Document => "document",
            BindingStyle::Rpc => "rpc",
        }
    }
}

/// One operation of the port: its name and the request/response elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub soap_action: &'static str,
    pub style: BindingStyle,
    pub transport: &'static str,
    /// Element name of the request body.
    pub input: &'static str,
    /// Element name of the response body.
    pub output: &'static str,
}

impl Operation {
    const fn document(name: &'static str, input: &'static str, output: &'static str) -> Self {
        Self {
            name,
            soap_action: name,
            style: BindingStyle::Document,
            transport: SOAP_HTTP_TRANSPORT,
            input,
            output,
        }
    }
}

/// All operations with bindings in this crate.
pub const OPERATIONS: &[Operation] = &[
    Operation::document(
        "Get_Sequence_Generators",
        GetSequenceGeneratorsRequest::ELEMENT,
        GetSequenceGeneratorsResponse::ELEMENT,
    ),
    Operation::document(
        "Put_Sequence_Generator",
        PutSequenceGeneratorRequest::ELEMENT,
        PutSequenceGeneratorResponse::ELEMENT,
    ),
    Operation::document(
        "Get_Integration_Systems",
        GetIntegrationSystemsRequest::ELEMENT,
        GetIntegrationSystemsResponse::ELEMENT,
    ),
    Operation::document(
        "Put_Integration_System",
        PutIntegrationSystemRequest::ELEMENT,
        PutIntegrationSystemResponse::ELEMENT,
    ),
    Operation::document(
        "Launch_Integration_Event",
        LaunchIntegrationEventRequest::ELEMENT,
        LaunchIntegrationEventResponse::ELEMENT,
    ),
    Operation::document(
        "Get_Integration_Events",
        GetIntegrationEventsRequest::ELEMENT,
        GetIntegrationEventsResponse::ELEMENT,
    ),
];

/// Look up an operation by name.
pub fn operation(name: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().find(|op| op.name == name)
}
