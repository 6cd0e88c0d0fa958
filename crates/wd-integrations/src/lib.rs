//! # busbar-wd-integrations
//!
//! Typed bindings for the Workday Integrations SOAP web service
//! (`urn:com.workday/bsvc`).
//!
//! Every type is a plain record deriving `serde`'s traits with the schema's
//! element and attribute names (`@attr` for attributes, `$text` for simple
//! content), so an XML serde runtime such as `quick-xml` can read and write
//! it. The crate performs no I/O and builds no envelopes on its own.
//!
//! ## Contents
//!
//! - **References** - [`ObjectId`] and the per-object reference types
//! - **Sequence generators** - `Get_Sequence_Generators`, `Put_Sequence_Generator`
//! - **Integration systems** - `Get_Integration_Systems`, `Put_Integration_System`,
//!   with transport configuration (SFTP, HTTP, email, attachment)
//! - **Integration events** - `Launch_Integration_Event`, `Get_Integration_Events`
//! - **Envelope and faults** - [`Envelope`], [`SoapFault`] with validation
//!   and processing detail
//! - **Metadata** - [`SchemaType`] field tables and the [`OPERATIONS`] list
//!
//! ## Example
//!
//! ```rust,ignore
//! use busbar_wd_integrations::envelope::Envelope;
//! use busbar_wd_integrations::sequence::GetSequenceGeneratorsBody;
//!
//! let envelope: Envelope<GetSequenceGeneratorsBody> = quick_xml::de::from_str(&xml)?;
//! match envelope.body.into_result() {
//!     Ok(response) => {
//!         for generator in response.generators() {
//!             println!("{:?}", generator.reference);
//!         }
//!     }
//!     Err(fault) => eprintln!("{fault}"),
//! }
//! ```

pub mod common;
pub mod envelope;
pub mod event;
pub mod operations;
pub mod reference;
pub mod schema;
pub mod sequence;
pub mod system;
pub mod transport;

pub use common::{ResponseFilter, ResponseResults};
pub use envelope::{Envelope, FaultDetail, Header, SoapFault, ValidationError};
pub use operations::{operation, BindingStyle, Operation, OPERATIONS};
pub use reference::ObjectId;
pub use schema::{FieldSpec, SchemaType, XmlKind, SOAP_ENV_NAMESPACE, WD_NAMESPACE};

/// Web service version used when none is given.
pub const DEFAULT_VERSION: &str = "v42.0";

/// Endpoint of the Integrations service for a tenant.
///
/// `host` is the data-center host, e.g. `wd2-impl-services1.workday.com`.
pub fn service_url(host: &str, tenant: &str, version: Option<&str>) -> String {
    format!(
        "https://{}/ccx/service/{}/Integrations/{}",
        host.trim_end_matches('/'),
        tenant,
        version.unwrap_or(DEFAULT_VERSION)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_url() {
        assert_eq!(
            service_url("wd2-impl-services1.workday.com", "acme_dpt1", None),
            "https://wd2-impl-services1.workday.com/ccx/service/acme_dpt1/Integrations/v42.0"
        );
        assert_eq!(
            service_url("wd5-services1.myworkday.com/", "acme", Some("v40.1")),
            "https://wd5-services1.myworkday.com/ccx/service/acme/Integrations/v40.1"
        );
    }
}
