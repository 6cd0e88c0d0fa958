//! Paging wrappers shared by the Get operations.

use serde::{Deserialize, Serialize};

use crate::schema::{FieldSpec, SchemaType};

/// Paging and as-of controls for a Get request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseFilter {
    /// xsd:date, e.g. `2024-03-31` or `2024-03-31-07:00`.
    #[serde(rename = "As_Of_Effective_Date", default, skip_serializing_if = "Option::is_none")]
    pub as_of_effective_date: Option<String>,
    /// xsd:dateTime.
    #[serde(rename = "As_Of_Entry_DateTime", default, skip_serializing_if = "Option::is_none")]
    pub as_of_entry_date_time: Option<String>,
    #[serde(rename = "Page", default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(rename = "Count", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl ResponseFilter {
    /// Request one page of `count` results.
    pub fn page(page: u32, count: u32) -> Self {
        Self {
            page: Some(page),
            count: Some(count),
            ..Default::default()
        }
    }
}

impl SchemaType for ResponseFilter {
    const ELEMENT: &'static str = "Response_Filter";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::element("As_Of_Effective_Date"),
        FieldSpec::element("As_Of_Entry_DateTime"),
        FieldSpec::element("Page").digits(12, 0),
        FieldSpec::element("Count").digits(3, 0),
    ];
}

/// Paging summary returned with a Get response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseResults {
    #[serde(rename = "Total_Results", default)]
    pub total_results: u32,
    #[serde(rename = "Total_Pages", default)]
    pub total_pages: u32,
    #[serde(rename = "Page_Results", default)]
    pub page_results: u32,
    #[serde(rename = "Page", default)]
    pub page: u32,
}

impl ResponseResults {
    /// Whether pages remain after this one.
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }
}

impl SchemaType for ResponseResults {
    const ELEMENT: &'static str = "Response_Results";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::element("Total_Results").digits(12, 0),
        FieldSpec::element("Total_Pages").digits(12, 0),
        FieldSpec::element("Page_Results").digits(12, 0),
        FieldSpec::element("Page").digits(12, 0),
    ];
}
