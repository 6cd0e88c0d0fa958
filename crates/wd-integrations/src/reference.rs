//! Object ID and Object reference types.
//!
//! Every Workday instance reference has the same shape: one or more typed
//! IDs (`WID`, a reference ID, an integration ID, ...) plus an optional
//! human-readable descriptor. The schema declares a separate named type per
//! referenced business object; [`reference_type!`] stamps those out.

use serde::{Deserialize, Serialize};

use crate::schema::{FieldSpec, SchemaType};

/// A single typed identifier of a Workday instance.
///
/// `<ID type="Sequence_Generator_ID">SEQ-0001</ID>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectId {
    #[serde(rename = "@type")]
    pub id_type: String,
    #[serde(
        rename = "@parent_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_id: Option<String>,
    #[serde(
        rename = "@parent_type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_type: Option<String>,
    #[serde(rename = "$text", default)]
    pub value: String,
}

impl ObjectId {
    /// Create an ID of the given type.
    pub fn new(id_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id_type: id_type.into(),
            parent_id: None,
            parent_type: None,
            value: value.into(),
        }
    }

    /// Workday ID (`type="WID"`).
    pub fn wid(value: impl Into<String>) -> Self {
        Self::new("WID", value)
    }

    /// Scope this ID under a parent instance.
    pub fn with_parent(mut self, parent_type: impl Into<String>, parent_id: impl Into<String>) -> Self {
        self.parent_type = Some(parent_type.into());
        self.parent_id = Some(parent_id.into());
        self
    }
}

impl SchemaType for ObjectId {
    const ELEMENT: &'static str = "ID";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text().required(),
        FieldSpec::attribute("type").required(),
        FieldSpec::attribute("parent_id"),
        FieldSpec::attribute("parent_type"),
    ];
}

/// Declare an Object reference type: a list of [`ObjectId`]s and a
/// descriptor attribute, with its schema metadata.
macro_rules! reference_type {
    ($(#[$meta:meta])* $name:ident => $element:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename = $element)]
        pub struct $name {
            #[serde(rename = "ID", default, skip_serializing_if = "Vec::is_empty")]
            pub ids: Vec<ObjectId>,
            #[serde(
                rename = "@Descriptor",
                default,
                skip_serializing_if = "Option::is_none"
            )]
            pub descriptor: Option<String>,
        }

        impl $name {
            /// Reference a single instance by one ID.
            pub fn from_id(id: ObjectId) -> Self {
                Self {
                    ids: vec![id],
                    descriptor: None,
                }
            }

            /// Value of the first ID with the given type.
            pub fn id_of_type(&self, id_type: &str) -> Option<&str> {
                self.ids
                    .iter()
                    .find(|id| id.id_type == id_type)
                    .map(|id| id.value.as_str())
            }

            /// The Workday ID, if present.
            pub fn wid(&self) -> Option<&str> {
                self.id_of_type("WID")
            }
        }

        impl SchemaType for $name {
            const ELEMENT: &'static str = $element;
            const FIELDS: &'static [FieldSpec] = &[
                FieldSpec::element("ID").repeated(),
                FieldSpec::attribute("Descriptor"),
            ];
        }
    };
}

reference_type!(
    /// Reference to a sequence generator.
    SequenceGeneratorObject => "Sequence_GeneratorObject"
);
reference_type!(
    /// Reference to what a sequence generator numbers (journals, invoices, ...).
    SequenceGeneratorUsageObject => "Sequence_Generator_UsageObject"
);
reference_type!(
    /// Reference to a sequence restart period (never, yearly, monthly, ...).
    RestartPeriodObject => "Date_and_Time_Restart_PeriodObject"
);
reference_type!(
    /// Reference to a time zone.
    TimeZoneObject => "Time_ZoneObject"
);
reference_type!(
    /// Reference to an integration system.
    IntegrationSystemObject => "Integration_System__Audited_Object"
);
reference_type!(
    /// Reference to an integration template.
    IntegrationTemplateObject => "Integration_Template__Abstract_Object"
);
reference_type!(
    /// Reference to an integration event.
    IntegrationEventObject => "Integration_Event__Abstract_Object"
);
reference_type!(
    /// Reference to a launch parameter of an integration system.
    LaunchParameterObject => "Launch_Parameter__Abstract_Object"
);
reference_type!(
    /// Reference to a background process status (Processing, Completed, ...).
    ProcessStatusObject => "Background_Process_Instance_StatusObject"
);
reference_type!(
    /// Reference to an HTTP authentication type.
    AuthenticationTypeObject => "Authentication_TypeObject"
);
reference_type!(
    /// Reference to a message severity level.
    SeverityLevelObject => "Severity_LevelObject"
);
