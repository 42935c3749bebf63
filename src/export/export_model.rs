use serde::{Deserialize, Serialize};

use crate::label::resolver::LabelSource;

// ============================================================================
// Diagnostic snapshot of a page's controls
// ============================================================================

/// Everything the exporter observed about one page's controls.
///
/// Serialized with camelCase keys, the shape the extension popup renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldExport {
    pub title: String,
    pub url: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: u128,
    /// Every input, textarea and select, hidden ones included
    pub total_fields: usize,
    /// Fields listed below (hidden/submit/button excluded)
    pub exported_fields: usize,
    pub fields: Vec<ExportedField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedField {
    /// 1-based position among exported fields
    pub index: usize,
    pub tag: String,
    #[serde(rename = "type")]
    pub input_type: String,
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<String>,
    pub labels: Vec<String>,
    pub detected_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_source: Option<LabelSource>,
    pub normalized_label: String,
    pub value: String,
    pub disabled: bool,
    pub read_only: bool,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ExportedOption>>,
    /// SHA-1 over tag, type, id and name
    pub fingerprint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedOption {
    pub text: String,
    pub value: String,
    pub normalized_text: String,
    pub selected: bool,
}

impl FieldExport {
    pub fn field_by_name(&self, name: &str) -> Option<&ExportedField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_by_id(&self, id: &str) -> Option<&ExportedField> {
        self.fields.iter().find(|f| f.id == id)
    }
}
