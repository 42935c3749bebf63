use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::export::export_model::FieldExport;
use crate::fill::fill_model::FieldSpec;
use crate::host::error::HostError;

/// Request from the popup side, one JSON object per line.
///
/// The `form` key selects the mode: `"0"` fills, `"export"` snapshots the
/// controls, `"quit"` ends a session. Unknown keys (such as
/// `filesToUpload`) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "form")]
pub enum HostRequest {
    #[serde(rename = "0")]
    Fill {
        /// Pasted rows; the first cell is the field name, the second its
        /// value. Extra cells are ignored and a missing value is empty.
        #[serde(default)]
        csv: Vec<Vec<String>>,
        /// Accepted for compatibility; a fill pass does not read it.
        #[serde(default)]
        repeat: bool,
    },
    #[serde(rename = "export")]
    Export,
    #[serde(rename = "quit")]
    Quit,
}

const KNOWN_FORMS: [&str; 3] = ["0", "export", "quit"];

impl HostRequest {
    pub fn fill(specs: &[FieldSpec], repeat: bool) -> Self {
        HostRequest::Fill {
            csv: specs
                .iter()
                .map(|s| vec![s.name.clone(), s.value.clone()])
                .collect(),
            repeat,
        }
    }

    /// Parse one request line, telling malformed JSON apart from a
    /// well-formed request for a mode this host does not serve.
    pub fn parse_line(line: &str) -> Result<Self, HostError> {
        let raw: Value = serde_json::from_str(line).map_err(|e| HostError::JsonParse {
            context: "host request".into(),
            source: e,
        })?;

        let form = match raw.get("form") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        if !KNOWN_FORMS.contains(&form.as_str()) {
            return Err(HostError::UnknownRequest(form));
        }

        serde_json::from_value(raw).map_err(|e| HostError::JsonParse {
            context: format!("'{}' request", form),
            source: e,
        })
    }

    /// Field specs carried by a fill request, in order.
    pub fn field_specs(&self) -> Vec<FieldSpec> {
        match self {
            HostRequest::Fill { csv, .. } => csv
                .iter()
                .filter_map(|row| {
                    let (name, rest) = row.split_first()?;
                    let value = rest.first().map(String::as_str).unwrap_or("");
                    Some(FieldSpec::new(name.as_str(), value))
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Reply to one request. A fill reply carries only the count; whether the
/// page could be reached is signalled through `ok`/`error`, never through
/// the count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filled: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export: Option<FieldExport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HostResponse {
    pub fn ok() -> Self {
        HostResponse {
            ok: true,
            filled: None,
            export: None,
            error: None,
        }
    }

    pub fn filled(count: usize) -> Self {
        HostResponse {
            filled: Some(count),
            ..Self::ok()
        }
    }

    pub fn export(export: FieldExport) -> Self {
        HostResponse {
            export: Some(export),
            ..Self::ok()
        }
    }

    pub fn error(err: &HostError) -> Self {
        HostResponse {
            ok: false,
            error: Some(err.to_string()),
            ..Self::ok()
        }
    }
}
