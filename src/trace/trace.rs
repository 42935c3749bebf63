use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::dom::dom_model::ControlKind;
use crate::fill::fill_model::ControlOutcome;
use crate::label::resolver::LabelSource;

#[derive(Debug, Serialize)]
pub struct FillTraceEvent {
    pub timestamp_ms: u128,
    pub pass: u64,

    /// `id`, else `name`, else `#<node index>`
    pub control: String,
    pub kind: Option<ControlKind>,

    pub label: String,
    pub label_source: Option<LabelSource>,

    pub field_name: Option<String>,
    pub outcome: Option<String>,
}

impl FillTraceEvent {
    pub fn now(pass: u64, control: impl ToString) -> Self {
        Self {
            timestamp_ms: now_ms(),
            pass,
            control: control.to_string(),
            kind: None,
            label: String::new(),
            label_source: None,
            field_name: None,
            outcome: None,
        }
    }

    pub fn from_outcome(pass: u64, control: impl ToString, outcome: &ControlOutcome) -> Self {
        Self::now(pass, control)
            .with_kind(outcome.kind)
            .with_label(&outcome.label, outcome.label_source)
            .with_field(&outcome.field_name)
            .with_outcome(outcome.outcome.as_str())
    }

    pub fn with_kind(mut self, kind: ControlKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_label(mut self, label: &str, source: LabelSource) -> Self {
        self.label = label.to_string();
        self.label_source = Some(source);
        self
    }

    pub fn with_field(mut self, field_name: &str) -> Self {
        self.field_name = Some(field_name.to_string());
        self
    }

    pub fn with_outcome(mut self, outcome: impl ToString) -> Self {
        self.outcome = Some(outcome.to_string());
        self
    }
}

/// Milliseconds since the Unix epoch; 0 if the clock is before it.
pub fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}
