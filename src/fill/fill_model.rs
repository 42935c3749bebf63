use serde::{Deserialize, Serialize};

use crate::dom::dom_model::{ControlKind, NodeId};
use crate::label::resolver::LabelSource;

/// One `(field name, value)` pair to apply during a fill pass.
///
/// Order matters: within a pass, specs are tried against each control in
/// the order supplied and the first matching one wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub value: String,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        FieldSpec {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl From<(&str, &str)> for FieldSpec {
    fn from((name, value): (&str, &str)) -> Self {
        FieldSpec::new(name, value)
    }
}

/// Result of applying one value to one control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FillOutcome {
    Filled,
    Disabled,
    ReadOnly,
    /// No option's display text matched the value
    NoOptionMatched,
    /// Checkable control given a value that is not a yes-like token
    NotAffirmative,
    /// Checkable control already checked; never unchecked or re-clicked
    AlreadyChecked,
    Unsupported,
}

impl FillOutcome {
    pub fn is_filled(self) -> bool {
        self == FillOutcome::Filled
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FillOutcome::Filled => "filled",
            FillOutcome::Disabled => "disabled",
            FillOutcome::ReadOnly => "read-only",
            FillOutcome::NoOptionMatched => "no matching option",
            FillOutcome::NotAffirmative => "value not affirmative",
            FillOutcome::AlreadyChecked => "already checked",
            FillOutcome::Unsupported => "unsupported control",
        }
    }
}

/// A control that matched a field spec during a pass, with what happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlOutcome {
    pub control: NodeId,
    pub kind: ControlKind,
    pub label: String,
    pub label_source: LabelSource,
    pub field_name: String,
    pub outcome: FillOutcome,
}

/// Summary of one fill pass. Built per pass and discarded afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FillReport {
    /// Controls successfully filled
    pub filled: usize,

    /// Controls without any resolvable label
    pub unlabelled: usize,

    /// Labelled controls no field spec matched
    pub unmatched: usize,

    /// Every matched control, in document order
    pub matched: Vec<ControlOutcome>,
}

impl FillReport {
    /// Matched controls whose fill was refused (disabled, no option, ...).
    pub fn failed(&self) -> impl Iterator<Item = &ControlOutcome> {
        self.matched.iter().filter(|m| !m.outcome.is_filled())
    }
}
