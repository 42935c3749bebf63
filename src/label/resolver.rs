use serde::{Deserialize, Serialize};

use crate::dom::dom_model::{FormDom, NodeId};

/// Placeholders this long or longer are treated as instructions, not labels.
pub const MAX_PLACEHOLDER_LEN: usize = 50;

/// Nearby text this long or longer is treated as prose, not a label.
pub const MAX_NEARBY_TEXT_LEN: usize = 100;

/// Which strategy produced a label, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSource {
    Name,
    Id,
    LabelFor,
    WrappingLabel,
    AriaLabel,
    AriaLabelledBy,
    Placeholder,
    PreviousSibling,
    ParentPreviousSibling,
    PreviousTableCell,
    NearbyText,
}

impl LabelSource {
    /// Same spelling as the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            LabelSource::Name => "name",
            LabelSource::Id => "id",
            LabelSource::LabelFor => "label_for",
            LabelSource::WrappingLabel => "wrapping_label",
            LabelSource::AriaLabel => "aria_label",
            LabelSource::AriaLabelledBy => "aria_labelled_by",
            LabelSource::Placeholder => "placeholder",
            LabelSource::PreviousSibling => "previous_sibling",
            LabelSource::ParentPreviousSibling => "parent_previous_sibling",
            LabelSource::PreviousTableCell => "previous_table_cell",
            LabelSource::NearbyText => "nearby_text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLabel {
    pub text: String,
    pub source: LabelSource,
}

type Strategy = fn(&dyn FormDom, NodeId) -> Option<String>;

const STRATEGIES: [(LabelSource, Strategy); 11] = [
    (LabelSource::Name, from_name),
    (LabelSource::Id, from_id),
    (LabelSource::LabelFor, from_label_for),
    (LabelSource::WrappingLabel, from_wrapping_label),
    (LabelSource::AriaLabel, from_aria_label),
    (LabelSource::AriaLabelledBy, from_aria_labelledby),
    (LabelSource::Placeholder, from_placeholder),
    (LabelSource::PreviousSibling, from_previous_sibling),
    (LabelSource::ParentPreviousSibling, from_parent_previous_sibling),
    (LabelSource::PreviousTableCell, from_previous_table_cell),
    (LabelSource::NearbyText, from_nearby_text),
];

/// Best-guess human label for `control`, or `""` when nothing usable is
/// found. The first strategy yielding non-empty text wins; results are
/// never combined.
pub fn resolve_label(dom: &dyn FormDom, control: NodeId) -> String {
    resolve_label_with_source(dom, control)
        .map(|resolved| resolved.text)
        .unwrap_or_default()
}

/// Like [`resolve_label`], also reporting which strategy matched.
pub fn resolve_label_with_source(dom: &dyn FormDom, control: NodeId) -> Option<ResolvedLabel> {
    STRATEGIES.iter().find_map(|(source, strategy)| {
        strategy(dom, control)
            .filter(|text| !text.is_empty())
            .map(|text| ResolvedLabel {
                text,
                source: *source,
            })
    })
}

/// Texts of every `<label>` tied to the control: the `for=id` label first,
/// then a wrapping label. Used for diagnostics, not for matching.
pub fn associated_labels(dom: &dyn FormDom, control: NodeId) -> Vec<String> {
    let mut labels = Vec::new();

    if let Some(label) = from_label_for(dom, control).filter(|t| !t.is_empty()) {
        labels.push(label);
    }
    if let Some(label) = from_wrapping_label(dom, control).filter(|t| !t.is_empty()) {
        if !labels.contains(&label) {
            labels.push(label);
        }
    }

    labels
}

// ============================================================================
// Strategies
// ============================================================================

fn trimmed_attr(dom: &dyn FormDom, node: NodeId, name: &str) -> Option<String> {
    dom.attribute(node, name).map(|v| v.trim().to_string())
}

fn trimmed_text(dom: &dyn FormDom, node: NodeId) -> String {
    dom.text_content(node).trim().to_string()
}

/// Trimmed text, rejected when too long to be a label.
fn short_text(text: &str) -> Option<String> {
    let text = text.trim();
    (text.chars().count() < MAX_NEARBY_TEXT_LEN).then(|| text.to_string())
}

fn from_name(dom: &dyn FormDom, control: NodeId) -> Option<String> {
    trimmed_attr(dom, control, "name")
}

fn from_id(dom: &dyn FormDom, control: NodeId) -> Option<String> {
    trimmed_attr(dom, control, "id")
}

fn from_label_for(dom: &dyn FormDom, control: NodeId) -> Option<String> {
    let id = dom.attribute(control, "id").filter(|id| !id.is_empty())?;
    let label = dom.label_for(id)?;
    Some(trimmed_text(dom, label))
}

fn from_wrapping_label(dom: &dyn FormDom, control: NodeId) -> Option<String> {
    let label = dom.closest(control, "label")?;
    Some(trimmed_text(dom, label))
}

fn from_aria_label(dom: &dyn FormDom, control: NodeId) -> Option<String> {
    trimmed_attr(dom, control, "aria-label")
}

fn from_aria_labelledby(dom: &dyn FormDom, control: NodeId) -> Option<String> {
    let target = trimmed_attr(dom, control, "aria-labelledby")?;
    let labelled_by = dom.element_by_id(&target)?;
    Some(trimmed_text(dom, labelled_by))
}

fn from_placeholder(dom: &dyn FormDom, control: NodeId) -> Option<String> {
    let placeholder = dom.attribute(control, "placeholder")?;
    if placeholder.chars().count() >= MAX_PLACEHOLDER_LEN {
        return None;
    }

    // Pure format masks like "__/__/____" carry no letters of their own
    let placeholder = placeholder.trim();
    placeholder
        .chars()
        .any(char::is_alphabetic)
        .then(|| placeholder.to_string())
}

fn from_previous_sibling(dom: &dyn FormDom, control: NodeId) -> Option<String> {
    let sibling = dom.previous_element_sibling(control)?;
    short_text(&dom.text_content(sibling))
}

fn from_parent_previous_sibling(dom: &dyn FormDom, control: NodeId) -> Option<String> {
    let parent = dom.parent_element(control)?;
    let sibling = dom.previous_element_sibling(parent)?;
    short_text(&dom.text_content(sibling))
}

fn from_previous_table_cell(dom: &dyn FormDom, control: NodeId) -> Option<String> {
    let cell = dom.closest(control, "td")?;
    let previous = dom.previous_element_sibling(cell)?;
    short_text(&dom.text_content(previous))
}

fn from_nearby_text(dom: &dyn FormDom, control: NodeId) -> Option<String> {
    let parent = dom.parent_element(control)?;
    dom.descendant_texts(parent)
        .iter()
        .filter_map(|text| short_text(text))
        .find(|text| !text.is_empty())
}
