use serde::Serialize;

/// Handle to one node of a document. Only meaningful for the document
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub usize);

/// How a control is filled, derived from its tag and `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    Text,
    TextArea,
    Select,
    Checkbox,
    Radio,
    /// submit, button and hidden inputs; never labelled or filled
    Skip,
}

impl ControlKind {
    pub fn is_checkable(self) -> bool {
        matches!(self, ControlKind::Checkbox | ControlKind::Radio)
    }
}

/// One `<option>` of a select control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Display text, whitespace collapsed.
    pub text: String,
    /// Underlying value; the text when no `value` attribute is present.
    pub value: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Click,
    Input,
    Change,
}

/// A notification dispatched at a node, in dispatch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DomEvent {
    pub target: NodeId,
    pub kind: EventKind,
}

// ============================================================================
// FormDom trait — the document capabilities the fill engine relies on
// ============================================================================

/// Read and mutate access to a document's form controls.
///
/// Label resolution only needs the query half; filling additionally uses
/// `set_value`, `select_option`, `activate` and `dispatch_change`.
/// Tag and attribute names are expected in lower case.
pub trait FormDom {
    /// Every input, textarea and select element in document order.
    fn controls(&self) -> Vec<NodeId>;

    /// Lower-case tag name, `None` for text and document nodes.
    fn tag_name(&self, node: NodeId) -> Option<&str>;

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str>;

    /// Concatenated text of every descendant text node.
    fn text_content(&self, node: NodeId) -> String;

    /// Text of every descendant text node, one entry per node, document order.
    fn descendant_texts(&self, node: NodeId) -> Vec<String>;

    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// First `<label>` whose `for` attribute equals `id`.
    fn label_for(&self, id: &str) -> Option<NodeId>;

    fn parent_element(&self, node: NodeId) -> Option<NodeId>;

    fn previous_element_sibling(&self, node: NodeId) -> Option<NodeId>;

    /// Nearest inclusive ancestor with the given tag name.
    fn closest(&self, node: NodeId, tag: &str) -> Option<NodeId>;

    /// Current value of a text-like control.
    fn value(&self, node: NodeId) -> String;

    fn is_checked(&self, node: NodeId) -> bool;

    /// Options of a select control, empty for anything else.
    fn options(&self, node: NodeId) -> Vec<SelectOption>;

    fn title(&self) -> String;

    fn url(&self) -> Option<&str>;

    fn set_value(&mut self, node: NodeId, value: &str);

    /// Select the option at `index`, deselecting the others.
    fn select_option(&mut self, node: NodeId, index: usize);

    /// The platform's click primitive: toggles state and fires the
    /// click/input/change events a user interaction would.
    fn activate(&mut self, node: NodeId);

    /// Fire a bubbling `change` event at `node`.
    fn dispatch_change(&mut self, node: NodeId);

    // ------------------------------------------------------------------------
    // Derived helpers
    // ------------------------------------------------------------------------

    fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    fn is_disabled(&self, node: NodeId) -> bool {
        self.has_attribute(node, "disabled")
    }

    fn is_read_only(&self, node: NodeId) -> bool {
        self.has_attribute(node, "readonly")
    }

    fn is_required(&self, node: NodeId) -> bool {
        self.has_attribute(node, "required")
    }

    /// The `type` of a control as a page script would read it.
    fn control_type(&self, node: NodeId) -> String {
        match self.tag_name(node) {
            Some("select") => {
                if self.has_attribute(node, "multiple") {
                    "select-multiple".to_string()
                } else {
                    "select-one".to_string()
                }
            }
            Some("textarea") => "textarea".to_string(),
            _ => self
                .attribute(node, "type")
                .map(|t| t.trim().to_ascii_lowercase())
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "text".to_string()),
        }
    }

    fn control_kind(&self, node: NodeId) -> ControlKind {
        match self.tag_name(node) {
            Some("select") => ControlKind::Select,
            Some("textarea") => ControlKind::TextArea,
            Some("input") => match self.control_type(node).as_str() {
                "submit" | "button" | "hidden" => ControlKind::Skip,
                "checkbox" => ControlKind::Checkbox,
                "radio" => ControlKind::Radio,
                // Everything else takes a typed value
                _ => ControlKind::Text,
            },
            _ => ControlKind::Skip,
        }
    }
}
