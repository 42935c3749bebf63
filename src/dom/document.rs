use crate::dom::dom_model::{DomEvent, EventKind, FormDom, NodeId, SelectOption};
use crate::text::normalize::collapse_whitespace;

#[derive(Debug, Clone)]
enum NodeType {
    Document,
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    node_type: NodeType,
}

#[derive(Debug, Clone)]
struct Element {
    tag_name: String,
    attrs: Vec<(String, String)>,
    /// Live value of text-like controls; `None` until first written.
    value: Option<String>,
    checked: bool,
    selected: bool,
}

impl Element {
    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// In-memory document tree with live form state.
///
/// Attributes hold the markup as parsed; values, checkedness and option
/// selection are tracked separately the way a browser does, so filling a
/// control never rewrites its attributes. Every event fired at a node is
/// appended to an ordered log.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    url: Option<String>,
    events: Vec<DomEvent>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Document {
            nodes: vec![Node {
                parent: None,
                children: Vec::new(),
                node_type: NodeType::Document,
            }],
            url: None,
            events: Vec::new(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append an element under `parent`. Tag and attribute names are
    /// lower-cased; `checked` and `selected` attributes seed the live state.
    pub fn append_element(&mut self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let attrs: Vec<(String, String)> = attrs
            .iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v.to_string()))
            .collect();
        let checked = attrs.iter().any(|(k, _)| k == "checked");
        let selected = attrs.iter().any(|(k, _)| k == "selected");

        self.push_node(
            parent,
            NodeType::Element(Element {
                tag_name: tag.to_ascii_lowercase(),
                attrs,
                value: None,
                checked,
                selected,
            }),
        )
    }

    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.push_node(parent, NodeType::Text(text.to_string()))
    }

    /// Events dispatched so far, oldest first.
    pub fn events(&self) -> &[DomEvent] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Events of one kind fired at `node`.
    pub fn event_count(&self, node: NodeId, kind: EventKind) -> usize {
        self.events
            .iter()
            .filter(|e| e.target == node && e.kind == kind)
            .count()
    }

    /// First element matching `tag` and an attribute pair. Convenience for
    /// callers holding a document rather than node ids.
    pub fn find_element(&self, tag: &str, attr: &str, value: &str) -> Option<NodeId> {
        self.elements_in_order(self.root()).into_iter().find(|&id| {
            self.element(id)
                .is_some_and(|el| el.tag_name == tag && el.attr(attr) == Some(value))
        })
    }

    fn push_node(&mut self, parent: NodeId, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: Some(parent),
            children: Vec::new(),
            node_type,
        });
        if let Some(p) = self.nodes.get_mut(parent.0) {
            p.children.push(id);
        }
        id
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.node(id)?.node_type {
            NodeType::Element(el) => Some(el),
            _ => None,
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes.get_mut(id.0)?.node_type {
            NodeType::Element(el) => Some(el),
            _ => None,
        }
    }

    fn is_tag(&self, id: NodeId, tag: &str) -> bool {
        self.element(id).is_some_and(|el| el.tag_name == tag)
    }

    /// Pre-order walk of the subtree below `start`, excluding `start`.
    fn descendants(&self, start: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.node(start) {
            Some(n) => n.children.iter().rev().copied().collect(),
            None => return out,
        };

        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(n) = self.node(id) {
                stack.extend(n.children.iter().rev().copied());
            }
        }

        out
    }

    fn elements_in_order(&self, start: NodeId) -> Vec<NodeId> {
        self.descendants(start)
            .into_iter()
            .filter(|&id| self.element(id).is_some())
            .collect()
    }

    fn option_nodes(&self, select: NodeId) -> Vec<NodeId> {
        self.descendants(select)
            .into_iter()
            .filter(|&id| self.is_tag(id, "option"))
            .collect()
    }

    fn initial_value(&self, id: NodeId) -> String {
        match self.element(id) {
            Some(el) if el.tag_name == "textarea" => self.text_content(id),
            Some(el) => el.attr("value").unwrap_or("").to_string(),
            None => String::new(),
        }
    }

    fn fire(&mut self, target: NodeId, kind: EventKind) {
        self.events.push(DomEvent { target, kind });
    }

    /// Radios sharing `name` and form owner with `radio`, excluding itself.
    fn radio_group(&self, radio: NodeId) -> Vec<NodeId> {
        let Some(name) = self.attribute(radio, "name").filter(|n| !n.is_empty()) else {
            return Vec::new();
        };
        let form = self.closest(radio, "form");

        self.elements_in_order(self.root())
            .into_iter()
            .filter(|&id| id != radio)
            .filter(|&id| self.is_tag(id, "input"))
            .filter(|&id| self.control_type(id) == "radio")
            .filter(|&id| self.attribute(id, "name") == Some(name))
            .filter(|&id| self.closest(id, "form") == form)
            .collect()
    }
}

impl FormDom for Document {
    fn controls(&self) -> Vec<NodeId> {
        self.elements_in_order(self.root())
            .into_iter()
            .filter(|&id| {
                self.element(id)
                    .is_some_and(|el| matches!(el.tag_name.as_str(), "input" | "textarea" | "select"))
            })
            .collect()
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|el| el.tag_name.as_str())
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)?.attr(name)
    }

    fn text_content(&self, node: NodeId) -> String {
        if let Some(Node {
            node_type: NodeType::Text(text),
            ..
        }) = self.node(node)
        {
            return text.clone();
        }
        self.descendant_texts(node).concat()
    }

    fn descendant_texts(&self, node: NodeId) -> Vec<String> {
        self.descendants(node)
            .into_iter()
            .filter_map(|id| match &self.node(id)?.node_type {
                NodeType::Text(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.elements_in_order(self.root())
            .into_iter()
            .find(|&n| self.attribute(n, "id") == Some(id))
    }

    fn label_for(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.elements_in_order(self.root())
            .into_iter()
            .find(|&n| self.is_tag(n, "label") && self.attribute(n, "for") == Some(id))
    }

    fn parent_element(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.node(node)?.parent?;
        self.element(parent).map(|_| parent)
    }

    fn previous_element_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.node(node)?.parent?;
        let siblings = &self.node(parent)?.children;
        let pos = siblings.iter().position(|&s| s == node)?;

        siblings[..pos]
            .iter()
            .rev()
            .copied()
            .find(|&s| self.element(s).is_some())
    }

    fn closest(&self, node: NodeId, tag: &str) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(id) = current {
            if self.is_tag(id, tag) {
                return Some(id);
            }
            current = self.node(id)?.parent;
        }
        None
    }

    fn value(&self, node: NodeId) -> String {
        match self.element(node) {
            Some(Element {
                value: Some(v), ..
            }) => v.clone(),
            Some(_) => self.initial_value(node),
            None => String::new(),
        }
    }

    fn is_checked(&self, node: NodeId) -> bool {
        self.element(node).is_some_and(|el| el.checked)
    }

    fn options(&self, node: NodeId) -> Vec<SelectOption> {
        if !self.is_tag(node, "select") {
            return Vec::new();
        }

        self.option_nodes(node)
            .into_iter()
            .filter_map(|id| {
                let el = self.element(id)?;
                let text = collapse_whitespace(&self.text_content(id));
                let value = el.attr("value").map(str::to_string).unwrap_or_else(|| text.clone());
                Some(SelectOption {
                    text,
                    value,
                    selected: el.selected,
                })
            })
            .collect()
    }

    fn title(&self) -> String {
        self.elements_in_order(self.root())
            .into_iter()
            .find(|&id| self.is_tag(id, "title"))
            .map(|id| collapse_whitespace(&self.text_content(id)))
            .unwrap_or_default()
    }

    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    fn set_value(&mut self, node: NodeId, value: &str) {
        if let Some(el) = self.element_mut(node) {
            el.value = Some(value.to_string());
        }
    }

    fn select_option(&mut self, node: NodeId, index: usize) {
        let options = self.option_nodes(node);
        if index >= options.len() {
            return;
        }
        for (i, id) in options.into_iter().enumerate() {
            if let Some(el) = self.element_mut(id) {
                el.selected = i == index;
            }
        }
    }

    fn activate(&mut self, node: NodeId) {
        if self.element(node).is_none() {
            return;
        }

        // Disabled form controls swallow the click entirely
        if self.is_disabled(node) {
            return;
        }

        self.fire(node, EventKind::Click);

        if !self.is_tag(node, "input") {
            return;
        }

        match self.control_type(node).as_str() {
            "checkbox" => {
                if let Some(el) = self.element_mut(node) {
                    el.checked = !el.checked;
                }
            }
            "radio" => {
                if self.is_checked(node) {
                    return;
                }
                for other in self.radio_group(node) {
                    if let Some(el) = self.element_mut(other) {
                        el.checked = false;
                    }
                }
                if let Some(el) = self.element_mut(node) {
                    el.checked = true;
                }
            }
            _ => return,
        }

        self.fire(node, EventKind::Input);
        self.fire(node, EventKind::Change);
    }

    fn dispatch_change(&mut self, node: NodeId) {
        self.fire(node, EventKind::Change);
    }
}
