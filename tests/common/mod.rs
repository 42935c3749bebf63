use sheet_fill::dom::document::Document;
use sheet_fill::dom::dom_model::NodeId;

/// Parse a body fragment the way a browser would load it.
pub fn page(body: &str) -> Document {
    Document::parse_html(&format!("<!DOCTYPE html><html><body>{}</body></html>", body), None)
}

/// First element with the given tag and attribute value; panics if absent.
pub fn find(doc: &Document, tag: &str, attr: &str, value: &str) -> NodeId {
    doc.find_element(tag, attr, value)
        .unwrap_or_else(|| panic!("no <{} {}=\"{}\"> in fixture", tag, attr, value))
}
