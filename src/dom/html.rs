use scraper::{Html, Node};

use crate::dom::document::Document;
use crate::dom::dom_model::NodeId;

impl Document {
    /// Build a document from HTML markup using the HTML5 parsing rules, so
    /// fragments gain the implied `html`/`head`/`body` wrappers a browser
    /// would add. Comments, doctypes and processing instructions are dropped.
    pub fn parse_html(html: &str, url: Option<&str>) -> Document {
        let parsed = Html::parse_document(html);
        let mut doc = Document::new();
        if let Some(url) = url {
            doc = doc.with_url(url);
        }

        // Children are pushed in reverse so pops come out in document order,
        // which keeps sibling order intact when appending.
        let root = doc.root();
        let mut stack: Vec<_> = parsed.tree.root().children().map(|c| (c, root)).collect();
        stack.reverse();

        while let Some((node, parent)) = stack.pop() {
            let created: Option<NodeId> = match node.value() {
                Node::Element(el) => {
                    let attrs: Vec<(&str, &str)> = el.attrs().collect();
                    Some(doc.append_element(parent, el.name(), &attrs))
                }
                Node::Text(text) => {
                    let content: &str = text;
                    doc.append_text(parent, content);
                    None
                }
                _ => None,
            };

            if let Some(id) = created {
                let mut children: Vec<_> = node.children().map(|c| (c, id)).collect();
                children.reverse();
                stack.extend(children);
            }
        }

        doc
    }
}
