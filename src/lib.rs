use crate::{
    dom::document::Document,
    fill::{fill_model::FieldSpec, orchestrator::fill_form},
    paste::parser::parse_pasted,
};

pub mod cli;
pub mod dom;
pub mod export;
pub mod fill;
pub mod host;
pub mod label;
pub mod paste;
pub mod report;
pub mod text;
pub mod trace;

/// Parse `html`, fill it from pasted rows, and return the filled document
/// with the number of controls filled.
pub fn fill_html(html: &str, pasted: &str) -> (Document, usize) {
    let mut doc = Document::parse_html(html, None);
    let specs: Vec<FieldSpec> = parse_pasted(pasted);
    let filled = fill_form(&mut doc, &specs);
    (doc, filled)
}
