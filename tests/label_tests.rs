use sheet_fill::dom::document::Document;
use sheet_fill::dom::dom_model::{FormDom, NodeId};
use sheet_fill::label::resolver::{
    LabelSource, associated_labels, resolve_label, resolve_label_with_source,
};

mod common;
use common::page;

/// The only control of a single-control fixture.
fn only_control(doc: &Document) -> NodeId {
    let controls = doc.controls();
    assert_eq!(controls.len(), 1, "fixture should hold exactly one control");
    controls[0]
}

fn resolved(body: &str) -> (String, Option<LabelSource>) {
    let doc = page(body);
    let control = only_control(&doc);
    match resolve_label_with_source(&doc, control) {
        Some(r) => (r.text, Some(r.source)),
        None => (String::new(), None),
    }
}

// =========================================================================
// Strategy order
// =========================================================================

#[test]
fn name_wins_over_wrapping_label() {
    let (label, source) = resolved(r#"<label>First Name <input name="fname"></label>"#);
    assert_eq!(label, "fname");
    assert_eq!(source, Some(LabelSource::Name));
}

#[test]
fn name_is_trimmed() {
    let (label, _) = resolved(r#"<input name="  email  ">"#);
    assert_eq!(label, "email");
}

#[test]
fn id_used_when_name_missing() {
    let (label, source) = resolved(r#"<label for="phone">Phone</label><input id="phone">"#);
    assert_eq!(label, "phone", "id comes before the label element");
    assert_eq!(source, Some(LabelSource::Id));
}

#[test]
fn whitespace_only_name_falls_through() {
    let (label, source) = resolved(r#"<input name="   " id="city">"#);
    assert_eq!(label, "city");
    assert_eq!(source, Some(LabelSource::Id));
}

#[test]
fn label_for_used_when_id_is_blank() {
    let (label, source) =
        resolved(r#"<label for=" ">Street address</label><div><input id=" "></div>"#);
    assert_eq!(label, "Street address");
    assert_eq!(source, Some(LabelSource::LabelFor));
}

#[test]
fn wrapping_label_text() {
    let (label, source) = resolved(r#"<label> Email address <input type="email"></label>"#);
    assert_eq!(label, "Email address");
    assert_eq!(source, Some(LabelSource::WrappingLabel));
}

#[test]
fn aria_label_attribute() {
    let (label, source) = resolved(r#"<input aria-label=" Search term ">"#);
    assert_eq!(label, "Search term");
    assert_eq!(source, Some(LabelSource::AriaLabel));
}

#[test]
fn aria_labelledby_reference() {
    let doc = page(r#"<p id="lbl">Phone number</p><p>ignored</p><div><input aria-labelledby="lbl"></div>"#);
    let control = only_control(&doc);
    let label = resolve_label_with_source(&doc, control).expect("label");
    assert_eq!(label.text, "Phone number");
    assert_eq!(label.source, LabelSource::AriaLabelledBy);
}

#[test]
fn aria_labelledby_missing_target_falls_through() {
    let (label, source) = resolved(r#"<input aria-labelledby="nope" placeholder="Your city">"#);
    assert_eq!(label, "Your city");
    assert_eq!(source, Some(LabelSource::Placeholder));
}

// =========================================================================
// Placeholder rules
// =========================================================================

#[test]
fn placeholder_format_mask_rejected() {
    let (label, _) = resolved(r#"<input placeholder="__/__/____">"#);
    assert_eq!(label, "", "Mask without letters is not a label");
}

#[test]
fn placeholder_too_long_rejected() {
    let long = "Please enter the name exactly as shown on your passport";
    assert!(long.chars().count() >= 50);
    let (label, _) = resolved(&format!(r#"<input placeholder="{}">"#, long));
    assert_eq!(label, "");
}

#[test]
fn placeholder_with_letters_accepted() {
    let (label, source) = resolved(r#"<input placeholder="e.g. 555-1234">"#);
    assert_eq!(label, "e.g. 555-1234");
    assert_eq!(source, Some(LabelSource::Placeholder));
}

// =========================================================================
// Positional fallbacks
// =========================================================================

#[test]
fn previous_sibling_text() {
    let (label, source) = resolved(r#"<div><span> Zip code </span> <input></div>"#);
    assert_eq!(label, "Zip code");
    assert_eq!(source, Some(LabelSource::PreviousSibling));
}

#[test]
fn previous_sibling_too_long_falls_through() {
    let prose = "x".repeat(120);
    let (label, source) = resolved(&format!(
        r#"<div>Notes</div><div><span>{}</span><input></div>"#,
        prose
    ));
    assert_eq!(label, "Notes", "long sibling skipped, parent's sibling used");
    assert_eq!(source, Some(LabelSource::ParentPreviousSibling));
}

#[test]
fn parent_previous_sibling_row_layout() {
    let (label, source) = resolved(
        r#"<div class="row">Country</div>
           <div class="row"><input></div>"#,
    );
    assert_eq!(label, "Country");
    assert_eq!(source, Some(LabelSource::ParentPreviousSibling));
}

#[test]
fn previous_table_cell() {
    let (label, source) = resolved(
        r#"<table><tr><td>Age</td><td><div><input></div></td></tr></table>"#,
    );
    assert_eq!(label, "Age");
    assert_eq!(source, Some(LabelSource::PreviousTableCell));
}

#[test]
fn nearby_text_node_last_resort() {
    let (label, source) = resolved(r#"<div>  Nickname:  <input></div>"#);
    assert_eq!(label, "Nickname:");
    assert_eq!(source, Some(LabelSource::NearbyText));
}

#[test]
fn unresolvable_control_yields_empty_label() {
    let doc = page("<input>");
    let control = only_control(&doc);
    assert_eq!(resolve_label(&doc, control), "");
    assert!(resolve_label_with_source(&doc, control).is_none());
}

// =========================================================================
// Fake tree built without HTML
// =========================================================================

#[test]
fn resolves_against_builder_tree() {
    let mut doc = Document::new();
    let root = doc.root();
    let form = doc.append_element(root, "form", &[]);
    let row = doc.append_element(form, "p", &[]);
    doc.append_text(row, "Middle initial");
    let cell = doc.append_element(form, "p", &[]);
    let input = doc.append_element(cell, "INPUT", &[("TYPE", "text")]);

    assert_eq!(resolve_label(&doc, input), "Middle initial");
}

// =========================================================================
// Associated labels (diagnostics)
// =========================================================================

#[test]
fn associated_labels_collects_for_and_wrapping() {
    let doc = page(
        r#"<label for="mail">Email</label>
           <label>Contact <input id="mail" name="mail"></label>"#,
    );
    let control = only_control(&doc);
    assert_eq!(associated_labels(&doc, control), vec!["Email", "Contact"]);
}
