use sheet_fill::dom::dom_model::{EventKind, FormDom};
use sheet_fill::fill::fill_model::{FieldSpec, FillOutcome};
use sheet_fill::fill::filler::{
    fill_checkable, fill_control, fill_select, fill_text, is_affirmative,
};

mod common;
use common::{find, page};

// =========================================================================
// Text-like controls
// =========================================================================

#[test]
fn text_value_set_verbatim_with_one_change_event() {
    let mut doc = page(r#"<input name="city" value="old">"#);
    let city = find(&doc, "input", "name", "city");

    let outcome = fill_text(&mut doc, city, "  New York ");

    assert_eq!(outcome, FillOutcome::Filled);
    assert_eq!(doc.value(city), "  New York ", "No trimming or coercion");
    assert_eq!(doc.event_count(city, EventKind::Change), 1);
    assert_eq!(doc.attribute(city, "value"), Some("old"), "Attribute untouched");
}

#[test]
fn empty_value_still_counts_as_filled() {
    let mut doc = page(r#"<textarea name="notes">draft</textarea>"#);
    let notes = find(&doc, "textarea", "name", "notes");
    assert_eq!(doc.value(notes), "draft");

    assert_eq!(fill_text(&mut doc, notes, ""), FillOutcome::Filled);
    assert_eq!(doc.value(notes), "");
}

#[test]
fn disabled_and_readonly_text_refused() {
    let mut doc = page(r#"<input name="a" value="x" disabled><input name="b" value="y" readonly>"#);
    let a = find(&doc, "input", "name", "a");
    let b = find(&doc, "input", "name", "b");

    assert_eq!(fill_text(&mut doc, a, "new"), FillOutcome::Disabled);
    assert_eq!(fill_text(&mut doc, b, "new"), FillOutcome::ReadOnly);
    assert_eq!(doc.value(a), "x");
    assert_eq!(doc.value(b), "y");
    assert!(doc.events().is_empty(), "Refused fills fire nothing");
}

// =========================================================================
// Select controls
// =========================================================================

const ID_SELECT: &str = r#"
<select name="doc">
  <option value="">Choose...</option>
  <option value="card">ID Card</option>
  <option value="number">ID Number</option>
</select>"#;

fn selected_text(doc: &sheet_fill::dom::document::Document, select: sheet_fill::dom::dom_model::NodeId) -> Option<String> {
    doc.options(select).into_iter().find(|o| o.selected).map(|o| o.text)
}

#[test]
fn short_field_name_requires_exact_option_text() {
    let mut doc = page(ID_SELECT);
    let select = find(&doc, "select", "name", "doc");

    assert_eq!(fill_select(&mut doc, select, "ID", "ID"), FillOutcome::NoOptionMatched);
    assert_eq!(selected_text(&doc, select), None, "Nothing selected on failure");

    assert_eq!(fill_select(&mut doc, select, "id card", "ID"), FillOutcome::Filled);
    assert_eq!(selected_text(&doc, select).as_deref(), Some("ID Card"));
    assert_eq!(doc.event_count(select, EventKind::Change), 1);
}

#[test]
fn long_field_name_accepts_containment_first_option_wins() {
    let mut doc = page(ID_SELECT);
    let select = find(&doc, "select", "name", "doc");

    assert_eq!(fill_select(&mut doc, select, "ID", "Identification"), FillOutcome::Filled);
    assert_eq!(selected_text(&doc, select).as_deref(), Some("ID Card"));
}

#[test]
fn option_values_are_never_matched() {
    let mut doc = page(ID_SELECT);
    let select = find(&doc, "select", "name", "doc");

    assert_eq!(
        fill_select(&mut doc, select, "number", "Document type"),
        FillOutcome::Filled,
        "'number' is found in the text 'ID Number'"
    );
    assert_eq!(selected_text(&doc, select).as_deref(), Some("ID Number"));

    assert_eq!(
        fill_select(&mut doc, select, "card", "DT"),
        FillOutcome::NoOptionMatched,
        "Exact mode compares against text, not the value 'card'"
    );
}

#[test]
fn selecting_replaces_previous_selection() {
    let mut doc = page(
        r#"<select name="size"><option selected>Small</option><option>Large</option></select>"#,
    );
    let select = find(&doc, "select", "name", "size");
    assert_eq!(selected_text(&doc, select).as_deref(), Some("Small"));

    fill_select(&mut doc, select, "large", "Size");
    let selected: Vec<_> = doc.options(select).into_iter().filter(|o| o.selected).collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].text, "Large");
}

#[test]
fn disabled_select_refused() {
    let mut doc = page(r#"<select name="s" disabled><option>One</option></select>"#);
    let select = find(&doc, "select", "name", "s");
    assert_eq!(fill_select(&mut doc, select, "One", "Select"), FillOutcome::Disabled);
}

// =========================================================================
// Checkable controls
// =========================================================================

#[test]
fn affirmative_tokens() {
    for v in ["Yes", "TRUE", "1", "checked", " on ", "Y-E-S"] {
        assert!(is_affirmative(v), "{:?} should be affirmative", v);
    }
    for v in ["No", "false", "0", "", "yes please", "x"] {
        assert!(!is_affirmative(v), "{:?} should not be affirmative", v);
    }
}

#[test]
fn checkbox_checked_through_click() {
    let mut doc = page(r#"<input type="checkbox" name="agree">"#);
    let agree = find(&doc, "input", "name", "agree");

    assert_eq!(fill_checkable(&mut doc, agree, "Yes"), FillOutcome::Filled);
    assert!(doc.is_checked(agree));
    assert_eq!(doc.event_count(agree, EventKind::Click), 1, "Activated, not assigned");
    assert_eq!(doc.event_count(agree, EventKind::Change), 1);
}

#[test]
fn checkbox_negative_value_left_alone() {
    let mut doc = page(r#"<input type="checkbox" name="agree">"#);
    let agree = find(&doc, "input", "name", "agree");

    assert_eq!(fill_checkable(&mut doc, agree, "No"), FillOutcome::NotAffirmative);
    assert!(!doc.is_checked(agree));
    assert!(doc.events().is_empty());
}

#[test]
fn checked_checkbox_not_clicked_again() {
    let mut doc = page(r#"<input type="checkbox" name="agree" checked>"#);
    let agree = find(&doc, "input", "name", "agree");

    assert_eq!(fill_checkable(&mut doc, agree, "Yes"), FillOutcome::AlreadyChecked);
    assert!(doc.is_checked(agree), "Never unchecks");
    assert!(doc.events().is_empty(), "No redundant activation");
}

#[test]
fn disabled_checkbox_refused() {
    let mut doc = page(r#"<input type="checkbox" name="agree" disabled>"#);
    let agree = find(&doc, "input", "name", "agree");
    assert_eq!(fill_checkable(&mut doc, agree, "yes"), FillOutcome::Disabled);
    assert!(!doc.is_checked(agree));
}

#[test]
fn radio_selection_moves_within_group() {
    let mut doc = page(
        r#"<form>
             <input type="radio" name="plan" id="basic" checked>
             <input type="radio" name="plan" id="pro">
           </form>"#,
    );
    let basic = find(&doc, "input", "id", "basic");
    let pro = find(&doc, "input", "id", "pro");

    assert_eq!(fill_checkable(&mut doc, pro, "on"), FillOutcome::Filled);
    assert!(doc.is_checked(pro));
    assert!(!doc.is_checked(basic), "Other radio in the group is cleared");
}

// =========================================================================
// Dispatch by kind
// =========================================================================

#[test]
fn fill_control_dispatches_on_kind() {
    let mut doc = page(
        r#"<input name="t"><input type="checkbox" name="c">
           <select name="s"><option>Alpha</option></select>"#,
    );
    let t = find(&doc, "input", "name", "t");
    let c = find(&doc, "input", "name", "c");
    let s = find(&doc, "select", "name", "s");

    let kind_t = doc.control_kind(t);
    let kind_c = doc.control_kind(c);
    let kind_s = doc.control_kind(s);

    assert_eq!(fill_control(&mut doc, t, kind_t, &FieldSpec::new("t", "yes")), FillOutcome::Filled);
    assert_eq!(doc.value(t), "yes");
    assert_eq!(fill_control(&mut doc, c, kind_c, &FieldSpec::new("c", "yes")), FillOutcome::Filled);
    assert!(doc.is_checked(c));
    assert_eq!(
        fill_control(&mut doc, s, kind_s, &FieldSpec::new("Select", "alp")),
        FillOutcome::Filled
    );
}
