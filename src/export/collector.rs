use sha1::{Digest, Sha1};

use crate::dom::dom_model::{ControlKind, FormDom, NodeId};
use crate::export::export_model::{ExportedField, ExportedOption, FieldExport};
use crate::label::resolver::{associated_labels, resolve_label_with_source};
use crate::text::normalize::normalize;
use crate::trace::trace::now_ms;

/// Snapshot every fillable control of `dom` for diagnostics.
///
/// Shares label resolution and normalization with the fill pass but never
/// matches or mutates anything.
pub fn export_fields(dom: &dyn FormDom) -> FieldExport {
    let controls = dom.controls();
    let total_fields = controls.len();

    let fields: Vec<ExportedField> = controls
        .into_iter()
        .filter(|&c| dom.control_kind(c) != ControlKind::Skip)
        .enumerate()
        .map(|(i, c)| export_control(dom, c, i + 1))
        .collect();

    FieldExport {
        title: dom.title(),
        url: dom.url().unwrap_or("").to_string(),
        timestamp: now_ms(),
        total_fields,
        exported_fields: fields.len(),
        fields,
    }
}

fn export_control(dom: &dyn FormDom, control: NodeId, index: usize) -> ExportedField {
    let kind = dom.control_kind(control);
    let tag = dom.tag_name(control).unwrap_or("").to_string();
    let input_type = dom.control_type(control);
    let id = dom.attribute(control, "id").unwrap_or("").to_string();
    let name = dom.attribute(control, "name").unwrap_or("").to_string();

    let resolved = resolve_label_with_source(dom, control);
    let detected_label = resolved.as_ref().map(|r| r.text.clone()).unwrap_or_default();
    let label_source = resolved.map(|r| r.source);

    let options = (kind == ControlKind::Select).then(|| {
        dom.options(control)
            .into_iter()
            .map(|opt| ExportedOption {
                normalized_text: normalize(&opt.text),
                text: opt.text,
                value: opt.value,
                selected: opt.selected,
            })
            .collect()
    });

    let value = match kind {
        ControlKind::Select => {
            // With nothing marked selected a single-choice select shows its first option
            let options = dom.options(control);
            options
                .iter()
                .find(|opt| opt.selected)
                .or_else(|| options.first())
                .map(|opt| opt.value.clone())
                .unwrap_or_default()
        }
        ControlKind::Checkbox | ControlKind::Radio => {
            dom.attribute(control, "value").unwrap_or("on").to_string()
        }
        _ => dom.value(control),
    };

    ExportedField {
        index,
        fingerprint: control_fingerprint(&tag, &input_type, &id, &name),
        tag,
        input_type,
        placeholder: non_empty_attr(dom, control, "placeholder"),
        aria_label: non_empty_attr(dom, control, "aria-label"),
        autocomplete: non_empty_attr(dom, control, "autocomplete"),
        labels: associated_labels(dom, control),
        normalized_label: normalize(&detected_label),
        detected_label,
        label_source,
        id,
        name,
        value,
        disabled: dom.is_disabled(control),
        read_only: dom.is_read_only(control),
        required: dom.is_required(control),
        checked: kind.is_checkable().then(|| dom.is_checked(control)),
        options,
    }
}

fn non_empty_attr(dom: &dyn FormDom, control: NodeId, name: &str) -> Option<String> {
    dom.attribute(control, name)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Stable identity of a control across exports of the same page.
pub fn control_fingerprint(tag: &str, input_type: &str, id: &str, name: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(format!("{}|{}|{}|{}", tag, input_type, id, name).as_bytes());
    format!("{:x}", hasher.finalize())
}
