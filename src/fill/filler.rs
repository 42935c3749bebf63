use crate::dom::dom_model::{ControlKind, FormDom, NodeId};
use crate::fill::fill_model::{FieldSpec, FillOutcome};
use crate::text::normalize::normalize;

/// Normalized values that mean "check this box".
pub const AFFIRMATIVE_VALUES: [&str; 5] = ["yes", "true", "1", "checked", "on"];

/// Field names whose normalized form is shorter than this select options by
/// exact text; longer names accept containment.
pub const EXACT_OPTION_MATCH_BELOW: usize = 3;

/// Apply `spec.value` to `control` using the strategy for its kind.
pub fn fill_control(
    dom: &mut dyn FormDom,
    control: NodeId,
    kind: ControlKind,
    spec: &FieldSpec,
) -> FillOutcome {
    match kind {
        ControlKind::Select => fill_select(dom, control, &spec.value, &spec.name),
        ControlKind::Checkbox | ControlKind::Radio => fill_checkable(dom, control, &spec.value),
        ControlKind::Text | ControlKind::TextArea => fill_text(dom, control, &spec.value),
        ControlKind::Skip => FillOutcome::Unsupported,
    }
}

/// Set a text input or textarea verbatim and fire one change event.
/// Empty values still count as filled.
pub fn fill_text(dom: &mut dyn FormDom, control: NodeId, value: &str) -> FillOutcome {
    if dom.is_disabled(control) {
        return FillOutcome::Disabled;
    }
    if dom.is_read_only(control) {
        return FillOutcome::ReadOnly;
    }

    dom.set_value(control, value);
    dom.dispatch_change(control);

    FillOutcome::Filled
}

/// Select the first option whose display text matches `value`.
///
/// The field name, not the control, decides the policy: a short normalized
/// name (under [`EXACT_OPTION_MATCH_BELOW`]) demands exact normalized text,
/// otherwise the option text only has to contain the value. Option values
/// are never consulted.
pub fn fill_select(
    dom: &mut dyn FormDom,
    control: NodeId,
    value: &str,
    field_name: &str,
) -> FillOutcome {
    if dom.is_disabled(control) {
        return FillOutcome::Disabled;
    }

    let wanted = normalize(value);
    let exact = normalize(field_name).chars().count() < EXACT_OPTION_MATCH_BELOW;

    let index = dom.options(control).iter().position(|opt| {
        let text = normalize(&opt.text);
        if exact {
            text == wanted
        } else {
            text.contains(&wanted)
        }
    });

    match index {
        Some(i) => {
            dom.select_option(control, i);
            dom.dispatch_change(control);
            FillOutcome::Filled
        }
        None => FillOutcome::NoOptionMatched,
    }
}

/// Check a checkbox or radio when `value` is yes-like.
///
/// Goes through the control's click activation so page handlers run as
/// they would for a user. Never unchecks.
pub fn fill_checkable(dom: &mut dyn FormDom, control: NodeId, value: &str) -> FillOutcome {
    if dom.is_disabled(control) {
        return FillOutcome::Disabled;
    }
    if !is_affirmative(value) {
        return FillOutcome::NotAffirmative;
    }
    if dom.is_checked(control) {
        return FillOutcome::AlreadyChecked;
    }

    dom.activate(control);
    FillOutcome::Filled
}

pub fn is_affirmative(value: &str) -> bool {
    let normalized = normalize(value);
    AFFIRMATIVE_VALUES.contains(&normalized.as_str())
}
