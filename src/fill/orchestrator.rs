use std::collections::HashSet;

use crate::dom::dom_model::{ControlKind, FormDom, NodeId};
use crate::fill::fill_model::{ControlOutcome, FieldSpec, FillReport};
use crate::fill::filler::fill_control;
use crate::label::matcher::matches;
use crate::label::resolver::resolve_label_with_source;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::FillTraceEvent;

/// Where a pass reports its per-control decisions.
#[derive(Clone, Copy)]
pub struct PassTrace<'a> {
    pub logger: &'a TraceLogger,
    pub pass: u64,
}

/// Run one fill pass and return how many controls were filled.
pub fn fill_form(dom: &mut dyn FormDom, specs: &[FieldSpec]) -> usize {
    run_fill_pass(dom, specs, None).filled
}

/// Run one fill pass over every control of `dom`.
///
/// Each control's label is matched against `specs` in order. The first
/// matching spec is the only one tried for that control, even when its
/// fill is refused; a refused control is simply not counted. Controls are
/// filled at most once per pass.
pub fn run_fill_pass(
    dom: &mut dyn FormDom,
    specs: &[FieldSpec],
    trace: Option<PassTrace<'_>>,
) -> FillReport {
    let mut report = FillReport::default();
    let mut filled: HashSet<NodeId> = HashSet::new();

    for control in dom.controls() {
        if filled.contains(&control) {
            continue;
        }

        let kind = dom.control_kind(control);
        if kind == ControlKind::Skip {
            continue;
        }

        let Some(label) = resolve_label_with_source(&*dom, control) else {
            report.unlabelled += 1;
            continue;
        };

        let Some(spec) = specs.iter().find(|spec| matches(&label.text, &spec.name)) else {
            report.unmatched += 1;
            continue;
        };

        let outcome = fill_control(dom, control, kind, spec);
        if outcome.is_filled() {
            report.filled += 1;
            filled.insert(control);
        }

        let matched = ControlOutcome {
            control,
            kind,
            label: label.text,
            label_source: label.source,
            field_name: spec.name.clone(),
            outcome,
        };

        if let Some(trace) = trace {
            trace.logger.log(&FillTraceEvent::from_outcome(
                trace.pass,
                control_identifier(&*dom, control),
                &matched,
            ));
        }

        report.matched.push(matched);
    }

    report
}

/// Short handle for a control in logs: its id, else its name, else its
/// node index.
pub fn control_identifier(dom: &dyn FormDom, control: NodeId) -> String {
    ["id", "name"]
        .iter()
        .filter_map(|attr| dom.attribute(control, attr))
        .map(str::trim)
        .find(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", control.0))
}
