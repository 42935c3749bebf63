use crate::export::export_model::FieldExport;
use crate::fill::fill_model::FillReport;

// ============================================================================
// Console reporter — terminal summaries
// ============================================================================

/// Format a fill pass for the terminal.
///
/// Produces output like:
/// ```text
/// ✓ "fname" ← First Name
/// ✗ "email" ← Email (disabled)
///
/// Filled: 1 field(s)
/// ```
/// The per-control lines only appear when `verbose` is set.
pub fn format_fill_summary(report: &FillReport, verbose: bool) -> String {
    let mut out = String::new();

    if verbose {
        for m in &report.matched {
            if m.outcome.is_filled() {
                out.push_str(&format!(
                    "\u{2713} \"{}\" \u{2190} {}\n",
                    m.label, m.field_name
                ));
            } else {
                out.push_str(&format!(
                    "\u{2717} \"{}\" \u{2190} {} ({})\n",
                    m.label,
                    m.field_name,
                    m.outcome.as_str()
                ));
            }
        }

        if report.unlabelled > 0 || report.unmatched > 0 {
            out.push_str(&format!(
                "  ({} without label, {} unmatched)\n",
                report.unlabelled, report.unmatched
            ));
        }

        if !out.is_empty() {
            out.push('\n');
        }
    }

    out.push_str(&format!("Filled: {} field(s)\n", report.filled));
    out
}

/// One line per exported field: index, type, detected label.
pub fn format_export_summary(export: &FieldExport) -> String {
    let mut out = format!(
        "=== {} ({} of {} fields) ===\n",
        if export.title.is_empty() { "(untitled)" } else { &export.title },
        export.exported_fields,
        export.total_fields
    );

    for field in &export.fields {
        out.push_str(&format!(
            "#{:<3} {:<10} {}\n",
            field.index, field.input_type, field.detected_label
        ));
    }

    out
}
