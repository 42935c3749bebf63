use chrono::{DateTime, Utc};

use crate::export::export_model::{ExportedField, FieldExport};
use crate::label::resolver::LabelSource;

// ============================================================================
// HTML reporter — self-contained field export page
// ============================================================================

/// Generate a self-contained HTML page describing a field export.
///
/// Features:
/// - Header with page title, URL and export time
/// - Summary of total vs exported fields
/// - One card per field with its detected and normalized label
/// - Select options listed with their normalized text
/// - Raw JSON of the whole export at the bottom, with a copy button
pub fn generate_export_html(export: &FieldExport) -> String {
    let mut cards = String::new();
    for field in &export.fields {
        cards.push_str(&field_card(field));
    }

    let json = serde_json::to_string_pretty(export).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e));

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Form Fields Export — {title}</title>
<style>
body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 0; padding: 20px; background: #f5f5f5; color: #333; }}
.container {{ max-width: 1200px; margin: 0 auto; }}
.header {{ background: white; padding: 24px; border-radius: 8px; margin-bottom: 20px; }}
.header h1 {{ color: #2196f3; margin: 0 0 12px 0; font-size: 24px; }}
.meta {{ color: #666; font-size: 14px; }}
.summary {{ background: #e3f2fd; padding: 16px; border-radius: 6px; margin-top: 16px; font-size: 14px; }}
.field {{ background: white; padding: 20px; border-radius: 8px; margin-bottom: 16px; }}
.field-header {{ display: flex; align-items: center; gap: 12px; margin-bottom: 12px; padding-bottom: 12px; border-bottom: 2px solid #f0f0f0; }}
.field-index {{ background: #2196f3; color: white; padding: 4px 12px; border-radius: 4px; font-weight: 600; }}
.field-tag {{ background: #4caf50; color: white; padding: 4px 8px; border-radius: 4px; font-size: 12px; }}
.field-type {{ background: #ff9800; color: white; padding: 4px 8px; border-radius: 4px; font-size: 12px; }}
.field-detected {{ font-weight: 600; color: #2196f3; flex: 1; }}
.field-info {{ display: grid; grid-template-columns: 150px 1fr; gap: 8px; font-size: 14px; }}
.field-label {{ font-weight: 600; color: #666; }}
.field-value {{ font-family: "Courier New", monospace; background: #f5f5f5; padding: 4px 8px; border-radius: 4px; }}
.field-value.empty {{ color: #999; font-style: italic; }}
.options-list {{ margin: 8px 0 0 0; padding-left: 0; list-style: none; }}
.options-list li {{ padding: 6px 12px; margin: 4px 0; background: #f9f9f9; border-left: 3px solid #2196f3; font-family: "Courier New", monospace; font-size: 13px; }}
.label-badge {{ background: #e3f2fd; color: #1976d2; padding: 4px 10px; border-radius: 12px; font-size: 12px; margin-right: 6px; }}
.copy-btn {{ background: #2196f3; color: white; border: none; padding: 8px 16px; border-radius: 4px; cursor: pointer; font-size: 14px; margin-bottom: 8px; }}
pre {{ background: white; padding: 16px; border-radius: 8px; overflow-x: auto; font-size: 12px; }}
</style>
</head>
<body>
<div class="container">
<div class="header">
<h1>Form Fields Export</h1>
<div class="meta">
<div><strong>Page:</strong> {title}</div>
<div><strong>URL:</strong> {url}</div>
<div><strong>Exported:</strong> {timestamp}</div>
</div>
<div class="summary"><strong>Summary:</strong> Found {total} total fields, exported {exported} fields (excluding hidden/submit/button fields)</div>
</div>
{cards}
<h2>Raw JSON Data</h2>
<button class="copy-btn" onclick="navigator.clipboard.writeText(document.getElementById('raw-json').textContent)">Copy JSON</button>
<pre id="raw-json">{json}</pre>
</div>
</body>
</html>"##,
        title = escape_html(&export.title),
        url = escape_html(&export.url),
        timestamp = escape_html(&format_timestamp(export.timestamp)),
        total = export.total_fields,
        exported = export.exported_fields,
        cards = cards,
        json = escape_html(&json),
    )
}

fn field_card(field: &ExportedField) -> String {
    let mut rows = String::new();
    rows.push_str(&info_row("ID", &field.id));
    rows.push_str(&info_row("Name", &field.name));
    rows.push_str(&info_row("Label source", field.label_source.map(LabelSource::as_str).unwrap_or("")));
    rows.push_str(&info_row("Normalized", &field.normalized_label));

    let optional = [
        ("Placeholder", field.placeholder.as_deref()),
        ("ARIA Label", field.aria_label.as_deref()),
        ("Autocomplete", field.autocomplete.as_deref()),
    ];
    for (title, value) in optional {
        if let Some(v) = value {
            rows.push_str(&info_row(title, v));
        }
    }

    if !field.labels.is_empty() {
        let badges: String = field
            .labels
            .iter()
            .map(|l| format!("<span class=\"label-badge\">{}</span>", escape_html(l)))
            .collect();
        rows.push_str(&format!(
            "<div class=\"field-label\">Labels:</div><div>{}</div>\n",
            badges
        ));
    }

    if !field.value.is_empty() {
        rows.push_str(&info_row("Current Value", &field.value));
    }
    if let Some(checked) = field.checked {
        rows.push_str(&info_row("Checked", if checked { "yes" } else { "no" }));
    }

    for (flag, text) in [
        (field.disabled, "DISABLED"),
        (field.read_only, "READ-ONLY"),
        (field.required, "REQUIRED"),
    ] {
        if flag {
            rows.push_str(&info_row("Status", text));
        }
    }

    if let Some(options) = &field.options {
        let items: String = options
            .iter()
            .map(|opt| {
                format!(
                    "<li><strong>Text:</strong> {} <strong>Value:</strong> {}<br><strong>Normalized:</strong> {}{}</li>\n",
                    escape_html(&opt.text),
                    escape_html(&opt.value),
                    escape_html(&opt.normalized_text),
                    if opt.selected { " (selected)" } else { "" },
                )
            })
            .collect();
        rows.push_str(&format!(
            "<div class=\"field-label\">Options:</div><div><ul class=\"options-list\">\n{}</ul></div>\n",
            items
        ));
    }

    format!(
        r#"<div class="field">
<div class="field-header">
<span class="field-index">#{index}</span>
<span class="field-tag">{tag}</span>
<span class="field-type">{input_type}</span>
<span class="field-detected">{detected}</span>
</div>
<div class="field-info">
{rows}</div>
</div>
"#,
        index = field.index,
        tag = escape_html(&field.tag),
        input_type = escape_html(&field.input_type),
        detected = escape_html(&field.detected_label),
        rows = rows,
    )
}

fn info_row(title: &str, value: &str) -> String {
    if value.is_empty() {
        format!(
            "<div class=\"field-label\">{}:</div><div class=\"field-value empty\">(none)</div>\n",
            title
        )
    } else {
        format!(
            "<div class=\"field-label\">{}:</div><div class=\"field-value\">{}</div>\n",
            title,
            escape_html(value)
        )
    }
}

/// Render epoch milliseconds as a UTC date and time, or the raw number
/// when it is out of range.
pub fn format_timestamp(timestamp_ms: u128) -> String {
    i64::try_from(timestamp_ms)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| timestamp_ms.to_string())
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
