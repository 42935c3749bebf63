use std::io::Read;

use crate::cli::config::{
    AppConfig, resolve_export_format, resolve_export_output, resolve_trace_file,
};
use crate::dom::loader::load_page;
use crate::export::collector::export_fields;
use crate::fill::orchestrator::{PassTrace, run_fill_pass};
use crate::host::content_script::ContentScript;
use crate::host::error::HostError;
use crate::host::session::HostSession;
use crate::paste::parser::parse_pasted;
use crate::report::console::{format_export_summary, format_fill_summary};
use crate::report::html::generate_export_html;
use crate::trace::logger::TraceLogger;

// ============================================================================
// fill subcommand
// ============================================================================

/// Fill a page from pasted rows and return the number of controls filled.
pub fn cmd_fill(
    page: &str,
    data: &str,
    repeat: bool,
    output: Option<&str>,
    trace: Option<&str>,
    verbose: u8,
    config: &AppConfig,
) -> Result<usize, Box<dyn std::error::Error>> {
    let pasted = read_data(data)?;
    let specs = parse_pasted(&pasted);

    if specs.is_empty() {
        eprintln!("No data to fill");
        return Ok(0);
    }

    if verbose > 0 {
        eprintln!("Parsed {} field(s) from {}", specs.len(), data);
        if repeat {
            eprintln!("Note: --repeat has no effect on a single fill pass");
        }
    }

    let mut doc = load_page(page, &config.http).map_err(explain_page_error)?;

    let tracer = match resolve_trace_file(trace, config) {
        Some(path) => TraceLogger::new(&path),
        None => TraceLogger::disabled(),
    };
    let pass_trace = PassTrace {
        logger: &tracer,
        pass: 1,
    };

    let report = run_fill_pass(&mut doc, &specs, Some(pass_trace));
    print!("{}", format_fill_summary(&report, verbose > 0));

    if let Some(path) = output {
        let export = export_fields(&doc);
        std::fs::write(path, serde_json::to_string_pretty(&export)?)?;
        if verbose > 0 {
            eprintln!("Wrote filled state to {}", path);
        }
    }

    Ok(report.filled)
}

// ============================================================================
// export subcommand
// ============================================================================

pub fn cmd_export(
    page: &str,
    format: Option<&str>,
    output: Option<&str>,
    verbose: u8,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_page(page, &config.http).map_err(explain_page_error)?;
    let export = export_fields(&doc);

    let format = resolve_export_format(format, config);
    let content = match format.as_str() {
        "json" => serde_json::to_string_pretty(&export)?,
        "console" => format_export_summary(&export),
        _ => generate_export_html(&export),
    };

    match resolve_export_output(output, config) {
        Some(path) => {
            std::fs::write(&path, &content)?;
            if verbose > 0 {
                eprintln!("Wrote {} export to {}", format, path);
            }
        }
        None => print!("{}", content),
    }

    eprintln!("Exported {} fields", export.exported_fields);
    Ok(())
}

// ============================================================================
// serve subcommand
// ============================================================================

pub fn cmd_serve(
    page: &str,
    trace: Option<&str>,
    verbose: u8,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_page(page, &config.http).map_err(explain_page_error)?;

    let mut script = ContentScript::new(doc);
    if let Some(path) = resolve_trace_file(trace, config) {
        script = script.with_tracer(TraceLogger::new(&path));
    }

    if verbose > 0 {
        eprintln!("Serving {} (one JSON request per line, {{\"form\":\"quit\"}} to stop)", page);
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = HostSession::new(stdin.lock(), stdout.lock());
    let stats = session.run(&mut script)?;

    if verbose > 0 {
        eprintln!(
            "Session ended: {} request(s), {} error(s), {} fill pass(es)",
            stats.requests,
            stats.errors,
            script.passes()
        );
    }

    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Read pasted rows from a file, or from stdin for "-".
pub fn read_data(data: &str) -> Result<String, Box<dyn std::error::Error>> {
    if data == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(data)?)
    }
}

/// Print a hint for an unreachable page and pass the error on, so callers
/// never mistake it for an empty fill.
fn explain_page_error(err: HostError) -> HostError {
    if err.is_page_unavailable() {
        eprintln!("Page not available - check the path or reload the page and retry");
    }
    err
}
