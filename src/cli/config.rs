use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "sheet-fill",
    version,
    about = "Fill web forms from pasted spreadsheet rows"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: sheet-fill.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill a page's form controls from pasted "name,value" lines
    Fill {
        /// Page to fill: file path or http(s) URL
        #[arg(long)]
        page: String,

        /// Pasted rows to apply; "-" reads stdin
        #[arg(long, default_value = "-")]
        data: String,

        /// Accepted for compatibility with the extension; has no effect
        #[arg(long, default_value_t = false)]
        repeat: bool,

        /// Write a JSON export of the filled controls to this file
        #[arg(short, long)]
        output: Option<String>,

        /// Append per-control decisions as JSON lines to this file
        #[arg(long)]
        trace: Option<String>,
    },

    /// Export every fillable control with its detected label
    Export {
        /// Page to inspect: file path or http(s) URL
        #[arg(long)]
        page: String,

        /// Output format: html, json, console
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Answer NDJSON fill/export requests on stdin for one loaded page
    Serve {
        /// Page to serve: file path or http(s) URL
        #[arg(long)]
        page: String,

        /// Append per-control decisions as JSON lines to this file
        #[arg(long)]
        trace: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `sheet-fill.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub fill: FillConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FillConfig {
    pub trace_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_html")]
    pub format: String,

    pub output: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: "html".to_string(),
            output: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

// Serde default helpers
fn default_html() -> String { "html".to_string() }
fn default_timeout_secs() -> u64 { 30 }
fn default_user_agent() -> String { format!("sheet-fill/{}", env!("CARGO_PKG_VERSION")) }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("sheet-fill.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Resolution (CLI > config file > defaults)
// ============================================================================

pub fn resolve_trace_file(cli_trace: Option<&str>, config: &AppConfig) -> Option<String> {
    cli_trace
        .map(str::to_string)
        .or_else(|| config.fill.trace_file.clone())
}

pub fn resolve_export_format(cli_format: Option<&str>, config: &AppConfig) -> String {
    cli_format
        .map(str::to_string)
        .unwrap_or_else(|| config.export.format.clone())
}

pub fn resolve_export_output(cli_output: Option<&str>, config: &AppConfig) -> Option<String> {
    cli_output
        .map(str::to_string)
        .or_else(|| config.export.output.clone())
}
