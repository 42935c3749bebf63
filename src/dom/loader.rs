use std::time::Duration;

use crate::cli::config::HttpConfig;
use crate::dom::document::Document;
use crate::host::error::HostError;

/// Whether `source` names a remote page rather than a local file.
pub fn is_remote(source: &str) -> bool {
    let lower = source.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Load and parse a page from a file path or an http(s) URL.
pub fn load_page(source: &str, http: &HttpConfig) -> Result<Document, HostError> {
    if is_remote(source) {
        let html = fetch_page(source, http)?;
        Ok(Document::parse_html(&html, Some(source)))
    } else {
        let html = std::fs::read_to_string(source).map_err(|e| HostError::PageRead {
            path: source.to_string(),
            source: e,
        })?;
        Ok(Document::parse_html(&html, Some(&file_url(source))))
    }
}

fn fetch_page(url: &str, http: &HttpConfig) -> Result<String, HostError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(http.timeout_secs))
        .user_agent(http.user_agent.clone())
        .build()
        .map_err(|e| HostError::Http {
            url: url.to_string(),
            source: e,
        })?;

    let response = client.get(url).send().map_err(|e| HostError::Http {
        url: url.to_string(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(HostError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().map_err(|e| HostError::Http {
        url: url.to_string(),
        source: e,
    })
}

fn file_url(path: &str) -> String {
    let absolute = std::fs::canonicalize(path)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.to_string());
    format!("file://{}", absolute)
}
