use std::fmt;

#[derive(Debug)]
pub enum HostError {
    /// Page file could not be read
    PageRead { path: String, source: std::io::Error },

    /// HTTP request for the page failed before a response arrived
    Http { url: String, source: reqwest::Error },

    /// Page server answered with a non-success status
    HttpStatus { url: String, status: u16 },

    /// JSON parsing failed (request line or pasted payload)
    JsonParse { context: String, source: serde_json::Error },

    /// JSON serialization failed (response or export)
    JsonSerialize { context: String, source: serde_json::Error },

    /// Request line was not valid UTF-8
    RequestEncoding(std::string::FromUtf8Error),

    /// Reading requests or writing responses failed
    SessionIO(String),

    /// Request named a mode this host does not handle
    UnknownRequest(String),
}

impl HostError {
    /// True when the page itself could not be reached, as opposed to a
    /// malformed request. Callers use this to suggest reloading the page
    /// instead of reporting "0 fields filled".
    pub fn is_page_unavailable(&self) -> bool {
        matches!(
            self,
            HostError::PageRead { .. } | HostError::Http { .. } | HostError::HttpStatus { .. }
        )
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::PageRead { path, source } => {
                write!(f, "Failed to read page {}: {}", path, source)
            }
            HostError::Http { url, source } => {
                write!(f, "Failed to fetch {}: {}", url, source)
            }
            HostError::HttpStatus { url, status } => {
                write!(f, "Fetching {} returned HTTP {}", url, status)
            }
            HostError::JsonParse { context, source } => {
                write!(f, "JSON parse error ({}): {}", context, source)
            }
            HostError::JsonSerialize { context, source } => {
                write!(f, "JSON serialize error ({}): {}", context, source)
            }
            HostError::RequestEncoding(source) => {
                write!(f, "Request is not valid UTF-8: {}", source)
            }
            HostError::SessionIO(msg) => {
                write!(f, "Session I/O failed: {}", msg)
            }
            HostError::UnknownRequest(form) => {
                write!(f, "Unknown request form '{}'", form)
            }
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HostError::PageRead { source, .. } => Some(source),
            HostError::Http { source, .. } => Some(source),
            HostError::JsonParse { source, .. } => Some(source),
            HostError::JsonSerialize { source, .. } => Some(source),
            HostError::RequestEncoding(source) => Some(source),
            _ => None,
        }
    }
}
