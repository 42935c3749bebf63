use std::io::{BufRead, Write};

use crate::host::content_script::ContentScript;
use crate::host::error::HostError;
use crate::host::message::{HostRequest, HostResponse};

/// Counters for one finished session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub requests: usize,
    pub errors: usize,
}

/// Request/response loop between a host and a [`ContentScript`].
///
/// Requests arrive as NDJSON on `reader`, one response line is written to
/// `writer` per request. Blank lines are ignored. A malformed request gets
/// an error response and the loop carries on; `quit` or end of input ends
/// it.
pub struct HostSession<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> HostSession<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn run(&mut self, script: &mut ContentScript) -> Result<SessionStats, HostError> {
        let mut stats = SessionStats::default();
        let mut buf: Vec<u8> = Vec::new();

        loop {
            buf.clear();
            let read = self
                .reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| HostError::SessionIO(format!("Failed to read request: {}", e)))?;
            if read == 0 {
                break;
            }

            // A badly encoded line is a malformed request, not a broken pipe
            let line = match String::from_utf8(std::mem::take(&mut buf)) {
                Ok(line) => line,
                Err(e) => {
                    stats.requests += 1;
                    stats.errors += 1;
                    self.respond(&HostResponse::error(&HostError::RequestEncoding(e)))?;
                    continue;
                }
            };

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            stats.requests += 1;

            let request = match HostRequest::parse_line(trimmed) {
                Ok(r) => r,
                Err(e) => {
                    stats.errors += 1;
                    self.respond(&HostResponse::error(&e))?;
                    continue;
                }
            };

            let response = script.handle(&request);
            self.respond(&response)?;

            if request == HostRequest::Quit {
                break;
            }
        }

        Ok(stats)
    }

    fn respond(&mut self, response: &HostResponse) -> Result<(), HostError> {
        let json = serde_json::to_string(response).map_err(|e| HostError::JsonSerialize {
            context: "host response".into(),
            source: e,
        })?;

        writeln!(self.writer, "{}", json)
            .and_then(|_| self.writer.flush())
            .map_err(|e| HostError::SessionIO(format!("Failed to write response: {}", e)))
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
