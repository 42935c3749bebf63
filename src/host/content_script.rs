use crate::dom::document::Document;
use crate::export::collector::export_fields;
use crate::export::export_model::FieldExport;
use crate::fill::fill_model::{FieldSpec, FillReport};
use crate::fill::orchestrator::{PassTrace, run_fill_pass};
use crate::host::message::{HostRequest, HostResponse};
use crate::trace::logger::TraceLogger;

/// Page-side endpoint: owns one loaded document and answers host requests
/// against it. The document keeps its state between requests; each fill
/// request is an independent pass.
pub struct ContentScript {
    document: Document,
    tracer: TraceLogger,
    passes: u64,
}

impl ContentScript {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            tracer: TraceLogger::disabled(),
            passes: 0,
        }
    }

    pub fn with_tracer(mut self, tracer: TraceLogger) -> Self {
        self.tracer = tracer;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Number of fill passes run so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    pub fn fill(&mut self, specs: &[FieldSpec]) -> FillReport {
        self.passes += 1;
        let trace = PassTrace {
            logger: &self.tracer,
            pass: self.passes,
        };
        run_fill_pass(&mut self.document, specs, Some(trace))
    }

    pub fn export(&self) -> FieldExport {
        export_fields(&self.document)
    }

    pub fn handle(&mut self, request: &HostRequest) -> HostResponse {
        match request {
            HostRequest::Fill { .. } => {
                let report = self.fill(&request.field_specs());
                HostResponse::filled(report.filled)
            }
            HostRequest::Export => HostResponse::export(self.export()),
            HostRequest::Quit => HostResponse::ok(),
        }
    }
}
