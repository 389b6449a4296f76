//! JSON report adapter.
//!
//! Renders the evaluation report as indented JSON, to stdout or a file.

use crate::domain::error::SigcheckError;
use crate::domain::evaluation::EvaluationReport;
use crate::ports::report_port::ReportPort;
use std::fs;
use std::path::Path;

#[derive(Default)]
pub struct JsonReportAdapter;

impl JsonReportAdapter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, report: &EvaluationReport) -> Result<String, SigcheckError> {
        serde_json::to_string_pretty(report).map_err(|e| SigcheckError::Data {
            reason: format!("failed to serialize report: {}", e),
        })
    }
}

impl ReportPort for JsonReportAdapter {
    fn write(
        &self,
        report: &EvaluationReport,
        output_path: Option<&Path>,
    ) -> Result<(), SigcheckError> {
        let rendered = self.render(report)?;
        match output_path {
            Some(path) => fs::write(path, rendered + "\n")?,
            None => println!("{}", rendered),
        }
        Ok(())
    }
}
