//! Report output port trait.

use crate::domain::error::SigcheckError;
use crate::domain::evaluation::EvaluationReport;
use std::path::Path;

/// Port for emitting an evaluation report.
pub trait ReportPort {
    /// Write the report to `output_path`, or to stdout when `None`.
    fn write(
        &self,
        report: &EvaluationReport,
        output_path: Option<&Path>,
    ) -> Result<(), SigcheckError>;
}
