//! Report assembly pipeline: catalog and code tables, row derivation, and
//! DOCX document construction for the support-level form.

pub mod assembler;
pub mod catalog;
pub mod codes;
pub mod document;
pub mod domain;
pub mod rows;
pub mod store;

pub use assembler::{render, render_with, DOCX_CONTENT_TYPE, REPORT_FILENAME};
pub use domain::{
    ActivityAssessment, Assessment, DisabilityType, ReportRequest, ReportVariant, ScaleSelection,
};
pub use rows::{derive_rows, ActivityRows, ReportRow};
pub use store::{AssessmentReport, NewReport, ReportStore, StoreError};

/// Failures raised while assembling or serializing a report document.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("DOCX generation failed: {0}")]
    Docx(String),
}
