//! Support-needs assessment report generation.
//!
//! Turns a structured assessment of 32 fixed daily-living activities into the
//! Polish "poziom potrzeby wsparcia" DOCX form, and keeps a process-lifetime
//! archive of generated submissions behind the [`report::ReportStore`] trait.

pub mod config;
pub mod error;
pub mod report;
pub mod telemetry;
