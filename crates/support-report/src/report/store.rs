use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::ReportRequest;

/// Archived submission as returned by the store, with its assigned
/// sequential identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub id: u64,
    pub assessment_data: ReportRequest,
    pub final_score: f64,
    pub created_at: DateTime<Utc>,
}

/// Submission record before an identifier is assigned.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub assessment_data: ReportRequest,
    pub final_score: f64,
    pub created_at: DateTime<Utc>,
}

/// Storage abstraction so the generation flow can be exercised in isolation
/// and the process-lifetime map can be swapped for real persistence later.
pub trait ReportStore: Send + Sync {
    fn put(&self, report: NewReport) -> Result<AssessmentReport, StoreError>;
    fn list(&self) -> Result<Vec<AssessmentReport>, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("report store unavailable: {0}")]
    Unavailable(String),
}
