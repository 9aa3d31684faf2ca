use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use support_report::report::{AssessmentReport, NewReport, ReportStore, StoreError};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-lifetime report archive keyed by an auto-incrementing counter.
/// No eviction; contents vanish on restart.
#[derive(Default)]
pub(crate) struct InMemoryReportStore {
    reports: Mutex<BTreeMap<u64, AssessmentReport>>,
    sequence: AtomicU64,
}

impl ReportStore for InMemoryReportStore {
    fn put(&self, report: NewReport) -> Result<AssessmentReport, StoreError> {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let stored = AssessmentReport {
            id,
            assessment_data: report.assessment_data,
            final_score: report.final_score,
            created_at: report.created_at,
        };

        let mut guard = self.reports.lock().expect("report store mutex poisoned");
        guard.insert(id, stored.clone());
        Ok(stored)
    }

    fn list(&self) -> Result<Vec<AssessmentReport>, StoreError> {
        let guard = self.reports.lock().expect("report store mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}
