use crate::grading::types::StudentResult;
use crate::report::types::{Report, Summary};

use tokio::sync::RwLock;

/// Shared, append-only, in-memory collection of every processed report.
///
/// Constructed once at startup and handed to every request handler behind an
/// `Arc`. The list only grows: no report is removed or mutated after append.
/// Contents are volatile and do not survive a process restart.
#[derive(Debug, Default)]
pub struct ReportStore {
    reports: RwLock<Vec<Report>>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self {
            reports: RwLock::new(Vec::new()),
        }
    }

    /// Appends one report.
    ///
    /// Atomic with respect to concurrent readers: a snapshot either contains
    /// the whole report or does not contain it at all.
    pub async fn save(&self, report: Report) {
        let mut reports = self.reports.write().await;
        reports.push(report);
        tracing::debug!("Stored report #{}", reports.len());
    }

    /// Store-wide summary over every student of every stored report.
    ///
    /// The class average is the flattened per-student mean, not a mean of
    /// per-report summaries. Returns `None` when nothing has been stored
    /// yet; callers must be able to tell "no data" apart from data that
    /// happens to average to zero.
    pub async fn fetch_summary(&self) -> Option<Summary> {
        let reports = self.reports.read().await;
        if reports.is_empty() {
            return None;
        }

        let students: Vec<StudentResult> = reports
            .iter()
            .flat_map(|report| report.students.iter().cloned())
            .collect();

        Some(Summary::of(&students))
    }

    /// Snapshot of all reports in append order.
    ///
    /// The returned vector is a defensive copy: the caller may mutate it
    /// freely, and later `save` calls never show up in a snapshot handed out
    /// earlier.
    pub async fn get_all(&self) -> Vec<Report> {
        self.reports.read().await.clone()
    }

    /// Flattened listing of every student result across all reports, in
    /// append order.
    pub async fn all_students(&self) -> Vec<StudentResult> {
        self.reports
            .read()
            .await
            .iter()
            .flat_map(|report| report.students.iter().cloned())
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.reports.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.reports.read().await.is_empty()
    }
}
