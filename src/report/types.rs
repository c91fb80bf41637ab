use crate::grading::types::{Grade, StudentResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregate view over some set of student results.
///
/// Built either per batch (the report's own summary) or store-wide across
/// every stored report. Always rebuilt from scratch, never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Mean of the per-student averages. Zero for an empty result set.
    pub class_average: f64,
    /// Tally of grade tiers. Keys serialize as "A+", "A", and so on; tiers
    /// that never occur are absent rather than zero.
    pub grade_counts: HashMap<Grade, usize>,
}

impl Summary {
    /// Builds the summary for a set of results.
    pub fn of(results: &[StudentResult]) -> Self {
        let mut grade_counts = HashMap::new();
        let mut total = 0.0;
        for result in results {
            total += result.average;
            *grade_counts.entry(result.grade).or_insert(0) += 1;
        }

        let class_average = if results.is_empty() {
            0.0
        } else {
            total / results.len() as f64
        };

        Self {
            class_average,
            grade_counts,
        }
    }
}

/// One processing outcome for a batch of students.
///
/// Student order matches the submitted batch. Owned by the `ReportStore`
/// once saved; append-only, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub students: Vec<StudentResult>,
    /// Summary over this batch only. The store-wide view is recomputed
    /// separately by `ReportStore::fetch_summary`.
    pub summary: Summary,
}
