//! Store Module Tests
//!
//! Validates append-only semantics, snapshot isolation and the derived
//! store-wide summary.
//!
//! ## Test Scopes
//! - **Accumulation**: append order, concurrent saves.
//! - **Summary**: flattened per-student mean across reports, and the
//!   distinction between "no data" and "data averaging to zero".
//! - **Snapshots**: defensive copies unaffected by later saves.

#[cfg(test)]
mod tests {
    use crate::grading::types::{Grade, StudentInput};
    use crate::report::processor::process;
    use crate::report::types::Report;
    use crate::store::handlers::handle_summary;
    use crate::store::memory::ReportStore;
    use axum::Extension;
    use std::sync::Arc;

    async fn report_for(marks_per_student: &[&[i32]]) -> Report {
        let students = marks_per_student
            .iter()
            .enumerate()
            .map(|(i, marks)| StudentInput {
                name: format!("student-{}", i),
                marks: marks.to_vec(),
            })
            .collect();
        process(students).await.unwrap()
    }

    // ============================================================
    // ACCUMULATION
    // ============================================================

    #[tokio::test]
    async fn test_store_keeps_append_order() {
        let store = ReportStore::new();
        let first = report_for(&[&[90]]).await;
        let second = report_for(&[&[50]]).await;

        store.save(first.clone()).await;
        store.save(second.clone()).await;

        assert_eq!(store.get_all().await, vec![first, second]);
    }

    #[tokio::test]
    async fn test_concurrent_saves_lose_nothing() {
        let store = Arc::new(ReportStore::new());
        let report = report_for(&[&[75]]).await;

        let mut handles = Vec::new();
        for _ in 0..32 {
            let store = store.clone();
            let report = report.clone();
            handles.push(tokio::spawn(async move {
                store.save(report).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.len().await, 32);

        let summary = store.fetch_summary().await.unwrap();
        assert_eq!(summary.class_average, 75.0);
        assert_eq!(summary.grade_counts.get(&Grade::A), Some(&32));
    }

    #[tokio::test]
    async fn test_all_students_flattens_in_append_order() {
        let store = ReportStore::new();
        store.save(report_for(&[&[90], &[50]]).await).await;
        store.save(report_for(&[&[10]]).await).await;

        let students = store.all_students().await;

        assert_eq!(students.len(), 3);
        // Two students of the first report, then the one of the second.
        assert_eq!(students[0].grade, Grade::APlus);
        assert_eq!(students[1].grade, Grade::C);
        assert_eq!(students[2].grade, Grade::F);
    }

    // ============================================================
    // SUMMARY
    // ============================================================

    #[tokio::test]
    async fn test_fetch_summary_on_empty_store_is_none() {
        let store = ReportStore::new();
        assert!(store.fetch_summary().await.is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_summary_is_flattened_across_reports() {
        let store = ReportStore::new();

        // One report with a single student (avg 90), one with three
        // students (avg 50 each). The flattened mean weights students,
        // not reports: (90 + 3 * 50) / 4 = 60.
        store.save(report_for(&[&[90]]).await).await;
        store.save(report_for(&[&[50], &[50], &[50]]).await).await;

        let summary = store.fetch_summary().await.unwrap();

        assert_eq!(summary.class_average, 60.0);
        assert_eq!(summary.grade_counts.get(&Grade::APlus), Some(&1));
        assert_eq!(summary.grade_counts.get(&Grade::C), Some(&3));
    }

    #[tokio::test]
    async fn test_zero_average_data_is_distinct_from_no_data() {
        let store = ReportStore::new();
        store.save(report_for(&[&[]]).await).await;

        // One stored student with no marks: a real summary, average zero.
        let summary = store.fetch_summary().await.unwrap();
        assert_eq!(summary.class_average, 0.0);
        assert_eq!(summary.grade_counts.get(&Grade::F), Some(&1));
    }

    #[tokio::test]
    async fn test_summary_handler_returns_null_marker_when_empty() {
        let store = Arc::new(ReportStore::new());

        let response = handle_summary(Extension(store.clone())).await;
        assert!(response.0.is_none());

        store.save(report_for(&[&[80]]).await).await;

        let response = handle_summary(Extension(store)).await;
        assert_eq!(response.0.unwrap().class_average, 80.0);
    }

    // ============================================================
    // SNAPSHOTS
    // ============================================================

    #[tokio::test]
    async fn test_snapshot_is_isolated_from_later_saves() {
        let store = ReportStore::new();
        store.save(report_for(&[&[70]]).await).await;

        let snapshot = store.get_all().await;
        store.save(report_for(&[&[30]]).await).await;

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_snapshot_mutation_does_not_affect_store() {
        let store = ReportStore::new();
        store.save(report_for(&[&[70]]).await).await;

        let mut snapshot = store.get_all().await;
        snapshot.clear();

        assert_eq!(store.len().await, 1);
    }
}
