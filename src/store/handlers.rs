use super::memory::ReportStore;
use crate::grading::types::StudentResult;
use crate::report::types::{Report, Summary};

use axum::{Extension, Json};
use std::sync::Arc;

/// Store-wide summary, or JSON `null` while the store is still empty so
/// clients can distinguish "no data yet" from a zero-valued summary.
pub async fn handle_summary(
    Extension(store): Extension<Arc<ReportStore>>,
) -> Json<Option<Summary>> {
    Json(store.fetch_summary().await)
}

/// Flattened list of every student result across all reports. Always an
/// array, possibly empty.
pub async fn handle_list_students(
    Extension(store): Extension<Arc<ReportStore>>,
) -> Json<Vec<StudentResult>> {
    Json(store.all_students().await)
}

pub async fn handle_list_reports(
    Extension(store): Extension<Arc<ReportStore>>,
) -> Json<Vec<Report>> {
    Json(store.get_all().await)
}
