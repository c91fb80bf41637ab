use super::processor;
use super::types::Report;
use crate::grading::types::StudentInput;
use crate::store::memory::ReportStore;

use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ProcessReportRequest {
    /// Raw entries as submitted; malformed ones are filtered out before
    /// processing rather than rejected.
    #[serde(default)]
    pub students: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Well-formed subset of one incoming student entry.
#[derive(Debug, Deserialize)]
struct RawStudent {
    name: String,
    marks: Vec<i32>,
}

/// Filters a raw batch down to well-formed student inputs, preserving order.
///
/// Entries that are not objects, or are missing or mistyping `name` or
/// `marks`, are skipped silently. The processor only ever sees valid inputs.
pub fn parse_students(entries: Vec<serde_json::Value>) -> Vec<StudentInput> {
    entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<RawStudent>(entry) {
            Ok(raw) => Some(StudentInput {
                name: raw.name,
                marks: raw.marks,
            }),
            Err(e) => {
                tracing::debug!("Skipping malformed student entry: {}", e);
                None
            }
        })
        .collect()
}

pub async fn handle_process_report(
    Extension(store): Extension<Arc<ReportStore>>,
    Json(req): Json<ProcessReportRequest>,
) -> Result<Json<Report>, (StatusCode, Json<ErrorResponse>)> {
    let students = parse_students(req.students.unwrap_or_default());

    match processor::process(students).await {
        Ok(report) => {
            store.save(report.clone()).await;
            Ok(Json(report))
        }
        Err(e) => {
            tracing::error!("Report processing failed: {:#}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            ))
        }
    }
}
