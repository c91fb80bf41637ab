use super::users::UserDirectory;

use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl AuthResponse {
    fn error(message: &str) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.to_string()),
            username: None,
            token: None,
        }
    }

    fn success() -> Self {
        Self {
            status: "success".to_string(),
            message: None,
            username: None,
            token: None,
        }
    }
}

pub async fn handle_signup(
    Extension(users): Extension<Arc<UserDirectory>>,
    Json(req): Json<CredentialsRequest>,
) -> (StatusCode, Json<AuthResponse>) {
    let username = req.username.trim();
    if username.is_empty() || req.password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(AuthResponse::error("Missing username/password")),
        );
    }

    if users.register(username, &req.password) {
        tracing::info!("Registered user '{}'", username);
        (StatusCode::OK, Json(AuthResponse::success()))
    } else {
        (
            StatusCode::CONFLICT,
            Json(AuthResponse::error("User exists")),
        )
    }
}

pub async fn handle_login(
    Extension(users): Extension<Arc<UserDirectory>>,
    Json(req): Json<CredentialsRequest>,
) -> (StatusCode, Json<AuthResponse>) {
    let username = req.username.trim();
    if username.is_empty() || req.password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(AuthResponse::error("Missing username/password")),
        );
    }

    if users.verify(username, &req.password) {
        let token = users.open_session(username);
        tracing::debug!("User '{}' logged in", username);
        (
            StatusCode::OK,
            Json(AuthResponse {
                status: "success".to_string(),
                message: None,
                username: Some(username.to_string()),
                token: Some(token),
            }),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(AuthResponse::error("Invalid credentials")),
        )
    }
}
