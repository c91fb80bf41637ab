use axum::{
    routing::{get, post},
    Extension, Router,
};
use markbook::auth::handlers::{handle_login, handle_signup};
use markbook::auth::users::UserDirectory;
use markbook::config::ServerConfig;
use markbook::report::handlers::handle_process_report;
use markbook::store::handlers::{handle_list_reports, handle_list_students, handle_summary};
use markbook::store::memory::ReportStore;
use std::sync::Arc;
use tower_http::services::ServeDir;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = ServerConfig::from_args(std::env::args().skip(1))?;

    // 1. Shared state, created once and injected into every handler:
    let store = Arc::new(ReportStore::new());
    let users = Arc::new(UserDirectory::new());

    // Demo account expected by the bundled frontend.
    users.register("admin", "1234");

    // 2. HTTP Router:
    let mut app = Router::new()
        .route("/signup", post(handle_signup))
        .route("/login", post(handle_login))
        .route("/processReport", post(handle_process_report))
        .route("/summary", get(handle_summary))
        .route("/students", get(handle_list_students))
        .route("/reports", get(handle_list_reports))
        .layer(Extension(store))
        .layer(Extension(users));

    // 3. Static frontend, when present:
    match &config.frontend_dir {
        Some(dir) => {
            tracing::info!("Serving frontend from {}", dir.display());
            app = app.fallback_service(ServeDir::new(dir));
        }
        None => {
            tracing::warn!("Frontend directory not found, serving API only");
        }
    }

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
