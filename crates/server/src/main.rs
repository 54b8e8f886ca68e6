//! # timetable-server
//!
//! HTTP service that accepts a timetable PDF upload and returns the
//! extracted course records as JSON.

use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::sync::Arc;
use timetable_parser::{CourseRecord, ParserOptions, ScheduleParser};
use timetable_pdf::{extract_courses_with, PdfError, PdfOptions};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

/// Server configuration, read from flags or the environment.
#[derive(Parser, Debug)]
#[command(name = "timetable-server", version, about = "Timetable PDF parsing API")]
struct Config {
    /// Address to bind
    #[arg(long, env = "TIMETABLE_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "TIMETABLE_PORT", default_value_t = 8000)]
    port: u16,

    /// Largest accepted upload, in megabytes
    #[arg(long, env = "TIMETABLE_MAX_UPLOAD_MB", default_value_t = 20)]
    max_upload_mb: usize,
}

#[derive(Clone)]
pub struct AppState {
    options: Arc<ParserOptions>,
    max_upload_bytes: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            options: Arc::new(ParserOptions::default()),
            max_upload_bytes: 20 * 1024 * 1024,
        }
    }
}

/// Error body: `{"error": ..., "courses": []}`.
pub struct AppError(StatusCode, String);

impl AppError {
    fn bad_request(msg: impl Into<String>) -> Self {
        AppError(StatusCode::BAD_REQUEST, msg.into())
    }

    fn internal(msg: impl Into<String>) -> Self {
        AppError(StatusCode::INTERNAL_SERVER_ERROR, msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.0.is_server_error() {
            tracing::error!("Parse error: {}", self.1);
        }
        let body = ErrorResponse {
            error: self.1,
            courses: Vec::new(),
        };
        (self.0, Json(body)).into_response()
    }
}

impl From<PdfError> for AppError {
    fn from(e: PdfError) -> Self {
        match e {
            PdfError::NoCoursesFound => AppError::bad_request(e.to_string()),
            _ => AppError::internal(e.to_string()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::internal(format!("Failed to store upload: {e}"))
    }
}

/// Landing response.
#[derive(Serialize, Deserialize)]
pub struct Status {
    pub message: String,
    pub status: String,
}

/// Health check response.
#[derive(Serialize, Deserialize)]
pub struct Health {
    /// "healthy" while the server is up.
    pub status: String,
    /// Server version from Cargo.toml.
    pub version: String,
}

#[derive(Serialize, Deserialize)]
pub struct ParseResponse {
    pub courses: Vec<CourseRecord>,
    pub count: usize,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub courses: Vec<CourseRecord>,
}

pub async fn root() -> Json<Status> {
    Json(Status {
        message: "PDF Schedule Parser API is running!".to_string(),
        status: "ok".to_string(),
    })
}

/// Health check endpoint handler.
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Parse the PDF sent in the multipart field `file`.
///
/// Each request gets its own parser and temporary file; the file is removed
/// when the request finishes, whatever the outcome.
async fn parse_pdf(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ParseResponse>, AppError> {
    let mut multipart = multipart.map_err(|e| AppError::bad_request(e.body_text()))?;

    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError(e.status(), e.body_text()))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError(e.status(), e.body_text()))?;
            upload = Some(bytes);
            break;
        }
    }
    let bytes = upload.ok_or_else(|| AppError::bad_request("Missing 'file' field in upload"))?;
    tracing::info!("Received upload of {} bytes", bytes.len());

    let options = (*state.options).clone();
    let courses = tokio::task::spawn_blocking(move || parse_upload(&bytes, options))
        .await
        .map_err(|e| AppError::internal(format!("Parser task failed: {e}")))??;

    let count = courses.len();
    Ok(Json(ParseResponse { courses, count }))
}

fn parse_upload(bytes: &[u8], options: ParserOptions) -> Result<Vec<CourseRecord>, AppError> {
    let mut file = tempfile::Builder::new().suffix(".pdf").tempfile()?;
    file.write_all(bytes)?;
    file.flush()?;

    let parser = ScheduleParser::with_options(options);
    let courses = extract_courses_with(file.path(), &parser, &PdfOptions::default())?;
    Ok(courses)
}

/// Create the application router.
///
/// This is separated from `main()` to allow testing.
pub fn create_router(state: AppState) -> Router {
    let limit = state.max_upload_bytes;
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/parse-pdf", post(parse_pdf))
        .layer(DefaultBodyLimit::max(limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let state = AppState {
        options: Arc::new(ParserOptions::default()),
        max_upload_bytes: config.max_upload_mb * 1024 * 1024,
    };
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("timetable-server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
