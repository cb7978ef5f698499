//! Article HTTP server.
//!
//! Exposes the article queries as a small JSON API meant to be called as
//! actions from chat assistants and browser clients.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/list_articles` | Identifier and title of every article |
//! | `POST` | `/get_metadata` | Bibliographic metadata of the matching article |
//! | `POST` | `/get_section` | Paragraphs of a section of the matching article |
//! | `GET`  | `/openapi.json` | OpenAPI 3 description of the endpoints above |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! # Error Contract
//!
//! Every error response carries a `detail` field. Lookup and fetch errors
//! carry a message:
//!
//! ```json
//! { "detail": "Artículo no encontrado" }
//! ```
//!
//! `404` for a missing article, abstract, or section; `500` when the article
//! document cannot be fetched or parsed. A request body that is not valid
//! JSON for the endpoint is a `422` whose `detail` is a list of problems:
//!
//! ```json
//! { "detail": [{ "type": "value_error", "loc": ["body"], "msg": "missing field `section`" }] }
//! ```
//!
//! Request bodies are read as JSON whatever their `Content-Type`.
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::error::ArticleError;
use crate::models::{
    ArticleMetadata, ArticleSummary, MetadataRequest, SectionRequest, SectionResponse,
};
use crate::openapi::openapi_document;
use crate::query;
use crate::source::{ArticleSource, HttpSource};

/// Shared application state passed to all route handlers via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Where every request loads its article store from.
    source: Arc<dyn ArticleSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn ArticleSource>) -> Self {
        Self { source }
    }
}

/// Builds the router with CORS and request tracing applied.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/list_articles", get(handle_list_articles))
        .route("/get_metadata", post(handle_get_metadata))
        .route("/get_section", post(handle_get_section))
        .route("/openapi.json", get(handle_openapi))
        .route("/health", get(handle_health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the article server.
///
/// Binds to `[server].host:[server].port` and fetches articles from
/// `[source].url` on every request. Runs until the process is terminated.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let bind_addr = config.server.bind_addr();
    let source: Arc<dyn ArticleSource> = Arc::new(HttpSource::new(config.source.url.clone()));
    let app = build_router(AppState::new(source));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(
        addr = %bind_addr,
        source = %config.source.url,
        "article server listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}

// ============ Error response ============

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    detail: Value,
}

/// Error type that converts into an Axum HTTP response.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: Value,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}

impl From<ArticleError> for ApiError {
    fn from(err: ArticleError) -> Self {
        Self {
            status: err.status(),
            detail: Value::String(err.to_string()),
        }
    }
}

/// Constructs a 422 error for a request body that does not fit the endpoint.
fn invalid_body(err: serde_json::Error) -> ApiError {
    ApiError {
        status: StatusCode::UNPROCESSABLE_ENTITY,
        detail: json!([{
            "type": "value_error",
            "loc": ["body"],
            "msg": err.to_string(),
        }]),
    }
}

/// Decodes a JSON request body regardless of its `Content-Type`.
fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(invalid_body)
}

// ============ GET /health ============

/// JSON response body for `GET /health`.
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ GET /openapi.json ============

async fn handle_openapi() -> Json<Value> {
    Json(openapi_document())
}

// ============ GET /list_articles ============

async fn handle_list_articles(
    State(state): State<AppState>,
) -> Result<Json<Vec<ArticleSummary>>, ApiError> {
    Ok(Json(query::list_articles(state.source.as_ref()).await?))
}

// ============ POST /get_metadata ============

async fn handle_get_metadata(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ArticleMetadata>, ApiError> {
    let req: MetadataRequest = parse_body(&body)?;
    let metadata = query::get_metadata(state.source.as_ref(), &req.article_query).await?;
    Ok(Json(metadata))
}

// ============ POST /get_section ============

async fn handle_get_section(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SectionResponse>, ApiError> {
    let req: SectionRequest = parse_body(&body)?;
    let response =
        query::get_section(state.source.as_ref(), &req.article_query, &req.section).await?;
    Ok(Json(response))
}
