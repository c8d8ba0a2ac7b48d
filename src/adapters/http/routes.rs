//! HTTP routes and handlers

use super::error::ApiError;
use super::request::parse_analysis_request;
use crate::ports::MoodAnalysisPort;
use axum::{
    Json, Router,
    body::{Body, Bytes},
    extract::{DefaultBodyLimit, State, rejection::BytesRejection},
    http::{
        HeaderValue, Method, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
        },
    },
    response::{IntoResponse, Response},
    routing::{any, get},
};
use serde_json::{Value, json};
use std::any::Any;
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};
use tracing::{debug, error, warn};

const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type, Authorization, X-Client-Info, Apikey";

/// Shared handler state. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<dyn MoodAnalysisPort>,
}

impl AppState {
    pub fn new(analyzer: Arc<dyn MoodAnalysisPort>) -> Self {
        Self { analyzer }
    }
}

/// Build the gateway router.
///
/// Every response, including panics and body-limit rejections, carries the
/// permissive CORS headers and a JSON content type. The body limit is enforced
/// by the `Bytes` extractor so oversized bodies come back through
/// [`ApiError::PayloadTooLarge`] as JSON.
pub fn create_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/analyze", any(analyze))
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let provider = if state.analyzer.has_model() {
        "configured"
    } else {
        "fallback-only"
    };
    Json(json!({ "status": "ok", "provider": provider }))
}

/// `/analyze`: OPTIONS preflight, POST analysis, 405 for everything else.
async fn analyze(
    State(state): State<AppState>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    if method == Method::OPTIONS {
        return Ok((StatusCode::OK, Body::empty()).into_response());
    }
    if method != Method::POST {
        debug!(%method, "rejected method");
        return Err(ApiError::MethodNotAllowed);
    }

    let body = body.map_err(reject_body)?;
    let request = parse_analysis_request(&body)?;
    let result = state.analyzer.analyze(&request).await.map_err(|e| {
        error!(error = %e, "analysis failed unexpectedly");
        ApiError::from(e)
    })?;

    Ok(Json(result).into_response())
}

/// Map a body buffering failure onto the JSON error contract.
fn reject_body(rejection: BytesRejection) -> ApiError {
    warn!(status = %rejection.status(), reason = %rejection.body_text(), "request body rejected");
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge
    } else {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Turn a handler panic into the generic 500 body.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!(details = %details, "handler panicked");
    ApiError::Internal(details).into_response()
}
