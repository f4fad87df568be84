// Route exports
pub mod matches;
pub mod users;

use crate::config::MatchingSettings;
use crate::core::Matcher;
use crate::error::MatchError;
use crate::models::ErrorResponse;
use crate::services::{ProfileStore, StoreError};
use actix_web::{error, http::StatusCode, web, HttpResponse};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProfileStore>,
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure)
            .configure(users::configure),
    );
}

/// JSON error body for payloads actix rejects before a handler runs
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

pub(crate) fn error_response(error: &str, message: String, status_code: u16) -> HttpResponse {
    let body = ErrorResponse {
        error: error.to_string(),
        message,
        status_code,
    };

    match status_code {
        400 => HttpResponse::BadRequest().json(body),
        404 => HttpResponse::NotFound().json(body),
        _ => HttpResponse::InternalServerError().json(body),
    }
}

pub(crate) fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    error_response("Validation failed", errors.to_string(), 400)
}

/// Store failures: missing users are 404, bad input 400, everything else 500
pub(crate) fn store_failure(context: &str, err: StoreError) -> HttpResponse {
    match err {
        StoreError::NotFound(_) => error_response("Not found", err.to_string(), 404),
        StoreError::InvalidInput(_) => error_response("Invalid input", err.to_string(), 400),
        _ => {
            tracing::error!("{}: {}", context, err);
            error_response(context, err.to_string(), 500)
        }
    }
}

pub(crate) fn match_failure(err: MatchError) -> HttpResponse {
    match err {
        MatchError::InvalidArgument(_) => error_response("InvalidArgument", err.to_string(), 400),
    }
}
