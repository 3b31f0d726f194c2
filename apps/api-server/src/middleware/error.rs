//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use leadscout_shared::ErrorResponse;
use std::fmt;

use leadscout_core::FetchError;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    BadGateway(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::BadGateway(msg) => write!(f, "Bad gateway: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::BadGateway(detail) => {
                tracing::warn!("Upstream failure: {}", detail);
                ErrorResponse::bad_gateway(detail)
            }
            AppError::Internal(detail) => {
                // Log internal errors
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from fetch errors
impl From<FetchError> for AppError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::NotFound(what) => AppError::NotFound(what),
            FetchError::InvalidInput(msg) => AppError::BadRequest(msg),
            FetchError::UpstreamUnavailable(msg) | FetchError::MalformedResponse(msg) => {
                AppError::BadGateway(msg)
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_errors_map_to_http_statuses() {
        let not_found: AppError = FetchError::NotFound("place123".to_string()).into();
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let bad_input: AppError = FetchError::InvalidInput("no website".to_string()).into();
        assert_eq!(bad_input.status_code(), StatusCode::BAD_REQUEST);

        let upstream: AppError = FetchError::UpstreamUnavailable("timeout".to_string()).into();
        assert_eq!(upstream.status_code(), StatusCode::BAD_GATEWAY);

        let malformed: AppError = FetchError::MalformedResponse("bad json".to_string()).into();
        assert_eq!(malformed.status_code(), StatusCode::BAD_GATEWAY);
    }
}
