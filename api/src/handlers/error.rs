//! Mapping of domain errors onto HTTP responses

use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use sc_core::domain::entities::dispatch::BroadcastSummary;
use sc_core::errors::DomainError;
use sc_shared::{error_codes, ErrorResponse};
use validator::ValidationErrors;

/// Error type returned by route handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationErrors),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(e) => domain_status(e),
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Domain(e) => handle_domain_error(e),
            ApiError::Validation(e) => validation_error_response(e),
        }
    }
}

fn domain_status(error: &DomainError) -> StatusCode {
    match error {
        DomainError::ValidationErr(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Conflict { .. } => StatusCode::CONFLICT,
        DomainError::Unauthorized => StatusCode::UNAUTHORIZED,
        DomainError::Storage { .. }
        | DomainError::BroadcastNotRecorded { .. }
        | DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Convert a domain error into a JSON error response
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let status = domain_status(error);
    let body = match error {
        DomainError::ValidationErr(e) => ErrorResponse::new(error_codes::VALIDATION_ERROR, e.to_string()),
        DomainError::NotFound { resource } => {
            ErrorResponse::new(error_codes::NOT_FOUND, format!("{} not found", resource))
        }
        DomainError::Conflict { message } => ErrorResponse::new(error_codes::CONFLICT, message.clone()),
        DomainError::Unauthorized => ErrorResponse::new(error_codes::UNAUTHORIZED, "Unauthorized access"),
        DomainError::Storage { message } => {
            log::error!("Storage error: {}", message);
            ErrorResponse::new(error_codes::DATABASE_ERROR, "The data store is unavailable")
        }
        DomainError::BroadcastNotRecorded { reason, results } => {
            log::error!("Broadcast dispatched but not recorded: {}", reason);
            ErrorResponse::new(
                error_codes::BROADCAST_NOT_RECORDED,
                "Messages were dispatched but the broadcast could not be recorded",
            )
            .add_detail("summary", BroadcastSummary::from_results(results))
            .add_detail("results", results)
        }
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred")
        }
    };

    HttpResponse::build(status).json(body)
}

/// 400 response listing the fields that failed validation
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
    fields.sort_unstable();

    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Request validation failed")
            .add_detail("fields", fields),
    )
}

/// Render malformed JSON bodies in the shared error format
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(error_codes::BAD_REQUEST, err.to_string()));
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_core::domain::entities::dispatch::DispatchResult;
    use sc_core::errors::ValidationError;

    #[test]
    fn test_status_mapping() {
        let cases = vec![
            (DomainError::from(ValidationError::EmptyRecipients), StatusCode::BAD_REQUEST),
            (DomainError::not_found("Contact"), StatusCode::NOT_FOUND),
            (
                DomainError::Conflict {
                    message: "dup".to_string(),
                },
                StatusCode::CONFLICT,
            ),
            (DomainError::Unauthorized, StatusCode::UNAUTHORIZED),
            (DomainError::storage("down"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(handle_domain_error(&error).status(), expected);
        }
    }

    #[test]
    fn test_not_recorded_is_server_error() {
        let error = DomainError::BroadcastNotRecorded {
            reason: "store down".to_string(),
            results: vec![DispatchResult::sent("5551234", "+915551234", "SM1")],
        };
        let api_error = ApiError::from(error);
        assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
