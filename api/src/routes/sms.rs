//! Broadcast endpoints

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use sc_shared::ApiResponse;

use crate::dto::SendSmsRequest;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// POST /api/v1/sms/send
///
/// Sends to the listed recipients, or to every contact of the school when
/// `recipients` is omitted. Individual send failures are part of a 200
/// response; only validation and storage problems fail the request.
///
/// ```json
/// { "message": "School closed tomorrow", "recipients": ["+11234567890", "5551234"] }
/// ```
pub async fn send_sms(
    auth: AuthContext,
    state: web::Data<AppState>,
    request: web::Json<SendSmsRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    request.validate()?;

    let report = match request.recipients {
        Some(recipients) => {
            state
                .broadcast_service
                .send_broadcast(&request.message, &recipients, auth.school_id, Some(auth.user_id))
                .await?
        }
        None => {
            state
                .broadcast_service
                .broadcast_to_contacts(&request.message, auth.school_id, Some(auth.user_id))
                .await?
        }
    };

    log::info!(
        "Broadcast {} for school {}: {}/{} sent",
        report.message_id,
        auth.school_id,
        report.summary.succeeded,
        report.summary.total
    );

    let message = format!(
        "Message sent to {} of {} recipients",
        report.summary.succeeded, report.summary.total
    );
    Ok(HttpResponse::Ok().json(ApiResponse::success(report).with_message(message)))
}

/// GET /api/v1/sms/messages
pub async fn list_messages(auth: AuthContext, state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let messages = state.history_service.recent_messages(auth.school_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(messages)))
}

/// GET /api/v1/sms/messages/{id}
pub async fn get_message(
    auth: AuthContext,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let message = state
        .history_service
        .get_message(auth.school_id, path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(message)))
}
