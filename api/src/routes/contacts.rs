//! Contact list endpoints

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use sc_shared::ApiResponse;

use crate::dto::ContactRequest;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// POST /api/v1/contacts
pub async fn create_contact(
    auth: AuthContext,
    state: web::Data<AppState>,
    request: web::Json<ContactRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    request.validate()?;

    let contact = state
        .contact_service
        .add_contact(auth.school_id, request.into())
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(contact).with_message("Contact added successfully")))
}

/// GET /api/v1/contacts
pub async fn list_contacts(auth: AuthContext, state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let contacts = state.contact_service.list_contacts(auth.school_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(contacts)))
}

/// GET /api/v1/contacts/{id}
pub async fn get_contact(
    auth: AuthContext,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let contact = state
        .contact_service
        .get_contact(auth.school_id, path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(contact)))
}

/// PUT /api/v1/contacts/{id}
pub async fn update_contact(
    auth: AuthContext,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<ContactRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    request.validate()?;

    let contact = state
        .contact_service
        .update_contact(auth.school_id, path.into_inner(), request.into())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(contact).with_message("Contact updated successfully")))
}

/// DELETE /api/v1/contacts/{id}
pub async fn delete_contact(
    auth: AuthContext,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    state
        .contact_service
        .delete_contact(auth.school_id, path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::message("Contact deleted successfully")))
}
