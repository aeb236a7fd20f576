use actix_web::{web, HttpResponse};

use sc_shared::ApiResponse;

use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// GET /api/v1/stats
pub async fn get_stats(auth: AuthContext, state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let stats = state.dashboard_service.stats(auth.school_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(stats)))
}
