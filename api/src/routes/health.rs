use std::collections::HashMap;

use actix_web::{web, HttpResponse};
use sc_shared::types::response::ServiceHealth;
use sc_shared::{HealthResponse, HealthStatus};

use crate::state::AppState;

/// GET /health
///
/// 200 while the store and provider answer, 503 otherwise.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let mut services = HashMap::new();
    services.insert(format!("store:{}", state.store.name()), state.store.check().await);

    let provider_health = if state.provider.is_available().await {
        ServiceHealth::healthy(0)
    } else {
        ServiceHealth::unhealthy(format!("{} is unavailable", state.provider.provider_name()))
    };
    services.insert(format!("sms:{}", state.provider.provider_name().to_lowercase()), provider_health);

    let response = HealthResponse::from_services(services, env!("CARGO_PKG_VERSION"));
    match response.status {
        HealthStatus::Unhealthy => HttpResponse::ServiceUnavailable().json(response),
        _ => HttpResponse::Ok().json(response),
    }
}
