//! Application factory
//!
//! Builds the actix-web `App` shared by the binary and the integration tests.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse,
};
use sc_shared::{error_codes, AuthConfig, CorsConfig, ErrorResponse};

use crate::handlers::json_error_handler;
use crate::middleware::{create_cors, JwtAuth};
use crate::routes::{self, health::health_check};
use crate::state::AppState;

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
    auth: &AuthConfig,
    cors: &CorsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Logger::default())
        .wrap(create_cors(cors))
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes, all behind the bearer token check
        .service(
            web::scope("/api/v1")
                .wrap(JwtAuth::new(auth))
                .configure(routes::configure),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
