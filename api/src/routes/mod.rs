//! Route handlers
//!
//! Everything under `/api/v1` is scoped to the school from the bearer token.

pub mod contacts;
pub mod health;
pub mod sms;
pub mod stats;

use actix_web::web;

/// Register the authenticated `/api/v1` routes on a scope
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/contacts")
            .route("", web::post().to(contacts::create_contact))
            .route("", web::get().to(contacts::list_contacts))
            .route("/{id}", web::get().to(contacts::get_contact))
            .route("/{id}", web::put().to(contacts::update_contact))
            .route("/{id}", web::delete().to(contacts::delete_contact)),
    )
    .service(
        web::scope("/sms")
            .route("/send", web::post().to(sms::send_sms))
            .route("/messages", web::get().to(sms::list_messages))
            .route("/messages/{id}", web::get().to(sms::get_message)),
    )
    .route("/stats", web::get().to(stats::get_stats));
}
