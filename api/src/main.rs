use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::{info, warn};

use sc_api::{create_app, AppState, StoreBackend};
use sc_core::services::PhoneNormalizer;
use sc_infra::database::{DatabasePool, MySqlContactRepository, MySqlMessageRepository};
use sc_infra::sms::create_message_provider;
use sc_shared::{AppConfig, StoreKind};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = AppConfig::from_env();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.logging.level.as_str()));

    info!("Starting SchoolCast API Server ({})", config.environment);
    config.validate().map_err(anyhow::Error::msg)?;

    let provider = create_message_provider(&config.sms);
    info!("Using SMS provider: {}", provider.provider_name());
    let normalizer = PhoneNormalizer::new(config.sms.default_country_code.clone());

    let state = match config.store {
        StoreKind::Memory => {
            warn!("Using in-memory store; contacts and broadcasts are lost on restart");
            AppState::in_memory(provider, normalizer)
        }
        StoreKind::MySql => {
            let pool = DatabasePool::new(config.database.clone())
                .await
                .context("failed to connect to the database")?;
            AppState::new(
                Arc::new(MySqlContactRepository::new(pool.get_pool().clone())),
                Arc::new(MySqlMessageRepository::new(pool.get_pool().clone())),
                provider,
                normalizer,
                StoreBackend::MySql(pool),
            )
        }
    };
    let state = web::Data::new(state);

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let auth = config.auth.clone();
    let cors = config.cors.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), &auth, &cors));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
