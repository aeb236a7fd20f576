//! Shared application state handed to every handler

use std::sync::Arc;
use std::time::Instant;

use sc_core::repositories::{
    ContactRepository, InMemoryContactRepository, InMemoryMessageRepository, MessageRepository,
};
use sc_core::services::{
    BroadcastDispatcher, BroadcastRecorder, BroadcastService, ContactService, DashboardService,
    MessageHistoryService, MessageProviderClient, PhoneNormalizer,
};
use sc_infra::database::DatabasePool;
use sc_shared::types::response::ServiceHealth;

pub type SharedBroadcastService =
    BroadcastService<dyn MessageProviderClient, dyn MessageRepository, dyn ContactRepository>;
pub type SharedContactService = ContactService<dyn ContactRepository>;
pub type SharedHistoryService = MessageHistoryService<dyn MessageRepository>;
pub type SharedDashboardService = DashboardService<dyn ContactRepository, dyn MessageRepository>;

/// Where contacts and broadcast records live, for health reporting
#[derive(Clone)]
pub enum StoreBackend {
    Memory,
    MySql(DatabasePool),
}

impl StoreBackend {
    pub fn name(&self) -> &'static str {
        match self {
            StoreBackend::Memory => "memory",
            StoreBackend::MySql(_) => "mysql",
        }
    }

    pub async fn check(&self) -> ServiceHealth {
        let started = Instant::now();
        match self {
            StoreBackend::Memory => ServiceHealth::healthy(0),
            StoreBackend::MySql(pool) => match pool.health_check().await {
                Ok(true) => ServiceHealth::healthy(started.elapsed().as_millis() as u64),
                Ok(false) => ServiceHealth::unhealthy("Unexpected health check result"),
                Err(e) => ServiceHealth::unhealthy(e.to_string()),
            },
        }
    }
}

/// Application state that holds shared services
pub struct AppState {
    pub broadcast_service: Arc<SharedBroadcastService>,
    pub contact_service: Arc<SharedContactService>,
    pub history_service: Arc<SharedHistoryService>,
    pub dashboard_service: Arc<SharedDashboardService>,
    pub provider: Arc<dyn MessageProviderClient>,
    pub store: StoreBackend,
}

impl AppState {
    pub fn new(
        contacts: Arc<dyn ContactRepository>,
        messages: Arc<dyn MessageRepository>,
        provider: Arc<dyn MessageProviderClient>,
        normalizer: PhoneNormalizer,
        store: StoreBackend,
    ) -> Self {
        let broadcast_service = BroadcastService::new(
            BroadcastDispatcher::new(provider.clone(), normalizer),
            BroadcastRecorder::new(messages.clone()),
            contacts.clone(),
        );

        Self {
            broadcast_service: Arc::new(broadcast_service),
            contact_service: Arc::new(ContactService::new(contacts.clone())),
            history_service: Arc::new(MessageHistoryService::new(messages.clone())),
            dashboard_service: Arc::new(DashboardService::new(contacts, messages)),
            provider,
            store,
        }
    }

    /// State backed by the in-memory repositories
    pub fn in_memory(provider: Arc<dyn MessageProviderClient>, normalizer: PhoneNormalizer) -> Self {
        Self::new(
            Arc::new(InMemoryContactRepository::new()),
            Arc::new(InMemoryMessageRepository::new()),
            provider,
            normalizer,
            StoreBackend::Memory,
        )
    }
}
