//! Shared helpers for the HTTP integration tests

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use uuid::Uuid;

use sc_api::{AppState, StoreBackend};
use sc_core::domain::entities::claims::Claims;
use sc_core::domain::entities::message::Message;
use sc_core::errors::{DomainError, ProviderError};
use sc_core::repositories::{InMemoryContactRepository, MessageRepository};
use sc_core::services::{MessageProviderClient, PhoneNormalizer};
use sc_shared::{AuthConfig, CorsConfig};

pub const TEST_SECRET: &str = "test-secret";

pub fn auth_config() -> AuthConfig {
    AuthConfig::new(TEST_SECRET)
}

pub fn cors_config() -> CorsConfig {
    CorsConfig::development()
}

/// Sign a token for a staff member of `school_id`
pub fn token_for(user_id: Uuid, school_id: Uuid) -> String {
    let now = Utc::now().timestamp();
    sign(&Claims::new(user_id, school_id, now, now + 3600), TEST_SECRET)
}

pub fn sign(claims: &Claims, secret: &str) -> String {
    encode(&Header::default(), claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// Provider that records sends and rejects configured numbers
#[derive(Default)]
pub struct ScriptedProvider {
    pub sent: Mutex<Vec<String>>,
    failing: HashSet<String>,
}

impl ScriptedProvider {
    pub fn failing_for(numbers: &[&str]) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: numbers.iter().map(|n| n.to_string()).collect(),
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageProviderClient for ScriptedProvider {
    async fn send(&self, _body: &str, to: &str) -> Result<String, ProviderError> {
        let count = {
            let mut sent = self.sent.lock().unwrap();
            sent.push(to.to_string());
            sent.len()
        };
        if self.failing.contains(to) {
            return Err(ProviderError::new("The 'To' number is not a valid phone number."));
        }
        Ok(format!("SM{:03}", count))
    }

    fn provider_name(&self) -> &str {
        "Scripted"
    }
}

/// Message store whose writes always fail
pub struct BrokenMessageStore;

#[async_trait]
impl MessageRepository for BrokenMessageStore {
    async fn create(&self, _message: Message) -> Result<Message, DomainError> {
        Err(DomainError::storage("connection refused"))
    }

    async fn find_by_id(&self, _school_id: Uuid, _id: Uuid) -> Result<Option<Message>, DomainError> {
        Err(DomainError::storage("connection refused"))
    }

    async fn list_recent(&self, _school_id: Uuid, _limit: usize) -> Result<Vec<Message>, DomainError> {
        Err(DomainError::storage("connection refused"))
    }

    async fn count_by_school(&self, _school_id: Uuid) -> Result<u64, DomainError> {
        Err(DomainError::storage("connection refused"))
    }
}

pub fn memory_state(provider: Arc<ScriptedProvider>) -> web::Data<AppState> {
    web::Data::new(AppState::in_memory(provider, PhoneNormalizer::default()))
}

pub fn broken_store_state(provider: Arc<ScriptedProvider>) -> web::Data<AppState> {
    web::Data::new(AppState::new(
        Arc::new(InMemoryContactRepository::new()),
        Arc::new(BrokenMessageStore),
        provider,
        PhoneNormalizer::default(),
        StoreBackend::Memory,
    ))
}
