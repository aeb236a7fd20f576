//! In-memory implementation of ContactRepository for development and testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::contact::Contact;
use crate::errors::DomainError;

use super::trait_::ContactRepository;

/// Contact store kept in process memory
///
/// Insertion order is preserved so listings come back in creation order.
#[derive(Clone)]
pub struct InMemoryContactRepository {
    contacts: Arc<RwLock<Vec<Contact>>>,
}

impl InMemoryContactRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(RwLock::new(Vec::new())),
        }
    }

    fn duplicate_phone(contacts: &[Contact], candidate: &Contact) -> bool {
        contacts.iter().any(|c| {
            c.id != candidate.id && c.school_id == candidate.school_id && c.phone == candidate.phone
        })
    }
}

impl Default for InMemoryContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn duplicate_phone_error() -> DomainError {
    DomainError::Conflict {
        message: "Contact with this phone number already exists in your school".to_string(),
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create(&self, contact: Contact) -> Result<Contact, DomainError> {
        let mut contacts = self.contacts.write().await;

        if Self::duplicate_phone(&contacts, &contact) {
            return Err(duplicate_phone_error());
        }

        contacts.push(contact.clone());
        Ok(contact)
    }

    async fn find_by_id(&self, school_id: Uuid, id: Uuid) -> Result<Option<Contact>, DomainError> {
        let contacts = self.contacts.read().await;
        Ok(contacts
            .iter()
            .find(|c| c.id == id && c.belongs_to(school_id))
            .cloned())
    }

    async fn find_by_phone(&self, school_id: Uuid, phone: &str) -> Result<Option<Contact>, DomainError> {
        let contacts = self.contacts.read().await;
        Ok(contacts
            .iter()
            .find(|c| c.phone == phone && c.belongs_to(school_id))
            .cloned())
    }

    async fn list_by_school(&self, school_id: Uuid) -> Result<Vec<Contact>, DomainError> {
        let contacts = self.contacts.read().await;
        Ok(contacts
            .iter()
            .filter(|c| c.belongs_to(school_id))
            .cloned()
            .collect())
    }

    async fn update(&self, contact: Contact) -> Result<Contact, DomainError> {
        let mut contacts = self.contacts.write().await;

        if Self::duplicate_phone(&contacts, &contact) {
            return Err(duplicate_phone_error());
        }

        let slot = contacts
            .iter_mut()
            .find(|c| c.id == contact.id && c.belongs_to(contact.school_id))
            .ok_or_else(|| DomainError::not_found("Contact"))?;

        *slot = contact.clone();
        Ok(contact)
    }

    async fn delete(&self, school_id: Uuid, id: Uuid) -> Result<bool, DomainError> {
        let mut contacts = self.contacts.write().await;
        let before = contacts.len();
        contacts.retain(|c| !(c.id == id && c.belongs_to(school_id)));
        Ok(contacts.len() != before)
    }

    async fn count_by_school(&self, school_id: Uuid) -> Result<u64, DomainError> {
        let contacts = self.contacts.read().await;
        Ok(contacts.iter().filter(|c| c.belongs_to(school_id)).count() as u64)
    }
}
