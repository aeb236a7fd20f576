//! Contact repository trait defining the interface for contact persistence.
//!
//! Every lookup is scoped by school so one tenant can never read or modify
//! another tenant's contacts through this interface.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::contact::Contact;
use crate::errors::DomainError;

/// Repository trait for Contact entity persistence operations
///
/// Implementations must enforce phone uniqueness per school and report a
/// duplicate as `DomainError::Conflict`. Store outages are reported as
/// `DomainError::Storage`.
///
/// # Example
/// ```no_run
/// # use sc_core::repositories::ContactRepository;
/// # use uuid::Uuid;
/// # async fn example(repo: &impl ContactRepository) -> Result<(), Box<dyn std::error::Error>> {
/// let school_id = Uuid::new_v4();
/// for contact in repo.list_by_school(school_id).await? {
///     println!("{} <{}>", contact.name, contact.phone);
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persist a new contact
    ///
    /// # Returns
    /// * `Ok(Contact)` - The stored contact
    /// * `Err(DomainError::Conflict)` - Phone already used in this school
    async fn create(&self, contact: Contact) -> Result<Contact, DomainError>;

    /// Find a contact by id within a school
    async fn find_by_id(&self, school_id: Uuid, id: Uuid) -> Result<Option<Contact>, DomainError>;

    /// Find a contact by its exact phone string within a school
    async fn find_by_phone(&self, school_id: Uuid, phone: &str) -> Result<Option<Contact>, DomainError>;

    /// List all contacts of a school in creation order
    async fn list_by_school(&self, school_id: Uuid) -> Result<Vec<Contact>, DomainError>;

    /// Replace a stored contact
    ///
    /// # Returns
    /// * `Ok(Contact)` - The updated contact
    /// * `Err(DomainError::NotFound)` - No such contact in this school
    /// * `Err(DomainError::Conflict)` - New phone already used in this school
    async fn update(&self, contact: Contact) -> Result<Contact, DomainError>;

    /// Delete a contact
    ///
    /// # Returns
    /// * `Ok(true)` - Contact was deleted
    /// * `Ok(false)` - Contact not found in this school
    async fn delete(&self, school_id: Uuid, id: Uuid) -> Result<bool, DomainError>;

    /// Count contacts of a school
    async fn count_by_school(&self, school_id: Uuid) -> Result<u64, DomainError>;
}
