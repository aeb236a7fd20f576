//! Contact service: validation and tenant-scoped CRUD

use std::sync::Arc;
use uuid::Uuid;

use sc_shared::validation::{is_valid_email, non_blank, not_empty};

use crate::domain::entities::contact::{Contact, ContactUpdate, NewContact};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::ContactRepository;

/// Contact CRUD for one school at a time
///
/// Phone uniqueness per school is enforced by the repository; this service
/// only cleans up and validates input before handing it over.
pub struct ContactService<C: ContactRepository + ?Sized> {
    repository: Arc<C>,
}

impl<C: ContactRepository + ?Sized> ContactService<C> {
    pub fn new(repository: Arc<C>) -> Self {
        Self { repository }
    }

    /// Trim fields, drop blank optionals and check required values
    fn sanitize(fields: NewContact) -> DomainResult<NewContact> {
        let name = fields.name.trim().to_string();
        let phone = fields.phone.trim().to_string();

        if !not_empty(&name) {
            return Err(DomainError::required("name"));
        }
        if !not_empty(&phone) {
            return Err(DomainError::required("phone"));
        }

        let email = non_blank(fields.email);
        if let Some(email) = &email {
            if !is_valid_email(email) {
                return Err(ValidationError::InvalidFormat {
                    field: "email".to_string(),
                }
                .into());
            }
        }

        Ok(NewContact {
            name,
            phone,
            email,
            grade: non_blank(fields.grade),
            section: non_blank(fields.section),
            parent_name: non_blank(fields.parent_name),
            parent_phone: non_blank(fields.parent_phone),
        })
    }

    /// Add a contact to a school
    ///
    /// # Returns
    /// * `Ok(Contact)` - The stored contact
    /// * `Err(DomainError::ValidationErr)` - Missing name/phone or bad email
    /// * `Err(DomainError::Conflict)` - Phone already used in this school
    pub async fn add_contact(&self, school_id: Uuid, fields: NewContact) -> DomainResult<Contact> {
        let fields = Self::sanitize(fields)?;
        let contact = self.repository.create(Contact::new(school_id, fields)).await?;

        tracing::info!(
            contact_id = %contact.id,
            school_id = %school_id,
            event = "contact_added",
            "Contact added"
        );
        Ok(contact)
    }

    pub async fn list_contacts(&self, school_id: Uuid) -> DomainResult<Vec<Contact>> {
        self.repository.list_by_school(school_id).await
    }

    pub async fn get_contact(&self, school_id: Uuid, id: Uuid) -> DomainResult<Contact> {
        self.repository
            .find_by_id(school_id, id)
            .await?
            .ok_or_else(|| DomainError::not_found("Contact"))
    }

    /// Replace every editable field of a contact
    pub async fn update_contact(&self, school_id: Uuid, id: Uuid, update: ContactUpdate) -> DomainResult<Contact> {
        let update = Self::sanitize(update)?;
        let mut contact = self.get_contact(school_id, id).await?;
        contact.apply_update(update);

        let contact = self.repository.update(contact).await?;
        tracing::info!(contact_id = %id, school_id = %school_id, event = "contact_updated", "Contact updated");
        Ok(contact)
    }

    pub async fn delete_contact(&self, school_id: Uuid, id: Uuid) -> DomainResult<()> {
        if !self.repository.delete(school_id, id).await? {
            return Err(DomainError::not_found("Contact"));
        }

        tracing::info!(contact_id = %id, school_id = %school_id, event = "contact_deleted", "Contact deleted");
        Ok(())
    }
}
