//! Contact entity: one person on a school's messaging list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A contact owned by a school
///
/// `phone` is unique within `school_id`; it is stored exactly as entered and
/// only normalized at dispatch time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier for the contact
    pub id: Uuid,

    /// Owning school (tenant)
    pub school_id: Uuid,

    /// Display name
    pub name: String,

    /// Phone number as entered
    pub phone: String,

    pub email: Option<String>,
    pub grade: Option<String>,
    pub section: Option<String>,
    pub parent_name: Option<String>,
    pub parent_phone: Option<String>,

    /// Timestamp when the contact was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the contact was last updated
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating a contact
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub parent_name: Option<String>,
    #[serde(default)]
    pub parent_phone: Option<String>,
}

/// Replacement values for a contact's editable fields
pub type ContactUpdate = NewContact;

impl Contact {
    /// Creates a new contact for a school
    pub fn new(school_id: Uuid, fields: NewContact) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            school_id,
            name: fields.name,
            phone: fields.phone,
            email: fields.email,
            grade: fields.grade,
            section: fields.section,
            parent_name: fields.parent_name,
            parent_phone: fields.parent_phone,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces every editable field and bumps `updated_at`
    pub fn apply_update(&mut self, update: ContactUpdate) {
        self.name = update.name;
        self.phone = update.phone;
        self.email = update.email;
        self.grade = update.grade;
        self.section = update.section;
        self.parent_name = update.parent_name;
        self.parent_phone = update.parent_phone;
        self.updated_at = Utc::now();
    }

    /// Checks whether this contact belongs to the given school
    pub fn belongs_to(&self, school_id: Uuid) -> bool {
        self.school_id == school_id
    }
}
