use serde::{Deserialize, Serialize};
use validator::Validate;

use sc_core::domain::entities::contact::NewContact;

/// Body of `POST /contacts` and `PUT /contacts/{id}`
///
/// Blank required fields are rejected by the contact service after trimming;
/// the limits here only bound what reaches it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Phone number as the school has it, with or without country code
    #[validate(length(min = 1, max = 32))]
    pub phone: String,

    #[validate(length(max = 255))]
    #[serde(default)]
    pub email: Option<String>,

    #[validate(length(max = 32))]
    #[serde(default)]
    pub grade: Option<String>,

    #[validate(length(max = 32))]
    #[serde(default)]
    pub section: Option<String>,

    #[validate(length(max = 255))]
    #[serde(default)]
    pub parent_name: Option<String>,

    #[validate(length(max = 32))]
    #[serde(default)]
    pub parent_phone: Option<String>,
}

impl From<ContactRequest> for NewContact {
    fn from(req: ContactRequest) -> Self {
        NewContact {
            name: req.name,
            phone: req.phone,
            email: req.email,
            grade: req.grade,
            section: req.section,
            parent_name: req.parent_name,
            parent_phone: req.parent_phone,
        }
    }
}
