//! Bearer token claims identifying a staff member and their school.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;

/// Claims structure for JWT payload
///
/// Tokens are minted by the login service; this backend only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (staff user ID)
    pub sub: String,

    /// School (tenant) the staff member acts for
    pub school_id: String,

    /// Expiration timestamp
    pub exp: i64,

    /// Issued at timestamp
    #[serde(default)]
    pub iat: i64,
}

impl Claims {
    pub fn new(user_id: Uuid, school_id: Uuid, iat: i64, exp: i64) -> Self {
        Self {
            sub: user_id.to_string(),
            school_id: school_id.to_string(),
            exp,
            iat,
        }
    }

    /// Extracts the staff user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, DomainError> {
        Uuid::parse_str(&self.sub).map_err(|_| DomainError::Unauthorized)
    }

    /// Extracts the school ID from the claims
    pub fn school_id(&self) -> Result<Uuid, DomainError> {
        Uuid::parse_str(&self.school_id).map_err(|_| DomainError::Unauthorized)
    }
}
