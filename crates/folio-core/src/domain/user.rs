use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity - the identity that owns resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with the `user` role, generated ID and timestamps.
    pub fn new(
        username: String,
        email: String,
        display_name: String,
        password_hash: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            display_name,
            password_hash,
            roles: vec!["user".to_string()],
            created_at: now,
            updated_at: now,
        }
    }

    /// The projection embedded in resources when the owner is expanded.
    pub fn summary(&self) -> OwnerSummary {
        OwnerSummary {
            id: self.id,
            display_name: self.display_name.clone(),
        }
    }
}

/// Display-name-only view of a resource owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerSummary {
    pub id: Uuid,
    pub display_name: String,
}
