use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::kind::ResourceKind;
use super::user::OwnerSummary;
use super::validation::ValidFields;

/// Resource entity - a blog or contact owned by the user who created it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: Uuid,
    pub kind: ResourceKind,
    pub title: String,
    pub content: String,
    /// `None` for records whose owner reference was cleared or never set.
    pub owner_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Resource {
    /// Create a new resource owned by `owner_id`.
    pub fn new(kind: ResourceKind, owner_id: Uuid, fields: ValidFields) -> Self {
        let (title, content) = fields.into_parts();
        Self {
            id: Uuid::new_v4(),
            kind,
            title,
            content,
            owner_id: Some(owner_id),
            created_at: Utc::now(),
        }
    }

    /// Overwrite title and content. Identity, owner and timestamp never change.
    pub fn apply(&mut self, fields: ValidFields) {
        let (title, content) = fields.into_parts();
        self.title = title;
        self.content = content;
    }
}

/// A resource with its owner expanded, as handed to single-entity handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedResource {
    pub resource: Resource,
    /// Absent when the owner record no longer exists.
    pub owner: Option<OwnerSummary>,
}

impl ResolvedResource {
    pub fn new(resource: Resource, owner: Option<OwnerSummary>) -> Self {
        Self { resource, owner }
    }

    /// Whether the given session user is the (still existing) owner.
    pub fn is_owned_by(&self, user_id: Option<Uuid>) -> bool {
        match (&self.owner, user_id) {
            (Some(owner), Some(user_id)) => owner.id == user_id,
            _ => false,
        }
    }
}
