use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{OwnerSummary, Resource, ResourceKind, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;

    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Display-name projections for the given ids. Unknown ids are skipped.
    async fn find_summaries(&self, ids: &[Uuid]) -> Result<Vec<OwnerSummary>, RepoError>;
}

/// Resource repository. Every lookup is scoped to a kind.
#[async_trait]
pub trait ResourceRepository: BaseRepository<Resource, Uuid> {
    /// All resources of a kind, newest first.
    async fn list_by_kind(&self, kind: ResourceKind) -> Result<Vec<Resource>, RepoError>;

    /// Overwrite an existing resource. Fails with `NotFound` if it was deleted
    /// since it was loaded.
    async fn update(&self, resource: Resource) -> Result<Resource, RepoError>;

    /// A resource of the given kind; a record of another kind is `None`.
    async fn find_in(&self, kind: ResourceKind, id: Uuid) -> Result<Option<Resource>, RepoError> {
        Ok(self.find_by_id(id).await?.filter(|r| r.kind == kind))
    }
}
