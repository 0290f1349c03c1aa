//! In-memory repositories - used when no database is configured, and in tests.
//!
//! Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use folio_core::domain::{OwnerSummary, Resource, ResourceKind, User};
use folio_core::error::RepoError;
use folio_core::ports::{BaseRepository, ResourceRepository, UserRepository};

/// Resources keyed by id behind an async RwLock.
#[derive(Default)]
pub struct InMemoryResourceRepository {
    store: RwLock<HashMap<Uuid, Resource>>,
}

impl InMemoryResourceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Resource, Uuid> for InMemoryResourceRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Resource>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, resource: Resource) -> Result<Resource, RepoError> {
        let mut store = self.store.write().await;
        store.insert(resource.id, resource.clone());
        Ok(resource)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl ResourceRepository for InMemoryResourceRepository {
    async fn list_by_kind(&self, kind: ResourceKind) -> Result<Vec<Resource>, RepoError> {
        let store = self.store.read().await;
        let mut resources: Vec<Resource> =
            store.values().filter(|r| r.kind == kind).cloned().collect();
        resources.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(resources)
    }

    async fn update(&self, resource: Resource) -> Result<Resource, RepoError> {
        let mut store = self.store.write().await;
        let slot = store.get_mut(&resource.id).ok_or(RepoError::NotFound)?;
        *slot = resource.clone();
        Ok(resource)
    }
}

/// Users keyed by id. Usernames are unique, like the `users.username` column.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        let mut store = self.store.write().await;
        let taken = store
            .values()
            .any(|u| u.username == user.username && u.id != user.id);
        if taken {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        store.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().find(|u| u.email == email).cloned())
    }

    async fn find_summaries(&self, ids: &[Uuid]) -> Result<Vec<OwnerSummary>, RepoError> {
        let store = self.store.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| store.get(id))
            .map(User::summary)
            .collect())
    }
}
