//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use folio_core::domain::{OwnerSummary, Resource, ResourceKind, User};
use folio_core::error::RepoError;
use folio_core::ports::{BaseRepository, ResourceRepository, UserRepository};

use super::entity::resource::{self, Entity as ResourceEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{PostgresBaseRepository, query_error, write_error};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL resource repository (blogs and contacts).
pub type PostgresResourceRepository = PostgresBaseRepository<ResourceEntity>;

#[async_trait]
impl BaseRepository<User, Uuid> for PostgresUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.find_model(id).await?.map(Into::into))
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        let exists = self.find_model(user.id).await?.is_some();
        let active: user::ActiveModel = user.into();

        let model = if exists {
            active.update(&self.db).await
        } else {
            active.insert(&self.db).await
        }
        .map_err(write_error)?;

        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.delete_model(id).await
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(%username, "Finding user by username");

        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn find_summaries(&self, ids: &[Uuid]) -> Result<Vec<OwnerSummary>, RepoError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = UserEntity::find()
            .filter(user::Column::Id.is_in(ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result
            .into_iter()
            .map(|m| OwnerSummary {
                id: m.id,
                display_name: m.display_name,
            })
            .collect())
    }
}

#[async_trait]
impl BaseRepository<Resource, Uuid> for PostgresResourceRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Resource>, RepoError> {
        self.find_model(id).await?.map(Resource::try_from).transpose()
    }

    async fn save(&self, resource: Resource) -> Result<Resource, RepoError> {
        let exists = self.find_model(resource.id).await?.is_some();
        let active: resource::ActiveModel = resource.into();

        let model = if exists {
            active.update(&self.db).await
        } else {
            active.insert(&self.db).await
        }
        .map_err(write_error)?;

        Resource::try_from(model)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.delete_model(id).await
    }
}

#[async_trait]
impl ResourceRepository for PostgresResourceRepository {
    async fn list_by_kind(&self, kind: ResourceKind) -> Result<Vec<Resource>, RepoError> {
        tracing::debug!(%kind, "Listing resources");

        let result = ResourceEntity::find()
            .filter(resource::Column::Kind.eq(kind.as_str()))
            .order_by_desc(resource::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        result.into_iter().map(Resource::try_from).collect()
    }

    async fn update(&self, resource: Resource) -> Result<Resource, RepoError> {
        let active: resource::ActiveModel = resource.into();

        let model = active.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => RepoError::NotFound,
            other => write_error(other),
        })?;

        Resource::try_from(model)
    }

    async fn find_in(&self, kind: ResourceKind, id: Uuid) -> Result<Option<Resource>, RepoError> {
        let result = ResourceEntity::find_by_id(id)
            .filter(resource::Column::Kind.eq(kind.as_str()))
            .one(&self.db)
            .await
            .map_err(query_error)?;

        result.map(Resource::try_from).transpose()
    }
}
