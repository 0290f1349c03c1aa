//! A blog or contact bound to page state, with its own persistence calls.

use std::sync::Arc;

use uuid::Uuid;

use folio_core::domain::ResourceKind;
use folio_shared::dto::{ResourcePayload, ResourceResponse};

use crate::api::{ClientError, ResourceApi};

/// Editable copy of a resource. `title` and `content` are the form fields;
/// the last server representation is kept alongside once persisted.
pub struct ResourceProxy {
    api: Arc<dyn ResourceApi>,
    kind: ResourceKind,
    pub title: String,
    pub content: String,
    record: Option<ResourceResponse>,
}

impl ResourceProxy {
    /// A new, unsaved instance (what the create page starts from).
    pub fn blank(api: Arc<dyn ResourceApi>, kind: ResourceKind) -> Self {
        Self {
            api,
            kind,
            title: String::new(),
            content: String::new(),
            record: None,
        }
    }

    /// Fetch a persisted instance by id.
    pub async fn get(
        api: Arc<dyn ResourceApi>,
        kind: ResourceKind,
        id: Uuid,
    ) -> Result<Self, ClientError> {
        let record = api.get(kind, id).await?;
        let mut proxy = Self::blank(api, kind);
        proxy.absorb(record);
        Ok(proxy)
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Persisted id, `None` until the first successful save.
    pub fn id(&self) -> Option<Uuid> {
        self.record.as_ref().map(|r| r.id)
    }

    pub fn record(&self) -> Option<&ResourceResponse> {
        self.record.as_ref()
    }

    pub fn is_current_user_owner(&self) -> bool {
        self.record
            .as_ref()
            .and_then(|r| r.is_current_user_owner)
            .unwrap_or(false)
    }

    /// Create on the server.
    pub async fn save(&mut self) -> Result<&ResourceResponse, ClientError> {
        let created = self
            .api
            .create(self.kind, &self.payload())
            .await
            .inspect_err(|e| log_failure(self.kind, "create", e))?;
        Ok(self.absorb(created))
    }

    /// Push the current fields to the persisted instance.
    pub async fn update(&mut self) -> Result<&ResourceResponse, ClientError> {
        let id = self.id().ok_or(ClientError::Unsaved(self.kind.label()))?;
        let updated = self
            .api
            .update(self.kind, id, &self.payload())
            .await
            .inspect_err(|e| log_failure(self.kind, "update", e))?;
        Ok(self.absorb(updated))
    }

    /// Delete on the server, returning the removed representation.
    pub async fn remove(&mut self) -> Result<ResourceResponse, ClientError> {
        let id = self.id().ok_or(ClientError::Unsaved(self.kind.label()))?;
        let removed = self
            .api
            .remove(self.kind, id)
            .await
            .inspect_err(|e| log_failure(self.kind, "remove", e))?;
        self.record = None;
        Ok(removed)
    }

    /// Update when the instance carries a persisted id, create otherwise.
    pub async fn create_or_update(&mut self) -> Result<&ResourceResponse, ClientError> {
        if self.id().is_some() {
            self.update().await
        } else {
            self.save().await
        }
    }

    fn payload(&self) -> ResourcePayload {
        ResourcePayload {
            title: Some(self.title.clone()),
            content: Some(self.content.clone()),
        }
    }

    fn absorb(&mut self, record: ResourceResponse) -> &ResourceResponse {
        self.title = record.title.clone();
        self.content = record.content.clone();
        self.record.insert(record)
    }
}

fn log_failure(kind: ResourceKind, operation: &str, error: &ClientError) {
    tracing::warn!(%kind, operation, error = %error, "Resource call failed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, FakeApi};

    #[tokio::test]
    async fn test_create_or_update_creates_then_updates() {
        let api = Arc::new(FakeApi::default());
        let mut blog = ResourceProxy::blank(api.clone(), ResourceKind::Blog);
        blog.title = "Blog Title".to_string();

        let id = blog.create_or_update().await.unwrap().id;
        assert_eq!(blog.id(), Some(id));

        blog.title = "Changed".to_string();
        blog.create_or_update().await.unwrap();

        assert_eq!(
            api.calls(),
            vec![Call::Create(ResourceKind::Blog), Call::Update(ResourceKind::Blog, id)]
        );
        assert_eq!(api.stored(id).map(|r| r.title), Some("Changed".to_string()));
    }

    #[tokio::test]
    async fn test_get_fills_fields() {
        let api = Arc::new(FakeApi::default());
        let id = api.seed(ResourceKind::Contact, "Contact Title", "Contact Content");

        let contact = ResourceProxy::get(api.clone(), ResourceKind::Contact, id)
            .await
            .unwrap();

        assert_eq!(contact.id(), Some(id));
        assert_eq!(contact.title, "Contact Title");
        assert_eq!(contact.content, "Contact Content");
        assert!(contact.is_current_user_owner());
    }

    #[tokio::test]
    async fn test_get_missing_reports_server_message() {
        let api = Arc::new(FakeApi::default());

        let err = ResourceProxy::get(api, ResourceKind::Blog, Uuid::new_v4())
            .await
            .err()
            .unwrap();

        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "No blog with that identifier has been found");
    }

    #[tokio::test]
    async fn test_update_and_remove_need_persisted_id() {
        let api = Arc::new(FakeApi::default());
        let mut blog = ResourceProxy::blank(api.clone(), ResourceKind::Blog);

        assert_eq!(blog.update().await.err(), Some(ClientError::Unsaved("Blog")));
        assert_eq!(blog.remove().await.err(), Some(ClientError::Unsaved("Blog")));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_remove_forgets_record() {
        let api = Arc::new(FakeApi::default());
        let id = api.seed(ResourceKind::Blog, "Blog Title", "");
        let mut blog = ResourceProxy::get(api.clone(), ResourceKind::Blog, id)
            .await
            .unwrap();

        let removed = blog.remove().await.unwrap();

        assert_eq!(removed.id, id);
        assert_eq!(blog.id(), None);
        assert!(api.stored(id).is_none());
    }
}
