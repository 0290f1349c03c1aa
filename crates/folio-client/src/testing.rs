//! Recording in-memory [`ResourceApi`] for client tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use folio_core::domain::ResourceKind;
use folio_shared::dto::{ResourcePayload, ResourceResponse};

use crate::api::{ClientError, ResourceApi};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List(ResourceKind),
    Get(ResourceKind, Uuid),
    Create(ResourceKind),
    Update(ResourceKind, Uuid),
    Remove(ResourceKind, Uuid),
}

#[derive(Default)]
pub struct FakeApi {
    store: Mutex<HashMap<Uuid, ResourceResponse>>,
    calls: Mutex<Vec<Call>>,
    failure: Mutex<Option<ClientError>>,
}

impl FakeApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn stored(&self, id: Uuid) -> Option<ResourceResponse> {
        self.store.lock().unwrap().get(&id).cloned()
    }

    pub fn seed(&self, kind: ResourceKind, title: &str, content: &str) -> Uuid {
        let record = record(kind, Uuid::new_v4(), title, content, Some(true));
        let id = record.id;
        self.store.lock().unwrap().insert(id, record);
        id
    }

    /// Make the next call fail with `error`.
    pub fn fail_next(&self, error: ClientError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    fn record_call(&self, call: Call) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn find(&self, kind: ResourceKind, id: Uuid) -> Result<ResourceResponse, ClientError> {
        self.stored(id)
            .filter(|r| r.kind == kind.as_str())
            .ok_or_else(|| ClientError::Server {
                status: 404,
                message: format!("No {kind} with that identifier has been found"),
            })
    }
}

fn record(
    kind: ResourceKind,
    id: Uuid,
    title: &str,
    content: &str,
    is_current_user_owner: Option<bool>,
) -> ResourceResponse {
    ResourceResponse {
        id,
        kind: kind.as_str().to_string(),
        title: title.to_string(),
        content: content.to_string(),
        owner: None,
        created_at: Utc::now(),
        is_current_user_owner,
    }
}

#[async_trait]
impl ResourceApi for FakeApi {
    async fn list(&self, kind: ResourceKind) -> Result<Vec<ResourceResponse>, ClientError> {
        self.record_call(Call::List(kind))?;
        let mut records: Vec<ResourceResponse> = self
            .store
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.kind == kind.as_str())
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    async fn get(&self, kind: ResourceKind, id: Uuid) -> Result<ResourceResponse, ClientError> {
        self.record_call(Call::Get(kind, id))?;
        self.find(kind, id)
    }

    async fn create(
        &self,
        kind: ResourceKind,
        payload: &ResourcePayload,
    ) -> Result<ResourceResponse, ClientError> {
        self.record_call(Call::Create(kind))?;
        let created = record(
            kind,
            Uuid::new_v4(),
            payload.title.as_deref().unwrap_or_default(),
            payload.content.as_deref().unwrap_or_default(),
            None,
        );
        self.store.lock().unwrap().insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        kind: ResourceKind,
        id: Uuid,
        payload: &ResourcePayload,
    ) -> Result<ResourceResponse, ClientError> {
        self.record_call(Call::Update(kind, id))?;
        let mut updated = self.find(kind, id)?;
        updated.title = payload.title.clone().unwrap_or_default();
        updated.content = payload.content.clone().unwrap_or_default();
        updated.is_current_user_owner = Some(true);
        self.store.lock().unwrap().insert(id, updated.clone());
        Ok(updated)
    }

    async fn remove(&self, kind: ResourceKind, id: Uuid) -> Result<ResourceResponse, ClientError> {
        self.record_call(Call::Remove(kind, id))?;
        let removed = self.find(kind, id)?;
        self.store.lock().unwrap().remove(&id);
        Ok(removed)
    }
}
