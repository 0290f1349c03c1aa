//! REST transport for blogs and contacts.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use folio_core::domain::ResourceKind;
use folio_shared::ErrorResponse;
use folio_shared::dto::{ResourcePayload, ResourceResponse};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The server answered with a non-success status and a `{message}` body.
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    /// Update or remove was called on an instance that was never persisted.
    #[error("{0} has not been saved yet")]
    Unsaved(&'static str),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Calls against `/api/{kind}` and `/api/{kind}/{id}`.
#[async_trait]
pub trait ResourceApi: Send + Sync {
    async fn list(&self, kind: ResourceKind) -> Result<Vec<ResourceResponse>, ClientError>;

    async fn get(&self, kind: ResourceKind, id: Uuid) -> Result<ResourceResponse, ClientError>;

    async fn create(
        &self,
        kind: ResourceKind,
        payload: &ResourcePayload,
    ) -> Result<ResourceResponse, ClientError>;

    async fn update(
        &self,
        kind: ResourceKind,
        id: Uuid,
        payload: &ResourcePayload,
    ) -> Result<ResourceResponse, ClientError>;

    async fn remove(&self, kind: ResourceKind, id: Uuid) -> Result<ResourceResponse, ClientError>;
}

/// [`ResourceApi`] over HTTP with reqwest.
#[derive(Clone)]
pub struct HttpResourceApi {
    base_url: String,
    client: Client,
    token: Option<String>,
}

impl HttpResourceApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
            token: None,
        }
    }

    /// Send `Authorization: Bearer <token>` with every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, kind: ResourceKind, id: Option<Uuid>) -> String {
        match id {
            Some(id) => format!("{}/api/{}/{}", self.base_url, kind.collection(), id),
            None => format!("{}/api/{}", self.base_url, kind.collection()),
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let fallback = status.canonical_reason().unwrap_or("Request failed").to_string();
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.message)
                .unwrap_or(fallback);
            tracing::warn!(status = status.as_u16(), %message, "Request rejected");
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ResourceApi for HttpResourceApi {
    async fn list(&self, kind: ResourceKind) -> Result<Vec<ResourceResponse>, ClientError> {
        self.send(self.client.get(self.url(kind, None))).await
    }

    async fn get(&self, kind: ResourceKind, id: Uuid) -> Result<ResourceResponse, ClientError> {
        self.send(self.client.get(self.url(kind, Some(id)))).await
    }

    async fn create(
        &self,
        kind: ResourceKind,
        payload: &ResourcePayload,
    ) -> Result<ResourceResponse, ClientError> {
        self.send(self.client.post(self.url(kind, None)).json(payload))
            .await
    }

    async fn update(
        &self,
        kind: ResourceKind,
        id: Uuid,
        payload: &ResourcePayload,
    ) -> Result<ResourceResponse, ClientError> {
        self.send(self.client.put(self.url(kind, Some(id))).json(payload))
            .await
    }

    async fn remove(&self, kind: ResourceKind, id: Uuid) -> Result<ResourceResponse, ClientError> {
        self.send(self.client.delete(self.url(kind, Some(id)))).await
    }
}
