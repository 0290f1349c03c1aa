//! Identifier resolution for single-resource routes.
//!
//! `/api/{kind}/{id}` handlers take a [`Resolved`] argument, so the id is
//! parsed and looked up before any of them runs.

use std::collections::HashMap;

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures::future::LocalBoxFuture;
use uuid::Uuid;

use folio_core::domain::{OwnerSummary, ResolvedResource, Resource, ResourceKind};
use folio_core::error::DomainError;
use folio_core::ports::{ResourceRepository, UserRepository};

use super::error::{AppError, AppResult};
use crate::state::AppState;

/// A resource loaded from the `{id}` path segment, owner expanded.
#[derive(Debug, Clone)]
pub struct Resolved(pub ResolvedResource);

impl FromRequest for Resolved {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let kind = req.app_data::<web::Data<ResourceKind>>().map(|k| *k.get_ref());
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let raw_id = req.match_info().get("id").map(str::to_string);

        Box::pin(async move {
            let (Some(kind), Some(state), Some(raw_id)) = (kind, state, raw_id) else {
                return Err(AppError::Internal(
                    "resource route is missing its kind, state or id".to_string(),
                ));
            };

            resolve(&state, kind, &raw_id).await.map(Resolved)
        })
    }
}

/// Parse `raw_id` and load the resource of `kind` it names.
///
/// A malformed id fails before the repository is touched.
pub async fn resolve(
    state: &AppState,
    kind: ResourceKind,
    raw_id: &str,
) -> AppResult<ResolvedResource> {
    let id = Uuid::parse_str(raw_id).map_err(|_| DomainError::InvalidIdentifier { kind })?;

    let resource = state
        .resources
        .find_in(kind, id)
        .await?
        .ok_or(DomainError::NotFound { kind })?;

    let owner = expand_owner(state, &resource).await?;
    Ok(ResolvedResource::new(resource, owner))
}

/// Owner projection for one resource. A deleted owner resolves to `None`.
pub async fn expand_owner(
    state: &AppState,
    resource: &Resource,
) -> AppResult<Option<OwnerSummary>> {
    let Some(owner_id) = resource.owner_id else {
        return Ok(None);
    };

    let mut summaries = state.users.find_summaries(&[owner_id]).await?;
    Ok(summaries.pop())
}

/// Owner projections for a page of resources, keyed by user id.
pub async fn expand_owners(
    state: &AppState,
    resources: &[Resource],
) -> AppResult<HashMap<Uuid, OwnerSummary>> {
    let mut ids: Vec<Uuid> = resources.iter().filter_map(|r| r.owner_id).collect();
    ids.sort_unstable();
    ids.dedup();

    let summaries = state.users.find_summaries(&ids).await?;
    Ok(summaries.into_iter().map(|s| (s.id, s)).collect())
}
