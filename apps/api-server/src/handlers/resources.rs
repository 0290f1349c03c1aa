//! Blog and contact handlers. One set serves every [`ResourceKind`]; the kind
//! comes from the scope the route was mounted under.

use actix_web::{HttpResponse, web};

use folio_core::domain::{ResolvedResource, Resource, ResourceDraft, ResourceKind, validate};
use folio_core::error::{DomainError, RepoError};
use folio_core::policy::Action;
use folio_core::ports::{BaseRepository, ResourceRepository};
use folio_shared::dto::{OwnerResponse, ResourcePayload, ResourceResponse};

use crate::middleware::auth::Session;
use crate::middleware::error::{AppError, AppResult};
use crate::middleware::resolve::{Resolved, expand_owner, expand_owners};
use crate::state::AppState;

/// GET /api/{kind}
pub async fn list(
    state: web::Data<AppState>,
    kind: web::Data<ResourceKind>,
) -> AppResult<HttpResponse> {
    let resources = state.resources.list_by_kind(**kind).await?;
    let owners = expand_owners(&state, &resources).await?;

    let body: Vec<ResourceResponse> = resources
        .into_iter()
        .map(|resource| {
            let owner = resource.owner_id.and_then(|id| owners.get(&id).cloned());
            to_response(ResolvedResource::new(resource, owner), None)
        })
        .collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/{kind}
pub async fn create(
    state: web::Data<AppState>,
    kind: web::Data<ResourceKind>,
    session: Session,
    body: web::Json<ResourcePayload>,
) -> AppResult<HttpResponse> {
    // The policy guard turns guests away before this point.
    let identity = session.identity().ok_or(DomainError::Forbidden)?;

    // A token can outlive its account; the owner must still exist.
    if state.users.find_by_id(identity.user_id).await?.is_none() {
        tracing::warn!(user_id = %identity.user_id, "Create rejected, account no longer exists");
        return Err(DomainError::Forbidden.into());
    }

    let fields = validate(&draft(body.into_inner())).map_err(DomainError::from)?;
    let resource = Resource::new(**kind, identity.user_id, fields);

    let saved = state.resources.save(resource).await?;
    tracing::info!(kind = %saved.kind, id = %saved.id, owner = %identity.user_id, "Resource created");

    let owner = expand_owner(&state, &saved).await?;
    Ok(HttpResponse::Ok().json(to_response(ResolvedResource::new(saved, owner), None)))
}

/// GET /api/{kind}/{id}
pub async fn read(resolved: Resolved, session: Session) -> AppResult<HttpResponse> {
    let Resolved(resolved) = resolved;
    let is_owner = resolved.is_owned_by(session.user_id());

    Ok(HttpResponse::Ok().json(to_response(resolved, Some(is_owner))))
}

/// PUT /api/{kind}/{id}
pub async fn update(
    state: web::Data<AppState>,
    resolved: Resolved,
    session: Session,
    body: web::Json<ResourcePayload>,
) -> AppResult<HttpResponse> {
    let Resolved(resolved) = resolved;
    state
        .ownership
        .authorize(Action::Update, &resolved, session.user_id())?;

    let fields = validate(&draft(body.into_inner())).map_err(DomainError::from)?;

    let ResolvedResource {
        mut resource,
        owner,
    } = resolved;
    resource.apply(fields);

    let kind = resource.kind;
    let saved = state
        .resources
        .update(resource)
        .await
        .map_err(|e| match e {
            RepoError::NotFound => AppError::from(DomainError::NotFound { kind }),
            other => other.into(),
        })?;
    tracing::info!(kind = %saved.kind, id = %saved.id, "Resource updated");

    let resolved = ResolvedResource::new(saved, owner);
    let is_owner = resolved.is_owned_by(session.user_id());
    Ok(HttpResponse::Ok().json(to_response(resolved, Some(is_owner))))
}

/// DELETE /api/{kind}/{id}
pub async fn delete(
    state: web::Data<AppState>,
    resolved: Resolved,
    session: Session,
) -> AppResult<HttpResponse> {
    let Resolved(resolved) = resolved;
    state
        .ownership
        .authorize(Action::Delete, &resolved, session.user_id())?;

    state.resources.delete(resolved.resource.id).await?;
    tracing::info!(
        kind = %resolved.resource.kind,
        id = %resolved.resource.id,
        "Resource deleted"
    );

    Ok(HttpResponse::Ok().json(to_response(resolved, None)))
}

fn draft(payload: ResourcePayload) -> ResourceDraft {
    ResourceDraft {
        title: payload.title,
        content: payload.content,
    }
}

fn to_response(
    resolved: ResolvedResource,
    is_current_user_owner: Option<bool>,
) -> ResourceResponse {
    let ResolvedResource { resource, owner } = resolved;

    ResourceResponse {
        id: resource.id,
        kind: resource.kind.as_str().to_string(),
        title: resource.title,
        content: resource.content,
        owner: owner.map(|o| OwnerResponse {
            id: o.id,
            display_name: o.display_name,
        }),
        created_at: resource.created_at,
        is_current_user_owner,
    }
}
