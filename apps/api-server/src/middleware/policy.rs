//! Policy middleware - runs the role table before any resource handler.

use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use std::future::{Future, Ready, ready};
use std::pin::Pin;

use folio_core::error::NOT_AUTHORIZED;
use folio_core::policy::{Action, Decision, RouteFamily, is_allowed};
use folio_shared::ErrorResponse;

use super::auth::Session;

/// Policy middleware factory, one per route family.
pub struct PolicyGuard {
    family: RouteFamily,
}

impl PolicyGuard {
    pub fn collection() -> Self {
        Self {
            family: RouteFamily::Collection,
        }
    }

    pub fn single() -> Self {
        Self {
            family: RouteFamily::Single,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for PolicyGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = PolicyGuardService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(PolicyGuardService {
            service,
            family: self.family,
        }))
    }
}

pub struct PolicyGuardService<S> {
    service: S,
    family: RouteFamily,
}

impl<S, B> Service<ServiceRequest> for PolicyGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let session = Session::from_http_request(req.request());
        let role = session.role();

        // Methods with no action fall through so the resource answers 405.
        let denied = Action::from_method(req.method().as_str(), self.family)
            .filter(|action| is_allowed(*action, role) == Decision::Deny);

        if let Some(action) = denied {
            tracing::warn!(
                path = %req.path(),
                ?action,
                role = role.as_str(),
                "Policy denied request"
            );

            let response = HttpResponse::Forbidden().json(ErrorResponse::new(NOT_AUTHORIZED));
            let (http_req, _payload) = req.into_parts();
            let srv_response = ServiceResponse::new(http_req, response);

            return Box::pin(async move { Ok(srv_response.map_into_right_body()) });
        }

        req.extensions_mut().insert(session);

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            Ok(res.map_into_left_body())
        })
    }
}
