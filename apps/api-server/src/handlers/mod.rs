//! HTTP handlers and route configuration.

mod auth;
mod health;
mod resources;


use actix_web::web;

use folio_core::domain::ResourceKind;

use crate::middleware::error::AppError;
use crate::middleware::policy::PolicyGuard;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into());

    let mut api = web::scope("/api")
        .app_data(json_config)
        // Public routes
        .route("/health", web::get().to(health::health_check))
        // Auth routes
        .service(
            web::scope("/auth")
                .route("/signup", web::post().to(auth::signup))
                .route("/signin", web::post().to(auth::signin))
                .route("/me", web::get().to(auth::me)),
        );

    for kind in ResourceKind::ALL {
        api = api.service(resource_scope(kind));
    }

    cfg.service(api);
}

/// `/{collection}` and `/{collection}/{id}` for one kind, each behind the policy guard.
fn resource_scope(kind: ResourceKind) -> actix_web::Scope {
    web::scope(&format!("/{}", kind.collection()))
        .app_data(web::Data::new(kind))
        .service(
            web::resource("")
                .wrap(PolicyGuard::collection())
                .route(web::get().to(resources::list))
                .route(web::post().to(resources::create)),
        )
        .service(
            web::resource("/{id}")
                .wrap(PolicyGuard::single())
                .route(web::get().to(resources::read))
                .route(web::put().to(resources::update))
                .route(web::delete().to(resources::delete)),
        )
}
