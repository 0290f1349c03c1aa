//! Application state - shared across all handlers.

use std::sync::Arc;

use folio_core::policy::OwnershipRules;
use folio_core::ports::{PasswordService, ResourceRepository, TokenService, UserRepository};
use folio_infra::{
    Argon2PasswordService, InMemoryResourceRepository, InMemoryUserRepository, JwtTokenService,
};

#[cfg(feature = "postgres")]
use folio_infra::{DatabaseConnections, PostgresResourceRepository, PostgresUserRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub resources: Arc<dyn ResourceRepository>,
    pub users: Arc<dyn UserRepository>,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
    pub ownership: OwnershipRules,
    /// Name of the storage backend, reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(config.jwt.clone()));
        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());

        if let Some((resources, users)) = connect(config).await {
            tracing::info!("Application state initialized (postgres)");
            return Self {
                resources,
                users,
                tokens,
                passwords,
                ownership: config.ownership,
                storage: "postgres",
            };
        }

        tracing::info!("Application state initialized (memory)");
        Self::in_memory(tokens, passwords, config.ownership)
    }

    /// State backed by fresh in-memory repositories.
    pub fn in_memory(
        tokens: Arc<dyn TokenService>,
        passwords: Arc<dyn PasswordService>,
        ownership: OwnershipRules,
    ) -> Self {
        Self {
            resources: Arc::new(InMemoryResourceRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
            tokens,
            passwords,
            ownership,
            storage: "memory",
        }
    }
}

type Repositories = (Arc<dyn ResourceRepository>, Arc<dyn UserRepository>);

/// Postgres repositories, or `None` when no database is configured or reachable.
#[cfg(feature = "postgres")]
async fn connect(config: &AppConfig) -> Option<Repositories> {
    let Some(db_config) = config.database.as_ref() else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return None;
    };

    match DatabaseConnections::init(db_config).await {
        Ok(connections) => {
            let resources: Arc<dyn ResourceRepository> =
                Arc::new(PostgresResourceRepository::new(connections.main.clone()));
            let users: Arc<dyn UserRepository> =
                Arc::new(PostgresUserRepository::new(connections.main));
            Some((resources, users))
        }
        Err(e) => {
            tracing::error!(
                "Failed to connect to database: {}. Using in-memory fallback.",
                e
            );
            None
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn connect(_config: &AppConfig) -> Option<Repositories> {
    tracing::info!("Running without postgres feature - using in-memory repositories");
    None
}
