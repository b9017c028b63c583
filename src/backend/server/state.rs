/**
 * Application State Management
 *
 * `AppState` is the state container handed to every Axum handler. It holds
 * the loaded configuration, the lazily-connected database handle and the
 * token service. All three are cheap to clone.
 *
 * The `FromRef` implementations let handlers extract only the part they
 * need, e.g. `State(db): State<Database>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;
use crate::backend::server::config::{AuthPolicy, ServerConfig};
use crate::backend::server::database::Database;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub db: Database,
    pub tokens: TokenService,
}

impl AppState {
    /// Build state from configuration; nothing is connected yet
    pub fn new(config: ServerConfig) -> Self {
        let db = Database::new(config.database_url.clone());
        Self::with_database(config, db)
    }

    pub fn with_database(config: ServerConfig, db: Database) -> Self {
        let tokens = TokenService::new(config.jwt_secret());
        Self {
            config: Arc::new(config),
            db,
            tokens,
        }
    }

    /// Database pool, connecting on first use
    pub async fn pool(&self) -> Result<&SqlitePool, BackendError> {
        Ok(self.db.pool().await?)
    }

    pub fn auth_policy(&self) -> AuthPolicy {
        self.config.auth_policy
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
