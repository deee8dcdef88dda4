/**
 * Server Configuration
 *
 * Turns an `AppConfig` into the running pieces the server needs: the
 * credential store behind the two store ports, and the errors that can stop
 * startup.
 *
 * # Store Selection
 *
 * - `DATABASE_URL` set: connect to PostgreSQL and run migrations. A failed
 *   connection is fatal.
 * - `DATABASE_URL` unset: fall back to an in-memory store and warn that
 *   nothing survives a restart.
 */

use std::sync::Arc;
use thiserror::Error;

use crate::backend::store::{CardStore, MemoryStore, PgStore, UserStore};
use crate::shared::config::{AppConfig, ConfigError};

/// Failures that prevent the server from starting
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Database unavailable: {0}")]
    Database(#[from] sqlx::Error),
}

/// Both store ports, backed by the same adapter
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub cards: Arc<dyn CardStore>,
}

impl Stores {
    fn shared<S>(store: S) -> Self
    where
        S: UserStore + CardStore + 'static,
    {
        let store = Arc::new(store);
        Self {
            users: store.clone(),
            cards: store,
        }
    }
}

/// Load the credential store described by `config`
pub async fn load_store(config: &AppConfig) -> Result<Stores, StartupError> {
    match &config.database_url {
        Some(database_url) => {
            let store = PgStore::connect(database_url).await.map_err(|e| {
                tracing::error!("Failed to connect to database: {}", e);
                e
            })?;
            Ok(Stores::shared(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Using in-memory store; data is lost on restart.");
            Ok(Stores::shared(MemoryStore::new()))
        }
    }
}
