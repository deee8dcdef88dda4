/**
 * Server Initialization
 *
 * Builds the Axum application from an `AppConfig`.
 *
 * # Initialization Process
 *
 * 1. Validate the configuration
 * 2. Load the credential store (PostgreSQL or in-memory)
 * 3. Derive the token service from the signing secret
 * 4. Build `AppState` and the router
 */

use axum::Router;

use crate::backend::auth::sessions::TokenService;
use crate::backend::routes::router::build_router;
use crate::backend::server::config::{load_store, StartupError};
use crate::backend::server::state::AppState;
use crate::shared::config::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns `StartupError` when the configuration is invalid or the
/// configured database cannot be reached.
pub async fn create_app(config: &AppConfig) -> Result<Router, StartupError> {
    tracing::info!("Initializing newsrv backend server");

    config.validate()?;

    let stores = load_store(config).await?;
    let tokens = TokenService::from_config(config);
    let app_state = AppState::new(stores.users, stores.cards, tokens);

    let app = build_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
