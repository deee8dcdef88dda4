/**
 * Router Configuration
 *
 * Combines the route groups into a single Axum router and applies the
 * cross-cutting layers.
 *
 * # Route Order
 *
 * 1. Health check
 * 2. Account routes (signup, login, me)
 * 3. Card routes
 * 4. Fallback handler (404)
 */

use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::error::{messages, BackendError};
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::card_routes::configure_card_routes;
use crate::backend::server::state::AppState;

/// Build the Axum router with all routes configured
///
/// ## Public
///
/// - `GET /api/health` - Liveness check
/// - `POST /signup` - User registration
/// - `POST /login` - User login
///
/// ## Protected (bearer token)
///
/// - `GET /me`, `PATCH /me` - Current user
/// - `GET /cards`, `POST /cards` - Caller's cards
/// - `DELETE /cards/{card_id}` - Delete one of the caller's cards
///
/// Unknown routes return `404 {"message": "Route not found"}`.
pub fn build_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/api/health", get(health));

    let router = configure_api_routes(router, &app_state);
    let router = configure_card_routes(router, &app_state);

    router
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

async fn fallback() -> BackendError {
    BackendError::not_found(messages::ROUTE_NOT_FOUND)
}
