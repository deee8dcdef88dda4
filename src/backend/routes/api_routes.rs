/**
 * Account Routes
 *
 * ## Public
 * - `POST /signup` - User registration
 * - `POST /login` - User login
 *
 * ## Protected
 * - `GET /me` - Get current user info
 * - `PATCH /me` - Update name and/or avatar
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, login, signup, update_me};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure account routes
///
/// The protected group is built as its own router so `route_layer` only
/// covers `/me`.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(get_me).patch(update_me))
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    router
        .route("/signup", post(signup))
        .route("/login", post(login))
        .merge(protected)
}
