/**
 * Card Routes
 *
 * All card routes require a bearer token.
 *
 * - `GET /cards` - List the caller's cards
 * - `POST /cards` - Create a card
 * - `DELETE /cards/{card_id}` - Delete one of the caller's cards
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get},
    Router,
};

use crate::backend::cards::{create_card, delete_card, list_cards};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure card routes
pub fn configure_card_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let cards = Router::new()
        .route("/cards", get(list_cards).post(create_card))
        .route("/cards/{card_id}", delete(delete_card))
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    router.merge(cards)
}
