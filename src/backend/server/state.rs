/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds the two services the handlers call into and the token
 * service the auth middleware verifies with. Every field is cheap to clone:
 * the services share their store through an `Arc`, and the token service
 * only holds derived keys.
 *
 * # Example
 *
 * ```rust,no_run
 * use axum::extract::State;
 * use newsrv::backend::cards::CardService;
 *
 * async fn handler(State(cards): State<CardService>) {
 *     // handlers extract only the service they need
 * }
 * ```
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::service::UserService;
use crate::backend::auth::sessions::TokenService;
use crate::backend::cards::service::CardService;
use crate::backend::store::{CardStore, MemoryStore, UserStore};

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Signup, login and profile operations
    pub users: UserService,

    /// Card listing, creation and owner-only deletion
    pub cards: CardService,

    /// Bearer token issuance and verification
    pub tokens: TokenService,
}

impl AppState {
    /// Build the state from the two store ports and a token service
    pub fn new(
        user_store: Arc<dyn UserStore>,
        card_store: Arc<dyn CardStore>,
        tokens: TokenService,
    ) -> Self {
        Self {
            users: UserService::new(user_store, tokens.clone()),
            cards: CardService::new(card_store),
            tokens,
        }
    }

    /// State backed by a fresh `MemoryStore`
    pub fn in_memory(tokens: TokenService) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(store.clone(), store, tokens)
    }
}

impl FromRef<AppState> for UserService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for CardService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.cards.clone()
    }
}
