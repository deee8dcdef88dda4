//! Card Handlers
//!
//! All card endpoints sit behind the auth middleware; the caller's identity
//! comes from the `AuthUser` extractor.
//!
//! - **`list_cards`** - GET /cards
//! - **`create_card`** - POST /cards
//! - **`delete_card`** - DELETE /cards/{card_id}

use axum::{extract::State, http::StatusCode, response::Json};
use uuid::Uuid;

use crate::backend::cards::model::Card;
use crate::backend::cards::service::CardService;
use crate::backend::error::BackendError;
use crate::backend::extract::{JsonBody, PathParam};
use crate::backend::middleware::AuthUser;

/// Request types
pub mod types;

pub use types::CreateCardRequest;

/// List the caller's cards
pub async fn list_cards(
    State(cards): State<CardService>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Card>>, BackendError> {
    let cards = cards.list_own(user.id).await?;
    Ok(Json(cards))
}

/// Create a card owned by the caller
///
/// # Errors
///
/// * `400 Bad Request` - If any of the six card fields is missing or empty
pub async fn create_card(
    State(cards): State<CardService>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<CreateCardRequest>,
) -> Result<(StatusCode, Json<Card>), BackendError> {
    let card = cards.create(user.id, request).await?;
    Ok((StatusCode::CREATED, Json(card)))
}

/// Delete one of the caller's cards and return it
///
/// # Errors
///
/// * `400 Bad Request` - If the id is not a valid identifier
/// * `404 Not Found` - If no card has this id
/// * `500 Internal Server Error` - If the card belongs to another user
pub async fn delete_card(
    State(cards): State<CardService>,
    AuthUser(user): AuthUser,
    PathParam(card_id): PathParam<Uuid>,
) -> Result<Json<Card>, BackendError> {
    let card = cards.delete_own(user.id, card_id).await?;
    Ok(Json(card))
}
