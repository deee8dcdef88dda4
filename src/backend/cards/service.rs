//! Card Service
//!
//! Per-owner card operations. The owner of a new card is always the caller;
//! only that owner may delete it.

use std::sync::Arc;

use uuid::Uuid;

use crate::backend::cards::handlers::types::CreateCardRequest;
use crate::backend::cards::model::{Card, NewCard};
use crate::backend::error::{messages, BackendError};
use crate::backend::extract::present;
use crate::backend::store::{CardStore, StoreError};

/// Card operations scoped to the authenticated owner
#[derive(Clone)]
pub struct CardService {
    store: Arc<dyn CardStore>,
}

impl CardService {
    pub fn new(store: Arc<dyn CardStore>) -> Self {
        Self { store }
    }

    /// All cards owned by `user_id`. Unpaginated.
    pub async fn list_own(&self, user_id: Uuid) -> Result<Vec<Card>, BackendError> {
        Ok(self.store.list_cards_by_owner(user_id).await?)
    }

    /// Create a card owned by `user_id`
    pub async fn create(
        &self,
        user_id: Uuid,
        request: CreateCardRequest,
    ) -> Result<Card, BackendError> {
        let (
            Some(title),
            Some(description),
            Some(image),
            Some(url),
            Some(source),
            Some(published_at),
        ) = (
            present(request.title),
            present(request.description),
            present(request.image),
            present(request.url),
            present(request.source),
            request.published_at,
        ) else {
            tracing::warn!("Card creation rejected: missing field");
            return Err(BackendError::bad_request());
        };

        let card = self
            .store
            .insert_card(NewCard {
                owner: user_id,
                title,
                description,
                image,
                url,
                source,
                published_at,
            })
            .await
            .map_err(|err| match err {
                StoreError::Validation(e) => {
                    tracing::warn!("Card creation rejected: {}", e);
                    BackendError::bad_request()
                }
                other => other.into(),
            })?;

        tracing::info!(card_id = %card.id, owner = %user_id, "Card created");
        Ok(card)
    }

    /// Delete a card the caller owns, returning the deleted record
    pub async fn delete_own(&self, user_id: Uuid, card_id: Uuid) -> Result<Card, BackendError> {
        let card = self
            .store
            .find_card_by_id(card_id)
            .await?
            .ok_or_else(|| BackendError::not_found(messages::CARD_NOT_FOUND))?;

        if !card.is_owned_by(user_id) {
            tracing::warn!(card_id = %card_id, caller = %user_id, "Refused to delete a card owned by another user");
            return Err(BackendError::NotCardOwner);
        }

        // The card can vanish between the lookup and the delete.
        let deleted = self
            .store
            .delete_card(card_id)
            .await?
            .ok_or_else(|| BackendError::not_found(messages::CARD_NOT_FOUND))?;

        tracing::info!(card_id = %card_id, owner = %user_id, "Card deleted");
        Ok(deleted)
    }
}
