//! Card service

use std::collections::HashMap;

use eventcards_core::entities::{Card, CardSummary, NewCard};
use eventcards_core::pagination::ListQuery;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateCardRequest, PaginatedResponse, UpdateCardRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Card service
pub struct CardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CardService<'a> {
    /// Create a new CardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List cards across all events from raw query parameters
    #[instrument(skip(self))]
    pub async fn list_cards(
        &self,
        raw: &HashMap<String, String>,
    ) -> ServiceResult<PaginatedResponse<CardSummary>> {
        let query = ListQuery::parse_and_validate(raw, self.ctx.list_defaults())?;
        let cards = self.ctx.cards().list((), &query).await?;
        Ok(PaginatedResponse::new(cards, &query))
    }

    /// Get card by ID
    #[instrument(skip(self))]
    pub async fn get_card(&self, card_id: i64) -> ServiceResult<Card> {
        Ok(self.ctx.cards().get_by_id(card_id).await?)
    }

    /// Create a card
    #[instrument(skip(self, request))]
    pub async fn create_card(&self, request: CreateCardRequest) -> ServiceResult<Card> {
        request.validate()?;

        let card = self.ctx.cards().create(&NewCard::from(request)).await?;

        info!(card_id = card.id, event_id = card.event_id, "Card created");
        Ok(card)
    }

    /// Update a card
    #[instrument(skip(self, request))]
    pub async fn update_card(&self, card_id: i64, request: UpdateCardRequest) -> ServiceResult<Card> {
        request.validate()?;

        let mut card = self.ctx.cards().get_by_id(card_id).await?;
        request.apply_to(&mut card);
        let updated = self.ctx.cards().update(&card).await?;

        info!(card_id, "Card updated");
        Ok(updated)
    }

    /// Delete a card
    #[instrument(skip(self))]
    pub async fn delete_card(&self, card_id: i64) -> ServiceResult<()> {
        self.ctx.cards().delete(card_id).await?;
        info!(card_id, "Card deleted");
        Ok(())
    }
}
