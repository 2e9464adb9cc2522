//! Guest service
//!
//! Guests always belong to one event; listing and creation check that the
//! event exists first.

use std::collections::HashMap;

use eventcards_core::entities::{Card, Guest, GuestSummary, NewCard};
use eventcards_core::pagination::ListQuery;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateGuestRequest, InviteGuestRequest, PaginatedResponse, UpdateGuestRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Guest service
pub struct GuestService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GuestService<'a> {
    /// Create a new GuestService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the guests of one event from raw query parameters
    #[instrument(skip(self))]
    pub async fn list_guests(
        &self,
        event_id: i64,
        raw: &HashMap<String, String>,
    ) -> ServiceResult<PaginatedResponse<GuestSummary>> {
        let query = ListQuery::parse_and_validate(raw, self.ctx.list_defaults())?;
        self.ctx.events().get_by_id(event_id).await?;

        let guests = self.ctx.guests().list(event_id, &query).await?;
        Ok(PaginatedResponse::new(guests, &query))
    }

    /// Get guest by ID
    #[instrument(skip(self))]
    pub async fn get_guest(&self, guest_id: i64) -> ServiceResult<Guest> {
        Ok(self.ctx.guests().get_by_id(guest_id).await?)
    }

    /// Add a guest to an event
    #[instrument(skip(self, request))]
    pub async fn create_guest(
        &self,
        event_id: i64,
        request: CreateGuestRequest,
    ) -> ServiceResult<Guest> {
        request.validate()?;
        self.ctx.events().get_by_id(event_id).await?;

        let guest = self
            .ctx
            .guests()
            .create(&request.into_draft(event_id))
            .await?;

        info!(guest_id = guest.id, event_id, "Guest created");
        Ok(guest)
    }

    /// Add a guest and issue their card in one transaction
    #[instrument(skip(self, request))]
    pub async fn invite_guest(
        &self,
        event_id: i64,
        request: InviteGuestRequest,
    ) -> ServiceResult<(Guest, Card)> {
        request.validate()?;
        self.ctx.events().get_by_id(event_id).await?;

        let guest = request.guest.into_draft(event_id);
        let mut card = NewCard::new(event_id, request.image_path);
        if let Some(template_id) = request.card_template_id {
            card = card.with_card_template(template_id);
        }

        let (guest, card) = self
            .ctx
            .invitations()
            .create_guest_with_card(&guest, &card)
            .await?;

        info!(guest_id = guest.id, card_id = card.id, event_id, "Guest invited");
        Ok((guest, card))
    }

    /// Update a guest; the owning event never changes
    #[instrument(skip(self, request))]
    pub async fn update_guest(
        &self,
        guest_id: i64,
        request: UpdateGuestRequest,
    ) -> ServiceResult<Guest> {
        request.validate()?;

        let mut guest = self.ctx.guests().get_by_id(guest_id).await?;
        request.apply_to(&mut guest);
        let updated = self.ctx.guests().update(&guest).await?;

        info!(guest_id, "Guest updated");
        Ok(updated)
    }

    /// Delete a guest
    #[instrument(skip(self))]
    pub async fn delete_guest(&self, guest_id: i64) -> ServiceResult<()> {
        self.ctx.guests().delete(guest_id).await?;
        info!(guest_id, "Guest deleted");
        Ok(())
    }
}
