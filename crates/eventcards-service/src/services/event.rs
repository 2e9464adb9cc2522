//! Event service
//!
//! Handles event creation, listing, updates and deletion. A successful update
//! drops the owner's cached projection.

use std::collections::HashMap;

use eventcards_core::entities::{Event, EventSummary};
use eventcards_core::pagination::ListQuery;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{CreateEventRequest, PaginatedResponse, UpdateEventRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Event service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an event owned by `user_id`
    #[instrument(skip(self, request))]
    pub async fn create_event(
        &self,
        user_id: i64,
        request: CreateEventRequest,
    ) -> ServiceResult<Event> {
        request.validate()?;

        let event = self.ctx.events().create(&request.into_draft(user_id)).await?;

        info!(event_id = event.id, user_id, "Event created");
        Ok(event)
    }

    /// Get event by ID
    #[instrument(skip(self))]
    pub async fn get_event(&self, event_id: i64) -> ServiceResult<Event> {
        Ok(self.ctx.events().get_by_id(event_id).await?)
    }

    /// List events from raw query parameters
    #[instrument(skip(self))]
    pub async fn list_events(
        &self,
        raw: &HashMap<String, String>,
    ) -> ServiceResult<PaginatedResponse<EventSummary>> {
        let query = ListQuery::parse_and_validate(raw, self.ctx.list_defaults())?;
        let events = self.ctx.events().list((), &query).await?;
        Ok(PaginatedResponse::new(events, &query))
    }

    /// Update an event, then invalidate the owner's cached projection
    #[instrument(skip(self, request))]
    pub async fn update_event(
        &self,
        event_id: i64,
        request: UpdateEventRequest,
    ) -> ServiceResult<Event> {
        request.validate()?;

        let mut event = self.ctx.events().get_by_id(event_id).await?;
        request.apply_to(&mut event);
        let updated = self.ctx.events().update(&event).await?;

        if let Err(e) = self.ctx.user_cache().invalidate_user(updated.user_id).await {
            warn!(
                user_id = updated.user_id,
                error = %e,
                "Failed to invalidate user cache; entry stays stale until it expires"
            );
        }

        info!(event_id, "Event updated");
        Ok(updated)
    }

    /// Delete an event
    #[instrument(skip(self))]
    pub async fn delete_event(&self, event_id: i64) -> ServiceResult<()> {
        self.ctx.events().delete(event_id).await?;
        info!(event_id, "Event deleted");
        Ok(())
    }
}
