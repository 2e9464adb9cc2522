//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - The paginated wrapper for listing outputs
//! - Mappers for turning requests into domain drafts

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateCardRequest, CreateCardTemplateRequest, CreateEventRequest, CreateGuestRequest,
    InviteGuestRequest, UpdateCardRequest, UpdateCardTemplateRequest, UpdateEventRequest,
    UpdateGuestRequest,
};

pub use responses::{PaginatedResponse, PaginationMeta};
