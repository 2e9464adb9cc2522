//! # eventcards-service
//!
//! Application layer: parses listing parameters, validates request DTOs and
//! drives the repositories behind the storage facade.

pub mod dto;
pub mod services;

#[cfg(test)]
mod testing;

pub use services::{
    CardService, CardTemplateService, EventService, GuestService, ServiceContext, ServiceError,
    ServiceResult,
};
