//! Guest entity - a person on an event's guest list

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Attendance status of a guest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GuestStatus {
    #[default]
    Invited,
    Confirmed,
    Declined,
    CheckedIn,
}

impl GuestStatus {
    /// Database / wire representation
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Invited => "invited",
            Self::Confirmed => "confirmed",
            Self::Declined => "declined",
            Self::CheckedIn => "checked_in",
        }
    }
}

impl std::fmt::Display for GuestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GuestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "invited" => Ok(Self::Invited),
            "confirmed" => Ok(Self::Confirmed),
            "declined" => Ok(Self::Declined),
            "checked_in" => Ok(Self::CheckedIn),
            _ => Err(format!("Invalid guest status: {s}")),
        }
    }
}

/// Guest category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GuestType {
    #[default]
    Regular,
    Vip,
}

impl GuestType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Vip => "vip",
        }
    }
}

impl std::fmt::Display for GuestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GuestType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(Self::Regular),
            "vip" => Ok(Self::Vip),
            _ => Err(format!("Invalid guest type: {s}")),
        }
    }
}

/// Guest entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub status: GuestStatus,
    #[serde(rename = "type")]
    pub guest_type: GuestType,
    pub card_id: Option<i64>,
    /// Owning event; fixed at creation
    pub event_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Guest {
    /// Check if the guest has been checked in at the door
    pub fn is_checked_in(&self) -> bool {
        self.status == GuestStatus::CheckedIn
    }

    /// Check if a card has been issued to this guest
    pub fn has_card(&self) -> bool {
        self.card_id.is_some()
    }
}

/// Client-supplied fields for a new guest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGuest {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub status: GuestStatus,
    pub guest_type: GuestType,
    pub event_id: i64,
}

impl NewGuest {
    pub fn new(event_id: i64, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: String::new(),
            phone_number: String::new(),
            status: GuestStatus::default(),
            guest_type: GuestType::default(),
            event_id,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    pub fn with_type(mut self, guest_type: GuestType) -> Self {
        self.guest_type = guest_type;
        self
    }
}

/// Guest contact details embedded in card listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestContact {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
}

/// Guest list item with the issued card's image, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub status: GuestStatus,
    #[serde(rename = "type")]
    pub guest_type: GuestType,
    pub event_id: i64,
    pub created_at: DateTime<Utc>,
    pub card: Option<super::card::CardImage>,
}
