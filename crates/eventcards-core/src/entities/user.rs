//! User projection - read-only owner data embedded in event listings

use serde::{Deserialize, Serialize};

/// Owner summary shown next to an event in list results.
///
/// Users themselves are managed outside this crate; this is a value copy
/// assembled at query time, never a live reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
}

impl UserSummary {
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}
