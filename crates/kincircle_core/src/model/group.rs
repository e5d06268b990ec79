//! Family group record.
//!
//! # Invariants
//! - `id` is stable and never reused for another group.
//! - `created_at` is assigned by storage and never rewritten by updates.

use super::{require_text, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a family group.
pub type GroupId = Uuid;

/// One reunion being planned by an organizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyGroup {
    pub id: GroupId,
    pub name: String,
    pub event_year: Option<i32>,
    pub organizer_name: String,
    pub organizer_email: String,
    /// Unix epoch milliseconds. Zero until the group is persisted.
    pub created_at: i64,
}

impl FamilyGroup {
    /// Creates a new group with a generated stable ID.
    pub fn new(
        name: impl Into<String>,
        organizer_name: impl Into<String>,
        organizer_email: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, organizer_name, organizer_email)
    }

    /// Creates a group with a caller-provided ID, used by sample seeding.
    pub fn with_id(
        id: GroupId,
        name: impl Into<String>,
        organizer_name: impl Into<String>,
        organizer_email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            event_year: None,
            organizer_name: organizer_name.into(),
            organizer_email: organizer_email.into(),
            created_at: 0,
        }
    }

    /// Checks required fields before persistence.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text(&self.name, "name")?;
        require_text(&self.organizer_name, "organizer_name")?;
        require_text(&self.organizer_email, "organizer_email")?;
        Ok(())
    }
}
