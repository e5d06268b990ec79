//! Family member record.
//!
//! # Responsibility
//! - Describe one household attending the reunion and where it travels from.
//! - Carry the attendee count used as the weight in location analysis.
//!
//! # Invariants
//! - `attendee_count >= 1`.
//! - `location` is either a full coordinate or `None`; never half-resolved.

use super::location::Coordinate;
use super::{require_text, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a family member record.
pub type MemberId = Uuid;

/// How a member prefers to reach the reunion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Drive,
    Fly,
    #[default]
    Either,
}

impl TravelMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Drive => "drive",
            Self::Fly => "fly",
            Self::Either => "either",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "drive" => Some(Self::Drive),
            "fly" => Some(Self::Fly),
            "either" => Some(Self::Either),
            _ => None,
        }
    }
}

/// One household in a family group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub id: MemberId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    /// Number of people this record represents.
    pub attendee_count: u32,
    pub travel_mode: TravelMode,
    pub access_needs: Option<String>,
    pub relationship_role: Option<String>,
    /// Resolved position. Filled by geocoding, not by user input.
    pub location: Option<Coordinate>,
}

impl FamilyMember {
    /// Creates a single-attendee member with a generated stable ID.
    ///
    /// Country defaults to `United States` and travel mode to `either`.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: None,
            phone: None,
            city: city.into(),
            state: state.into(),
            postal_code: postal_code.into(),
            country: "United States".to_string(),
            attendee_count: 1,
            travel_mode: TravelMode::default(),
            access_needs: None,
            relationship_role: None,
            location: None,
        }
    }

    /// Builder-style attendee count setter.
    pub fn with_attendees(mut self, attendee_count: u32) -> Self {
        self.attendee_count = attendee_count;
        self
    }

    /// Builder-style resolved coordinate setter.
    pub fn with_location(mut self, location: Coordinate) -> Self {
        self.location = Some(location);
        self
    }

    /// Full display name.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    /// Checks required fields before persistence.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text(&self.first_name, "first_name")?;
        require_text(&self.last_name, "last_name")?;
        require_text(&self.city, "city")?;
        require_text(&self.state, "state")?;
        require_text(&self.postal_code, "postal_code")?;
        if self.attendee_count == 0 {
            return Err(ValidationError::NoAttendees);
        }
        Ok(())
    }
}
