//! Domain model for reunion planning.
//!
//! # Responsibility
//! - Define family group and member records shared by repo/service layers.
//! - Define the value types produced by location analysis.
//!
//! # Invariants
//! - Groups and members are identified by stable UUIDs.
//! - A member's coordinate is either fully resolved or absent.

pub mod group;
pub mod location;
pub mod member;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failure for group or member records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required text field is empty after trimming.
    BlankField(&'static str),
    /// Attendee count must be at least one.
    NoAttendees,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField(field) => write!(f, "required field `{field}` is blank"),
            Self::NoAttendees => write!(f, "attendee_count must be at least 1"),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_text(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField(field));
    }
    Ok(())
}
