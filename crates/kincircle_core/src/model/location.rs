//! Location analysis value types.
//!
//! # Responsibility
//! - Define coordinates, the candidate city catalog shape and analysis output.
//!
//! # Invariants
//! - `score` is a ranking key only: higher is better, not a probability.
//! - `flight_cost_est` is `None` when driving is the better option.

use serde::{Deserialize, Serialize};

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Three-tier lodging cost indicator for a host city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostBand {
    Low,
    Medium,
    High,
}

impl CostBand {
    /// Dollar-sign rendering used by the planner UI.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Low => "$",
            Self::Medium => "$$",
            Self::High => "$$$",
        }
    }
}

/// Static catalog entry for a potential reunion host city.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateCity {
    pub city: &'static str,
    pub state: &'static str,
    pub location: Coordinate,
    pub cost_band: CostBand,
}

/// Scored candidate city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationCandidate {
    pub city: String,
    pub state: String,
    pub score: f64,
    pub median_drive_hours: f64,
    pub flight_cost_est: Option<f64>,
    pub cost_band: CostBand,
    pub rationale: String,
    pub location: Coordinate,
}

/// Result of analyzing one snapshot of a group's members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationAnalysis {
    pub centroid: Coordinate,
    /// Best first; bounded by the configured top-N.
    pub candidates: Vec<LocationCandidate>,
    pub total_members: usize,
    pub total_attendees: u64,
}

impl LocationAnalysis {
    /// Highest-ranked candidate, if any.
    pub fn best(&self) -> Option<&LocationCandidate> {
        self.candidates.first()
    }
}
