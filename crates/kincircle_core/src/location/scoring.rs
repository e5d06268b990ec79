//! Candidate city scoring.
//!
//! # Responsibility
//! - Turn per-member distances to one candidate into fairness statistics.
//! - Derive the ranking score, drive time, flight estimate and rationale.
//!
//! # Invariants
//! - Every candidate gets a score, for any member count including zero.
//! - Members without a coordinate count as `MISSING_COORDINATE_PENALTY_MILES`
//!   away rather than being skipped.
//! - `flight_cost_est` is `Some` iff the median distance exceeds
//!   `FLIGHT_THRESHOLD_MILES`.

use super::geo::haversine_miles;
use crate::model::location::{CandidateCity, LocationCandidate};
use crate::model::member::FamilyMember;

/// Distance charged for a member whose position is unknown.
pub const MISSING_COORDINATE_PENALTY_MILES: f64 = 1000.0;
/// Assumed average driving speed.
pub const AVERAGE_DRIVE_MPH: f64 = 65.0;
/// Median distance above which flying is estimated.
pub const FLIGHT_THRESHOLD_MILES: f64 = 300.0;
const FLIGHT_BASE_COST: f64 = 150.0;
const FLIGHT_COST_PER_MILE: f64 = 0.8;

const MEDIAN_WEIGHT: f64 = 0.3;
const MAX_WEIGHT: f64 = 0.2;
const VARIANCE_WEIGHT: f64 = 0.001;

/// Aggregate statistics over per-member distances, in miles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceStats {
    pub median: f64,
    pub max: f64,
    /// Population variance (divides by `n`).
    pub variance: f64,
}

impl DistanceStats {
    /// Computes statistics; an empty slice yields all zeros.
    pub fn from_distances(distances: &[f64]) -> Self {
        if distances.is_empty() {
            return Self {
                median: 0.0,
                max: 0.0,
                variance: 0.0,
            };
        }

        Self {
            median: median(distances),
            max: distances.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            variance: population_variance(distances),
        }
    }

    /// `1 / (1 + 0.3·median + 0.2·max + 0.001·variance)`.
    pub fn score(&self) -> f64 {
        1.0 / (1.0
            + MEDIAN_WEIGHT * self.median
            + MAX_WEIGHT * self.max
            + VARIANCE_WEIGHT * self.variance)
    }
}

/// Distance from each member to `candidate`, in member order.
pub fn member_distances(members: &[FamilyMember], candidate: &CandidateCity) -> Vec<f64> {
    members
        .iter()
        .map(|member| match member.location {
            Some(location) => haversine_miles(location, candidate.location),
            None => MISSING_COORDINATE_PENALTY_MILES,
        })
        .collect()
}

/// Hours of driving for a distance at `AVERAGE_DRIVE_MPH`.
pub fn drive_hours(miles: f64) -> f64 {
    miles / AVERAGE_DRIVE_MPH
}

/// Flight cost estimate in dollars; `None` means driving is recommended.
pub fn flight_cost_estimate(median_miles: f64) -> Option<f64> {
    if median_miles > FLIGHT_THRESHOLD_MILES {
        Some(FLIGHT_BASE_COST + (median_miles - FLIGHT_THRESHOLD_MILES) * FLIGHT_COST_PER_MILE)
    } else {
        None
    }
}

/// Human-readable summary for one candidate.
pub fn rationale(median_drive_hours: f64, flight_cost_est: Option<f64>) -> String {
    // Round half up to one decimal before formatting; `{:.1}` alone rounds
    // exact ties to even.
    let hours = (median_drive_hours * 10.0).round() / 10.0;
    let mut text = format!("Fair central location with {hours:.1}h median drive");
    if let Some(cost) = flight_cost_est {
        text.push_str(&format!(", ~${} flights", cost.round()));
    }
    text
}

/// Scores one candidate against the full member list.
pub fn score_candidate(members: &[FamilyMember], candidate: &CandidateCity) -> LocationCandidate {
    let distances = member_distances(members, candidate);
    let stats = DistanceStats::from_distances(&distances);
    let median_drive_hours = drive_hours(stats.median);
    let flight_cost_est = flight_cost_estimate(stats.median);

    LocationCandidate {
        city: candidate.city.to_string(),
        state: candidate.state.to_string(),
        score: stats.score(),
        median_drive_hours,
        flight_cost_est,
        cost_band: candidate.cost_band,
        rationale: rationale(median_drive_hours, flight_cost_est),
        location: candidate.location,
    }
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn population_variance(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|value| (value - mean).powi(2)).sum::<f64>() / n
}
