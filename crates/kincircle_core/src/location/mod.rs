//! Location analysis: geocode, centroid, score, rank.
//!
//! # Responsibility
//! - Resolve member coordinates through the postal code stub.
//! - Rank the fixed candidate catalog by distance fairness.
//!
//! # Invariants
//! - Analysis is a pure function of the member snapshot and config; no
//!   process-wide state is read or written apart from log events.
//! - Ranking is descending by score and stable: ties keep catalog order.
//! - Zero or one member never panics; callers own any minimum-size policy.

pub mod catalog;
pub mod centroid;
pub mod geo;
pub mod geocode;
pub mod scoring;

use crate::model::location::{LocationAnalysis, LocationCandidate};
use crate::model::member::FamilyMember;
use catalog::CANDIDATE_CITIES;
use centroid::weighted_centroid;
use geocode::{lookup_postal_code, GEOCODE_FALLBACK};
use log::{debug, warn};
use scoring::score_candidate;
use std::time::Instant;

/// Number of candidates kept in an analysis result by default.
pub const DEFAULT_TOP_CANDIDATES: usize = 5;

/// What to do when a postal code is not in the geocode table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GeocodeMissPolicy {
    /// Use the first table entry's coordinate (stub behavior).
    #[default]
    FallbackToFirstEntry,
    /// Leave the member unresolved; scoring charges the penalty distance.
    LeaveUnresolved,
}

/// Tunables for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub geocode_miss: GeocodeMissPolicy,
    pub top_n: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            geocode_miss: GeocodeMissPolicy::default(),
            top_n: DEFAULT_TOP_CANDIDATES,
        }
    }
}

/// Returns a copy of `members` with coordinates resolved from postal codes.
///
/// Any coordinate already on a member is replaced by the lookup result.
pub fn resolve_coordinates(
    members: &[FamilyMember],
    policy: GeocodeMissPolicy,
) -> Vec<FamilyMember> {
    resolve_counting_misses(members, policy).0
}

/// Resolves coordinates with one table lookup per member and returns how
/// many postal codes were not in the table.
fn resolve_counting_misses(
    members: &[FamilyMember],
    policy: GeocodeMissPolicy,
) -> (Vec<FamilyMember>, usize) {
    let mut misses = 0;
    let resolved = members
        .iter()
        .map(|member| {
            let hit = lookup_postal_code(&member.postal_code);
            if hit.is_none() {
                misses += 1;
            }
            let location = match policy {
                GeocodeMissPolicy::FallbackToFirstEntry => Some(hit.unwrap_or(GEOCODE_FALLBACK)),
                GeocodeMissPolicy::LeaveUnresolved => hit,
            };
            FamilyMember {
                location,
                ..member.clone()
            }
        })
        .collect();
    (resolved, misses)
}

/// Analyzes members with the default configuration.
pub fn analyze_locations(members: &[FamilyMember]) -> LocationAnalysis {
    analyze_locations_with(members, &AnalysisConfig::default())
}

/// Geocodes, computes the centroid, scores every catalog city and keeps the
/// best `config.top_n`.
pub fn analyze_locations_with(
    members: &[FamilyMember],
    config: &AnalysisConfig,
) -> LocationAnalysis {
    let started_at = Instant::now();

    let (geocoded, misses) = resolve_counting_misses(members, config.geocode_miss);
    if misses > 0 {
        warn!(
            "event=geocode_miss module=location status=degraded misses={} policy={:?}",
            misses, config.geocode_miss
        );
    }

    let centroid = weighted_centroid(&geocoded);
    let mut candidates: Vec<LocationCandidate> = CANDIDATE_CITIES
        .iter()
        .map(|candidate| score_candidate(&geocoded, candidate))
        .collect();
    // Vec::sort_by is stable, so equal scores keep catalog order.
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(config.top_n);

    let total_attendees = members
        .iter()
        .map(|member| u64::from(member.attendee_count))
        .sum();

    debug!(
        "event=location_analysis module=location status=ok members={} candidates={} duration_us={}",
        members.len(),
        candidates.len(),
        started_at.elapsed().as_micros()
    );

    LocationAnalysis {
        centroid,
        candidates,
        total_members: members.len(),
        total_attendees,
    }
}
