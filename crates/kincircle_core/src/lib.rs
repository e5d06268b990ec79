//! Core domain logic for the Kin Circle reunion planner.
//! This crate is the single source of truth for planner invariants.

pub mod db;
pub mod location;
pub mod logging;
pub mod model;
pub mod repo;
pub mod sample;
pub mod service;

pub use location::{
    analyze_locations, analyze_locations_with, resolve_coordinates, AnalysisConfig,
    GeocodeMissPolicy,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::group::{FamilyGroup, GroupId};
pub use model::location::{CandidateCity, Coordinate, CostBand, LocationAnalysis, LocationCandidate};
pub use model::member::{FamilyMember, MemberId, TravelMode};
pub use model::ValidationError;
pub use repo::analysis_repo::{AnalysisRepository, CachedAnalysis, SqliteAnalysisRepository};
pub use repo::group_repo::{GroupRepository, SqliteGroupRepository};
pub use repo::{RepoError, RepoResult};
pub use service::analysis_service::{AnalysisService, AnalysisServiceError};
pub use service::group_service::{
    CreateGroupRequest, GroupService, GroupServiceError, MemberInput,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
