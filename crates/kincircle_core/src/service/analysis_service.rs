//! Location analysis use-case service.
//!
//! # Responsibility
//! - Snapshot a group's members, run the scoring core and cache the result.
//!
//! # Invariants
//! - Analysis needs at least `MIN_MEMBERS_FOR_ANALYSIS` members; the scoring
//!   core itself accepts any member count.
//! - A fresh analysis always replaces the cached one for the group.

use crate::location::{analyze_locations_with, AnalysisConfig};
use crate::model::group::GroupId;
use crate::model::location::LocationAnalysis;
use crate::repo::analysis_repo::{AnalysisRepository, CachedAnalysis};
use crate::repo::group_repo::GroupRepository;
use crate::repo::RepoError;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fewest members a group needs before location suggestions make sense.
pub const MIN_MEMBERS_FOR_ANALYSIS: usize = 2;

/// Service error for analysis use cases.
#[derive(Debug)]
pub enum AnalysisServiceError {
    GroupNotFound(GroupId),
    NotEnoughMembers { required: usize, actual: usize },
    Repo(RepoError),
}

impl Display for AnalysisServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GroupNotFound(id) => write!(f, "family group not found: {id}"),
            Self::NotEnoughMembers { required, actual } => write!(
                f,
                "location analysis needs at least {required} members, group has {actual}"
            ),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AnalysisServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for AnalysisServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::GroupNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Analysis service over a member source and an analysis cache.
pub struct AnalysisService<G: GroupRepository, A: AnalysisRepository> {
    groups: G,
    cache: A,
    config: AnalysisConfig,
}

impl<G: GroupRepository, A: AnalysisRepository> AnalysisService<G, A> {
    /// Creates a service using the default analysis configuration.
    pub fn new(groups: G, cache: A) -> Self {
        Self::with_config(groups, cache, AnalysisConfig::default())
    }

    pub fn with_config(groups: G, cache: A, config: AnalysisConfig) -> Self {
        Self {
            groups,
            cache,
            config,
        }
    }

    /// Runs the analysis for a group and replaces its cached result.
    pub fn analyze_group(
        &self,
        group_id: GroupId,
    ) -> Result<LocationAnalysis, AnalysisServiceError> {
        let members = self.groups.list_members(group_id)?;
        if members.len() < MIN_MEMBERS_FOR_ANALYSIS {
            return Err(AnalysisServiceError::NotEnoughMembers {
                required: MIN_MEMBERS_FOR_ANALYSIS,
                actual: members.len(),
            });
        }

        let analysis = analyze_locations_with(&members, &self.config);
        self.cache.save_analysis(group_id, &analysis)?;
        info!(
            "event=analysis_run module=service status=ok group_id={group_id} members={} attendees={}",
            analysis.total_members, analysis.total_attendees
        );

        Ok(analysis)
    }

    /// Returns the last stored analysis for a group, if any.
    pub fn cached_analysis(
        &self,
        group_id: GroupId,
    ) -> Result<Option<CachedAnalysis>, AnalysisServiceError> {
        Ok(self.cache.load_analysis(group_id)?)
    }
}
