//! Location analysis cache.
//!
//! # Responsibility
//! - Persist the latest `LocationAnalysis` per group as a JSON payload.
//!
//! # Invariants
//! - At most one cached analysis per group; saving replaces the previous one.
//! - A payload that no longer decodes is reported as `InvalidData`.

use super::{RepoError, RepoResult};
use crate::model::group::GroupId;
use crate::model::location::LocationAnalysis;
use rusqlite::{params, Connection, OptionalExtension};

/// Cached analysis with the time it was stored.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedAnalysis {
    pub analysis: LocationAnalysis,
    /// Unix epoch milliseconds.
    pub computed_at: i64,
}

/// Repository interface for cached analysis results.
pub trait AnalysisRepository {
    fn save_analysis(&self, group_id: GroupId, analysis: &LocationAnalysis) -> RepoResult<()>;
    fn load_analysis(&self, group_id: GroupId) -> RepoResult<Option<CachedAnalysis>>;
    fn delete_analysis(&self, group_id: GroupId) -> RepoResult<()>;
}

/// SQLite-backed analysis cache.
pub struct SqliteAnalysisRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAnalysisRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AnalysisRepository for SqliteAnalysisRepository<'_> {
    fn save_analysis(&self, group_id: GroupId, analysis: &LocationAnalysis) -> RepoResult<()> {
        let payload = serde_json::to_string(analysis).map_err(|err| {
            RepoError::InvalidData(format!("analysis for group {group_id} not encodable: {err}"))
        })?;

        let result = self.conn.execute(
            "INSERT INTO location_analyses (group_id, payload)
             VALUES (?1, ?2)
             ON CONFLICT(group_id) DO UPDATE SET
                payload = excluded.payload,
                computed_at = (strftime('%s', 'now') * 1000);",
            params![group_id.to_string(), payload],
        );

        match result {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(RepoError::NotFound(group_id))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn load_analysis(&self, group_id: GroupId) -> RepoResult<Option<CachedAnalysis>> {
        let row = self
            .conn
            .query_row(
                "SELECT payload, computed_at
                 FROM location_analyses
                 WHERE group_id = ?1;",
                [group_id.to_string()],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)),
            )
            .optional()?;

        let Some((payload, computed_at)) = row else {
            return Ok(None);
        };

        let analysis = serde_json::from_str(&payload).map_err(|err| {
            RepoError::InvalidData(format!(
                "invalid analysis payload for group {group_id} in location_analyses.payload: {err}"
            ))
        })?;

        Ok(Some(CachedAnalysis {
            analysis,
            computed_at,
        }))
    }

    fn delete_analysis(&self, group_id: GroupId) -> RepoResult<()> {
        self.conn.execute(
            "DELETE FROM location_analyses WHERE group_id = ?1;",
            [group_id.to_string()],
        )?;
        Ok(())
    }
}
