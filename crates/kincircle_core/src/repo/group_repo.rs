//! Family group/member repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD over `family_groups` and `family_members`.
//! - Serve the member snapshot consumed by location analysis.
//!
//! # Invariants
//! - `list_members` returns members in insertion order (`sort_order ASC`).
//! - `list_groups` returns groups in insertion order (`rowid ASC`).
//! - Member writes are scoped to their group; a member id under another
//!   group is reported as not found.
//! - Deleting a group cascades to its members and cached analysis.

use super::{parse_uuid, RepoError, RepoResult};
use crate::model::group::{FamilyGroup, GroupId};
use crate::model::location::Coordinate;
use crate::model::member::{FamilyMember, MemberId, TravelMode};
use rusqlite::{params, Connection, Row};

const GROUP_SELECT_SQL: &str = "SELECT
    id,
    name,
    event_year,
    organizer_name,
    organizer_email,
    created_at
FROM family_groups";

const MEMBER_SELECT_SQL: &str = "SELECT
    id,
    first_name,
    last_name,
    email,
    phone,
    city,
    state,
    postal_code,
    country,
    attendee_count,
    travel_mode,
    access_needs,
    relationship_role,
    lat,
    lng
FROM family_members";

/// Repository interface for family groups and their members.
pub trait GroupRepository {
    fn create_group(&self, group: &FamilyGroup) -> RepoResult<GroupId>;
    fn update_group(&self, group: &FamilyGroup) -> RepoResult<()>;
    fn get_group(&self, id: GroupId) -> RepoResult<Option<FamilyGroup>>;
    /// Insertion order, oldest first.
    fn list_groups(&self) -> RepoResult<Vec<FamilyGroup>>;
    fn delete_group(&self, id: GroupId) -> RepoResult<()>;

    fn add_member(&self, group_id: GroupId, member: &FamilyMember) -> RepoResult<MemberId>;
    /// Full replacement of an existing member record.
    fn update_member(&self, group_id: GroupId, member: &FamilyMember) -> RepoResult<()>;
    fn get_member(&self, group_id: GroupId, member_id: MemberId)
        -> RepoResult<Option<FamilyMember>>;
    fn delete_member(&self, group_id: GroupId, member_id: MemberId) -> RepoResult<()>;
    fn list_members(&self, group_id: GroupId) -> RepoResult<Vec<FamilyMember>>;
}

/// SQLite-backed group repository.
pub struct SqliteGroupRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteGroupRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn group_exists(&self, id: GroupId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM family_groups WHERE id = ?1);",
            [id.to_string()],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }
}

impl GroupRepository for SqliteGroupRepository<'_> {
    fn create_group(&self, group: &FamilyGroup) -> RepoResult<GroupId> {
        group.validate()?;

        self.conn.execute(
            "INSERT INTO family_groups (
                id,
                name,
                event_year,
                organizer_name,
                organizer_email
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                group.id.to_string(),
                group.name.trim(),
                group.event_year,
                group.organizer_name.trim(),
                group.organizer_email.trim(),
            ],
        )?;

        Ok(group.id)
    }

    fn update_group(&self, group: &FamilyGroup) -> RepoResult<()> {
        group.validate()?;

        let changed = self.conn.execute(
            "UPDATE family_groups
             SET
                name = ?1,
                event_year = ?2,
                organizer_name = ?3,
                organizer_email = ?4,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?5;",
            params![
                group.name.trim(),
                group.event_year,
                group.organizer_name.trim(),
                group.organizer_email.trim(),
                group.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(group.id));
        }

        Ok(())
    }

    fn get_group(&self, id: GroupId) -> RepoResult<Option<FamilyGroup>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{GROUP_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_group_row(row)?));
        }

        Ok(None)
    }

    fn list_groups(&self) -> RepoResult<Vec<FamilyGroup>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{GROUP_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut groups = Vec::new();
        while let Some(row) = rows.next()? {
            groups.push(parse_group_row(row)?);
        }

        Ok(groups)
    }

    fn delete_group(&self, id: GroupId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM family_groups WHERE id = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn add_member(&self, group_id: GroupId, member: &FamilyMember) -> RepoResult<MemberId> {
        member.validate()?;

        if !self.group_exists(group_id)? {
            return Err(RepoError::NotFound(group_id));
        }

        self.conn.execute(
            "INSERT INTO family_members (
                id,
                group_id,
                sort_order,
                first_name,
                last_name,
                email,
                phone,
                city,
                state,
                postal_code,
                country,
                attendee_count,
                travel_mode,
                access_needs,
                relationship_role,
                lat,
                lng
            ) VALUES (
                ?1,
                ?2,
                (SELECT COALESCE(MAX(sort_order), -1) + 1 FROM family_members WHERE group_id = ?2),
                ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16
            );",
            params![
                member.id.to_string(),
                group_id.to_string(),
                member.first_name.trim(),
                member.last_name.trim(),
                member.email.as_deref(),
                member.phone.as_deref(),
                member.city.trim(),
                member.state.trim(),
                member.postal_code.trim(),
                member.country.trim(),
                member.attendee_count,
                member.travel_mode.as_str(),
                member.access_needs.as_deref(),
                member.relationship_role.as_deref(),
                member.location.map(|location| location.lat),
                member.location.map(|location| location.lng),
            ],
        )?;

        Ok(member.id)
    }

    fn update_member(&self, group_id: GroupId, member: &FamilyMember) -> RepoResult<()> {
        member.validate()?;

        let changed = self.conn.execute(
            "UPDATE family_members
             SET
                first_name = ?1,
                last_name = ?2,
                email = ?3,
                phone = ?4,
                city = ?5,
                state = ?6,
                postal_code = ?7,
                country = ?8,
                attendee_count = ?9,
                travel_mode = ?10,
                access_needs = ?11,
                relationship_role = ?12,
                lat = ?13,
                lng = ?14
             WHERE id = ?15
               AND group_id = ?16;",
            params![
                member.first_name.trim(),
                member.last_name.trim(),
                member.email.as_deref(),
                member.phone.as_deref(),
                member.city.trim(),
                member.state.trim(),
                member.postal_code.trim(),
                member.country.trim(),
                member.attendee_count,
                member.travel_mode.as_str(),
                member.access_needs.as_deref(),
                member.relationship_role.as_deref(),
                member.location.map(|location| location.lat),
                member.location.map(|location| location.lng),
                member.id.to_string(),
                group_id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::MemberNotFound(member.id));
        }

        Ok(())
    }

    fn get_member(
        &self,
        group_id: GroupId,
        member_id: MemberId,
    ) -> RepoResult<Option<FamilyMember>> {
        let mut stmt = self.conn.prepare(&format!(
            "{MEMBER_SELECT_SQL} WHERE id = ?1 AND group_id = ?2;"
        ))?;
        let mut rows = stmt.query(params![member_id.to_string(), group_id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_member_row(row)?));
        }

        Ok(None)
    }

    fn delete_member(&self, group_id: GroupId, member_id: MemberId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM family_members WHERE id = ?1 AND group_id = ?2;",
            params![member_id.to_string(), group_id.to_string()],
        )?;
        if changed == 0 {
            return Err(RepoError::MemberNotFound(member_id));
        }

        Ok(())
    }

    fn list_members(&self, group_id: GroupId) -> RepoResult<Vec<FamilyMember>> {
        if !self.group_exists(group_id)? {
            return Err(RepoError::NotFound(group_id));
        }

        let mut stmt = self.conn.prepare(&format!(
            "{MEMBER_SELECT_SQL} WHERE group_id = ?1 ORDER BY sort_order ASC, id ASC;"
        ))?;
        let mut rows = stmt.query([group_id.to_string()])?;
        let mut members = Vec::new();
        while let Some(row) = rows.next()? {
            members.push(parse_member_row(row)?);
        }

        Ok(members)
    }
}

/// Counts stored groups; used by sample seeding.
pub(crate) fn count_groups(conn: &Connection) -> RepoResult<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM family_groups;", [], |row| row.get(0))?;
    Ok(count)
}

fn parse_group_row(row: &Row<'_>) -> RepoResult<FamilyGroup> {
    let id_text: String = row.get("id")?;
    let group = FamilyGroup {
        id: parse_uuid(&id_text, "family_groups.id")?,
        name: row.get("name")?,
        event_year: row.get("event_year")?,
        organizer_name: row.get("organizer_name")?,
        organizer_email: row.get("organizer_email")?,
        created_at: row.get("created_at")?,
    };
    group.validate()?;
    Ok(group)
}

fn parse_member_row(row: &Row<'_>) -> RepoResult<FamilyMember> {
    let id_text: String = row.get("id")?;
    let id = parse_uuid(&id_text, "family_members.id")?;

    let mode_text: String = row.get("travel_mode")?;
    let travel_mode = TravelMode::parse(&mode_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid travel mode `{mode_text}` in family_members.travel_mode"
        ))
    })?;

    let location = match (
        row.get::<_, Option<f64>>("lat")?,
        row.get::<_, Option<f64>>("lng")?,
    ) {
        (Some(lat), Some(lng)) => Some(Coordinate::new(lat, lng)),
        (None, None) => None,
        _ => {
            return Err(RepoError::InvalidData(format!(
                "half-resolved coordinate for member {id} in family_members.lat/lng"
            )));
        }
    };

    let member = FamilyMember {
        id,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
        city: row.get("city")?,
        state: row.get("state")?,
        postal_code: row.get("postal_code")?,
        country: row.get("country")?,
        attendee_count: row.get("attendee_count")?,
        travel_mode,
        access_needs: row.get("access_needs")?,
        relationship_role: row.get("relationship_role")?,
        location,
    };
    member.validate()?;
    Ok(member)
}
