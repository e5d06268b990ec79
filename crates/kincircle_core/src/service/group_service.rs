//! Group and member use-case service.
//!
//! # Invariants
//! - Members are stored without coordinates; coordinates are resolved at
//!   analysis time from the postal code.
//! - Member updates use full replacement semantics.

use crate::model::group::{FamilyGroup, GroupId};
use crate::model::member::{FamilyMember, MemberId, TravelMode};
use crate::repo::group_repo::GroupRepository;
use crate::repo::{RepoError, RepoResult};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for group/member use cases.
#[derive(Debug)]
pub enum GroupServiceError {
    GroupNotFound(GroupId),
    MemberNotFound(MemberId),
    Repo(RepoError),
    /// Write succeeded but read-back did not find the record.
    InconsistentState(&'static str),
}

impl Display for GroupServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GroupNotFound(id) => write!(f, "family group not found: {id}"),
            Self::MemberNotFound(id) => write!(f, "family member not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent group state: {details}"),
        }
    }
}

impl Error for GroupServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for GroupServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::GroupNotFound(id),
            RepoError::MemberNotFound(id) => Self::MemberNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Input for creating a family group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateGroupRequest {
    pub name: String,
    pub event_year: Option<i32>,
    pub organizer_name: String,
    pub organizer_email: String,
}

/// Form-level input for adding or replacing a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberInput {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub attendee_count: u32,
    pub travel_mode: TravelMode,
    pub access_needs: Option<String>,
    pub relationship_role: Option<String>,
}

impl MemberInput {
    fn into_member(self, id: MemberId) -> FamilyMember {
        FamilyMember {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: non_blank(self.email),
            phone: non_blank(self.phone),
            city: self.city,
            state: self.state,
            postal_code: self.postal_code.trim().to_string(),
            country: self.country,
            attendee_count: self.attendee_count,
            travel_mode: self.travel_mode,
            access_needs: non_blank(self.access_needs),
            relationship_role: non_blank(self.relationship_role),
            location: None,
        }
    }
}

/// Group/member service facade over a repository implementation.
pub struct GroupService<R: GroupRepository> {
    repo: R,
}

impl<R: GroupRepository> GroupService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a group and returns the stored record.
    pub fn create_group(
        &self,
        request: CreateGroupRequest,
    ) -> Result<FamilyGroup, GroupServiceError> {
        let mut group = FamilyGroup::new(
            request.name,
            request.organizer_name,
            request.organizer_email,
        );
        group.event_year = request.event_year;
        let id = self.repo.create_group(&group)?;
        info!("event=group_create module=service status=ok group_id={id}");

        self.repo
            .get_group(id)?
            .ok_or(GroupServiceError::InconsistentState(
                "created group not found in read-back",
            ))
    }

    pub fn get_group(&self, id: GroupId) -> RepoResult<Option<FamilyGroup>> {
        self.repo.get_group(id)
    }

    pub fn list_groups(&self) -> RepoResult<Vec<FamilyGroup>> {
        self.repo.list_groups()
    }

    pub fn delete_group(&self, id: GroupId) -> Result<(), GroupServiceError> {
        self.repo.delete_group(id)?;
        info!("event=group_delete module=service status=ok group_id={id}");
        Ok(())
    }

    /// Adds a member with a generated ID.
    pub fn add_member(
        &self,
        group_id: GroupId,
        input: MemberInput,
    ) -> Result<FamilyMember, GroupServiceError> {
        let member = input.into_member(uuid::Uuid::new_v4());
        let member_id = self.repo.add_member(group_id, &member)?;
        info!(
            "event=member_add module=service status=ok group_id={group_id} member_id={member_id}"
        );

        self.repo
            .get_member(group_id, member_id)?
            .ok_or(GroupServiceError::InconsistentState(
                "added member not found in read-back",
            ))
    }

    /// Replaces every editable field of an existing member.
    pub fn update_member(
        &self,
        group_id: GroupId,
        member_id: MemberId,
        input: MemberInput,
    ) -> Result<FamilyMember, GroupServiceError> {
        let member = input.into_member(member_id);
        self.repo.update_member(group_id, &member)?;

        self.repo
            .get_member(group_id, member_id)?
            .ok_or(GroupServiceError::InconsistentState(
                "updated member not found in read-back",
            ))
    }

    pub fn remove_member(
        &self,
        group_id: GroupId,
        member_id: MemberId,
    ) -> Result<(), GroupServiceError> {
        self.repo.delete_member(group_id, member_id)?;
        info!(
            "event=member_remove module=service status=ok group_id={group_id} member_id={member_id}"
        );
        Ok(())
    }

    pub fn list_members(&self, group_id: GroupId) -> Result<Vec<FamilyMember>, GroupServiceError> {
        Ok(self.repo.list_members(group_id)?)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
