//! Demo reunion group for first launch.

use crate::model::group::{FamilyGroup, GroupId};
use crate::model::member::{FamilyMember, TravelMode};
use crate::repo::group_repo::{count_groups, GroupRepository, SqliteGroupRepository};
use crate::repo::RepoResult;
use log::info;
use rusqlite::Connection;
use uuid::Uuid;

/// Stable ID of the seeded sample group.
pub const SAMPLE_GROUP_ID: GroupId = Uuid::from_u128(0x6b1f_3c2a_9d4e_4f07_8a51_2e6c_0b9d_7a13);

struct SampleMember {
    first_name: &'static str,
    last_name: &'static str,
    email: &'static str,
    phone: &'static str,
    city: &'static str,
    state: &'static str,
    postal_code: &'static str,
    attendee_count: u32,
    travel_mode: TravelMode,
    relationship_role: &'static str,
    access_needs: &'static str,
}

const SAMPLE_MEMBERS: &[SampleMember] = &[
    SampleMember {
        first_name: "Auntie Sarah",
        last_name: "Johnson",
        email: "sarah.johnson@email.com",
        phone: "(404) 555-0123",
        city: "Atlanta",
        state: "GA",
        postal_code: "30303",
        attendee_count: 4,
        travel_mode: TravelMode::Either,
        relationship_role: "Aunt/Uncle",
        access_needs: "",
    },
    SampleMember {
        first_name: "Uncle Marcus",
        last_name: "Johnson",
        email: "marcus.j@email.com",
        phone: "(313) 555-0456",
        city: "Detroit",
        state: "MI",
        postal_code: "48201",
        attendee_count: 3,
        travel_mode: TravelMode::Drive,
        relationship_role: "Aunt/Uncle",
        access_needs: "Wheelchair accessible venue needed",
    },
    SampleMember {
        first_name: "Cousin Keisha",
        last_name: "Williams",
        email: "keisha.w@email.com",
        phone: "(773) 555-0789",
        city: "Chicago",
        state: "IL",
        postal_code: "60609",
        attendee_count: 5,
        travel_mode: TravelMode::Either,
        relationship_role: "Cousin",
        access_needs: "",
    },
    SampleMember {
        first_name: "Grandma Betty",
        last_name: "Johnson",
        email: "",
        phone: "(202) 555-0321",
        city: "Washington",
        state: "DC",
        postal_code: "20001",
        attendee_count: 2,
        travel_mode: TravelMode::Fly,
        relationship_role: "Grandparent",
        access_needs: "Senior-friendly accommodations",
    },
    SampleMember {
        first_name: "Big Mike",
        last_name: "Johnson",
        email: "mike.houston@email.com",
        phone: "(713) 555-0654",
        city: "Houston",
        state: "TX",
        postal_code: "77001",
        attendee_count: 6,
        travel_mode: TravelMode::Drive,
        relationship_role: "Cousin",
        access_needs: "",
    },
    SampleMember {
        first_name: "Sister Janet",
        last_name: "Thompson",
        email: "janet.t@email.com",
        phone: "(704) 555-0987",
        city: "Charlotte",
        state: "NC",
        postal_code: "28202",
        attendee_count: 2,
        travel_mode: TravelMode::Either,
        relationship_role: "Sibling",
        access_needs: "",
    },
];

/// Seeds the sample reunion group when storage holds no groups.
///
/// Returns `true` when the sample was written.
pub fn seed_sample_data(conn: &Connection) -> RepoResult<bool> {
    if count_groups(conn)? > 0 {
        return Ok(false);
    }

    let tx = conn.unchecked_transaction()?;
    let repo = SqliteGroupRepository::new(&tx);

    let mut group = FamilyGroup::with_id(
        SAMPLE_GROUP_ID,
        "Johnson Family Reunion 2025",
        "Denise Johnson",
        "denise.organizer@email.com",
    );
    group.event_year = Some(2025);
    repo.create_group(&group)?;

    for sample in SAMPLE_MEMBERS {
        repo.add_member(group.id, &sample.to_member())?;
    }
    tx.commit()?;

    info!(
        "event=sample_seed module=sample status=ok members={}",
        SAMPLE_MEMBERS.len()
    );
    Ok(true)
}

/// Removes every group, member and cached analysis.
pub fn clear_all_data(conn: &Connection) -> RepoResult<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(
        "DELETE FROM location_analyses;
         DELETE FROM family_members;
         DELETE FROM family_groups;",
    )?;
    tx.commit()?;
    info!("event=data_clear module=sample status=ok");
    Ok(())
}

impl SampleMember {
    fn to_member(&self) -> FamilyMember {
        let mut member = FamilyMember::new(
            self.first_name,
            self.last_name,
            self.city,
            self.state,
            self.postal_code,
        )
        .with_attendees(self.attendee_count);
        member.email = optional(self.email);
        member.phone = optional(self.phone);
        member.travel_mode = self.travel_mode;
        member.relationship_role = optional(self.relationship_role);
        member.access_needs = optional(self.access_needs);
        member
    }
}

fn optional(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
