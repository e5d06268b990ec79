use kincircle_core::db::{open_db, open_db_in_memory};
use kincircle_core::sample::{clear_all_data, seed_sample_data, SAMPLE_GROUP_ID};
use kincircle_core::{
    analyze_locations, AnalysisRepository, AnalysisService, AnalysisServiceError, FamilyGroup,
    FamilyMember, GroupRepository, RepoError, SqliteAnalysisRepository, SqliteGroupRepository,
};
use uuid::Uuid;

#[test]
fn save_and_load_analysis_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let groups = SqliteGroupRepository::new(&conn);
    let cache = SqliteAnalysisRepository::new(&conn);
    let group = FamilyGroup::new("Cache", "Denise", "denise@example.com");
    groups.create_group(&group).unwrap();

    assert!(cache.load_analysis(group.id).unwrap().is_none());

    let members = [
        FamilyMember::new("Sarah", "Johnson", "Atlanta", "GA", "30303").with_attendees(4),
        FamilyMember::new("Mike", "Johnson", "Houston", "TX", "77001").with_attendees(6),
    ];
    let analysis = analyze_locations(&members);
    cache.save_analysis(group.id, &analysis).unwrap();

    let cached = cache.load_analysis(group.id).unwrap().unwrap();
    assert_eq!(cached.analysis, analysis);
    assert!(cached.computed_at > 0);
}

#[test]
fn newer_analysis_replaces_cached_one() {
    let conn = open_db_in_memory().unwrap();
    let groups = SqliteGroupRepository::new(&conn);
    let cache = SqliteAnalysisRepository::new(&conn);
    let group = FamilyGroup::new("Replace", "Denise", "denise@example.com");
    groups.create_group(&group).unwrap();

    let first = analyze_locations(&[]);
    let second = analyze_locations(&[FamilyMember::new("A", "B", "Detroit", "MI", "48201")]);
    cache.save_analysis(group.id, &first).unwrap();
    cache.save_analysis(group.id, &second).unwrap();

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM location_analyses;", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(rows, 1);
    assert_eq!(cache.load_analysis(group.id).unwrap().unwrap().analysis, second);
}

#[test]
fn saving_for_unknown_group_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let cache = SqliteAnalysisRepository::new(&conn);

    let missing = Uuid::new_v4();
    let err = cache
        .save_analysis(missing, &analyze_locations(&[]))
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == missing));
}

#[test]
fn corrupted_payload_is_reported_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    let groups = SqliteGroupRepository::new(&conn);
    let cache = SqliteAnalysisRepository::new(&conn);
    let group = FamilyGroup::new("Corrupt", "Denise", "denise@example.com");
    groups.create_group(&group).unwrap();

    conn.execute(
        "INSERT INTO location_analyses (group_id, payload) VALUES (?1, '{not json');",
        [group.id.to_string()],
    )
    .unwrap();

    let err = cache.load_analysis(group.id).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn service_requires_two_members() {
    let conn = open_db_in_memory().unwrap();
    let groups = SqliteGroupRepository::new(&conn);
    let group = FamilyGroup::new("Small", "Denise", "denise@example.com");
    groups.create_group(&group).unwrap();
    groups
        .add_member(
            group.id,
            &FamilyMember::new("Sarah", "Johnson", "Atlanta", "GA", "30303"),
        )
        .unwrap();

    let service = AnalysisService::new(groups, SqliteAnalysisRepository::new(&conn));
    let err = service.analyze_group(group.id).unwrap_err();
    assert!(matches!(
        err,
        AnalysisServiceError::NotEnoughMembers {
            required: 2,
            actual: 1
        }
    ));
    assert!(service.cached_analysis(group.id).unwrap().is_none());
}

#[test]
fn service_reports_unknown_group() {
    let conn = open_db_in_memory().unwrap();
    let service = AnalysisService::new(
        SqliteGroupRepository::new(&conn),
        SqliteAnalysisRepository::new(&conn),
    );

    let missing = Uuid::new_v4();
    let err = service.analyze_group(missing).unwrap_err();
    assert!(matches!(err, AnalysisServiceError::GroupNotFound(id) if id == missing));
}

#[test]
fn sample_group_analysis_is_cached() {
    let conn = open_db_in_memory().unwrap();
    assert!(seed_sample_data(&conn).unwrap());

    let service = AnalysisService::new(
        SqliteGroupRepository::new(&conn),
        SqliteAnalysisRepository::new(&conn),
    );
    let analysis = service.analyze_group(SAMPLE_GROUP_ID).unwrap();
    assert_eq!(analysis.total_members, 6);
    assert_eq!(analysis.total_attendees, 22);
    assert_eq!(analysis.candidates.len(), 5);

    let cached = service.cached_analysis(SAMPLE_GROUP_ID).unwrap().unwrap();
    assert_eq!(cached.analysis, analysis);
}

#[test]
fn seeding_is_skipped_when_groups_exist() {
    let conn = open_db_in_memory().unwrap();
    assert!(seed_sample_data(&conn).unwrap());
    assert!(!seed_sample_data(&conn).unwrap());

    let groups = SqliteGroupRepository::new(&conn).list_groups().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, "Johnson Family Reunion 2025");
    assert_eq!(groups[0].event_year, Some(2025));
}

#[test]
fn clear_all_data_removes_everything_and_allows_reseed() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_db(dir.path().join("kincircle.db")).unwrap();
    seed_sample_data(&conn).unwrap();
    AnalysisService::new(
        SqliteGroupRepository::new(&conn),
        SqliteAnalysisRepository::new(&conn),
    )
    .analyze_group(SAMPLE_GROUP_ID)
    .unwrap();

    clear_all_data(&conn).unwrap();

    for table in ["family_groups", "family_members", "location_analyses"] {
        let count: i64 = conn
            .query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(count, 0, "table {table} should be empty");
    }
    assert!(seed_sample_data(&conn).unwrap());
}

#[test]
fn deleting_group_drops_cached_analysis() {
    let conn = open_db_in_memory().unwrap();
    seed_sample_data(&conn).unwrap();
    let service = AnalysisService::new(
        SqliteGroupRepository::new(&conn),
        SqliteAnalysisRepository::new(&conn),
    );
    service.analyze_group(SAMPLE_GROUP_ID).unwrap();

    SqliteGroupRepository::new(&conn)
        .delete_group(SAMPLE_GROUP_ID)
        .unwrap();
    let cache = SqliteAnalysisRepository::new(&conn);
    assert!(cache.load_analysis(SAMPLE_GROUP_ID).unwrap().is_none());
}
