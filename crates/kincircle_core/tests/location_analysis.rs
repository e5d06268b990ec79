use kincircle_core::location::catalog::CANDIDATE_CITIES;
use kincircle_core::location::centroid::CENTROID_FALLBACK;
use kincircle_core::location::geocode::{GEOCODE_FALLBACK, GEOCODE_TABLE};
use kincircle_core::location::scoring::{
    member_distances, AVERAGE_DRIVE_MPH, MISSING_COORDINATE_PENALTY_MILES,
};
use kincircle_core::location::DEFAULT_TOP_CANDIDATES;
use kincircle_core::{
    analyze_locations, analyze_locations_with, resolve_coordinates, AnalysisConfig, FamilyMember,
    GeocodeMissPolicy,
};
use proptest::prelude::*;

fn member(postal_code: &str, attendees: u32) -> FamilyMember {
    FamilyMember::new("Test", "Member", "Somewhere", "XX", postal_code).with_attendees(attendees)
}

#[test]
fn single_atlanta_household_ranks_atlanta_first() {
    let analysis = analyze_locations(&[member("30303", 4)]);

    let best = analysis.best().unwrap();
    assert_eq!(best.city, "Atlanta");
    assert_eq!(best.score, 1.0);
    assert!(analysis
        .candidates
        .iter()
        .skip(1)
        .all(|candidate| candidate.score < best.score));
    assert_eq!(analysis.total_members, 1);
    assert_eq!(analysis.total_attendees, 4);
}

#[test]
fn equal_weights_put_centroid_at_midpoint() {
    let analysis = analyze_locations(&[member("30303", 3), member("60609", 3)]);

    assert!((analysis.centroid.lat - (33.7490 + 41.8781) / 2.0).abs() < 1e-9);
    assert!((analysis.centroid.lng - (-84.3880 + -87.6298) / 2.0).abs() < 1e-9);
}

#[test]
fn empty_member_list_uses_fallback_centroid_and_catalog_order() {
    let analysis = analyze_locations(&[]);

    assert_eq!(analysis.centroid, CENTROID_FALLBACK);
    assert_eq!(analysis.total_members, 0);
    assert_eq!(analysis.total_attendees, 0);

    let cities: Vec<&str> = analysis
        .candidates
        .iter()
        .map(|candidate| candidate.city.as_str())
        .collect();
    let catalog: Vec<&str> = CANDIDATE_CITIES
        .iter()
        .take(DEFAULT_TOP_CANDIDATES)
        .map(|candidate| candidate.city)
        .collect();
    assert_eq!(cities, catalog);
    assert!(analysis
        .candidates
        .iter()
        .all(|candidate| candidate.score == 1.0 && candidate.flight_cost_est.is_none()));
}

#[test]
fn result_length_is_bounded_by_top_five() {
    let analysis = analyze_locations(&[member("30303", 1), member("90210", 2)]);
    assert_eq!(
        analysis.candidates.len(),
        DEFAULT_TOP_CANDIDATES.min(CANDIDATE_CITIES.len())
    );
}

#[test]
fn unknown_postal_code_falls_back_without_error() {
    let resolved = resolve_coordinates(&[member("33101", 1)], GeocodeMissPolicy::default());
    assert_eq!(resolved[0].location, Some(GEOCODE_FALLBACK));
    assert_eq!(GEOCODE_FALLBACK, GEOCODE_TABLE[0].1);

    let analysis = analyze_locations(&[member("33101", 1), member("30303", 1)]);
    assert_eq!(analysis.candidates.len(), DEFAULT_TOP_CANDIDATES);
}

#[test]
fn unresolved_member_is_charged_penalty_distance() {
    let resolved = resolve_coordinates(&[member("33101", 2)], GeocodeMissPolicy::LeaveUnresolved);
    assert_eq!(resolved[0].location, None);
    for candidate in CANDIDATE_CITIES {
        assert_eq!(
            member_distances(&resolved, candidate),
            vec![MISSING_COORDINATE_PENALTY_MILES]
        );
    }

    let config = AnalysisConfig {
        geocode_miss: GeocodeMissPolicy::LeaveUnresolved,
        ..AnalysisConfig::default()
    };
    let analysis = analyze_locations_with(&[member("33101", 2)], &config);
    assert_eq!(analysis.centroid, CENTROID_FALLBACK);
    for candidate in &analysis.candidates {
        assert!(
            (candidate.median_drive_hours * AVERAGE_DRIVE_MPH - MISSING_COORDINATE_PENALTY_MILES)
                .abs()
                < 1e-9
        );
        let flight = candidate.flight_cost_est.unwrap();
        assert!((flight - 710.0).abs() < 1e-9);
        assert!(candidate.rationale.ends_with("~$710 flights"));
    }
}

#[test]
fn sample_family_spread_recommends_flights_somewhere() {
    let members = [
        member("30303", 4),
        member("48201", 3),
        member("60609", 5),
        member("20001", 2),
        member("77001", 6),
        member("28202", 2),
    ];
    let analysis = analyze_locations(&members);

    assert_eq!(analysis.total_members, 6);
    assert_eq!(analysis.total_attendees, 22);
    assert_eq!(analysis.candidates.len(), DEFAULT_TOP_CANDIDATES);
    assert!(analysis
        .candidates
        .iter()
        .all(|candidate| candidate.rationale.starts_with("Fair central location with ")));
}

fn known_member() -> impl Strategy<Value = FamilyMember> {
    (0..GEOCODE_TABLE.len(), 1u32..10)
        .prop_map(|(index, attendees)| member(GEOCODE_TABLE[index].0, attendees))
}

proptest! {
    #[test]
    fn ranking_is_descending_and_stable(members in prop::collection::vec(known_member(), 0..8)) {
        let config = AnalysisConfig {
            top_n: CANDIDATE_CITIES.len(),
            ..AnalysisConfig::default()
        };
        let analysis = analyze_locations_with(&members, &config);

        prop_assert_eq!(analysis.candidates.len(), CANDIDATE_CITIES.len());
        for pair in analysis.candidates.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                let position = |city: &str| {
                    CANDIDATE_CITIES.iter().position(|candidate| candidate.city == city)
                };
                prop_assert!(position(pair[0].city.as_str()) < position(pair[1].city.as_str()));
            }
        }
    }

    #[test]
    fn analysis_is_deterministic(members in prop::collection::vec(known_member(), 0..8)) {
        prop_assert_eq!(analyze_locations(&members), analyze_locations(&members));
    }

    #[test]
    fn flight_estimate_present_iff_median_exceeds_threshold(
        members in prop::collection::vec(known_member(), 1..8)
    ) {
        for candidate in analyze_locations(&members).candidates {
            prop_assert_eq!(
                candidate.flight_cost_est.is_some(),
                candidate.median_drive_hours * AVERAGE_DRIVE_MPH > 300.0
            );
        }
    }
}
