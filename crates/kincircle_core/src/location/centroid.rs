//! Attendee-weighted geographic centroid.

use crate::model::location::Coordinate;
use crate::model::member::FamilyMember;

/// Geographic center of the contiguous United States.
///
/// Returned when no member contributes weight; not meaningful for ranking.
pub const CENTROID_FALLBACK: Coordinate = Coordinate::new(39.8283, -98.5795);

/// Weighted arithmetic mean of member coordinates.
///
/// Members without a coordinate contribute nothing to numerator or
/// denominator. Zero total weight yields `CENTROID_FALLBACK`.
pub fn weighted_centroid(members: &[FamilyMember]) -> Coordinate {
    let (lat_sum, lng_sum, weight_sum) = members
        .iter()
        .filter_map(|member| {
            member
                .location
                .map(|location| (location, f64::from(member.attendee_count)))
        })
        .fold((0.0, 0.0, 0.0), |(lat, lng, total), (location, weight)| {
            (
                lat + location.lat * weight,
                lng + location.lng * weight,
                total + weight,
            )
        });

    if weight_sum <= 0.0 {
        return CENTROID_FALLBACK;
    }

    Coordinate::new(lat_sum / weight_sum, lng_sum / weight_sum)
}
