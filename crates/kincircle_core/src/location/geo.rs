//! Great-circle distance.

use crate::model::location::Coordinate;

/// Mean Earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Haversine distance between two coordinates, in miles.
pub fn haversine_miles(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push `h` past 1 for near-antipodal points.
    let h = h.min(1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_MILES * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ATLANTA: Coordinate = Coordinate::new(33.7490, -84.3880);
    const CHICAGO: Coordinate = Coordinate::new(41.8781, -87.6298);

    #[test]
    fn same_point_is_zero() {
        assert_eq!(haversine_miles(ATLANTA, ATLANTA), 0.0);
    }

    #[test]
    fn atlanta_to_chicago_is_about_588_miles() {
        let miles = haversine_miles(ATLANTA, CHICAGO);
        assert!((miles - 588.0).abs() < 5.0, "got {miles}");
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(
            lat1 in -90.0..90.0f64, lng1 in -180.0..180.0f64,
            lat2 in -90.0..90.0f64, lng2 in -180.0..180.0f64
        ) {
            let a = Coordinate::new(lat1, lng1);
            let b = Coordinate::new(lat2, lng2);
            let forward = haversine_miles(a, b);
            let backward = haversine_miles(b, a);
            prop_assert!((forward - backward).abs() < 1e-6);
            prop_assert!(forward >= 0.0);
        }

        #[test]
        fn distance_to_self_is_zero(lat in -90.0..90.0f64, lng in -180.0..180.0f64) {
            let point = Coordinate::new(lat, lng);
            prop_assert!(haversine_miles(point, point).abs() < 1e-9);
        }
    }
}
