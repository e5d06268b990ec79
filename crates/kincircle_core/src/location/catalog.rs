//! Fixed catalog of candidate host cities.
//!
//! Order matters: ranking ties keep catalog order.

use crate::model::location::{CandidateCity, Coordinate, CostBand};

pub const CANDIDATE_CITIES: &[CandidateCity] = &[
    CandidateCity {
        city: "Atlanta",
        state: "GA",
        location: Coordinate::new(33.7490, -84.3880),
        cost_band: CostBand::Medium,
    },
    CandidateCity {
        city: "Nashville",
        state: "TN",
        location: Coordinate::new(36.1627, -86.7816),
        cost_band: CostBand::Medium,
    },
    CandidateCity {
        city: "St. Louis",
        state: "MO",
        location: Coordinate::new(38.6270, -90.1994),
        cost_band: CostBand::Low,
    },
    CandidateCity {
        city: "Charlotte",
        state: "NC",
        location: Coordinate::new(35.2271, -80.8431),
        cost_band: CostBand::Medium,
    },
    CandidateCity {
        city: "Memphis",
        state: "TN",
        location: Coordinate::new(35.1495, -90.0490),
        cost_band: CostBand::Low,
    },
    CandidateCity {
        city: "Birmingham",
        state: "AL",
        location: Coordinate::new(33.5207, -86.8025),
        cost_band: CostBand::Low,
    },
    CandidateCity {
        city: "New Orleans",
        state: "LA",
        location: Coordinate::new(29.9511, -90.0715),
        cost_band: CostBand::High,
    },
    CandidateCity {
        city: "Orlando",
        state: "FL",
        location: Coordinate::new(28.5383, -81.3792),
        cost_band: CostBand::High,
    },
];
