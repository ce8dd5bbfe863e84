use geo_types::Coord;
use serde_derive::{Deserialize, Serialize};

// One named stop. The stop list is ordered from origin to terminus and never
// changes after startup.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Stop {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl Stop {
    pub fn coord(&self) -> Coord {
        Coord::from((self.lat, self.lng))
    }
}
