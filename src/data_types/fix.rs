use geo_types::Coord;
use serde_derive::Deserialize;

// Wire shape of one feed record. Fields beyond these three are ignored.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RawFix {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub speed: Option<f64>,
}

impl RawFix {
    // A record missing either coordinate is unusable and gets dropped whole;
    // there is no partial update.
    pub fn validate(&self) -> Option<LiveFix> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(LiveFix {
                latitude,
                longitude,
                speed: self.speed,
            }),
            _ => None,
        }
    }
}

// One validated observation of the vehicle. Superseded entirely by the next
// fix; nothing is accumulated here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveFix {
    pub latitude: f64,
    pub longitude: f64,
    pub speed: Option<f64>,
}

impl LiveFix {
    pub fn coord(&self) -> Coord {
        Coord::from((self.latitude, self.longitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_record_validates() {
        let raw = RawFix {
            latitude: Some(24.9),
            longitude: Some(67.1),
            speed: Some(22.5),
        };

        let fix = raw.validate().unwrap();
        assert_eq!(fix.latitude, 24.9);
        assert_eq!(fix.longitude, 67.1);
        assert_eq!(fix.speed, Some(22.5));
    }

    #[test]
    fn missing_coordinate_is_rejected() {
        let no_longitude = RawFix {
            latitude: Some(24.9),
            longitude: None,
            speed: Some(22.5),
        };
        assert!(no_longitude.validate().is_none());

        let no_latitude = RawFix {
            latitude: None,
            longitude: Some(67.1),
            speed: None,
        };
        assert!(no_latitude.validate().is_none());
    }

    #[test]
    fn unknown_fields_are_ignored_on_the_wire() {
        let raw: RawFix =
            serde_json::from_str(r#"{"latitude": 24.9, "longitude": 67.1, "heading": 180}"#)
                .unwrap();

        assert!(raw.validate().is_some());
        assert_eq!(raw.speed, None);
    }
}
