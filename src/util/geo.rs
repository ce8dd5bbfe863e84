use geo_types::Coord;
use std::f64::consts::PI;

// Coordinate convention used everywhere in this crate: Coord.x is latitude,
// Coord.y is longitude, both in degrees.
pub struct GeoUtils;

impl GeoUtils {
    const EARTH_RADIUS_KM: f64 = 6371.0;

    // Haversine great-circle distance in kilometers. Inputs are taken as-is:
    // out-of-range degrees give a mathematically defined but meaningless result.
    pub fn distance_km(p1: Coord, p2: Coord) -> f64 {
        let d_lat = GeoUtils::deg2rad(p2.x - p1.x);
        let d_lng = GeoUtils::deg2rad(p2.y - p1.y);

        let a = (d_lat / 2.0).sin() * (d_lat / 2.0).sin()
            + GeoUtils::deg2rad(p1.x).cos()
                * GeoUtils::deg2rad(p2.x).cos()
                * (d_lng / 2.0).sin()
                * (d_lng / 2.0).sin();

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        GeoUtils::EARTH_RADIUS_KM * c
    }

    pub fn deg2rad(deg: f64) -> f64 {
        deg * PI / 180.0
    }

    pub fn rad2deg(rad: f64) -> f64 {
        rad * 180.0 / PI
    }

    pub fn bounding_box(path: &[Coord]) -> (Coord, Coord) {
        let mut min_lat = f64::MAX;
        let mut min_lng = f64::MAX;
        let mut max_lat = f64::MIN;
        let mut max_lng = f64::MIN;

        path.iter().for_each(|coord| {
            min_lat = coord.x.min(min_lat);
            min_lng = coord.y.min(min_lng);

            max_lat = coord.x.max(max_lat);
            max_lng = coord.y.max(max_lng);
        });

        (
            Coord::from((min_lat, min_lng)),
            Coord::from((max_lat, max_lng)),
        )
    }

    pub fn center_of_bbox(left_bottom: Coord, right_top: Coord) -> Coord {
        Coord::from((
            (left_bottom.x + right_top.x) / 2.,
            (left_bottom.y + right_top.y) / 2.,
        ))
    }
}
