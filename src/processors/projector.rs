use geo_types::Coord;

use crate::data_types::{fix::LiveFix, stop::Stop};
use crate::util::geo::GeoUtils;

// Where one fix landed on the route: the snapped path sample plus the stop
// pair bounding it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub nearest_path_index: usize,
    pub previous_stop_index: usize,
    pub next_stop_index: usize,
}

pub struct Projector;

impl Projector {
    pub fn project(fix: &LiveFix, path: &[Coord], stops: &[Stop]) -> Projection {
        let fix_coord = fix.coord();

        // Snap to route: full linear scan, no early exit. Strict < keeps the
        // lowest index when two samples are equally close.
        let mut nearest_path_index = 0;
        let mut min_dist_to_route = f64::MAX;

        for (index, sample) in path.iter().enumerate() {
            let dist = GeoUtils::distance_km(fix_coord, *sample);

            if dist < min_dist_to_route {
                min_dist_to_route = dist;
                nearest_path_index = index;
            }
        }

        // The closest scanned stop becomes "previous", regardless of travel
        // direction. The terminal stop is never scanned, so on multi-stop
        // routes it only ever shows up as "next".
        let mut previous_stop_index = 0;
        let mut min_dist = f64::MAX;

        for index in 0..stops.len().saturating_sub(1) {
            let dist = GeoUtils::distance_km(fix_coord, stops[index].coord());

            if dist < min_dist {
                min_dist = dist;
                previous_stop_index = index;
            }
        }

        let next_stop_index = (previous_stop_index + 1).min(stops.len().saturating_sub(1));

        Projection {
            nearest_path_index,
            previous_stop_index,
            next_stop_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named_stop(name: &str, lat: f64, lng: f64) -> Stop {
        Stop {
            name: name.to_string(),
            lat,
            lng,
        }
    }

    fn three_stops() -> Vec<Stop> {
        vec![
            named_stop("A", 0.0, 0.0),
            named_stop("B", 0.0, 1.0),
            named_stop("C", 0.0, 2.0),
        ]
    }

    fn straight_path(stops: &[Stop]) -> Vec<Coord> {
        stops.iter().map(|stop| stop.coord()).collect()
    }

    fn fix_at(lat: f64, lng: f64) -> LiveFix {
        LiveFix {
            latitude: lat,
            longitude: lng,
            speed: None,
        }
    }

    #[test]
    fn snaps_to_the_closest_path_sample() {
        let stops = three_stops();
        let path = straight_path(&stops);

        let projection = Projector::project(&fix_at(0.0, 0.9), &path, &stops);

        assert_eq!(projection.nearest_path_index, 1);
    }

    #[test]
    fn closest_stop_becomes_previous() {
        let stops = three_stops();
        let path = straight_path(&stops);

        let projection = Projector::project(&fix_at(0.0, 0.9), &path, &stops);

        assert_eq!(projection.previous_stop_index, 1);
        assert_eq!(projection.next_stop_index, 2);
    }

    #[test]
    fn next_is_previous_plus_one_clamped_everywhere() {
        let stops = three_stops();
        let path = straight_path(&stops);

        for step in 0..40 {
            let fix = fix_at(0.02, -0.5 + step as f64 * 0.1);
            let projection = Projector::project(&fix, &path, &stops);

            assert_eq!(
                projection.next_stop_index,
                (projection.previous_stop_index + 1).min(stops.len() - 1)
            );
            assert!(projection.previous_stop_index <= projection.next_stop_index);
            assert!(projection.next_stop_index <= stops.len() - 1);
        }
    }

    #[test]
    fn equidistant_samples_snap_to_the_lowest_index() {
        let stops = three_stops();
        // Fix at (0, 1) is exactly between the two path samples
        let path = vec![Coord::from((0.0, 0.0)), Coord::from((0.0, 2.0))];

        let projection = Projector::project(&fix_at(0.0, 1.0), &path, &stops);

        assert_eq!(projection.nearest_path_index, 0);
    }

    #[test]
    fn single_stop_route_degenerates_to_the_terminus() {
        let stops = vec![named_stop("Only", 0.0, 0.0)];
        let path = straight_path(&stops);

        let projection = Projector::project(&fix_at(0.0, 0.0), &path, &stops);

        assert_eq!(projection.previous_stop_index, 0);
        assert_eq!(projection.next_stop_index, 0);
        assert_eq!(projection.previous_stop_index, stops.len() - 1);
    }

    #[test]
    fn empty_path_yields_the_origin_index() {
        let stops = three_stops();

        let projection = Projector::project(&fix_at(0.0, 0.9), &[], &stops);

        assert_eq!(projection.nearest_path_index, 0);
    }

    #[test]
    fn projection_is_deterministic() {
        let stops = three_stops();
        let path = straight_path(&stops);
        let fix = fix_at(0.01, 1.3);

        assert_eq!(
            Projector::project(&fix, &path, &stops),
            Projector::project(&fix, &path, &stops)
        );
    }
}
