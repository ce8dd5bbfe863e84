use geo_types::Coord;

use crate::data_types::common::LatLng;
use crate::data_types::fix::LiveFix;
use crate::data_types::progress::{DisplayState, ProgressState, StopProgress};
use crate::data_types::stop::Stop;
use crate::processors::projector::Projection;
use crate::util::geo::GeoUtils;

pub struct ProgressDeriver;

impl ProgressDeriver {
    // Turns a projection plus the fix's speed into the display record. Pure:
    // same inputs, same output, no I/O.
    pub fn derive(
        fix: &LiveFix,
        projection: &Projection,
        path: &[Coord],
        stops: &[Stop],
        default_speed_kmh: f64,
    ) -> DisplayState {
        let previous_stop = &stops[projection.previous_stop_index];
        let next_stop = &stops[projection.next_stop_index];

        let distance_to_next_km = GeoUtils::distance_km(fix.coord(), next_stop.coord());

        // A fix with no speed, or a stationary one, falls back to the
        // configured default so the ETA stays meaningful.
        let speed_kmh = match fix.speed {
            Some(speed) if speed > 0.0 => speed,
            _ => default_speed_kmh,
        };

        // Never display "0 min"
        let eta_minutes = ((distance_to_next_km / speed_kmh * 60.0).round() as i64).max(1);

        // Portion of the route already covered, recomputed whole every fix so
        // a projection that jumps backwards self-corrects.
        let traveled_path: Vec<LatLng> = if path.len() > 0 {
            path[..=projection.nearest_path_index]
                .iter()
                .map(|coord| [coord.x, coord.y])
                .collect()
        } else {
            Vec::new()
        };

        let stop_indicators = (0..stops.len())
            .map(|index| {
                if index < projection.previous_stop_index {
                    StopProgress::Completed
                } else if index == projection.previous_stop_index
                    || index == projection.next_stop_index
                {
                    StopProgress::Active
                } else {
                    StopProgress::Pending
                }
            })
            .collect();

        let connectors_completed = (0..stops.len().saturating_sub(1))
            .map(|index| index < projection.previous_stop_index)
            .collect();

        DisplayState {
            previous_stop: previous_stop.name.clone(),
            previous_stop_status: "Departed".to_string(),
            next_stop: next_stop.name.clone(),
            speed_kmh: speed_kmh.round() as i64,
            eta_minutes,
            eta_label: format!("ETA: {} min", eta_minutes),
            position: [fix.latitude, fix.longitude],
            traveled_path,
            stop_indicators,
            connectors_completed,
            progress: ProgressState {
                previous_stop_index: projection.previous_stop_index,
                next_stop_index: projection.next_stop_index,
                nearest_path_index: projection.nearest_path_index,
                distance_to_next_km,
                eta_minutes,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::projector::Projector;
    use assert_approx_eq::assert_approx_eq;

    const DEFAULT_SPEED_KMH: f64 = 30.0;

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

    fn fix_at(lat: f64, lng: f64, speed: Option<f64>) -> LiveFix {
        LiveFix {
            latitude: lat,
            longitude: lng,
            speed,
        }
    }

    fn derive_at(fix: &LiveFix, stops: &[Stop], path: &[Coord]) -> DisplayState {
        let projection = Projector::project(fix, path, stops);
        ProgressDeriver::derive(fix, &projection, path, stops, DEFAULT_SPEED_KMH)
    }

    #[test]
    fn eta_matches_distance_over_speed() {
        let stops = three_stops();
        let path = straight_path(&stops);
        let fix = fix_at(0.0, 0.9, Some(30.0));

        let state = derive_at(&fix, &stops, &path);

        let expected_distance =
            GeoUtils::distance_km(Coord::from((0.0, 0.9)), Coord::from((0.0, 2.0)));
        let expected_eta = ((expected_distance / 30.0 * 60.0).round() as i64).max(1);

        assert_eq!(state.previous_stop, "B");
        assert_eq!(state.next_stop, "C");
        assert_approx_eq!(state.progress.distance_to_next_km, expected_distance, 1e-9);
        assert_eq!(state.eta_minutes, expected_eta);
        assert_eq!(state.eta_label, format!("ETA: {} min", expected_eta));
    }

    #[test]
    fn eta_is_at_least_one_minute() {
        let stops = vec![named_stop("Only", 0.0, 0.0)];
        let path = straight_path(&stops);
        // Sitting exactly on the terminus
        let fix = fix_at(0.0, 0.0, Some(40.0));

        let state = derive_at(&fix, &stops, &path);

        assert_eq!(state.progress.previous_stop_index, stops.len() - 1);
        assert_eq!(state.progress.next_stop_index, stops.len() - 1);
        assert_eq!(state.progress.distance_to_next_km, 0.0);
        assert_eq!(state.eta_minutes, 1);
    }

    #[test]
    fn absent_or_zero_speed_falls_back_to_the_default() {
        let stops = three_stops();
        let path = straight_path(&stops);

        let coasting = derive_at(&fix_at(0.0, 0.9, None), &stops, &path);
        assert_eq!(coasting.speed_kmh, DEFAULT_SPEED_KMH as i64);

        let stationary = derive_at(&fix_at(0.0, 0.9, Some(0.0)), &stops, &path);
        assert_eq!(stationary.speed_kmh, DEFAULT_SPEED_KMH as i64);

        let moving = derive_at(&fix_at(0.0, 0.9, Some(42.4)), &stops, &path);
        assert_eq!(moving.speed_kmh, 42);
    }

    #[test]
    fn traveled_path_runs_from_origin_to_the_snapped_sample() {
        let stops = three_stops();
        let path = straight_path(&stops);

        let state = derive_at(&fix_at(0.0, 0.9, None), &stops, &path);

        assert_eq!(state.traveled_path, vec![[0.0, 0.0], [0.0, 1.0]]);
    }

    #[test]
    fn empty_path_emits_an_empty_traveled_subsequence() {
        let stops = three_stops();
        let fix = fix_at(0.0, 0.9, None);

        let projection = Projector::project(&fix, &[], &stops);
        let state = ProgressDeriver::derive(&fix, &projection, &[], &stops, DEFAULT_SPEED_KMH);

        assert!(state.traveled_path.is_empty());
    }

    #[test]
    fn indicators_reflect_the_bounding_stop_pair() {
        let stops = vec![
            named_stop("A", 0.0, 0.0),
            named_stop("B", 0.0, 1.0),
            named_stop("C", 0.0, 2.0),
            named_stop("D", 0.0, 3.0),
        ];
        let path = straight_path(&stops);

        let state = derive_at(&fix_at(0.0, 1.1, None), &stops, &path);

        assert_eq!(state.progress.previous_stop_index, 1);
        assert_eq!(
            state.stop_indicators,
            vec![
                StopProgress::Completed,
                StopProgress::Active,
                StopProgress::Active,
                StopProgress::Pending,
            ]
        );
        assert_eq!(state.connectors_completed, vec![true, false, false]);
    }

    #[test]
    fn derive_is_pure() {
        let stops = three_stops();
        let path = straight_path(&stops);
        let fix = fix_at(0.0, 1.4, Some(25.0));

        assert_eq!(
            derive_at(&fix, &stops, &path),
            derive_at(&fix, &stops, &path)
        );
    }
}
