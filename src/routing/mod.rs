use geo_types::Coord;

use crate::data_types::osrm::route::RouteResponse;
use crate::data_types::stop::Stop;
use crate::logln;
use crate::util::facilities::{Facilities, Required};
use crate::util::time::Benchmark;

pub mod api;

// The path the vehicle follows between the first and last stop. Built once at
// startup and read-only afterwards; never empty as long as there are stops.
pub struct RouteModel {
    path: Vec<Coord>,
    road_following: bool,
}

impl RouteModel {
    const CC: &str = "RouteModel";

    // One-shot initialization. Every provider failure is absorbed into the
    // straight-line fallback; callers never see an error.
    pub fn load(dependencies: &Facilities, stops: &[Stop]) -> RouteModel {
        dependencies.check(vec![Required::RoutingApi]);

        let response = {
            let _fetch_time = Benchmark::start("Route fetch");
            dependencies.routing_api().get_driving_route(stops)
        };

        RouteModel::from_provider_coordinates(RouteModel::usable_coordinates(response), stops)
    }

    // Pure assembly step, split out so the fallback is testable offline.
    // Provider pairs arrive (lng, lat) and get swapped to (lat, lng) here.
    pub fn from_provider_coordinates(
        provider_coordinates: Option<Vec<[f64; 2]>>,
        stops: &[Stop],
    ) -> RouteModel {
        if let Some(coordinates) = provider_coordinates {
            if coordinates.len() > 0 {
                return RouteModel {
                    path: coordinates
                        .iter()
                        .map(|pair| Coord::from((pair[1], pair[0])))
                        .collect(),
                    road_following: true,
                };
            }
        }

        logln!(
            "No usable provider route, falling back to straight lines between {} stops",
            stops.len()
        );

        RouteModel {
            path: stops.iter().map(|stop| stop.coord()).collect(),
            road_following: false,
        }
    }

    fn usable_coordinates(response: Option<RouteResponse>) -> Option<Vec<[f64; 2]>> {
        let route_response = response?;

        if route_response.code != "Ok" {
            logln!("Provider returned code {:?}", route_response.code);
            return None;
        }

        route_response
            .routes
            .into_iter()
            .next()
            .map(|route| route.geometry.coordinates)
    }

    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    pub fn is_road_following(&self) -> bool {
        self.road_following
    }
}
