use crate::data_types::osrm::route::RouteResponse;
use crate::data_types::stop::Stop;
use crate::logln;
use crate::util::http::HttpUtils;

const OSRM_PUBLIC_BASE_URL: &str = "https://router.project-osrm.org";

pub struct RoutingApi {
    base_url: String,
}

impl RoutingApi {
    const CC: &str = "RoutingApi";

    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: if base_url.is_empty() {
                OSRM_PUBLIC_BASE_URL.to_string()
            } else {
                base_url.trim_end_matches('/').to_string()
            },
        }
    }

    // One-shot lookup of the road-following path through the stops, in stop
    // order. None covers every failure mode: transport, bad UTF-8, bad JSON.
    pub fn get_driving_route(&self, stops: &[Stop]) -> Option<RouteResponse> {
        let coordinates = stops
            .iter()
            .map(|stop| format!("{},{}", stop.lng, stop.lat))
            .collect::<Vec<String>>()
            .join(";");

        let url = format!(
            "{}/route/v1/driving/{}?overview=full&geometries=geojson",
            self.base_url, coordinates
        );

        logln!("Requesting road route through {} stops", stops.len());

        let buffer_response = HttpUtils::get(&url)?;

        let s = std::str::from_utf8(&buffer_response).ok()?;

        serde_json::from_str(s).ok()
    }
}
