use serde_derive::Deserialize;

// Subset of the OSRM route response this crate cares about. Anything else in
// the payload is ignored.

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RouteGeometry {
    // GeoJSON LineString: pairs arrive as (longitude, latitude)
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ProviderRoute {
    pub geometry: RouteGeometry,

    #[serde(default)]
    pub distance: f64,

    #[serde(default)]
    pub duration: f64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RouteResponse {
    pub code: String,

    #[serde(default)]
    pub routes: Vec<ProviderRoute>,
}
