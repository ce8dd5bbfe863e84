use chrono::Utc;

use data_types::config::TrackerSettings;
use data_types::fix::RawFix;
use data_types::progress::DisplayState;
use data_types::stop::Stop;
use processors::TrackerPipeline;
use routing::{api::RoutingApi, RouteModel};
use util::facilities::DependenciesBuilder;

pub mod data_types;
pub mod feed;
pub mod processors;
pub mod routing;
pub mod util;

// Owns the whole tracker state. Two-phase lifecycle: initialize() fetches the
// route once, then on_fix() is called for every inbound record. No globals;
// the embedding binary owns the App.
pub struct App {
    settings: TrackerSettings,
    routing_api: RoutingApi,
    route: Option<RouteModel>,
    last_state: Option<DisplayState>,
    last_update_ts: Option<i64>,
}

impl App {
    const CC: &str = "App";

    pub fn with_settings(settings: TrackerSettings) -> Self {
        Self {
            routing_api: RoutingApi::new(&settings.routing_base_url),
            settings,
            route: None,
            last_state: None,
            last_update_ts: None,
        }
    }

    pub fn from_settings_file(file_name: &str) -> Self {
        App::with_settings(TrackerSettings::read_from_file(file_name))
    }

    // One-shot route initialization. Provider failures are absorbed into the
    // straight-line fallback, so this never fails.
    pub async fn initialize(&mut self) {
        let route = RouteModel::load(
            DependenciesBuilder::new()
                .with_routing_api(&self.routing_api)
                .build(),
            &self.settings.stops,
        );

        logln!(
            "Route ready: {} path samples (road-following: {})",
            route.path().len(),
            route.is_road_following()
        );

        self.route = Some(route);
    }

    // Applies one inbound fix. Malformed records, fixes arriving before
    // initialization and routes without stops all leave the previous state
    // untouched and return None.
    pub fn on_fix(&mut self, raw_fix: &RawFix) -> Option<&DisplayState> {
        let fix = raw_fix.validate()?;
        let route = self.route.as_ref()?;

        if self.settings.stops.len() == 0 {
            return None;
        }

        let state = TrackerPipeline::new(
            DependenciesBuilder::new().with_settings(&self.settings).build(),
            route,
        )
        .process(&fix);

        self.last_state = Some(state);
        self.last_update_ts = Some(Utc::now().timestamp());

        self.last_state.as_ref()
    }

    pub fn settings(&self) -> &TrackerSettings {
        &self.settings
    }

    pub fn stops(&self) -> &[Stop] {
        &self.settings.stops
    }

    pub fn route(&self) -> Option<&RouteModel> {
        self.route.as_ref()
    }

    pub fn last_state(&self) -> Option<&DisplayState> {
        self.last_state.as_ref()
    }

    pub fn last_update_ts(&self) -> Option<i64> {
        self.last_update_ts
    }
}
