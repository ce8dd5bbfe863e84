use crate::data_types::fix::LiveFix;
use crate::data_types::progress::DisplayState;
use crate::data_types::stop::Stop;
use crate::routing::RouteModel;
use crate::util::facilities::{Facilities, Required};

use self::progress::ProgressDeriver;
use self::projector::Projector;

pub mod progress;
pub mod projector;

// Runs one fix through project + derive. Holds only borrowed, read-only
// inputs; every call starts from scratch.
pub struct TrackerPipeline<'a> {
    route: &'a RouteModel,
    stops: &'a [Stop],
    default_speed_kmh: f64,
}

impl<'a> TrackerPipeline<'a> {
    const CC: &'static str = "Pipeline";

    pub fn new(dependencies: &Facilities<'a>, route: &'a RouteModel) -> Self {
        dependencies.check(vec![Required::Settings]);

        Self {
            route,
            stops: &dependencies.settings().stops,
            default_speed_kmh: dependencies.settings().default_speed_kmh,
        }
    }

    pub fn process(&self, fix: &LiveFix) -> DisplayState {
        let projection = Projector::project(fix, self.route.path(), self.stops);

        ProgressDeriver::derive(
            fix,
            &projection,
            self.route.path(),
            self.stops,
            self.default_speed_kmh,
        )
    }
}
