use geo_types::Coord;
use tokio::time::{interval, Duration};

use crate::data_types::fix::RawFix;
use crate::feed::FixSender;
use crate::logln;
use crate::util::geo::GeoUtils;

// Replays the route path as if a vehicle were driving it, one fix per tick.
// Stands in for the live feed during development and demos.
pub struct MovementSimulator {
    path: Vec<Coord>,
    interval_secs: u64,
}

impl MovementSimulator {
    const CC: &str = "Simulator";

    // How many path samples the simulated vehicle advances per tick
    const SAMPLES_PER_TICK: usize = 3;

    pub fn new(path: &[Coord], interval_secs: u64) -> Self {
        Self {
            path: path.to_vec(),
            interval_secs: interval_secs.max(1),
        }
    }

    // Spawns the tick task. Fixes flow into the channel until the vehicle
    // reaches the terminus or the receiver goes away.
    pub fn start(self, sender: FixSender) {
        tokio::spawn(async move {
            let mut ticker = interval(Duration::from_secs(self.interval_secs));
            let mut current_index = 0;

            loop {
                ticker.tick().await;

                if current_index >= self.path.len() {
                    logln!("Simulated vehicle reached the terminus");
                    break;
                }

                let position = self.path[current_index];

                let fix = RawFix {
                    latitude: Some(position.x),
                    longitude: Some(position.y),
                    speed: self.speed_at(current_index),
                };

                if sender.send(fix).await.is_err() {
                    break;
                }

                current_index += MovementSimulator::SAMPLES_PER_TICK;
            }
        });
    }

    // Speed implied by the ground covered since the previously emitted sample.
    fn speed_at(&self, index: usize) -> Option<f64> {
        if index < MovementSimulator::SAMPLES_PER_TICK {
            return None;
        }

        let covered_km = GeoUtils::distance_km(
            self.path[index - MovementSimulator::SAMPLES_PER_TICK],
            self.path[index],
        );

        Some(covered_km / self.interval_secs as f64 * 3600.0)
    }
}
