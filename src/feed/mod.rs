use tokio::sync::mpsc;

use crate::data_types::config::FeedSettings;
use crate::data_types::fix::RawFix;
use crate::routing::RouteModel;

pub mod live;
pub mod simulator;

const FEED_QUEUE_DEPTH: usize = 32;

pub type FixSender = mpsc::Sender<RawFix>;
pub type FixReceiver = mpsc::Receiver<RawFix>;

// Fixes always travel through this channel, whatever the source; the consumer
// side never knows whether it is fed by the simulator or a live feed.
pub fn channel() -> (FixSender, FixReceiver) {
    mpsc::channel(FEED_QUEUE_DEPTH)
}

// Spawns the configured source and hands back the receiving end.
pub fn subscribe(settings: &FeedSettings, route: &RouteModel) -> FixReceiver {
    let (sender, receiver) = channel();

    if settings.mode == "live" {
        live::RealtimeFeed::new(settings).start(sender);
    } else {
        simulator::MovementSimulator::new(route.path(), settings.interval_secs).start(sender);
    }

    receiver
}
