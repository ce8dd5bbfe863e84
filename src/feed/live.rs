use tokio::time::{interval, Duration};

use crate::data_types::config::FeedSettings;
use crate::data_types::fix::RawFix;
use crate::feed::FixSender;
use crate::logvbln;
use crate::util::http::HttpUtils;

// Polls the realtime database channel the driver app publishes to. The
// database pushes updates to web clients; polling at the same cadence is
// close enough for one vehicle.
pub struct RealtimeFeed {
    endpoint: String,
    interval_secs: u64,
}

impl RealtimeFeed {
    const CC: &str = "RealtimeFeed";

    pub fn new(settings: &FeedSettings) -> Self {
        Self {
            endpoint: format!(
                "{}/{}.json",
                settings.database_url.trim_end_matches('/'),
                settings.channel
            ),
            interval_secs: settings.interval_secs.max(1),
        }
    }

    pub fn start(self, sender: FixSender) {
        tokio::spawn(async move {
            let mut ticker = interval(Duration::from_secs(self.interval_secs));

            loop {
                ticker.tick().await;

                if let Some(fix) = self.poll_once() {
                    if sender.send(fix).await.is_err() {
                        break;
                    }
                }
            }
        });
    }

    // One GET against the channel endpoint. Unreachable endpoint or an
    // unparseable payload drops the sample; the next tick tries again.
    fn poll_once(&self) -> Option<RawFix> {
        let buffer_response = HttpUtils::get(&self.endpoint)?;

        let s = std::str::from_utf8(&buffer_response).ok()?;

        logvbln!("Feed payload: {}", s);

        serde_json::from_str(s).ok()
    }
}
