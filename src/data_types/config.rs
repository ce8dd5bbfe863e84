use serde_derive::Deserialize;

use crate::data_types::stop::Stop;

#[derive(Deserialize, Debug, Clone)]
pub struct FeedSettings {
    // "simulator" or "live"
    pub mode: String,
    pub interval_secs: u64,
    pub database_url: String,
    pub channel: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TrackerSettings {
    pub default_speed_kmh: f64,
    pub routing_base_url: String,
    pub feed: FeedSettings,
    pub stops: Vec<Stop>,
}

impl TrackerSettings {
    pub fn read_from_file(file_name: &str) -> TrackerSettings {
        let settings_content = std::fs::read_to_string(
            std::env::current_dir()
                .unwrap()
                .to_str()
                .unwrap()
                .to_owned()
                + "/"
                + file_name,
        )
        .unwrap_or_else(|_| panic!("Unable to open {}", file_name));

        toml::from_str(&settings_content).unwrap()
    }
}
