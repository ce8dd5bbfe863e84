use chrono::{DateTime, Utc};

pub mod facilities;
pub mod geo;
pub mod http;
pub mod logging;
pub mod time;

pub struct DateTimeUtils;

impl DateTimeUtils {
    pub fn timestamp_to_str(timestamp: i64) -> String {
        let datetime: DateTime<Utc> = DateTime::from_timestamp(timestamp, 0).unwrap_or_default();

        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
