use bus_tracker::util::DateTimeUtils;
use bus_tracker::{feed, App};

// Console tracker: initialize the route once, then print a display line for
// every fix coming out of the configured feed.
#[tokio::main]
async fn main() {
    let mut app = App::from_settings_file("route.toml");
    app.initialize().await;

    let mut fixes = feed::subscribe(&app.settings().feed, app.route().unwrap());

    while let Some(raw_fix) = fixes.recv().await {
        if app.on_fix(&raw_fix).is_none() {
            continue;
        }

        let state = app.last_state().unwrap();

        println!(
            "[{}] {} -> {} | {} km/h | {} | {:.2} km to go",
            DateTimeUtils::timestamp_to_str(app.last_update_ts().unwrap()),
            state.previous_stop,
            state.next_stop,
            state.speed_kmh,
            state.eta_label,
            state.progress.distance_to_next_km
        );
    }
}
