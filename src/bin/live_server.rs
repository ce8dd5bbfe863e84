use std::sync::Arc;

use bus_tracker::util::geo::GeoUtils;
use bus_tracker::util::DateTimeUtils;
use bus_tracker::{feed, App};
use rocket::http::{ContentType, Status};
use rocket::tokio::sync::RwLock;
use rocket::State;

#[macro_use]
extern crate rocket;

use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{Request, Response};

pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Cross-Origin-Resource-Sharing Fairing",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, PATCH, PUT, DELETE, HEAD, OPTIONS, GET",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

type SharedApp = Arc<RwLock<App>>;

#[options("/<_..>")]
fn all_options() {
    /* Intentionally left empty */
}

#[get("/stops")]
async fn stops(app: &State<SharedApp>) -> (Status, (ContentType, String)) {
    let app = app.read().await;

    (
        Status::Ok,
        (ContentType::JSON, serde_json::to_string(app.stops()).unwrap()),
    )
}

#[get("/route")]
async fn route(app: &State<SharedApp>) -> (Status, (ContentType, String)) {
    let app = app.read().await;

    if let Some(route) = app.route() {
        let path: Vec<[f64; 2]> = route.path().iter().map(|coord| [coord.x, coord.y]).collect();

        let (left_bottom, right_top) = GeoUtils::bounding_box(route.path());
        let center = GeoUtils::center_of_bbox(left_bottom, right_top);

        let json = serde_json::json!({
            "path": path,
            "road_following": route.is_road_following(),
            "bounds": [[left_bottom.x, left_bottom.y], [right_top.x, right_top.y]],
            "center": [center.x, center.y],
        });

        return (Status::Ok, (ContentType::JSON, json.to_string()));
    }

    (Status::NotFound, (ContentType::Text, String::new()))
}

#[get("/state")]
async fn state(app: &State<SharedApp>) -> (Status, (ContentType, String)) {
    let app = app.read().await;

    if let Some(display_state) = app.last_state() {
        let mut json = serde_json::to_value(display_state).unwrap();

        if let Some(ts) = app.last_update_ts() {
            json.as_object_mut().unwrap().insert(
                "updated_at".to_string(),
                serde_json::Value::String(DateTimeUtils::timestamp_to_str(ts)),
            );
        }

        return (Status::Ok, (ContentType::JSON, json.to_string()));
    }

    (Status::NotFound, (ContentType::Text, String::new()))
}

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    let mut app = App::from_settings_file("route.toml");
    app.initialize().await;

    let fixes = feed::subscribe(&app.settings().feed, app.route().unwrap());
    let shared: SharedApp = Arc::new(RwLock::new(app));

    // Single-writer discipline: only this task ever mutates the App.
    let writer = shared.clone();
    rocket::tokio::spawn(async move {
        let mut fixes = fixes;

        while let Some(raw_fix) = fixes.recv().await {
            writer.write().await.on_fix(&raw_fix);
        }
    });

    let _rocket = rocket::build()
        .manage(shared)
        .attach(Cors)
        .mount("/", routes![route, stops, state, all_options])
        .launch()
        .await?;

    Ok(())
}
