use serde_derive::Serialize;

use crate::data_types::common::LatLng;

// Core progress fields, recomputed from scratch on every fix.
//
// Invariants: previous_stop_index <= next_stop_index <= stops.len() - 1 and
// next_stop_index == min(previous_stop_index + 1, stops.len() - 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressState {
    pub previous_stop_index: usize,
    pub next_stop_index: usize,
    pub nearest_path_index: usize,
    pub distance_to_next_km: f64,
    pub eta_minutes: i64,
}

// Per-stop indicator shown on the progress strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StopProgress {
    Pending,
    Active,
    Completed,
}

// Flat, display-ready record handed to the presentation layer. Owns no UI
// state; the embedding binary decides what to do with it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayState {
    pub previous_stop: String,
    pub previous_stop_status: String,
    pub next_stop: String,
    pub speed_kmh: i64,
    pub eta_minutes: i64,
    pub eta_label: String,

    // Current marker position, [lat, lng]
    pub position: LatLng,

    // Portion of the route already covered, origin up to the snapped sample
    pub traveled_path: Vec<LatLng>,

    pub stop_indicators: Vec<StopProgress>,
    pub connectors_completed: Vec<bool>,

    pub progress: ProgressState,
}
