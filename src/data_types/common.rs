// Wire/display shape of a coordinate: [latitude, longitude] in degrees.
pub type LatLng = [f64; 2];
