use crate::angles::{deg_to_rad, normalize_angle, rad_to_deg};
use crate::types::Coordinate;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub fn great_circle_distance_km(a: Coordinate, b: Coordinate) -> f64 {
    great_circle_distance_with_radius(a, b, EARTH_RADIUS_KM)
}

pub fn great_circle_distance_with_radius(a: Coordinate, b: Coordinate, radius_km: f64) -> f64 {
    let lat1 = deg_to_rad(a.latitude);
    let lat2 = deg_to_rad(b.latitude);
    let d_lat = deg_to_rad(b.latitude - a.latitude);
    let d_lon = deg_to_rad(b.longitude - a.longitude);

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push h just past 1 near antipodes.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    radius_km * c
}

// Returns 0 for coincident points.
pub fn initial_bearing_deg(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = deg_to_rad(from.latitude);
    let lat2 = deg_to_rad(to.latitude);
    let d_lon = deg_to_rad(to.longitude - from.longitude);

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    normalize_angle(rad_to_deg(y.atan2(x)) + 360.0)
}
