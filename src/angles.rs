pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

// ((x + 540) mod 360) - 180, so the result lies in [-180, 180).
pub fn normalize_signed_angle(angle: f64) -> f64 {
    (angle + 540.0).rem_euclid(360.0) - 180.0
}
