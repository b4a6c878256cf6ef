// src/convert/coordinates.rs
use std::f64::consts::{FRAC_PI_2, PI};

/// Sphere radius of the device's Mercator-like projection, in meters
pub const PROJECTION_RADIUS_M: f64 = 6356752.3142;

const DEGREES_PER_RADIAN: f64 = 180.0 / PI;

pub fn x_to_longitude(x: i32) -> f64 {
    x as f64 / PROJECTION_RADIUS_M * DEGREES_PER_RADIAN
}

pub fn y_to_latitude(y: i32) -> f64 {
    (2.0 * (y as f64 / PROJECTION_RADIUS_M).exp().atan() - FRAC_PI_2) * DEGREES_PER_RADIAN
}

/// Inverse projection of a device `(x, y)` pair to `(longitude, latitude)` in degrees
pub fn to_geographic(x: i32, y: i32) -> (f64, f64) {
    (x_to_longitude(x), y_to_latitude(y))
}
