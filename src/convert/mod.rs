// src/convert/mod.rs
//! Unit and coordinate conversions applied while decoding frame headers
mod coordinates;
mod units;

pub use coordinates::{to_geographic, x_to_longitude, y_to_latitude, PROJECTION_RADIUS_M};
pub use units::{feet_to_meters, FEET_PER_METER};
