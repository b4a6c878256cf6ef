// src/convert/units.rs

/// Feet in one meter; the device stores depths and ranges in feet
pub const FEET_PER_METER: f32 = 3.2808399;

pub fn feet_to_meters(feet: f32) -> f32 {
    feet / FEET_PER_METER
}
