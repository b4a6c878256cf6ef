// src/format/mod.rs
mod descriptor;
mod variant;

pub use descriptor::{FieldSpan, FormatDescriptor, FrameLayout, FORMAT_A, FORMAT_B};
pub use variant::FormatVariant;
