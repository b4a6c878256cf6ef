// src/frame/mod.rs
mod header;
mod scanner;

pub use header::FrameHeader;
pub use scanner::{FrameScanner, RawFrame, TruncationPolicy};
