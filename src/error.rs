// src/error.rs
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SonarLogError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid format descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Truncated frame at offset {offset}: needed {needed} bytes, only {available} available")]
    TruncatedFrame { offset: u64, needed: u64, available: u64 },

    #[error("Malformed frame at offset {offset}: frame size {frame_size} does not advance the scan")]
    MalformedFrame { offset: u64, frame_size: u64 },

    #[error("Shape mismatch in payload row {row}: expected {expected} samples, found {found}")]
    ShapeMismatch { row: usize, expected: usize, found: usize },

    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },
}

pub type Result<T> = std::result::Result<T, SonarLogError>;
