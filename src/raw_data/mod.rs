// src/raw_data/mod.rs
//! Raw byte handling for sonar logs
//!
//! - [`ByteBuffer`] - The immutable in-memory copy (or map) of a log file
//! - [`RawDataReader`] - Bounds-checked little-endian field reads from header slices
//!
//! # Example
//!
//! ```
//! use sonarlog_rs::raw_data::{ByteBuffer, RawDataReader};
//! use sonarlog_rs::format::FieldSpan;
//! use sonarlog_rs::types::FieldType;
//!
//! let buffer = ByteBuffer::new(vec![0u8, 0, 0, 0, 0x90, 0x01, 0, 0]);
//! let header = buffer.region(0, 8).unwrap();
//!
//! let size: u16 = RawDataReader::read_field(header, FieldSpan::new(4, FieldType::U16)).unwrap();
//! assert_eq!(size, 400);
//! ```

mod buffer;
mod reader;

pub use buffer::ByteBuffer;
pub use reader::{FieldValue, RawDataReader};
