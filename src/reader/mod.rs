// src/reader/mod.rs
mod session;
mod record_table;
mod payload;
mod selection;

pub use session::{DecodeOptions, SonarLogReader};
pub use record_table::{decode_records, RecordTable};
pub use payload::{PayloadExtractor, SampleMatrix};
pub use selection::{FrameFilter, Selection, DEFAULT_MAX_RANGE_M};
