// src/lib.rs
//! # sonarlog-rs
//!
//! A Rust library for decoding the binary sonar logs written by consumer
//! fishfinders: Format A (`.sl2`) and Format B (`.sl3`).
//!
//! ## Features
//!
//! - 🔍 **Bounded Scanning**: Every frame is bounds-checked; zero-sized or truncated frames are reported, never looped on
//! - 🧭 **Navigation Data**: Depth and range in meters, projected positions converted to longitude/latitude
//! - 📡 **Sonar Intensity**: Payloads of selected frames stacked into an `ndarray` sample matrix
//! - 📦 **Zero-Copy Buffers**: Files are loaded (or memory-mapped) once into shared `Bytes`
//! - 🎯 **Data-Driven Formats**: Both variants share one decoder, parameterized by a static layout table
//!
//! ## Quick Start
//!
//! ### Decoding a Log
//!
//! ```rust,no_run
//! use sonarlog_rs::*;
//!
//! fn main() -> Result<()> {
//!     let reader = SonarLogReader::open("Chart 01.sl2")?;
//!
//!     for header in reader.records() {
//!         println!(
//!             "{} depth={:.1} m at {:.6}, {:.6}",
//!             header.survey_label(),
//!             header.water_depth,
//!             header.latitude,
//!             header.longitude,
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Extracting Sonar Samples
//!
//! ```rust,no_run
//! use sonarlog_rs::*;
//!
//! fn main() -> Result<()> {
//!     let reader = SonarLogReader::open("Chart 01.sl3")?;
//!
//!     let selection = Selection::new()
//!         .survey(SurveyType::Downscan)
//!         .max_range_below(30.0);
//!     let matrix = reader.extract(&selection)?;
//!     println!("{} pings x {} samples", matrix.rows(), matrix.cols());
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Async Loading
//!
//! ```rust,no_run
//! # #[cfg(feature = "async")]
//! use sonarlog_rs::*;
//!
//! # #[cfg(feature = "async")]
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let reader = SonarLogReader::open_async("Chart 01.sl2").await?;
//!     println!("{} frames", reader.records().len());
//!     Ok(())
//! }
//! ```

// Modules
pub mod error;
pub mod types;
pub mod format;
pub mod frame;
pub mod raw_data;
pub mod convert;
pub mod reader;

// Re-export commonly used types at the crate root for convenience
pub use error::{SonarLogError, Result};

// Type exports
pub use types::{
    FieldType,
    SurveyType,
};

// Format exports
pub use format::{
    FieldSpan,
    FormatDescriptor,
    FormatVariant,
    FrameLayout,
    FORMAT_A,
    FORMAT_B,
};

// Frame exports
pub use frame::{
    FrameHeader,
    FrameScanner,
    RawFrame,
    TruncationPolicy,
};

// Raw data exports
pub use raw_data::{
    ByteBuffer,
    RawDataReader,
};

// Reader exports
pub use reader::{
    decode_records,
    DecodeOptions,
    FrameFilter,
    PayloadExtractor,
    RecordTable,
    SampleMatrix,
    Selection,
    SonarLogReader,
};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use sonarlog_rs::prelude::*;
    //! ```

    pub use crate::error::{SonarLogError, Result};
    pub use crate::types::SurveyType;
    pub use crate::format::FormatVariant;
    pub use crate::frame::FrameHeader;
    pub use crate::reader::{FrameFilter, SampleMatrix, Selection, SonarLogReader};
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!LIBRARY_VERSION.is_empty());
    }

    #[test]
    fn test_format_constants() {
        assert_eq!(FORMAT_A.file_header_size, 8);
        assert_eq!(FORMAT_A.frame_header_size, 144);
        assert_eq!(FORMAT_B.file_header_size, 8);
        assert_eq!(FORMAT_B.frame_header_size, 168);
    }

    #[test]
    fn test_converters_at_reference_points() {
        assert_eq!(convert::to_geographic(0, 0), (0.0, 0.0));
        assert_eq!(convert::feet_to_meters(convert::FEET_PER_METER), 1.0);
    }

    #[test]
    fn test_from_bytes_end_to_end() {
        test_helpers::init_logging();

        // Two Format A frames, primary then secondary, 16 payload bytes each
        let header_size = FORMAT_A.frame_header_size;
        let frame_size = 2 * header_size + 16;
        let mut data = vec![0u8; FORMAT_A.file_header_size];
        for survey in [0u16, 1] {
            let start = data.len();
            let mut frame = vec![0u8; frame_size];
            frame[0..4].copy_from_slice(&(start as u32).to_le_bytes());
            frame[28..30].copy_from_slice(&(frame_size as u16).to_le_bytes());
            frame[32..34].copy_from_slice(&survey.to_le_bytes());
            frame[44..48].copy_from_slice(&(10.0 * convert::FEET_PER_METER).to_le_bytes());
            for (i, byte) in frame[header_size..header_size + 16].iter_mut().enumerate() {
                *byte = 100 + i as u8;
            }
            data.extend(frame);
        }

        let reader = SonarLogReader::from_bytes(data, FormatVariant::A).unwrap();
        assert_eq!(reader.records().len(), 2);
        assert_eq!(reader.records()[0].survey, SurveyType::Primary);
        assert_eq!(reader.records()[1].survey, SurveyType::Secondary);

        let matrix = reader.extract_primary().unwrap();
        assert_eq!((matrix.rows(), matrix.cols()), (1, 16));
        assert_eq!(matrix.samples()[[0, 0]], 100);
        assert_eq!(matrix.samples()[[0, 15]], 115);
    }
}

// Test helpers (only compiled for tests)
#[cfg(test)]
pub mod test_helpers {
    /// Install a logger for tests; repeated calls are ignored
    pub fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }
}
