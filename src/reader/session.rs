// src/reader/session.rs
use crate::error::Result;
use crate::format::{FormatDescriptor, FormatVariant};
use crate::frame::TruncationPolicy;
use crate::raw_data::ByteBuffer;
use crate::reader::payload::{PayloadExtractor, SampleMatrix};
use crate::reader::record_table::{decode_records, RecordTable};
use crate::reader::selection::{FrameFilter, Selection};
use bytes::Bytes;
use log::debug;
use std::path::Path;

/// Settings for one decode call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// How a final frame running past the end of the file is handled
    pub truncation: TruncationPolicy,
    /// Force a variant instead of dispatching on the file extension
    pub format: Option<FormatVariant>,
}

impl DecodeOptions {
    pub fn with_truncation(mut self, truncation: TruncationPolicy) -> Self {
        self.truncation = truncation;
        self
    }

    pub fn with_format(mut self, format: FormatVariant) -> Self {
        self.format = Some(format);
        self
    }

    fn resolve_format(&self, path: &Path) -> Result<FormatVariant> {
        match self.format {
            Some(format) => Ok(format),
            None => FormatVariant::from_path(path),
        }
    }
}

/// A decoded sonar log: the loaded bytes plus their frame records
///
/// This is the whole decode session. It owns the buffer and the
/// [`RecordTable`] built from it, and every further operation (filtering,
/// payload extraction) goes through it explicitly. Callers that need a
/// "nothing loaded yet" state hold an `Option<SonarLogReader>`.
#[derive(Debug, Clone)]
pub struct SonarLogReader {
    buffer: ByteBuffer,
    records: RecordTable,
}

impl SonarLogReader {
    /// Read and decode a log, choosing the variant from the file extension
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_options(path, DecodeOptions::default())
    }

    pub fn open_with_options(path: impl AsRef<Path>, options: DecodeOptions) -> Result<Self> {
        let path = path.as_ref();
        let format = options.resolve_format(path)?;
        debug!("Reading {} as {}", path.display(), format);

        let buffer = ByteBuffer::read_file(path)?;
        Self::decode_buffer(buffer, format, options)
    }

    /// Memory-map and decode a log (requires "mmap" feature)
    #[cfg(feature = "mmap")]
    pub fn open_mmap(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_mmap_with_options(path, DecodeOptions::default())
    }

    #[cfg(feature = "mmap")]
    pub fn open_mmap_with_options(path: impl AsRef<Path>, options: DecodeOptions) -> Result<Self> {
        let path = path.as_ref();
        let format = options.resolve_format(path)?;
        debug!("Mapping {} as {}", path.display(), format);

        let buffer = ByteBuffer::map_file(path)?;
        Self::decode_buffer(buffer, format, options)
    }

    /// Load the file on the async runtime, then decode (requires "async" feature)
    #[cfg(feature = "async")]
    pub async fn open_async(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_async_with_options(path, DecodeOptions::default()).await
    }

    #[cfg(feature = "async")]
    pub async fn open_async_with_options(path: impl AsRef<Path>, options: DecodeOptions) -> Result<Self> {
        let path = path.as_ref();
        let format = options.resolve_format(path)?;
        debug!("Reading {} as {} (async)", path.display(), format);

        let buffer = ByteBuffer::read_file_async(path).await?;
        Self::decode_buffer(buffer, format, options)
    }

    /// Decode bytes already in memory
    pub fn from_bytes(data: impl Into<Bytes>, format: FormatVariant) -> Result<Self> {
        Self::from_buffer(ByteBuffer::new(data), format, TruncationPolicy::default())
    }

    pub fn from_buffer(buffer: ByteBuffer, format: FormatVariant, truncation: TruncationPolicy) -> Result<Self> {
        Self::decode_buffer(buffer, format, DecodeOptions::default().with_truncation(truncation))
    }

    fn decode_buffer(buffer: ByteBuffer, format: FormatVariant, options: DecodeOptions) -> Result<Self> {
        let records = decode_records(&buffer, format, options)?;
        Ok(SonarLogReader { buffer, records })
    }

    pub fn format(&self) -> FormatVariant {
        self.records.format()
    }

    pub fn descriptor(&self) -> &'static FormatDescriptor {
        self.format().descriptor()
    }

    pub fn buffer(&self) -> &ByteBuffer {
        &self.buffer
    }

    pub fn records(&self) -> &RecordTable {
        &self.records
    }

    pub fn payload_extractor(&self) -> PayloadExtractor<'_> {
        PayloadExtractor::new(&self.buffer, self.descriptor())
    }

    /// Sample matrix of every frame matching `filter`
    pub fn extract<F>(&self, filter: &F) -> Result<SampleMatrix>
    where
        F: FrameFilter + ?Sized,
    {
        self.payload_extractor().extract(&self.records, filter)
    }

    /// Sample matrix of the primary channel under 60 m range
    pub fn extract_primary(&self) -> Result<SampleMatrix> {
        self.extract(&Selection::primary_display())
    }

    pub fn into_parts(self) -> (ByteBuffer, RecordTable) {
        (self.buffer, self.records)
    }
}
