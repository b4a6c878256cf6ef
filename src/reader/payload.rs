// src/reader/payload.rs
use crate::error::{SonarLogError, Result};
use crate::format::FormatDescriptor;
use crate::raw_data::ByteBuffer;
use crate::reader::record_table::RecordTable;
use crate::reader::selection::FrameFilter;
use log::debug;
use ndarray::{Array2, ArrayView1, Axis};

/// Raw 8-bit sonar intensities, one row per selected frame
///
/// Rows follow file order. Column `j` is byte `j` of each frame's payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleMatrix {
    samples: Array2<u8>,
    frame_indices: Vec<usize>,
}

impl SampleMatrix {
    pub fn rows(&self) -> usize {
        self.samples.nrows()
    }

    pub fn cols(&self) -> usize {
        self.samples.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<ArrayView1<'_, u8>> {
        (index < self.rows()).then(|| self.samples.index_axis(Axis(0), index))
    }

    pub fn samples(&self) -> &Array2<u8> {
        &self.samples
    }

    pub fn into_samples(self) -> Array2<u8> {
        self.samples
    }

    /// For each matrix row, the index of the frame it came from in the [`RecordTable`]
    pub fn frame_indices(&self) -> &[usize] {
        &self.frame_indices
    }
}

/// Cuts sonar payloads out of the buffer for the frames a filter selects
pub struct PayloadExtractor<'a> {
    buffer: &'a ByteBuffer,
    descriptor: &'a FormatDescriptor,
}

impl<'a> PayloadExtractor<'a> {
    pub fn new(buffer: &'a ByteBuffer, descriptor: &'a FormatDescriptor) -> Self {
        PayloadExtractor { buffer, descriptor }
    }

    /// Stack the payload of every frame matching `filter` into a matrix
    ///
    /// Each payload is located from the frame's recorded `first_byte` and
    /// `frame_size` (see [`FrameHeader::payload_range`](crate::frame::FrameHeader::payload_range)).
    /// All selected payloads must have the same length; the first row that
    /// differs fails with [`SonarLogError::ShapeMismatch`], where `row` is the
    /// frame's index in `table`. A selection matching nothing yields an empty
    /// `0 x 0` matrix.
    pub fn extract<F>(&self, table: &RecordTable, filter: &F) -> Result<SampleMatrix>
    where
        F: FrameFilter + ?Sized,
    {
        let header_size = self.descriptor.frame_header_size;
        let mut samples = Vec::new();
        let mut frame_indices = Vec::new();
        let mut width: Option<usize> = None;

        for (index, header) in table.iter().enumerate() {
            if !filter.matches(header) {
                continue;
            }

            let range = header.payload_range(header_size);
            let row = self.buffer.region(range.start, range.len())?;

            match width {
                None => width = Some(row.len()),
                Some(expected) if expected != row.len() => {
                    return Err(SonarLogError::ShapeMismatch {
                        row: index,
                        expected,
                        found: row.len(),
                    });
                }
                Some(_) => {}
            }

            samples.extend_from_slice(row);
            frame_indices.push(index);
        }

        let cols = width.unwrap_or(0);
        let total = samples.len();
        let samples = Array2::from_shape_vec((frame_indices.len(), cols), samples).map_err(|_| {
            SonarLogError::ShapeMismatch {
                row: frame_indices.len(),
                expected: frame_indices.len() * cols,
                found: total,
            }
        })?;

        debug!("Extracted {}x{} sample matrix", samples.nrows(), samples.ncols());
        Ok(SampleMatrix { samples, frame_indices })
    }
}
