// src/frame/scanner.rs
use crate::error::{SonarLogError, Result};
use crate::format::FormatDescriptor;
use crate::raw_data::{ByteBuffer, RawDataReader};
use log::{trace, warn};
use std::iter::FusedIterator;

/// What the scanner does with a final frame that runs past the end of the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TruncationPolicy {
    /// Report [`SonarLogError::TruncatedFrame`] and stop
    #[default]
    Error,
    /// Log a warning, drop the partial frame and stop
    Drop,
}

/// One frame located by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFrame<'a> {
    /// Absolute offset of the frame in the buffer
    pub offset: usize,
    /// Declared total frame length, header included
    pub frame_size: usize,
    /// The fixed-size header region at the start of the frame
    pub header: &'a [u8],
}

/// Walks a buffer frame by frame using each frame's declared size
///
/// Frames are yielded in strictly increasing offset order. The scan checks
/// bounds before every read and refuses a zero frame size, so it always
/// terminates. After the first error the iterator is exhausted.
///
/// # Example
///
/// ```
/// use sonarlog_rs::frame::FrameScanner;
/// use sonarlog_rs::format::FORMAT_B;
/// use sonarlog_rs::raw_data::ByteBuffer;
///
/// let mut data = vec![0u8; 8 + 200];
/// data[8 + 8..8 + 10].copy_from_slice(&200u16.to_le_bytes());
/// let buffer = ByteBuffer::new(data);
///
/// let frames: Vec<_> = FrameScanner::new(&buffer, &FORMAT_B)
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(frames.len(), 1);
/// assert_eq!(frames[0].offset, 8);
/// assert_eq!(frames[0].header.len(), 168);
/// ```
pub struct FrameScanner<'a> {
    data: &'a [u8],
    descriptor: &'a FormatDescriptor,
    position: usize,
    policy: TruncationPolicy,
    finished: bool,
}

impl<'a> FrameScanner<'a> {
    pub fn new(buffer: &'a ByteBuffer, descriptor: &'a FormatDescriptor) -> Self {
        FrameScanner {
            data: buffer.as_slice(),
            descriptor,
            position: descriptor.file_header_size,
            policy: TruncationPolicy::default(),
            finished: false,
        }
    }

    pub fn with_policy(mut self, policy: TruncationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Offset of the next frame to be scanned
    pub fn position(&self) -> usize {
        self.position
    }

    fn fail(&mut self, error: SonarLogError) -> Option<Result<RawFrame<'a>>> {
        self.finished = true;
        Some(Err(error))
    }

    fn truncated(&mut self, needed: usize, available: usize) -> Option<Result<RawFrame<'a>>> {
        match self.policy {
            TruncationPolicy::Error => self.fail(SonarLogError::TruncatedFrame {
                offset: self.position as u64,
                needed: needed as u64,
                available: available as u64,
            }),
            TruncationPolicy::Drop => {
                warn!(
                    "Dropping partial {} frame at offset {}: needs {} bytes, {} left",
                    self.descriptor.name, self.position, needed, available
                );
                self.finished = true;
                None
            }
        }
    }
}

impl<'a> Iterator for FrameScanner<'a> {
    type Item = Result<RawFrame<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.position >= self.data.len() {
            self.finished = true;
            return None;
        }

        let header_size = self.descriptor.frame_header_size;
        let remaining = self.data.len() - self.position;
        if remaining < header_size {
            return self.truncated(header_size, remaining);
        }

        let header = &self.data[self.position..self.position + header_size];
        let frame_size = match RawDataReader::read_unsigned(header, self.descriptor.layout.frame_size) {
            Ok(size) => size as usize,
            Err(e) => return self.fail(e),
        };

        if frame_size == 0 {
            return self.fail(SonarLogError::MalformedFrame {
                offset: self.position as u64,
                frame_size: 0,
            });
        }

        if frame_size < header_size {
            warn!(
                "{} frame at offset {} declares {} bytes, smaller than its {}-byte header",
                self.descriptor.name, self.position, frame_size, header_size
            );
        }

        if frame_size > remaining {
            return self.truncated(frame_size, remaining);
        }

        trace!("Frame at offset {} ({} bytes)", self.position, frame_size);

        let frame = RawFrame {
            offset: self.position,
            frame_size,
            header,
        };
        self.position += frame_size;
        Some(Ok(frame))
    }
}

impl FusedIterator for FrameScanner<'_> {}
