// src/raw_data/buffer.rs
use bytes::Bytes;
use crate::error::{SonarLogError, Result};
use std::ops::{Deref, Range};
use std::path::Path;

#[cfg(feature = "mmap")]
use memmap2::Mmap;
#[cfg(feature = "mmap")]
use std::fs::File;

/// Immutable, fully-loaded view of a sonar log's bytes
///
/// Every later stage (scanning, header decoding, payload extraction) borrows
/// from this buffer. It is backed by [`Bytes`], so cloning is cheap and the
/// contents are never copied once loaded.
///
/// # Example
///
/// ```
/// use sonarlog_rs::raw_data::ByteBuffer;
///
/// let buffer = ByteBuffer::new(vec![1u8, 2, 3, 4]);
/// assert_eq!(buffer.len(), 4);
/// assert_eq!(buffer.get(1..3), Some(&[2u8, 3][..]));
/// assert!(buffer.get(2..8).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteBuffer {
    data: Bytes,
}

impl ByteBuffer {
    pub fn new(data: impl Into<Bytes>) -> Self {
        ByteBuffer { data: data.into() }
    }

    pub fn from_static(data: &'static [u8]) -> Self {
        ByteBuffer { data: Bytes::from_static(data) }
    }

    /// Read a whole file into memory
    pub fn read_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read(path)?;
        Ok(ByteBuffer::new(data))
    }

    /// Memory-map a file instead of reading it (requires "mmap" feature)
    ///
    /// The map is owned by the buffer, so slices stay valid for as long as
    /// any clone of the buffer is alive.
    #[cfg(feature = "mmap")]
    pub fn map_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(ByteBuffer { data: Bytes::from_owner(mmap) })
    }

    /// Read a whole file into memory without blocking the runtime (requires "async" feature)
    #[cfg(feature = "async")]
    pub async fn read_file_async(path: impl AsRef<Path>) -> Result<Self> {
        let data = tokio::fs::read(path).await?;
        Ok(ByteBuffer::new(data))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// The underlying shared bytes
    pub fn bytes(&self) -> &Bytes {
        &self.data
    }

    /// Borrow a byte range, or `None` if any part of it lies outside the buffer
    pub fn get(&self, range: Range<usize>) -> Option<&[u8]> {
        self.data.get(range)
    }

    /// Borrow `len` bytes starting at `offset`
    ///
    /// Fails with [`SonarLogError::TruncatedFrame`] when the region runs past
    /// the end of the buffer.
    pub fn region(&self, offset: usize, len: usize) -> Result<&[u8]> {
        self.checked_range(offset, len)
            .map(|range| &self.data[range])
    }

    /// Zero-copy owned handle to `len` bytes starting at `offset`
    pub fn region_bytes(&self, offset: usize, len: usize) -> Result<Bytes> {
        self.checked_range(offset, len)
            .map(|range| self.data.slice(range))
    }

    /// Number of bytes between `offset` and the end of the buffer
    pub fn remaining(&self, offset: usize) -> usize {
        self.data.len().saturating_sub(offset)
    }

    fn checked_range(&self, offset: usize, len: usize) -> Result<Range<usize>> {
        match offset.checked_add(len) {
            Some(end) if end <= self.data.len() => Ok(offset..end),
            _ => Err(SonarLogError::TruncatedFrame {
                offset: offset as u64,
                needed: len as u64,
                available: self.remaining(offset) as u64,
            }),
        }
    }
}

impl Deref for ByteBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(data: Vec<u8>) -> Self {
        ByteBuffer::new(data)
    }
}

impl From<Bytes> for ByteBuffer {
    fn from(data: Bytes) -> Self {
        ByteBuffer { data }
    }
}
