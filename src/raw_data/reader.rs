// src/raw_data/reader.rs
use crate::error::{SonarLogError, Result};
use crate::format::FieldSpan;
use crate::types::FieldType;
use byteorder::{ByteOrder, LittleEndian};

/// A numeric type that can be stored in a frame-header field
pub trait FieldValue: Sized + Copy {
    const FIELD_TYPE: FieldType;

    /// Decode from exactly `FIELD_TYPE.fixed_size()` little-endian bytes
    fn from_le_bytes(bytes: &[u8]) -> Self;
}

impl FieldValue for u16 {
    const FIELD_TYPE: FieldType = FieldType::U16;

    fn from_le_bytes(bytes: &[u8]) -> Self {
        LittleEndian::read_u16(bytes)
    }
}

impl FieldValue for u32 {
    const FIELD_TYPE: FieldType = FieldType::U32;

    fn from_le_bytes(bytes: &[u8]) -> Self {
        LittleEndian::read_u32(bytes)
    }
}

impl FieldValue for i32 {
    const FIELD_TYPE: FieldType = FieldType::I32;

    fn from_le_bytes(bytes: &[u8]) -> Self {
        LittleEndian::read_i32(bytes)
    }
}

impl FieldValue for f32 {
    const FIELD_TYPE: FieldType = FieldType::F32;

    fn from_le_bytes(bytes: &[u8]) -> Self {
        LittleEndian::read_f32(bytes)
    }
}

/// Helper functions for reading fixed-offset fields out of a header slice
///
/// All reads are little-endian and bounds-checked; nothing here panics on
/// short input.
pub struct RawDataReader;

impl RawDataReader {
    /// Read the field described by `span` as `T`
    ///
    /// # Example
    ///
    /// ```
    /// use sonarlog_rs::raw_data::RawDataReader;
    /// use sonarlog_rs::format::FieldSpan;
    /// use sonarlog_rs::types::FieldType;
    ///
    /// let header = [0u8, 0, 0x2a, 0x00, 0xff, 0xff, 0xff, 0xff];
    /// let value: u16 = RawDataReader::read_field(&header, FieldSpan::new(2, FieldType::U16)).unwrap();
    /// assert_eq!(value, 42);
    ///
    /// let value: i32 = RawDataReader::read_field(&header, FieldSpan::new(4, FieldType::I32)).unwrap();
    /// assert_eq!(value, -1);
    /// ```
    pub fn read_field<T: FieldValue>(header: &[u8], span: FieldSpan) -> Result<T> {
        if span.field_type != T::FIELD_TYPE {
            return Err(SonarLogError::TypeMismatch {
                expected: span.field_type.to_string(),
                found: T::FIELD_TYPE.to_string(),
            });
        }
        let bytes = Self::field_bytes(header, span)?;
        Ok(T::from_le_bytes(bytes))
    }

    /// Read an unsigned field of either width, widened to `u64`
    ///
    /// Used for the frame-size field, whose width is a property of the
    /// format variant rather than of the caller.
    pub fn read_unsigned(header: &[u8], span: FieldSpan) -> Result<u64> {
        let bytes = Self::field_bytes(header, span)?;
        match span.field_type {
            FieldType::U16 => Ok(LittleEndian::read_u16(bytes) as u64),
            FieldType::U32 => Ok(LittleEndian::read_u32(bytes) as u64),
            other => Err(SonarLogError::TypeMismatch {
                expected: "unsigned integer".to_string(),
                found: other.to_string(),
            }),
        }
    }

    fn field_bytes(header: &[u8], span: FieldSpan) -> Result<&[u8]> {
        header.get(span.range()).ok_or(SonarLogError::TruncatedFrame {
            offset: span.offset as u64,
            needed: span.width() as u64,
            available: header.len().saturating_sub(span.offset) as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_each_field_type() {
        let mut header = vec![0u8; 16];
        header[0..2].copy_from_slice(&513u16.to_le_bytes());
        header[2..6].copy_from_slice(&0xDEADBEEFu32.to_le_bytes());
        header[6..10].copy_from_slice(&(-123456i32).to_le_bytes());
        header[10..14].copy_from_slice(&12.5f32.to_le_bytes());

        let a: u16 = RawDataReader::read_field(&header, FieldSpan::new(0, FieldType::U16)).unwrap();
        let b: u32 = RawDataReader::read_field(&header, FieldSpan::new(2, FieldType::U32)).unwrap();
        let c: i32 = RawDataReader::read_field(&header, FieldSpan::new(6, FieldType::I32)).unwrap();
        let d: f32 = RawDataReader::read_field(&header, FieldSpan::new(10, FieldType::F32)).unwrap();

        assert_eq!(a, 513);
        assert_eq!(b, 0xDEADBEEF);
        assert_eq!(c, -123456);
        assert_eq!(d, 12.5);
    }

    #[test]
    fn test_read_field_type_mismatch() {
        let header = [0u8; 8];
        let result: Result<f32> = RawDataReader::read_field(&header, FieldSpan::new(0, FieldType::U32));
        assert!(matches!(result, Err(SonarLogError::TypeMismatch { .. })));
    }

    #[test]
    fn test_read_past_end_of_header() {
        let header = [0u8; 5];
        let result: Result<u32> = RawDataReader::read_field(&header, FieldSpan::new(2, FieldType::U32));
        match result {
            Err(SonarLogError::TruncatedFrame { offset, needed, available }) => {
                assert_eq!(offset, 2);
                assert_eq!(needed, 4);
                assert_eq!(available, 3);
            }
            other => panic!("Expected TruncatedFrame, got {:?}", other),
        }
    }

    #[test]
    fn test_read_unsigned_widths() {
        let header = [0x10, 0x27, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00];
        assert_eq!(RawDataReader::read_unsigned(&header, FieldSpan::new(0, FieldType::U16)).unwrap(), 10_000);
        assert_eq!(RawDataReader::read_unsigned(&header, FieldSpan::new(4, FieldType::U32)).unwrap(), 65_537);
        assert!(RawDataReader::read_unsigned(&header, FieldSpan::new(0, FieldType::F32)).is_err());
    }
}
