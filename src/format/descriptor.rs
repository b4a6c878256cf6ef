// src/format/descriptor.rs
use crate::error::{SonarLogError, Result};
use crate::types::FieldType;
use std::ops::Range;

/// Location and type of one field inside the frame-header region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpan {
    pub offset: usize,
    pub field_type: FieldType,
}

impl FieldSpan {
    pub const fn new(offset: usize, field_type: FieldType) -> Self {
        FieldSpan { offset, field_type }
    }

    pub const fn width(&self) -> usize {
        self.field_type.fixed_size()
    }

    pub const fn end(&self) -> usize {
        self.offset + self.width()
    }

    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }
}

/// Byte offsets of every decoded field, relative to the start of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    pub first_byte: FieldSpan,
    pub frame_size: FieldSpan,
    pub survey_type: FieldSpan,
    pub min_range: FieldSpan,
    pub max_range: FieldSpan,
    pub water_depth: FieldSpan,
    pub x: FieldSpan,
    pub y: FieldSpan,
    pub heading: FieldSpan,
}

impl FrameLayout {
    /// All spans paired with their column name, in column order
    pub fn fields(&self) -> [(&'static str, FieldSpan); 9] {
        [
            ("first_byte", self.first_byte),
            ("frame_size", self.frame_size),
            ("survey_type", self.survey_type),
            ("min_range", self.min_range),
            ("max_range", self.max_range),
            ("water_depth", self.water_depth),
            ("x", self.x),
            ("y", self.y),
            ("heading", self.heading),
        ]
    }
}

/// Static description of one sonar-log variant
///
/// A descriptor is all the decoder knows about a variant: where frames
/// start, how big the fixed header region is, and where each field sits
/// inside it. Everything past `frame_header_size` up to the declared frame
/// size is sonar payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    pub name: &'static str,
    pub file_header_size: usize,
    pub frame_header_size: usize,
    pub layout: FrameLayout,
}

impl FormatDescriptor {
    pub fn frame_size_offset(&self) -> usize {
        self.layout.frame_size.offset
    }

    pub fn frame_size_width(&self) -> usize {
        self.layout.frame_size.width()
    }

    /// Check that every field lies inside the header region and that the
    /// frame size is stored as an unsigned integer.
    pub fn validate(&self) -> Result<()> {
        for (name, span) in self.layout.fields() {
            if span.end() > self.frame_header_size {
                return Err(SonarLogError::InvalidDescriptor(format!(
                    "{}: field '{}' spans {}..{} beyond the {}-byte frame header",
                    self.name,
                    name,
                    span.offset,
                    span.end(),
                    self.frame_header_size,
                )));
            }
        }
        if !self.layout.frame_size.field_type.is_unsigned() {
            return Err(SonarLogError::InvalidDescriptor(format!(
                "{}: frame size must be an unsigned integer, not {}",
                self.name, self.layout.frame_size.field_type,
            )));
        }
        Ok(())
    }
}

/// Format A (`.sl2`): 8-byte file header, 144-byte frame header
pub static FORMAT_A: FormatDescriptor = FormatDescriptor {
    name: "Format A",
    file_header_size: 8,
    frame_header_size: 144,
    layout: FrameLayout {
        first_byte: FieldSpan::new(0, FieldType::U32),
        frame_size: FieldSpan::new(28, FieldType::U16),
        survey_type: FieldSpan::new(32, FieldType::U16),
        min_range: FieldSpan::new(40, FieldType::F32),
        max_range: FieldSpan::new(44, FieldType::F32),
        water_depth: FieldSpan::new(64, FieldType::F32),
        x: FieldSpan::new(108, FieldType::I32),
        y: FieldSpan::new(112, FieldType::I32),
        heading: FieldSpan::new(124, FieldType::F32),
    },
};

/// Format B (`.sl3`): 8-byte file header, 168-byte frame header
pub static FORMAT_B: FormatDescriptor = FormatDescriptor {
    name: "Format B",
    file_header_size: 8,
    frame_header_size: 168,
    layout: FrameLayout {
        first_byte: FieldSpan::new(0, FieldType::U32),
        frame_size: FieldSpan::new(8, FieldType::U16),
        survey_type: FieldSpan::new(12, FieldType::U16),
        min_range: FieldSpan::new(20, FieldType::F32),
        max_range: FieldSpan::new(24, FieldType::F32),
        water_depth: FieldSpan::new(48, FieldType::F32),
        x: FieldSpan::new(92, FieldType::I32),
        y: FieldSpan::new(96, FieldType::I32),
        heading: FieldSpan::new(104, FieldType::F32),
    },
};
