// src/frame/header.rs
use crate::convert::{feet_to_meters, to_geographic};
use crate::error::Result;
use crate::format::FormatDescriptor;
use crate::raw_data::RawDataReader;
use crate::types::SurveyType;
use std::ops::Range;

/// Decoded header of one sonar frame
///
/// Depth and range values are already converted to meters; `longitude` and
/// `latitude` are derived from the projected `x`/`y` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FrameHeader {
    /// File offset the device recorded for this frame
    pub first_byte: u32,
    pub frame_size: u16,
    /// Raw channel code as stored in the file
    pub survey_type: u16,
    pub min_range: f32,
    pub max_range: f32,
    pub water_depth: f32,
    pub x: i32,
    pub y: i32,
    pub heading: f32,
    pub longitude: f64,
    pub latitude: f64,
    #[cfg_attr(feature = "serde", serde(rename = "survey_label"))]
    pub survey: SurveyType,
}

impl FrameHeader {
    /// Decode a frame-header region using the given variant's layout
    ///
    /// # Example
    ///
    /// ```
    /// use sonarlog_rs::frame::FrameHeader;
    /// use sonarlog_rs::format::FORMAT_A;
    /// use sonarlog_rs::types::SurveyType;
    ///
    /// let mut header = vec![0u8; FORMAT_A.frame_header_size];
    /// header[28..30].copy_from_slice(&3216u16.to_le_bytes());
    /// header[32..34].copy_from_slice(&2u16.to_le_bytes());
    ///
    /// let decoded = FrameHeader::decode(&header, &FORMAT_A).unwrap();
    /// assert_eq!(decoded.frame_size, 3216);
    /// assert_eq!(decoded.survey, SurveyType::Downscan);
    /// assert_eq!(decoded.survey_label(), "downscan");
    /// ```
    pub fn decode(header: &[u8], descriptor: &FormatDescriptor) -> Result<Self> {
        let layout = &descriptor.layout;

        let x: i32 = RawDataReader::read_field(header, layout.x)?;
        let y: i32 = RawDataReader::read_field(header, layout.y)?;
        let (longitude, latitude) = to_geographic(x, y);

        let survey_type: u16 = RawDataReader::read_field(header, layout.survey_type)?;
        let min_range: f32 = RawDataReader::read_field(header, layout.min_range)?;
        let max_range: f32 = RawDataReader::read_field(header, layout.max_range)?;
        let water_depth: f32 = RawDataReader::read_field(header, layout.water_depth)?;

        Ok(FrameHeader {
            first_byte: RawDataReader::read_field(header, layout.first_byte)?,
            frame_size: RawDataReader::read_field(header, layout.frame_size)?,
            survey_type,
            min_range: feet_to_meters(min_range),
            max_range: feet_to_meters(max_range),
            water_depth: feet_to_meters(water_depth),
            x,
            y,
            heading: RawDataReader::read_field(header, layout.heading)?,
            longitude,
            latitude,
            survey: SurveyType::from_code(survey_type),
        })
    }

    pub fn survey_label(&self) -> &'static str {
        self.survey.label()
    }

    /// Byte range of this frame's sonar samples in the file
    ///
    /// The samples start one header length after `first_byte` and end one
    /// header length before `first_byte + frame_size`. A frame too small to
    /// hold samples gives an empty range.
    pub fn payload_range(&self, frame_header_size: usize) -> Range<usize> {
        let first_byte = self.first_byte as usize;
        let start = first_byte + frame_header_size;
        let end = (first_byte + self.frame_size as usize)
            .saturating_sub(frame_header_size)
            .max(start);
        start..end
    }

    pub fn payload_len(&self, frame_header_size: usize) -> usize {
        self.payload_range(frame_header_size).len()
    }
}
