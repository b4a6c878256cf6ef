// src/reader/record_table.rs
use crate::error::Result;
use crate::format::FormatVariant;
use crate::frame::{FrameHeader, FrameScanner, RawFrame, TruncationPolicy};
use crate::raw_data::ByteBuffer;
use crate::reader::selection::FrameFilter;
use crate::reader::session::DecodeOptions;
use crate::types::SurveyType;
use log::debug;
use std::collections::HashMap;
use std::ops::Index;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Scan and decode `buffer` with the truncation policy from `options`
///
/// `options.format`, when set, takes precedence over `format`.
pub fn decode_records(buffer: &ByteBuffer, format: FormatVariant, options: DecodeOptions) -> Result<RecordTable> {
    RecordTable::decode(buffer, options.format.unwrap_or(format), options.truncation)
}

/// Every decoded frame header of one log, in file order
#[derive(Debug, Clone, PartialEq)]
pub struct RecordTable {
    format: FormatVariant,
    records: Vec<FrameHeader>,
}

impl RecordTable {
    /// Column names of the tabular view, in the order of [`FrameHeader`]'s fields
    pub const COLUMNS: [&'static str; 12] = [
        "first_byte",
        "frame_size",
        "survey_type",
        "min_range",
        "max_range",
        "water_depth",
        "x",
        "y",
        "heading",
        "longitude",
        "latitude",
        "survey_label",
    ];

    pub fn from_records(format: FormatVariant, records: Vec<FrameHeader>) -> Self {
        RecordTable { format, records }
    }

    /// Scan `buffer` and decode every frame header
    ///
    /// Either every frame decodes or the whole call fails; a partially
    /// built table is never returned.
    pub fn decode(buffer: &ByteBuffer, format: FormatVariant, policy: TruncationPolicy) -> Result<Self> {
        let descriptor = format.descriptor();
        let frames: Vec<RawFrame<'_>> = FrameScanner::new(buffer, descriptor)
            .with_policy(policy)
            .collect::<Result<_>>()?;

        #[cfg(feature = "parallel")]
        let records = frames
            .par_iter()
            .map(|frame| FrameHeader::decode(frame.header, descriptor))
            .collect::<Result<Vec<_>>>()?;

        #[cfg(not(feature = "parallel"))]
        let records = frames
            .iter()
            .map(|frame| FrameHeader::decode(frame.header, descriptor))
            .collect::<Result<Vec<_>>>()?;

        debug!("Decoded {} frames ({}, {} bytes)", records.len(), format, buffer.len());
        Ok(RecordTable { format, records })
    }

    pub fn format(&self) -> FormatVariant {
        self.format
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FrameHeader> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrameHeader> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[FrameHeader] {
        &self.records
    }

    /// Frames matching `filter`, in file order
    pub fn filter<'a, F>(&'a self, filter: &'a F) -> impl Iterator<Item = &'a FrameHeader> + 'a
    where
        F: FrameFilter + ?Sized,
    {
        self.records.iter().filter(move |header| filter.matches(header))
    }

    pub fn count_by_survey(&self) -> HashMap<SurveyType, usize> {
        let mut counts = HashMap::new();
        for header in &self.records {
            *counts.entry(header.survey).or_insert(0) += 1;
        }
        counts
    }

    pub fn into_records(self) -> Vec<FrameHeader> {
        self.records
    }
}

impl Index<usize> for RecordTable {
    type Output = FrameHeader;

    fn index(&self, index: usize) -> &FrameHeader {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a RecordTable {
    type Item = &'a FrameHeader;
    type IntoIter = std::slice::Iter<'a, FrameHeader>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
