// tests/common/mod.rs
#![allow(dead_code)]

use bytes::{BufMut, BytesMut};
use sonarlog_rs::convert::FEET_PER_METER;
use sonarlog_rs::{FieldSpan, FormatVariant};
use std::path::PathBuf;
use tempfile::TempDir;

/// Install a test logger; repeated calls are ignored
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One synthetic frame; ranges and depth are given in meters
#[derive(Debug, Clone)]
pub struct TestFrame {
    pub survey_type: u16,
    pub min_range_m: f32,
    pub max_range_m: f32,
    pub water_depth_m: f32,
    pub x: i32,
    pub y: i32,
    pub heading: f32,
    pub payload: Vec<u8>,
}

impl TestFrame {
    pub fn new(survey_type: u16, payload_len: usize) -> Self {
        TestFrame {
            survey_type,
            min_range_m: 0.0,
            max_range_m: 10.0,
            water_depth_m: 4.5,
            x: 0,
            y: 0,
            heading: 0.0,
            payload: (0..payload_len).map(|i| (i % 256) as u8).collect(),
        }
    }

    pub fn max_range(mut self, meters: f32) -> Self {
        self.max_range_m = meters;
        self
    }

    pub fn position(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn fill(mut self, value: u8) -> Self {
        self.payload.iter_mut().for_each(|b| *b = value);
        self
    }
}

fn put_at(header: &mut [u8], span: FieldSpan, bytes: &[u8]) {
    header[span.range()].copy_from_slice(bytes);
}

/// Build a complete log in the given variant
///
/// Each frame is laid out as header, payload, then one header length of
/// padding, so that the payload sits exactly where the recorded
/// `first_byte`/`frame_size` pair says it does.
pub fn build_log(format: FormatVariant, frames: &[TestFrame]) -> Vec<u8> {
    let descriptor = format.descriptor();
    let layout = &descriptor.layout;
    let header_size = descriptor.frame_header_size;

    let mut buf = BytesMut::new();
    buf.put_bytes(0, descriptor.file_header_size);

    for frame in frames {
        let start = buf.len();
        let frame_size = 2 * header_size + frame.payload.len();

        let mut header = vec![0u8; header_size];
        put_at(&mut header, layout.first_byte, &(start as u32).to_le_bytes());
        put_at(&mut header, layout.frame_size, &(frame_size as u16).to_le_bytes());
        put_at(&mut header, layout.survey_type, &frame.survey_type.to_le_bytes());
        put_at(&mut header, layout.min_range, &(frame.min_range_m * FEET_PER_METER).to_le_bytes());
        put_at(&mut header, layout.max_range, &(frame.max_range_m * FEET_PER_METER).to_le_bytes());
        put_at(&mut header, layout.water_depth, &(frame.water_depth_m * FEET_PER_METER).to_le_bytes());
        put_at(&mut header, layout.x, &frame.x.to_le_bytes());
        put_at(&mut header, layout.y, &frame.y.to_le_bytes());
        put_at(&mut header, layout.heading, &frame.heading.to_le_bytes());

        buf.put_slice(&header);
        buf.put_slice(&frame.payload);
        buf.put_bytes(0, header_size);
    }

    buf.to_vec()
}

/// Build a log of header-only frames with the given declared sizes
///
/// Sizes smaller than the header region still get a full header written,
/// so the caller decides whether the result is well-formed.
pub fn build_sized(format: FormatVariant, sizes: &[u16]) -> Vec<u8> {
    let descriptor = format.descriptor();
    let mut buf = BytesMut::new();
    buf.put_bytes(0, descriptor.file_header_size);

    for &size in sizes {
        let mut frame = vec![0u8; (size as usize).max(descriptor.frame_header_size)];
        put_at(&mut frame, descriptor.layout.frame_size, &size.to_le_bytes());
        buf.put_slice(&frame[..size as usize]);
    }

    buf.to_vec()
}

/// Write `data` to `<tempdir>/<name>` and return the path
pub fn write_temp(dir: &TempDir, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, data).unwrap();
    path
}
