// src/types.rs
use std::fmt;

/// Numeric type of a fixed-offset field inside a frame header.
///
/// Every field in both log variants is little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    U16,
    U32,
    I32,
    F32,
}

impl FieldType {
    /// Size of this field type in bytes
    pub const fn fixed_size(&self) -> usize {
        match self {
            FieldType::U16 => 2,
            FieldType::U32 | FieldType::I32 | FieldType::F32 => 4,
        }
    }

    pub fn is_unsigned(&self) -> bool {
        matches!(self, FieldType::U16 | FieldType::U32)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::U16 => "u16",
            FieldType::U32 => "u32",
            FieldType::I32 => "i32",
            FieldType::F32 => "f32",
        };
        f.write_str(name)
    }
}

/// Sonar channel that produced a frame.
///
/// The device stores this as a raw `u16` code. Codes without a known
/// channel are kept as [`SurveyType::Other`] so the raw value survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurveyType {
    Primary,
    Secondary,
    Downscan,
    LeftSidescan,
    RightSidescan,
    Sidescan,
    Other(u16),
}

impl SurveyType {
    /// Label used for any code outside the known channel table
    pub const OTHER_LABEL: &'static str = "Other";

    pub fn from_code(code: u16) -> Self {
        match code {
            0 => SurveyType::Primary,
            1 => SurveyType::Secondary,
            2 => SurveyType::Downscan,
            3 => SurveyType::LeftSidescan,
            4 => SurveyType::RightSidescan,
            5 => SurveyType::Sidescan,
            other => SurveyType::Other(other),
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            SurveyType::Primary => 0,
            SurveyType::Secondary => 1,
            SurveyType::Downscan => 2,
            SurveyType::LeftSidescan => 3,
            SurveyType::RightSidescan => 4,
            SurveyType::Sidescan => 5,
            SurveyType::Other(code) => *code,
        }
    }

    /// Human-readable channel label, as written to the `survey_label` column
    pub fn label(&self) -> &'static str {
        match self {
            SurveyType::Primary => "primary",
            SurveyType::Secondary => "secondary",
            SurveyType::Downscan => "downscan",
            SurveyType::LeftSidescan => "left_sidescan",
            SurveyType::RightSidescan => "right_sidescan",
            SurveyType::Sidescan => "sidescan",
            SurveyType::Other(_) => Self::OTHER_LABEL,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, SurveyType::Other(_))
    }
}

impl From<u16> for SurveyType {
    fn from(code: u16) -> Self {
        SurveyType::from_code(code)
    }
}

impl fmt::Display for SurveyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SurveyType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
