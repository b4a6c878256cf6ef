// src/format/variant.rs
use crate::error::{SonarLogError, Result};
use crate::format::descriptor::{FormatDescriptor, FORMAT_A, FORMAT_B};
use std::fmt;
use std::path::Path;

/// The two supported sonar-log variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatVariant {
    A,
    B,
}

impl FormatVariant {
    pub const A_EXTENSIONS: [&'static str; 2] = ["fmtA", "sl2"];
    pub const B_EXTENSIONS: [&'static str; 2] = ["fmtB", "sl3"];

    pub fn descriptor(&self) -> &'static FormatDescriptor {
        match self {
            FormatVariant::A => &FORMAT_A,
            FormatVariant::B => &FORMAT_B,
        }
    }

    /// Match a file extension (without the dot), ignoring ASCII case
    pub fn from_extension(extension: &str) -> Option<Self> {
        let matches = |known: &[&str]| known.iter().any(|ext| ext.eq_ignore_ascii_case(extension));
        if matches(&Self::A_EXTENSIONS) {
            Some(FormatVariant::A)
        } else if matches(&Self::B_EXTENSIONS) {
            Some(FormatVariant::B)
        } else {
            None
        }
    }

    /// Pick the variant for a file purely from its extension
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| SonarLogError::UnsupportedFormat(format!(
                "'{}' (expected one of .{}, .{}, .{}, .{})",
                path.display(),
                Self::A_EXTENSIONS[0],
                Self::A_EXTENSIONS[1],
                Self::B_EXTENSIONS[0],
                Self::B_EXTENSIONS[1],
            )))
    }
}

impl fmt::Display for FormatVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_extension() {
        assert_eq!(FormatVariant::from_path("log.fmtA").unwrap(), FormatVariant::A);
        assert_eq!(FormatVariant::from_path("log.fmtB").unwrap(), FormatVariant::B);
        assert_eq!(FormatVariant::from_path("dir/Chart 01.sl2").unwrap(), FormatVariant::A);
        assert_eq!(FormatVariant::from_path("dir/Chart 02.SL3").unwrap(), FormatVariant::B);
    }

    #[test]
    fn test_unknown_extension_is_unsupported() {
        for path in ["log.txt", "log", "log.sl", "fmtA"] {
            match FormatVariant::from_path(path) {
                Err(SonarLogError::UnsupportedFormat(msg)) => assert!(msg.contains(path)),
                other => panic!("Expected UnsupportedFormat for {}, got {:?}", path, other),
            }
        }
    }

    #[test]
    fn test_descriptor_lookup() {
        assert_eq!(FormatVariant::A.descriptor().frame_header_size, 144);
        assert_eq!(FormatVariant::B.descriptor().frame_header_size, 168);
        assert_eq!(FormatVariant::B.to_string(), "Format B");
    }
}
