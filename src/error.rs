use thiserror::Error;

use crate::segment::SegmentKind;

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    UsageError = -1,
    FormatError = -2,
    DecodeError = -3,
    ParseError = -4,
    IoError = -5,
}

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("Usage: {program} <jwt string>")]
    Usage { program: String },

    #[error("Invalid JWT format. Expected three parts separated by dots, found {parts}.")]
    Format { parts: usize },

    #[error("JWT string is not valid UTF-8: {lossy}")]
    NotUnicode { lossy: String },

    #[error("Failed to decode {kind} segment: {reason}")]
    Decode { kind: SegmentKind, reason: String },

    #[error("Failed to parse {kind} segment as JSON: {source}")]
    Parse {
        kind: SegmentKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl InspectError {
    pub fn code(&self) -> Code {
        match self {
            InspectError::Usage { .. } => Code::UsageError,
            InspectError::Format { .. } => Code::FormatError,
            InspectError::NotUnicode { .. } | InspectError::Decode { .. } => Code::DecodeError,
            InspectError::Parse { .. } => Code::ParseError,
            InspectError::Io(_) => Code::IoError,
        }
    }

    /// Decode and parse failures come from a bad token rather than bad usage.
    pub fn is_segment_error(&self) -> bool {
        matches!(
            self,
            InspectError::NotUnicode { .. }
                | InspectError::Decode { .. }
                | InspectError::Parse { .. }
        )
    }
}
