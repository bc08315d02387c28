use std::borrow::Cow;
use std::fmt;

use base64::{
    Engine as _, alphabet,
    engine::{GeneralPurpose, general_purpose},
};

use crate::error::InspectError;

/// URL-safe alphabet, padding required, stray low bits in the last symbol ignored.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    general_purpose::PAD.with_decode_allow_trailing_bits(true),
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Header,
    Payload,
    Signature,
}

impl SegmentKind {
    pub fn label(&self) -> &'static str {
        match self {
            SegmentKind::Header => "Header",
            SegmentKind::Payload => "Payload",
            SegmentKind::Signature => "Signature (Encoded)",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentKind::Header => f.write_str("header"),
            SegmentKind::Payload => f.write_str("payload"),
            SegmentKind::Signature => f.write_str("signature"),
        }
    }
}

/// Number of `=` characters missing from a segment of `len` characters.
pub fn padding_needed(len: usize) -> usize {
    (4 - len % 4) % 4
}

fn restore_padding(segment: &str) -> Cow<'_, str> {
    match padding_needed(segment.len()) {
        0 => Cow::Borrowed(segment),
        n => {
            let mut padded = String::with_capacity(segment.len() + n);
            padded.push_str(segment);
            padded.extend(std::iter::repeat_n('=', n));
            Cow::Owned(padded)
        }
    }
}

/// Decode a base64url segment, with or without its padding, into UTF-8 text.
pub fn decode_segment(kind: SegmentKind, segment: &str) -> Result<String, InspectError> {
    let padded = restore_padding(segment);
    log::trace!(
        "[decode_segment] {kind}: {} chars, {} padding restored",
        segment.len(),
        padded.len() - segment.len()
    );

    let bytes = URL_SAFE_LENIENT
        .decode(padded.as_bytes())
        .map_err(|e| InspectError::Decode {
            kind,
            reason: e.to_string(),
        })?;

    String::from_utf8(bytes).map_err(|e| InspectError::Decode {
        kind,
        reason: e.to_string(),
    })
}
