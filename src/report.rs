use std::ffi::OsString;
use std::io::Write;

use serde_json::Value;

use crate::error::InspectError;
use crate::segment::SegmentKind;
use crate::token::Token;

pub const BANNER: &str = "--- JWT Decoded ---";
pub const FOOTER: &str = "--- End ---";
pub const SIGNATURE_NOTE: &str = "Note: The signature is a cryptographic hash and is not decoded.";

fn write_document<W: Write>(
    out: &mut W,
    kind: SegmentKind,
    document: &Value,
) -> Result<(), InspectError> {
    writeln!(out, "\n[{}]", kind.label())?;
    serde_json::to_writer_pretty(&mut *out, document).map_err(std::io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

/// Decode `token` and write the labelled report to `out`.
///
/// Blocks are written as soon as each segment is ready, so a payload failure
/// leaves the banner and header block in `out`.
pub fn write_report<W: Write>(token: &str, out: &mut W) -> Result<(), InspectError> {
    let token = Token::parse(token)?;

    writeln!(out, "{BANNER}")?;

    let header = token.decode_header()?;
    write_document(out, SegmentKind::Header, &header)?;

    let payload = token.decode_payload()?;
    write_document(out, SegmentKind::Payload, &payload)?;

    writeln!(out, "\n[{}]", SegmentKind::Signature.label())?;
    writeln!(out, "{}", token.signature)?;
    writeln!(out, "\n{SIGNATURE_NOTE}")?;
    writeln!(out, "{FOOTER}")?;

    Ok(())
}

/// Entry point shared by the binary: `args` includes the program name.
pub fn run<I, W>(args: I, out: &mut W) -> Result<(), InspectError>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
    W: Write,
{
    let mut args = args.into_iter().map(Into::<OsString>::into);
    let program = args
        .next()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
    let rest: Vec<OsString> = args.collect();

    let [token] = rest.as_slice() else {
        log::debug!("[run] expected 1 argument, got {}", rest.len());
        return Err(InspectError::Usage { program });
    };

    let token = token.to_str().ok_or_else(|| InspectError::NotUnicode {
        lossy: token.to_string_lossy().into_owned(),
    })?;

    write_report(token, out)?;
    out.flush()?;
    Ok(())
}
