//! Inspect compact JWTs: decode the header and payload segments and print
//! them as formatted JSON. Signatures are echoed, never verified.

pub mod error;
pub mod logger;
pub mod report;
pub mod segment;
pub mod token;

pub use error::{Code, InspectError};
pub use report::{run, write_report};
pub use segment::{SegmentKind, decode_segment, padding_needed};
pub use token::{Token, parse_structured};
