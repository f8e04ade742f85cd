//! Decode dispatcher: strict attempt with lenient fallback.
//!
//! The two decoders share one shape (bytes in, bytes out, strict may
//! signal failure) and the dispatcher chains them: try the strict
//! whole-buffer decode first, and on any format error fall back to the
//! line-by-line decoder, which trades exactness for tolerance and cannot
//! fail. Format errors therefore never escape this module; only I/O-level
//! problems (which live in the callers) can end a run.

use crate::lenient;
use crate::report::{DecodeReport, Strategy};
use crate::strict;

/// Decode a uuencoded buffer, always producing output.
///
/// On the fallback path the strict decoder's error is recorded in the
/// report as an informational note, not surfaced as a failure.
pub fn decode(input: &[u8], report: &mut DecodeReport) -> Vec<u8> {
    let out = match strict::decode_buffer(input) {
        Ok(bytes) => {
            report.strategy = Some(Strategy::Strict);
            bytes
        }
        Err(err) => {
            report.strategy = Some(Strategy::Lenient);
            report.fallback_note = Some(err.to_string());
            lenient::decode_lines(input, report)
        }
    };

    report.decoded_bytes = out.len() as u64;
    out
}
