//! Strict whole-buffer uudecode.
//!
//! Decodes an entire buffer as a well-formed uuencoded file:
//!
//! ```text
//! begin <mode> <name>
//! M...45-byte data lines...
//! ...
//! `                         <- zero-length terminator
//! end
//! ```
//!
//! Every structural rule is enforced: the header and footer must be
//! present, each data line must carry the full character count its length
//! byte requires (rounded up to complete 4-character groups), and no blank
//! lines may appear inside the body. Any violation is an error.
//!
//! Strictness is the point: this is strategy A of the decode dispatcher,
//! and its failures are what trigger the fall back to the lenient
//! line-by-line decoder in [`crate::lenient`].

use crate::error::{DecodeError, Result};
use crate::uu;

/// Decode a complete uuencoded file in one pass.
///
/// # Errors
/// Any `DecodeError` for a structural or character-level violation.
/// Callers that cannot tolerate failure should go through
/// [`crate::decode::decode`] instead.
pub fn decode_buffer(input: &[u8]) -> Result<Vec<u8>> {
    // A trailing newline is file termination, not an empty final line.
    let input = match input.split_last() {
        Some((&b'\n', rest)) => rest,
        _ => input,
    };
    let mut lines = input.split(|&b| b == b'\n');

    // Header: first non-blank line must be "begin <mode> <name>".
    let header = loop {
        match lines.next() {
            Some(line) if trim_line_end(line).is_empty() => continue,
            Some(line) => break line,
            None => return Err(DecodeError::MissingHeader.into()),
        }
    };
    if !header.starts_with(b"begin ") {
        return Err(DecodeError::MissingHeader.into());
    }

    let mut out = Vec::new();
    let mut saw_terminator = false;

    for raw_line in &mut lines {
        let line = trim_cr(raw_line);

        if !saw_terminator {
            if line.is_empty() {
                return Err(DecodeError::BlankInBody.into());
            }

            let first = line[0];
            if !uu::is_data_byte(first) {
                return Err(DecodeError::InvalidLengthByte(first).into());
            }

            let declared = uu::decode_char(first) as usize;
            if declared == 0 {
                saw_terminator = true;
                continue;
            }
            if declared > uu::MAX_LINE_BYTES {
                return Err(DecodeError::DeclaredTooLong { declared }.into());
            }

            // The true padding rule: character count rounds up to whole
            // 4-character groups, 3 bytes each.
            let required = declared.div_ceil(3) * 4;
            let body = &line[1..];
            if body.len() < required {
                return Err(DecodeError::LineTooShort {
                    required,
                    actual: body.len(),
                }
                .into());
            }

            let bytes = uu::decode_groups(&body[..required], declared)?;
            out.extend_from_slice(&bytes);
        } else {
            // Past the terminator only blank lines and the footer remain.
            let line = trim_line_end(line);
            if line.is_empty() {
                continue;
            }
            if line.starts_with(b"end") {
                return Ok(out);
            }
            return Err(DecodeError::MissingFooter.into());
        }
    }

    if saw_terminator {
        Err(DecodeError::MissingFooter.into())
    } else {
        Err(DecodeError::MissingTerminator.into())
    }
}

/// Strip a single trailing `\r` (CRLF input split on `\n`).
///
/// Deliberately narrower than [`trim_line_end`]: a space at the end of a
/// data line is a valid encoded character, not junk.
fn trim_cr(line: &[u8]) -> &[u8] {
    match line.split_last() {
        Some((&b'\r', rest)) => rest,
        _ => line,
    }
}

/// Strip all trailing ASCII whitespace (blank-line and footer checks).
pub(crate) fn trim_line_end(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |i| i + 1);
    &line[..end]
}
