//! Lenient line-by-line uudecode.
//!
//! Strategy B of the decode dispatcher: when the whole-buffer strict decode
//! fails, this decoder walks the input one line at a time and salvages
//! whatever it can. Every error is a skip-and-continue; an input with zero
//! usable lines decodes to an empty buffer, never an error.
//!
//! # Line policy
//!
//! Classification is a total function over lines, with one action per
//! outcome:
//!
//! | Kind        | Trigger                              | Action           |
//! |-------------|--------------------------------------|------------------|
//! | Header      | starts with `begin `                 | skip             |
//! | Footer      | starts with `end`                    | skip             |
//! | Blank       | empty after trailing-whitespace trim | skip             |
//! | NotData     | first byte outside [32, 96]          | skip             |
//! | ZeroLength  | first byte is `` ` `` (96)           | skip             |
//! | Data        | anything else                        | decode or warn   |
//!
//! # Slicing caveat
//!
//! For a Data line declaring `n` bytes, the decoder consumes
//! `n * 4 / 3` characters after the length byte. This floor division is
//! kept bit-for-bit compatible with the original tool. It equals the true
//! group-padded count only when `n` is a multiple of 3; for `n % 3 == 1`
//! the slice ends in a dangling character (the line is skipped with a
//! warning) and for `n % 3 == 2` the final byte of the line is silently
//! lost. Reference uuencoders emit 45-byte lines, so well-formed input is
//! unaffected.

use crate::report::DecodeReport;
use crate::strict::trim_line_end;
use crate::uu;

/// Mutually exclusive classification of an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `begin <mode> <name>` header
    Header,
    /// `end` footer
    Footer,
    /// Empty or whitespace-only
    Blank,
    /// First byte outside the printable range; not uuencoded data
    NotData,
    /// Length byte `` ` ``: a zero-byte line (usually the terminator)
    ZeroLength,
    /// A data line declaring this many decoded bytes
    Data { declared_len: usize },
}

/// Classify a single line. Total: every line maps to exactly one kind.
///
/// Structural markers win over the length-byte check, so a corrupt file
/// whose header survives still has it skipped rather than "decoded"
/// (`b` happens to be a valid length byte).
pub fn classify_line(line: &[u8]) -> LineKind {
    if line.starts_with(b"begin ") {
        return LineKind::Header;
    }
    if line.starts_with(b"end") {
        return LineKind::Footer;
    }
    if trim_line_end(line).is_empty() {
        return LineKind::Blank;
    }

    let first = line[0];
    if !uu::is_data_byte(first) {
        return LineKind::NotData;
    }
    if first == uu::ZERO_LENGTH_BYTE {
        return LineKind::ZeroLength;
    }
    LineKind::Data {
        declared_len: uu::decode_char(first) as usize,
    }
}

/// Decode the input line by line, appending salvageable bytes in order.
///
/// Per-line failures are recorded as warnings in the report and the line
/// is dropped wholesale; nothing aborts the walk. The returned buffer is
/// the concatenation of each decodable line's bytes in input order.
pub fn decode_lines(input: &[u8], report: &mut DecodeReport) -> Vec<u8> {
    let mut out = Vec::new();

    for (idx, line) in input.split(|&b| b == b'\n').enumerate() {
        report.lines_total += 1;

        match classify_line(line) {
            LineKind::Header => report.lines_header += 1,
            LineKind::Footer => report.lines_footer += 1,
            LineKind::Blank => report.lines_blank += 1,
            LineKind::NotData => report.lines_not_data += 1,
            LineKind::ZeroLength => report.lines_zero_length += 1,
            LineKind::Data { declared_len } => {
                // Bug-compatible slice, see module docs.
                let take = (declared_len * 4 / 3).min(line.len() - 1);
                match uu::decode_groups(&line[1..1 + take], declared_len) {
                    Ok(bytes) => {
                        report.lines_data += 1;
                        out.extend_from_slice(&bytes);
                    }
                    Err(err) => {
                        report.lines_failed += 1;
                        report.push_warning(idx + 1, &err);
                    }
                }
            }
        }
    }

    out
}
