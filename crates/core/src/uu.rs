//! Character-level primitives of the uuencode format.
//!
//! Uuencode packs 3 bytes of binary data into 4 printable characters by
//! splitting 24 bits into four 6-bit values and adding 32 to each. The
//! printable range is [32, 96]; the backtick (96) is the historical alias
//! for 32 so that lines never end in a bare space.
//!
//! This module knows nothing about lines or files. It provides the byte
//! predicates used by both decoders plus [`decode_groups`], the group
//! transform they share.
//!
//! # Example
//! ```
//! use uudecode_verify_core::uu::decode_groups;
//!
//! // "86)C" is the uuencoding of "abc"
//! assert_eq!(decode_groups(b"86)C", 3).unwrap(), b"abc");
//! ```

use crate::error::{DecodeError, Result};

/// Lowest byte value a uuencoded character may take (space)
pub const MIN_DATA_BYTE: u8 = 32;

/// Highest byte value a uuencoded character may take (backtick)
pub const MAX_DATA_BYTE: u8 = 96;

/// The length byte meaning "zero data bytes on this line"
pub const ZERO_LENGTH_BYTE: u8 = 96;

/// Maximum decoded bytes per line in the classic format
pub const MAX_LINE_BYTES: usize = 45;

/// Recover the 6-bit value of an encoded character: `(b - 32) & 63`.
///
/// The mask folds the backtick (96) back to 0, matching its role as the
/// alias for space. Wrapping subtraction keeps this total over all of `u8`;
/// callers gate on [`is_data_byte`] first when validity matters.
#[inline]
pub fn decode_char(b: u8) -> u8 {
    b.wrapping_sub(32) & 63
}

/// Whether a byte lies in the printable uuencode range [32, 96].
#[inline]
pub fn is_data_byte(b: u8) -> bool {
    (MIN_DATA_BYTE..=MAX_DATA_BYTE).contains(&b)
}

/// Apply the uuencode group transform to a run of encoded characters.
///
/// Characters are consumed in groups of 4, each yielding 3 decoded bytes.
/// A trailing partial group of 3 characters yields 2 bytes, and of 2
/// characters yields 1 byte. Output is capped at `max_out` bytes, which is
/// how the length byte of a line trims the zero-padding of its final group.
///
/// # Errors
/// - `DecodeError::InvalidDataByte` if any character is outside [32, 96]
/// - `DecodeError::DanglingGroup` if a trailing group has exactly 1
///   character (6 bits cannot encode a byte)
pub fn decode_groups(chars: &[u8], max_out: usize) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(max_out);

    for (group_no, group) in chars.chunks(4).enumerate() {
        if group.len() == 1 {
            return Err(DecodeError::DanglingGroup {
                offset: group_no * 4,
            }
            .into());
        }

        // Accumulate up to 24 bits, 6 per character, MSB-first.
        let mut acc: u32 = 0;
        for (i, &b) in group.iter().enumerate() {
            if !is_data_byte(b) {
                return Err(DecodeError::InvalidDataByte {
                    byte: b,
                    offset: group_no * 4 + i,
                }
                .into());
            }
            acc |= u32::from(decode_char(b)) << (18 - 6 * i);
        }

        let bytes = [(acc >> 16) as u8, (acc >> 8) as u8, acc as u8];
        out.extend_from_slice(&bytes[..group.len() - 1]);
    }

    out.truncate(max_out);
    Ok(out)
}
