//! Error types for the uudecode-verify system.
//!
//! All operations return structured errors rather than panicking.
//! Decode-format errors are recoverable by design: the dispatcher swallows
//! them by falling back to the lenient decoder, and the lenient decoder
//! downgrades them to per-line warnings. Only I/O-level failures reach the
//! caller.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Decode: uuencode format violations (strict decoder only)
/// - I/O: file system operations
/// - MissingOutput: post-decode verification (output vanished)
#[derive(Debug, Error)]
pub enum Error {
    /// Uuencode format violation (only surfaced by the strict decoder)
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The output file did not exist after the decode completed.
    ///
    /// Reported distinctly from generic I/O errors so the caller can tell
    /// "could not write" apart from "wrote, then it disappeared".
    #[error("output file {} missing after decode", .0.display())]
    MissingOutput(PathBuf),
}

/// Uuencode format errors.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// No `begin <mode> <name>` header line
    #[error("missing 'begin' header line")]
    MissingHeader,

    /// Input ended before the zero-length (`` ` ``) terminator line
    #[error("missing zero-length terminator line")]
    MissingTerminator,

    /// No `end` footer line after the terminator
    #[error("missing 'end' footer line")]
    MissingFooter,

    /// A blank line appeared inside the data body
    #[error("blank line inside the data body")]
    BlankInBody,

    /// Length byte outside the printable range [32, 96]
    #[error("invalid length byte {0:#04x}: outside printable range [32, 96]")]
    InvalidLengthByte(u8),

    /// Length byte decodes to more than the 45-byte line maximum
    #[error("declared length {declared} exceeds the 45-byte line maximum")]
    DeclaredTooLong { declared: usize },

    /// Line carries fewer encoded characters than its length byte requires
    #[error("line too short: need {required} encoded chars, got {actual}")]
    LineTooShort { required: usize, actual: usize },

    /// Encoded character outside the printable range [32, 96]
    #[error("invalid data byte {byte:#04x} at offset {offset}")]
    InvalidDataByte { byte: u8, offset: usize },

    /// A trailing group of exactly one character cannot encode any byte
    #[error("dangling single character at offset {offset}")]
    DanglingGroup { offset: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
