//! uudecode-verify-core: uudecode with a lenient fallback and SHA-256 verification
//!
//! This library provides the core components for a tool that:
//! - Decodes legacy uuencoded files back to their original bytes
//! - Falls back to a tolerant line-by-line decoder when the input is malformed
//! - Verifies results with streaming SHA-256 checksums
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `uu`: Character-level uuencode primitives and the group transform
//! - `strict`: Whole-buffer decode of a well-formed uuencoded file
//! - `lenient`: Line classification and best-effort salvage decoding
//! - `decode`: Dispatcher chaining strict then lenient
//! - `checksum`: Streaming SHA-256 over files and readers
//! - `report`: Observable per-run statistics and warnings
//!
//! # Design Principles
//!
//! - **Format errors never abort**: the dispatcher always returns bytes;
//!   only I/O errors propagate
//! - **Order preserved**: output is each line's bytes concatenated in
//!   input order
//! - **Observable**: every skipped or dropped line is counted and, where
//!   it carried data, reported as a warning

pub mod checksum;
pub mod decode;
pub mod error;
pub mod lenient;
pub mod report;
pub mod strict;
pub mod uu;

// Re-export commonly used types
pub use error::{Error, Result};
