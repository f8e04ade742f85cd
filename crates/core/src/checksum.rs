//! Streaming SHA-256 checksums for integrity verification.
//!
//! The hash is consumed as a black box: bytes go in as fixed-size chunks,
//! a lowercase hex digest comes out. Reading in 4 KiB chunks keeps memory
//! use flat regardless of file size, unlike the decode path which holds
//! the whole file.
//!
//! This is integrity checking, not security: the digest only answers "did
//! the decode reproduce the original bytes".

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::Result;

/// Read size for streaming hashing.
pub const CHUNK_SIZE: usize = 4096;

/// SHA-256 of a file, streamed in [`CHUNK_SIZE`] blocks.
///
/// # Errors
/// Any I/O error from opening or reading the file.
pub fn file_sha256(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    Ok(reader_sha256(file)?)
}

/// SHA-256 of anything readable, as a lowercase hex digest.
pub fn reader_sha256<R: Read>(mut reader: R) -> io::Result<String> {
    let mut hasher = Sha256::new();
    let mut buf = [0u8; CHUNK_SIZE];

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The well-known SHA-256 of empty input.
    const EMPTY_DIGEST: &str =
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn test_empty_input_digest() {
        let digest = reader_sha256(&b""[..]).unwrap();
        assert_eq!(digest, EMPTY_DIGEST);
    }

    #[test]
    fn test_known_digest() {
        let digest = reader_sha256(&b"abc"[..]).unwrap();
        assert_eq!(
            digest,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_determinism() {
        let data = vec![0xA5u8; 100_000];
        let first = reader_sha256(&data[..]).unwrap();
        let second = reader_sha256(&data[..]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_chunking_is_invisible() {
        // Input larger than one chunk hashes the same as a single update
        let data: Vec<u8> = (0..3 * CHUNK_SIZE + 17).map(|i| i as u8).collect();
        let streamed = reader_sha256(&data[..]).unwrap();

        let mut hasher = Sha256::new();
        hasher.update(&data);
        assert_eq!(streamed, hex::encode(hasher.finalize()));
    }

    #[test]
    fn test_file_digest() {
        let path = std::env::temp_dir().join("uudecode_verify_checksum_test.bin");
        std::fs::write(&path, b"abc").unwrap();

        let digest = file_sha256(&path).unwrap();
        assert_eq!(
            digest,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("uudecode_verify_no_such_file");
        assert!(matches!(
            file_sha256(&path),
            Err(crate::error::Error::Io(_))
        ));
    }
}
