//! Integration tests for the full decode-and-verify pipeline.
//!
//! These tests verify end-to-end behavior: uuencoded input -> dispatcher
//! decode -> output bytes -> streamed checksum, with both the strict and
//! lenient paths exercised against the same inputs.

use std::path::PathBuf;

use uudecode_verify_core::checksum;
use uudecode_verify_core::decode::decode;
use uudecode_verify_core::lenient;
use uudecode_verify_core::report::{DecodeReport, Strategy};
use uudecode_verify_core::strict;

/// Reference uuencoder for building fixtures (the library is decode-only).
fn uuencode(data: &[u8]) -> Vec<u8> {
    fn enc(v: u8) -> u8 {
        if v == 0 {
            b'`'
        } else {
            v + 32
        }
    }

    let mut out = Vec::new();
    out.extend_from_slice(b"begin 644 fixture.bin\n");

    for chunk in data.chunks(45) {
        out.push(enc(chunk.len() as u8));
        for group in chunk.chunks(3) {
            let mut acc: u32 = 0;
            for (i, &b) in group.iter().enumerate() {
                acc |= u32::from(b) << (16 - 8 * i);
            }
            for i in 0..4 {
                out.push(enc(((acc >> (18 - 6 * i)) & 63) as u8));
            }
        }
        out.push(b'\n');
    }

    out.extend_from_slice(b"`\nend\n");
    out
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("uudecode_verify_it_{name}"))
}

/// Round-trip: encode with a reference encoder, decode through the
/// dispatcher, output must be byte-identical to the original.
#[test]
fn test_round_trip_dispatcher() {
    let original: Vec<u8> = (0u8..=255).cycle().take(4096).collect();
    let encoded = uuencode(&original);

    let mut report = DecodeReport::new();
    let decoded = decode(&encoded, &mut report);

    assert_eq!(decoded, original);
    assert_eq!(report.strategy, Some(Strategy::Strict));
}

/// For inputs whose lines all hold complete 3-byte groups, the strict
/// decoder, the lenient decoder, and the original bytes must all agree.
#[test]
fn test_strategies_agree_on_full_lines() {
    // 45 is a multiple of 3, so every line (including the last) is full groups
    for size in [45, 90, 450, 4500] {
        let original: Vec<u8> = (0..size).map(|i| (i * 7) as u8).collect();
        let encoded = uuencode(&original);

        let strict_out = strict::decode_buffer(&encoded).expect("strict decode failed");
        let mut report = DecodeReport::new();
        let lenient_out = lenient::decode_lines(&encoded, &mut report);

        assert_eq!(strict_out, original, "strict mismatch at size {size}");
        assert_eq!(lenient_out, original, "lenient mismatch at size {size}");
        assert!(report.warnings.is_empty());
    }
}

/// Header and footer only: empty output, no error, no warnings.
#[test]
fn test_header_footer_only() {
    let input = b"begin 644 empty.bin\n`\nend\n";

    let mut report = DecodeReport::new();
    let decoded = decode(input, &mut report);

    assert!(decoded.is_empty());
    assert_eq!(report.decoded_bytes, 0);
}

/// A corrupted file still decodes: bad lines are dropped with warnings,
/// good lines survive in order.
#[test]
fn test_corrupted_file_salvage() {
    let original = b"The quick brown fox jumps over the lazy dog.!".repeat(10);
    assert_eq!(original.len() % 45, 0);
    let mut encoded = uuencode(&original);

    // Smash one data line's payload with an out-of-range byte
    let line_start = encoded
        .iter()
        .position(|&b| b == b'\n')
        .expect("header newline")
        + 1;
    encoded[line_start + 5] = 0xC8;

    let mut report = DecodeReport::new();
    let decoded = decode(&encoded, &mut report);

    assert_eq!(report.strategy, Some(Strategy::Lenient));
    assert_eq!(report.lines_failed, 1);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].line_no, 2);

    // One 45-byte line lost, the rest intact and in order
    assert_eq!(decoded.len(), original.len() - 45);
    assert_eq!(decoded, &original[45..]);
}

/// An input with zero valid data lines yields empty output, not an error.
#[test]
fn test_no_valid_lines_yields_empty() {
    let input: &[u8] = b"\x01\x02\x03\n\xFF\xFE\xFD\nnot uuencoded at all\n";

    let mut report = DecodeReport::new();
    let decoded = decode(input, &mut report);

    assert!(decoded.is_empty());
    assert_eq!(report.strategy, Some(Strategy::Lenient));
    assert_eq!(report.lines_data, 0);
}

/// Full pipeline with files: decode to disk, then checksum the file twice
/// and against the in-memory original.
#[test]
fn test_decode_write_checksum_pipeline() {
    let original: Vec<u8> = (0u8..=255).cycle().take(45 * 64).collect();
    let encoded = uuencode(&original);

    let in_path = temp_path("pipeline.uu");
    let out_path = temp_path("pipeline.uu.res");
    std::fs::write(&in_path, &encoded).unwrap();

    let input = std::fs::read(&in_path).unwrap();
    let mut report = DecodeReport::new();
    let decoded = decode(&input, &mut report);
    std::fs::write(&out_path, &decoded).unwrap();

    let first = checksum::file_sha256(&out_path).unwrap();
    let second = checksum::file_sha256(&out_path).unwrap();
    assert_eq!(first, second, "checksum must be deterministic");

    let expected = checksum::reader_sha256(&original[..]).unwrap();
    assert_eq!(first, expected, "decoded file must hash like the original");

    std::fs::remove_file(&in_path).ok();
    std::fs::remove_file(&out_path).ok();
}

/// The empty-output case hashes to the well-known empty SHA-256 digest.
#[test]
fn test_empty_output_checksum() {
    let out_path = temp_path("empty.res");

    let mut report = DecodeReport::new();
    let decoded = decode(b"begin 644 x\n`\nend\n", &mut report);
    std::fs::write(&out_path, &decoded).unwrap();

    let digest = checksum::file_sha256(&out_path).unwrap();
    assert_eq!(
        digest,
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );

    std::fs::remove_file(&out_path).ok();
}

/// Headerless input (a bare stack of data lines) goes through the
/// fallback and still reproduces the payload.
#[test]
fn test_headerless_input_falls_back() {
    let original = vec![0x42u8; 90];
    let full = uuencode(&original);

    // Strip "begin ..." so the strict pass refuses
    let body_start = full.iter().position(|&b| b == b'\n').unwrap() + 1;
    let headerless = &full[body_start..];

    let mut report = DecodeReport::new();
    let decoded = decode(headerless, &mut report);

    assert_eq!(report.strategy, Some(Strategy::Lenient));
    assert_eq!(decoded, original);
}
