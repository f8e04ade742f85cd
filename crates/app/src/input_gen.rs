//! Sample input generation for zero-argument runs.
//!
//! When the input file is missing (or regeneration is requested), we build
//! a payload of seeded random data and uuencode it so the tool always has
//! something real to decode and verify. The encoder lives here, in the
//! app, as fixture tooling only: the core library is decode-only.
//!
//! # Design
//!
//! Generated payloads mix byte distributions (runs, text-like data, random
//! bytes) so decoded output is not trivially uniform and size/checksum
//! verification is meaningful.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::Write;
use std::path::Path;

/// Bytes per uuencoded line, the classic maximum.
const LINE_BYTES: usize = 45;

/// Generate a sample payload with mixed byte distributions.
pub fn generate_sample_data(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);

    let mut remaining = size_bytes;
    while remaining > 0 {
        let chunk_size = remaining.min(2048);
        let chunk_type: u8 = rng.gen_range(0..10);

        match chunk_type {
            // 30% runs of one byte
            0..=2 => {
                let byte_value: u8 = rng.gen();
                data.extend(std::iter::repeat(byte_value).take(chunk_size));
            }

            // 40% text-like data from a limited alphabet
            3..=6 => {
                let alphabet = b"abcdefghijklmnopqrstuvwxyz .!,\n";
                for _ in 0..chunk_size {
                    let idx = rng.gen_range(0..alphabet.len());
                    data.push(alphabet[idx]);
                }
            }

            // 30% random bytes
            _ => {
                for _ in 0..chunk_size {
                    data.push(rng.gen());
                }
            }
        }

        remaining = remaining.saturating_sub(chunk_size);
    }

    data.truncate(size_bytes);
    data
}

/// Map a 6-bit value to its uuencode character, backtick for zero.
fn encode_char(v: u8) -> u8 {
    if v == 0 {
        b'`'
    } else {
        v + 32
    }
}

/// Uuencode a payload into the classic on-disk format.
///
/// Produces `begin <mode> <name>`, 45-byte data lines, the backtick
/// terminator line, and `end`.
pub fn uuencode(data: &[u8], mode: &str, name: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() * 4 / 3 + 64);
    out.extend_from_slice(format!("begin {mode} {name}\n").as_bytes());

    for chunk in data.chunks(LINE_BYTES) {
        out.push(encode_char(chunk.len() as u8));

        for group in chunk.chunks(3) {
            let mut acc: u32 = 0;
            for (i, &b) in group.iter().enumerate() {
                acc |= u32::from(b) << (16 - 8 * i);
            }
            for i in 0..4 {
                out.push(encode_char(((acc >> (18 - 6 * i)) & 63) as u8));
            }
        }

        out.push(b'\n');
    }

    out.extend_from_slice(b"`\nend\n");
    out
}

/// Generate a payload and write its uuencoded form to `path`.
///
/// Returns the raw payload so the caller can verify the decode against it.
pub fn write_sample_file(
    path: &Path,
    seed: u64,
    size_bytes: usize,
) -> std::io::Result<Vec<u8>> {
    let data = generate_sample_data(seed, size_bytes);
    let encoded = uuencode(&data, "644", "sample.bin");

    let mut file = std::fs::File::create(path)?;
    file.write_all(&encoded)?;
    Ok(data)
}
