//! uudecode-verify: decode a uuencoded file and verify the result.
//!
//! Pipeline: read input -> decode (strict, falling back to lenient) ->
//! write output once -> verify the output exists -> stream a SHA-256
//! checksum over it. Decode-format problems never end a run; only
//! I/O-level failures do.

mod config;
mod input_gen;

use std::fs;

use config::Config;
use uudecode_verify_core::checksum;
use uudecode_verify_core::decode::decode;
use uudecode_verify_core::report::DecodeReport;
use uudecode_verify_core::{Error, Result};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    // Make sure there is something to decode. An explicitly named input
    // that is missing stays a fatal I/O error below.
    if config.generate_sample || (!config.input_explicit && !config.input_file.exists()) {
        println!(
            "Generating sample input {} ({} bytes, seed {})",
            config.input_file.display(),
            config.sample_bytes,
            config.seed
        );
        input_gen::write_sample_file(&config.input_file, config.seed, config.sample_bytes)?;
    }

    println!("Decoding uuencoded file...");
    let input = fs::read(&config.input_file)?;

    let mut report = DecodeReport::new();
    let decoded = decode(&input, &mut report);

    if let Some(note) = &report.fallback_note {
        println!("Whole-buffer decode failed ({note}); fell back to line-by-line decode");
    }
    for warning in &report.warnings {
        println!("Warning: could not decode line {}: {}", warning.line_no, warning.reason);
    }

    // Single write at the end; nothing is streamed per line.
    fs::write(&config.output_file, &decoded)?;
    report.complete();

    // Post-decode verification, distinct from ordinary I/O failures.
    if !config.output_file.exists() {
        return Err(Error::MissingOutput(config.output_file.clone()));
    }

    let file_size = fs::metadata(&config.output_file)?.len();
    println!("Decoded file size: {file_size} bytes");

    println!("Calculating checksums...");
    let digest = checksum::file_sha256(&config.output_file)?;
    println!("Decoded file checksum: {digest}");

    if config.print_report {
        report.print_summary();
    }

    println!("Decoding completed successfully!");
    Ok(())
}
