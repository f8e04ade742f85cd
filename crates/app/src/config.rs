//! Configuration for the uudecode-verify application.
//!
//! Handles parsing command-line arguments and generating sensible defaults.
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: if the default input file does
//! not exist, a sample uuencoded file is generated (seeded, reproducible)
//! so there is always something to decode and verify.

use std::path::PathBuf;

/// Complete configuration for a decode-and-verify run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Files ===
    /// Input uuencoded file path
    pub input_file: PathBuf,

    /// Whether the input path came from --in (a missing explicit input is
    /// a fatal I/O error, not a cue to generate a sample)
    pub input_explicit: bool,

    /// Output file path for the decoded bytes
    pub output_file: PathBuf,

    // === Sample generation ===
    /// Seed for sample generation (explicit or time-based)
    pub seed: u64,

    /// Generate a sample input even if the input file exists
    pub generate_sample: bool,

    /// Size of the generated sample payload in bytes
    pub sample_bytes: usize,

    // === Behavior ===
    /// Whether to print the resolved configuration
    pub print_config: bool,

    /// Whether to print the decode report summary
    pub print_report: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// The output path defaults to the input path with `.res` appended,
    /// matching the decoded-result naming convention of the format's era.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut input_file: Option<PathBuf> = None;
        let mut output_file: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut generate_sample = false;
        let mut sample_bytes: Option<usize> = None;
        let mut print_config = false;
        let mut print_report = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a path".to_string());
                    }
                    output_file = Some(PathBuf::from(&args[i]));
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--generate-sample" => {
                    generate_sample = true;
                }
                "--sample-bytes" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-bytes requires a number".to_string());
                    }
                    sample_bytes = Some(args[i].parse().map_err(|_| "invalid sample-bytes")?);
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-report" => {
                    print_report = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or(0)
        });

        let input_explicit = input_file.is_some();
        let input_file = input_file.unwrap_or_else(|| PathBuf::from("version.uu"));
        let output_file = output_file.unwrap_or_else(|| {
            let mut name = input_file.clone().into_os_string();
            name.push(".res");
            PathBuf::from(name)
        });

        Ok(Config {
            input_file,
            input_explicit,
            output_file,
            seed,
            generate_sample,
            sample_bytes: sample_bytes.unwrap_or(8192),
            print_config,
            print_report,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Input file:  {}", self.input_file.display());
        println!("Output file: {}", self.output_file.display());
        println!();
        println!("Seed: {}", self.seed);
        println!("Generate sample: {}", self.generate_sample);
        println!("Sample size: {} bytes", self.sample_bytes);
        println!();
    }
}

fn print_help() {
    println!("uudecode-verify: decode a uuencoded file and verify it with SHA-256");
    println!();
    println!("USAGE:");
    println!("    uudecode-verify [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>           Input uuencoded file (default: version.uu)");
    println!("    --out <PATH>          Output file (default: <input>.res)");
    println!();
    println!("    --seed <N>            Seed for sample generation");
    println!("    --generate-sample     Regenerate the sample input file");
    println!("    --sample-bytes <N>    Sample payload size (default: 8192)");
    println!();
    println!("    --print-config        Print resolved configuration");
    println!("    --no-report           Don't print the decode report summary");
    println!("    --help, -h            Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    uudecode-verify                         # Decode version.uu (generated if absent)");
    println!("    uudecode-verify --in file.uu            # Decode a specific file");
    println!("    uudecode-verify --seed 42 --generate-sample   # Reproducible sample run");
    println!();
}
