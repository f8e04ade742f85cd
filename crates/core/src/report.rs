//! Per-run decode reporting.
//!
//! This module provides observable insights into a decode run:
//! - Which strategy produced the output (strict or lenient fallback)
//! - Line-level statistics from the lenient walk
//! - Warnings for lines that were dropped
//! - Timing information
//!
//! # Design
//!
//! The report is a plain struct with explicit updates from each decode
//! stage. The system is single-threaded, so no synchronization is needed.

use std::time::{Duration, Instant};

use crate::error::Error;

/// Which decode strategy produced the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Whole-buffer strict decode succeeded
    Strict,
    /// Strict decode failed; output came from the line-by-line fallback
    Lenient,
}

/// A dropped line, with the reason it could not be decoded.
#[derive(Debug, Clone)]
pub struct LineWarning {
    /// 1-based line number in the input
    pub line_no: usize,
    /// Human-readable failure reason
    pub reason: String,
}

/// Statistics and diagnostics for a single decode run.
#[derive(Debug, Clone)]
pub struct DecodeReport {
    // === Timing ===
    /// When the decode started
    pub start_time: Instant,

    /// When the decode ended (set on completion)
    pub end_time: Option<Instant>,

    // === Outcome ===
    /// Strategy that produced the output (None until the dispatcher runs)
    pub strategy: Option<Strategy>,

    /// Why the strict decode was abandoned, if it was
    pub fallback_note: Option<String>,

    /// Total decoded output bytes
    pub decoded_bytes: u64,

    // === Line statistics (lenient walk only) ===
    /// Lines seen in total
    pub lines_total: u64,

    /// Data lines decoded successfully
    pub lines_data: u64,

    /// `begin` header lines skipped
    pub lines_header: u64,

    /// `end` footer lines skipped
    pub lines_footer: u64,

    /// Blank or whitespace-only lines skipped
    pub lines_blank: u64,

    /// Lines whose first byte was outside [32, 96]
    pub lines_not_data: u64,

    /// Zero-length (`` ` ``) lines
    pub lines_zero_length: u64,

    /// Data lines dropped after a decode failure
    pub lines_failed: u64,

    // === Warnings ===
    /// One entry per dropped data line
    pub warnings: Vec<LineWarning>,
}

impl DecodeReport {
    /// Create a new report with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            strategy: None,
            fallback_note: None,
            decoded_bytes: 0,
            lines_total: 0,
            lines_data: 0,
            lines_header: 0,
            lines_footer: 0,
            lines_blank: 0,
            lines_not_data: 0,
            lines_zero_length: 0,
            lines_failed: 0,
            warnings: Vec::new(),
        }
    }

    /// Mark the run as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Record a dropped line.
    pub fn push_warning(&mut self, line_no: usize, err: &Error) {
        self.warnings.push(LineWarning {
            line_no,
            reason: err.to_string(),
        });
    }

    /// Fraction of seen lines that were skipped or dropped.
    ///
    /// Returns 0.0 before any lines are seen (including strict-path runs,
    /// which never walk lines).
    pub fn skip_rate(&self) -> f64 {
        if self.lines_total == 0 {
            0.0
        } else {
            let skipped = self.lines_total - self.lines_data;
            skipped as f64 / self.lines_total as f64
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Decode Summary ===");
        println!("Duration: {} ms", self.duration().as_millis());
        println!(
            "Strategy: {}",
            match self.strategy {
                Some(Strategy::Strict) => "strict (whole buffer)",
                Some(Strategy::Lenient) => "lenient (line-by-line fallback)",
                None => "(not run)",
            }
        );
        if let Some(note) = &self.fallback_note {
            println!("Fallback reason: {note}");
        }
        println!("Decoded bytes: {}", self.decoded_bytes);
        println!();

        if self.strategy == Some(Strategy::Lenient) {
            println!("=== Lines ===");
            println!("Total: {}", self.lines_total);
            println!("Data decoded: {}", self.lines_data);
            println!("Header: {}", self.lines_header);
            println!("Footer: {}", self.lines_footer);
            println!("Blank: {}", self.lines_blank);
            println!("Not data: {}", self.lines_not_data);
            println!("Zero length: {}", self.lines_zero_length);
            println!("Failed: {}", self.lines_failed);
            println!("Skip rate: {:.1}%", self.skip_rate() * 100.0);
            println!();
        }

        if !self.warnings.is_empty() {
            println!("=== Warnings ===");
            for warning in &self.warnings {
                println!("line {}: {}", warning.line_no, warning.reason);
            }
            println!();
        }
    }

    /// Export the report as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_ms={}\n\
             strategy={}\n\
             decoded_bytes={}\n\
             lines_total={}\n\
             lines_data={}\n\
             lines_failed={}\n\
             warnings={}\n\
             skip_rate={:.4}\n",
            self.duration().as_millis(),
            match self.strategy {
                Some(Strategy::Strict) => "strict",
                Some(Strategy::Lenient) => "lenient",
                None => "none",
            },
            self.decoded_bytes,
            self.lines_total,
            self.lines_data,
            self.lines_failed,
            self.warnings.len(),
            self.skip_rate(),
        )
    }
}

impl Default for DecodeReport {
    fn default() -> Self {
        Self::new()
    }
}
