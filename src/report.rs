//! Progress and status lines written to standard output.
//!
//! Output is observational only; nothing here affects control flow.

use std::io::Write;

use colored::Colorize;

pub fn batch_start(stdout: &mut impl Write, index: usize, total: usize) -> std::io::Result<()> {
    writeln!(stdout, "Processing batch {}/{}...", index, total)
}

pub fn read_error(
    stdout: &mut impl Write,
    path: &str,
    err: &impl std::fmt::Display,
) -> std::io::Result<()> {
    let line = format!("Error reading {}: {}", path, err);
    writeln!(stdout, "{}", line.red())
}

pub fn batch_pushed(stdout: &mut impl Write, index: usize) -> std::io::Result<()> {
    let line = format!("Batch {} pushed successfully!", index);
    writeln!(stdout, "{}", line.green())
}

pub fn batch_failed(stdout: &mut impl Write, index: usize, stderr: &str) -> std::io::Result<()> {
    let line = format!("Error pushing batch {}: {}", index, stderr);
    writeln!(stdout, "{}", line.red())
}

pub fn batch_skipped(stdout: &mut impl Write, index: usize) -> std::io::Result<()> {
    let line = format!("Skipping batch {}: no readable files", index);
    writeln!(stdout, "{}", line.yellow())
}

pub fn finished(stdout: &mut impl Write) -> std::io::Result<()> {
    writeln!(stdout, "All batches processed!")
}
