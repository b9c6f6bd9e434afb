//! Display functions for a solve run

use super::formatters::{RULE_WIDTH, group_digits};
use crate::core::TileSequence;
use crate::solver::{SolveConfig, SolveReport};
use colored::Colorize;

/// Print the run header: rack, mode and filters
pub fn print_header(rack: &TileSequence, config: &SolveConfig) {
    println!(
        "Input: {} ({} length, {} blanks)",
        rack.to_string().bright_yellow().bold(),
        rack.len(),
        rack.wildcard_count()
    );
    println!("Running in {} mode", config.mode().bright_cyan());
    println!(
        "Outputting matches of {} length or greater",
        config.min_characters
    );
    println!("Outputting matches of pattern: {}", config.pattern);
    println!("{}", "─".repeat(RULE_WIDTH).cyan());
}

/// Print the closing summary after the solution stream
pub fn print_summary(report: &SolveReport, rack: &TileSequence) {
    println!("{}", "─".repeat(RULE_WIDTH).cyan());
    let (found, processed) = summary_lines(report, rack);
    println!("{}", found.green().bold());
    println!("{processed}");
    println!(
        "{}",
        format!("Time taken: {:.2}s", report.elapsed.as_secs_f64()).bright_black()
    );
}

/// Summary text without styling
#[must_use]
pub fn summary_lines(report: &SolveReport, rack: &TileSequence) -> (String, String) {
    let found = format!(
        "Found {} solutions for {rack}",
        group_digits(report.solutions.len() as u64)
    );
    let processed = format!("Processed {} permutations", group_digits(report.processed));
    (found, processed)
}
