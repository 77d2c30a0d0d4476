//! Output formatting and styling module.
//!
//! Provides a centralized interface for all CLI output: colored status
//! lines, a spinner for long runs, and the end-of-run summary text. The
//! summary is built as a plain string so it can be tested without
//! capturing stdout.

use crate::file_category::Category;
use crate::organizer::OrganizeStats;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Longest filename shown in a progress line before truncation.
const MAX_DISPLAY_NAME: usize = 40;

/// Builds the end-of-run summary text from the per-category stats.
///
/// One line per category with a nonzero count, in category declaration
/// order, followed by a blank line and a total. All-zero stats yield a
/// single `No files were moved.` line.
///
/// # Examples
///
/// ```
/// use downsort::organizer::OrganizeStats;
/// use downsort::output::summarize;
///
/// let stats = OrganizeStats::new();
/// assert_eq!(summarize(&stats), "No files were moved.");
/// ```
pub fn summarize(stats: &OrganizeStats) -> String {
    if stats.is_empty() {
        return "No files were moved.".to_string();
    }

    let mut lines = Vec::new();
    for category in Category::ALL {
        let count = stats.count(category);
        if count == 0 {
            continue;
        }
        let file_word = if count == 1 { "file" } else { "files" };
        lines.push(format!(
            "Moved {} {} to {}",
            count,
            file_word,
            category.dir_name()
        ));
    }
    lines.push(String::new());
    lines.push(format!("Total: {} files organized", stats.total()));
    lines.join("\n")
}

/// Shortens a filename for display, keeping progress lines one row wide.
pub fn display_name(name: &str) -> String {
    if name.chars().count() > MAX_DISPLAY_NAME {
        let truncated: String = name.chars().take(MAX_DISPLAY_NAME - 3).collect();
        format!("{}...", truncated)
    } else {
        name.to_string()
    }
}

/// Manages all CLI output with consistent styling and formatting.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints an error message in red with an X mark.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a regular message without styling.
    pub fn plain(message: &str) {
        println!("{}", message);
    }

    /// Prints a section header.
    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    /// Creates a spinner that ticks while files are being processed.
    ///
    /// Status lines are printed through [`ProgressBar::println`] so they
    /// land above the spinner instead of being overwritten by it.
    pub fn create_spinner() -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("Invalid spinner template"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}
