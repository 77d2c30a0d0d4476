//! Command-line interface module for downsort.
//!
//! Handles argument parsing, the interactive folder prompt, and the
//! orchestration of the organizer and the output formatting.

use crate::organizer::{MoveOutcome, OrganizeError, Organizer};
use crate::output::{self, OutputFormatter};
use clap::Parser;
use colored::*;
use dialoguer::Input;
use std::path::{Path, PathBuf};

/// Organize the files in a directory into category subfolders.
#[derive(Parser, Debug)]
#[command(name = "downsort", version, about)]
pub struct Cli {
    /// Directory to organize. Prompts for a path when omitted.
    pub path: Option<PathBuf>,
}

/// Returns the user's Downloads folder, the conventional default target.
///
/// Falls back to `~/Downloads` when the platform has no dedicated
/// downloads directory, and to the current directory as a last resort.
pub fn downloads_folder() -> PathBuf {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Prompts for the folder to organize, defaulting to the Downloads folder.
pub fn prompt_for_folder() -> Result<PathBuf, dialoguer::Error> {
    let default = downloads_folder().display().to_string();
    let path: String = Input::new()
        .with_prompt("Folder to organize")
        .default(default)
        .interact_text()?;
    Ok(PathBuf::from(path.trim()))
}

/// Runs one organization pass over `dir_path` and prints the results.
///
/// Progress lines are emitted per file as the organizer reports outcomes;
/// the summary and the skipped-file tally follow once the run completes.
///
/// # Examples
///
/// ```no_run
/// use downsort::cli::run_cli;
/// use std::path::Path;
///
/// if let Err(e) = run_cli(Path::new("/home/user/Downloads")) {
///     eprintln!("Error: {}", e);
/// }
/// ```
pub fn run_cli(dir_path: &Path) -> Result<(), OrganizeError> {
    OutputFormatter::info(&format!("Organizing files in: {}", dir_path.display()));

    let spinner = OutputFormatter::create_spinner();
    let report = Organizer::organize_with(dir_path, |outcome| match outcome {
        MoveOutcome::Moved(record) => {
            spinner.println(format!(
                "{} {} → {}",
                "✓".green(),
                output::display_name(&record.original_name),
                record.category.dir_name()
            ));
        }
        MoveOutcome::Skipped { name, error } => {
            spinner.println(format!(
                "{} {}: {}",
                "✗".red(),
                output::display_name(name),
                error
            ));
        }
    });
    spinner.finish_and_clear();
    let report = report?;

    OutputFormatter::header("Organization complete!");
    OutputFormatter::plain(&output::summarize(&report.stats));

    let skipped = report.skipped_count();
    if skipped > 0 {
        OutputFormatter::error(&format!(
            "{} {} could not be moved and {} left in place.",
            skipped,
            if skipped == 1 { "file" } else { "files" },
            if skipped == 1 { "was" } else { "were" }
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_path_argument() {
        let cli = Cli::parse_from(["downsort", "/tmp/downloads"]);
        assert_eq!(cli.path, Some(PathBuf::from("/tmp/downloads")));
    }

    #[test]
    fn test_cli_path_is_optional() {
        let cli = Cli::parse_from(["downsort"]);
        assert_eq!(cli.path, None);
    }

    #[test]
    fn test_downloads_folder_is_never_empty() {
        let folder = downloads_folder();
        assert!(!folder.as_os_str().is_empty());
    }
}
