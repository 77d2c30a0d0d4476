//! downsort - organize a folder's files into category subdirectories
//!
//! This library classifies files by extension (Images, Documents, Videos,
//! Audio, Archives, Others), resolves destination-name collisions with
//! numeric suffixes, and moves each file into its category subdirectory
//! in a single pass with per-file error isolation.

pub mod cli;
pub mod file_category;
pub mod name_resolver;
pub mod organizer;
pub mod output;

pub use file_category::{Category, CategoryMap};
pub use organizer::{
    MoveError, MoveOutcome, MoveRecord, OrganizeError, OrganizeReport, OrganizeStats, Organizer,
};

pub use cli::{Cli, run_cli};
