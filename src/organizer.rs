/// Single-pass file organization over a flat directory.
///
/// This module enumerates the regular files of a directory once, classifies
/// each by extension, creates the category subdirectory on first use, and
/// moves the file under a collision-free name. Each file is an independent
/// unit of work: a failure on one file is recorded and the run continues.
use crate::file_category::{Category, CategoryMap};
use crate::name_resolver;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Whole-run failures. These abort the run before any file is moved.
#[derive(Debug)]
pub enum OrganizeError {
    /// The folder path does not exist.
    NotFound { path: PathBuf },
    /// The folder path exists but is not a directory.
    NotADirectory { path: PathBuf },
    /// The directory listing could not be read.
    AccessDenied { path: PathBuf, source: io::Error },
}

impl std::fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "Folder '{}' does not exist", path.display())
            }
            Self::NotADirectory { path } => {
                write!(f, "'{}' is not a directory", path.display())
            }
            Self::AccessDenied { path, source } => {
                write!(f, "Cannot read directory '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for OrganizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AccessDenied { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type for whole-run organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Per-file failures. These skip the affected file and never abort the run.
#[derive(Debug)]
pub enum MoveError {
    /// Failed to create a category directory.
    DirectoryCreationFailed {
        path: PathBuf,
        source: io::Error,
    },
    /// Failed to move a file to its category directory.
    FileMoveFailed {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::FileMoveFailed { from, to, source } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    from.display(),
                    to.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DirectoryCreationFailed { source, .. } => Some(source),
            Self::FileMoveFailed { source, .. } => Some(source),
        }
    }
}

/// Per-category counts of files moved during one run.
///
/// Every category is present from the start with a zero count, so an empty
/// run is distinguishable from a failed one by the all-zero stats it
/// returns.
#[derive(Debug, Clone)]
pub struct OrganizeStats {
    counts: HashMap<Category, usize>,
}

impl OrganizeStats {
    /// Creates stats with every category initialized to zero.
    pub fn new() -> Self {
        let mut counts = HashMap::new();
        for category in Category::ALL {
            counts.insert(category, 0);
        }
        Self { counts }
    }

    /// Returns the number of files moved into `category`.
    pub fn count(&self, category: Category) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    pub(crate) fn increment(&mut self, category: Category) {
        *self.counts.entry(category).or_insert(0) += 1;
    }

    /// Returns the total number of files moved across all categories.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Returns true when no file was moved into any category.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl Default for OrganizeStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Records a single successful file move.
#[derive(Debug, Clone)]
pub struct MoveRecord {
    /// The filename at its original location.
    pub original_name: String,
    /// The filename inside the category directory, possibly suffixed.
    pub new_name: String,
    /// The category the file was moved into.
    pub category: Category,
}

/// Outcome of processing one directory entry.
#[derive(Debug)]
pub enum MoveOutcome {
    /// The file was moved into its category directory.
    Moved(MoveRecord),
    /// The file was left in place after a local I/O failure.
    Skipped { name: String, error: MoveError },
}

/// The complete result of one organization run.
#[derive(Debug)]
pub struct OrganizeReport {
    /// Per-category counts of successful moves.
    pub stats: OrganizeStats,
    /// Per-file outcomes in processing order.
    pub outcomes: Vec<MoveOutcome>,
}

impl OrganizeReport {
    /// Returns the number of files that were skipped due to errors.
    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, MoveOutcome::Skipped { .. }))
            .count()
    }
}

/// Organizes files by moving them into category subdirectories.
pub struct Organizer;

impl Organizer {
    /// Organizes all regular files directly under `base_path`.
    ///
    /// The directory listing is snapshotted up front; entries that are not
    /// regular files (including category subdirectories from earlier runs)
    /// are skipped. Category directories are created lazily on first use,
    /// so a run that moves nothing creates nothing.
    ///
    /// # Errors
    ///
    /// Returns an [`OrganizeError`] when the folder is missing, is not a
    /// directory, or its listing cannot be read. Per-file I/O failures do
    /// not abort the run; they appear as [`MoveOutcome::Skipped`] entries
    /// in the report.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use downsort::organizer::Organizer;
    /// use std::path::Path;
    ///
    /// match Organizer::organize(Path::new("/home/user/Downloads")) {
    ///     Ok(report) => println!("Moved {} files", report.stats.total()),
    ///     Err(e) => eprintln!("Error: {}", e),
    /// }
    /// ```
    pub fn organize(base_path: &Path) -> OrganizeResult<OrganizeReport> {
        Self::organize_with(base_path, |_| {})
    }

    /// Like [`Organizer::organize`], invoking `observer` with each per-file
    /// outcome as it happens. Used by the CLI for live progress lines.
    pub fn organize_with(
        base_path: &Path,
        mut observer: impl FnMut(&MoveOutcome),
    ) -> OrganizeResult<OrganizeReport> {
        let file_names = Self::snapshot_files(base_path)?;
        let map = CategoryMap::default();

        let mut stats = OrganizeStats::new();
        let mut outcomes = Vec::with_capacity(file_names.len());

        for name in file_names {
            let outcome = match Self::move_file(base_path, &map, &name) {
                Ok(record) => {
                    stats.increment(record.category);
                    MoveOutcome::Moved(record)
                }
                Err(error) => MoveOutcome::Skipped { name, error },
            };
            observer(&outcome);
            outcomes.push(outcome);
        }

        Ok(OrganizeReport { stats, outcomes })
    }

    /// Validates the base path and returns the names of its regular files,
    /// in filesystem enumeration order.
    fn snapshot_files(base_path: &Path) -> OrganizeResult<Vec<String>> {
        let metadata = fs::metadata(base_path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => OrganizeError::NotFound {
                path: base_path.to_path_buf(),
            },
            _ => OrganizeError::AccessDenied {
                path: base_path.to_path_buf(),
                source: e,
            },
        })?;

        if !metadata.is_dir() {
            return Err(OrganizeError::NotADirectory {
                path: base_path.to_path_buf(),
            });
        }

        let entries = fs::read_dir(base_path).map_err(|e| OrganizeError::AccessDenied {
            path: base_path.to_path_buf(),
            source: e,
        })?;

        let mut file_names = Vec::new();
        for entry in entries.flatten() {
            if let Ok(file_type) = entry.file_type()
                && file_type.is_file()
            {
                file_names.push(entry.file_name().to_string_lossy().to_string());
            }
        }

        Ok(file_names)
    }

    /// Moves one file into its category directory under `base_path`.
    fn move_file(
        base_path: &Path,
        map: &CategoryMap,
        file_name: &str,
    ) -> Result<MoveRecord, MoveError> {
        let category = map.categorize(file_name);
        let category_path = base_path.join(category.dir_name());

        // Existence-check-then-create is not atomic; concurrent runs on
        // the same folder are unsupported.
        if !category_path.exists() {
            fs::create_dir(&category_path).map_err(|e| MoveError::DirectoryCreationFailed {
                path: category_path.clone(),
                source: e,
            })?;
        }

        let unique_name = name_resolver::resolve(&category_path, file_name);
        let destination = category_path.join(&unique_name);
        let origin = base_path.join(file_name);

        fs::rename(&origin, &destination).map_err(|e| MoveError::FileMoveFailed {
            from: origin,
            to: destination,
            source: e,
        })?;

        Ok(MoveRecord {
            original_name: file_name.to_string(),
            new_name: unique_name,
            category,
        })
    }
}
