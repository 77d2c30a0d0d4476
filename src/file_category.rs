/// File categorization by extension.
///
/// This module maps file extensions to broad categories (Images, Documents,
/// Videos, Audio, Archives) used as subdirectory names during organization.
/// The table is fixed: it is built once and never mutated at run time.
///
/// # Examples
///
/// ```
/// use downsort::file_category::{Category, CategoryMap};
///
/// let map = CategoryMap::default();
/// assert_eq!(map.categorize("photo.png"), Category::Images);
/// assert_eq!(map.categorize("report.PDF"), Category::Documents);
/// assert_eq!(map.categorize("README"), Category::Others);
/// ```
use std::collections::HashMap;
use std::path::Path;

/// Represents a broad file category.
///
/// Each category corresponds to one subdirectory created under the
/// organized folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Image files (PNG, JPG, GIF, etc.)
    Images,
    /// Document files (PDF, DOCX, TXT, etc.)
    Documents,
    /// Video files (MP4, MKV, AVI, etc.)
    Videos,
    /// Audio files (MP3, WAV, FLAC, etc.)
    Audio,
    /// Archive files (ZIP, RAR, 7Z, etc.)
    Archives,
    /// Files with no extension or an unrecognized one.
    Others,
}

impl Category {
    /// All categories in declaration order. This order is used both for
    /// building the extension table (first insertion wins on duplicates)
    /// and for rendering summaries, so output is deterministic.
    pub const ALL: [Category; 6] = [
        Category::Images,
        Category::Documents,
        Category::Videos,
        Category::Audio,
        Category::Archives,
        Category::Others,
    ];

    /// Returns the subdirectory name for this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use downsort::file_category::Category;
    ///
    /// assert_eq!(Category::Images.dir_name(), "Images");
    /// assert_eq!(Category::Others.dir_name(), "Others");
    /// ```
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Images => "Images",
            Category::Documents => "Documents",
            Category::Videos => "Videos",
            Category::Audio => "Audio",
            Category::Archives => "Archives",
            Category::Others => "Others",
        }
    }
}

/// Maps file extensions to categories.
///
/// Lookups are case-insensitive; extensions are stored lowercase without
/// the leading dot, matching what `Path::extension` yields.
#[derive(Debug, Clone)]
pub struct CategoryMap {
    extension_map: HashMap<String, Category>,
}

impl CategoryMap {
    /// Creates a new `CategoryMap` with the standard extension table.
    pub fn new() -> Self {
        let mut map = Self {
            extension_map: HashMap::new(),
        };
        map.populate_standard_mappings();
        map
    }

    fn populate_standard_mappings(&mut self) {
        // Image extensions
        self.add("jpg", Category::Images);
        self.add("jpeg", Category::Images);
        self.add("png", Category::Images);
        self.add("gif", Category::Images);
        self.add("bmp", Category::Images);
        self.add("svg", Category::Images);
        self.add("webp", Category::Images);

        // Document extensions
        self.add("pdf", Category::Documents);
        self.add("doc", Category::Documents);
        self.add("docx", Category::Documents);
        self.add("txt", Category::Documents);
        self.add("ppt", Category::Documents);
        self.add("xls", Category::Documents);
        self.add("xlsx", Category::Documents);

        // Video extensions
        self.add("mp4", Category::Videos);
        self.add("mkv", Category::Videos);
        self.add("avi", Category::Videos);
        self.add("mov", Category::Videos);
        self.add("webm", Category::Videos);

        // Audio extensions
        self.add("mp3", Category::Audio);
        self.add("wav", Category::Audio);
        self.add("m4a", Category::Audio);
        self.add("flac", Category::Audio);

        // Archive extensions
        self.add("zip", Category::Archives);
        self.add("rar", Category::Archives);
        self.add("7z", Category::Archives);
        self.add("tar", Category::Archives);
        self.add("gz", Category::Archives);
    }

    /// Inserts an extension mapping. Entries are added in category
    /// declaration order and the first insertion wins, so a duplicate
    /// extension cannot silently reassign an earlier category.
    fn add(&mut self, ext: &str, category: Category) {
        self.extension_map
            .entry(ext.to_lowercase())
            .or_insert(category);
    }

    /// Maps a bare file extension to a category.
    ///
    /// # Examples
    ///
    /// ```
    /// use downsort::file_category::{Category, CategoryMap};
    ///
    /// let map = CategoryMap::default();
    /// assert_eq!(map.extension_to_category("pdf"), Some(Category::Documents));
    /// assert_eq!(map.extension_to_category("PNG"), Some(Category::Images));
    /// assert_eq!(map.extension_to_category("xyz"), None);
    /// ```
    pub fn extension_to_category(&self, ext: &str) -> Option<Category> {
        self.extension_map.get(&ext.to_lowercase()).copied()
    }

    /// Determines the category for a filename.
    ///
    /// Only the final dot-suffix is considered (`backup.tar.gz` matches on
    /// `gz`). Filenames with no extension, dotfiles, unknown extensions,
    /// and the empty string all map to `Category::Others`.
    ///
    /// # Examples
    ///
    /// ```
    /// use downsort::file_category::{Category, CategoryMap};
    ///
    /// let map = CategoryMap::default();
    /// assert_eq!(map.categorize("song.mp3"), Category::Audio);
    /// assert_eq!(map.categorize("backup.tar.gz"), Category::Archives);
    /// assert_eq!(map.categorize(""), Category::Others);
    /// ```
    pub fn categorize(&self, filename: &str) -> Category {
        Path::new(filename)
            .extension()
            .and_then(|ext| self.extension_to_category(&ext.to_string_lossy()))
            .unwrap_or(Category::Others)
    }
}

impl Default for CategoryMap {
    fn default() -> Self {
        Self::new()
    }
}
