//! Defines the `JobConfig` struct and the rewrite rules it carries.
//!
//! This module consolidates the four inputs of a run and the pattern settings,
//! making them available to the pipeline in a structured and validated form.
//! Both the console and the form adapter build a `JobConfig` through
//! [`ConfigBuilder`], so validation happens in one place and before any I/O.

use crate::constants::{DEFAULT_EXEMPT_EXTENSIONS, DEFAULT_TARGET_PATTERN};
use std::path::{Path, PathBuf};

pub use builder::ConfigBuilder;
mod builder;
mod parsing;

pub(crate) use parsing::normalize_extension;

/// What to search for and which files must never be opened as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRules {
    /// The literal substring being replaced. Never empty.
    pub pattern: String,
    /// Extensions (lowercase, trimmed, without the dot) whose files are skipped
    /// by the content pass.
    pub exempt_extensions: Vec<String>,
}

impl RewriteRules {
    /// Creates rules for a custom pattern with the default spreadsheet exemptions.
    pub fn with_pattern(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            ..Self::default()
        }
    }

    /// Returns `true` if the file's extension is in the exempt set.
    ///
    /// The extension is trimmed and lower-cased before comparison, so
    /// `Book.XLSX` and `book.xlsx ` are both exempt.
    ///
    /// ```
    /// use template_rebrand::config::RewriteRules;
    /// use std::path::Path;
    ///
    /// let rules = RewriteRules::default();
    /// assert!(rules.is_exempt(Path::new("data/Report.XLSX")));
    /// assert!(!rules.is_exempt(Path::new("data/notes.txt")));
    /// assert!(!rules.is_exempt(Path::new("Makefile")));
    /// ```
    pub fn is_exempt(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| normalize_extension(&ext.to_string_lossy()))
            .is_some_and(|ext| self.exempt_extensions.iter().any(|e| *e == ext))
    }
}

impl Default for RewriteRules {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_TARGET_PATTERN.to_string(),
            exempt_extensions: DEFAULT_EXEMPT_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Holds all the settings of a single run, validated and ready to use.
#[derive(Debug, Clone)]
pub struct JobConfig {
    /// Folder the template is extracted into and rewritten in place. Created if absent.
    pub extraction_dir: PathBuf,
    /// The template archive. Must exist.
    pub template_archive: PathBuf,
    /// Replacement for every occurrence of the pattern. Also the output archive's base name.
    pub replacement: String,
    /// Folder that receives `<replacement>.zip`. Must be writable.
    pub destination_dir: PathBuf,
    /// Pattern and exemption settings.
    pub rules: RewriteRules,
}
