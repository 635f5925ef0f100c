// src/constants.rs

/// Name baked into the automation template that gets rebranded.
pub const DEFAULT_TARGET_PATTERN: &str = "AD_GI_EstadisticasPrestacionesEconomicas";

/// Spreadsheet extensions (lowercase, no dot) that are never opened as text.
pub const DEFAULT_EXEMPT_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls"];

/// Extension appended to the replacement name for the output archive.
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Rule printed after the status lines of a report.
pub const REPORT_RULE: &str =
    "================================================================================";

/// First message of every run that got past extraction.
pub const EXTRACTED_MESSAGE: &str = "Files extracted successfully.";

/// Shown by both adapters when an input is missing.
pub const MISSING_FIELDS_MESSAGE: &str = "Error: All the fields are required.";
