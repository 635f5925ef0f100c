// src/config/builder.rs

use super::parsing::{non_blank, normalize_extensions};
use super::{JobConfig, RewriteRules};
use crate::cli::RunArgs;
use crate::errors::{ConfigError, Result};
use std::path::PathBuf;

/// A builder for creating a `JobConfig` programmatically.
///
/// Every input is optional while building; `build` rejects missing or blank
/// values before any filesystem access happens. Text inputs are trimmed.
///
/// # Examples
///
/// ```
/// use template_rebrand::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .extraction_dir("/tmp/work")
///     .template_archive("/tmp/template.zip")
///     .replacement(" MiProceso ")
///     .destination_dir("/tmp/out")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.replacement, "MiProceso");
/// assert_eq!(config.rules.pattern, "AD_GI_EstadisticasPrestacionesEconomicas");
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    extraction_dir: Option<String>,
    template_archive: Option<String>,
    replacement: Option<String>,
    destination_dir: Option<String>,
    pattern: Option<String>,
    exempt_extensions: Option<Vec<String>>,
}

impl ConfigBuilder {
    /// Creates a new builder with every input unset and the default rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated from the command-line arguments.
    pub fn from_cli(args: RunArgs) -> Self {
        Self {
            extraction_dir: args.extract_dir,
            template_archive: args.template,
            replacement: args.name,
            destination_dir: args.dest,
            ..Self::default()
        }
    }

    /// Sets the folder the template is extracted into.
    pub fn extraction_dir(mut self, path: impl Into<String>) -> Self {
        self.extraction_dir = Some(path.into());
        self
    }

    /// Sets the path of the template archive.
    pub fn template_archive(mut self, path: impl Into<String>) -> Self {
        self.template_archive = Some(path.into());
        self
    }

    /// Sets the replacement name.
    pub fn replacement(mut self, name: impl Into<String>) -> Self {
        self.replacement = Some(name.into());
        self
    }

    /// Sets the folder that receives the output archive.
    pub fn destination_dir(mut self, path: impl Into<String>) -> Self {
        self.destination_dir = Some(path.into());
        self
    }

    /// Overrides the target pattern. Library use only; the adapters keep the default.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Overrides the exempt extension set.
    pub fn exempt_extensions(mut self, exts: Vec<String>) -> Self {
        self.exempt_extensions = Some(exts);
        self
    }

    /// Returns the name of the first required input that is missing or blank.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("extraction folder", &self.extraction_dir),
            ("template archive", &self.template_archive),
            ("process name", &self.replacement),
            ("destination folder", &self.destination_dir),
        ]
        .into_iter()
        .find(|(_, value)| value.as_deref().map_or(true, |v| v.trim().is_empty()))
        .map(|(name, _)| name)
    }

    /// Validates the inputs and builds the final `JobConfig`.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingField` if any of the four inputs is missing or
    /// blank, and `ConfigError::InvalidValue` if the pattern override is empty.
    pub fn build(self) -> Result<JobConfig> {
        if let Some(field) = self.missing_field() {
            return Err(ConfigError::MissingField(field).into());
        }

        let mut rules = RewriteRules::default();
        if let Some(pattern) = self.pattern {
            // The pattern is matched literally; surrounding spaces are significant.
            if pattern.is_empty() {
                return Err(ConfigError::InvalidValue {
                    option: "pattern",
                    reason: "must not be empty".to_string(),
                }
                .into());
            }
            rules.pattern = pattern;
        }
        if let Some(exts) = self.exempt_extensions {
            rules.exempt_extensions = normalize_extensions(exts);
        }

        // `missing_field` already guaranteed these are present and non-blank.
        let field = |value: Option<String>, name| {
            non_blank(value).ok_or(ConfigError::MissingField(name))
        };
        let config = JobConfig {
            extraction_dir: PathBuf::from(field(self.extraction_dir, "extraction folder")?),
            template_archive: PathBuf::from(field(self.template_archive, "template archive")?),
            replacement: field(self.replacement, "process name")?,
            destination_dir: PathBuf::from(field(self.destination_dir, "destination folder")?),
            rules,
        };
        log::debug!("Configuration built: {:?}", config);
        Ok(config)
    }
}
