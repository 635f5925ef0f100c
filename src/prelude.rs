//! The `template-rebrand` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types, traits, and functions
//! from the library. By importing everything from this prelude, you can
//! easily get started with using `template-rebrand` programmatically.
//!
//! # Example
//!
//! ```
//! use template_rebrand::prelude::*;
//! use std::fs;
//! # fn main() -> anyhow::Result<()> {
//!
//! let temp = tempfile::tempdir()?;
//! fs::write(temp.path().join("ACME.cfg"), "owner=ACME")?;
//!
//! let rules = RewriteRules::with_pattern("ACME");
//! let outcome = rewrite_tree(temp.path(), &rules, "Initech", &LogSink);
//! assert_eq!(outcome.total_matches, 2);
//!
//! # Ok(())
//! # }
//! ```

pub use crate::archive::{create_archive, extract_archive};
pub use crate::config::{ConfigBuilder, JobConfig, RewriteRules};
pub use crate::errors::{ConfigError, Error, Result};
pub use crate::output::{render_report, write_report};
pub use crate::report::{
    CollectingSink, LogSink, NoOpSink, OperationReport, Pass, ReportSink, RewriteOutcome,
};
pub use crate::rewrite::{rewrite_tree, RenameEntry, Substitution};
pub use crate::run;

#[cfg(feature = "progress")]
pub use crate::progress::IndicatifProgress;
