//! `template-rebrand` is a library and command-line tool for rebranding an
//! automation template distributed as a ZIP archive.
//!
//! The template's process name appears in folder names, file names, and file
//! contents. A run replaces every occurrence with a new name and packs the
//! result into `<new name>.zip`, ready to be imported again.
//!
//! As a library, it provides a five-step pipeline:
//! 1.  **Extract**: Unpack the template into a working folder.
//! 2.  **Collect**: Find every file and folder name containing the pattern.
//! 3.  **Rewrite**: Replace the pattern in every text file (spreadsheets are left alone).
//! 4.  **Rename**: Apply the collected renames, deepest entries first.
//! 5.  **Compress**: Pack the working folder into the output archive.
//!
//! Steps 2 to 4 are available on their own through [`rewrite::rewrite_tree`].
//!
//! # Example: Library Usage
//!
//! ```
//! use template_rebrand::{run, ConfigBuilder};
//! use template_rebrand::report::NoOpSink;
//! use std::fs::{self, File};
//! use std::io::Write;
//! use tempfile::tempdir;
//!
//! // 1. Build a small template archive.
//! let temp = tempdir().unwrap();
//! let template = temp.path().join("template.zip");
//! let mut zip = zip::ZipWriter::new(File::create(&template).unwrap());
//! zip.start_file(
//!     "AD_GI_EstadisticasPrestacionesEconomicas_report.txt",
//!     zip::write::SimpleFileOptions::default(),
//! )
//! .unwrap();
//! zip.write_all(b"Process: AD_GI_EstadisticasPrestacionesEconomicas").unwrap();
//! zip.finish().unwrap();
//!
//! // 2. Configure the run.
//! let config = ConfigBuilder::new()
//!     .extraction_dir(temp.path().join("work").to_str().unwrap())
//!     .template_archive(template.to_str().unwrap())
//!     .replacement("MiProceso")
//!     .destination_dir(temp.path().to_str().unwrap())
//!     .build()
//!     .unwrap();
//!
//! // 3. Execute the pipeline.
//! let report = run(&config, &NoOpSink).unwrap();
//!
//! assert!(report.rename_success && report.compress_success);
//! assert_eq!(report.total_matches, 2);
//! let renamed = temp.path().join("work/MiProceso_report.txt");
//! assert_eq!(fs::read_to_string(renamed).unwrap(), "Process: MiProceso");
//! assert!(temp.path().join("MiProceso.zip").exists());
//! ```

pub mod archive;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod output;
pub mod prelude;
pub mod progress;
pub mod prompt;
pub mod report;
pub mod rewrite;
pub mod signal;
#[cfg(feature = "web")]
pub mod web;

// Re-export key public types for easier use as a library
pub use config::{ConfigBuilder, JobConfig, RewriteRules};
pub use report::{OperationReport, ReportSink};

use crate::constants::EXTRACTED_MESSAGE;
use crate::errors::{io_error_with_path, Result};
use crate::report::Pass;
use std::fs;

/// Executes the complete pipeline: extract, rewrite, and compress.
///
/// This is the single entry point shared by the console and the form adapter.
/// Report lines are forwarded to `sink` while the run progresses and collected
/// into the returned report.
///
/// # Arguments
/// * `config` - The validated inputs of the run.
/// * `sink` - Receives report lines and progress.
///
/// # Returns
/// An `OperationReport` whenever the template could be extracted. Failures on
/// single files, renames, or the compression step are recorded in the report
/// instead of being returned as errors.
///
/// # Errors
/// Returns an error if the extraction folder cannot be created or the template
/// cannot be extracted. Nothing else is attempted in that case.
pub fn run(config: &JobConfig, sink: &dyn ReportSink) -> Result<OperationReport> {
    if !config.extraction_dir.exists() {
        log::info!(
            "The folder {} does not exist. It will be created",
            config.extraction_dir.display()
        );
        fs::create_dir_all(&config.extraction_dir)
            .map_err(|e| io_error_with_path(e, &config.extraction_dir))?;
    }

    sink.begin_pass(Pass::Extract, None);
    archive::extract_archive(&config.template_archive, &config.extraction_dir)?;
    sink.message(EXTRACTED_MESSAGE);
    let mut messages = vec![EXTRACTED_MESSAGE.to_string()];

    let outcome = rewrite::rewrite_tree(
        &config.extraction_dir,
        &config.rules,
        &config.replacement,
        sink,
    );
    messages.extend(outcome.messages);

    sink.begin_pass(Pass::Compress, None);
    let (compress_success, archive_path, compress_message) = match archive::create_archive(
        &config.extraction_dir,
        &config.replacement,
        &config.destination_dir,
    ) {
        Ok(path) => {
            let msg = format!("Created zip file: {}", path.display());
            (true, Some(path), msg)
        }
        Err(e) => {
            log::error!("Compression failed: {}", e);
            (false, None, format!("Compression failed: {}", e))
        }
    };
    sink.message(&compress_message);
    sink.finish();

    Ok(OperationReport {
        pattern: config.rules.pattern.clone(),
        messages,
        total_matches: outcome.total_matches,
        rename_success: outcome.success,
        compress_success,
        archive_path,
        compress_message,
    })
}
