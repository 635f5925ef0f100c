//! Report types and the sink that receives report lines while a run progresses.
//!
//! The rewriter never prints or logs its report lines on its own: every line
//! goes into the returned outcome and to the `ReportSink` the caller passed in.

use std::path::PathBuf;
use std::sync::Mutex;

/// The stages of a run, announced to the sink as they start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Unpacking the template archive.
    Extract,
    /// Bottom-up discovery of names to rename.
    Collect,
    /// Top-down rewrite of file contents.
    Content,
    /// Applying the collected renames.
    Rename,
    /// Writing the output archive.
    Compress,
}

impl Pass {
    /// A short label for progress displays.
    pub fn label(self) -> &'static str {
        match self {
            Pass::Extract => "Extracting template",
            Pass::Collect => "Collecting names",
            Pass::Content => "Rewriting contents",
            Pass::Rename => "Renaming",
            Pass::Compress => "Compressing",
        }
    }
}

/// Receives report lines and progress from a run.
///
/// Only `message` is required; the progress hooks default to doing nothing.
///
/// # Examples
///
/// ```
/// use template_rebrand::report::ReportSink;
/// use std::sync::Mutex;
///
/// struct Lines(Mutex<Vec<String>>);
///
/// impl ReportSink for Lines {
///     fn message(&self, msg: &str) {
///         self.0.lock().unwrap().push(msg.to_string());
///     }
/// }
///
/// let sink = Lines(Mutex::new(Vec::new()));
/// sink.message("Renamed a to b (1 matches)");
/// assert_eq!(sink.0.lock().unwrap().len(), 1);
/// ```
pub trait ReportSink: Send + Sync {
    /// A report line, in the order it was produced.
    fn message(&self, msg: &str);
    /// A pass is starting. `total` is the number of items it will visit, if known.
    fn begin_pass(&self, _pass: Pass, _total: Option<u64>) {}
    /// One item of the current pass was handled.
    fn advance(&self) {}
    /// The run is over.
    fn finish(&self) {}
}

/// A `ReportSink` that discards everything.
pub struct NoOpSink;

impl ReportSink for NoOpSink {
    fn message(&self, _msg: &str) {}
}

/// A `ReportSink` that forwards report lines to the `log` facade.
///
/// Failures are logged at warn level, everything else at debug level, since
/// the adapters print the full report themselves.
pub struct LogSink;

impl ReportSink for LogSink {
    fn message(&self, msg: &str) {
        if msg.starts_with("Failed") {
            log::warn!("{}", msg);
        } else {
            log::debug!("{}", msg);
        }
    }

    fn begin_pass(&self, pass: Pass, total: Option<u64>) {
        match total {
            Some(n) => log::debug!("{} ({} items)", pass.label(), n),
            None => log::debug!("{}", pass.label()),
        }
    }
}

/// A `ReportSink` that keeps every line in memory.
#[derive(Default)]
pub struct CollectingSink {
    lines: Mutex<Vec<String>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lines received so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}

impl ReportSink for CollectingSink {
    fn message(&self, msg: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(msg.to_string());
        }
    }
}

/// What the tree rewriter returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// `false` if any content write or rename failed.
    pub success: bool,
    /// Report lines in the order they were produced.
    pub messages: Vec<String>,
    /// Pattern occurrences found in names and eligible contents.
    pub total_matches: usize,
}

/// The result of a complete run, rendered by the adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OperationReport {
    /// The pattern that was searched for.
    pub pattern: String,
    /// Report lines in the order they were produced, starting with the
    /// extraction line.
    pub messages: Vec<String>,
    /// Pattern occurrences found in names and eligible contents.
    pub total_matches: usize,
    /// `false` if any content write or rename failed.
    pub rename_success: bool,
    /// `false` if the output archive could not be written.
    pub compress_success: bool,
    /// Where the output archive was written, when compression succeeded.
    pub archive_path: Option<PathBuf>,
    /// Line describing the compression result.
    pub compress_message: String,
}

impl OperationReport {
    /// `true` when both the rewrite and the compression succeeded.
    pub fn is_success(&self) -> bool {
        self.rename_success && self.compress_success
    }
}
