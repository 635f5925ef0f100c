//! The tree rewriter: replaces the pattern in every name and text file of a tree.
//!
//! The rewrite runs in three passes over the same directory:
//!
//! 1.  **Collect** (bottom-up): find every file and directory name containing the
//!     pattern and record a [`RenameEntry`]. Read-only.
//! 2.  **Content** (top-down): rewrite the content of every regular file that is
//!     not exempt, still using the original paths.
//! 3.  **Rename**: apply the collected entries in discovery order. Children are
//!     always renamed before their parent, so stored paths stay valid.
//!
//! Failures on single files or renames are reported and never stop the batch.

use crate::config::RewriteRules;
use crate::report::{Pass, ReportSink, RewriteOutcome};
use log::info;
use std::path::Path;

mod content;
mod names;
mod substitution;

pub use names::RenameEntry;
pub use substitution::Substitution;

/// Rewrites names and contents under `root`, replacing `rules.pattern` with
/// `replacement`.
///
/// Every report line is appended to the returned outcome and forwarded to
/// `sink` as it is produced. An empty pattern is rejected with a single
/// failure line and the tree is left untouched.
///
/// # Examples
///
/// ```
/// use template_rebrand::config::RewriteRules;
/// use template_rebrand::report::NoOpSink;
/// use template_rebrand::rewrite::rewrite_tree;
/// use std::fs;
///
/// let temp = tempfile::tempdir().unwrap();
/// fs::write(temp.path().join("TPL_main.txt"), "Process: TPL").unwrap();
///
/// let rules = RewriteRules::with_pattern("TPL");
/// let outcome = rewrite_tree(temp.path(), &rules, "MiProceso", &NoOpSink);
///
/// assert!(outcome.success);
/// assert_eq!(outcome.total_matches, 2);
/// let renamed = temp.path().join("MiProceso_main.txt");
/// assert_eq!(fs::read_to_string(renamed).unwrap(), "Process: MiProceso");
/// ```
pub fn rewrite_tree(
    root: &Path,
    rules: &RewriteRules,
    replacement: &str,
    sink: &dyn ReportSink,
) -> RewriteOutcome {
    info!("Starting rename operation in {}", root.display());
    let mut recorder = Recorder::new(sink);
    if rules.pattern.is_empty() {
        recorder.fail(format!(
            "Failed to rewrite {}: the pattern must not be empty",
            root.display()
        ));
        return recorder.into_outcome();
    }
    let subst = Substitution::new(&rules.pattern, replacement);

    let collected = names::collect_renames(root, &subst, &mut recorder);
    content::rewrite_contents(root, rules, &subst, collected.file_count, &mut recorder);
    names::apply_renames(&collected.entries, &mut recorder);

    let outcome = recorder.into_outcome();
    info!(
        "Rename operation finished: {} matches, success: {}",
        outcome.total_matches, outcome.success
    );
    outcome
}

/// Accumulates the outcome of a rewrite and mirrors every line to the sink.
pub(crate) struct Recorder<'a> {
    sink: &'a dyn ReportSink,
    outcome: RewriteOutcome,
}

impl<'a> Recorder<'a> {
    pub(crate) fn new(sink: &'a dyn ReportSink) -> Self {
        Self {
            sink,
            outcome: RewriteOutcome {
                success: true,
                ..RewriteOutcome::default()
            },
        }
    }

    fn begin_pass(&self, pass: Pass, total: Option<u64>) {
        self.sink.begin_pass(pass, total);
    }

    fn advance(&self) {
        self.sink.advance();
    }

    fn add_matches(&mut self, matches: usize) {
        self.outcome.total_matches += matches;
    }

    #[cfg(test)]
    fn total_matches(&self) -> usize {
        self.outcome.total_matches
    }

    fn record(&mut self, msg: String) {
        self.sink.message(&msg);
        self.outcome.messages.push(msg);
    }

    fn fail(&mut self, msg: String) {
        self.outcome.success = false;
        self.record(msg);
    }

    pub(crate) fn into_outcome(self) -> RewriteOutcome {
        self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::CollectingSink;
    use std::fs;
    use tempfile::tempdir;

    const PATTERN: &str = "AD_GI_EstadisticasPrestacionesEconomicas";

    #[test]
    fn test_template_example() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(
            temp.path()
                .join("AD_GI_EstadisticasPrestacionesEconomicas_report.txt"),
            "Process: AD_GI_EstadisticasPrestacionesEconomicas",
        )?;

        let outcome = rewrite_tree(temp.path(), &RewriteRules::default(), "MiProceso", &CollectingSink::new());

        assert!(outcome.success);
        assert_eq!(outcome.total_matches, 2);
        let renamed = temp.path().join("MiProceso_report.txt");
        assert_eq!(fs::read_to_string(renamed)?, "Process: MiProceso");
        Ok(())
    }

    #[test]
    fn test_nested_directories_are_renamed() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let root = temp.path();
        let deep = root.join(format!("{PATTERN}/Bots/{PATTERN}_Main"));
        fs::create_dir_all(&deep)?;
        fs::write(deep.join(format!("{PATTERN}.json")), format!("{{\"name\":\"{PATTERN}\"}}"))?;

        let outcome = rewrite_tree(root, &RewriteRules::default(), "Nomina", &CollectingSink::new());

        assert!(outcome.success, "messages: {:?}", outcome.messages);
        // Three names and one content occurrence.
        assert_eq!(outcome.total_matches, 4);
        let new_file = root.join("Nomina/Bots/Nomina_Main/Nomina.json");
        assert_eq!(fs::read_to_string(new_file)?, "{\"name\":\"Nomina\"}");
        assert!(!root.join(PATTERN).exists());
        Ok(())
    }

    #[test]
    fn test_sink_receives_same_lines_as_outcome() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join(format!("{PATTERN}.txt")), PATTERN)?;
        let sink = CollectingSink::new();

        let outcome = rewrite_tree(temp.path(), &RewriteRules::default(), "X", &sink);

        assert_eq!(sink.lines(), outcome.messages);
        assert_eq!(outcome.messages.len(), 2);
        assert!(outcome.messages[0].starts_with("Updated content in:"));
        assert!(outcome.messages[1].starts_with("Renamed"));
        Ok(())
    }

    #[test]
    fn test_second_run_is_a_no_op() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::create_dir(temp.path().join(PATTERN))?;
        fs::write(temp.path().join(PATTERN).join("a.txt"), PATTERN)?;
        let rules = RewriteRules::default();

        let first = rewrite_tree(temp.path(), &rules, "Renamed", &CollectingSink::new());
        assert_eq!(first.total_matches, 2);

        let second = rewrite_tree(temp.path(), &rules, "Renamed", &CollectingSink::new());
        assert!(second.success);
        assert_eq!(second.total_matches, 0);
        assert!(second.messages.is_empty());
        Ok(())
    }

    #[test]
    fn test_rename_collision_is_reported() -> anyhow::Result<()> {
        let temp = tempdir()?;
        // Renaming the file to "New" collides with the existing directory.
        fs::create_dir(temp.path().join("New"))?;
        fs::write(temp.path().join("New").join("keep.txt"), "keep")?;
        fs::write(temp.path().join("TPL"), "data")?;

        let outcome = rewrite_tree(temp.path(), &RewriteRules::with_pattern("TPL"), "New", &CollectingSink::new());

        assert!(!outcome.success);
        assert!(outcome
            .messages
            .iter()
            .any(|m| m.starts_with("Failed to rename")));
        assert_eq!(fs::read_to_string(temp.path().join("New/keep.txt"))?, "keep");
        Ok(())
    }

    #[test]
    fn test_empty_pattern_is_rejected() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("abc.txt"), "abc")?;
        let sink = CollectingSink::new();

        let outcome = rewrite_tree(temp.path(), &RewriteRules::with_pattern(""), "Z", &sink);

        assert!(!outcome.success);
        assert_eq!(outcome.total_matches, 0);
        assert_eq!(outcome.messages.len(), 1);
        assert!(outcome.messages[0].ends_with("the pattern must not be empty"));
        assert_eq!(sink.lines(), outcome.messages);
        assert_eq!(fs::read_to_string(temp.path().join("abc.txt"))?, "abc");
        Ok(())
    }
}
