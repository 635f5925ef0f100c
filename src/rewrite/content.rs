// src/rewrite/content.rs

use super::{Recorder, Substitution};
use crate::config::RewriteRules;
use crate::report::Pass;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Rewrites the content of every non-exempt regular file under `root`.
///
/// Runs top-down over the original paths, so it must happen before any rename.
/// Files are only written when the substitution changed something. A file that
/// cannot be read as UTF-8 or written back is reported and skipped.
pub(super) fn rewrite_contents(
    root: &Path,
    rules: &RewriteRules,
    subst: &Substitution<'_>,
    file_count: u64,
    recorder: &mut Recorder<'_>,
) {
    recorder.begin_pass(Pass::Content, Some(file_count));

    for entry_result in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| root.display().to_string());
                recorder.fail(format!("Failed to process {}: {}", path, e));
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if rules.is_exempt(path) {
            debug!("Skipping exempt file: {}", path.display());
            recorder.advance();
            continue;
        }

        rewrite_file(path, subst, recorder, |path, content| fs::write(path, content));
        recorder.advance();
    }
}

/// Substitutes the pattern in one file and records the result.
///
/// Matches are counted as soon as the file is read, so they are kept even if
/// writing the new content fails. The file is only written when it changed.
fn rewrite_file<W>(path: &Path, subst: &Substitution<'_>, recorder: &mut Recorder<'_>, write: W)
where
    W: FnOnce(&Path, String) -> io::Result<()>,
{
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            recorder.fail(format!("Failed to process {}: {}", path.display(), e));
            return;
        }
    };

    let (new_content, matches) = subst.apply(&content);
    recorder.add_matches(matches);
    if new_content == content {
        return;
    }

    match write(path, new_content) {
        Ok(()) => recorder.record(format!(
            "Updated content in: {} ({} matches)",
            path.display(),
            matches
        )),
        Err(e) => recorder.fail(format!("Failed to process {}: {}", path.display(), e)),
    }
}
