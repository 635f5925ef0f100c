// src/rewrite/names.rs

use super::{Recorder, Substitution};
use crate::report::Pass;
use log::{debug, trace, warn};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A rename discovered by the collection pass and applied by the rename pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    /// Full path of the entry as it was when collected.
    pub original: PathBuf,
    /// The substituted leaf name. The parent stays the same.
    pub new_name: OsString,
    /// Pattern occurrences in the original leaf name.
    pub matches: usize,
}

impl RenameEntry {
    /// The path the entry is moved to.
    pub fn target(&self) -> PathBuf {
        self.original.with_file_name(&self.new_name)
    }
}

/// Result of the collection pass.
#[derive(Debug, Default)]
pub(super) struct Collected {
    /// Renames in discovery order: every entry precedes its parent directory.
    pub entries: Vec<RenameEntry>,
    /// Regular files seen, used to size the content pass.
    pub file_count: u64,
}

/// Walks the tree bottom-up and records every name that contains the pattern.
///
/// Nothing on disk is touched. Names are counted into the recorder's match
/// total whether or not they are later renamed successfully. Entries that
/// cannot be read are skipped with a warning. On unix, names that are not valid
/// UTF-8 are matched on their raw bytes; elsewhere they are reported as failures.
pub(super) fn collect_renames(
    root: &Path,
    subst: &Substitution<'_>,
    recorder: &mut Recorder<'_>,
) -> Collected {
    recorder.begin_pass(Pass::Collect, None);
    let mut collected = Collected::default();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .contents_first(true)
        .sort_by_file_name();

    for entry_result in walker {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry while collecting names: {}", e);
                continue;
            }
        };
        if entry.file_type().is_file() {
            collected.file_count += 1;
        }

        let name = entry.file_name();
        let Some((new_name, matches)) = substitute_name(subst, name) else {
            recorder.fail(format!(
                "Failed to rename {}: name is not valid Unicode",
                entry.path().display()
            ));
            continue;
        };

        recorder.add_matches(matches);
        if matches > 0 && new_name.as_os_str() != name {
            trace!(
                "Queued rename: {} -> {}",
                entry.path().display(),
                new_name.to_string_lossy()
            );
            collected.entries.push(RenameEntry {
                original: entry.path().to_path_buf(),
                new_name,
                matches,
            });
        }
    }

    debug!(
        "Collected {} renames over {} files",
        collected.entries.len(),
        collected.file_count
    );
    collected
}

#[cfg(unix)]
fn substitute_name(subst: &Substitution<'_>, name: &OsStr) -> Option<(OsString, usize)> {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let (bytes, matches) = subst.apply_bytes(name.as_bytes());
    Some((OsString::from_vec(bytes), matches))
}

#[cfg(not(unix))]
fn substitute_name(subst: &Substitution<'_>, name: &OsStr) -> Option<(OsString, usize)> {
    let (new_name, matches) = subst.apply(name.to_str()?);
    Some((OsString::from(new_name), matches))
}

/// Applies the collected renames in order, continuing past failures.
pub(super) fn apply_renames(entries: &[RenameEntry], recorder: &mut Recorder<'_>) {
    recorder.begin_pass(Pass::Rename, Some(entries.len() as u64));

    for entry in entries {
        let target = entry.target();
        match fs::rename(&entry.original, &target) {
            Ok(()) => recorder.record(format!(
                "Renamed {} to {} ({} matches)",
                entry.original.display(),
                target.display(),
                entry.matches
            )),
            Err(e) => recorder.fail(format!(
                "Failed to rename {}: {}",
                entry.original.display(),
                e
            )),
        }
        recorder.advance();
    }
}
