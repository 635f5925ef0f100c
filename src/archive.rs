//! Thin wrappers around the `zip` crate for unpacking the template and
//! packing the rebranded tree.

use crate::constants::ARCHIVE_EXTENSION;
use crate::errors::{archive_error_with_path, io_error_with_path, Result};
use log::{debug, info};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Unpacks every entry of `archive` into `destination`, keeping relative paths.
///
/// Entries whose names would escape `destination` are rejected by the zip reader.
///
/// # Errors
/// Returns `Error::Io` if the archive cannot be opened and `Error::Archive` if
/// it is corrupt or an entry cannot be written.
pub fn extract_archive(archive: &Path, destination: &Path) -> Result<()> {
    info!(
        "Extracting {} into {}",
        archive.display(),
        destination.display()
    );
    let file = File::open(archive).map_err(|e| io_error_with_path(e, archive))?;
    let mut zip = ZipArchive::new(file).map_err(|e| archive_error_with_path(e, archive))?;
    debug!("Archive has {} entries", zip.len());
    zip.extract(destination)
        .map_err(|e| archive_error_with_path(e, archive))
}

/// Packs every regular file under `source` into `<destination>/<output_name>.zip`.
///
/// An existing archive with the same name is deleted first, so repeated runs
/// replace rather than merge. Entry names are the paths relative to `source`,
/// with `/` separators. If the output archive itself lives under `source` it is
/// not added. Empty directories are not stored.
///
/// # Returns
/// The path of the written archive.
///
/// # Errors
/// Returns `Error::Io` if the destination is missing or not writable, or if a
/// file cannot be read, and `Error::Archive` if the archive cannot be finalized.
pub fn create_archive(source: &Path, output_name: &str, destination: &Path) -> Result<PathBuf> {
    let output_path = destination.join(format!("{}.{}", output_name, ARCHIVE_EXTENSION));
    info!("Compressing {} into {}", source.display(), output_path.display());

    if output_path.exists() {
        debug!("Removing existing archive {}", output_path.display());
        fs::remove_file(&output_path).map_err(|e| io_error_with_path(e, &output_path))?;
    }

    let file = File::create(&output_path).map_err(|e| io_error_with_path(e, &output_path))?;
    // Resolved after creation so the comparison below sees the same form as the walker.
    let output_canonical =
        fs::canonicalize(&output_path).map_err(|e| io_error_with_path(e, &output_path))?;
    let source_canonical = fs::canonicalize(source).map_err(|e| io_error_with_path(e, source))?;

    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry_result in WalkDir::new(&source_canonical).min_depth(1).sort_by_file_name() {
        let entry = entry_result.map_err(|e| {
            let path = e.path().unwrap_or(source_canonical.as_path()).to_path_buf();
            io_error_with_path(io::Error::other(e), path)
        })?;
        if !entry.file_type().is_file() || entry.path() == output_canonical {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(&source_canonical)
            .map_err(|e| io_error_with_path(io::Error::other(e), entry.path()))?;
        let name = entry_name(relative);
        debug!("Adding {}", name);

        zip.start_file(name, options)
            .map_err(|e| archive_error_with_path(e, &output_path))?;
        let mut input = File::open(entry.path()).map_err(|e| io_error_with_path(e, entry.path()))?;
        io::copy(&mut input, &mut zip).map_err(|e| io_error_with_path(e, entry.path()))?;
    }

    zip.finish()
        .map_err(|e| archive_error_with_path(e, &output_path))?;
    Ok(output_path)
}

/// Builds a zip entry name from a relative path, always using `/`.
fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
