// tests/common.rs

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::process::Command;
use zip::write::SimpleFileOptions;

pub const PATTERN: &str = "AD_GI_EstadisticasPrestacionesEconomicas";

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn rebrand_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("template-rebrand"))
}

/// Writes a template archive with the given entries (path, content).
#[allow(dead_code)]
pub fn write_template(path: &Path, entries: &[(&str, &[u8])]) -> Result<(), Box<dyn std::error::Error>> {
    let mut zip = zip::ZipWriter::new(File::create(path)?);
    for (name, content) in entries {
        zip.start_file(*name, SimpleFileOptions::default())?;
        zip.write_all(content)?;
    }
    zip.finish()?;
    Ok(())
}

/// Creates a file, including its parent folders.
#[allow(dead_code)]
pub fn create_file(dir_path: &Path, relative_path: &str, content: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    let file_path = dir_path.join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(())
}

/// Lists every entry (files and folders) under `root`, relative and sorted.
#[allow(dead_code)]
pub fn list_tree(root: &Path) -> Vec<String> {
    let mut entries: Vec<String> = walkdir::WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    entries.sort();
    entries
}
