mod common; // Declare the common module

use assert_cmd::prelude::*;
use common::{rebrand_cmd, write_template, PATTERN};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_full_run_with_flags() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let template = temp.path().join("template.zip");
    let report_name = format!("{PATTERN}_report.txt");
    let content = format!("Process: {PATTERN}");
    write_template(&template, &[(report_name.as_str(), content.as_bytes())])?;
    let work = temp.path().join("work");
    let out = temp.path().join("out");
    fs::create_dir(&out)?;

    rebrand_cmd()
        .arg("--extract-dir")
        .arg(&work)
        .arg("--template")
        .arg(&template)
        .arg("--name")
        .arg("MiProceso")
        .arg("--dest")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Files extracted successfully."))
        .stdout(predicate::str::contains("Updated content in:"))
        .stdout(predicate::str::contains("MiProceso_report.txt (1 matches)"))
        .stdout(predicate::str::contains(format!(
            "Total matches found for '{PATTERN}': 2"
        )))
        .stdout(predicate::str::contains("Created zip file:"))
        .stdout(predicate::str::contains("Rename Status: Success"))
        .stdout(predicate::str::contains("Compress Status: Success"));

    assert_eq!(
        fs::read_to_string(work.join("MiProceso_report.txt"))?,
        "Process: MiProceso"
    );
    assert!(out.join("MiProceso.zip").is_file());

    temp.close()?;
    Ok(())
}

#[test]
fn test_short_flags_and_quiet() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let template = temp.path().join("t.zip");
    write_template(&template, &[("notes.txt", b"nothing to replace".as_slice())])?;

    rebrand_cmd()
        .arg("-x")
        .arg(temp.path().join("work"))
        .arg("-t")
        .arg(&template)
        .arg("-n")
        .arg("Nomina")
        .arg("-d")
        .arg(temp.path())
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Total matches found for '{PATTERN}': 0"
        )))
        .stdout(predicate::str::contains("Renamed").not());

    assert!(temp.path().join("Nomina.zip").is_file());
    temp.close()?;
    Ok(())
}

#[test]
fn test_name_is_trimmed() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let template = temp.path().join("t.zip");
    let name = format!("{PATTERN}.txt");
    write_template(&template, &[(name.as_str(), b"x".as_slice())])?;

    rebrand_cmd()
        .arg("-x")
        .arg(temp.path().join("work"))
        .arg("-t")
        .arg(&template)
        .arg("-n")
        .arg("  Spaced  ")
        .arg("-d")
        .arg(temp.path())
        .assert()
        .success();

    assert!(temp.path().join("work/Spaced.txt").is_file());
    assert!(temp.path().join("Spaced.zip").is_file());
    temp.close()?;
    Ok(())
}

#[test]
fn test_failed_file_still_exits_normally() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let template = temp.path().join("t.zip");
    write_template(
        &template,
        &[("image.png", [0x89u8, 0x50, 0x4e, 0x47, 0xff, 0xfe].as_slice()), ("a.txt", b"ok".as_slice())],
    )?;

    rebrand_cmd()
        .arg("-x")
        .arg(temp.path().join("work"))
        .arg("-t")
        .arg(&template)
        .arg("-n")
        .arg("Nomina")
        .arg("-d")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to process"))
        .stdout(predicate::str::contains("image.png"))
        .stdout(predicate::str::contains("Rename Status: Failed"))
        .stdout(predicate::str::contains("Compress Status: Success"));

    temp.close()?;
    Ok(())
}
