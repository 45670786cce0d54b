use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn command_invalid() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("trcheck")?;
    cmd.assert().failure();

    let mut cmd = Command::cargo_bin("trcheck")?;
    cmd.arg("tests/tr/does_not_exist.tr")
        .assert()
        .failure()
        .stderr(predicate::str::contains("can't open file"));

    Ok(())
}

#[test]
fn command_check_grouped() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("trcheck")?;
    let output = cmd.arg("tests/tr/grouped.tr").output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(output.status.success());
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.contains("Checking file tests/tr/grouped.tr"));
    assert!(stdout.contains("Everything seems to be fine."));

    Ok(())
}

#[test]
fn command_check_interleaved() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("trcheck")?;
    let output = cmd.arg("tests/tr/interleaved.tr").output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(output.status.success());
    assert_eq!(stdout.lines().count(), 5);
    assert!(stdout.contains("These 2 (out of 3) have wrong GENE EXPRESSION results:"));
    assert!(stdout.contains("g1 g2"));
    assert!(stdout.contains("These 5 transcripts have wrong WITHIN GENE EXPRESSION results:"));
    assert!(stdout.contains("t1 t2 t4 t3 t5"));

    Ok(())
}

#[test]
fn command_check_malformed() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("trcheck")?;
    cmd.arg("tests/tr/malformed.tr")
        .assert()
        .failure()
        .stderr(predicate::str::contains("onlyonefield"));

    Ok(())
}

#[test]
fn command_check_stdin() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("trcheck")?;
    let output = cmd
        .arg("stdin")
        .write_stdin("g1 t1\ng2 t2\ng1 t3\ng2 t4\n")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(output.status.success());
    assert!(stdout.contains("These 2 (out of 2) have wrong GENE EXPRESSION results:"));
    assert!(stdout.contains("t1 t3 t2 t4"));

    Ok(())
}

#[test]
fn command_check_outfile() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let outfile = temp.path().join("report.txt");

    let mut cmd = Command::cargo_bin("trcheck")?;
    cmd.arg("tests/tr/interleaved.tr")
        .arg("-o")
        .arg(&outfile)
        .assert()
        .success();

    let content = fs::read_to_string(&outfile)?;
    assert!(content.contains("These 2 (out of 3) have wrong GENE EXPRESSION results:"));

    Ok(())
}
