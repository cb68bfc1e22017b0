use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_count_meets_minimum() {
    let mut cmd = cargo_bin_cmd!("quill");
    cmd.arg("count")
        .arg("-")
        .arg("--min")
        .arg("3")
        .write_stdin("**Título**\n\nTexto normal");

    cmd.assert().success().stdout("3 / 3 words\n");
}

#[test]
fn test_count_below_default_minimum() {
    let mut cmd = cargo_bin_cmd!("quill");
    cmd.arg("count").arg("-").write_stdin("uno dos");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("2 / 1000 words, 998 missing"));
}

#[test]
fn test_count_reads_html_as_is() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("article.html");
    fs::write(&input_path, "<p>**no**</p><ul><li>uno</li><li>dos</li></ul>").unwrap();

    let mut cmd = cargo_bin_cmd!("quill");
    cmd.arg("count").arg(input_path.as_os_str()).arg("--min").arg("1");

    cmd.assert().success().stdout("3 / 1 words\n");
}

#[test]
fn test_count_minimum_from_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("quill.toml");
    fs::write(&config_path, "[editor]\nmin_word_count = 2\n").unwrap();

    let mut cmd = cargo_bin_cmd!("quill");
    cmd.arg("count")
        .arg("-")
        .arg("--config")
        .arg(config_path.as_os_str())
        .write_stdin("uno dos");

    cmd.assert().success().stdout("2 / 2 words\n");
}
