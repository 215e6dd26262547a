use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn memo_cmd(config_root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("memo").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_root)
        .env_remove("EDITOR")
        .env_remove("RUST_LOG");
    cmd
}

fn memo_dir(config_root: &Path) -> std::path::PathBuf {
    config_root.join("go-memo").join("memo")
}

#[test]
fn test_creates_memo_without_editor() {
    let temp = TempDir::new().unwrap();

    memo_cmd(temp.path())
        .args(["--no-editor", "note.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created memo at"));

    let content = fs::read_to_string(memo_dir(temp.path()).join("note.md")).unwrap();
    assert!(content.contains("note.md"));

    let date_line = content
        .lines()
        .find_map(|l| l.strip_prefix("Created: "))
        .expect("built-in template has a Created: line");
    assert!(chrono::NaiveDateTime::parse_from_str(date_line, "%Y-%m-%d-%H:%M:%S").is_ok());
}

#[test]
fn test_running_twice_reuses_directories() {
    let temp = TempDir::new().unwrap();

    memo_cmd(temp.path())
        .args(["--no-editor", "one.md"])
        .assert()
        .success();
    memo_cmd(temp.path())
        .args(["--no-editor", "two.md"])
        .assert()
        .success();

    assert!(memo_dir(temp.path()).join("one.md").is_file());
    assert!(memo_dir(temp.path()).join("two.md").is_file());
}

#[test]
fn test_existing_file_is_not_overwritten() {
    let temp = TempDir::new().unwrap();
    let dir = memo_dir(temp.path());
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("note.md"), "keep me").unwrap();

    memo_cmd(temp.path())
        .args(["--no-editor", "note.md"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(dir.join("note.md")).unwrap(), "keep me");
}

#[test]
fn test_invalid_names_exit_with_one() {
    let temp = TempDir::new().unwrap();
    let long_name = "a".repeat(31);

    for (name, message) in [
        ("   ", "cannot be empty"),
        (long_name.as_str(), "too long"),
        ("a:b.md", "invalid character"),
    ] {
        memo_cmd(temp.path())
            .args(["--no-editor", name])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains(message));
    }

    assert!(!temp.path().join("go-memo").exists());
}

#[test]
fn test_missing_editor_fails_after_creating_file() {
    let temp = TempDir::new().unwrap();

    memo_cmd(temp.path())
        .arg("note.md")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("EDITOR"));

    assert!(memo_dir(temp.path()).join("note.md").is_file());
}

#[cfg(unix)]
#[test]
fn test_editor_is_launched() {
    let temp = TempDir::new().unwrap();

    memo_cmd(temp.path())
        .env("EDITOR", "true")
        .arg("note.md")
        .assert()
        .success();

    assert!(memo_dir(temp.path()).join("note.md").is_file());
}

#[cfg(unix)]
#[test]
fn test_editor_receives_the_file_path() {
    let temp = TempDir::new().unwrap();
    // `cat` echoes the memo back through the inherited stdout
    memo_cmd(temp.path())
        .env("EDITOR", "cat")
        .arg("echoed.md")
        .assert()
        .success()
        .stdout(predicate::str::contains("# echoed.md"));
}

#[test]
fn test_unknown_editor_is_reported() {
    let temp = TempDir::new().unwrap();

    memo_cmd(temp.path())
        .env("EDITOR", "memo-no-such-editor-xyz")
        .arg("note.md")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to launch editor"));
}

#[test]
fn test_user_template_is_used() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("go-memo");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("template.md"),
        "---\ntitle: {{ Filename }}\ndate: {{ Date }}\n---\n",
    )
    .unwrap();

    memo_cmd(temp.path())
        .args(["--no-editor", "note.md"])
        .assert()
        .success();

    let content = fs::read_to_string(memo_dir(temp.path()).join("note.md")).unwrap();
    assert!(content.starts_with("---\ntitle: note.md\ndate: "));
}

#[test]
fn test_go_style_user_template_is_used() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("go-memo");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("template.md"), "# {{.Filename}}\n{{.Date}}\n").unwrap();

    memo_cmd(temp.path())
        .args(["--no-editor", "note.md"])
        .assert()
        .success();

    let content = fs::read_to_string(memo_dir(temp.path()).join("note.md")).unwrap();
    let (title, date) = content.split_once('\n').unwrap();
    assert_eq!(title, "# note.md");
    assert!(chrono::NaiveDateTime::parse_from_str(date.trim_end(), "%Y-%m-%d-%H:%M:%S").is_ok());
}

#[test]
fn test_dot_names_are_rejected() {
    let temp = TempDir::new().unwrap();

    for name in [".", ".."] {
        memo_cmd(temp.path())
            .args(["--no-editor", name])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("not a valid memo filename"));
    }
}

#[test]
fn test_malformed_user_template() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("go-memo");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("template.md"), "{{ Filename").unwrap();

    memo_cmd(temp.path())
        .args(["--no-editor", "note.md"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse"));

    assert!(!memo_dir(temp.path()).join("note.md").exists());
}

#[test]
fn test_print_renders_without_writing() {
    let temp = TempDir::new().unwrap();

    memo_cmd(temp.path())
        .args(["--print", "draft.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# draft.md"))
        .stdout(predicate::str::contains("Created: "));

    assert!(!temp.path().join("go-memo").exists());
}

#[test]
fn test_home_fallback() {
    let temp = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("memo").unwrap();
    cmd.env_remove("XDG_CONFIG_HOME")
        .env_remove("EDITOR")
        .env("HOME", temp.path())
        .args(["--no-editor", "note.md"])
        .assert()
        .success();

    assert!(temp
        .path()
        .join(".config")
        .join("go-memo")
        .join("memo")
        .join("note.md")
        .is_file());
}

#[test]
fn test_filename_is_required() {
    let temp = TempDir::new().unwrap();

    memo_cmd(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
