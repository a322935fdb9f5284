//! Black-box tests running the built `sends` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn fixture_site() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/site")
}

/// Run `sends` with an isolated home directory so no user config leaks in.
fn sends(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sends"))
        .args(args)
        .env("HOME", home)
        .env_remove("SENDS_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("run sends")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn write_doc(root: &Path, rel: &str, text: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("has parent")).expect("mkdir");
    fs::write(path, text).expect("write");
}

// ---------------------------------------------------------------------------
// Report modes
// ---------------------------------------------------------------------------

#[test]
fn list_mode_prints_sorted_sends() {
    let home = TempDir::new().unwrap();
    let site = fixture_site();
    let output = sends(home.path(), &[site.to_str().unwrap()]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "900\n1000\nV?\nGray ?\nOrange 5.10-\nDan's 5.11+\nRed V4\nRed V4 flash\nRed V4\nBlue V4+\n"
    );
    assert!(output.stderr.is_empty(), "unexpected stderr: {}", stderr(&output));
}

#[test]
fn count_mode_prints_histogram() {
    let home = TempDir::new().unwrap();
    let site = fixture_site();
    let output = sends(home.path(), &["--count", site.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        concat!(
            "      1 900\n",
            "      1 1000\n",
            "      1 V?\n",
            "      1 ?\n",
            "      1 5.10-\n",
            "      1 5.11+\n",
            "      3 V4\n",
            "      1 V4+\n",
        )
    );
}

#[test]
fn dates_mode_prints_unique_dates() {
    let home = TempDir::new().unwrap();
    let site = fixture_site();
    let output = sends(home.path(), &["-d", "V4", site.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "2024-03-15\n2024-04-02\n");
}

#[test]
fn dates_mode_takes_precedence_over_count() {
    let home = TempDir::new().unwrap();
    let site = fixture_site();
    let output = sends(home.path(), &["-c", "--dates", "5.11+", site.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "2024-04-02\n");
}

#[test]
fn dates_mode_with_unknown_grade_prints_nothing() {
    let home = TempDir::new().unwrap();
    let site = fixture_site();
    let output = sends(home.path(), &["-d", "V12", site.to_str().unwrap()]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn type_flag_selects_content_directory() {
    let home = TempDir::new().unwrap();
    let site = fixture_site();
    let output = sends(home.path(), &["-t", "projects", site.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Green V7 (project)\n");
}

// ---------------------------------------------------------------------------
// End-to-end examples
// ---------------------------------------------------------------------------

#[test]
fn question_mark_grades_sort_before_boulder_grades() {
    let home = TempDir::new().unwrap();
    let site = TempDir::new().unwrap();
    write_doc(
        site.path(),
        "content/posts/climb/index.md",
        "---\ndate: 2024-03-15\nsends: [\"Red V4\", \"Blue V4+\", \"Gray ?\"]\n---\n",
    );

    let output = sends(home.path(), &[site.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Gray ?\nRed V4\nBlue V4+\n");
}

#[test]
fn point_grades_sort_numerically() {
    let home = TempDir::new().unwrap();
    let site = TempDir::new().unwrap();
    write_doc(
        site.path(),
        "content/posts/a/index.md",
        "---\ndate: 2024-01-02\nsends: [\"1000\"]\n---\n",
    );
    write_doc(
        site.path(),
        "content/posts/b/index.md",
        "---\ndate: 2024-01-01\nsends: [\"900\"]\n---\n",
    );

    let output = sends(home.path(), &[site.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "900\n1000\n");
}

#[test]
fn empty_content_directory_prints_nothing() {
    let home = TempDir::new().unwrap();
    let site = TempDir::new().unwrap();
    fs::create_dir_all(site.path().join("content/posts")).unwrap();

    let output = sends(home.path(), &["-c", site.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn config_file_sets_default_content_type() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    fs::write(&config, "[defaults]\ncontent_type = \"projects\"\n").unwrap();
    let site = fixture_site();

    let output = sends(
        home.path(),
        &["--config", config.to_str().unwrap(), site.to_str().unwrap()],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Green V7 (project)\n");

    let output = sends(
        home.path(),
        &["--config", config.to_str().unwrap(), "-t", "posts", "-d", "V4+", site.to_str().unwrap()],
    );
    assert_eq!(stdout(&output), "2024-03-15\n");
}

#[test]
fn home_config_is_picked_up() {
    let home = TempDir::new().unwrap();
    write_doc(home.path(), ".sends/sends.toml", "[defaults]\ncontent_type = \"projects\"\n");
    let site = fixture_site();

    let output = sends(home.path(), &[site.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Green V7 (project)\n");
}

#[test]
fn invalid_config_is_fatal() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("bad.toml");
    fs::write(&config, "[defaults\n").unwrap();
    let site = fixture_site();

    let output = sends(
        home.path(),
        &["--config", config.to_str().unwrap(), site.to_str().unwrap()],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn missing_site_path_prints_usage() {
    let home = TempDir::new().unwrap();
    let output = sends(home.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("Usage"), "stderr: {}", stderr(&output));
}

#[test]
fn missing_content_path_is_fatal() {
    let home = TempDir::new().unwrap();
    let site = fixture_site();
    let output = sends(home.path(), &["--type", "nope", site.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(
        stderr(&output).contains("content path does not exist"),
        "stderr: {}",
        stderr(&output)
    );
}

#[cfg(unix)]
#[test]
fn unreadable_directory_aborts_the_walk() {
    use std::os::unix::fs::PermissionsExt;

    let home = TempDir::new().unwrap();
    let site = TempDir::new().unwrap();
    let posts = site.path().join("content/posts");
    write_doc(&posts, "a/index.md", "---\nsends:\n  - Red V4\n---\n");
    let locked = posts.join("b");
    fs::create_dir_all(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not stop a privileged user.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let output = sends(home.path(), &[site.path().to_str().unwrap()]);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "stdout: {}", stdout(&output));
    assert!(
        stderr(&output).contains("error walking directory"),
        "stderr: {}",
        stderr(&output)
    );
}

#[test]
fn help_exits_zero() {
    let home = TempDir::new().unwrap();
    let output = sends(home.path(), &["--help"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("--dates"));
}
