use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".widget-showcase").join("config.json")
}

const BINARY_NAME: &str = "widget-showcase";

fn render(home: &tempfile::TempDir, section: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .args(["render", "--section", section, "--progress-step-ms", "0", "--seed", "1"])
        .env("HOME", home.path()) // simulate different $HOME
        .assert()
}

#[test]
/// Help command should list the subcommands.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("render").and(contains("init-config")));
}

#[test]
fn render_defaults_to_widgets() {
    let tmp = temp_home_dir();
    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .args(["render", "--progress-step-ms", "0"])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("# 📚 Streamlit API Showcase"))
        .stdout(contains("## 🔘 Widgets"))
        .stdout(contains("Hello, !"));
}

#[test]
fn render_layout_shows_first_tab_and_collapsed_expander() {
    let tmp = temp_home_dir();
    render(&tmp, "layout")
        .success()
        .stdout(contains("Column 1"))
        .stdout(contains("Column 3"))
        .stdout(contains("Content for Tab 1"))
        .stdout(contains("Content for Tab 2").not())
        .stdout(contains("▸ Click to expand"))
        .stdout(contains("Expanded content!").not());
}

#[test]
fn render_utilities_finishes_progress() {
    let tmp = temp_home_dir();
    render(&tmp, "Utilities")
        .success()
        .stdout(contains("Progress: 100%"))
        .stdout(contains("```python"))
        .stdout(contains("\"key\": \"value\""))
        .stdout(contains("🎈 Balloons!").not());
}

#[test]
/// The pass only returns once the paced progress loop has run all 100 steps.
fn render_utilities_waits_for_progress_steps() {
    let tmp = temp_home_dir();
    let start = std::time::Instant::now();
    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .args(["render", "--section", "utilities", "--progress-step-ms", "3"])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Progress: 100%"));
    assert!(start.elapsed() >= std::time::Duration::from_millis(300));
}

#[test]
fn render_media_lists_embeds() {
    let tmp = temp_home_dir();
    render(&tmp, "media")
        .success()
        .stdout(contains("[image] https://via.placeholder.com/400"))
        .stdout(contains("Sample Image"))
        .stdout(contains("[video] https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
}

#[test]
fn render_rejects_unknown_section() {
    let tmp = temp_home_dir();
    render(&tmp, "Settings").failure();
}

#[test]
/// Broken config files are reported instead of silently replaced.
fn render_fails_on_invalid_config() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "not json").unwrap();
    render(&tmp, "charts").failure();
}

#[test]
/// Init command should write the default config file.
fn init_config_creates_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);

    // Ensure the file does not exist initially
    assert!(!config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("init-config")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Config written"));

    let written = fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("\"progress_step_ms\": 10"));
    assert!(written.contains("\"celebration_ms\": 2500"));
}

#[test]
/// Reset command should delete an existing config file.
fn reset_config_deletes_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    // Ensure the file exists
    assert!(config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("reset-config")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Removing config"));

    // Confirm the file was deleted
    assert!(!config_path.exists());
}

#[test]
fn explicit_config_path_is_used() {
    let tmp = temp_home_dir();
    let custom = tmp.path().join("custom.json");
    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .args(["init-config", "--config"])
        .arg(&custom)
        .env("HOME", tmp.path())
        .assert()
        .success();
    assert!(custom.exists());
    assert!(!config_file_path(&tmp).exists());
}
