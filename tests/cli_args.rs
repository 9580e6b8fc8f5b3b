//! Integration tests for CLI argument handling
//!
//! Tests argument validation and a full run of the binary against a mock menu API.

use std::process::Command;

use chrono::{Local, Timelike};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_commons-menu"))
        .args(args)
        .env_remove("COMMONS_MENU_BASE_URL")
        .env_remove("COMMONS_MENU_CACHE_DIR")
        .output()
        .expect("Failed to execute commons-menu")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("commons-menu"), "Help should mention commons-menu");
    assert!(stdout.contains("--hour"), "Help should mention --hour flag");
}

#[test]
fn test_invalid_hour_prints_error_and_exits() {
    let output = run_cli(&["--hour", "42"]);
    assert!(!output.status.success(), "Expected invalid hour to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid hour"),
        "Should print error message about invalid hour: {}",
        stderr
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_json_run_against_mock_api() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/commons/breakfast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "menu_items": [["Eggs", "Bacon"]],
            "mealType": "Breakfast"
        })))
        .mount(&mock_server)
        .await;

    let cache_dir = TempDir::new().expect("Failed to create temp directory");
    let base_url = mock_server.uri();
    let cache_path = cache_dir.path().to_string_lossy().to_string();

    let output = run_cli(&[
        "--base-url",
        &base_url,
        "--cache-dir",
        &cache_path,
        "--hour",
        "8",
        "--json",
    ]);

    assert!(
        output.status.success(),
        "Run should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let snapshot: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(snapshot["label"], "Breakfast");
    assert_eq!(snapshot["items"], json!(["Eggs", "Bacon"]));
    assert!(cache_dir
        .path()
        .join("tamuDiningHallMenuFinder")
        .join("last_updated.json")
        .exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_fetch_exits_without_output_or_cache() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let cache_dir = TempDir::new().expect("Failed to create temp directory");
    let base_url = mock_server.uri();
    let cache_path = cache_dir.path().to_string_lossy().to_string();

    let output = run_cli(&[
        "--base-url",
        &base_url,
        "--cache-dir",
        &cache_path,
        "--json",
    ]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "No snapshot should be printed");
    assert!(!cache_dir.path().join("tamuDiningHallMenuFinder").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_hour_override_stores_real_time() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "menu_items": [["Soup"]]
        })))
        .mount(&mock_server)
        .await;

    let cache_dir = TempDir::new().expect("Failed to create temp directory");
    let base_url = mock_server.uri();
    let cache_path = cache_dir.path().to_string_lossy().to_string();
    let shifted_hour = ((Local::now().hour() + 12) % 24).to_string();

    let before = Local::now().timestamp_millis();
    let output = run_cli(&[
        "--base-url",
        &base_url,
        "--cache-dir",
        &cache_path,
        "--hour",
        &shifted_hour,
        "--json",
    ]);
    let after = Local::now().timestamp_millis();

    assert!(
        output.status.success(),
        "Run should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stored = std::fs::read_to_string(
        cache_dir
            .path()
            .join("tamuDiningHallMenuFinder")
            .join("last_updated.json"),
    )
    .expect("last_updated should be written");
    let stored: i64 = stored.trim().parse().expect("last_updated should be an integer");
    assert!(
        stored >= before && stored <= after,
        "stored last_updated {} should be between {} and {}",
        stored,
        before,
        after
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_widget_without_terminal_prints_plain_lines() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/commons/lunch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "menu_items": [["Pasta", "Salad"]]
        })))
        .mount(&mock_server)
        .await;

    let cache_dir = TempDir::new().expect("Failed to create temp directory");
    let base_url = mock_server.uri();
    let cache_path = cache_dir.path().to_string_lossy().to_string();

    // stdout is a pipe here, so the inline terminal viewport is not used
    let output = run_cli(&[
        "--base-url",
        &base_url,
        "--cache-dir",
        &cache_path,
        "--hour",
        "12",
    ]);

    assert!(
        output.status.success(),
        "Run should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].starts_with("Last check: "));
    assert_eq!(&lines[1..], ["Commons Dining Hall - Lunch", "Pasta", "Salad"]);
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use commons_menu::cli::{parse_hour_arg, Cli, OutputMode, StartupConfig};

    #[test]
    fn test_cli_no_args_uses_widget_output() {
        let cli = Cli::parse_from(["commons-menu"]);
        assert!(cli.hour.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_hour_arg_rejects_24() {
        assert!(parse_hour_arg(24).is_err());
    }

    #[test]
    fn test_startup_config_from_cli_json() {
        let cli = Cli::parse_from(["commons-menu", "--json", "--hour", "0"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.output, OutputMode::Json);
        assert_eq!(config.menu.hour, Some(0));
    }
}
