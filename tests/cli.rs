//! Runs the `route-table` binary end to end.

use std::path::PathBuf;
use std::process::{Command, Output};

fn route_table(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_route-table"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run route-table")
}

fn write_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "route-table-cli-{name}-{}.toml",
        std::process::id()
    ));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_check_builtin_table() {
    let output = route_table(&["check"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("fallback `pages/404`"));
}

#[test]
fn test_check_fails_on_invalid_table() {
    let path = write_config(
        "no-wildcard",
        r#"
[[routes]]
path = "/"
component = "pages/index"
"#,
    );

    let output = route_table(&["--config", path.to_str().unwrap(), "check"]);
    std::fs::remove_file(&path).unwrap_or_default();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.to_lowercase().contains("wildcard"), "stderr: {stderr}");
}

#[test]
fn test_show_prints_json() {
    let output = route_table(&["show"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[1]["path"], "*");
}

#[test]
fn test_resolve_prints_params() {
    let output = route_table(&["resolve", "/monitor/abc123"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["params"]["stratId"], "abc123");
    assert_eq!(json[0]["views"][1]["props"]["stratId"], "abc123");
}
