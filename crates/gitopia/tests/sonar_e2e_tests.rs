//! End-to-end tests for `stats quality` against a local mock quality
//! server.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::path::Path;
use std::sync::atomic::{AtomicU16, Ordering};
use std::thread;
use std::time::Duration;

// Base offset from other test binaries so parallel runs cannot collide
static PORT_COUNTER: AtomicU16 = AtomicU16::new(53000);

fn get_available_port() -> u16 {
    PORT_COUNTER.fetch_add(1, Ordering::SeqCst)
}

fn start_routed_server(port: u16, routes: Vec<(&'static str, u16, String)>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        use std::io::{Read, Write};
        use std::net::TcpListener;

        let listener = match TcpListener::bind(format!("127.0.0.1:{}", port)) {
            Ok(l) => l,
            Err(_) => return,
        };

        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let mut buffer = [0; 8192];
            let Ok(n) = stream.read(&mut buffer) else { continue };

            let request = String::from_utf8_lossy(&buffer[..n]);
            let path = request
                .lines()
                .next()
                .and_then(|line| line.split_whitespace().nth(1))
                .map(|target| target.split('?').next().unwrap_or(target).to_string())
                .unwrap_or_default();

            let (status, body) = routes
                .iter()
                .find(|(route, _, _)| *route == path)
                .map(|(_, status, body)| (*status, body.clone()))
                .unwrap_or((
                    404,
                    r#"{"errors": [{"msg": "Component key not found"}]}"#.to_string(),
                ));

            let reason = match status {
                200 => "OK",
                401 => "Unauthorized",
                404 => "Not Found",
                _ => "Error",
            };
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nConnection: close\r\nContent-Length: {}\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    })
}

fn ok(path: &'static str, body: Value) -> (&'static str, u16, String) {
    (path, 200, body.to_string())
}

fn gitopia_at(config_dir: &Path, port: u16) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("gitopia");
    cmd.env_remove("GITOPIA_CONFIG")
        .env_remove("GITOPIA_GITHUB_TOKEN")
        .env_remove("XDG_CONFIG_HOME")
        .env("GITOPIA_CONFIG_DIR", config_dir)
        .env("GITOPIA_SONAR_URL", format!("http://127.0.0.1:{}", port))
        .env("GITOPIA_SONAR_TOKEN", "squ_test")
        .timeout(Duration::from_secs(10));
    cmd
}

fn measures_fixture() -> Value {
    json!({
        "component": {
            "key": "acme_webapp",
            "name": "Webapp",
            "qualifier": "TRK",
            "measures": [
                {"metric": "bugs", "value": "3"},
                {"metric": "sqale_index", "value": "600"},
                {"metric": "coverage", "value": "82.5", "bestValue": false}
            ]
        }
    })
}

fn issues_fixture() -> Value {
    json!({
        "total": 2,
        "issues": [
            {
                "key": "AY1",
                "rule": "secrets:S6290",
                "severity": "BLOCKER",
                "component": "acme_webapp:src/auth.rs",
                "line": 10,
                "message": "Remove this hardcoded credential",
                "type": "VULNERABILITY"
            },
            {
                "key": "AY2",
                "severity": "MINOR",
                "component": "acme_webapp:src/ui.rs",
                "message": "Remove this unused import"
            }
        ]
    })
}

#[test]
fn test_stats_quality_live_report() {
    let dir = tempfile::tempdir().unwrap();
    let port = get_available_port();

    let _server = start_routed_server(
        port,
        vec![
            ok("/api/measures/component", measures_fixture()),
            ok("/api/issues/search", issues_fixture()),
        ],
    );
    thread::sleep(Duration::from_millis(200));

    let output = gitopia_at(dir.path(), port)
        .args(["stats", "quality", "--component", "acme_webapp", "-o", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["source"], "live");

    // Metric cards come back in catalog order regardless of server order
    let metrics = json["data"]["metrics"].as_array().unwrap();
    assert_eq!(metrics.len(), 3);
    assert_eq!(metrics[0]["key"], "coverage");
    assert_eq!(metrics[0]["value"], 82.5);
    assert_eq!(metrics[0]["status"], "good");
    assert_eq!(metrics[1]["key"], "sqale_index");
    // 600 minutes of debt read as 10 hours
    assert_eq!(metrics[1]["value"], 10.0);
    assert_eq!(metrics[1]["status"], "warning");
    assert_eq!(metrics[2]["key"], "bugs");

    let issues = json["data"]["issues"].as_array().unwrap();
    assert_eq!(issues[0]["severity"], "critical");
    assert_eq!(issues[0]["component"], "src/auth.rs");
    assert_eq!(issues[0]["line"], 10);
    assert_eq!(issues[1]["severity"], "low");
    assert!(issues[1]["line"].is_null());
}

#[test]
fn test_stats_quality_text_shows_status_words() {
    let dir = tempfile::tempdir().unwrap();
    let port = get_available_port();

    let _server = start_routed_server(
        port,
        vec![
            ok("/api/measures/component", measures_fixture()),
            ok("/api/issues/search", issues_fixture()),
        ],
    );
    thread::sleep(Duration::from_millis(200));

    gitopia_at(dir.path(), port)
        .args(["stats", "quality", "--component", "acme_webapp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Code Coverage: 82.5% (good)"))
        .stdout(predicate::str::contains("Technical Debt: 10h (warning)"))
        .stdout(predicate::str::contains("Top issues (2):"))
        .stdout(predicate::str::contains("src/auth.rs:10"))
        .stdout(predicate::str::contains("Showing sample data").not());
}

#[test]
fn test_stats_quality_unknown_component_falls_back_to_sample() {
    let dir = tempfile::tempdir().unwrap();
    let port = get_available_port();

    // Every path 404s the way the quality server reports missing keys
    let _server = start_routed_server(port, Vec::new());
    thread::sleep(Duration::from_millis(200));

    gitopia_at(dir.path(), port)
        .args(["stats", "quality", "--component", "ghost_project"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing sample data"));
}
