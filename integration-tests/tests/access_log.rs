use integration_tests::harness::{LogDir, captured_events, init_test_tracing};
use loglens_core::cli::logs::{AccessLogError, analyze_to_dir};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::fs;

const SCENARIO_A: &str = r#"10.0.0.1 - - [10/Oct/2023:13:55:36 +0000] "GET /index.html HTTP/1.1" 200 512 "-" "curl/7.68.0" 120"#;

/// A single well-formed line produces the documented JSON document.
#[test]
fn single_line_summary_on_disk() {
    let dir = LogDir::with_lines(&[SCENARIO_A]);

    let outcome = analyze_to_dir(&dir.access_log(), &dir.results(), 3).unwrap();

    let written: Value =
        serde_json::from_str(&fs::read_to_string(dir.results().join("access.log.json")).unwrap())
            .unwrap();

    assert_eq!(outcome.output_path, dir.results().join("access.log.json"));
    assert_eq!(
        written,
        json!({
            "total_requests": 1,
            "http_methods": { "GET": 1 },
            "top_ips": [["10.0.0.1", 1]],
            "slowest_requests": [{
                "method": "GET",
                "url": "/index.html",
                "ip": "10.0.0.1",
                "duration": 120,
                "time": "2023-10-10T13:55:36+00:00"
            }]
        })
    );
}

/// Malformed lines in between valid ones are skipped without failing the run.
#[test]
fn mixed_log_skips_garbage() {
    let lines = [
        SCENARIO_A,
        "garbage",
        r#"10.0.0.2 - - [10/Oct/2023:13:55:37 +0000] "POST /api/login HTTP/1.1" 401 - "https://example.com/" "Mozilla/5.0" 310"#,
        r#"10.0.0.2 - - [bad time] "GET / HTTP/1.1" 200 1 "-" "-" 1"#,
        r#"10.0.0.3 - - [10/Oct/2023:13:55:38 +0000] "GET /health HTTP/1.1" 200 2 "-" "kube-probe/1.27" 2"#,
        r#"10.0.0.2 - - [10/Oct/2023:13:55:39 +0000] "GET /api/me HTTP/1.1" 200 77 "-" "Mozilla/5.0" 45"#,
    ];
    let dir = LogDir::with_lines(&lines);

    let outcome = analyze_to_dir(&dir.access_log(), &dir.results(), 3).unwrap();
    let stats = outcome.stats;

    assert_eq!(stats.total_requests, 4);
    assert_eq!(stats.skipped_lines, 2);
    assert_eq!(stats.http_methods.get("GET"), Some(&3));
    assert_eq!(stats.http_methods.get("POST"), Some(&1));
    assert_eq!(
        stats.top_ips,
        vec![
            ("10.0.0.2".to_string(), 2),
            ("10.0.0.1".to_string(), 1),
            ("10.0.0.3".to_string(), 1),
        ]
    );
    assert_eq!(
        stats
            .slowest_requests
            .iter()
            .map(|d| d.url.as_str())
            .collect::<Vec<_>>(),
        vec!["/api/login", "/index.html", "/api/me"]
    );
}

/// The input file being absent is reported and nothing is written.
#[test]
fn missing_access_log_is_reported() {
    let dir = LogDir::empty();

    let err = analyze_to_dir(&dir.access_log(), &dir.results(), 3).unwrap_err();

    assert!(matches!(err, AccessLogError::InputMissing { .. }));
    assert!(err.to_string().contains("not found"));
    assert!(!dir.results().exists());
}

/// A pre-existing output directory is reused.
#[test]
fn existing_output_dir_is_not_an_error() {
    let dir = LogDir::with_lines(&[SCENARIO_A]);
    fs::create_dir_all(dir.results()).unwrap();

    analyze_to_dir(&dir.access_log(), &dir.results(), 3).unwrap();

    assert!(dir.results().join("access.log.json").is_file());
}

/// Large inputs still yield at most three ranked entries.
#[test]
fn thousand_requests_stay_bounded() {
    let lines: Vec<String> = (0..1000)
        .map(|i| {
            format!(
                r#"10.1.{}.{} - - [10/Oct/2023:13:55:36 +0000] "GET /item/{i} HTTP/1.1" 200 10 "-" "bench" {}"#,
                i / 250,
                i % 250,
                i % 97
            )
        })
        .collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let dir = LogDir::with_lines(&refs);

    let stats = analyze_to_dir(&dir.access_log(), &dir.results(), 3)
        .unwrap()
        .stats;

    assert_eq!(stats.total_requests, 1000);
    assert_eq!(stats.top_ips.len(), 3);
    assert_eq!(stats.slowest_requests.len(), 3);
    assert!(stats.slowest_requests.iter().all(|d| d.duration == 96));
    // earliest arrivals win the duration tie
    assert_eq!(stats.slowest_requests[0].url, "/item/96");
}

/// Completion is logged with the totals.
#[test]
fn completion_event_is_logged() {
    init_test_tracing();
    let dir = LogDir::with_lines(&[SCENARIO_A, "junk"]);

    let outcome = analyze_to_dir(&dir.access_log(), &dir.results(), 3).unwrap();

    let output = outcome.output_path.display().to_string();
    let event = captured_events()
        .into_iter()
        .find(|e| e.field("output") == Some(output.as_str()))
        .expect("completion event not captured");

    assert_eq!(event.level, tracing::Level::INFO);
    assert_eq!(event.field("total_requests"), Some("1"));
    assert_eq!(event.field("skipped_lines"), Some("1"));
}
