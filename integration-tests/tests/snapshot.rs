use chrono::{Local, TimeZone};
use integration_tests::harness::ps_output;
use loglens_core::cli::snapshot::{SnapshotError, StaticSource, take_snapshot};
use loglens_core::conf::SnapshotConfig;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

fn config_in(dir: &std::path::Path) -> SnapshotConfig {
    SnapshotConfig {
        report_dir: dir.to_path_buf(),
        ..SnapshotConfig::default()
    }
}

/// alice and bob: bob is the heaviest consumer of both resources.
#[test]
fn two_user_report_end_to_end() {
    let dir = tempdir().unwrap();
    let source = StaticSource(ps_output(&[
        ("alice", "5.0", "2.0", "/usr/bin/alice-worker --threads 4"),
        ("bob", "90.0", "50.0", "/opt/bob/bin/cruncher --input /data/big.csv"),
    ]));
    let now = Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();

    let outcome = take_snapshot(&source, &config_in(dir.path()), now).unwrap();

    let expected = "\
System state report:
System users: alice, bob
Processes running: 2

User processes:
alice: 1
bob: 1

Total memory used: 52.0%
Total CPU used: 95.0%
Most memory used by: 50.0% (/opt/bob/bin/crunche)
Most CPU used by: 90.0% (/opt/bob/bin/crunche)
";
    assert_eq!(outcome.rendered, expected);
    assert_eq!(
        fs::read_to_string(dir.path().join("2025-01-02-03:04-scan.txt")).unwrap(),
        expected
    );
}

/// An empty listing still renders with the fallback peak fields.
#[test]
fn empty_listing_renders_fallbacks() {
    let dir = tempdir().unwrap();
    let now = Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();

    let outcome = take_snapshot(&StaticSource(ps_output(&[])), &config_in(dir.path()), now).unwrap();

    assert_eq!(outcome.report.total_processes, 0);
    assert!(outcome.rendered.contains("Processes running: 0\n"));
    assert!(outcome.rendered.contains("Most memory used by: 0.0% (N/A)\n"));
    assert!(outcome.rendered.contains("Most CPU used by: 0.0% (N/A)\n"));
}

/// Non-numeric usage values drop only the affected row.
#[test]
fn bad_rows_are_skipped_not_fatal() {
    let dir = tempdir().unwrap();
    let source = StaticSource(ps_output(&[
        ("root", "0.5", "1.5", "/sbin/init"),
        ("mallory", "??", "1.0", "weird"),
    ]));
    let now = Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();

    let outcome = take_snapshot(&source, &config_in(dir.path()), now).unwrap();

    assert_eq!(outcome.report.total_processes, 1);
    assert_eq!(outcome.report.skipped_rows, 1);
    assert!(!outcome.rendered.contains("mallory"));
}

#[cfg(unix)]
mod command_source {
    use super::config_in;
    use chrono::{Local, TimeZone};
    use integration_tests::harness::ps_output;
    use loglens_core::cli::snapshot::{CommandSource, ProcessSource, SnapshotError, take_snapshot};
    use std::fs;
    use tempfile::tempdir;

    /// The configured command's stdout is parsed like `ps aux` output.
    #[test]
    fn reads_command_stdout() {
        let table = ps_output(&[("carol", "1.0", "2.0", "sleep 100")]);
        let source = CommandSource::new("printf", vec!["%s".to_string(), table]);

        let output = source.snapshot().unwrap();

        assert!(output.contains("carol"));
    }

    /// A non-zero exit is reported with the command's diagnostics.
    #[test]
    fn failing_command_is_reported() {
        let dir = tempdir().unwrap();
        let source = CommandSource::new(
            "sh",
            vec!["-c".to_string(), "echo boom >&2; exit 3".to_string()],
        );
        let now = Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();

        let err = take_snapshot(&source, &config_in(dir.path()), now).unwrap_err();

        match &err {
            SnapshotError::CommandFailed { status, stderr, .. } => {
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    /// A command that cannot be started surfaces as a spawn error.
    #[test]
    fn missing_command_is_reported() {
        let source = CommandSource::new("loglens-no-such-command", Vec::new());

        let err = source.snapshot().unwrap_err();

        assert!(matches!(err, SnapshotError::Spawn { .. }));
        assert!(err.to_string().contains("loglens-no-such-command"));
    }
}

#[test]
fn source_errors_name_the_command() {
    let err = SnapshotError::InvalidOutput {
        command: "ps aux".to_string(),
    };

    assert_eq!(
        err.to_string(),
        "'ps aux' produced output that is not valid UTF-8"
    );
}
