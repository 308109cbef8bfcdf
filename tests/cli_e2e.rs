//! End-to-end CLI tests for wastats.
//!
//! These tests run the actual binary and check its exit status, stdout
//! and stderr.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates a temporary directory with transcript fixtures.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    let chat = "\
12/03/2021, 08:15 - Messages to this group are now secured with end-to-end encryption. Tap for more info.
12/03/2021, 08:15 - Alice created group \"Trip\"
12/03/2021, 08:16 - Alice: Who is in?
12/03/2021, 08:17 - Bob: me
and my sister
12/03/2021, 08:18 - Bob: <Media omitted>
12/03/2021, 08:19 - Bob changed the subject from \"Trip\" to \"Trip 2021\"
";
    fs::write(dir.path().join("chat.txt"), chat).unwrap();

    let malformed = "\
no header on this line
12/03/2021, 08:16 - Alice: Hello
";
    fs::write(dir.path().join("malformed.txt"), malformed).unwrap();

    let bad_date = "31/02/2021, 08:16 - Alice: Hello\n";
    fs::write(dir.path().join("bad_date.txt"), bad_date).unwrap();

    fs::write(dir.path().join("empty.txt"), "").unwrap();

    dir
}

fn wastats_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_wastats"));
    Command::from_std(cmd)
}

// ============================================================================
// Report Output
// ============================================================================

mod report {
    use super::*;

    #[test]
    fn test_report_lines_in_rank_order() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("chat.txt");

        let output = wastats_cmd().arg(&input).assert().success().get_output().clone();
        let stdout = String::from_utf8(output.stdout).unwrap();
        let lines: Vec<&str> = stdout.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Bob wrote 3 messages (text: 1, media: 1, subject_change: 1) whose text had a total of 16 bytes.",
                "Alice wrote 1 messages (text: 1, media: 0, subject_change: 0) whose text had a total of 10 bytes.",
            ]
        );
    }

    #[test]
    fn test_notices_not_reported() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("chat.txt");

        wastats_cmd()
            .arg(&input)
            .assert()
            .success()
            .stdout(predicate::str::contains("encryption").not())
            .stdout(predicate::str::contains("created group").not());
    }

    #[test]
    fn test_empty_file_prints_nothing() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("empty.txt");

        wastats_cmd()
            .arg(&input)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn test_debug_logs_go_to_stderr() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("chat.txt");

        wastats_cmd()
            .arg(&input)
            .env("RUST_LOG", "debug")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Bob wrote"))
            .stderr(predicate::str::contains("notice"));
    }
}

// ============================================================================
// Error Handling
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_no_arguments() {
        wastats_cmd()
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("exactly one argument"));
    }

    #[test]
    fn test_too_many_arguments() {
        wastats_cmd()
            .args(["a.txt", "b.txt"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("exactly one argument"));
    }

    #[test]
    fn test_missing_file() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("nope.txt");

        wastats_cmd()
            .arg(&input)
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Error:"));
    }

    #[test]
    fn test_malformed_transcript_prints_no_report() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("malformed.txt");

        wastats_cmd()
            .arg(&input)
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Malformed message at line 1"));
    }

    #[test]
    fn test_invalid_date() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("bad_date.txt");

        wastats_cmd()
            .arg(&input)
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Invalid timestamp"));
    }
}

// ============================================================================
// Help and Version
// ============================================================================

mod info {
    use super::*;

    #[test]
    fn test_help() {
        wastats_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage"));
    }

    #[test]
    fn test_version() {
        wastats_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
