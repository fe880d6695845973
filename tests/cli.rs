//! End-to-end tests for the pdfscan binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{ json, Value };

fn pdfscan() -> Command {
    cargo_bin_cmd!("pdfscan")
}

fn stdout_json(args: &[&str]) -> Value {
    let out = pdfscan().args(args).assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).expect("stdout is json")
}


mod help {
    use super::*;

    #[test]
    fn no_arguments_prints_usage() {
        pdfscan()
            .assert()
            .success()
            .stdout(predicate::str::contains("Allowed options"))
            .stdout(predicate::str::contains("--single_page"));
    }

    #[test]
    fn help_flag_ignores_the_rest() {
        pdfscan()
            .args(["--config", "c", "--start", "-1", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Allowed options"))
            .stderr(predicate::str::is_empty());
    }
}

mod errors {
    use super::*;

    #[test]
    fn missing_config() {
        pdfscan()
            .args(["--output", "out.json"])
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("ERROR: no configuration file set"))
            .stderr(predicate::str::contains("Allowed options"));
    }

    #[test]
    fn missing_action() {
        pdfscan()
            .args(["-c", "cfg.json"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("must specify an output file"));
    }

    #[test]
    fn page_with_range() {
        pdfscan()
            .args(["-c", "cfg.json", "-h", "-p", "2", "-s", "0"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("start and/or end and page cannot be used at the same time"))
            .stderr(predicate::str::contains("Allowed options").not());
    }

    #[test]
    fn range_with_single_page() {
        pdfscan()
            .args(["-c", "cfg.json", "-S", "page.png", "-s", "0"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("start and end are invalid parameters for single_page"));
    }

    #[test]
    fn negative_page() {
        pdfscan()
            .args(["-c", "cfg.json", "-o", "out.json", "-p", "-3"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("invalid start or end range or page"));
    }

    #[test]
    fn unknown_option() {
        pdfscan()
            .args(["-c", "cfg.json", "-o", "out.json", "--first_page", "x"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("--first_page"))
            .stderr(predicate::str::contains("Allowed options"));
    }
}

mod dispatch {
    use super::*;

    #[test]
    fn single_page() {
        assert_eq!(
            stdout_json(&["--config", "cfg.json", "--single_page", "page.png", "--page", "3"]),
            json!({ "command": "page", "config": "cfg.json", "path": "page.png", "page": 3 })
        );
    }

    #[test]
    fn info() {
        assert_eq!(
            stdout_json(&["-c", "cfg.json", "-i", "info.json"]),
            json!({ "command": "info", "config": "cfg.json", "path": "info.json" })
        );
    }

    #[test]
    fn human_range() {
        assert_eq!(
            stdout_json(&["-c", "cfg.json", "--human", "--start", "1", "--end", "5"]),
            json!({ "command": "human", "config": "cfg.json", "start": 1, "end": 5, "page": null })
        );
    }

    #[test]
    fn structured_output() {
        assert_eq!(
            stdout_json(&["-c", " cfg.json ", "-o", "out.json"]),
            json!({
                "command": "output",
                "config": "cfg.json",
                "path": "out.json",
                "start": null,
                "end": null,
                "page": null,
            })
        );
    }

    #[test]
    fn debug_logging_goes_to_stderr() {
        pdfscan()
            .env("RUST_LOG", "pdfscan=debug")
            .args(["-c", "cfg.json", "-o", "out.json"])
            .assert()
            .success()
            .stderr(predicate::str::contains("structured output"));
    }
}
