//! Fixture-driven CLI synthetic tests.
//!
//! Each case under `tests/fixtures/<case>/` provides:
//! - `input.txt`     file handed to the converter
//! - `scenario.toml` command line and command-level assertions
//! - `expected.txt`  expected output file (only for successful runs)
//!
//! `{input}` and `{output}` in the arguments are replaced by paths inside a
//! temporary directory.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;

#[derive(Debug, Deserialize)]
struct Scenario {
    args: Vec<String>,
    #[serde(default)]
    expect_exit: i32,
    #[serde(default)]
    stderr_contains: Vec<String>,
    #[serde(default)]
    stderr_not_contains: Vec<String>,
}

#[test]
fn test_synthetic_fixtures() {
    let root = Path::new("tests").join("fixtures");
    assert!(root.exists(), "Fixture root missing: {}", root.display());

    let mut case_dirs: Vec<PathBuf> = fs::read_dir(&root)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    case_dirs.sort();
    assert!(!case_dirs.is_empty(), "No synthetic test cases found");

    for case_dir in case_dirs {
        run_case(&case_dir);
    }
}

fn run_case(case_dir: &Path) {
    let case_name = case_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown-case>");

    let scenario_path = case_dir.join("scenario.toml");
    let scenario_content = fs::read_to_string(&scenario_path).unwrap_or_else(|e| {
        panic!(
            "Case '{}' failed to read scenario file {}: {}",
            case_name,
            scenario_path.display(),
            e
        )
    });
    let scenario: Scenario = toml::from_str(&scenario_content).unwrap_or_else(|e| {
        panic!(
            "Case '{}' has invalid scenario TOML in {}: {}",
            case_name,
            scenario_path.display(),
            e
        )
    });

    let temp = tempfile::TempDir::new().unwrap();
    let input = temp.path().join("input.txt");
    let output_path = temp.path().join("output.txt");
    fs::copy(case_dir.join("input.txt"), &input).unwrap();

    let args: Vec<String> = scenario
        .args
        .iter()
        .map(|arg| {
            arg.replace("{input}", &input.to_string_lossy())
                .replace("{output}", &output_path.to_string_lossy())
        })
        .collect();

    let output = run_tagconv(&args);
    let code = output.status.code().unwrap_or(-1);
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    assert_eq!(
        code, scenario.expect_exit,
        "Case '{}' ({:?}) exit code mismatch.\nstderr:\n{}",
        case_name, scenario.args, stderr
    );

    for needle in &scenario.stderr_contains {
        assert!(
            stderr.contains(needle),
            "Case '{}' expected stderr to contain {:?}.\nstderr:\n{}",
            case_name,
            needle,
            stderr
        );
    }

    for needle in &scenario.stderr_not_contains {
        assert!(
            !stderr.contains(needle),
            "Case '{}' expected stderr to NOT contain {:?}.\nstderr:\n{}",
            case_name,
            needle,
            stderr
        );
    }

    let expected_path = case_dir.join("expected.txt");
    if expected_path.exists() {
        let expected = fs::read_to_string(&expected_path).unwrap();
        let actual = fs::read_to_string(&output_path).unwrap_or_else(|e| {
            panic!("Case '{}' produced no output file: {}", case_name, e)
        });
        assert_eq!(
            normalize_newlines(&actual),
            normalize_newlines(&expected),
            "Case '{}' output mismatch",
            case_name
        );
    }
}

fn run_tagconv(args: &[String]) -> Output {
    let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_tagconv"));
    cmd.env_remove("RUST_LOG").args(args);

    cmd.output()
        .unwrap_or_else(|e| panic!("Failed to execute tagconv with args {:?}: {}", args, e))
}

fn normalize_newlines(content: &str) -> String {
    content.replace("\r\n", "\n")
}
