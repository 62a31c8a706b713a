//! End-to-end CLI behaviour: exit codes, config layering, output formats.

use std::path::Path;
use std::process::Command;

use clap::Parser;
use maldet_cli::{run, Cli, EXIT_FAILURE, EXIT_OK, EXIT_USAGE, MISSING_URL_HINT};

fn invoke(args: &[&str], cwd: &Path) -> (i32, String, String) {
    let mut argv = vec!["maldet"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(&cli, cwd, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn missing_url_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let (code, out, err) = invoke(&[], dir.path());
    assert_eq!(code, EXIT_USAGE);
    assert!(out.is_empty());
    assert_eq!(err.trim_end(), MISSING_URL_HINT);
}

#[test]
fn missing_url_skips_config_loading() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let (code, _, _) = invoke(&["--config", missing.to_str().unwrap()], dir.path());
    assert_eq!(code, EXIT_USAGE);
}

#[test]
fn binary_exits_2_without_url() {
    let output = Command::new(env!("CARGO_BIN_EXE_maldet"))
        .current_dir(tempfile::tempdir().unwrap().path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(EXIT_USAGE));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(MISSING_URL_HINT));
}

#[test]
fn summary_output() {
    let dir = tempfile::tempdir().unwrap();
    let (code, out, _) = invoke(&["--url", "https://www.wikipedia.org"], dir.path());
    assert_eq!(code, EXIT_OK);
    assert!(out.starts_with("URL : https://www.wikipedia.org\n"));
    assert!(out.contains("SCORE: 0.6400  THRESHOLD: 2.5"));
    assert!(out.contains("LABEL: BENIGN"));
    assert!(out.contains("Top contributions:"));
}

#[test]
fn json_output_is_the_explanation() {
    let dir = tempfile::tempdir().unwrap();
    let (code, out, _) = invoke(
        &["--url", "http://192.168.0.10/admin", "--json"],
        dir.path(),
    );
    assert_eq!(code, EXIT_OK);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["url"], "http://192.168.0.10/admin");
    assert_eq!(json["label"], 1);
    assert_eq!(json["threshold"], 2.5);
    assert_eq!(json["features"]["has_ip_host"], 1);
    assert_eq!(json["contributions"]["has_ip_host"], 4.0);
}

#[test]
fn project_config_threshold_applies() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("maldet.toml"), "[scoring]\nthreshold = 9.0\n").unwrap();
    let (code, out, _) = invoke(&["--url", "http://192.168.0.10/admin"], dir.path());
    assert_eq!(code, EXIT_OK);
    assert!(out.contains("THRESHOLD: 9.0"));
    assert!(out.contains("LABEL: BENIGN"));
}

#[test]
fn threshold_flag_beats_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("maldet.toml"), "[scoring]\nthreshold = 9.0\n").unwrap();
    let (code, out, _) = invoke(
        &["--url", "http://192.168.0.10/admin", "--threshold", "1.5"],
        dir.path(),
    );
    assert_eq!(code, EXIT_OK);
    assert!(out.contains("THRESHOLD: 1.5"));
    assert!(out.contains("LABEL: MALICIOUS"));
}

#[test]
fn config_weights_change_the_score() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[scoring.weights]\nhas_ip_host = 0.0\n").unwrap();
    let (code, out, _) = invoke(
        &["--url", "http://192.168.0.10/admin", "--config", path.to_str().unwrap()],
        dir.path(),
    );
    assert_eq!(code, EXIT_OK);
    assert!(out.contains("SCORE: 1.4200"));
}

#[test]
fn missing_config_file_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let (code, out, err) = invoke(
        &["--url", "http://x.com", "--config", missing.to_str().unwrap()],
        dir.path(),
    );
    assert_eq!(code, EXIT_FAILURE);
    assert!(out.is_empty());
    assert!(err.contains("[CONFIG_ERROR]"));
}

#[test]
fn invalid_config_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("maldet.toml"), "[scoring\nthreshold = ").unwrap();
    let (code, _, err) = invoke(&["--url", "http://x.com"], dir.path());
    assert_eq!(code, EXIT_FAILURE);
    assert!(err.contains("[CONFIG_ERROR]"));
}

#[test]
fn unreadable_suffix_list_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    let list = dir.path().join("missing.dat");
    std::fs::write(
        dir.path().join("maldet.toml"),
        format!("[domains]\nsuffix_list_path = {:?}\n", list.to_str().unwrap()),
    )
    .unwrap();
    let (code, _, err) = invoke(&["--url", "http://x.com"], dir.path());
    assert_eq!(code, EXIT_FAILURE);
    assert!(err.contains("[SUFFIX_LIST_ERROR]"));
}

#[test]
fn non_finite_threshold_flag_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, err) = invoke(&["--url", "http://x.com", "--threshold", "NaN"], dir.path());
    assert_eq!(code, EXIT_FAILURE);
    assert!(err.contains("--threshold"));
}

#[test]
fn zero_contributions_are_listed_in_table_order() {
    let dir = tempfile::tempdir().unwrap();
    let (_, out, _) = invoke(&["--url", "https://www.wikipedia.org"], dir.path());
    let names: Vec<&str> = out
        .lines()
        .skip_while(|l| *l != "Top contributions:")
        .skip(1)
        .filter_map(|l| l.split_whitespace().next())
        .collect();
    assert_eq!(names.len(), 10);
    assert_eq!(
        &names[5..],
        ["has_ip_host", "has_at", "has_login", "has_verify", "path_depth"]
    );
}
