//! End-to-end tests of the `copula` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const ENV_VARS: [&str; 8] = [
    "COPULA_N",
    "COPULA_RHO",
    "COPULA_SEED",
    "COPULA_MU_G",
    "COPULA_SIGMA_G",
    "COPULA_M_MEAN",
    "COPULA_M_VAR",
    "COPULA_LOG_LEVEL",
];

fn copula(args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_copula"));
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to run copula binary")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

fn out_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn test_simulate_writes_reports() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let output = copula(&["simulate", "--out", &out_arg(&out), "--n", "3000", "--rho", "0.6"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let diagnostics = stdout_json(&output);
    let pearson = diagnostics["pearson"].as_f64().unwrap();
    assert!(pearson > 0.4 && pearson < 0.7, "pearson {}", pearson);

    let csv = fs::read_to_string(out.join("samples.csv")).unwrap();
    assert!(csv.starts_with("growth,margin\n"));
    assert_eq!(csv.lines().count(), 3001);

    let file_json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("diagnostics.json")).unwrap()).unwrap();
    assert_eq!(file_json, diagnostics);

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("summary.json")).unwrap()).unwrap();
    assert!(summary["growth"]["p5"].as_f64().unwrap() < summary["growth"]["p95"].as_f64().unwrap());
}

#[test]
fn test_simulate_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let a = copula(&["simulate", "--out", &out_arg(&dir.path().join("a")), "--n", "500"]);
    let b = copula(&["simulate", "--out", &out_arg(&dir.path().join("b")), "--n", "500"]);
    assert!(a.status.success() && b.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn test_simulate_negative_rho_flag() {
    let dir = tempfile::tempdir().unwrap();
    let output = copula(&[
        "simulate",
        "--out",
        &out_arg(dir.path()),
        "--n",
        "2000",
        "--rho",
        "-0.5",
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout_json(&output)["spearman"].as_f64().unwrap() < 0.0);
}

#[test]
fn test_simulate_requires_out() {
    let output = copula(&["simulate"]);
    assert!(!output.status.success());
}

#[test]
fn test_invalid_margin_variance_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = copula(&[
        "simulate",
        "--out",
        &out_arg(dir.path()),
        "--m-mean",
        "0.5",
        "--m-var",
        "0.26",
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("variance"));
    assert!(!dir.path().join("samples.csv").exists());
}

#[test]
fn test_check_with_config_file_and_env() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("copula.toml");
    fs::write(&config_path, "rho = 0.2\nm_mean = 0.25\nm_var = 0.01\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_copula"))
        .env_remove("RUST_LOG")
        .env("COPULA_RHO", "0.5")
        .args(["check", "--config", &out_arg(&config_path)])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let report = stdout_json(&output);
    assert_eq!(report["config"]["rho"].as_f64(), Some(0.5));
    assert_eq!(report["config"]["m_mean"].as_f64(), Some(0.25));
    let l10 = report["cholesky"][1][0].as_f64().unwrap();
    assert!((l10 - 0.5).abs() < 1e-12);
}

#[test]
fn test_check_rejects_singular_rho() {
    let output = copula(&["check", "--rho", "1.0"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("positive definite"));
}
