//! Configuration layering: file, environment, then flags.

use chessort_cli::config::{CONFIG_ENV, FORMAT_ENV, MAX_RETRIES_ENV, SEED_ENV, STRATEGY_ENV};
use chessort_cli::run;
use serial_test::serial;
use tempfile::TempDir;

fn clear_env() {
    unsafe {
        for key in [CONFIG_ENV, SEED_ENV, MAX_RETRIES_ENV, STRATEGY_ENV, FORMAT_ENV] {
            std::env::remove_var(key);
        }
    }
}

fn cfg_json() -> (i32, serde_json::Value, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["chessort", "cfg"], &mut out, &mut err);
    let value = serde_json::from_slice(&out).unwrap_or(serde_json::Value::Null);
    (code, value, String::from_utf8_lossy(&err).into_owned())
}

#[test]
#[serial]
fn defaults_are_reported_with_their_source() {
    clear_env();
    let (code, json, _) = cfg_json();
    assert_eq!(code, 0);
    assert_eq!(json["seed"]["value"], serde_json::Value::Null);
    assert_eq!(json["max_retries"]["value"], 12);
    assert_eq!(json["strategy"]["value"], "randomized");
    assert_eq!(json["format"]["value"], "text");
    assert_eq!(json["strategy"]["source"], "default");
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("chessort.toml");
    std::fs::write(&path, "seed = 11\nstrategy = \"circle\"\nmax_retries = 30\n").unwrap();
    unsafe {
        std::env::set_var(CONFIG_ENV, &path);
        std::env::set_var(SEED_ENV, "99");
    }

    let (code, json, stderr) = cfg_json();
    clear_env();

    assert_eq!(code, 0, "stderr: {}", stderr);
    assert_eq!(json["seed"]["value"], 99);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["strategy"]["value"], "circle");
    assert_eq!(json["strategy"]["source"], "file");
    assert_eq!(json["max_retries"]["value"], 30);
}

#[test]
#[serial]
fn unknown_config_key_fails() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("chessort.toml");
    std::fs::write(&path, "sead = 1\n").unwrap();
    unsafe {
        std::env::set_var(CONFIG_ENV, &path);
    }

    let (code, _, stderr) = cfg_json();
    clear_env();

    assert_eq!(code, 1);
    assert!(stderr.starts_with("Error: Configuration error:"), "stderr: {}", stderr);
}

#[test]
#[serial]
fn flags_override_env_for_draw() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("players.txt");
    std::fs::write(&input, "A\nB\nC\nD\n").unwrap();
    unsafe {
        std::env::set_var(FORMAT_ENV, "json");
        std::env::set_var(SEED_ENV, "5");
    }

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(
        [
            "chessort",
            "draw",
            input.to_string_lossy().as_ref(),
            "-n",
            "2",
            "--seed",
            "6",
        ],
        &mut out,
        &mut err,
    );
    clear_env();

    assert_eq!(code, 0, "stderr: {}", String::from_utf8_lossy(&err));
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["seed"], 6);
}
