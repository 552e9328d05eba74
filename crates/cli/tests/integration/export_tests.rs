//! game-export integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn export_writes_game_script() {
  let env = TestEnv::new();

  env
    .export_cmd()
    .arg("export")
    .arg(env.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("Game script exported"));

  assert_eq!(env.read("bat/game.bat"), "echo run");
}

#[test]
fn export_json_reports_script() {
  let env = TestEnv::new();

  let assert = env
    .export_cmd()
    .args(["export", "--output", "json"])
    .arg(env.path())
    .assert()
    .success();

  let summary: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
  assert_eq!(summary["ok"], true);
  assert!(summary["script"].as_str().unwrap().ends_with("game.bat"));
}

#[test]
fn export_windows_path_is_path_warning() {
  if cfg!(windows) {
    return;
  }

  let env = TestEnv::new();

  env
    .export_cmd()
    .args(["export", "C:/invalid"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Path Warning"));

  assert_eq!(env.entry_count(), 0);
}

#[test]
fn quiet_export_windows_path_warns() {
  if cfg!(windows) {
    return;
  }

  let env = TestEnv::new();

  env
    .export_cmd()
    .args(["export", "--quiet", "C:/invalid"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Export skipped"));

  assert_eq!(env.entry_count(), 0);
}

#[test]
fn launch_prepares_script() {
  let env = TestEnv::new();

  env
    .export_cmd()
    .arg("launch")
    .arg(env.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("Game script ready"));

  assert!(env.path().join("bat").join("game.bat").exists());
}

#[test]
fn launch_json_reports_failure_with_exit_status() {
  if cfg!(windows) {
    return;
  }

  let env = TestEnv::new();

  let assert = env
    .export_cmd()
    .args(["launch", "--output", "json", "C:/invalid"])
    .assert()
    .failure()
    .code(1);

  let summary: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
  assert_eq!(summary["ok"], false);
}

#[test]
fn launch_aborts_on_windows_path() {
  if cfg!(windows) {
    return;
  }

  let env = TestEnv::new();

  env
    .export_cmd()
    .args(["launch", "C:/invalid"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("game launch aborted"));

  assert_eq!(env.entry_count(), 0);
}
