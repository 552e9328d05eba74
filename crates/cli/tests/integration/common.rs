//! Shared test helpers for CLI integration tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Isolated test environment.
///
/// Each test gets its own temporary directory, used as the working directory
/// of every command it runs.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  pub fn path(&self) -> &Path {
    self.temp.path()
  }

  /// Path relative to the temp directory, as a string argument.
  pub fn arg(&self, relative_path: &str) -> String {
    self.path().join(relative_path).display().to_string()
  }

  pub fn read(&self, relative_path: &str) -> String {
    std::fs::read_to_string(self.path().join(relative_path))
      .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
  }

  /// Number of entries directly under the temp directory.
  pub fn entry_count(&self) -> usize {
    std::fs::read_dir(self.path()).unwrap().count()
  }

  /// The stub binary under its cargo name.
  pub fn stub_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("qt-tool-stub");
    cmd.current_dir(self.path());
    cmd.env_remove("QT_TOOL_STUB_LOG");
    cmd
  }

  /// A copy of the stub binary installed as `name` (e.g. `moc`).
  ///
  /// The copy lives in a `tools` directory next to the test's files.
  pub fn stub_named(&self, name: &str) -> Command {
    let tools = self.path().join("tools");
    std::fs::create_dir_all(&tools).unwrap();
    let installed: PathBuf = tools.join(format!("{}{}", name, std::env::consts::EXE_SUFFIX));
    std::fs::copy(env!("CARGO_BIN_EXE_qt-tool-stub"), &installed).unwrap();

    let mut cmd = Command::new(&installed);
    cmd.current_dir(self.path());
    cmd.env_remove("QT_TOOL_STUB_LOG");
    cmd
  }

  /// The game-export binary.
  pub fn export_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("game-export");
    cmd.current_dir(self.path());
    cmd
  }
}
