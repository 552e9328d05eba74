mod export;
mod launch;

pub use export::cmd_export;
pub use launch::cmd_launch;

use std::path::{Path, PathBuf};

use serde::Serialize;
use stubkit_lib::export::game_script_path;
use stubkit_lib::platform::Os;

/// Machine-readable result shared by `export` and `launch`.
#[derive(Debug, Serialize)]
struct ExportSummary {
  base: PathBuf,
  script: PathBuf,
  ok: bool,
  host: Option<Os>,
}

impl ExportSummary {
  fn new(base: &Path, ok: bool) -> Self {
    let script = game_script_path(base);
    let script = if ok { dunce::canonicalize(&script).unwrap_or(script) } else { script };
    Self {
      base: base.to_path_buf(),
      script,
      ok,
      host: Os::current(),
    }
  }
}
