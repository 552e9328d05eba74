//! Export/launch fixture.
//!
//! `export_files` writes `<base>/bat/game.bat`, refusing Windows-style base
//! paths (`C:/...`) on non-Windows hosts. `launch_game` exports and then
//! reports whether the script is in place.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::consts::{BAT_DIR, GAME_SCRIPT, GAME_SCRIPT_BODY, WINDOWS_DRIVE_PREFIX};
use crate::platform::is_windows_family;

/// Errors that can occur during export.
#[derive(Debug, Error)]
pub enum ExportError {
  /// The base path is Windows-style but the host is not Windows.
  #[error("Path Warning")]
  PathWarning,

  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: std::io::Error },

  #[error("failed to write file {}: {source}", path.display())]
  WriteFile { path: PathBuf, source: std::io::Error },
}

/// Location of the exported script under `base`.
pub fn game_script_path(base: &Path) -> PathBuf {
  base.join(BAT_DIR).join(GAME_SCRIPT)
}

/// Whether `base` is rejected, given whether the host is Windows-family.
///
/// Only the literal `C:/` prefix is checked, and never on Windows.
pub fn rejects_base(windows_host: bool, base: &Path) -> bool {
  !windows_host && base.to_string_lossy().starts_with(WINDOWS_DRIVE_PREFIX)
}

/// Write `<base>/bat/game.bat`.
///
/// Returns `Ok(false)` without writing anything when the base path is
/// rejected for this host and `show_message` is false.
///
/// # Errors
///
/// Returns [`ExportError::PathWarning`] when the base path is rejected and
/// `show_message` is true, or an I/O error if the directory or script
/// cannot be written.
pub fn export_files(base: &Path, show_message: bool) -> Result<bool, ExportError> {
  if rejects_base(is_windows_family(), base) {
    warn!(base = %base.display(), "export failed due to invalid path format");
    if show_message {
      return Err(ExportError::PathWarning);
    }
    return Ok(false);
  }

  let bat_dir = base.join(BAT_DIR);
  fs::create_dir_all(&bat_dir).map_err(|e| ExportError::CreateDir {
    path: bat_dir.clone(),
    source: e,
  })?;

  let script = bat_dir.join(GAME_SCRIPT);
  fs::write(&script, GAME_SCRIPT_BODY).map_err(|e| ExportError::WriteFile {
    path: script.clone(),
    source: e,
  })?;

  debug!(path = %script.display(), "exported game script");
  Ok(true)
}

/// Export quietly, then report whether the game script exists.
///
/// A rejected export returns `false` before anything is touched.
pub fn launch_game(base: &Path) -> Result<bool, ExportError> {
  if !export_files(base, false)? {
    warn!("export failed; game launch aborted");
    return Ok(false);
  }

  Ok(game_script_path(base).exists())
}
