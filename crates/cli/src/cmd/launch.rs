//! Implementation of the `game-export launch` command.

use std::path::Path;

use anyhow::{Context, Result};

use stubkit_lib::export::launch_game;

use super::ExportSummary;
use crate::output::{OutputFormat, print_error, print_json, print_stat, print_success};

/// Execute the launch command: export quietly, then check the script is in place.
///
/// Returns whether the script is ready.
pub fn cmd_launch(base: &Path, output: OutputFormat) -> Result<bool> {
  let ready = launch_game(base).context("Failed to prepare game launch")?;
  let summary = ExportSummary::new(base, ready);

  if output.is_json() {
    print_json(&summary)?;
  } else if ready {
    print_success("Game script ready");
    print_stat("Script", &summary.script.display().to_string());
  } else {
    print_error("Failed to export files; game launch aborted.");
  }

  Ok(ready)
}
