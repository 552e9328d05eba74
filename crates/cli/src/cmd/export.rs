//! Implementation of the `game-export export` command.

use std::path::Path;

use anyhow::{Context, Result};

use stubkit_lib::export::export_files;

use super::ExportSummary;
use crate::output::{OutputFormat, print_json, print_stat, print_success, print_warning};

/// Execute the export command.
///
/// Returns whether the script was exported. With `quiet`, a Windows-style
/// base path on a non-Windows host is reported as a warning and yields
/// `false` instead of an error.
///
/// # Errors
///
/// Returns an error for a rejected path (unless `quiet`) or if the files
/// cannot be written.
pub fn cmd_export(base: &Path, quiet: bool, output: OutputFormat) -> Result<bool> {
  let exported = export_files(base, !quiet).context("Failed to export files")?;
  let summary = ExportSummary::new(base, exported);

  if output.is_json() {
    print_json(&summary)?;
  } else if exported {
    print_success("Game script exported");
    print_stat("Script", &summary.script.display().to_string());
  } else {
    print_warning("Export skipped: Windows-style path (C:/) on a non-Windows system");
  }

  Ok(exported)
}
