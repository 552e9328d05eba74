//! qt-tool-stub - stand-in for Qt's code generators.
//!
//! Install copies of this binary as `moc`, `uic`, `rcc`, ... to satisfy a
//! build graph without the real tools. Arguments are accepted verbatim,
//! `--help` included.

use std::ffi::OsString;

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use stubkit_lib::stub::{self, StubConfig, StubOutcome};

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let argv: Vec<OsString> = std::env::args_os().collect();
  let config = StubConfig::from_env();

  match stub::run(&argv, &config).context("qt-tool-stub failed")? {
    StubOutcome::Skipped => debug!("skipped"),
    StubOutcome::Written { path, kind } => debug!(path = %path.display(), ?kind, "done"),
  }

  Ok(())
}
