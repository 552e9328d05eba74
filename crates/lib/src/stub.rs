//! Stand-in for Qt's code generators.
//!
//! Build graphs that depend on `moc`, `uic` and friends only need the output
//! file to exist. The stub scans the tool's command line for the output path,
//! writes a fixed placeholder there and optionally records the invocation:
//! - `-o <path>`, `-o<path>`, `--output <path>` and `--output=<path>` name the output
//! - `--output-dep-file [path]` is skipped, never treated as the output
//! - the placeholder is picked from the program's own name

use std::ffi::{OsStr, OsString};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::consts::{GENERIC_PAYLOAD, MOC_PAYLOAD, STUB_LOG_ENV, UIC_PAYLOAD};

/// Errors that can occur while producing stub output.
#[derive(Debug, Error)]
pub enum StubError {
  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: std::io::Error },

  #[error("failed to write file {}: {source}", path.display())]
  WriteFile { path: PathBuf, source: std::io::Error },

  #[error("failed to append to invocation log {}: {source}", path.display())]
  AppendLog { path: PathBuf, source: std::io::Error },
}

/// Which tool the stub is standing in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StubKind {
  Moc,
  Uic,
  Generic,
}

impl StubKind {
  /// Pick the kind from the program's invocation name (`argv[0]`).
  ///
  /// Only the final path component is inspected, case-insensitively. `moc`
  /// is checked before `uic`.
  pub fn from_invocation(argv0: &str) -> Self {
    let name = Path::new(argv0)
      .file_name()
      .map(|n| n.to_string_lossy().to_lowercase())
      .unwrap_or_default();

    if name.contains("moc") {
      Self::Moc
    } else if name.contains("uic") {
      Self::Uic
    } else {
      Self::Generic
    }
  }

  /// The placeholder written to the output file.
  pub fn payload(&self) -> &'static str {
    match self {
      Self::Moc => MOC_PAYLOAD,
      Self::Uic => UIC_PAYLOAD,
      Self::Generic => GENERIC_PAYLOAD,
    }
  }
}

/// Settings read from the environment.
#[derive(Debug, Clone, Default)]
pub struct StubConfig {
  /// File receiving one line per invocation, if any
  pub log_path: Option<PathBuf>,
}

impl StubConfig {
  /// Read `QT_TOOL_STUB_LOG`. An empty value disables the log.
  pub fn from_env() -> Self {
    let log_path = std::env::var_os(STUB_LOG_ENV)
      .filter(|v| !v.is_empty())
      .map(PathBuf::from);
    Self { log_path }
  }
}

/// What a stub invocation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubOutcome {
  /// No usable output path was given; nothing was written.
  Skipped,
  /// The placeholder for `kind` was written to `path`.
  Written { path: PathBuf, kind: StubKind },
}

/// The rest of `arg` after the ASCII `flag`, keeping the raw bytes.
#[cfg(unix)]
fn strip_flag<'a>(arg: &'a OsStr, flag: &str) -> Option<&'a OsStr> {
  use std::os::unix::ffi::OsStrExt;

  arg.as_bytes().strip_prefix(flag.as_bytes()).map(OsStr::from_bytes)
}

#[cfg(not(unix))]
fn strip_flag<'a>(arg: &'a OsStr, flag: &str) -> Option<&'a OsStr> {
  arg.to_str()?.strip_prefix(flag).map(OsStr::new)
}

/// Find the output path in the tool's arguments (excluding `argv[0]`).
///
/// Paths are taken verbatim, so non-UTF-8 names survive on Unix. When several
/// designations appear, the last one wins. A trailing `-o` or `--output`
/// without a value is ignored. An empty path counts as absent.
pub fn scan_output(args: &[OsString]) -> Option<PathBuf> {
  let mut out: Option<&OsStr> = None;
  let mut iter = args.iter().peekable();

  while let Some(arg) = iter.next() {
    if arg == "-o" || arg == "--output" {
      if let Some(value) = iter.next() {
        out = Some(value);
      }
    } else if let Some(value) = strip_flag(arg, "-o") {
      out = Some(value);
    } else if let Some(value) = strip_flag(arg, "--output=") {
      out = Some(value);
    } else if arg == "--output-dep-file"
      && iter.peek().is_some_and(|next| !next.as_encoded_bytes().starts_with(b"-"))
    {
      iter.next();
    }
  }

  out.filter(|p| !p.is_empty()).map(PathBuf::from)
}

/// Append the space-joined argument vector as one line to `log_path`.
///
/// Arguments that are not valid Unicode are written lossily.
pub fn append_invocation(log_path: &Path, argv: &[OsString]) -> Result<(), StubError> {
  let err = |source: std::io::Error| StubError::AppendLog {
    path: log_path.to_path_buf(),
    source,
  };

  let mut log = OpenOptions::new().create(true).append(true).open(log_path).map_err(err)?;
  let line = argv.iter().map(|a| a.to_string_lossy()).collect::<Vec<_>>().join(" ");
  writeln!(log, "{}", line).map_err(err)
}

/// Write the placeholder for `kind` to `path`, creating parent directories.
pub fn write_placeholder(path: &Path, kind: StubKind) -> Result<(), StubError> {
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    fs::create_dir_all(parent).map_err(|e| StubError::CreateDir {
      path: parent.to_path_buf(),
      source: e,
    })?;
  }

  fs::write(path, kind.payload()).map_err(|e| StubError::WriteFile {
    path: path.to_path_buf(),
    source: e,
  })
}

/// Run the stub for a full argument vector (`argv[0]` included).
///
/// The invocation is logged before the output is decided, so calls without
/// an output path are recorded as well.
///
/// # Errors
///
/// Returns an error if the log cannot be appended to, or if the output file
/// or its parent directories cannot be written.
pub fn run(argv: &[OsString], config: &StubConfig) -> Result<StubOutcome, StubError> {
  if let Some(log_path) = &config.log_path {
    append_invocation(log_path, argv)?;
  }

  let (argv0, args) = match argv.split_first() {
    Some((first, rest)) => (first.to_string_lossy(), rest),
    None => (Default::default(), &[][..]),
  };

  let Some(path) = scan_output(args) else {
    debug!("no output path given, nothing to write");
    return Ok(StubOutcome::Skipped);
  };

  let kind = StubKind::from_invocation(&argv0);
  write_placeholder(&path, kind)?;
  debug!(path = %path.display(), ?kind, "wrote stub output");

  Ok(StubOutcome::Written { path, kind })
}
