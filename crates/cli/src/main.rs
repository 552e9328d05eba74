mod cmd;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use stubkit_lib::platform::Os;

use crate::cmd::{cmd_export, cmd_launch};
use crate::output::OutputFormat;

/// game-export - write and check the game launch script
#[derive(Parser)]
#[command(name = "game-export")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Output format
  #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
  output: OutputFormat,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Write <BASE>/bat/game.bat
  Export {
    /// Base directory for the exported files
    base: PathBuf,

    /// Report a rejected path as a warning instead of an error
    #[arg(short, long)]
    quiet: bool,
  },

  /// Export quietly, then check the game script is in place
  Launch {
    /// Base directory for the exported files
    base: PathBuf,
  },
}

fn init_logging(verbose: bool) {
  let default = if verbose { "stubkit_lib=debug,game_export=debug,warn" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn main() -> Result<ExitCode> {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  match Os::current() {
    Some(os) => debug!(%os, "detected host"),
    None => debug!("unsupported host, treating as non-Windows"),
  }

  let ok = match cli.command {
    Commands::Export { base, quiet } => cmd_export(&base, quiet, cli.output)?,
    Commands::Launch { base } => cmd_launch(&base, cli.output)?,
  };

  Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
