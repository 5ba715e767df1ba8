//! mungectl CLI application.
//!
//! This binary provides a command-line interface for generating, exporting
//! and importing the MUNGE key file.
//!
//! Exit status is 0 on success, 2 when the new key could not be read from
//! stdin, and 1 for every other failure.

use clap::{Args, Parser, Subcommand};
use mungectl::config::{KeyConfig, SNAP_COMMON_ENV};
use mungectl::crypto::encoding::{decode_key, encode_key};
use mungectl::crypto::key::{generate_key, MungeKey};
use mungectl::error::{MungeError, Result};
use mungectl::input::{scan_text, InputSource};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const EXIT_FAILURE: u8 = 1;
const EXIT_NO_INPUT: u8 = 2;

const GENERATE_EXAMPLE: &str = "\
Example:
  mungectl key generate
      Generate a new munge key and write to key file location";

const GET_EXAMPLE: &str = "\
Example:
  mungectl key get > key.out
      Get current munge key, encode into a base64 string, and write to key.out";

const SET_EXAMPLE: &str = "\
Example:
  mungectl key set < secret.key
      Replace old munge key with one read from stdin";

#[derive(Parser)]
#[command(name = "mungectl")]
#[command(about = "Manage MUNGE for a Slurm cluster", long_about = None)]
#[command(version)]
struct Cli {
    /// Log level used when RUST_LOG is not set (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage munge key file
    Key(KeyArgs),
}

#[derive(Args)]
struct KeyArgs {
    /// Snap common data directory; the key lives at etc/munge/munge.key below it
    #[arg(long, env = SNAP_COMMON_ENV, global = true)]
    snap_common: Option<PathBuf>,

    /// Key file path (overrides --snap-common)
    #[arg(long, global = true)]
    key_file: Option<PathBuf>,

    #[command(subcommand)]
    command: KeyCommands,
}

#[derive(Subcommand)]
enum KeyCommands {
    /// Generate a new munge key
    #[command(after_help = GENERATE_EXAMPLE)]
    Generate,

    /// Get the current munge key
    #[command(after_help = GET_EXAMPLE)]
    Get,

    /// Set a new munge key
    #[command(after_help = SET_EXAMPLE)]
    Set,
}

/// A failed command: what to tell the user and how to exit.
struct Failure {
    message: String,
    status: u8,
    cause: MungeError,
}

impl Failure {
    fn new(status: u8, message: impl Into<String>) -> impl FnOnce(MungeError) -> Self {
        let message = message.into();
        move |cause| Self {
            message,
            status,
            cause,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let result = match cli.command {
        Commands::Key(args) => handle_key_command(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            debug!(error = ?failure.cause, status = failure.status, "command failed");
            eprintln!("{}: {}", failure.message, failure.cause);
            ExitCode::from(failure.status)
        }
    }
}

/// Log to stderr; stdout carries the encoded key for `key get`.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn resolve_config(args: &KeyArgs) -> Result<KeyConfig> {
    match (&args.key_file, &args.snap_common) {
        (Some(path), _) => Ok(KeyConfig::with_key_path(path)),
        (None, Some(root)) => Ok(KeyConfig::from_snap_common(root)),
        (None, None) => Err(MungeError::ConfigError(format!(
            "{} is not set and no --key-file was given",
            SNAP_COMMON_ENV
        ))),
    }
}

/// Write the encoded key and a trailing newline.
fn print_key<W: Write>(mut out: W, key: &MungeKey) -> Result<()> {
    writeln!(out, "{}", encode_key(key))?;
    out.flush()?;
    Ok(())
}

fn handle_key_command(args: KeyArgs) -> std::result::Result<(), Failure> {
    let config = resolve_config(&args)
        .map_err(Failure::new(EXIT_FAILURE, "failed to locate munge key file"))?;
    let key_file = config.key_file();
    let path = key_file.path().display().to_string();

    match args.command {
        KeyCommands::Generate => {
            let key = generate_key()
                .map_err(Failure::new(EXIT_FAILURE, "failed to generate new munge key"))?;

            key_file.write(&key).map_err(Failure::new(
                EXIT_FAILURE,
                format!("failed to write generated munge key file {}", path),
            ))?;

            Ok(())
        }

        KeyCommands::Get => {
            let key = key_file.read().map_err(Failure::new(
                EXIT_FAILURE,
                format!("failed to read current munge key file {}", path),
            ))?;

            print_key(io::stdout().lock(), &key).map_err(Failure::new(
                EXIT_FAILURE,
                "failed to write munge key to stdout",
            ))?;

            Ok(())
        }

        KeyCommands::Set => {
            let text = scan_text(InputSource::stdin())
                .map_err(Failure::new(EXIT_NO_INPUT, "failed to read munge key from stdin"))?;

            let key = decode_key(&text)
                .map_err(Failure::new(EXIT_FAILURE, "failed to decode new munge key"))?;

            key_file.write(&key).map_err(Failure::new(
                EXIT_FAILURE,
                format!("failed to write new munge key to {}", path),
            ))?;

            Ok(())
        }
    }
}
