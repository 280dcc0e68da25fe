//! Hill cipher shell binary.
//!
//! # Usage
//!
//! ```bash
//! # Prompt for key and message, print ciphertext and round-tripped plaintext
//! hill-cli
//!
//! # Non-interactive
//! hill-cli --key 5,8,17,3 --message "attack at dawn" --mode encrypt
//! ```

use std::{io, process::ExitCode};

use clap::Parser;
use hill_cli::{Mode, Outcome, Shell, ShellConfig};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Hill cipher shell
#[derive(Parser, Debug)]
#[command(name = "hill-cli")]
#[command(about = "Encrypt and decrypt text with a 2x2 Hill cipher")]
#[command(version)]
struct Args {
    /// Key matrix entries in row-major order (k00,k01,k10,k11), each 0-26
    ///
    /// If not provided, the key is read from standard input.
    #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
    key: Option<Vec<i64>>,

    /// Message to process
    ///
    /// If not provided, a line is read from standard input.
    #[arg(short, long)]
    message: Option<String>,

    /// Operation to run
    #[arg(long, value_enum, default_value_t = Mode::Roundtrip)]
    mode: Mode,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    let mut config = ShellConfig { message: args.message, mode: args.mode, ..Default::default() };
    if let Some(entries) = &args.key {
        config = config.with_key_entries(entries)?;
    }

    let mut shell = Shell::new(io::stdin().lock(), io::stdout().lock());
    let outcome = shell.run(&config)?;

    tracing::debug!(?outcome, "session finished");

    Ok(match outcome {
        Outcome::Completed => ExitCode::SUCCESS,
        Outcome::KeyRejected | Outcome::MessageRejected => ExitCode::FAILURE,
    })
}
