//! Command line front end: encodes or decodes one polyline per line of stdin.

use std::io::{BufRead, Write};

use anyhow::Context;
use clap::{Parser, Subcommand};
use flexpolyline::Polyline;
use tracing_subscriber::EnvFilter;

/// Digits printed per coordinate when decoding unless `--original-precision` is given.
const FULL_PRECISION: usize = 15;

const DEFAULT_LOG: &str = "warn";

#[derive(Debug, Parser)]
#[command(version, about = "Encode and decode flexible polylines (stdin to stdout)")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read polylines as `{(precision); [(lat, lng), ]}` and print them encoded.
    Encode,
    /// Read encoded polylines and print them in text form.
    Decode {
        /// Print coordinates with the precision stored in the encoded data.
        #[arg(long)]
        original_precision: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Encode => {
            for line in stdin.lines() {
                let line = line.context("failed to read stdin")?;
                let polyline: Polyline = line
                    .parse()
                    .with_context(|| format!("failed to parse {line}"))?;
                flexpolyline::write_polyline(&polyline, &mut stdout)?;
            }
        }
        Command::Decode { original_precision } => {
            let mut stdin = stdin;
            let mut line_number = 0usize;
            loop {
                line_number += 1;
                let polyline = flexpolyline::read_polyline(&mut stdin)
                    .with_context(|| format!("failed to decode line {line_number}"))?;
                let Some(polyline) = polyline else { break };
                tracing::debug!(points = polyline.points().len(), "decoded polyline");
                if original_precision {
                    writeln!(stdout, "{polyline}")?;
                } else {
                    writeln!(stdout, "{:.*}", FULL_PRECISION, polyline)?;
                }
            }
        }
    }
    stdout.flush()?;
    Ok(())
}
