//! byteconv - Byte Sequence Converter
//!
//! Converts byte sequences between decimal, hexadecimal, binary and ASCII
//! text, and inspects them as 8/16/32-bit integers, bit layouts, a CRC-8
//! checksum and a C array literal.

mod config;
mod output;
mod repl;

use anyhow::{Context, Result};
use byte_codec::{Converter, Encoding, Pane};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::config::{ByteconvConfig, OutputFormat};
use crate::output::CrcReport;

#[derive(Parser)]
#[command(name = "byteconv")]
#[command(about = "Byte sequence converter")]
#[command(long_about = "Byte sequence converter

Commands:
  convert     Convert input into every encoding and inspection pane
  crc         Compute the CRC-8 (poly 0x07) of the input bytes
  view        Show a single inspection pane
  repl        Interactive converter
  config      Print the effective configuration

Examples:
  byteconv convert --from hex 48 65 6C 6C 6F
  byteconv crc --from ascii 123456789
  byteconv view signed --from dec 255 127
  byteconv --output json convert --from bin 0b1010 11111111

Use 'byteconv <command> --help' for more information on a specific command.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Configuration file (toml, yaml or json)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides the configured one)
    #[arg(long, global = true, value_enum)]
    output: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert input into every encoding and inspection pane
    Convert {
        /// Source encoding: dec, hex, bin or ascii
        #[arg(short, long, value_parser = parse_encoding)]
        from: Encoding,

        /// Input text; several arguments are joined with spaces
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Compute the CRC-8 (poly 0x07) of the input bytes
    Crc {
        /// Source encoding: dec, hex, bin or ascii
        #[arg(short, long, value_parser = parse_encoding)]
        from: Encoding,

        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Show a single inspection pane
    View {
        /// Pane: unsigned, signed, bits or literal
        #[arg(value_parser = parse_pane)]
        pane: Pane,

        /// Source encoding: dec, hex, bin or ascii
        #[arg(short, long, value_parser = parse_encoding)]
        from: Encoding,

        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Interactive converter
    Repl,

    /// Print the effective configuration
    Config,
}

fn parse_encoding(s: &str) -> std::result::Result<Encoding, String> {
    Encoding::from_str(s).ok_or_else(|| {
        format!(
            "unknown encoding '{}' (expected dec, hex, bin or ascii)",
            s
        )
    })
}

fn parse_pane(s: &str) -> std::result::Result<Pane, String> {
    Pane::from_str(s).ok_or_else(|| {
        format!(
            "unknown pane '{}' (expected unsigned, signed, bits or literal)",
            s
        )
    })
}

/// Parse one-shot input, failing the command on rejection
fn convert_input(encoding: Encoding, text: &[String]) -> Result<Converter> {
    let input = text.join(" ");
    let mut converter = Converter::new();
    converter
        .convert(encoding, &input)
        .with_context(|| format!("Rejected {} input", encoding.short_name()))?;
    Ok(converter)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ByteconvConfig::load(cli.config.as_deref())?;

    // Configure colored output
    let color = config.color && !cli.no_color;
    if !color {
        colored::control::set_override(false);
    }

    common::init_logging(&config.log_config(cli.verbose, color))
        .context("Failed to initialize logging")?;

    let format = cli.output.unwrap_or(config.output);
    debug!("Output format: {:?}", format);

    match cli.command {
        Commands::Convert { from, text } => {
            let converter = convert_input(from, &text)?;
            match format {
                OutputFormat::Text => println!(
                    "{}",
                    output::conversion_text(converter.rendered(), &config.panes)
                ),
                OutputFormat::Json => println!("{}", output::to_json(&converter.inspect())?),
            }
        },
        Commands::Crc { from, text } => {
            let converter = convert_input(from, &text)?;
            let report = CrcReport::from_bytes(converter.bytes());
            match format {
                OutputFormat::Text => println!("{}", report.to_text()),
                OutputFormat::Json => println!("{}", output::to_json(&report)?),
            }
        },
        Commands::View { pane, from, text } => {
            let converter = convert_input(from, &text)?;
            match format {
                OutputFormat::Text => {
                    println!("{}", output::pane_text(converter.rendered(), pane))
                },
                OutputFormat::Json => {
                    let value = output::pane_json(&converter.inspect(), pane)?;
                    println!("{}", output::to_json(&value)?);
                },
            }
        },
        Commands::Repl => {
            repl::run_repl(&config.panes)?;
        },
        Commands::Config => match format {
            OutputFormat::Text => print!("{}", config.to_yaml()?),
            OutputFormat::Json => println!("{}", output::to_json(&config)?),
        },
    }

    Ok(())
}
