use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use ircalc_core::{KrinnerError, NecError, commands};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("IRCALC_BUILD_COMMIT"),
    " ",
    env!("IRCALC_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "ircalc")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Calculator and decoder for NEC telegrams and Krinner Lumix raw IR captures.",
    long_about = None,
    after_help = "Examples:\n  ircalc nec encode --address 0x01 --command 0x45\n  ircalc nec decode 0x01FE45BA\n  ircalc raw decode \"0,2000,1000,400,1000,...\" --threshold 700"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// NEC telegram operations.
    Nec {
        #[command(subcommand)]
        command: NecCommands,
    },
    /// Raw pulse-train operations for the Krinner Lumix remote.
    Raw {
        #[command(subcommand)]
        command: RawCommands,
    },
}

#[derive(Subcommand, Debug)]
enum NecCommands {
    /// Encode an address/command pair into a 32-bit telegram.
    #[command(
        after_help = "Examples:\n  ircalc nec encode --address 0x01 --command 0x45\n  ircalc nec encode -a 0x00 -c 0x47 --pretty"
    )]
    Encode {
        /// Address byte (hex, optional 0x prefix); wider values are masked to 8 bits
        #[arg(short = 'a', long)]
        address: String,

        /// Command byte (hex, optional 0x prefix); wider values are masked to 8 bits
        #[arg(short = 'c', long)]
        command: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Decode and validate a telegram into its address and command.
    Decode {
        /// Telegram text, e.g. 0x01FE45BA
        telegram: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Encode a known brand/action pair (e.g. hema on).
    Preset {
        /// Brand name (case-insensitive)
        brand: String,

        /// Button action (case-insensitive), e.g. on, off, timer-4h
        action: String,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Subcommand, Debug)]
enum RawCommands {
    /// Decode a comma-separated raw capture into byte, channel and command.
    Decode {
        /// Comma-separated pulse durations in microseconds
        pulses: String,

        /// Mark/space classification threshold in microseconds
        #[arg(long, default_value_t = ircalc_core::DEFAULT_THRESHOLD_US)]
        threshold: u32,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Emit the raw transmit pulse list for a data byte.
    Encode {
        /// Data byte (hex, optional 0x prefix); wider values are masked to 8 bits
        byte: String,

        /// Number of repeated frames
        #[arg(long, default_value_t = ircalc_core::DEFAULT_REPEATS)]
        repeats: usize,

        /// Output path; defaults to stdout
        #[arg(short = 'o', long)]
        report: Option<PathBuf>,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output report path (JSON); defaults to stdout
    #[arg(short = 'o', long)]
    report: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, conflicts_with = "compact")]
    pretty: bool,

    /// Compact JSON output (default)
    #[arg(long)]
    compact: bool,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Nec { command } => match command {
            NecCommands::Encode {
                address,
                command,
                output,
            } => cmd_nec_encode(&address, &command, &output),
            NecCommands::Decode { telegram, output } => cmd_nec_decode(&telegram, &output),
            NecCommands::Preset {
                brand,
                action,
                output,
            } => cmd_nec_preset(&brand, &action, &output),
        },
        Commands::Raw { command } => match command {
            RawCommands::Decode {
                pulses,
                threshold,
                output,
            } => cmd_raw_decode(&pulses, threshold, &output),
            RawCommands::Encode {
                byte,
                repeats,
                report,
                quiet,
            } => cmd_raw_encode(&byte, repeats, report, quiet),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn cmd_nec_encode(address: &str, command: &str, output: &OutputArgs) -> Result<(), CliError> {
    let address = parse_byte_arg(address, "address")?;
    let command = parse_byte_arg(command, "command")?;
    let report = ircalc_core::encode_telegram(address, command);
    emit_report(&report, output)
}

fn cmd_nec_decode(telegram: &str, output: &OutputArgs) -> Result<(), CliError> {
    let report = ircalc_core::decode_telegram(telegram).map_err(nec_error)?;
    emit_report(&report, output)
}

fn cmd_nec_preset(brand: &str, action: &str, output: &OutputArgs) -> Result<(), CliError> {
    let set = commands::find(brand).ok_or_else(|| {
        CliError::new(
            format!("unknown brand '{brand}'"),
            Some(format!(
                "known brands: {}",
                commands::COMMAND_SETS
                    .iter()
                    .map(|set| set.brand)
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        )
    })?;
    let command = set.command_for(action).ok_or_else(|| {
        CliError::new(
            format!("unknown action '{action}' for brand '{}'", set.brand),
            Some(format!("actions: {}", commands::ACTIONS.join(", "))),
        )
    })?;
    let report = ircalc_core::encode_telegram(set.address, command);
    emit_report(&report, output)
}

fn cmd_raw_decode(pulses: &str, threshold: u32, output: &OutputArgs) -> Result<(), CliError> {
    let report = ircalc_core::decode_pulse_train(pulses, threshold).map_err(krinner_error)?;
    emit_report(&report, output)
}

fn cmd_raw_encode(
    byte: &str,
    repeats: usize,
    report: Option<PathBuf>,
    quiet: bool,
) -> Result<(), CliError> {
    let byte = parse_byte_arg(byte, "byte")?;
    let pulses = ircalc_core::encode_pulse_train(byte, repeats)
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",");
    write_output(&pulses, report.as_ref(), quiet)
}

fn emit_report<T: serde::Serialize>(report: &T, output: &OutputArgs) -> Result<(), CliError> {
    let json = serialize_report(report, output.pretty, output.compact)?;
    write_output(&json, output.report.as_ref(), output.quiet)
}

fn serialize_report<T: serde::Serialize>(
    report: &T,
    pretty: bool,
    compact: bool,
) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(report)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(report)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn write_output(payload: &str, report: Option<&PathBuf>, quiet: bool) -> Result<(), CliError> {
    let path = match report {
        Some(path) => path,
        None => {
            println!("{payload}");
            return Ok(());
        }
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(path, payload)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;

    if !quiet {
        eprintln!("OK: report written -> {}", path.display());
    }
    Ok(())
}

fn parse_byte_arg(text: &str, name: &str) -> Result<u8, CliError> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    let value = u32::from_str_radix(digits, 16).map_err(|_| {
        CliError::new(
            format!("invalid {name} '{text}'"),
            Some("expected a hexadecimal byte such as 0x45".to_string()),
        )
    })?;
    // Out-of-range input is truncated, not rejected.
    Ok((value & 0xFF) as u8)
}

fn nec_error(err: NecError) -> CliError {
    let hint = match &err {
        NecError::MalformedTelegram { .. } => {
            "expected 2 address digits, 2 inverse digits, 2 command digits and 1-2 inverse digits, with an optional 0x prefix"
        }
        NecError::AddressInverseMismatch { .. } | NecError::CommandInverseMismatch { .. } => {
            "the telegram was mistyped or corrupted in transit"
        }
    };
    CliError::new(err.to_string(), Some(hint.to_string()))
}

fn krinner_error(err: KrinnerError) -> CliError {
    let hint = match &err {
        KrinnerError::MalformedPulseToken { .. } => {
            "pulse lists are comma-separated microsecond integers"
        }
        KrinnerError::NoDecodableFrames => {
            "frames need a header pair, eight data pairs and an end marker; check the capture"
        }
    };
    CliError::new(err.to_string(), Some(hint.to_string()))
}
