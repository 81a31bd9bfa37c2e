//! PIRCS CLI
//!
//! Converts commands between wire and text form, builds acknowledgements
//! and checks an acknowledgement against a command.

use clap::{Parser, Subcommand, ValueEnum};
use pircs::config::{Config, ErrKeyMapping, IntegerPolicy, KeyPolicy, TextStyle};
use pircs::protocol::{self, Acknowledgement, Command};
use pircs::text::{self, Decoded};
use pircs::{PircsError, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// PIRCS CLI
#[derive(Parser, Debug)]
#[command(name = "pircs-cli")]
#[command(about = "Encode, decode and match PIRCS commands and acknowledgements")]
#[command(version)]
struct Args {
    /// Fail on non-numeric integers and unknown keys
    #[arg(long, global = true)]
    strict: bool,

    /// Decode acknowledgement "err" with the legacy ack-slot aliasing
    #[arg(long, global = true)]
    legacy_err: bool,

    /// Text layout for encoded output
    #[arg(long, global = true, value_enum, default_value_t = Style::Compact)]
    style: Style,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Style {
    Compact,
    Spaced,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a text command to hex wire bytes
    Encode {
        /// Command text, e.g. {"com":"S","par":"m","int":"t","mod":"0","val":150}
        command_text: String,
    },

    /// Decode hex wire bytes to a text command
    Decode {
        /// 8 wire bytes as hex, e.g. 536d743000000096
        wire: String,
    },

    /// Build the acknowledgement for a text command
    Ack {
        /// Command text
        command_text: String,

        /// Failure status character (success if omitted)
        #[arg(short, long)]
        status: Option<char>,

        /// Error code for a failure acknowledgement
        #[arg(short, long, default_value = "1")]
        err: u32,
    },

    /// Check whether an acknowledgement answers a command
    Match {
        /// Command text
        command_text: String,

        /// Acknowledgement text
        ack_text: String,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pircs=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("PIRCS CLI v{}", pircs::VERSION);

    match run(&args) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    }
}

fn config_from(args: &Args) -> Config {
    let mut builder = Config::builder().text_style(match args.style {
        Style::Compact => TextStyle::Compact,
        Style::Spaced => TextStyle::Spaced,
    });

    if args.strict {
        builder = builder
            .integer_policy(IntegerPolicy::Strict)
            .key_policy(KeyPolicy::Reject);
    }
    if args.legacy_err {
        builder = builder.err_key(ErrKeyMapping::LegacyAlias);
    }

    builder.build()
}

fn run(args: &Args) -> Result<String> {
    let config = config_from(args);

    match &args.command {
        Commands::Encode { command_text } => {
            let command = decode_command(command_text, &config)?;
            let mut wire = [0u8; protocol::WIRE_SIZE];
            protocol::encode_command(&command, &mut wire)?;
            Ok(hex::encode(wire))
        }
        Commands::Decode { wire } => {
            let wire = hex::decode(wire.trim())?;
            let command = protocol::decode_command(&wire)?;
            Ok(text::encode_text(&command, config.text_style))
        }
        Commands::Ack { command_text, status, err } => {
            let command = decode_command(command_text, &config)?;
            let ack = match status {
                Some(status) => protocol::error_ack(&command, status_byte(*status)?, *err),
                None => protocol::success_ack(&command),
            };
            Ok(text::encode_text(&ack, config.text_style))
        }
        Commands::Match { command_text, ack_text } => {
            let command = decode_command(command_text, &config)?;
            let ack = decode_ack(ack_text, &config)?;
            let verdict = if protocol::is_successful_match(&command, &ack) {
                "success"
            } else if protocol::subjects_match(&command, &ack) {
                "failure"
            } else {
                "mismatch"
            };
            Ok(verdict.to_string())
        }
    }
}

fn status_byte(status: char) -> Result<u8> {
    u8::try_from(status).map_err(|_| PircsError::InvalidStatus(status))
}

fn decode_command(input: &str, config: &Config) -> Result<Command> {
    let decoded: Decoded<Command> = text::decode_command_text_with(input, config)?;
    warn_unrecognized(&decoded);
    Ok(decoded.value)
}

fn decode_ack(input: &str, config: &Config) -> Result<Acknowledgement> {
    let decoded: Decoded<Acknowledgement> = text::decode_ack_text_with(input, config)?;
    warn_unrecognized(&decoded);
    Ok(decoded.value)
}

fn warn_unrecognized<T>(decoded: &Decoded<T>) {
    if !decoded.is_complete() {
        tracing::warn!("Fields left unset for keys: {}", decoded.unrecognized.join(", "));
    }
}
