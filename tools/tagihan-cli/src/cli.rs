//! Command-line arguments for `tagihan`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tagihan_core::types::FeeType;

use crate::logging::LogFormat;

/// Turn a static QRIS code into a dynamic bill with an amount and fee.
#[derive(Parser, Debug)]
#[command(name = "tagihan", version, propagate_version = true)]
pub struct TagihanCli {
    /// Log output format (logs go to stderr).
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a dynamic payload and render it as a QR code.
    Convert(ConvertArgs),
    /// Print the CRC-16/CCITT-FALSE checksum of a string.
    Checksum(ChecksumArgs),
    /// List the fields of a payload and check its CRC.
    Inspect(SourceArgs),
}

/// Where the static payload comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// JSON merchant config (`static_payload`, `qr_size`).
    #[arg(long, short = 'c', env = "TAGIHAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Static payload; overrides the one in the config file.
    #[arg(long, env = "TAGIHAN_STATIC_PAYLOAD")]
    pub payload: Option<String>,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Transaction amount, e.g. 10000.
    #[arg(long, short = 'a')]
    pub amount: String,

    /// Fee kind; requires --fee-value.
    #[arg(long, value_enum, requires = "fee_value")]
    pub fee_kind: Option<FeeKindArg>,

    /// Fee value: Rupiah for `fixed`, percent for `percentage`.
    #[arg(long, requires = "fee_kind")]
    pub fee_value: Option<String>,

    /// Write the QR image here (`.png` or `.svg`). Prints to the terminal
    /// when omitted.
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,

    /// Image edge length in pixels; overrides the config.
    #[arg(long)]
    pub size: Option<u32>,
}

#[derive(Args, Debug)]
pub struct ChecksumArgs {
    /// Text to checksum, usually a payload without its last 4 characters.
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FeeKindArg {
    Fixed,
    Percentage,
}

impl From<FeeKindArg> for FeeType {
    fn from(kind: FeeKindArg) -> Self {
        match kind {
            FeeKindArg::Fixed => FeeType::Fixed,
            FeeKindArg::Percentage => FeeType::Percentage,
        }
    }
}
