mod cli;
mod logging;
mod output;

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use tagihan_core::config::MerchantConfig;
use tagihan_core::renderer::QrRenderer;
use tagihan_core::types::{ConversionRequest, FeeInput, MerchantDetails};
use tracing::info;

use cli::{ChecksumArgs, Commands, ConvertArgs, SourceArgs, TagihanCli};
use output::{bill_summary, FileRenderer, TerminalRenderer};

fn main() -> Result<()> {
    let cli = TagihanCli::parse();
    logging::init_logging("info", cli.log_format);

    match cli.command {
        Commands::Convert(args) => convert(args),
        Commands::Checksum(args) => checksum(args),
        Commands::Inspect(source) => inspect(source),
    }
}

/// Builds the merchant config from a file and/or a payload override.
fn load_config(source: &SourceArgs) -> Result<MerchantConfig> {
    let mut config = match &source.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            MerchantConfig::from_json(&json)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => MerchantConfig::default(),
    };

    if let Some(payload) = &source.payload {
        config.static_payload = payload.trim().to_string();
        config.validate().context("validating --payload")?;
    }

    Ok(config)
}

fn convert(args: ConvertArgs) -> Result<()> {
    let mut config = load_config(&args.source)?;
    if let Some(size) = args.size {
        config.qr_size = size;
        config.validate().context("validating --size")?;
    }

    let fee = match (args.fee_kind, args.fee_value) {
        (Some(kind), Some(value)) => Some(FeeInput {
            fee_type: kind.into(),
            value,
        }),
        _ => None,
    };
    let request = ConversionRequest {
        amount: args.amount,
        fee,
    };

    let wrote_file = args.out.is_some();
    let renderer: Box<dyn QrRenderer> = match args.out {
        Some(path) => Box::new(FileRenderer {
            path,
            size: config.qr_size,
        }),
        None => Box::new(TerminalRenderer),
    };

    let result = match tagihan_core::convert_with(renderer.as_ref(), &config, &request) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return Err(e.into());
        }
    };

    let merchant: MerchantDetails = qris_codec::merchant_info(&config.static_payload)
        .map(Into::into)
        .unwrap_or_default();

    if wrote_file {
        info!(path = %result.image, "wrote qr image");
    } else {
        println!("{}", result.image);
    }
    println!("{}", result.payload);
    println!();
    println!("{}", bill_summary(&result, &merchant));

    Ok(())
}

fn checksum(args: ChecksumArgs) -> Result<()> {
    println!("{}", tagihan_core::compute_checksum(args.text));
    Ok(())
}

fn inspect(source: SourceArgs) -> Result<()> {
    let config = load_config(&source)?;
    let payload = &config.static_payload;
    let fields = qris_codec::parse(payload).context("tokenizing payload")?;

    for field in &fields {
        println!("{} {:02} {}", field.tag, field.value_len(), field.value);
    }

    let merchant = qris_codec::merchant_info(payload)?;
    println!();
    if let Some(name) = merchant.name {
        println!("merchant:  {name}");
    }
    if let Some(city) = merchant.city {
        println!("city:      {city}");
    }
    if let Some(postal_code) = merchant.postal_code {
        println!("postcode:  {postal_code}");
    }
    let kind = if qris_codec::is_dynamic(payload)? {
        "dynamic"
    } else {
        "static"
    };
    println!("initiation: {kind}");
    println!(
        "checksum:  {}",
        if qris_codec::verify_checksum(payload) {
            "valid"
        } else {
            "INVALID"
        }
    );

    Ok(())
}
