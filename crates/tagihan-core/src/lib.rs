pub mod config;
pub mod display;
pub mod error;
pub mod renderer;
pub mod types;

use config::MerchantConfig;
use error::TagihanError;
use qris_codec::Fee;
use renderer::{PngDataUrlRenderer, QrRenderer};
use tracing::{info, warn};
use types::{fee_from_parts, ConversionRequest, ConversionResult, FeeType, MerchantDetails};

uniffi::setup_scaffolding!();

// ─── UniFFI-exported functions ───────────────────────────────────────
// Note: UniFFI passes owned String values across FFI, so all functions
// accept owned types (not references).

/// CRC-16/CCITT-FALSE of `text` as 4 uppercase hex digits
#[uniffi::export]
pub fn compute_checksum(text: String) -> String {
    qris_codec::compute_checksum(&text)
}

/// Check that a payload ends with the CRC of its contents
#[uniffi::export]
pub fn verify_checksum(payload: String) -> bool {
    qris_codec::verify_checksum(&payload)
}

/// Turn a static QRIS payload into a dynamic one carrying `amount` and an
/// optional fee. The fee is only applied when both type and value are set.
///
/// `amount` is written verbatim; use [`convert`] for validated input.
#[uniffi::export]
pub fn build_dynamic_payload(
    base_payload: String,
    amount: String,
    fee_type: Option<FeeType>,
    fee_value: Option<String>,
) -> Result<String, TagihanError> {
    let fee = fee_from_parts(fee_type, fee_value);
    Ok(qris_codec::build_dynamic_payload(
        &base_payload,
        &amount,
        fee.as_ref(),
    )?)
}

/// Fee amount for display: fixed → value, percentage → amount * value / 100.
/// Non-numeric input yields NaN.
#[uniffi::export]
pub fn calculate_fee(amount: String, fee_type: Option<FeeType>, fee_value: Option<String>) -> f64 {
    let fee = fee_from_parts(fee_type, fee_value);
    qris_codec::calculate_fee(&amount, fee.as_ref())
}

/// Validate, build the dynamic payload, render it and compute the totals
#[uniffi::export]
pub fn convert(
    config: MerchantConfig,
    request: ConversionRequest,
) -> Result<ConversionResult, TagihanError> {
    let renderer = PngDataUrlRenderer {
        size: config.qr_size,
    };
    convert_with(&renderer, &config, &request)
}

/// Format a number as Rupiah (`Rp 10.250`)
#[uniffi::export]
pub fn format_rupiah(value: f64) -> String {
    display::format_rupiah(value)
}

/// Built-in merchant configuration
#[uniffi::export]
pub fn default_config() -> MerchantConfig {
    MerchantConfig::default()
}

/// Parse and validate a JSON merchant configuration
#[uniffi::export]
pub fn load_config(json: String) -> Result<MerchantConfig, TagihanError> {
    MerchantConfig::from_json(&json)
}

/// Merchant name, city and postal code carried by a payload
#[uniffi::export]
pub fn merchant_details(payload: String) -> Result<MerchantDetails, TagihanError> {
    Ok(qris_codec::merchant_info(&payload)?.into())
}

/// The generic message to show when a conversion fails
#[uniffi::export]
pub fn conversion_failed_message() -> String {
    error::CONVERSION_FAILED_MESSAGE.to_string()
}

// ─── Rust-side entry points ──────────────────────────────────────────

/// Runs a conversion with a caller-supplied renderer.
///
/// Every failure, whatever its cause, is reported as
/// [`TagihanError::ConversionFailed`] carrying the underlying detail.
pub fn convert_with<R: QrRenderer + ?Sized>(
    renderer: &R,
    config: &MerchantConfig,
    request: &ConversionRequest,
) -> Result<ConversionResult, TagihanError> {
    try_convert(renderer, config, request).map_err(|e| {
        warn!(error = %e, "conversion failed");
        match e {
            TagihanError::ConversionFailed(_) => e,
            other => TagihanError::ConversionFailed(other.to_string()),
        }
    })
}

fn try_convert<R: QrRenderer + ?Sized>(
    renderer: &R,
    config: &MerchantConfig,
    request: &ConversionRequest,
) -> Result<ConversionResult, TagihanError> {
    qris_codec::validate_amount(&request.amount)?;

    // A fee with no value means "no fee", same as over `build_dynamic_payload`.
    let fee = request
        .fee
        .as_ref()
        .filter(|input| !input.value.is_empty())
        .map(Fee::from);
    if let Some(fee) = &fee {
        fee.validate()?;
    }

    let payload =
        qris_codec::build_dynamic_payload(&config.static_payload, &request.amount, fee.as_ref())?;
    let image = renderer.render(&payload)?;
    let totals = qris_codec::compute_totals(&request.amount, fee.as_ref());

    info!(
        amount = totals.amount,
        fee = totals.fee,
        total = totals.total,
        "converted static payload"
    );

    Ok(ConversionResult {
        payload,
        image,
        amount: totals.amount,
        fee: totals.fee,
        total: totals.total,
    })
}
