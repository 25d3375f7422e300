use qris_codec::{Fee, FeeKind, MerchantInfo};
use serde::{Deserialize, Serialize};

/// Fee kind as selected in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "lowercase")]
pub enum FeeType {
    Fixed,
    Percentage,
}

impl From<FeeType> for FeeKind {
    fn from(fee_type: FeeType) -> Self {
        match fee_type {
            FeeType::Fixed => FeeKind::Fixed,
            FeeType::Percentage => FeeKind::Percentage,
        }
    }
}

/// Fee entered by the user. `value` is decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct FeeInput {
    pub fee_type: FeeType,
    pub value: String,
}

impl From<&FeeInput> for Fee {
    fn from(input: &FeeInput) -> Self {
        Fee::new(input.fee_type.into(), input.value.clone())
    }
}

/// One conversion request from the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct ConversionRequest {
    pub amount: String,
    pub fee: Option<FeeInput>,
}

/// Everything the result screen needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct ConversionResult {
    /// Dynamic QRIS payload, CRC included.
    pub payload: String,
    /// Rendered QR code; a PNG `data:` URL from the default renderer.
    pub image: String,
    pub amount: f64,
    pub fee: f64,
    pub total: f64,
}

/// Merchant details read from a payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct MerchantDetails {
    pub name: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

impl From<MerchantInfo> for MerchantDetails {
    fn from(info: MerchantInfo) -> Self {
        Self {
            name: info.name,
            city: info.city,
            postal_code: info.postal_code,
        }
    }
}

/// Pairs a fee kind with its value. A fee only applies when both are given
/// and the value is non-empty.
pub fn fee_from_parts(fee_type: Option<FeeType>, fee_value: Option<String>) -> Option<Fee> {
    match (fee_type, fee_value) {
        (Some(fee_type), Some(value)) if !value.is_empty() => {
            Some(Fee::new(fee_type.into(), value))
        }
        _ => None,
    }
}
