use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QrisError;

/// Tip or convenience indicator value for a fixed fee (tag `55`).
pub const FIXED_FEE_INDICATOR: &str = "02";

/// Tip or convenience indicator value for a percentage fee (tag `55`).
pub const PERCENTAGE_FEE_INDICATOR: &str = "03";

/// How a merchant fee is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeKind {
    /// A flat amount in the payload currency.
    Fixed,
    /// A percentage of the transaction amount.
    Percentage,
}

impl FeeKind {
    /// Value written under tag `55`.
    pub fn indicator(&self) -> &'static str {
        match self {
            FeeKind::Fixed => FIXED_FEE_INDICATOR,
            FeeKind::Percentage => PERCENTAGE_FEE_INDICATOR,
        }
    }

    /// Tag carrying the fee value: `56` fixed, `57` percentage.
    pub fn value_tag(&self) -> &'static str {
        match self {
            FeeKind::Fixed => crate::payload::TAG_FIXED_FEE,
            FeeKind::Percentage => crate::payload::TAG_PERCENTAGE_FEE,
        }
    }
}

impl fmt::Display for FeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeeKind::Fixed => write!(f, "fixed"),
            FeeKind::Percentage => write!(f, "percentage"),
        }
    }
}

impl FromStr for FeeKind {
    type Err = QrisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(FeeKind::Fixed),
            "percentage" | "percent" => Ok(FeeKind::Percentage),
            other => Err(QrisError::InvalidFee(format!("unknown fee kind {other:?}"))),
        }
    }
}

/// A fee attached to a dynamic payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    pub kind: FeeKind,
    /// Decimal text, written into the payload verbatim.
    pub value: String,
}

impl Fee {
    pub fn new(kind: FeeKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn fixed(value: impl Into<String>) -> Self {
        Self::new(FeeKind::Fixed, value)
    }

    pub fn percentage(value: impl Into<String>) -> Self {
        Self::new(FeeKind::Percentage, value)
    }

    /// Checks the value is a finite, non-negative decimal.
    pub fn validate(&self) -> Result<(), QrisError> {
        check_decimal(&self.value).map_err(|reason| {
            QrisError::InvalidFee(format!("{} fee {:?}: {reason}", self.kind, self.value))
        })
    }
}

/// Amount, fee and their sum as shown to the payer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub amount: f64,
    pub fee: f64,
    pub total: f64,
}

/// Fee in currency units for `amount`.
///
/// Fixed fees are taken as-is; percentage fees are `amount * value / 100`.
/// Unparseable text yields `NaN`, which then propagates into the total.
pub fn calculate_fee(amount: &str, fee: Option<&Fee>) -> f64 {
    match fee {
        None => 0.0,
        Some(fee) => {
            let value = parse_decimal(&fee.value);
            match fee.kind {
                FeeKind::Fixed => value,
                FeeKind::Percentage => parse_decimal(amount) * value / 100.0,
            }
        }
    }
}

/// Computes the amount, fee and total for display.
pub fn compute_totals(amount: &str, fee: Option<&Fee>) -> Totals {
    let amount_value = parse_decimal(amount);
    let fee_value = calculate_fee(amount, fee);
    Totals {
        amount: amount_value,
        fee: fee_value,
        total: amount_value + fee_value,
    }
}

/// Checks `amount` is a non-empty, finite, non-negative decimal.
pub fn validate_amount(amount: &str) -> Result<(), QrisError> {
    check_decimal(amount).map_err(|reason| QrisError::InvalidAmount(format!("{amount:?}: {reason}")))
}

fn check_decimal(text: &str) -> Result<(), &'static str> {
    if text.trim().is_empty() {
        return Err("empty");
    }
    if !text.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err("not a decimal number");
    }
    let value: f64 = text.parse().map_err(|_| "not a decimal number")?;
    if !value.is_finite() {
        return Err("not finite");
    }
    Ok(())
}

fn parse_decimal(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}
