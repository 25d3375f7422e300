//! QRIS payload support for the tagihan converter.
//!
//! Turns a static merchant-presented QRIS payload into a dynamic one bound to
//! an amount and an optional fee. The payload is a flat EMVCo TLV string
//! (`<tag:2><len:2><value>`) terminated by a CRC-16/CCITT-FALSE field, so
//! everything here is plain string work over a small tokenizer.

pub mod crc;
pub mod error;
pub mod fee;
pub mod payload;
pub mod tlv;

// Re-export key public types for ergonomic imports.
pub use crc::{compute_checksum, crc16, verify_checksum};
pub use error::QrisError;
pub use fee::{calculate_fee, compute_totals, validate_amount, Fee, FeeKind, Totals};
pub use payload::{build_dynamic_payload, is_dynamic, merchant_info, MerchantInfo};
pub use tlv::{encode_field, parse, serialize, TlvField};
