//! EMVCo-style textual TLV: `<tag:2 digits><length:2 digits><value>`.
//!
//! Lengths count UTF-16 code units, the same unit the CRC reads. Nested
//! templates (merchant account info, additional data) are kept as opaque
//! values; only the top level is tokenized.

use serde::{Deserialize, Serialize};

use crate::error::QrisError;

/// Width of the tag prefix.
const TAG_LEN: usize = 2;

/// Width of the length prefix.
const LENGTH_LEN: usize = 2;

/// Largest value a 2-digit length prefix can describe.
pub const MAX_VALUE_LEN: usize = 99;

/// A single top-level field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlvField {
    /// Two-digit tag, e.g. `"54"`.
    pub tag: String,
    /// Raw value text.
    pub value: String,
}

impl TlvField {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
        }
    }

    /// Value length in UTF-16 code units.
    pub fn value_len(&self) -> usize {
        utf16_len(&self.value)
    }

    /// Encodes this field as `tag + length + value`.
    pub fn encode(&self) -> Result<String, QrisError> {
        encode_field(&self.tag, &self.value)
    }
}

/// Encodes one field, zero-padding the length to 2 digits.
pub fn encode_field(tag: &str, value: &str) -> Result<String, QrisError> {
    if !is_two_digits(tag) {
        return Err(QrisError::MalformedPayload(format!(
            "tag must be 2 digits, got {tag:?}"
        )));
    }

    let len = utf16_len(value);
    if len > MAX_VALUE_LEN {
        return Err(QrisError::FieldTooLong(format!(
            "tag {tag} has {len} code units, max {MAX_VALUE_LEN}"
        )));
    }

    Ok(format!("{tag}{len:02}{value}"))
}

/// Tokenizes a payload into its top-level fields, in order.
pub fn parse(payload: &str) -> Result<Vec<TlvField>, QrisError> {
    let mut fields = Vec::new();
    let mut rest = payload;

    while !rest.is_empty() {
        let offset = payload.len() - rest.len();

        let (tag, after_tag) = take_units(rest, TAG_LEN).ok_or_else(|| {
            QrisError::MalformedPayload(format!("truncated tag at byte {offset}"))
        })?;
        if !is_two_digits(tag) {
            return Err(QrisError::MalformedPayload(format!(
                "non-numeric tag {tag:?} at byte {offset}"
            )));
        }

        let (length, after_length) = take_units(after_tag, LENGTH_LEN).ok_or_else(|| {
            QrisError::MalformedPayload(format!("truncated length for tag {tag}"))
        })?;
        if !is_two_digits(length) {
            return Err(QrisError::MalformedPayload(format!(
                "non-numeric length {length:?} for tag {tag}"
            )));
        }
        let length: usize = length
            .parse()
            .map_err(|e| QrisError::MalformedPayload(format!("length for tag {tag}: {e}")))?;

        let (value, remaining) = take_units(after_length, length).ok_or_else(|| {
            QrisError::MalformedPayload(format!(
                "tag {tag} declares {length} code units, {} available",
                utf16_len(after_length)
            ))
        })?;

        fields.push(TlvField::new(tag, value));
        rest = remaining;
    }

    Ok(fields)
}

/// Concatenates encoded fields with no separators.
pub fn serialize(fields: &[TlvField]) -> Result<String, QrisError> {
    fields.iter().try_fold(String::new(), |mut out, field| {
        out.push_str(&field.encode()?);
        Ok(out)
    })
}

/// Splits `s` after `n` UTF-16 code units. `None` if `s` is shorter or the
/// split would fall inside a surrogate pair.
fn take_units(s: &str, n: usize) -> Option<(&str, &str)> {
    let mut units = 0;
    for (i, c) in s.char_indices() {
        if units == n {
            return Some(s.split_at(i));
        }
        units += c.len_utf16();
        if units > n {
            return None;
        }
    }
    (units == n).then(|| s.split_at(s.len()))
}

fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

fn is_two_digits(s: &str) -> bool {
    s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit())
}
