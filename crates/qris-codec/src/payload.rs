use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::crc::{compute_checksum, verify_checksum, CHECKSUM_LEN};
use crate::error::QrisError;
use crate::fee::Fee;
use crate::tlv::{parse, serialize, TlvField};

pub const TAG_POINT_OF_INITIATION: &str = "01";
pub const TAG_AMOUNT: &str = "54";
pub const TAG_FEE_INDICATOR: &str = "55";
pub const TAG_FIXED_FEE: &str = "56";
pub const TAG_PERCENTAGE_FEE: &str = "57";
pub const TAG_COUNTRY_CODE: &str = "58";
pub const TAG_MERCHANT_NAME: &str = "59";
pub const TAG_MERCHANT_CITY: &str = "60";
pub const TAG_POSTAL_CODE: &str = "61";
pub const TAG_CRC: &str = "63";

/// Point-of-initiation value for a reusable code.
pub const STATIC_INITIATION: &str = "11";

/// Point-of-initiation value for a single-transaction code.
pub const DYNAMIC_INITIATION: &str = "12";

/// Merchant details carried by a payload, for display only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantInfo {
    pub name: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

/// Rewrites a static QRIS payload into a dynamic one for `amount`.
///
/// The point-of-initiation method becomes `12`, any previous amount or fee
/// fields are dropped, and a fresh block is inserted directly before the
/// country code (tag `58`):
///
/// ```text
/// 54 LL <amount> [55 02 <02|03> <56|57> LL <fee value>] 58 02 ID ...
/// ```
///
/// The CRC field is rebuilt last over everything before its value. `amount`
/// and the fee value are written verbatim; callers validate them first.
pub fn build_dynamic_payload(
    base_payload: &str,
    amount: &str,
    fee: Option<&Fee>,
) -> Result<String, QrisError> {
    let mut fields = parse(base_payload)?;

    if !verify_checksum(base_payload) {
        warn!("base payload checksum does not match its contents");
    }

    fields.retain(|field| {
        !matches!(
            field.tag.as_str(),
            TAG_CRC | TAG_AMOUNT | TAG_FEE_INDICATOR | TAG_FIXED_FEE | TAG_PERCENTAGE_FEE
        )
    });

    match fields
        .iter_mut()
        .find(|field| field.tag == TAG_POINT_OF_INITIATION)
    {
        Some(field) if field.value == STATIC_INITIATION => {
            field.value = DYNAMIC_INITIATION.to_string();
        }
        Some(field) => warn!(
            method = %field.value,
            "payload is not static, initiation method left unchanged"
        ),
        None => warn!("payload has no point-of-initiation field"),
    }

    let mut block = vec![TlvField::new(TAG_AMOUNT, amount)];
    if let Some(fee) = fee {
        block.push(TlvField::new(TAG_FEE_INDICATOR, fee.kind.indicator()));
        block.push(TlvField::new(fee.kind.value_tag(), fee.value.as_str()));
    }

    let anchor = fields
        .iter()
        .position(|field| field.tag == TAG_COUNTRY_CODE)
        .ok_or_else(|| QrisError::MissingField(format!("country code (tag {TAG_COUNTRY_CODE})")))?;
    fields.splice(anchor..anchor, block);

    let mut payload = serialize(&fields)?;
    payload.push_str(&format!("{TAG_CRC}{CHECKSUM_LEN:02}"));
    let checksum = compute_checksum(&payload);
    payload.push_str(&checksum);

    debug!(
        amount,
        fee_kind = ?fee.map(|f| f.kind),
        %checksum,
        "built dynamic payload"
    );

    Ok(payload)
}

/// Returns `true` when the point-of-initiation method is dynamic (`12`).
pub fn is_dynamic(payload: &str) -> Result<bool, QrisError> {
    Ok(parse(payload)?
        .iter()
        .any(|field| field.tag == TAG_POINT_OF_INITIATION && field.value == DYNAMIC_INITIATION))
}

/// Reads merchant name, city and postal code.
pub fn merchant_info(payload: &str) -> Result<MerchantInfo, QrisError> {
    let fields = parse(payload)?;
    let lookup = |tag: &str| {
        fields
            .iter()
            .find(|field| field.tag == tag)
            .map(|field| field.value.trim_end().to_string())
    };

    Ok(MerchantInfo {
        name: lookup(TAG_MERCHANT_NAME),
        city: lookup(TAG_MERCHANT_CITY),
        postal_code: lookup(TAG_POSTAL_CODE),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATIC_QRIS: &str = "00020101021126570011ID.DANA.WWW011893600915336094826302093609482630303UMI51440014ID.CO.QRIS.WWW0215ID10222329023150303UMI5204737253033605802ID5922Ahmad Zakaria Fathoni 6013Kota Semarang61055021863045D82";

    const DYNAMIC_10000: &str = "00020101021226570011ID.DANA.WWW011893600915336094826302093609482630303UMI51440014ID.CO.QRIS.WWW0215ID10222329023150303UMI5204737253033605405100005802ID5922Ahmad Zakaria Fathoni 6013Kota Semarang610550218630465DF";

    #[test]
    fn amount_only() {
        let payload = build_dynamic_payload(STATIC_QRIS, "10000", None).unwrap();
        assert_eq!(payload, DYNAMIC_10000);
        assert!(payload.contains("010212"));
        assert!(!payload.contains("010211"));
        assert!(payload.contains("5405100005802ID"));
        assert!(payload.ends_with("630465DF"));
    }

    #[test]
    fn fixed_fee() {
        let fee = Fee::fixed("500");
        let payload = build_dynamic_payload(STATIC_QRIS, "10000", Some(&fee)).unwrap();
        assert!(payload.contains("5405100005502025603500"));
        assert!(payload.contains("55020256035005802ID"));
        assert_eq!(&payload[payload.len() - 4..], "281F");
    }

    #[test]
    fn percentage_fee() {
        let fee = Fee::percentage("2.5");
        let payload = build_dynamic_payload(STATIC_QRIS, "10000", Some(&fee)).unwrap();
        assert!(payload.contains("54051000055020357032.55802ID"));
        assert_eq!(&payload[payload.len() - 4..], "030F");
    }

    #[test]
    fn output_checksum_round_trips() {
        for fee in [None, Some(Fee::fixed("500")), Some(Fee::percentage("2.5"))] {
            let payload = build_dynamic_payload(STATIC_QRIS, "10000", fee.as_ref()).unwrap();
            let (body, checksum) = payload.split_at(payload.len() - 4);
            assert_eq!(compute_checksum(body), checksum);
        }
    }

    #[test]
    fn single_digit_amount_is_zero_padded() {
        let payload = build_dynamic_payload(STATIC_QRIS, "1", None).unwrap();
        assert!(payload.contains("540115802ID"));
        assert!(payload.ends_with("60C3"));
    }

    #[test]
    fn already_dynamic_keeps_method_and_replaces_amount() {
        let payload = build_dynamic_payload(DYNAMIC_10000, "25000", None).unwrap();
        assert!(payload.contains("010212"));
        assert!(!payload.contains("010211"));
        assert!(!payload.contains("540510000"));
        assert_eq!(
            payload,
            "00020101021226570011ID.DANA.WWW011893600915336094826302093609482630303UMI51440014ID.CO.QRIS.WWW0215ID10222329023150303UMI5204737253033605405250005802ID5922Ahmad Zakaria Fathoni 6013Kota Semarang610550218630431C5"
        );
    }

    #[test]
    fn reconverting_drops_previous_fee() {
        let with_fee =
            build_dynamic_payload(STATIC_QRIS, "10000", Some(&Fee::fixed("500"))).unwrap();
        let without = build_dynamic_payload(&with_fee, "10000", None).unwrap();
        assert_eq!(without, DYNAMIC_10000);
    }

    #[test]
    fn same_input_same_output() {
        let a = build_dynamic_payload(STATIC_QRIS, "10000", Some(&Fee::fixed("500"))).unwrap();
        let b = build_dynamic_payload(STATIC_QRIS, "10000", Some(&Fee::fixed("500"))).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn non_numeric_amount_is_still_framed() {
        let payload = build_dynamic_payload(STATIC_QRIS, "abc", None).unwrap();
        assert!(payload.contains("5403abc5802ID"));
        assert!(verify_checksum(&payload));
    }

    #[test]
    fn amount_length_counts_utf16_units() {
        let payload = build_dynamic_payload(STATIC_QRIS, "1😀", None).unwrap();
        assert!(payload.contains("54031😀5802ID"));
        assert!(verify_checksum(&payload));
        assert_eq!(parse(&payload).unwrap().len(), parse(STATIC_QRIS).unwrap().len() + 1);
    }

    #[test]
    fn missing_country_code_is_an_error() {
        let body = "000201010211";
        let payload = format!("{body}6304{}", compute_checksum(&format!("{body}6304")));
        let err = build_dynamic_payload(&payload, "10000", None).unwrap_err();
        assert!(matches!(err, QrisError::MissingField(_)));
    }

    #[test]
    fn malformed_payload_is_an_error() {
        let err = build_dynamic_payload("0002010102", "10000", None).unwrap_err();
        assert!(matches!(err, QrisError::MalformedPayload(_)));
    }

    #[test]
    fn overlong_amount_is_an_error() {
        let amount = "1".repeat(100);
        let err = build_dynamic_payload(STATIC_QRIS, &amount, None).unwrap_err();
        assert!(matches!(err, QrisError::FieldTooLong(_)));
    }

    #[test]
    fn detects_dynamic() {
        assert!(!is_dynamic(STATIC_QRIS).unwrap());
        assert!(is_dynamic(DYNAMIC_10000).unwrap());
    }

    #[test]
    fn reads_merchant_info() {
        let info = merchant_info(STATIC_QRIS).unwrap();
        assert_eq!(info.name.as_deref(), Some("Ahmad Zakaria Fathoni"));
        assert_eq!(info.city.as_deref(), Some("Kota Semarang"));
        assert_eq!(info.postal_code.as_deref(), Some("50218"));
    }
}
