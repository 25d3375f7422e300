/// CRC-16/CCITT-FALSE generator polynomial.
const POLY: u16 = 0x1021;

/// Initial register value.
const INIT: u16 = 0xFFFF;

/// Number of hex characters in a rendered checksum.
pub const CHECKSUM_LEN: usize = 4;

/// Computes CRC-16/CCITT-FALSE over `text`.
///
/// Each character contributes the low byte of its UTF-16 code unit. QRIS
/// payloads are ASCII, so in practice this is the byte value; scanners compare
/// against exactly this bit-wise variant.
pub fn crc16(text: &str) -> u16 {
    let mut crc = INIT;

    for unit in text.encode_utf16() {
        crc ^= u16::from(unit as u8) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ POLY
            } else {
                crc << 1
            };
        }
    }

    crc
}

/// Computes the checksum of `text` as 4 uppercase, zero-padded hex digits.
pub fn compute_checksum(text: &str) -> String {
    hex::encode_upper(crc16(text).to_be_bytes())
}

/// Returns `true` when the last 4 characters of `payload` are the checksum
/// of everything before them. Hex case is ignored.
pub fn verify_checksum(payload: &str) -> bool {
    let Some(split) = payload.len().checked_sub(CHECKSUM_LEN) else {
        return false;
    };
    if !payload.is_char_boundary(split) {
        return false;
    }

    let (body, stored) = payload.split_at(split);
    compute_checksum(body).eq_ignore_ascii_case(stored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const STATIC_QRIS: &str = "00020101021126570011ID.DANA.WWW011893600915336094826302093609482630303UMI51440014ID.CO.QRIS.WWW0215ID10222329023150303UMI5204737253033605802ID5922Ahmad Zakaria Fathoni 6013Kota Semarang61055021863045D82";

    #[test]
    fn standard_check_value() {
        // Catalogue check value for CRC-16/CCITT-FALSE.
        assert_eq!(crc16("123456789"), 0x29B1);
        assert_eq!(compute_checksum("123456789"), "29B1");
    }

    #[test]
    fn empty_input_is_init_value() {
        assert_eq!(compute_checksum(""), "FFFF");
    }

    #[test]
    fn output_is_zero_padded_uppercase() {
        let checksum = compute_checksum("A");
        assert_eq!(checksum, "B915");
        assert_eq!(checksum.len(), CHECKSUM_LEN);
        assert!(checksum.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn deterministic() {
        assert_eq!(compute_checksum(STATIC_QRIS), compute_checksum(STATIC_QRIS));
    }

    #[test]
    fn reproduces_stored_static_checksum() {
        let body = &STATIC_QRIS[..STATIC_QRIS.len() - 4];
        assert_eq!(compute_checksum(body), "5D82");
    }

    #[test]
    fn verify_accepts_valid_payload() {
        assert!(verify_checksum(STATIC_QRIS));
    }

    #[test]
    fn verify_ignores_hex_case() {
        let lower = format!("{}5d82", &STATIC_QRIS[..STATIC_QRIS.len() - 4]);
        assert!(verify_checksum(&lower));
    }

    #[test]
    fn verify_rejects_tampered_payload() {
        let tampered = STATIC_QRIS.replace("Kota Semarang", "KOTA SEMARANG");
        assert!(!verify_checksum(&tampered));
    }

    #[test]
    fn verify_rejects_short_input() {
        assert!(!verify_checksum(""));
        assert!(!verify_checksum("AB"));
    }

    #[test]
    fn random_round_trip() {
        let mut rng = rand::thread_rng();
        for _ in 0..64 {
            let len = rng.gen_range(0..200);
            let body: String = (0..len)
                .map(|_| char::from(rng.gen_range(0x20u8..0x7F)))
                .collect();
            let payload = format!("{body}{}", compute_checksum(&body));
            assert!(verify_checksum(&payload), "round trip failed for {body:?}");
        }
    }
}
