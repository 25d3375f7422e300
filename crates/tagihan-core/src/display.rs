//! Rupiah formatting for the result screen (`id-ID` conventions).

/// Fraction digits kept when formatting.
const MAX_FRACTION_DIGITS: u32 = 3;

/// Formats `value` as Rupiah, e.g. `Rp 10.250` or `Rp 250,5`.
///
/// Thousands are grouped with `.`, the decimal separator is `,`, and at most
/// three fraction digits are kept with trailing zeros dropped. `NaN` is
/// printed as-is so a bad input stays visible. Magnitudes beyond `u64` range
/// after scaling are printed ungrouped.
pub fn format_rupiah(value: f64) -> String {
    format!("Rp {}", format_number(value))
}

fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.into();
    }

    let scale = 10u64.pow(MAX_FRACTION_DIGITS);
    let scaled = (value.abs() * scale as f64).round();
    if scaled >= u64::MAX as f64 {
        // Past u64 range; no grouping rather than a saturated figure.
        return value.to_string();
    }
    let scaled = scaled as u64;
    let (whole, fraction) = (scaled / scale, scaled % scale);

    let mut out = String::new();
    if value.is_sign_negative() && scaled != 0 {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));

    if fraction != 0 {
        let digits = format!("{fraction:0width$}", width = MAX_FRACTION_DIGITS as usize);
        out.push(',');
        out.push_str(digits.trim_end_matches('0'));
    }

    out
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}
