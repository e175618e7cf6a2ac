//! Conversion between raw on-chain token amounts and display values.
//!
//! Raw amounts are `U256` integers scaled by `10^decimals`. All arithmetic
//! here stays in integer space; nothing goes through `f64`, so amounts at
//! 18 decimals survive the trip without precision loss.

use alloy::primitives::U256;

use crate::error::AmountError;

/// One whole token unit (`10^decimals`) in raw on-chain units.
pub fn one_unit(decimals: u8) -> U256 {
    scale(decimals)
}

fn scale(decimals: u8) -> U256 {
    U256::from(10).pow(U256::from(decimals))
}

/// Convert a display-ready decimal string into a raw amount.
///
/// Fractional digits beyond `decimals` are truncated. The input must be a
/// plain non-negative decimal number; anything else (negative sign,
/// `inf`/`NaN` renditions, stray characters, values past `U256::MAX`)
/// fails with [`AmountError::InvalidAmount`].
pub fn to_raw(display: &str, decimals: u8) -> Result<U256, AmountError> {
    let s = display.trim();
    if s.is_empty() {
        return Err(AmountError::InvalidAmount("empty input".into()));
    }
    if s.starts_with('-') {
        return Err(AmountError::InvalidAmount(format!(
            "negative amount `{s}`"
        )));
    }

    let (int_part, frac_part) = match s.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (s, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(AmountError::InvalidAmount(format!(
            "`{s}` is not a decimal number"
        )));
    }
    if !is_digits(int_part) || !is_digits(frac_part) {
        return Err(AmountError::InvalidAmount(format!(
            "`{s}` is not a decimal number"
        )));
    }

    let mut raw = if int_part.is_empty() {
        U256::ZERO
    } else {
        parse_digits(int_part)?
            .checked_mul(scale(decimals))
            .ok_or_else(|| AmountError::InvalidAmount(format!("`{s}` overflows u256")))?
    };

    // Truncate, not round: 1.1234567 at 6 decimals becomes 1123456.
    let kept = &frac_part[..frac_part.len().min(decimals as usize)];
    if !kept.is_empty() {
        let rescale = scale(decimals - kept.len() as u8);
        let frac = parse_digits(kept)?
            .checked_mul(rescale)
            .ok_or_else(|| AmountError::InvalidAmount(format!("`{s}` overflows u256")))?;
        raw = raw
            .checked_add(frac)
            .ok_or_else(|| AmountError::InvalidAmount(format!("`{s}` overflows u256")))?;
    }

    Ok(raw)
}

/// Format a raw amount as a decimal string with exactly `decimals`
/// fractional digits. Zero formats as the literal `"0"`.
pub fn to_display(raw: U256, decimals: u8) -> String {
    if raw.is_zero() {
        return "0".to_string();
    }
    if decimals == 0 {
        return raw.to_string();
    }

    let scale = scale(decimals);
    let whole = raw / scale;
    let frac = (raw % scale).to_string();
    format!("{whole}.{frac:0>width$}", width = decimals as usize)
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_digits(s: &str) -> Result<U256, AmountError> {
    // Digits are pre-validated, so the only remaining failure is overflow.
    U256::from_str_radix(s, 10)
        .map_err(|_| AmountError::InvalidAmount(format!("`{s}` overflows u256")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pow10(exp: u8) -> U256 {
        U256::from(10).pow(U256::from(exp))
    }

    #[test]
    fn zero_formats_as_bare_zero() {
        assert_eq!(to_display(U256::ZERO, 18), "0");
        assert_eq!(to_display(U256::ZERO, 6), "0");
        assert_eq!(to_display(U256::ZERO, 0), "0");
    }

    #[test]
    fn one_whole_unit_eighteen_decimals() {
        assert_eq!(to_display(pow10(18), 18), "1.000000000000000000");
    }

    #[test]
    fn one_whole_unit_six_decimals() {
        assert_eq!(to_display(pow10(6), 6), "1.000000");
    }

    #[test]
    fn fractional_part_is_zero_padded() {
        // 1 raw unit at 18 decimals: seventeen leading zeros.
        assert_eq!(to_display(U256::from(1), 18), "0.000000000000000001");
        assert_eq!(to_display(U256::from(1_500_000u64), 6), "1.500000");
    }

    #[test]
    fn one_unit_matches_scale() {
        assert_eq!(one_unit(18), pow10(18));
        assert_eq!(one_unit(6), U256::from(1_000_000u64));
        assert_eq!(one_unit(0), U256::from(1));
    }

    #[test]
    fn to_raw_whole_number() {
        assert_eq!(to_raw("1", 18).unwrap(), pow10(18));
        assert_eq!(to_raw("0", 6).unwrap(), U256::ZERO);
        assert_eq!(to_raw("250", 6).unwrap(), U256::from(250_000_000u64));
    }

    #[test]
    fn to_raw_fractional() {
        assert_eq!(to_raw("0.5", 6).unwrap(), U256::from(500_000u64));
        assert_eq!(to_raw("1.5", 18).unwrap(), pow10(18) + pow10(17) * U256::from(5));
        assert_eq!(to_raw(".25", 6).unwrap(), U256::from(250_000u64));
    }

    #[test]
    fn to_raw_truncates_excess_fractional_digits() {
        assert_eq!(to_raw("1.1234567", 6).unwrap(), U256::from(1_123_456u64));
        assert_eq!(to_raw("0.9999999", 6).unwrap(), U256::from(999_999u64));
    }

    #[test]
    fn to_raw_rejects_negative() {
        assert!(to_raw("-1", 18).is_err());
        assert!(to_raw("-0.5", 6).is_err());
    }

    #[test]
    fn to_raw_rejects_non_numeric() {
        assert!(to_raw("", 18).is_err());
        assert!(to_raw(".", 18).is_err());
        assert!(to_raw("NaN", 18).is_err());
        assert!(to_raw("inf", 18).is_err());
        assert!(to_raw("1e18", 18).is_err());
        assert!(to_raw("1,5", 6).is_err());
    }

    #[test]
    fn round_trip_preserves_raw_amounts() {
        let cases = [
            (U256::from(1), 18u8),
            (pow10(18), 18),
            (pow10(18) + U256::from(42), 18),
            (U256::from(999_999u64), 6),
            (U256::from(1_000_001u64), 6),
            (U256::MAX, 18),
        ];
        for (raw, decimals) in cases {
            let display = to_display(raw, decimals);
            assert_eq!(to_raw(&display, decimals).unwrap(), raw, "case {display}");
        }
    }
}
