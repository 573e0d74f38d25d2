const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Hexadecimal expansion of a fractional value in `[0, 1)`.
///
/// Returns the digits after the radix point, without any `0.` prefix. Every
/// binary float has a terminating hex expansion, so the result never carries
/// trailing zeros; `0.0` expands to the empty string. Values produced by the
/// key generator (`state / 2^32`) expand to at most 8 digits.
pub fn fraction_hex_digits(value: f64) -> String {
    debug_assert!(
        (0.0..1.0).contains(&value),
        "fractional value {value} outside [0, 1)"
    );
    // Foreign sources could hand us an out-of-range value; keep the
    // fractional part and drop the rest instead of panicking in release.
    let mut frac = match value {
        v if !v.is_finite() || v < 0.0 => 0.0,
        v if v >= 1.0 => v.fract(),
        v => v,
    };

    let mut digits = String::new();
    while frac > 0.0 {
        frac *= 16.0;
        let digit = frac as usize;
        digits.push(HEX_DIGITS[digit] as char);
        frac -= digit as f64;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_generator_state_with_leading_zeros() {
        // 6 / 2^32, the first value the recurrence yields from seed 1
        assert_eq!(fraction_hex_digits(6.0 / 4_294_967_296.0), "00000006");
    }

    #[test]
    fn expansion_terminates_at_last_nonzero_digit() {
        assert_eq!(fraction_hex_digits(0.5), "8");
        assert_eq!(fraction_hex_digits(1.0 / 16.0), "1");
        assert_eq!(
            fraction_hex_digits(f64::from(0x1234_0000u32) / 4_294_967_296.0),
            "1234"
        );
    }

    #[test]
    fn zero_expands_to_empty_fragment() {
        assert_eq!(fraction_hex_digits(0.0), "");
    }

    #[test]
    fn long_mantissa_expands_past_eight_digits() {
        assert_eq!(fraction_hex_digits(1.0 / 3.0), "55555555555554");
    }

    #[test]
    fn all_output_is_lowercase_hex() {
        let digits = fraction_hex_digits(0.9999999999);
        assert!(
            digits
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_uppercase())
        );
    }
}
