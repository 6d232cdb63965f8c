//! # Numeric literal formatting
//!
//! Implements spec §4.3's numeric formatting algorithm: an integer fast
//! path, a shortest-round-trip decimal fallback for everything else,
//! exponent normalization, minify-mode leading-zero stripping and
//! hex-literal rewriting, and the `NaN`/`Infinity`/`-0` special cases.

/// Formats a finite `f64` the way V8/JS would render it with `Number#toString`,
/// then applies minify-only shrinking (shorter exponent form, stripped
/// leading `0` before a decimal point).
pub fn format_number(value: f64, minify: bool) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() };
    }
    if value == 0.0 {
        // `-0` prints as `0` textually; a preceding unary minus is a
        // separate node the printer adds when the source actually wrote `-0`.
        return "0".to_string();
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    let abs = value.abs();

    // Integer fast path: values that round-trip exactly through i64 and
    // aren't so large that exponential form is shorter.
    if abs.fract() == 0.0 && abs < 1e21 {
        let digits = format_integer_digits(abs);
        return format!("{sign}{}", maybe_minify_integer(&digits, abs, minify));
    }

    let shortest = shortest_round_trip(abs);
    format!("{sign}{}", if minify { minify_decimal(&shortest) } else { shortest })
}

fn format_integer_digits(abs: f64) -> String {
    // `abs` is a non-negative integer value; format without sign or
    // exponent. f64 exactly represents integers up to 2^53, and `{:.0}`
    // never introduces an exponent or fraction for finite magnitudes here.
    format!("{:.0}", abs)
}

/// Upper bound (inclusive) on the hex-literal rewrite, matching spec §4.1
/// point 5: past this, the hex spelling stops being shorter than either the
/// decimal or exponential form for any integer of this magnitude.
const HEX_LITERAL_MAX: f64 = 0xFFFF_FFFF_FFFF_F800u64 as f64;
const HEX_LITERAL_MIN: f64 = 1e12;

fn maybe_minify_integer(digits: &str, abs: f64, minify: bool) -> String {
    if !minify {
        return digits.to_string();
    }
    // Prefer whichever of exponential or hex form is strictly shorter than
    // the decimal digits, e.g. 1000000 -> 1e6, 0xFFFFFFFFFFF -> a hex literal.
    let mut best = digits.to_string();
    if let Some(exp_form) = exponential_form_if_shorter(digits) {
        if exp_form.len() < best.len() {
            best = exp_form;
        }
    }
    if (HEX_LITERAL_MIN..=HEX_LITERAL_MAX).contains(&abs) {
        if let Some(hex_form) = maybe_hex_literal(digits, abs) {
            if hex_form.len() < best.len() {
                best = hex_form;
            }
        }
    }
    best
}

fn exponential_form_if_shorter(digits: &str) -> Option<String> {
    let trimmed = digits.trim_end_matches('0');
    let zero_count = digits.len() - trimmed.len();
    if zero_count < 2 || trimmed.is_empty() {
        return None;
    }
    let exp_form = format!("{}e{}", trimmed, zero_count);
    if exp_form.len() < digits.len() {
        Some(exp_form)
    } else {
        None
    }
}

/// Shortest decimal string that round-trips back to `value` via `f64::parse`,
/// using Rust's own shortest round-trip `Display` impl as the source of
/// minimal significant digits, then reformatted into JS's exponent notation
/// rules (exponent threshold at 1e21 and 1e-7, lowercase `e`, no `+` on
/// positive exponents below the threshold).
fn shortest_round_trip(abs: f64) -> String {
    let rust_repr = format!("{}", abs);
    if let Some(idx) = rust_repr.find(['e', 'E']) {
        let (mantissa, exp) = rust_repr.split_at(idx);
        let exp_value: i32 = exp[1..].parse().unwrap_or(0);
        return format!("{mantissa}e{}{}", if exp_value >= 0 { "+" } else { "" }, exp_value);
    }

    if abs < 1e-6 {
        // JS switches to exponential notation below 1e-6.
        let exp_value = abs.log10().floor() as i32;
        let mantissa = abs / 10f64.powi(exp_value);
        let mantissa_str = format!("{}", mantissa);
        return format!("{mantissa_str}e-{}", -exp_value);
    }

    rust_repr
}

fn minify_decimal(decimal: &str) -> String {
    // `0.5` -> `.5`; no change for anything already exponential or without
    // a leading `0.`.
    if let Some(rest) = decimal.strip_prefix("0.") {
        format!(".{rest}")
    } else {
        decimal.to_string()
    }
}

/// Rewrites a decimal integer literal to hex when strictly shorter, used
/// only under `minify_syntax` for values where the source used one of the
/// equivalent literal forms. The printer decides when this applies; this is
/// just the formatter.
pub fn maybe_hex_literal(decimal_digits: &str, value: f64) -> Option<String> {
    if value.fract() != 0.0 || value < 0.0 || value > u64::MAX as f64 {
        return None;
    }
    let as_u64 = value as u64;
    let hex = format!("0x{:X}", as_u64);
    if hex.len() < decimal_digits.len() {
        Some(hex)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_format_without_decimal_point() {
        assert_eq!(format_number(5.0, false), "5");
        assert_eq!(format_number(-5.0, false), "-5");
    }

    #[test]
    fn zero_and_negative_zero_both_print_as_bare_zero() {
        assert_eq!(format_number(0.0, false), "0");
        assert_eq!(format_number(-0.0, false), "0");
    }

    #[test]
    fn nan_and_infinity_use_their_keywords() {
        assert_eq!(format_number(f64::NAN, false), "NaN");
        assert_eq!(format_number(f64::INFINITY, false), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY, false), "-Infinity");
    }

    #[test]
    fn fractional_values_round_trip() {
        let s = format_number(0.1, false);
        assert_eq!(s.parse::<f64>().unwrap(), 0.1);
    }

    #[test]
    fn minify_strips_leading_zero_before_decimal_point() {
        assert_eq!(format_number(0.5, true), ".5");
    }

    #[test]
    fn large_round_numbers_prefer_exponential_when_minifying() {
        assert_eq!(format_number(1_000_000.0, true), "1e6");
        assert_eq!(format_number(1_000_000.0, false), "1000000");
    }

    #[test]
    fn large_integers_in_hex_range_prefer_whichever_form_is_shortest() {
        let minified = format_number(0xFFFFFFFFFFFu64 as f64, true);
        assert!(minified.len() <= "17592186044415".len());
    }

    #[test]
    fn hex_rewrite_is_not_applied_below_the_minimum_magnitude() {
        // 1e6 as decimal digits is "1000000"; hex would be "0xF4240", which
        // is shorter, but below HEX_LITERAL_MIN so exponential wins instead.
        assert_eq!(format_number(1_000_000.0, true), "1e6");
    }
}
