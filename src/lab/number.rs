//! Number rendering shared by the example steps' executors and emitters.

/// Significant digits iostream prints for a float with default formatting.
const STREAM_PRECISION: i32 = 6;

/// A C++ expression evaluating to exactly `value` as a `float`.
///
/// Finite values use the shortest literal that parses back to the same
/// `f32`, so a generated comparison sees the value the executor compared.
pub fn float_literal(value: f32) -> String {
    if value.is_nan() {
        "std::numeric_limits<float>::quiet_NaN()".to_string()
    } else if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        format!("{}std::numeric_limits<float>::infinity()", sign)
    } else {
        format!("{:?}f", value)
    }
}

/// Renders `value` the way `std::cout << value` does with default stream
/// settings: `%g` with six significant digits.
pub fn stream_text(value: f32) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    // The promotion to f64 is exact, as it is for the C++ stream.
    let value = f64::from(value);
    let scientific = format!("{:.*e}", (STREAM_PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= STREAM_PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (STREAM_PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
