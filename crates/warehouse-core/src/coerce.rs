//! Forgiving numeric coercion for request fields.
//!
//! [`parse_number_or`] never fails: anything that does not read as a finite
//! real number resolves to the supplied default. Non-finite results are
//! replaced too, since JSON has no way to represent them.

use serde_json::value::RawValue;
use serde_json::Value;

/// Reads `value` as an `f64`, falling back to `default`.
///
/// | input                     | result                      |
/// |---------------------------|-----------------------------|
/// | absent, `null`            | `default`                   |
/// | number                    | the number                  |
/// | string                    | trimmed text parsed, else `default` |
/// | `true` / `false`          | `1.0` / `0.0`               |
/// | array, object             | `default`                   |
///
/// Any NaN or infinite result also yields `default`.
pub fn parse_number_or(value: Option<&Value>, default: f64) -> f64 {
    let parsed = match value {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_text(s),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        Some(Value::Array(_)) | Some(Value::Object(_)) => None,
    };
    parsed.filter(|n| n.is_finite()).unwrap_or(default)
}

/// Like [`parse_number_or`], for a field kept as unparsed JSON text.
///
/// Numeric literals outside the `f64` range (`1e400`) are rejected by
/// `serde_json` when building a [`Value`]. They are read directly here and
/// end up as `default` like any other non-finite input.
pub fn parse_raw_number_or(raw: Option<&RawValue>, default: f64) -> f64 {
    let Some(raw) = raw else {
        return default;
    };
    match serde_json::from_str::<Value>(raw.get()) {
        Ok(value) => parse_number_or(Some(&value), default),
        Err(_) => parse_text(raw.get())
            .filter(|n| n.is_finite())
            .unwrap_or(default),
    }
}

/// Parses trimmed text as a real number.
///
/// Underscores are accepted between digits (`1_000`), as in Python's
/// `float()`.
fn parse_text(s: &str) -> Option<f64> {
    let s = s.trim();
    if !s.contains('_') {
        return s.parse().ok();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut cleaned = String::with_capacity(s.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            let prev_digit = i > 0 && chars[i - 1].is_ascii_digit();
            let next_digit = chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
            if !(prev_digit && next_digit) {
                return None;
            }
        } else {
            cleaned.push(c);
        }
    }
    cleaned.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn raw(text: &str) -> Box<RawValue> {
        RawValue::from_string(text.to_string()).unwrap()
    }

    #[test]
    fn missing_and_null_use_default() {
        assert_eq!(parse_number_or(None, 0.0), 0.0);
        assert_eq!(parse_number_or(Some(&Value::Null), 4.5), 4.5);
    }

    #[test]
    fn numbers_pass_through() {
        assert_eq!(parse_number_or(Some(&json!(100)), 0.0), 100.0);
        assert_eq!(parse_number_or(Some(&json!(-2.25)), 0.0), -2.25);
    }

    #[test]
    fn numeric_strings_are_parsed() {
        assert_eq!(parse_number_or(Some(&json!("10")), 0.0), 10.0);
        assert_eq!(parse_number_or(Some(&json!("  2.5 ")), 0.0), 2.5);
        assert_eq!(parse_number_or(Some(&json!("1e3")), 0.0), 1000.0);
        assert_eq!(parse_number_or(Some(&json!("-7")), 0.0), -7.0);
    }

    #[test]
    fn non_finite_strings_use_default() {
        assert_eq!(parse_number_or(Some(&json!("inf")), 0.0), 0.0);
        assert_eq!(parse_number_or(Some(&json!("-Infinity")), 2.0), 2.0);
        assert_eq!(parse_number_or(Some(&json!("nan")), 0.0), 0.0);
        assert_eq!(parse_number_or(Some(&json!("1e400")), 0.0), 0.0);
    }

    #[test]
    fn digit_separators_are_accepted() {
        assert_eq!(parse_number_or(Some(&json!("1_000")), 0.0), 1000.0);
        assert_eq!(parse_number_or(Some(&json!("1_000.5")), 0.0), 1000.5);
        assert_eq!(parse_number_or(Some(&json!("1e1_0")), 0.0), 1.0e10);
    }

    #[test]
    fn misplaced_separators_use_default() {
        assert_eq!(parse_number_or(Some(&json!("_1")), 0.0), 0.0);
        assert_eq!(parse_number_or(Some(&json!("1_")), 0.0), 0.0);
        assert_eq!(parse_number_or(Some(&json!("1__0")), 0.0), 0.0);
        assert_eq!(parse_number_or(Some(&json!("1_.5")), 0.0), 0.0);
    }

    #[test]
    fn garbage_strings_use_default() {
        assert_eq!(parse_number_or(Some(&json!("abc")), 0.0), 0.0);
        assert_eq!(parse_number_or(Some(&json!("")), 3.0), 3.0);
        assert_eq!(parse_number_or(Some(&json!("12kg")), 1.0), 1.0);
    }

    #[test]
    fn booleans_coerce_to_one_and_zero() {
        assert_eq!(parse_number_or(Some(&json!(true)), 9.0), 1.0);
        assert_eq!(parse_number_or(Some(&json!(false)), 9.0), 0.0);
    }

    #[test]
    fn containers_use_default() {
        assert_eq!(parse_number_or(Some(&json!([1, 2])), 0.0), 0.0);
        assert_eq!(parse_number_or(Some(&json!({ "n": 1 })), 0.0), 0.0);
    }

    #[test]
    fn raw_fields_follow_value_rules() {
        assert_eq!(parse_raw_number_or(None, 1.5), 1.5);
        assert_eq!(parse_raw_number_or(Some(&*raw("42")), 0.0), 42.0);
        assert_eq!(parse_raw_number_or(Some(&*raw("\"7.5\"")), 0.0), 7.5);
        assert_eq!(parse_raw_number_or(Some(&*raw("true")), 0.0), 1.0);
        assert_eq!(parse_raw_number_or(Some(&*raw("null")), 3.0), 3.0);
    }

    #[test]
    fn out_of_range_raw_numbers_use_default() {
        assert_eq!(parse_raw_number_or(Some(&*raw("1e400")), 0.0), 0.0);
        assert_eq!(parse_raw_number_or(Some(&*raw("-1e400")), 5.0), 5.0);
    }

    proptest! {
        #[test]
        fn arbitrary_text_always_yields_a_finite_number(s in ".*") {
            let n = parse_number_or(Some(&Value::String(s)), 0.0);
            prop_assert!(n.is_finite());
        }

        #[test]
        fn finite_numbers_round_trip_through_strings(n in -1.0e12f64..1.0e12) {
            let v = Value::String(n.to_string());
            prop_assert_eq!(parse_number_or(Some(&v), 0.0), n);
        }
    }
}
