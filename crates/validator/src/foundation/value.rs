//! Shared semantics over the dynamic value model.
//!
//! Every presence-sensitive rule (`required`, the `required_*` conditionals,
//! `filled`) funnels through [`is_present`], and every size-sensitive rule
//! (`min`, `max`, `between`, `size`) funnels through [`measure`], so the
//! semantics live in exactly one place.

use serde_json::Value;

/// The shared presence predicate.
///
/// Empty means: `null`; numeric or boolean zero-value (`0`, `0.0`, `false`);
/// the empty string; a zero-length array or object. Everything else is
/// present.
#[must_use]
pub fn is_present(value: &Value) -> bool {
    !is_empty(value)
}

/// Inverse of [`is_present`].
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !*b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Numeric view of a value: a JSON number, or a string that parses as one.
#[must_use]
pub fn as_numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// The shared size measure used by `min` / `max` / `between` / `size`.
///
/// Numbers measure as their numeric value, strings by character count,
/// arrays and objects by element count. `null` and booleans have no size.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn measure(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => Some(s.chars().count() as f64),
        Value::Array(items) => Some(items.len() as f64),
        Value::Object(map) => Some(map.len() as f64),
        Value::Null | Value::Bool(_) => None,
    }
}

/// Whether a scalar value equals a raw spec parameter.
///
/// Strings compare verbatim; numbers and booleans compare against the
/// parameter's parse of the same shape. Containers never equal a parameter.
#[must_use]
pub fn equals_param(value: &Value, param: &str) -> bool {
    match value {
        Value::String(s) => s == param,
        Value::Number(n) => {
            n.to_string() == param
                || n.as_f64()
                    .zip(param.parse::<f64>().ok())
                    .is_some_and(|(a, b)| a == b)
        }
        Value::Bool(b) => param == if *b { "true" } else { "false" },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn presence_predicate_empty_cases() {
        for v in [json!(null), json!(0), json!(0.0), json!(false), json!(""), json!([]), json!({})]
        {
            assert!(is_empty(&v), "expected empty: {v:?}");
        }
    }

    #[test]
    fn presence_predicate_present_cases() {
        for v in [
            json!("hello"),
            json!(42),
            json!(-0.5),
            json!(true),
            json!([1, 2]),
            json!({"a": 1}),
        ] {
            assert!(is_present(&v), "expected present: {v:?}");
        }
    }

    #[test]
    fn numeric_view_accepts_numeric_strings() {
        assert_eq!(as_numeric(&json!("123")), Some(123.0));
        assert_eq!(as_numeric(&json!("4.5")), Some(4.5));
        assert_eq!(as_numeric(&json!(19.99)), Some(19.99));
        assert_eq!(as_numeric(&json!("abc")), None);
        assert_eq!(as_numeric(&json!(true)), None);
    }

    #[test]
    fn measure_is_value_for_numbers_and_length_for_strings() {
        assert_eq!(measure(&json!(85.5)), Some(85.5));
        assert_eq!(measure(&json!("+1234567890")), Some(11.0));
        assert_eq!(measure(&json!([1, 2, 3])), Some(3.0));
        assert_eq!(measure(&json!(null)), None);
    }

    #[test]
    fn param_equality_is_shape_aware() {
        assert!(equals_param(&json!("premium"), "premium"));
        assert!(equals_param(&json!(15), "15"));
        assert!(equals_param(&json!(15.0), "15"));
        assert!(equals_param(&json!(true), "true"));
        assert!(!equals_param(&json!(["premium"]), "premium"));
    }
}
