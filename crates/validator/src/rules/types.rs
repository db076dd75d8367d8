//! Type-shape rules: `numeric`, `integer`, `boolean`, `array`, `string`.
//!
//! Loose by design, mirroring how form-shaped input arrives: numeric and
//! boolean accept their string spellings (`"123"`, `"4.5"`, `"true"`,
//! `"0"`), since HTTP form data carries everything as text.

use serde_json::Value;

use crate::foundation::as_numeric;
use crate::rule;

rule! {
    /// A number, or a string that parses as one.
    pub Numeric("numeric", "The :attribute must be a number.");
    check(ctx) { as_numeric(ctx.value()).is_some() }
}

rule! {
    /// A whole number, or a string that parses as one.
    pub Integer("integer", "The :attribute must be an integer.");
    check(ctx) {
        match ctx.value() {
            Value::Number(n) => n.is_i64() || n.is_u64(),
            Value::String(s) => s.trim().parse::<i64>().is_ok(),
            _ => false,
        }
    }
}

rule! {
    /// A boolean, its string spelling, or a 0/1 numeral.
    pub Boolean("boolean", "The :attribute must be true or false.");
    check(ctx) {
        match ctx.value() {
            Value::Bool(_) => true,
            Value::String(s) => matches!(s.as_str(), "true" | "false" | "1" | "0"),
            Value::Number(n) => matches!(n.as_i64(), Some(0 | 1)),
            _ => false,
        }
    }
}

rule! {
    /// A JSON array.
    pub IsArray("array", "The :attribute must be an array.");
    check(ctx) { ctx.value().is_array() }
}

rule! {
    /// A JSON string.
    pub IsString("string", "The :attribute must be a string.");
    check(ctx) { ctx.value().is_string() }
}
