//! Built-in rule implementations.
//!
//! Every rule here is a self-contained predicate behind the
//! [`Rule`](crate::foundation::Rule) capability. The registry wires them up
//! by name; nothing in this module is aware of chains, skipping, or bail —
//! that is the engine's business.

pub mod comparison;
pub mod conditional;
pub mod control;
pub mod database;
pub mod date;
pub mod format;
pub mod presence;
pub mod size;
pub mod string;
pub mod types;

/// Canonical rule names, used by the registry, the engine's `bail`
/// short-circuit, and tests.
pub mod names {
    /// Chain-local marker: stop the chain after the first failure.
    pub const BAIL: &str = "bail";
    /// Skip the rest of the chain when the value is null.
    pub const NULLABLE: &str = "nullable";
    /// Skip the rest of the chain when the field is absent.
    pub const SOMETIMES: &str = "sometimes";

    pub const REQUIRED: &str = "required";
    pub const FILLED: &str = "filled";
    pub const PRESENT: &str = "present";

    pub const REQUIRED_IF: &str = "required_if";
    pub const REQUIRED_UNLESS: &str = "required_unless";
    pub const REQUIRED_WITH: &str = "required_with";
    pub const REQUIRED_WITH_ALL: &str = "required_with_all";
    pub const REQUIRED_WITHOUT: &str = "required_without";
    pub const REQUIRED_WITHOUT_ALL: &str = "required_without_all";

    pub const NUMERIC: &str = "numeric";
    pub const INTEGER: &str = "integer";
    pub const BOOLEAN: &str = "boolean";
    pub const ARRAY: &str = "array";
    pub const STRING: &str = "string";

    pub const ALPHA: &str = "alpha";
    pub const ALPHA_NUM: &str = "alpha_num";
    pub const ALPHA_DASH: &str = "alpha_dash";
    pub const STARTS_WITH: &str = "starts_with";
    pub const ENDS_WITH: &str = "ends_with";
    pub const REGEX: &str = "regex";
    pub const LOWERCASE: &str = "lowercase";
    pub const UPPERCASE: &str = "uppercase";

    pub const EMAIL: &str = "email";
    pub const URL: &str = "url";
    pub const UUID: &str = "uuid";
    pub const JSON: &str = "json";

    pub const MIN: &str = "min";
    pub const MAX: &str = "max";
    pub const BETWEEN: &str = "between";
    pub const SIZE: &str = "size";
    pub const DIGITS: &str = "digits";

    pub const SAME: &str = "same";
    pub const DIFFERENT: &str = "different";
    pub const CONFIRMED: &str = "confirmed";
    pub const IN: &str = "in";
    pub const NOT_IN: &str = "not_in";
    pub const ACCEPTED: &str = "accepted";

    pub const DATE: &str = "date";
    pub const AFTER: &str = "after";
    pub const BEFORE: &str = "before";

    pub const EXISTS: &str = "exists";
    pub const UNIQUE: &str = "unique";
}

use crate::foundation::ValidationError;

// Shared by every parameterized rule constructor.
pub(crate) fn require_params(
    rule: &str,
    params: &[String],
    at_least: usize,
) -> Result<(), ValidationError> {
    if params.len() < at_least {
        return Err(ValidationError::construction(
            rule,
            format!("expected at least {at_least} parameter(s), got {}", params.len()),
        ));
    }
    Ok(())
}

pub(crate) fn numeric_param(
    rule: &str,
    params: &[String],
    index: usize,
) -> Result<f64, ValidationError> {
    let raw = params.get(index).ok_or_else(|| {
        ValidationError::construction(rule, format!("missing parameter {index}"))
    })?;
    raw.parse::<f64>().map_err(|_| {
        ValidationError::construction(rule, format!("parameter `{raw}` is not numeric"))
    })
}
