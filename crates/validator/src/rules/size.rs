//! Size rules over the shared measure: `min`, `max`, `between`, `size`,
//! `digits`.
//!
//! The measure is value for numbers, character count for strings, element
//! count for arrays and objects — so `min:8` means "at least 8 characters"
//! for a password and "at least 8" for an age.

use serde_json::Value;

use crate::foundation::{measure, Rule, RuleContext, ValidationError};

use super::{names, numeric_param, require_params};

// All size rules fail values with no measure (null, booleans).
fn check_measure(
    rule: &str,
    ctx: &RuleContext<'_>,
    predicate: impl Fn(f64) -> bool,
) -> Result<(), ValidationError> {
    match measure(ctx.value()) {
        Some(m) if predicate(m) => Ok(()),
        _ => Err(ValidationError::failure(rule)),
    }
}

/// `min:n` — measure must be at least `n`.
#[derive(Debug, Clone, Copy)]
pub struct Min {
    min: f64,
}

impl Min {
    /// Creates the rule with its lower bound.
    #[must_use]
    pub fn new(min: f64) -> Self {
        Self { min }
    }

    /// Registry constructor: `params = [n]`.
    pub fn constructor(params: &[String]) -> Result<Box<dyn Rule>, ValidationError> {
        Ok(Box::new(Self::new(numeric_param(names::MIN, params, 0)?)))
    }
}

impl Rule for Min {
    fn name(&self) -> &str {
        names::MIN
    }

    fn validate(&self, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
        check_measure(self.name(), ctx, |m| m >= self.min)
    }

    fn message(&self) -> &str {
        "The :attribute must be at least :param0."
    }
}

/// `max:n` — measure must be at most `n`.
#[derive(Debug, Clone, Copy)]
pub struct Max {
    max: f64,
}

impl Max {
    /// Creates the rule with its upper bound.
    #[must_use]
    pub fn new(max: f64) -> Self {
        Self { max }
    }

    /// Registry constructor: `params = [n]`.
    pub fn constructor(params: &[String]) -> Result<Box<dyn Rule>, ValidationError> {
        Ok(Box::new(Self::new(numeric_param(names::MAX, params, 0)?)))
    }
}

impl Rule for Max {
    fn name(&self) -> &str {
        names::MAX
    }

    fn validate(&self, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
        check_measure(self.name(), ctx, |m| m <= self.max)
    }

    fn message(&self) -> &str {
        "The :attribute may not be greater than :param0."
    }
}

/// `between:lo,hi` — measure must lie in the inclusive range.
#[derive(Debug, Clone, Copy)]
pub struct Between {
    lo: f64,
    hi: f64,
}

impl Between {
    /// Creates the rule with its inclusive bounds.
    #[must_use]
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Registry constructor: `params = [lo, hi]`.
    pub fn constructor(params: &[String]) -> Result<Box<dyn Rule>, ValidationError> {
        require_params(names::BETWEEN, params, 2)?;
        Ok(Box::new(Self::new(
            numeric_param(names::BETWEEN, params, 0)?,
            numeric_param(names::BETWEEN, params, 1)?,
        )))
    }
}

impl Rule for Between {
    fn name(&self) -> &str {
        names::BETWEEN
    }

    fn validate(&self, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
        check_measure(self.name(), ctx, |m| m >= self.lo && m <= self.hi)
    }

    fn message(&self) -> &str {
        "The :attribute must be between :param0 and :param1."
    }
}

/// `size:n` — measure must equal `n` exactly.
#[derive(Debug, Clone, Copy)]
pub struct Size {
    size: f64,
}

impl Size {
    /// Creates the rule with its exact measure.
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self { size }
    }

    /// Registry constructor: `params = [n]`.
    pub fn constructor(params: &[String]) -> Result<Box<dyn Rule>, ValidationError> {
        Ok(Box::new(Self::new(numeric_param(names::SIZE, params, 0)?)))
    }
}

impl Rule for Size {
    fn name(&self) -> &str {
        names::SIZE
    }

    #[allow(clippy::float_cmp)] // exact: both sides come from the same parses
    fn validate(&self, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
        check_measure(self.name(), ctx, |m| m == self.size)
    }

    fn message(&self) -> &str {
        "The :attribute must be of size :param0."
    }
}

/// `digits:n` — an integer value with exactly `n` digits.
#[derive(Debug, Clone, Copy)]
pub struct Digits {
    count: usize,
}

impl Digits {
    /// Creates the rule with its exact digit count.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// Registry constructor: `params = [n]`.
    pub fn constructor(params: &[String]) -> Result<Box<dyn Rule>, ValidationError> {
        require_params(names::DIGITS, params, 1)?;
        let count = params[0].parse::<usize>().map_err(|_| {
            ValidationError::construction(
                names::DIGITS,
                format!("parameter `{}` is not a digit count", params[0]),
            )
        })?;
        Ok(Box::new(Self::new(count)))
    }
}

impl Rule for Digits {
    fn name(&self) -> &str {
        names::DIGITS
    }

    fn validate(&self, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
        let digits = match ctx.value() {
            Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
            Value::String(s) if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) => {
                Some(s.clone())
            }
            _ => None,
        };
        match digits {
            Some(d) if d.trim_start_matches('-').len() == self.count => Ok(()),
            _ => Err(ValidationError::failure(self.name())),
        }
    }

    fn message(&self) -> &str {
        "The :attribute must be :param0 digits."
    }
}
