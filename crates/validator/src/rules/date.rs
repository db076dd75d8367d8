//! Date rules: `date`, `after:bound`, `before:bound`.
//!
//! Accepted spellings: `%Y-%m-%d` and RFC 3339 timestamps (compared by their
//! date part). Bounds are parsed at construction so a misspelled bound is a
//! construction error, not a silent always-fail.

use chrono::{DateTime, NaiveDate};
use serde_json::Value;

use crate::foundation::{Rule, RuleContext, ValidationError};
use crate::rule;

use super::{names, require_params};

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive())
}

fn value_date(value: &Value) -> Option<NaiveDate> {
    value.as_str().and_then(parse_date)
}

fn bound_param(rule: &str, params: &[String]) -> Result<NaiveDate, ValidationError> {
    require_params(rule, params, 1)?;
    parse_date(&params[0]).ok_or_else(|| {
        ValidationError::construction(rule, format!("parameter `{}` is not a date", params[0]))
    })
}

rule! {
    /// A parseable calendar date.
    pub DateRule("date", "The :attribute is not a valid date.");
    check(ctx) { value_date(ctx.value()).is_some() }
}

/// `after:bound` — date strictly later than the bound.
#[derive(Debug, Clone, Copy)]
pub struct After {
    bound: NaiveDate,
}

impl After {
    /// Creates the rule with its exclusive lower bound.
    #[must_use]
    pub fn new(bound: NaiveDate) -> Self {
        Self { bound }
    }

    /// Registry constructor: `params = [date]`.
    pub fn constructor(params: &[String]) -> Result<Box<dyn Rule>, ValidationError> {
        Ok(Box::new(Self::new(bound_param(names::AFTER, params)?)))
    }
}

impl Rule for After {
    fn name(&self) -> &str {
        names::AFTER
    }

    fn validate(&self, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
        match value_date(ctx.value()) {
            Some(d) if d > self.bound => Ok(()),
            _ => Err(ValidationError::failure(self.name())),
        }
    }

    fn message(&self) -> &str {
        "The :attribute must be a date after :param0."
    }
}

/// `before:bound` — date strictly earlier than the bound.
#[derive(Debug, Clone, Copy)]
pub struct Before {
    bound: NaiveDate,
}

impl Before {
    /// Creates the rule with its exclusive upper bound.
    #[must_use]
    pub fn new(bound: NaiveDate) -> Self {
        Self { bound }
    }

    /// Registry constructor: `params = [date]`.
    pub fn constructor(params: &[String]) -> Result<Box<dyn Rule>, ValidationError> {
        Ok(Box::new(Self::new(bound_param(names::BEFORE, params)?)))
    }
}

impl Rule for Before {
    fn name(&self) -> &str {
        names::BEFORE
    }

    fn validate(&self, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
        match value_date(ctx.value()) {
            Some(d) if d < self.bound => Ok(()),
            _ => Err(ValidationError::failure(self.name())),
        }
    }

    fn message(&self) -> &str {
        "The :attribute must be a date before :param0."
    }
}
