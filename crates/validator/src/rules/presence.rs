//! Presence rules: `required`, `filled`, `present`.
//!
//! All three funnel through the shared presence predicate in
//! [`foundation::value`](crate::foundation::value); `required` is the rule
//! responsible for flagging emptiness as a failure, so it never reports a
//! skip.

use crate::foundation::{is_empty, is_present, Rule, RuleContext, ValidationError};
use crate::rule;

rule! {
    /// Value must be present and non-empty.
    pub Required("required", "The :attribute field is required.");
    check(ctx) { is_present(ctx.value()) }
}

/// Value must be non-empty *when the field is present in the input*.
///
/// An absent field passes; a present-but-empty one fails. Needs the data
/// provider to tell the two apart.
#[derive(Debug, Clone, Copy, Default)]
pub struct Filled;

impl Filled {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Registry constructor.
    pub fn constructor(_params: &[String]) -> Result<Box<dyn Rule>, ValidationError> {
        Ok(Box::new(Self))
    }
}

impl Rule for Filled {
    fn name(&self) -> &str {
        super::names::FILLED
    }

    fn validate(&self, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
        let present_in_input = ctx
            .data()
            .is_some_and(|d| d.has(ctx.field()));
        if present_in_input && is_empty(ctx.value()) {
            return Err(ValidationError::failure(self.name()));
        }
        Ok(())
    }

    fn message(&self) -> &str {
        "The :attribute field must not be empty when present."
    }
}

/// Field must exist in the input, empty or not.
#[derive(Debug, Clone, Copy, Default)]
pub struct Present;

impl Present {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Registry constructor.
    pub fn constructor(_params: &[String]) -> Result<Box<dyn Rule>, ValidationError> {
        Ok(Box::new(Self))
    }
}

impl Rule for Present {
    fn name(&self) -> &str {
        super::names::PRESENT
    }

    fn validate(&self, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
        if ctx.data().is_some_and(|d| d.has(ctx.field())) {
            Ok(())
        } else {
            Err(ValidationError::failure(self.name()))
        }
    }

    fn message(&self) -> &str {
        "The :attribute field must be present."
    }
}
