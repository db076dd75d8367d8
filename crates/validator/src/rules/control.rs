//! Chain-control rules: `bail`, `nullable`, `sometimes`.
//!
//! None of these validate anything. `bail` is a pure marker the engine
//! consumes in place — it is registered so `has("bail")` answers truthfully,
//! but the engine recognizes the name before resolution and never calls it.
//! `nullable` and `sometimes` drive the chain-wide skip flag through
//! `should_skip_validation`.

use serde_json::Value;

use crate::foundation::{Rule, RuleContext, ValidationError};

/// Marker rule: after this point in the chain, the first failure stops the
/// chain for this field.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bail;

impl Bail {
    /// Creates the marker.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Registry constructor.
    pub fn constructor(_params: &[String]) -> Result<Box<dyn Rule>, ValidationError> {
        Ok(Box::new(Self))
    }
}

impl Rule for Bail {
    fn name(&self) -> &str {
        super::names::BAIL
    }

    // Never reached: the engine consumes the marker by name.
    fn validate(&self, _ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
        Ok(())
    }

    fn message(&self) -> &str {
        ""
    }
}

/// Skips the remainder of the chain when the value is null.
///
/// This is the idiomatic companion for optional fields: `nullable|email`
/// accepts an absent value and still rejects a malformed present one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nullable;

impl Nullable {
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

impl Rule for Nullable {
    fn name(&self) -> &str {
        super::names::NULLABLE
    }

    fn validate(&self, _ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
        Ok(())
    }

    fn message(&self) -> &str {
        ""
    }

    fn should_skip_validation(&self, value: &Value) -> bool {
        value.is_null()
    }
}

/// Skips the remainder of the chain when the field is absent.
///
/// Under the JSON value model an absent field reads as `Null`, so this
/// behaves like [`Nullable`]; both names are kept because both appear in
/// real-world rule specs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sometimes;

impl Sometimes {
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

impl Rule for Sometimes {
    fn name(&self) -> &str {
        super::names::SOMETIMES
    }

    fn validate(&self, _ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
        Ok(())
    }

    fn message(&self) -> &str {
        ""
    }

    fn should_skip_validation(&self, value: &Value) -> bool {
        value.is_null()
    }
}
