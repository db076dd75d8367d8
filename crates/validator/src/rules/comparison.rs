//! Cross-field and membership comparison rules.

use serde_json::Value;

use crate::foundation::{equals_param, Rule, RuleContext, ValidationError};
use crate::rule;

use super::{names, require_params};

/// `same:other` — value must equal the sibling field's value.
#[derive(Debug, Clone)]
pub struct Same {
    other: String,
}

impl Same {
    /// Creates the rule against a sibling field.
    pub fn new(other: impl Into<String>) -> Self {
        Self {
            other: other.into(),
        }
    }

    /// Registry constructor: `params = [other]`.
    pub fn constructor(params: &[String]) -> Result<Box<dyn Rule>, ValidationError> {
        require_params(names::SAME, params, 1)?;
        Ok(Box::new(Self::new(&*params[0])))
    }
}

impl Rule for Same {
    fn name(&self) -> &str {
        names::SAME
    }

    fn validate(&self, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
        let matches = ctx
            .sibling(&self.other)
            .is_some_and(|v| &v == ctx.value());
        if matches {
            Ok(())
        } else {
            Err(ValidationError::failure(self.name()))
        }
    }

    fn message(&self) -> &str {
        "The :attribute and :param0 must match."
    }
}

/// `different:other` — value must differ from the sibling field's value.
#[derive(Debug, Clone)]
pub struct Different {
    other: String,
}

impl Different {
    /// Creates the rule against a sibling field.
    pub fn new(other: impl Into<String>) -> Self {
        Self {
            other: other.into(),
        }
    }

    /// Registry constructor: `params = [other]`.
    pub fn constructor(params: &[String]) -> Result<Box<dyn Rule>, ValidationError> {
        require_params(names::DIFFERENT, params, 1)?;
        Ok(Box::new(Self::new(&*params[0])))
    }
}

impl Rule for Different {
    fn name(&self) -> &str {
        names::DIFFERENT
    }

    fn validate(&self, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
        let clashes = ctx
            .sibling(&self.other)
            .is_some_and(|v| &v == ctx.value());
        if clashes {
            Err(ValidationError::failure(self.name()))
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        "The :attribute and :param0 must be different."
    }
}

/// `confirmed` — a `<field>_confirmation` sibling must carry the same value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Confirmed;

impl Confirmed {
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

impl Rule for Confirmed {
    fn name(&self) -> &str {
        names::CONFIRMED
    }

    fn validate(&self, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
        let confirmation = format!("{}_confirmation", ctx.field());
        let matches = ctx
            .sibling(&confirmation)
            .is_some_and(|v| &v == ctx.value());
        if matches {
            Ok(())
        } else {
            Err(ValidationError::failure(self.name()))
        }
    }

    fn message(&self) -> &str {
        "The :attribute confirmation does not match."
    }
}

/// `in:a,b,...` — value must be one of the listed options.
#[derive(Debug, Clone)]
pub struct In {
    options: Vec<String>,
}

impl In {
    /// Creates the rule from its allowed options.
    #[must_use]
    pub fn new(options: Vec<String>) -> Self {
        Self { options }
    }

    /// Registry constructor: `params = [option, ...]`.
    pub fn constructor(params: &[String]) -> Result<Box<dyn Rule>, ValidationError> {
        require_params(names::IN, params, 1)?;
        Ok(Box::new(Self::new(params.to_vec())))
    }
}

impl Rule for In {
    fn name(&self) -> &str {
        names::IN
    }

    fn validate(&self, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
        if self.options.iter().any(|o| equals_param(ctx.value(), o)) {
            Ok(())
        } else {
            Err(ValidationError::failure(self.name()))
        }
    }

    fn message(&self) -> &str {
        "The selected :attribute is invalid."
    }
}

/// `not_in:a,b,...` — value must not be one of the listed options.
#[derive(Debug, Clone)]
pub struct NotIn {
    options: Vec<String>,
}

impl NotIn {
    /// Creates the rule from its rejected options.
    #[must_use]
    pub fn new(options: Vec<String>) -> Self {
        Self { options }
    }

    /// Registry constructor: `params = [option, ...]`.
    pub fn constructor(params: &[String]) -> Result<Box<dyn Rule>, ValidationError> {
        require_params(names::NOT_IN, params, 1)?;
        Ok(Box::new(Self::new(params.to_vec())))
    }
}

impl Rule for NotIn {
    fn name(&self) -> &str {
        names::NOT_IN
    }

    fn validate(&self, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
        if self.options.iter().any(|o| equals_param(ctx.value(), o)) {
            Err(ValidationError::failure(self.name()))
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        "The selected :attribute is invalid."
    }
}

rule! {
    /// Terms-of-service style acceptance: `true`, `"yes"`, `"on"`, `1`.
    pub Accepted("accepted", "The :attribute must be accepted.");
    check(ctx) {
        match ctx.value() {
            Value::Bool(b) => *b,
            Value::String(s) => matches!(s.as_str(), "yes" | "on" | "1" | "true"),
            Value::Number(n) => n.as_i64() == Some(1),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MapProvider;
    use serde_json::json;

    fn run(rule: &dyn Rule, data: Value, field: &str) -> bool {
        let provider = MapProvider::new(data);
        let value =
            crate::foundation::DataProvider::get(&provider, field).unwrap_or(Value::Null);
        let ctx = RuleContext::new(field, &value, Some(&provider), &[]);
        rule.validate(&ctx).is_ok()
    }

    #[test]
    fn same_and_different_read_the_sibling() {
        let data = json!({"password": "secret", "password_repeat": "secret", "old": "other"});
        assert!(run(&Same::new("password_repeat"), data.clone(), "password"));
        assert!(!run(&Same::new("old"), data.clone(), "password"));
        assert!(run(&Different::new("old"), data.clone(), "password"));
        assert!(!run(&Different::new("password_repeat"), data, "password"));
    }

    #[test]
    fn confirmed_uses_the_conventional_suffix() {
        let ok = json!({"password": "secret123", "password_confirmation": "secret123"});
        assert!(run(&Confirmed::new(), ok, "password"));

        let mismatch = json!({"password": "secret123", "password_confirmation": "nope"});
        assert!(!run(&Confirmed::new(), mismatch, "password"));

        let absent = json!({"password": "secret123"});
        assert!(!run(&Confirmed::new(), absent, "password"));
    }

    #[test]
    fn membership_covers_strings_and_numbers() {
        let rule = In::new(vec!["red".into(), "green".into()]);
        assert!(run(&rule, json!({"color": "red"}), "color"));
        assert!(!run(&rule, json!({"color": "blue"}), "color"));

        let rule = In::new(vec!["1".into(), "2".into()]);
        assert!(run(&rule, json!({"level": 2}), "level"));

        let rule = NotIn::new(vec!["admin".into()]);
        assert!(!run(&rule, json!({"role": "admin"}), "role"));
        assert!(run(&rule, json!({"role": "user"}), "role"));
    }

    #[test]
    fn accepted_spellings() {
        for v in [json!(true), json!("yes"), json!("on"), json!("1"), json!(1)] {
            let ctx_value = v.clone();
            let ctx = RuleContext::new("tos", &ctx_value, None, &[]);
            assert!(Accepted::new().validate(&ctx).is_ok(), "expected accept: {v:?}");
        }
        let no = json!(false);
        let ctx = RuleContext::new("tos", &no, None, &[]);
        assert!(Accepted::new().validate(&ctx).is_err());
    }
}
