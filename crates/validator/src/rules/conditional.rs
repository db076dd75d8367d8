//! Conditional presence rules: `required_if`, `required_unless`,
//! `required_with`, `required_with_all`, `required_without`,
//! `required_without_all`.
//!
//! Each rule first tests its trigger by reading sibling fields through the
//! data provider in the context and, only when triggered, delegates to the
//! same presence predicate `required` uses. An untriggered rule passes and
//! the rest of the chain still runs; combine with `nullable` when later
//! rules must not see an absent value.

use crate::foundation::{equals_param, is_present, Rule, RuleContext, ValidationError};

use super::{names, require_params};

// Trigger satisfied → the value must be present.
fn required_when(rule: &str, ctx: &RuleContext<'_>, triggered: bool) -> Result<(), ValidationError> {
    if triggered && !is_present(ctx.value()) {
        return Err(ValidationError::failure(rule));
    }
    Ok(())
}

fn sibling_present(ctx: &RuleContext<'_>, field: &str) -> bool {
    ctx.sibling(field).as_ref().is_some_and(is_present)
}

/// `required_if:other,value` — required when `other` equals `value`.
#[derive(Debug, Clone)]
pub struct RequiredIf {
    other: String,
    expected: String,
}

impl RequiredIf {
    /// Creates the rule against a sibling field and its triggering value.
    pub fn new(other: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            other: other.into(),
            expected: expected.into(),
        }
    }

    /// Registry constructor: `params = [other, value]`.
    pub fn constructor(params: &[String]) -> Result<Box<dyn Rule>, ValidationError> {
        require_params(names::REQUIRED_IF, params, 2)?;
        Ok(Box::new(Self::new(&*params[0], &*params[1])))
    }
}

impl Rule for RequiredIf {
    fn name(&self) -> &str {
        names::REQUIRED_IF
    }

    fn validate(&self, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
        let triggered = ctx
            .sibling(&self.other)
            .is_some_and(|v| equals_param(&v, &self.expected));
        required_when(self.name(), ctx, triggered)
    }

    fn message(&self) -> &str {
        "The :attribute field is required when :param0 is :param1."
    }
}

/// `required_unless:other,value` — required unless `other` equals `value`.
#[derive(Debug, Clone)]
pub struct RequiredUnless {
    other: String,
    expected: String,
}

impl RequiredUnless {
    /// Creates the rule against a sibling field and its exempting value.
    pub fn new(other: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            other: other.into(),
            expected: expected.into(),
        }
    }

    /// Registry constructor: `params = [other, value]`.
    pub fn constructor(params: &[String]) -> Result<Box<dyn Rule>, ValidationError> {
        require_params(names::REQUIRED_UNLESS, params, 2)?;
        Ok(Box::new(Self::new(&*params[0], &*params[1])))
    }
}

impl Rule for RequiredUnless {
    fn name(&self) -> &str {
        names::REQUIRED_UNLESS
    }

    fn validate(&self, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
        let exempt = ctx
            .sibling(&self.other)
            .is_some_and(|v| equals_param(&v, &self.expected));
        required_when(self.name(), ctx, !exempt)
    }

    fn message(&self) -> &str {
        "The :attribute field is required unless :param0 is :param1."
    }
}

// The four with/without variants share shape: a list of sibling fields and
// an any/all trigger over their presence.

macro_rules! sibling_set_rule {
    (
        $(#[$meta:meta])*
        $name:ident, $rule_name:expr, $message:expr,
        trigger($ctx:ident, $others:ident) $trigger:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            others: Vec<String>,
        }

        impl $name {
            /// Creates the rule against one or more sibling fields.
            #[must_use]
            pub fn new(others: Vec<String>) -> Self {
                Self { others }
            }

            /// Registry constructor: `params = [field, ...]`.
            pub fn constructor(params: &[String]) -> Result<Box<dyn Rule>, ValidationError> {
                require_params($rule_name, params, 1)?;
                Ok(Box::new(Self::new(params.to_vec())))
            }
        }

        impl Rule for $name {
            fn name(&self) -> &str {
                $rule_name
            }

            fn validate(&self, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
                let $ctx = ctx;
                let $others = &self.others;
                let triggered = $trigger;
                required_when(self.name(), ctx, triggered)
            }

            fn message(&self) -> &str {
                $message
            }
        }
    };
}

sibling_set_rule! {
    /// `required_with:f1[,f2...]` — required when any listed field is present.
    RequiredWith, names::REQUIRED_WITH,
    "The :attribute field is required when :param0 is present.",
    trigger(ctx, others) others.iter().any(|f| sibling_present(ctx, f))
}

sibling_set_rule! {
    /// `required_with_all:f1[,f2...]` — required when every listed field is present.
    RequiredWithAll, names::REQUIRED_WITH_ALL,
    "The :attribute field is required when :param0 is present.",
    trigger(ctx, others) others.iter().all(|f| sibling_present(ctx, f))
}

sibling_set_rule! {
    /// `required_without:f1[,f2...]` — required when any listed field is absent.
    RequiredWithout, names::REQUIRED_WITHOUT,
    "The :attribute field is required when :param0 is not present.",
    trigger(ctx, others) others.iter().any(|f| !sibling_present(ctx, f))
}

sibling_set_rule! {
    /// `required_without_all:f1[,f2...]` — required when every listed field is absent.
    RequiredWithoutAll, names::REQUIRED_WITHOUT_ALL,
    "The :attribute field is required when none of :param0 are present.",
    trigger(ctx, others) others.iter().all(|f| !sibling_present(ctx, f))
}
