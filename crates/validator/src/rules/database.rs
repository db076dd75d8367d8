//! Persistence-backed rules: `exists:table[,column]`, `unique:table[,column]`.
//!
//! Both consume the injected [`PresenceVerifier`] capability. With no
//! verifier registered they fail deterministically with a configuration
//! error — never a panic. A verifier's own error is surfaced as a single
//! field error like any other rule failure; retries belong to the verifier.
//!
//! [`PresenceVerifier`]: crate::foundation::PresenceVerifier

use crate::foundation::{PresenceVerifier, Rule, RuleContext, ValidationError};

use super::{names, require_params};

fn verifier_for<'a>(
    rule: &str,
    ctx: &'a RuleContext<'_>,
) -> Result<&'a dyn PresenceVerifier, ValidationError> {
    ctx.verifier().ok_or_else(|| {
        ValidationError::configuration(format!(
            "no presence verifier registered for the `{rule}` rule"
        ))
    })
}

/// `exists:table[,column]` — value must occur in `table.column`.
///
/// The column defaults to the field name under validation.
#[derive(Debug, Clone)]
pub struct Exists {
    table: String,
    column: Option<String>,
}

impl Exists {
    /// Creates the rule against a table and optional column.
    pub fn new(table: impl Into<String>, column: Option<String>) -> Self {
        Self {
            table: table.into(),
            column,
        }
    }

    /// Registry constructor: `params = [table[, column]]`.
    pub fn constructor(params: &[String]) -> Result<Box<dyn Rule>, ValidationError> {
        require_params(names::EXISTS, params, 1)?;
        Ok(Box::new(Self::new(&*params[0], params.get(1).cloned())))
    }
}

impl Rule for Exists {
    fn name(&self) -> &str {
        names::EXISTS
    }

    fn validate(&self, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
        let verifier = verifier_for(self.name(), ctx)?;
        let column = self.column.as_deref().unwrap_or(ctx.field());
        if verifier.exists(&self.table, column, ctx.value())? {
            Ok(())
        } else {
            Err(ValidationError::failure(self.name()))
        }
    }

    fn message(&self) -> &str {
        "The selected :attribute is invalid."
    }
}

/// `unique:table[,column]` — value must NOT already occur in `table.column`.
///
/// The column defaults to the field name under validation.
#[derive(Debug, Clone)]
pub struct Unique {
    table: String,
    column: Option<String>,
}

impl Unique {
    /// Creates the rule against a table and optional column.
    pub fn new(table: impl Into<String>, column: Option<String>) -> Self {
        Self {
            table: table.into(),
            column,
        }
    }

    /// Registry constructor: `params = [table[, column]]`.
    pub fn constructor(params: &[String]) -> Result<Box<dyn Rule>, ValidationError> {
        require_params(names::UNIQUE, params, 1)?;
        Ok(Box::new(Self::new(&*params[0], params.get(1).cloned())))
    }
}

impl Rule for Unique {
    fn name(&self) -> &str {
        names::UNIQUE
    }

    fn validate(&self, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
        let verifier = verifier_for(self.name(), ctx)?;
        let column = self.column.as_deref().unwrap_or(ctx.field());
        if verifier.unique(&self.table, column, ctx.value())? {
            Ok(())
        } else {
            Err(ValidationError::failure(self.name()))
        }
    }

    fn message(&self) -> &str {
        "The :attribute has already been taken."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    // Verifier that knows one taken value.
    struct FixedVerifier {
        taken: Value,
    }

    impl PresenceVerifier for FixedVerifier {
        fn exists(&self, _t: &str, _c: &str, value: &Value) -> Result<bool, ValidationError> {
            Ok(value == &self.taken)
        }

        fn unique(&self, _t: &str, _c: &str, value: &Value) -> Result<bool, ValidationError> {
            Ok(value != &self.taken)
        }
    }

    struct FailingVerifier;

    impl PresenceVerifier for FailingVerifier {
        fn exists(&self, _t: &str, _c: &str, _v: &Value) -> Result<bool, ValidationError> {
            Err(ValidationError::provider("connection refused"))
        }

        fn unique(&self, _t: &str, _c: &str, _v: &Value) -> Result<bool, ValidationError> {
            Err(ValidationError::provider("connection refused"))
        }
    }

    #[test]
    fn missing_verifier_is_a_configuration_error() {
        let rule = Exists::new("users", None);
        let value = json!("ada");
        let ctx = RuleContext::new("username", &value, None, &[]);
        let err = rule.validate(&ctx).unwrap_err();
        assert!(matches!(err, ValidationError::Configuration { .. }));
    }

    #[test]
    fn exists_consults_the_verifier() {
        let verifier = FixedVerifier { taken: json!("ada") };
        let rule = Exists::new("users", Some("name".into()));

        let known = json!("ada");
        let ctx = RuleContext::new("username", &known, None, &[]).with_verifier(&verifier);
        assert!(rule.validate(&ctx).is_ok());

        let unknown = json!("bob");
        let ctx = RuleContext::new("username", &unknown, None, &[]).with_verifier(&verifier);
        assert!(rule.validate(&ctx).is_err());
    }

    #[test]
    fn unique_inverts_presence() {
        let verifier = FixedVerifier { taken: json!("ada") };
        let rule = Unique::new("users", None);

        let fresh = json!("bob");
        let ctx = RuleContext::new("username", &fresh, None, &[]).with_verifier(&verifier);
        assert!(rule.validate(&ctx).is_ok());

        let taken = json!("ada");
        let ctx = RuleContext::new("username", &taken, None, &[]).with_verifier(&verifier);
        assert!(rule.validate(&ctx).is_err());
    }

    #[test]
    fn verifier_errors_propagate_as_provider_errors() {
        let rule = Unique::new("users", None);
        let value = json!("ada");
        let ctx = RuleContext::new("username", &value, None, &[]).with_verifier(&FailingVerifier);
        let err = rule.validate(&ctx).unwrap_err();
        assert!(matches!(err, ValidationError::Provider { .. }));
    }
}
