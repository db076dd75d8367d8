//! Per-(field, value) capability bundle handed to a rule.

use serde_json::Value;

use super::traits::{DataProvider, PresenceVerifier};

/// Everything a rule may consult while validating one field.
///
/// Conditional rules use [`sibling`](Self::sibling) to read other fields
/// through the data provider; database rules reach the injected verifier via
/// [`verifier`](Self::verifier). Contexts are cheap, borrow-only bundles
/// built fresh for every rule invocation.
///
/// # Examples
///
/// ```rust,ignore
/// use serde_json::json;
/// use turnstile::foundation::RuleContext;
///
/// let value = json!("premium");
/// let ctx = RuleContext::new("type", &value, None, &[]);
/// assert_eq!(ctx.field(), "type");
/// ```
#[derive(Clone, Copy)]
pub struct RuleContext<'a> {
    field: &'a str,
    value: &'a Value,
    data: Option<&'a dyn DataProvider>,
    verifier: Option<&'a dyn PresenceVerifier>,
    params: &'a [String],
}

impl<'a> RuleContext<'a> {
    /// Creates a context for `field` carrying `value`.
    pub fn new(
        field: &'a str,
        value: &'a Value,
        data: Option<&'a dyn DataProvider>,
        params: &'a [String],
    ) -> Self {
        Self {
            field,
            value,
            data,
            verifier: None,
            params,
        }
    }

    /// Attaches the injected presence verifier.
    #[must_use]
    pub fn with_verifier(mut self, verifier: &'a dyn PresenceVerifier) -> Self {
        self.verifier = Some(verifier);
        self
    }

    /// Raw field name under validation.
    pub fn field(&self) -> &str {
        self.field
    }

    /// Current value of the field (`Null` when the field is absent).
    pub fn value(&self) -> &Value {
        self.value
    }

    /// The data provider, when one was supplied.
    pub fn data(&self) -> Option<&dyn DataProvider> {
        self.data
    }

    /// The injected presence verifier, when one was registered.
    pub fn verifier(&self) -> Option<&dyn PresenceVerifier> {
        self.verifier
    }

    /// The parameters bound to this rule occurrence, in declared order.
    pub fn params(&self) -> &[String] {
        self.params
    }

    /// The parameter at `index`, if given.
    pub fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }

    /// Reads a sibling field through the data provider.
    pub fn sibling(&self, field: &str) -> Option<Value> {
        self.data.and_then(|d| d.get(field))
    }

    /// Whether a sibling field is present in the input at all.
    pub fn has_sibling(&self, field: &str) -> bool {
        self.data.is_some_and(|d| d.has(field))
    }
}

impl std::fmt::Debug for RuleContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleContext")
            .field("field", &self.field)
            .field("value", &self.value)
            .field("params", &self.params)
            .field("has_data", &self.data.is_some())
            .field("has_verifier", &self.verifier.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn param_access() {
        let value = json!(42);
        let params = vec!["18".to_string(), "100".to_string()];
        let ctx = RuleContext::new("age", &value, None, &params);

        assert_eq!(ctx.param(0), Some("18"));
        assert_eq!(ctx.param(1), Some("100"));
        assert_eq!(ctx.param(2), None);
    }

    #[test]
    fn sibling_without_provider_is_none() {
        let value = json!(null);
        let ctx = RuleContext::new("a", &value, None, &[]);
        assert!(ctx.sibling("b").is_none());
        assert!(!ctx.has_sibling("b"));
    }
}
