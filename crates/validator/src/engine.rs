//! Execution engine: compiles and runs one rule chain per field.
//!
//! Fields are independent — no field's validation depends on another field's
//! pass/fail outcome, only on raw values read through the data provider — so
//! one field's errors never prevent the others from being evaluated. Fields
//! are processed in rules-map insertion order for a deterministic report.
//!
//! Per-field algorithm: parse the spec, compile the whole chain through the
//! registry (a compile-class failure — unknown rule, bad parameters — yields
//! exactly one error and halts that field), then run the chain with the
//! skip/bail state machine described on [`Engine::execute`].

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, trace};

use crate::foundation::{DataProvider, PresenceVerifier, Rule, RuleContext, ValidationError};
use crate::message::Resolver;
use crate::registry::RuleRegistry;
use crate::report::Report;
use crate::rules::names;
use crate::spec::{self, RuleSpec};

/// Field → rule-spec string, in declaration order.
///
/// Insertion order is preserved through to the report.
pub type Rules = IndexMap<String, String>;

/// One field's compiled chain: each parsed token paired with its live rule.
type CompiledChain = Vec<(RuleSpec, Box<dyn Rule>)>;

/// Compiles rule-spec strings against a registry and executes them over a
/// data provider.
///
/// Message and attribute overrides are freshly allocated per engine — two
/// engines never observe each other's state, even when executing
/// concurrently from separate threads.
///
/// # Examples
///
/// ```rust,ignore
/// use serde_json::json;
/// use turnstile::data::MapProvider;
/// use turnstile::engine::{Engine, Rules};
///
/// let engine = Engine::new();
/// let provider = MapProvider::new(json!({"age": 15}));
/// let rules: Rules = [("age".to_string(), "required|numeric|min:18".to_string())]
///     .into_iter()
///     .collect();
///
/// let report = engine.execute(&provider, &rules);
/// assert!(!report.is_valid());
/// ```
pub struct Engine {
    registry: RuleRegistry,
    resolver: Resolver,
    verifier: Option<Arc<dyn PresenceVerifier>>,
}

impl Engine {
    /// An engine over the default rule catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(RuleRegistry::new())
    }

    /// An engine over a custom-built registry.
    ///
    /// Messages staged on the registry seed this engine's resolver.
    #[must_use]
    pub fn with_registry(registry: RuleRegistry) -> Self {
        let mut resolver = Resolver::new();
        for (rule, template) in registry.custom_messages() {
            resolver.set_custom_message(rule.clone(), template.clone());
        }
        Self {
            registry,
            resolver,
            verifier: None,
        }
    }

    /// Validates every field against its rule chain.
    ///
    /// The chain state machine, per field with value `v`:
    ///
    /// 1. a `bail` token switches on bail mode for all later rules; it is a
    ///    pure marker, never evaluated as a predicate;
    /// 2. once a rule reports `should_skip_validation(v)`, it and every
    ///    later rule pass without checking;
    /// 3. otherwise the rule validates; a failure appends its resolved
    ///    message and, in bail mode, stops the chain.
    ///
    /// A field with no failures does not appear in the report.
    pub fn execute(&self, provider: &dyn DataProvider, rules: &Rules) -> Report {
        let mut report = Report::new();
        for (field, spec) in rules {
            let errors = self.validate_field(provider, field, spec);
            if !errors.is_empty() {
                debug!(field = %field, count = errors.len(), "field failed validation");
                report.record(field.clone(), errors);
            }
        }
        report
    }

    fn validate_field(&self, provider: &dyn DataProvider, field: &str, spec: &str) -> Vec<String> {
        let specs = match spec::parse(field, spec) {
            Ok(specs) => specs,
            Err(err) => return vec![err.to_string()],
        };
        if specs.is_empty() {
            return Vec::new();
        }

        let chain = match self.compile(specs) {
            Ok(chain) => chain,
            // Compile-class failure: exactly one error, chain never runs.
            Err(err) => return vec![err.to_string()],
        };

        let value = provider.get(field).unwrap_or(Value::Null);
        self.run_chain(provider, field, &value, &chain)
    }

    fn compile(&self, specs: Vec<RuleSpec>) -> Result<CompiledChain, ValidationError> {
        specs
            .into_iter()
            .map(|spec| {
                // The bail marker is recognized by name and never resolved,
                // so it works even under an include_only filter omitting it.
                let rule: Box<dyn Rule> = if spec.name() == names::BAIL {
                    Box::new(crate::rules::control::Bail::new())
                } else {
                    self.registry.resolve(spec.name(), spec.params())?
                };
                Ok((spec, rule))
            })
            .collect()
    }

    fn run_chain(
        &self,
        provider: &dyn DataProvider,
        field: &str,
        value: &Value,
        chain: &CompiledChain,
    ) -> Vec<String> {
        let mut errors = Vec::new();
        let mut skip = false;
        let mut bail = false;

        for (spec, rule) in chain {
            if spec.name() == names::BAIL {
                bail = true;
                continue;
            }
            if skip {
                continue;
            }
            if rule.should_skip_validation(value) {
                trace!(field, rule = spec.name(), "rule flagged chain skip");
                skip = true;
                continue;
            }

            let mut ctx = RuleContext::new(field, value, Some(provider), spec.params());
            if let Some(verifier) = self.verifier.as_deref() {
                ctx = ctx.with_verifier(verifier);
            }

            if let Err(err) = rule.validate(&ctx) {
                trace!(field, rule = spec.name(), "rule failed");
                errors.push(self.render(spec, rule.as_ref(), field, &err));
                if bail {
                    break;
                }
            }
        }
        errors
    }

    // Ordinary failures go through the resolver; everything else (missing
    // verifier, provider faults) is already a self-describing error.
    fn render(&self, spec: &RuleSpec, rule: &dyn Rule, field: &str, err: &ValidationError) -> String {
        if err.is_failure() {
            self.resolver
                .resolve(spec.name(), field, rule.message(), spec.params())
        } else {
            err.to_string()
        }
    }

    /// Adds or replaces a rule constructor on this engine's registry.
    pub fn register_rule<F>(&mut self, name: impl Into<String>, constructor: F) -> Result<(), ValidationError>
    where
        F: Fn(&[String]) -> Result<Box<dyn Rule>, ValidationError> + Send + Sync + 'static,
    {
        self.registry.register(name, constructor)
    }

    /// Whether a rule name can be resolved by this engine.
    #[must_use]
    pub fn has_rule(&self, name: &str) -> bool {
        self.registry.has(name)
    }

    /// Registers a message override for `"rule"` or `"rule.field"`.
    pub fn set_custom_message(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.resolver.set_custom_message(key, template);
    }

    /// Registers a display name for the `:attribute` placeholder on `field`.
    pub fn set_custom_attribute(&mut self, field: impl Into<String>, display: impl Into<String>) {
        self.resolver.set_custom_attribute(field, display);
    }

    /// Replaces the whole message resolver.
    pub fn set_message_resolver(&mut self, resolver: Resolver) {
        self.resolver = resolver;
    }

    /// Injects the persistence-backed verifier consumed by `exists`/`unique`.
    pub fn set_presence_verifier(&mut self, verifier: Arc<dyn PresenceVerifier>) {
        self.verifier = Some(verifier);
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("registry", &self.registry)
            .field("has_verifier", &self.verifier.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MapProvider;
    use serde_json::json;

    fn rules(pairs: &[(&str, &str)]) -> Rules {
        pairs
            .iter()
            .map(|(f, s)| ((*f).to_string(), (*s).to_string()))
            .collect()
    }

    #[test]
    fn empty_rule_string_never_fails() {
        let engine = Engine::new();
        let provider = MapProvider::new(json!({}));
        let report = engine.execute(&provider, &rules(&[("anything", "")]));
        assert!(report.is_valid());
    }

    #[test]
    fn report_preserves_rules_map_order() {
        let engine = Engine::new();
        let provider = MapProvider::new(json!({}));
        let report = engine.execute(
            &provider,
            &rules(&[("zulu", "required"), ("alpha", "required")]),
        );
        let fields: Vec<&str> = report.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, ["zulu", "alpha"]);
    }

    #[test]
    fn error_list_preserves_chain_order() {
        let engine = Engine::new();
        let provider = MapProvider::new(json!({"field": ""}));
        let report = engine.execute(&provider, &rules(&[("field", "required|email|min:5")]));

        let errors = report.field_errors("field").unwrap();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("required"), "got: {}", errors[0]);
    }

    #[test]
    fn bail_truncates_after_first_failure() {
        let engine = Engine::new();
        let provider = MapProvider::new(json!({"field": ""}));
        let report = engine.execute(&provider, &rules(&[("field", "bail|required|min:5|email")]));
        assert_eq!(report.field_errors("field").unwrap().len(), 1);
    }

    #[test]
    fn bail_applies_to_all_rules_after_its_position() {
        let engine = Engine::new();
        let provider = MapProvider::new(json!({"field": ""}));
        // First failure is before the marker, second after: only the second
        // stops the chain.
        let report = engine.execute(&provider, &rules(&[("field", "required|bail|min:5|email")]));
        assert_eq!(report.field_errors("field").unwrap().len(), 2);
    }

    #[test]
    fn nullable_skips_the_rest_of_the_chain_on_null() {
        let engine = Engine::new();
        let provider = MapProvider::new(json!({}));
        let report = engine.execute(&provider, &rules(&[("email", "nullable|email")]));
        assert!(report.is_valid());

        // A present malformed value still fails.
        let provider = MapProvider::new(json!({"email": "nope"}));
        let report = engine.execute(&provider, &rules(&[("email", "nullable|email")]));
        assert!(!report.is_valid());
    }

    #[test]
    fn unknown_rule_is_exactly_one_error_even_with_failing_rules_before_it() {
        let engine = Engine::new();
        let provider = MapProvider::new(json!({"field": ""}));
        let report = engine.execute(&provider, &rules(&[("field", "required|no_such_rule")]));

        let errors = report.field_errors("field").unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("no_such_rule"));
    }

    #[test]
    fn construction_error_surfaces_as_one_field_error() {
        let engine = Engine::new();
        let provider = MapProvider::new(json!({"age": 20}));
        let report = engine.execute(&provider, &rules(&[("age", "min:abc")]));

        let errors = report.field_errors("age").unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("min"));
    }

    #[test]
    fn malformed_spec_names_field_and_token() {
        let engine = Engine::new();
        let provider = MapProvider::new(json!({"f": 1}));
        let report = engine.execute(&provider, &rules(&[("f", "required||alpha")]));

        let errors = report.field_errors("f").unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("token 1"));
    }

    #[test]
    fn one_field_error_never_stops_other_fields() {
        let engine = Engine::new();
        let provider = MapProvider::new(json!({"b": "ok"}));
        let report = engine.execute(
            &provider,
            &rules(&[("a", "no_such_rule"), ("b", "required|alpha")]),
        );
        assert_eq!(report.len(), 1);
        assert!(report.field_errors("a").is_some());
        assert!(report.field_errors("b").is_none());
    }

    #[test]
    fn missing_verifier_reports_a_configuration_error() {
        let engine = Engine::new();
        let provider = MapProvider::new(json!({"username": "ada"}));
        let report = engine.execute(&provider, &rules(&[("username", "exists:users,name")]));

        let errors = report.field_errors("username").unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("verifier"), "got: {}", errors[0]);
    }

    #[test]
    fn custom_registered_rule_participates_in_chains() {
        use crate::foundation::{Rule, RuleContext};

        struct Even;
        impl Rule for Even {
            fn name(&self) -> &str {
                "even"
            }
            fn validate(&self, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
                match ctx.value().as_i64() {
                    Some(n) if n % 2 == 0 => Ok(()),
                    _ => Err(ValidationError::failure("even")),
                }
            }
            fn message(&self) -> &str {
                "The :attribute must be even."
            }
        }

        let mut engine = Engine::new();
        engine
            .register_rule("even", |_params: &[String]| Ok(Box::new(Even) as Box<dyn Rule>))
            .unwrap();

        let provider = MapProvider::new(json!({"count": 3}));
        let report = engine.execute(&provider, &rules(&[("count", "required|even")]));
        assert_eq!(
            report.first("count"),
            Some("The count must be even.")
        );
    }
}
