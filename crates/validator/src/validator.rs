//! Top-level facade: an engine bundled with a map provider.

use std::sync::Arc;

use serde_json::Value;

use crate::data::MapProvider;
use crate::engine::{Engine, Rules};
use crate::foundation::{PresenceVerifier, Rule, ValidationError};
use crate::registry::RuleRegistry;
use crate::report::Report;

/// Validates a JSON tree against per-field rule-spec strings.
///
/// Each instance owns its engine: registry customizations, message
/// overrides, and attribute names are fully isolated between instances.
///
/// # Examples
///
/// ```rust,ignore
/// use serde_json::json;
/// use turnstile::{Rules, Validator};
///
/// let validator = Validator::new();
/// let data = json!({"email": "test@example.com", "age": 25});
/// let rules: Rules = [
///     ("email".to_string(), "required|email".to_string()),
///     ("age".to_string(), "required|numeric|min:18".to_string()),
/// ]
/// .into_iter()
/// .collect();
///
/// assert!(validator.validate(&data, &rules).is_ok());
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    engine: Engine,
}

impl Validator {
    /// A validator over the default rule catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
        }
    }

    /// A validator over a custom-built registry.
    #[must_use]
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self {
            engine: Engine::with_registry(registry),
        }
    }

    /// Validates and returns `Err(report)` when any field fails.
    pub fn validate(&self, data: &Value, rules: &Rules) -> Result<(), Report> {
        let report = self.validate_with_report(data, rules);
        if report.is_valid() {
            Ok(())
        } else {
            Err(report)
        }
    }

    /// Validates and always returns the full report.
    #[must_use]
    pub fn validate_with_report(&self, data: &Value, rules: &Rules) -> Report {
        let provider = MapProvider::new(data.clone());
        self.engine.execute(&provider, rules)
    }

    /// Adds or replaces a rule on this instance.
    pub fn add_rule<F>(&mut self, name: impl Into<String>, constructor: F) -> Result<(), ValidationError>
    where
        F: Fn(&[String]) -> Result<Box<dyn Rule>, ValidationError> + Send + Sync + 'static,
    {
        self.engine.register_rule(name, constructor)
    }

    /// Whether this instance can resolve `name`.
    #[must_use]
    pub fn has_rule(&self, name: &str) -> bool {
        self.engine.has_rule(name)
    }

    /// Registers a message override for `"rule"` or `"rule.field"`.
    pub fn set_custom_message(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.engine.set_custom_message(key, template);
    }

    /// Registers a display name for the `:attribute` placeholder on `field`.
    pub fn set_custom_attribute(&mut self, field: impl Into<String>, display: impl Into<String>) {
        self.engine.set_custom_attribute(field, display);
    }

    /// Injects the persistence-backed verifier consumed by `exists`/`unique`.
    pub fn set_presence_verifier(&mut self, verifier: Arc<dyn PresenceVerifier>) {
        self.engine.set_presence_verifier(verifier);
    }

    /// The underlying engine, for direct `execute` calls against a custom
    /// data provider.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}
