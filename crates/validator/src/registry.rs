//! Rule registry: name → constructor, with filtering and extension.
//!
//! A registry is assembled once from the default catalog (every built-in
//! pre-registered), optionally filtered and extended through the builder,
//! and read-only from then on — concurrent `resolve`/`has` calls are safe
//! because nothing mutates post-construction.

use std::collections::HashMap;
use std::sync::Arc;

use crate::foundation::{Rule, RuleConstructor, ValidationError};
use crate::rules::{
    comparison, conditional, control, database, date, format, names, presence, size, string,
    types,
};

/// Maps rule names to their constructors and stages custom default messages
/// for the message resolver (the registry itself never interprets them).
///
/// # Examples
///
/// ```rust,ignore
/// use turnstile::registry::RuleRegistry;
///
/// let registry = RuleRegistry::builder()
///     .exclude_rules(["email", "url"])
///     .build();
/// assert!(!registry.has("email"));
/// assert!(registry.has("min"));
/// ```
pub struct RuleRegistry {
    rules: HashMap<String, RuleConstructor>,
    custom_messages: HashMap<String, String>,
}

impl RuleRegistry {
    /// The unfiltered default catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts a registry configuration.
    #[must_use]
    pub fn builder() -> RuleRegistryBuilder {
        RuleRegistryBuilder::default()
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Constructs one rule instance for `name` with the given parameters.
    pub fn resolve(&self, name: &str, params: &[String]) -> Result<Box<dyn Rule>, ValidationError> {
        let constructor = self
            .rules
            .get(name)
            .ok_or_else(|| ValidationError::unknown_rule(name))?;
        constructor(params)
    }

    /// Adds or replaces a constructor after construction.
    ///
    /// Used by the engine's `register_rule`; rejects empty names.
    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F) -> Result<(), ValidationError>
    where
        F: Fn(&[String]) -> Result<Box<dyn Rule>, ValidationError> + Send + Sync + 'static,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::configuration(
                "cannot register a rule with an empty name",
            ));
        }
        self.rules.insert(name, Arc::new(constructor));
        Ok(())
    }

    /// Custom default messages staged for the resolver.
    #[must_use]
    pub fn custom_messages(&self) -> &HashMap<String, String> {
        &self.custom_messages
    }

    /// Every registered rule name, unordered.
    #[must_use]
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.keys().map(String::as_str).collect()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.rules.len())
            .field("custom_messages", &self.custom_messages.len())
            .finish()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Configures a [`RuleRegistry`].
///
/// Options apply in a fixed order regardless of call order: default catalog,
/// then `exclude_rules`, then `include_only`, then `custom_rule` overrides,
/// then `custom_message` staging. When both filters are supplied,
/// `include_only` is applied last and wins — this is a documented contract.
#[derive(Default)]
pub struct RuleRegistryBuilder {
    exclude: Vec<String>,
    include_only: Option<Vec<String>>,
    custom: Vec<(String, RuleConstructor)>,
    custom_messages: HashMap<String, String>,
}

impl RuleRegistryBuilder {
    /// Removes the named rules from the catalog.
    #[must_use]
    pub fn exclude_rules<I, S>(mut self, name_list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(name_list.into_iter().map(Into::into));
        self
    }

    /// Retains only the named rules.
    #[must_use]
    pub fn include_only<I, S>(mut self, name_list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keep = self.include_only.get_or_insert_with(Vec::new);
        keep.extend(name_list.into_iter().map(Into::into));
        self
    }

    /// Adds a custom constructor, overriding any catalog entry of the same
    /// name. Custom rules are exempt from the include/exclude filters.
    #[must_use]
    pub fn custom_rule<F>(mut self, name: impl Into<String>, constructor: F) -> Self
    where
        F: Fn(&[String]) -> Result<Box<dyn Rule>, ValidationError> + Send + Sync + 'static,
    {
        self.custom.push((name.into(), Arc::new(constructor)));
        self
    }

    /// Stages a custom default message template for `rule` (or
    /// `rule.field`), consumed by whoever builds the message resolver.
    #[must_use]
    pub fn custom_message(mut self, rule: impl Into<String>, template: impl Into<String>) -> Self {
        self.custom_messages.insert(rule.into(), template.into());
        self
    }

    /// Assembles the registry.
    #[must_use]
    pub fn build(self) -> RuleRegistry {
        let mut rules = default_catalog();

        for name in &self.exclude {
            rules.remove(name);
        }
        if let Some(keep) = &self.include_only {
            rules.retain(|name, _| keep.iter().any(|k| k == name));
        }
        for (name, constructor) in self.custom {
            rules.insert(name, constructor);
        }

        RuleRegistry {
            rules,
            custom_messages: self.custom_messages,
        }
    }
}

// ============================================================================
// DEFAULT CATALOG
// ============================================================================

type Catalog = HashMap<String, RuleConstructor>;

fn add(catalog: &mut Catalog, name: &str, constructor: RuleConstructor) {
    catalog.insert(name.to_string(), constructor);
}

fn default_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    register_control_rules(&mut catalog);
    register_presence_rules(&mut catalog);
    register_conditional_rules(&mut catalog);
    register_type_rules(&mut catalog);
    register_string_rules(&mut catalog);
    register_format_rules(&mut catalog);
    register_size_rules(&mut catalog);
    register_comparison_rules(&mut catalog);
    register_date_rules(&mut catalog);
    register_database_rules(&mut catalog);
    catalog
}

fn register_control_rules(catalog: &mut Catalog) {
    add(catalog, names::BAIL, Arc::new(control::Bail::constructor));
    add(catalog, names::NULLABLE, Arc::new(control::Nullable::constructor));
    add(catalog, names::SOMETIMES, Arc::new(control::Sometimes::constructor));
}

fn register_presence_rules(catalog: &mut Catalog) {
    add(catalog, names::REQUIRED, Arc::new(presence::Required::constructor));
    add(catalog, names::FILLED, Arc::new(presence::Filled::constructor));
    add(catalog, names::PRESENT, Arc::new(presence::Present::constructor));
}

fn register_conditional_rules(catalog: &mut Catalog) {
    add(catalog, names::REQUIRED_IF, Arc::new(conditional::RequiredIf::constructor));
    add(catalog, names::REQUIRED_UNLESS, Arc::new(conditional::RequiredUnless::constructor));
    add(catalog, names::REQUIRED_WITH, Arc::new(conditional::RequiredWith::constructor));
    add(catalog, names::REQUIRED_WITH_ALL, Arc::new(conditional::RequiredWithAll::constructor));
    add(catalog, names::REQUIRED_WITHOUT, Arc::new(conditional::RequiredWithout::constructor));
    add(
        catalog,
        names::REQUIRED_WITHOUT_ALL,
        Arc::new(conditional::RequiredWithoutAll::constructor),
    );
}

fn register_type_rules(catalog: &mut Catalog) {
    add(catalog, names::NUMERIC, Arc::new(types::Numeric::constructor));
    add(catalog, names::INTEGER, Arc::new(types::Integer::constructor));
    add(catalog, names::BOOLEAN, Arc::new(types::Boolean::constructor));
    add(catalog, names::ARRAY, Arc::new(types::IsArray::constructor));
    add(catalog, names::STRING, Arc::new(types::IsString::constructor));
}

fn register_string_rules(catalog: &mut Catalog) {
    add(catalog, names::ALPHA, Arc::new(string::Alpha::constructor));
    add(catalog, names::ALPHA_NUM, Arc::new(string::AlphaNum::constructor));
    add(catalog, names::ALPHA_DASH, Arc::new(string::AlphaDash::constructor));
    add(catalog, names::STARTS_WITH, Arc::new(string::StartsWith::constructor));
    add(catalog, names::ENDS_WITH, Arc::new(string::EndsWith::constructor));
    add(catalog, names::REGEX, Arc::new(string::RegexMatch::constructor));
    add(catalog, names::LOWERCASE, Arc::new(string::Lowercase::constructor));
    add(catalog, names::UPPERCASE, Arc::new(string::Uppercase::constructor));
}

fn register_format_rules(catalog: &mut Catalog) {
    add(catalog, names::EMAIL, Arc::new(format::Email::constructor));
    add(catalog, names::URL, Arc::new(format::Url::constructor));
    add(catalog, names::UUID, Arc::new(format::Uuid::constructor));
    add(catalog, names::JSON, Arc::new(format::Json::constructor));
}

fn register_size_rules(catalog: &mut Catalog) {
    add(catalog, names::MIN, Arc::new(size::Min::constructor));
    add(catalog, names::MAX, Arc::new(size::Max::constructor));
    add(catalog, names::BETWEEN, Arc::new(size::Between::constructor));
    add(catalog, names::SIZE, Arc::new(size::Size::constructor));
    add(catalog, names::DIGITS, Arc::new(size::Digits::constructor));
}

fn register_comparison_rules(catalog: &mut Catalog) {
    add(catalog, names::SAME, Arc::new(comparison::Same::constructor));
    add(catalog, names::DIFFERENT, Arc::new(comparison::Different::constructor));
    add(catalog, names::CONFIRMED, Arc::new(comparison::Confirmed::constructor));
    add(catalog, names::IN, Arc::new(comparison::In::constructor));
    add(catalog, names::NOT_IN, Arc::new(comparison::NotIn::constructor));
    add(catalog, names::ACCEPTED, Arc::new(comparison::Accepted::constructor));
}

fn register_date_rules(catalog: &mut Catalog) {
    add(catalog, names::DATE, Arc::new(date::DateRule::constructor));
    add(catalog, names::AFTER, Arc::new(date::After::constructor));
    add(catalog, names::BEFORE, Arc::new(date::Before::constructor));
}

fn register_database_rules(catalog: &mut Catalog) {
    add(catalog, names::EXISTS, Arc::new(database::Exists::constructor));
    add(catalog, names::UNIQUE, Arc::new(database::Unique::constructor));
}
