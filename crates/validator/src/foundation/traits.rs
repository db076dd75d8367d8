//! Core traits of the validation system.
//!
//! [`Rule`] is the capability every predicate implements; the registry maps
//! names to [`RuleConstructor`] factories producing boxed rules. The engine
//! consumes data through the [`DataProvider`] capability and, for
//! persistence-backed rules, through an injected [`PresenceVerifier`].

use std::sync::Arc;

use serde_json::Value;

use super::context::RuleContext;
use super::error::ValidationError;

// ============================================================================
// RULE CAPABILITY
// ============================================================================

/// A named, parameterized predicate applied to one field's value.
///
/// A rule is stateless except for its bound parameters; one boxed instance
/// serves one field's one occurrence in a chain. Implementations must be
/// `Send + Sync` so a constructed engine can be shared across threads.
///
/// # Examples
///
/// ```rust,ignore
/// use turnstile::foundation::{Rule, RuleContext, ValidationError};
///
/// struct NonNull;
///
/// impl Rule for NonNull {
///     fn name(&self) -> &str {
///         "non_null"
///     }
///
///     fn validate(&self, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
///         if ctx.value().is_null() {
///             return Err(ValidationError::failure(self.name()));
///         }
///         Ok(())
///     }
///
///     fn message(&self) -> &str {
///         "The :attribute must not be null."
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// The registered name of this rule (`"required"`, `"min"`, ...).
    fn name(&self) -> &str;

    /// Checks the value carried by `ctx`.
    ///
    /// Returns [`ValidationError::Failure`] for an ordinary rejection; any
    /// other variant is surfaced verbatim as the field's error string.
    fn validate(&self, ctx: &RuleContext<'_>) -> Result<(), ValidationError>;

    /// The default message template, consulted by the resolver when no
    /// override is registered for this rule.
    fn message(&self) -> &str;

    /// When true the engine treats this rule as pass-without-check and skips
    /// every rule after it in the chain.
    ///
    /// This is how `nullable` lets later rules ignore an absent value.
    /// `required` itself must never report a skip for an empty value — it is
    /// the rule responsible for flagging emptiness as a failure.
    fn should_skip_validation(&self, _value: &Value) -> bool {
        false
    }
}

/// Factory producing one rule instance from its raw spec parameters.
///
/// Construction may fail (e.g. `min:abc`); the engine surfaces such errors
/// as [`ValidationError::RuleConstruction`] field errors.
pub type RuleConstructor =
    Arc<dyn Fn(&[String]) -> Result<Box<dyn Rule>, ValidationError> + Send + Sync>;

// ============================================================================
// CONSUMED CAPABILITIES
// ============================================================================

/// Lookup capability over the input tree.
///
/// Paths are dot-separated segments; a `*` segment matches each element of a
/// sequence or mapping at that position. Wildcard expansion belongs to the
/// provider — the engine only ever queries concrete paths it is given.
pub trait DataProvider: Send + Sync {
    /// Whether `path` resolves to at least one value.
    fn has(&self, path: &str) -> bool;

    /// The value at `path`, or `None` when the path does not resolve.
    fn get(&self, path: &str) -> Option<Value>;
}

/// Persistence-backed presence checks consumed by `exists` / `unique`.
///
/// Injected by the host application. When no verifier is registered those
/// rules fail deterministically with a configuration error; they never
/// panic. Retries, if any, belong to the implementation — the engine treats
/// a verifier error exactly like any other rule failure.
pub trait PresenceVerifier: Send + Sync {
    /// Whether `value` occurs in `table.column`.
    fn exists(&self, table: &str, column: &str, value: &Value) -> Result<bool, ValidationError>;

    /// Whether `value` does NOT already occur in `table.column`.
    fn unique(&self, table: &str, column: &str, value: &Value) -> Result<bool, ValidationError>;
}
