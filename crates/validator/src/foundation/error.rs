//! Error types for the validation engine.
//!
//! A single crate-level enum covers the whole failure taxonomy. Failures are
//! field-scoped: the engine converts them into report entries, it never
//! aborts a run because one field misbehaved.

use thiserror::Error;

/// Everything that can go wrong while compiling or running a rule chain.
///
/// The variants split into two classes:
///
/// - **Compile-class** failures ([`UnknownRule`](Self::UnknownRule),
///   [`RuleConstruction`](Self::RuleConstruction),
///   [`InvalidRuleSpec`](Self::InvalidRuleSpec)) halt the field's chain and
///   produce exactly one error entry, rendered via `Display`.
/// - **Run-class** failures ([`Failure`](Self::Failure),
///   [`Configuration`](Self::Configuration), [`Provider`](Self::Provider))
///   are ordinary rule outcomes. `Failure` is the common case and is
///   rendered through the message resolver; the other two render via
///   `Display`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The rule name is not present in the registry.
    #[error("validation rule `{rule}` is not registered")]
    UnknownRule {
        /// Name the chain asked for.
        rule: String,
    },

    /// The constructor rejected its parameters (e.g. a non-numeric `min`).
    #[error("cannot construct rule `{rule}`: {reason}")]
    RuleConstruction {
        /// Rule being constructed.
        rule: String,
        /// Constructor's own diagnostic.
        reason: String,
    },

    /// The rule-spec grammar is malformed (a token with an empty name).
    #[error("invalid rule spec for field `{field}`: empty rule name at token {index}")]
    InvalidRuleSpec {
        /// Field whose spec string is malformed.
        field: String,
        /// Zero-based index of the offending token.
        index: usize,
    },

    /// A rule's own semantic rejection — the common case.
    #[error("the `{rule}` rule failed")]
    Failure {
        /// Rule that rejected the value.
        rule: String,
    },

    /// A required external capability is missing or misconfigured.
    #[error("validation is misconfigured: {reason}")]
    Configuration {
        /// What is missing.
        reason: String,
    },

    /// An injected capability (e.g. a database-backed verifier) failed.
    #[error("presence verifier failed: {reason}")]
    Provider {
        /// The capability's own diagnostic.
        reason: String,
    },
}

impl ValidationError {
    /// Creates the ordinary rule-rejection error for `rule`.
    pub fn failure(rule: impl Into<String>) -> Self {
        Self::Failure { rule: rule.into() }
    }

    /// Creates an unknown-rule error.
    pub fn unknown_rule(rule: impl Into<String>) -> Self {
        Self::UnknownRule { rule: rule.into() }
    }

    /// Creates a rule-construction error.
    pub fn construction(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::RuleConstruction {
            rule: rule.into(),
            reason: reason.into(),
        }
    }

    /// Creates a configuration error.
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    /// Creates a provider error.
    pub fn provider(reason: impl Into<String>) -> Self {
        Self::Provider {
            reason: reason.into(),
        }
    }

    /// True for the ordinary rule-rejection case, which the engine renders
    /// through the message resolver instead of `Display`.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }
}

/// Shorthand result alias used throughout the crate.
pub type ValidationResult<T> = Result<T, ValidationError>;
