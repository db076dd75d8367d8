//! # turnstile
//!
//! A field-level data-validation engine driven by compact rule-spec strings.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use serde_json::json;
//! use turnstile::prelude::*;
//!
//! let validator = Validator::new();
//! let data = json!({"name": "John123", "email": "invalid", "age": 15});
//! let rules: Rules = [
//!     ("name".to_string(), "required|alpha".to_string()),
//!     ("email".to_string(), "required|email".to_string()),
//!     ("age".to_string(), "required|numeric|min:18|max:100".to_string()),
//! ]
//! .into_iter()
//! .collect();
//!
//! let report = validator.validate_with_report(&data, &rules);
//! assert!(!report.is_valid());
//! assert_eq!(report.len(), 3);
//! ```
//!
//! ## Architecture
//!
//! A rule-spec string (`"required|numeric|min:18"`) is parsed into tokens,
//! each token is resolved through a per-instance [`RuleRegistry`] into a
//! live [`Rule`](foundation::Rule), and the [`Engine`] runs the compiled
//! chain with short-circuit (`bail`) and skip (`nullable`) semantics.
//! Failed rules resolve their display string through a layered message
//! override scheme (`rule.field` > `rule` > the rule's default template)
//! with `:attribute` / `:paramN` placeholder substitution.
//!
//! ## Extending
//!
//! Use [`RuleRegistry::builder`] to filter or extend the catalog, or
//! register a rule on one instance with
//! [`Validator::add_rule`](validator::Validator::add_rule). The [`rule!`]
//! macro removes the boilerplate for simple predicates.

pub mod data;
pub mod engine;
pub mod foundation;
mod macros;
pub mod message;
pub mod prelude;
pub mod registry;
pub mod report;
pub mod rules;
pub mod spec;
pub mod validator;

pub use engine::{Engine, Rules};
pub use foundation::{DataProvider, PresenceVerifier, Rule, RuleContext, ValidationError};
pub use registry::RuleRegistry;
pub use report::Report;
pub use validator::Validator;
