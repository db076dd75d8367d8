//! Prelude module for convenient imports.
//!
//! Provides a single `use turnstile::prelude::*;` import that brings in the
//! traits, the facade, and the engine surface.
//!
//! # Examples
//!
//! ```rust,ignore
//! use serde_json::json;
//! use turnstile::prelude::*;
//!
//! let validator = Validator::new();
//! let report = validator.validate_with_report(
//!     &json!({"age": 15}),
//!     &[("age".to_string(), "required|numeric|min:18".to_string())]
//!         .into_iter()
//!         .collect(),
//! );
//! assert!(!report.is_valid());
//! ```

pub use crate::data::MapProvider;
pub use crate::engine::{Engine, Rules};
pub use crate::foundation::{
    DataProvider, PresenceVerifier, Rule, RuleContext, RuleConstructor, ValidationError,
    ValidationResult,
};
pub use crate::message::Resolver;
pub use crate::registry::{RuleRegistry, RuleRegistryBuilder};
pub use crate::report::Report;
pub use crate::rules::names;
pub use crate::validator::Validator;
