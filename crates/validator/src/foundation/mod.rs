//! Core types and traits of the validation engine.
//!
//! This module contains the fundamental building blocks:
//!
//! - **Traits**: [`Rule`], [`DataProvider`], [`PresenceVerifier`]
//! - **Context**: [`RuleContext`], the capability bundle handed to rules
//! - **Errors**: [`ValidationError`], the crate-wide failure taxonomy
//! - **Value semantics**: the shared presence predicate and size measure
//!
//! # Architecture
//!
//! Rules are an *open* set: heterogeneous predicates registered by name at
//! runtime behind the object-safe [`Rule`] trait. The registry maps names to
//! [`RuleConstructor`] factories rather than forming a type hierarchy, so
//! hosts can add, replace, or filter rules without touching the engine.

pub mod context;
pub mod error;
pub mod traits;
pub mod value;

pub use context::RuleContext;
pub use error::{ValidationError, ValidationResult};
pub use traits::{DataProvider, PresenceVerifier, Rule, RuleConstructor};
pub use value::{as_numeric, equals_param, is_empty, is_present, measure};
