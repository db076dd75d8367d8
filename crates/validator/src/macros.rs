//! Macro for declaring simple rules with minimal boilerplate.
//!
//! Parameterized rules (`min`, `required_if`, ...) implement [`Rule`]
//! by hand; the macro covers the long tail of unit predicates.
//!
//! # Examples
//!
//! ```rust,ignore
//! use turnstile::rule;
//!
//! rule! {
//!     /// Value must be a JSON string.
//!     pub IsString("string", "The :attribute must be a string.");
//!     check(ctx) { ctx.value().is_string() }
//! }
//! ```
//!
//! [`Rule`]: crate::foundation::Rule

/// Creates a complete unit rule: struct definition, [`Rule`] implementation,
/// and a `constructor` suitable for registry entries.
///
/// The `check` block receives the [`RuleContext`] and evaluates to `bool`;
/// `false` becomes [`ValidationError::Failure`] for the rule's name.
///
/// [`Rule`]: crate::foundation::Rule
/// [`RuleContext`]: crate::foundation::RuleContext
/// [`ValidationError::Failure`]: crate::foundation::ValidationError
#[macro_export]
macro_rules! rule {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident($rule_name:expr, $message:expr);
        check($ctx:ident) $body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $name;

        impl $name {
            /// Creates the rule.
            #[must_use]
            $vis fn new() -> Self {
                Self
            }

            /// Registry constructor; this rule takes no parameters.
            $vis fn constructor(
                _params: &[String],
            ) -> Result<Box<dyn $crate::foundation::Rule>, $crate::foundation::ValidationError>
            {
                Ok(Box::new(Self))
            }
        }

        impl $crate::foundation::Rule for $name {
            fn name(&self) -> &str {
                $rule_name
            }

            fn validate(
                &self,
                $ctx: &$crate::foundation::RuleContext<'_>,
            ) -> Result<(), $crate::foundation::ValidationError> {
                let passed: bool = $body;
                if passed {
                    Ok(())
                } else {
                    Err($crate::foundation::ValidationError::failure($rule_name))
                }
            }

            fn message(&self) -> &str {
                $message
            }
        }
    };
}
