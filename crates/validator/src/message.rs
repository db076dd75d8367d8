//! Message resolution for failed rules.
//!
//! Template selection follows a layered override scheme, highest first:
//!
//! 1. field+rule-specific override, keyed `"rule.field"`
//! 2. rule-level override, keyed `"rule"`
//! 3. the rule instance's own default template
//!
//! After selection, placeholders are substituted in one linear scan:
//! `:attribute` becomes the field's display name (custom attribute if set,
//! raw field name otherwise) and `:paramN` (0-indexed) becomes the Nth
//! parameter of the rule invocation, verbatim. Unmatched placeholders are
//! left as-is, and a substituted value is never re-scanned.
//!
//! Resolver state is per engine instance and never shared.

use std::collections::HashMap;

/// Resolves the display string for one failed rule occurrence.
///
/// # Examples
///
/// ```rust,ignore
/// use turnstile::message::Resolver;
///
/// let mut resolver = Resolver::new();
/// resolver.set_custom_attribute("email", "Email Address");
/// let msg = resolver.resolve("required", "email", "The :attribute field is required.", &[]);
/// assert_eq!(msg, "The Email Address field is required.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    // Holds both "rule" and "rule.field" keys; the dot makes them disjoint.
    messages: HashMap<String, String>,
    attributes: HashMap<String, String>,
}

impl Resolver {
    /// Creates a resolver with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an override template for `"rule"` or `"rule.field"`.
    pub fn set_custom_message(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.messages.insert(key.into(), template.into());
    }

    /// Registers a display name substituted for `:attribute` on `field`.
    pub fn set_custom_attribute(&mut self, field: impl Into<String>, display: impl Into<String>) {
        self.attributes.insert(field.into(), display.into());
    }

    /// Selects the template for (`rule`, `field`) and substitutes
    /// placeholders.
    #[must_use]
    pub fn resolve(
        &self,
        rule: &str,
        field: &str,
        default_template: &str,
        params: &[String],
    ) -> String {
        let template = self
            .messages
            .get(&format!("{rule}.{field}"))
            .or_else(|| self.messages.get(rule))
            .map_or(default_template, String::as_str);

        self.substitute(template, field, params)
    }

    // Single pass over the template; output is never re-scanned.
    fn substitute(&self, template: &str, field: &str, params: &[String]) -> String {
        let attribute = self
            .attributes
            .get(field)
            .map_or(field, String::as_str);

        let mut out = String::with_capacity(template.len() + 16);
        let mut rest = template;

        while let Some(pos) = rest.find(':') {
            out.push_str(&rest[..pos]);
            let tail = &rest[pos + 1..];

            if let Some(after) = tail.strip_prefix("attribute") {
                out.push_str(attribute);
                rest = after;
                continue;
            }

            if let Some(after) = tail.strip_prefix("param") {
                let digits = after
                    .find(|c: char| !c.is_ascii_digit())
                    .unwrap_or(after.len());
                if digits > 0 {
                    let index: usize = after[..digits].parse().unwrap_or(usize::MAX);
                    if let Some(param) = params.get(index) {
                        out.push_str(param);
                        rest = &after[digits..];
                        continue;
                    }
                }
            }

            // Not a recognized placeholder; keep the colon as-is.
            out.push(':');
            rest = tail;
        }

        out.push_str(rest);
        out
    }
}
