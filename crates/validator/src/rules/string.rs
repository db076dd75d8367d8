//! String content rules.

use regex::Regex;
use serde_json::Value;

use crate::foundation::{Rule, RuleContext, ValidationError};
use crate::rule;

use super::{names, require_params};

fn as_str(value: &Value) -> Option<&str> {
    value.as_str()
}

rule! {
    /// Letters only (Unicode-aware), non-empty.
    pub Alpha("alpha", "The :attribute may only contain letters.");
    check(ctx) {
        as_str(ctx.value())
            .is_some_and(|s| !s.is_empty() && s.chars().all(char::is_alphabetic))
    }
}

rule! {
    /// Letters and digits only, non-empty.
    pub AlphaNum("alpha_num", "The :attribute may only contain letters and numbers.");
    check(ctx) {
        as_str(ctx.value())
            .is_some_and(|s| !s.is_empty() && s.chars().all(char::is_alphanumeric))
    }
}

rule! {
    /// Letters, digits, dashes and underscores only, non-empty.
    pub AlphaDash("alpha_dash", "The :attribute may only contain letters, numbers, dashes and underscores.");
    check(ctx) {
        as_str(ctx.value()).is_some_and(|s| {
            !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        })
    }
}

rule! {
    /// Entirely lowercase.
    pub Lowercase("lowercase", "The :attribute must be lowercase.");
    check(ctx) {
        as_str(ctx.value()).is_some_and(|s| s == s.to_lowercase())
    }
}

rule! {
    /// Entirely uppercase.
    pub Uppercase("uppercase", "The :attribute must be uppercase.");
    check(ctx) {
        as_str(ctx.value()).is_some_and(|s| s == s.to_uppercase())
    }
}

/// `starts_with:p1[,p2...]` — string must start with one of the prefixes.
#[derive(Debug, Clone)]
pub struct StartsWith {
    prefixes: Vec<String>,
}

impl StartsWith {
    /// Creates the rule from one or more accepted prefixes.
    #[must_use]
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    /// Registry constructor: `params = [prefix, ...]`.
    pub fn constructor(params: &[String]) -> Result<Box<dyn Rule>, ValidationError> {
        require_params(names::STARTS_WITH, params, 1)?;
        Ok(Box::new(Self::new(params.to_vec())))
    }
}

impl Rule for StartsWith {
    fn name(&self) -> &str {
        names::STARTS_WITH
    }

    fn validate(&self, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
        let ok = as_str(ctx.value())
            .is_some_and(|s| self.prefixes.iter().any(|p| s.starts_with(p.as_str())));
        if ok {
            Ok(())
        } else {
            Err(ValidationError::failure(self.name()))
        }
    }

    fn message(&self) -> &str {
        "The :attribute must start with :param0."
    }
}

/// `ends_with:s1[,s2...]` — string must end with one of the suffixes.
#[derive(Debug, Clone)]
pub struct EndsWith {
    suffixes: Vec<String>,
}

impl EndsWith {
    /// Creates the rule from one or more accepted suffixes.
    #[must_use]
    pub fn new(suffixes: Vec<String>) -> Self {
        Self { suffixes }
    }

    /// Registry constructor: `params = [suffix, ...]`.
    pub fn constructor(params: &[String]) -> Result<Box<dyn Rule>, ValidationError> {
        require_params(names::ENDS_WITH, params, 1)?;
        Ok(Box::new(Self::new(params.to_vec())))
    }
}

impl Rule for EndsWith {
    fn name(&self) -> &str {
        names::ENDS_WITH
    }

    fn validate(&self, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
        let ok = as_str(ctx.value())
            .is_some_and(|s| self.suffixes.iter().any(|p| s.ends_with(p.as_str())));
        if ok {
            Ok(())
        } else {
            Err(ValidationError::failure(self.name()))
        }
    }

    fn message(&self) -> &str {
        "The :attribute must end with :param0."
    }
}

/// `regex:pattern` — string must match the pattern.
///
/// The pattern is everything after the first `:` in the token; commas inside
/// it are split into parameters by the spec grammar, so patterns containing
/// `,` or `|` cannot be expressed — a documented grammar limitation.
#[derive(Debug, Clone)]
pub struct RegexMatch {
    pattern: Regex,
}

impl RegexMatch {
    /// Compiles the rule's pattern.
    pub fn new(pattern: &str) -> Result<Self, ValidationError> {
        let pattern = Regex::new(pattern).map_err(|e| {
            ValidationError::construction(names::REGEX, format!("invalid pattern: {e}"))
        })?;
        Ok(Self { pattern })
    }

    /// Registry constructor: `params = [pattern]`.
    pub fn constructor(params: &[String]) -> Result<Box<dyn Rule>, ValidationError> {
        require_params(names::REGEX, params, 1)?;
        Ok(Box::new(Self::new(&params[0])?))
    }
}

impl Rule for RegexMatch {
    fn name(&self) -> &str {
        names::REGEX
    }

    fn validate(&self, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
        if as_str(ctx.value()).is_some_and(|s| self.pattern.is_match(s)) {
            Ok(())
        } else {
            Err(ValidationError::failure(self.name()))
        }
    }

    fn message(&self) -> &str {
        "The :attribute format is invalid."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn passes(rule: &dyn Rule, value: Value) -> bool {
        let ctx = RuleContext::new("f", &value, None, &[]);
        rule.validate(&ctx).is_ok()
    }

    #[rstest]
    #[case(json!("JohnDoe"), true)]
    #[case(json!("Żółć"), true)]
    #[case(json!("John123"), false)]
    #[case(json!(""), false)]
    #[case(json!(42), false)]
    fn alpha_cases(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(passes(&Alpha::new(), value), expected);
    }

    #[rstest]
    #[case(json!("john_doe_123"), true)]
    #[case(json!("my-blog-post"), true)]
    #[case(json!("no spaces"), false)]
    fn alpha_dash_cases(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(passes(&AlphaDash::new(), value), expected);
    }

    #[test]
    fn casing_rules() {
        assert!(passes(&Lowercase::new(), json!("abc-1")));
        assert!(!passes(&Lowercase::new(), json!("Abc")));
        assert!(passes(&Uppercase::new(), json!("ABC")));
        assert!(!passes(&Uppercase::new(), json!("AbC")));
    }

    #[test]
    fn starts_and_ends_with_accept_any_listed_affix() {
        let rule = StartsWith::new(vec!["img_".into(), "pic_".into()]);
        assert!(passes(&rule, json!("pic_001")));
        assert!(!passes(&rule, json!("doc_001")));

        let rule = EndsWith::new(vec![".jpg".into(), ".png".into()]);
        assert!(passes(&rule, json!("photo.png")));
        assert!(!passes(&rule, json!("photo.gif")));
    }

    #[test]
    fn regex_matches_and_rejects() {
        let rule = RegexMatch::new(r"^\d{3}-\d{4}$").unwrap();
        assert!(passes(&rule, json!("123-4567")));
        assert!(!passes(&rule, json!("invalid")));
    }

    #[test]
    fn regex_constructor_surfaces_bad_patterns() {
        let err = RegexMatch::constructor(&["(unclosed".into()]).err().unwrap();
        assert!(matches!(err, ValidationError::RuleConstruction { .. }));
    }
}
