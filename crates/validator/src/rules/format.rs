//! Format rules: `email`, `url`, `uuid`, `json`.

use std::sync::LazyLock;

use serde_json::Value;

use crate::rule;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

static URL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());

static UUID_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
    )
    .unwrap()
});

rule! {
    /// A syntactically valid email address.
    pub Email("email", "The :attribute must be a valid email address.");
    check(ctx) {
        ctx.value().as_str().is_some_and(|s| EMAIL_REGEX.is_match(s))
    }
}

rule! {
    /// An http(s) URL.
    pub Url("url", "The :attribute must be a valid URL.");
    check(ctx) {
        ctx.value().as_str().is_some_and(|s| URL_REGEX.is_match(s))
    }
}

rule! {
    /// A hyphenated UUID.
    pub Uuid("uuid", "The :attribute must be a valid UUID.");
    check(ctx) {
        ctx.value().as_str().is_some_and(|s| UUID_REGEX.is_match(s))
    }
}

rule! {
    /// A string containing valid JSON; already-structured values pass.
    pub Json("json", "The :attribute must be valid JSON.");
    check(ctx) {
        match ctx.value() {
            Value::String(s) => serde_json::from_str::<Value>(s).is_ok(),
            Value::Array(_) | Value::Object(_) => true,
            _ => false,
        }
    }
}
