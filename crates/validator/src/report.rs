//! Outcome of one engine run.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Ordered-by-field mapping from field name to its resolved error messages.
///
/// Insertion order is the order fields were processed, preserved for
/// deterministic output. A field with zero failing rules never appears as a
/// key; within a field, errors preserve rule declaration order (except when
/// truncated by `bail`).
///
/// # Examples
///
/// ```rust,ignore
/// use turnstile::Validator;
/// use serde_json::json;
///
/// let validator = Validator::new();
/// let report = validator.validate_with_report(
///     &json!({"name": ""}),
///     &[("name".to_string(), "required".to_string())].into_iter().collect(),
/// );
/// assert!(!report.is_valid());
/// assert_eq!(report.field_errors("name").unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Report {
    errors: IndexMap<String, Vec<String>>,
}

impl Report {
    /// Creates an empty (valid) report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a field's error list. Empty lists are never recorded.
    pub(crate) fn record(&mut self, field: impl Into<String>, errors: Vec<String>) {
        debug_assert!(!errors.is_empty());
        self.errors.insert(field.into(), errors);
    }

    /// True when no field failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All failed fields with their messages, in processing order.
    #[must_use]
    pub fn errors(&self) -> &IndexMap<String, Vec<String>> {
        &self.errors
    }

    /// The error messages for one field, if it failed.
    #[must_use]
    pub fn field_errors(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    /// The first error message for one field, if it failed.
    #[must_use]
    pub fn first(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .and_then(|msgs| msgs.first())
            .map(String::as_str)
    }

    /// Number of failed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when the report carries no failures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of error messages across all fields.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Iterates `(field, messages)` pairs in processing order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(field, msgs)| (field.as_str(), msgs.as_slice()))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "validation passed");
        }
        writeln!(f, "validation failed for {} field(s):", self.len())?;
        for (field, messages) in &self.errors {
            for message in messages {
                writeln!(f, "  {field}: {message}")?;
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
