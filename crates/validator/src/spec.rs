//! Rule-spec parser.
//!
//! The compact spec grammar is two-level: a spec splits on `|` into tokens,
//! and each token splits on the first `:` into a rule name and a
//! comma-separated parameter blob. There is no escaping of `,` or `:` inside
//! parameters — a known grammar limitation that is preserved, not fixed.
//!
//! Parsing is pure: no registry access, no side effects. Resolving names
//! into live rule instances happens in the engine so that per-instance
//! registry customizations are respected.

use smallvec::SmallVec;

use crate::foundation::ValidationError;

/// One parsed `name[:p0,p1,...]` token. Immutable once parsed.
///
/// # Examples
///
/// ```rust,ignore
/// use turnstile::spec::parse;
///
/// let specs = parse("age", "required|min:18").unwrap();
/// assert_eq!(specs[1].name(), "min");
/// assert_eq!(specs[1].params(), ["18"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    name: String,
    // Almost every rule takes 0-2 parameters.
    params: SmallVec<[String; 2]>,
}

impl RuleSpec {
    /// The rule name of this token.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parameters of this token, in declared order.
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }
}

/// Parses a spec string into its ordered rule tokens.
///
/// The empty spec yields zero rules: such a field is never evaluated and can
/// never fail. Whitespace is not trimmed. A token with an empty name fails
/// with [`ValidationError::InvalidRuleSpec`] naming the field and the
/// zero-based token index.
pub fn parse(field: &str, spec: &str) -> Result<Vec<RuleSpec>, ValidationError> {
    if spec.is_empty() {
        return Ok(Vec::new());
    }

    let mut specs = Vec::new();
    for (index, token) in spec.split('|').enumerate() {
        let (name, blob) = match token.split_once(':') {
            Some((name, blob)) => (name, Some(blob)),
            None => (token, None),
        };

        if name.is_empty() {
            return Err(ValidationError::InvalidRuleSpec {
                field: field.to_string(),
                index,
            });
        }

        let params = blob
            .map(|blob| blob.split(',').map(str::to_string).collect())
            .unwrap_or_default();

        specs.push(RuleSpec {
            name: name.to_string(),
            params,
        });
    }
    Ok(specs)
}
