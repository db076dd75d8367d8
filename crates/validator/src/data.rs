//! Map-backed data provider over a `serde_json::Value` tree.
//!
//! Paths are dot-separated; a `*` segment fans out across every element of
//! an array (or every value of an object) at that position. Wildcard
//! expansion is the provider's job — the engine only queries the paths it is
//! given.

use serde_json::Value;

use crate::foundation::DataProvider;

/// [`DataProvider`] over an owned JSON tree.
///
/// # Examples
///
/// ```rust,ignore
/// use serde_json::json;
/// use turnstile::data::MapProvider;
/// use turnstile::foundation::DataProvider;
///
/// let provider = MapProvider::new(json!({
///     "user": {"name": "ada"},
///     "items": [{"qty": 1}, {"qty": 2}],
/// }));
///
/// assert!(provider.has("user.name"));
/// assert_eq!(provider.get("items.1.qty"), Some(json!(2)));
/// assert_eq!(provider.get("items.*.qty"), Some(json!([1, 2])));
/// ```
#[derive(Debug, Clone)]
pub struct MapProvider {
    data: Value,
}

impl MapProvider {
    /// Wraps a JSON tree. Non-object roots are allowed; only path lookups
    /// that traverse them will fail.
    #[must_use]
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    /// The wrapped tree.
    #[must_use]
    pub fn data(&self) -> &Value {
        &self.data
    }

    // Resolves a path to every node it matches.
    fn lookup(&self, path: &str) -> Vec<&Value> {
        let mut nodes = vec![&self.data];
        for segment in path.split('.') {
            let mut next = Vec::new();
            for node in nodes {
                match (segment, node) {
                    ("*", Value::Array(items)) => next.extend(items.iter()),
                    ("*", Value::Object(map)) => next.extend(map.values()),
                    (key, Value::Object(map)) => {
                        if let Some(v) = map.get(key) {
                            next.push(v);
                        }
                    }
                    (key, Value::Array(items)) => {
                        if let Some(v) = key.parse::<usize>().ok().and_then(|i| items.get(i)) {
                            next.push(v);
                        }
                    }
                    _ => {}
                }
            }
            if next.is_empty() {
                return Vec::new();
            }
            nodes = next;
        }
        nodes
    }
}

impl DataProvider for MapProvider {
    fn has(&self, path: &str) -> bool {
        !self.lookup(path).is_empty()
    }

    fn get(&self, path: &str) -> Option<Value> {
        let matches = self.lookup(path);
        if matches.is_empty() {
            return None;
        }
        if path.contains('*') {
            // A wildcard path always yields the fan-out, even for one match.
            return Some(Value::Array(matches.into_iter().cloned().collect()));
        }
        Some(matches[0].clone())
    }
}
