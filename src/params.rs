//! Query-parameter values and normalization.
//!
//! The API's query string distinguishes two value shapes: a plain scalar
//! (`status=resolved`) and a set-style filter whose key carries a literal
//! `[]` suffix and whose value is a comma-joined list
//! (`statuses[]=triggered,acknowledged`). Callers state the shape explicitly
//! with [`QueryValue`]; [`QueryParams::normalize`] rewrites sequences into
//! the bracketed wire form without touching the input collection.

use crate::error::{PagerDutyError, Result};

/// A query-parameter value, decided at the call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// A single value, sent under the key unchanged. Strings are always one
    /// value; they are never split into characters.
    Scalar(String),
    /// An ordered list of values, comma-joined under the `key[]` wire form.
    Sequence(Vec<String>),
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        Self::Sequence(values)
    }
}

impl From<Vec<&str>> for QueryValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Sequence(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for QueryValue {
    fn from(values: &[&str]) -> Self {
        Self::Sequence(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Query parameters with dictionary key semantics and stable insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, QueryValue)>,
}

impl QueryParams {
    /// Create an empty parameter collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, replacing any existing value under the same key.
    pub fn insert<K: Into<String>, V: Into<QueryValue>>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Get the value under `key`, if present.
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, QueryValue)> {
        self.entries.iter()
    }

    /// Produce the wire-form parameter list.
    ///
    /// Builds a fresh list: scalars pass through unchanged, each sequence
    /// under key `k` becomes a `k[]` entry with its elements joined by `,`
    /// in their given order. The input is left untouched.
    ///
    /// Fails with [`PagerDutyError::InvalidParameters`] when a sequence key
    /// `k` coexists with a literal `k[]` key, which would make one of them
    /// silently win on the wire.
    pub fn normalize(&self) -> Result<Vec<(String, String)>> {
        let mut normalized = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            match value {
                QueryValue::Scalar(scalar) => normalized.push((key.clone(), scalar.clone())),
                QueryValue::Sequence(elements) => {
                    let bracketed = format!("{key}[]");
                    if self.contains_key(&bracketed) {
                        return Err(PagerDutyError::InvalidParameters(format!(
                            "sequence parameter '{key}' collides with existing key '{bracketed}'"
                        )));
                    }
                    normalized.push((bracketed, elements.join(",")));
                }
            }
        }
        Ok(normalized)
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for QueryParams
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from(entries: [(K, V); N]) -> Self {
        let mut params = Self::new();
        for (key, value) in entries {
            params.insert(key, value);
        }
        params
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_normalize_to_identity() {
        let params = QueryParams::from([
            ("status", QueryValue::from("resolved")),
            ("limit", QueryValue::from(25_i64)),
            ("include_totals", QueryValue::from(true)),
        ]);

        let normalized = params.normalize().unwrap();
        assert_eq!(
            normalized,
            vec![
                ("status".to_string(), "resolved".to_string()),
                ("limit".to_string(), "25".to_string()),
                ("include_totals".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn sequences_rewrite_to_bracketed_keys() {
        let params = QueryParams::from([("statuses", vec!["triggered", "acknowledged", "resolved"])]);

        let normalized = params.normalize().unwrap();
        assert_eq!(
            normalized,
            vec![(
                "statuses[]".to_string(),
                "triggered,acknowledged,resolved".to_string()
            )]
        );
        assert!(normalized.iter().all(|(k, _)| k != "statuses"));
    }

    #[test]
    fn strings_are_never_split_into_characters() {
        let params = QueryParams::from([("query", "abc")]);
        assert_eq!(
            params.normalize().unwrap(),
            vec![("query".to_string(), "abc".to_string())]
        );
    }

    #[test]
    fn empty_sequence_joins_to_empty_string() {
        let params = QueryParams::from([("ids", Vec::<String>::new())]);
        assert_eq!(
            params.normalize().unwrap(),
            vec![("ids[]".to_string(), String::new())]
        );
    }

    #[test]
    fn normalization_leaves_input_untouched() {
        let params = QueryParams::from([("statuses", vec!["triggered"])]);
        params.normalize().unwrap();

        assert!(params.contains_key("statuses"));
        assert_eq!(
            params.get("statuses"),
            Some(&QueryValue::Sequence(vec!["triggered".to_string()]))
        );
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut params = QueryParams::new();
        params.insert("b", "2");
        params.insert("a", "1");
        params.insert("c", vec!["x", "y"]);

        let keys: Vec<String> = params
            .normalize()
            .unwrap()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["b", "a", "c[]"]);
    }

    #[test]
    fn insert_replaces_existing_key() {
        let mut params = QueryParams::new();
        params.insert("status", "triggered");
        params.insert("status", "resolved");

        assert_eq!(params.len(), 1);
        assert_eq!(
            params.normalize().unwrap(),
            vec![("status".to_string(), "resolved".to_string())]
        );
    }

    #[test]
    fn bracketed_key_collision_is_rejected() {
        let mut params = QueryParams::new();
        params.insert("ids", vec!["1", "2"]);
        params.insert("ids[]", "3");

        assert!(matches!(
            params.normalize(),
            Err(PagerDutyError::InvalidParameters(_))
        ));
    }
}
