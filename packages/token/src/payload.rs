//! Token payload: an ordered map of string keys to scalar values

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A primitive value carried in a token payload
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Signed integer, e.g. a user id
    Int(i64),
    /// UTF-8 string
    Str(String),
}

impl Scalar {
    /// Integer value, if this scalar is an integer
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Scalar::Int(v) => Some(*v),
            Scalar::Str(_) => None,
        }
    }

    /// String value, if this scalar is a string
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(v) => Some(v),
            Scalar::Int(_) => None,
        }
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(i64::from(v))
    }
}

impl From<u32> for Scalar {
    fn from(v: u32) -> Self {
        Scalar::Int(i64::from(v))
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Str(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Str(v)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Str(v) => write!(f, "{v}"),
        }
    }
}

/// Data signed into a token.
///
/// Keys are kept sorted so the same payload always serializes to the same
/// bytes, which the signature depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(BTreeMap<String, Scalar>);

impl Payload {
    /// Create an empty payload
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert a value, returning the previous one for that key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Option<Scalar> {
        self.0.insert(key.into(), value.into())
    }

    /// Look up a value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.0.get(key)
    }

    /// Look up an integer value by key
    #[must_use]
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Scalar::as_int)
    }

    /// Look up a string value by key
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Scalar::as_str)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the payload has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Canonical compact JSON encoding
    pub(crate) fn to_canonical_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(&self.0)
    }
}

impl<K: Into<String>, V: Into<Scalar>> FromIterator<(K, V)> for Payload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_json_is_key_sorted() {
        let a = Payload::new().with("zeta", 1).with("alpha", "x");
        let b = Payload::new().with("alpha", "x").with("zeta", 1);

        let a_json = a.to_canonical_json().expect("payload should serialize");
        let b_json = b.to_canonical_json().expect("payload should serialize");

        assert_eq!(a_json, b_json);
        assert_eq!(a_json, br#"{"alpha":"x","zeta":1}"#.to_vec());
    }

    #[test]
    fn test_scalar_untagged_decoding() {
        let payload: Payload =
            serde_json::from_str(r#"{"confirm":42,"email":"a@b.c"}"#).expect("should decode");
        assert_eq!(payload.get_int("confirm"), Some(42));
        assert_eq!(payload.get_str("email"), Some("a@b.c"));
        assert_eq!(payload.get_str("confirm"), None);
    }

    #[test]
    fn test_non_scalar_values_are_rejected() {
        for json in [
            r#"{"a":1.5}"#,
            r#"{"a":true}"#,
            r#"{"a":null}"#,
            r#"{"a":[1]}"#,
            r#"{"a":{"b":1}}"#,
            r#"[1,2]"#,
        ] {
            assert!(serde_json::from_str::<Payload>(json).is_err(), "{json}");
        }
    }
}
