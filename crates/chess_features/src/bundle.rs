//! # Feature Bundles - Ordered, Nested Feature Values
//!
//! ## Overview
//!
//! A [`FeatureBundle`] maps feature names to [`FeatureValue`]s in a fixed,
//! insertion-preserving order. Values are scalars, booleans, string labels or
//! nested records; per-color features are records with `white` and `black`
//! keys:
//!
//! ```text
//! {
//!   "material":        { "white": 39, "black": 39 },
//!   "mobility":        20,
//!   "king_safety":     { "white": "Exposed", "black": "Exposed" },
//!   "pawn_structure":  { "white": { "doubled": 0, "isolated": 0, "passed": 0 }, ... },
//!   ...
//! }
//! ```
//!
//! Both types serialize to plain JSON objects with no enum tags, so bundles
//! and diffs share one shape on the wire.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::Color;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Bool(bool),
    Int(i64),
    Label(String),
    Record(IndexMap<String, FeatureValue>),
}

impl FeatureValue {
    /// Record with `white` and `black` entries
    pub fn per_color(white: impl Into<FeatureValue>, black: impl Into<FeatureValue>) -> Self {
        let mut record = IndexMap::with_capacity(2);
        record.insert(Color::White.name().to_string(), white.into());
        record.insert(Color::Black.name().to_string(), black.into());
        FeatureValue::Record(record)
    }

    /// Build a record from `(key, value)` pairs, keeping their order
    pub fn record<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<FeatureValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        FeatureValue::Record(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            FeatureValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FeatureValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_label(&self) -> Option<&str> {
        match self {
            FeatureValue::Label(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&IndexMap<String, FeatureValue>> {
        match self {
            FeatureValue::Record(map) => Some(map),
            _ => None,
        }
    }

    /// Entry of a record, `None` for leaves
    pub fn get(&self, key: &str) -> Option<&FeatureValue> {
        self.as_record()?.get(key)
    }
}

impl From<i64> for FeatureValue {
    fn from(n: i64) -> Self {
        FeatureValue::Int(n)
    }
}

impl From<i32> for FeatureValue {
    fn from(n: i32) -> Self {
        FeatureValue::Int(n.into())
    }
}

impl From<u32> for FeatureValue {
    fn from(n: u32) -> Self {
        FeatureValue::Int(n.into())
    }
}

impl From<usize> for FeatureValue {
    fn from(n: usize) -> Self {
        FeatureValue::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<bool> for FeatureValue {
    fn from(b: bool) -> Self {
        FeatureValue::Bool(b)
    }
}

impl From<&str> for FeatureValue {
    fn from(s: &str) -> Self {
        FeatureValue::Label(s.to_string())
    }
}

impl From<String> for FeatureValue {
    fn from(s: String) -> Self {
        FeatureValue::Label(s)
    }
}

impl From<FeatureBundle> for FeatureValue {
    fn from(bundle: FeatureBundle) -> Self {
        FeatureValue::Record(bundle.0)
    }
}

/// Ordered mapping from feature name to value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureBundle(IndexMap<String, FeatureValue>);

impl FeatureBundle {
    pub fn new() -> Self {
        FeatureBundle(IndexMap::new())
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FeatureValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.0.get(name)
    }

    /// Look up a nested value by a dotted path such as `development.white`
    pub fn get_path(&self, path: &str) -> Option<&FeatureValue> {
        let mut parts = path.split('.');
        let first = self.0.get(parts.next()?)?;
        parts.try_fold(first, |value, key| value.get(key))
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn from_map(map: IndexMap<String, FeatureValue>) -> Self {
        FeatureBundle(map)
    }

    pub(crate) fn as_map(&self) -> &IndexMap<String, FeatureValue> {
        &self.0
    }
}
