//! Metadata value tree and dot-path access
//!
//! Metadata is a mapping from keys to scalars or nested mappings. Rules and
//! enrichment both address values by dot-separated key paths
//! (e.g. `domain_definition.max_z`), resolved by a small recursive lookup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A scalar or nested-mapping value stored in [`Metadata`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Map(BTreeMap<String, MetadataValue>),
}

impl MetadataValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            MetadataValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetadataValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MetadataValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, MetadataValue::Null)
    }

    /// Human-readable type tag used in comparison error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            MetadataValue::Null => "null",
            MetadataValue::Bool(_) => "boolean",
            MetadataValue::Number(_) => "number",
            MetadataValue::String(_) => "string",
            MetadataValue::Map(_) => "mapping",
        }
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        MetadataValue::Number(value)
    }
}

impl From<u64> for MetadataValue {
    fn from(value: u64) -> Self {
        MetadataValue::Number(value as f64)
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        MetadataValue::Bool(value)
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::String(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::String(value)
    }
}

/// Root metadata structure for one pipeline run
///
/// Created per run, enriched exactly once by the resolver, then read any
/// number of times during profile evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(BTreeMap<String, MetadataValue>);

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a dot-separated key path against the tree.
    ///
    /// Returns `None` when any segment is absent or when the path tries to
    /// traverse through a scalar.
    pub fn lookup(&self, path: &str) -> Option<&MetadataValue> {
        let mut segments = path.split('.');
        let mut current = self.0.get(segments.next()?)?;
        for segment in segments {
            match current {
                MetadataValue::Map(map) => current = map.get(segment)?,
                _ => return None,
            }
        }
        Some(current)
    }

    /// Insert a value at a dot-separated key path, creating intermediate
    /// mappings as needed. An existing scalar along the path is replaced by
    /// a mapping.
    pub fn insert_path(&mut self, path: &str, value: impl Into<MetadataValue>) {
        let mut segments: Vec<&str> = path.split('.').collect();
        let Some(last) = segments.pop() else {
            return;
        };

        let mut map = &mut self.0;
        for segment in segments {
            let entry = map
                .entry(segment.to_string())
                .or_insert_with(|| MetadataValue::Map(BTreeMap::new()));
            if !matches!(entry, MetadataValue::Map(_)) {
                *entry = MetadataValue::Map(BTreeMap::new());
            }
            let MetadataValue::Map(inner) = entry else {
                return;
            };
            map = inner;
        }
        map.insert(last.to_string(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<BTreeMap<String, MetadataValue>> for Metadata {
    fn from(map: BTreeMap<String, MetadataValue>) -> Self {
        Self(map)
    }
}
