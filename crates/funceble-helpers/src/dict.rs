//! Recursive key edits on nested mappings
//!
//! Values are modelled as a tagged tree ([`Value`]). Edits walk the whole tree
//! once, rebuilding every mapping they pass through, so the wrapped value is
//! never modified in place.
//!
//! # Examples
//!
//! ```
//! use funceble_helpers::{Dict, Value};
//! use serde_json::json;
//!
//! let dict = Dict::new(json!({"Py": "Funceble", "Hello": "world"}));
//! let renamed = dict.rename_key(&json!({"Py": "PyFunceble"}).into(), true).unwrap();
//!
//! assert_eq!(renamed.get("PyFunceble"), Some(&Value::from("Funceble")));
//! assert!(!renamed.contains_key("Py"));
//! ```

use std::collections::{BTreeMap, BTreeSet};

/// A mapping from key names to values.
pub type Mapping = BTreeMap<String, Value>;

/// A hashable leaf, the only thing a [`Value::Set`] may hold.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scalar {
    Null,
    Bool(bool),
    Integer(i64),
    String(String),
}

/// A node of a nested mapping structure.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    Float(f64),
    Sequence(Vec<Value>),
    Set(BTreeSet<Scalar>),
    Mapping(Mapping),
}

impl Value {
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }
}

/// Edit operations on a wrapped [`Value`].
///
/// Both edits return `None` when the wrapped value is not a mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Dict {
    value: Value,
}

impl Dict {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Parse JSON text into a `Dict`.
    pub fn from_json(source: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<serde_json::Value>(source).map(Self::new)
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Remove `key` from the mapping and from every mapping nested inside it.
    ///
    /// A missing key is not an error.
    pub fn remove_key(&self, key: &str) -> Option<Mapping> {
        let map = self.value.as_mapping()?;
        Some(edit_mapping(map, &|k: &str| {
            (k != key).then(|| k.to_string())
        }))
    }

    /// Rename keys according to `key_map`, an `old -> new` mapping of strings.
    ///
    /// With `strict`, only keys equal to `old` are renamed to `new`. Without
    /// it, every key containing `old` (case-sensitive) has each occurrence
    /// replaced by `new`. Renames apply at every nesting level. When a rename
    /// lands on an existing key, the renamed entry wins.
    ///
    /// Returns `None` if the wrapped value or `key_map` is not a mapping, or if
    /// a replacement name in `key_map` is not a string.
    pub fn rename_key(&self, key_map: &Value, strict: bool) -> Option<Mapping> {
        let map = self.value.as_mapping()?;
        let renames = key_map
            .as_mapping()?
            .iter()
            .map(|(old, new)| Some((old.as_str(), new.as_str()?)))
            .collect::<Option<Vec<_>>>()?;

        Some(edit_mapping(map, &|k: &str| {
            Some(renames.iter().fold(k.to_string(), |name, &(old, new)| {
                if strict {
                    if name == old { new.to_string() } else { name }
                } else if !old.is_empty() && name.contains(old) {
                    name.replace(old, new)
                } else {
                    name
                }
            }))
        }))
    }
}

/// Rebuild `map`, passing every key through `edit`. `None` drops the entry.
fn edit_mapping(map: &Mapping, edit: &dyn Fn(&str) -> Option<String>) -> Mapping {
    let mut out = Mapping::new();
    let mut renamed = Vec::new();

    for (key, value) in map {
        let Some(new_key) = edit(key) else {
            continue;
        };
        let value = edit_value(value, edit);
        if new_key == *key {
            out.entry(new_key).or_insert(value);
        } else {
            renamed.push((new_key, value));
        }
    }
    out.extend(renamed);

    out
}

fn edit_value(value: &Value, edit: &dyn Fn(&str) -> Option<String>) -> Value {
    match value {
        Value::Mapping(map) => Value::Mapping(edit_mapping(map, edit)),
        Value::Sequence(items) => {
            Value::Sequence(items.iter().map(|item| edit_value(item, edit)).collect())
        }
        leaf => leaf.clone(),
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Value::Scalar(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(Scalar::String(s))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Scalar(Scalar::Integer(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<BTreeSet<Scalar>> for Value {
    fn from(items: BTreeSet<Scalar>) -> Self {
        Value::Set(items)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Mapping(map)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Scalar(Scalar::Null),
            serde_json::Value::Bool(b) => b.into(),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => i.into(),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => s.into(),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Mapping(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<Scalar> for serde_json::Value {
    fn from(s: Scalar) -> Self {
        match s {
            Scalar::Null => serde_json::Value::Null,
            Scalar::Bool(b) => b.into(),
            Scalar::Integer(i) => i.into(),
            Scalar::String(s) => s.into(),
        }
    }
}

/// Sets become arrays; non-finite floats become `null`.
impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Scalar(s) => s.into(),
            Value::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Sequence(items) => items.into_iter().map(serde_json::Value::from).collect(),
            Value::Set(items) => items.into_iter().map(serde_json::Value::from).collect(),
            Value::Mapping(map) => serde_json::Value::Object(
                map.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}
