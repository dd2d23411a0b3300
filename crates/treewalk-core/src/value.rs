//! Document model: the ordered JSON-like value tree walked by the navigator.
//!
//! A [`Value`] is one of four variants. Object members keep insertion order and
//! array elements keep sequence order; both orders are what the navigator
//! reports to visitors.
//!
//! ```
//! use treewalk_core::{Members, Value};
//!
//! let mut members = Members::new();
//! members.insert("id", Value::from(7_i64));
//! members.insert("note", Value::Null);
//! let doc = Value::from(members);
//!
//! let obj = doc.as_object().unwrap();
//! assert!(obj.contains_key("note"));
//! assert!(obj.get("note").unwrap().is_null());
//! assert!(doc.as_array().is_err());
//! ```

use std::fmt;

use serde::Deserialize;
use serde_json::Number;

use crate::error::{Result, TreeError};
use crate::navigator::DEFAULT_MAX_DEPTH;

/// A node of the document tree.
///
/// Dropping a value releases nested containers iteratively, so a tree built
/// in code deeper than any navigator limit can still be dropped safely.
/// `Clone`, `PartialEq` and `Debug` recurse per level and are not covered.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Primitive(Primitive),
    Array(Vec<Value>),
    Object(Members),
}

/// A scalar leaf. There is no way to mutate one after construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Bool(bool),
    Number(Number),
    String(String),
}

/// Discriminant of a [`Value`], used in type mismatch errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Primitive,
    Array,
    Object,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Primitive => "primitive",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Builds a number primitive from a float. Returns `None` for NaN and infinities,
    /// which have no JSON representation.
    pub fn number_f64(f: f64) -> Option<Value> {
        Number::from_f64(f).map(|n| Value::Primitive(Primitive::Number(n)))
    }

    /// Parses JSON text into a tree. Member order follows the source text.
    ///
    /// Nesting is limited to [`DEFAULT_MAX_DEPTH`] containers, the same limit
    /// a default [`Navigator`](crate::Navigator) enforces.
    pub fn from_json_str(json: &str) -> Result<Value> {
        Value::from_json_str_with_depth(json, DEFAULT_MAX_DEPTH)
    }

    /// Parses JSON text, allowing at most `max_depth` nested containers.
    ///
    /// Deeper input fails with [`TreeError::DepthExceeded`] before the parser
    /// recurses into it, so the limit can be set above serde_json's built-in
    /// recursion limit.
    pub fn from_json_str_with_depth(json: &str, max_depth: usize) -> Result<Value> {
        if nesting_exceeds(json, max_depth) {
            return Err(TreeError::DepthExceeded { limit: max_depth });
        }
        let mut de = serde_json::Deserializer::from_str(json);
        de.disable_recursion_limit();
        let parsed = serde_json::Value::deserialize(&mut de)?;
        de.end()?;
        Ok(Value::from(parsed))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Primitive(_) => ValueKind::Primitive,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Value::Primitive(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_primitive(&self) -> Result<&Primitive> {
        match self {
            Value::Primitive(p) => Ok(p),
            other => Err(TreeError::mismatch("primitive", other.kind())),
        }
    }

    pub fn as_array(&self) -> Result<&[Value]> {
        match self {
            Value::Array(elements) => Ok(elements),
            other => Err(TreeError::mismatch("array", other.kind())),
        }
    }

    pub fn as_object(&self) -> Result<&Members> {
        match self {
            Value::Object(members) => Ok(members),
            other => Err(TreeError::mismatch("object", other.kind())),
        }
    }
}

impl Drop for Value {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_containers(self, &mut pending);
        while let Some(mut value) = pending.pop() {
            detach_containers(&mut value, &mut pending);
        }
    }
}

/// Moves the container children of `value` onto `pending`, leaving `value`
/// with no nested containers to drop recursively.
fn detach_containers(value: &mut Value, pending: &mut Vec<Value>) {
    let is_container = |v: &Value| v.is_array() || v.is_object();
    match value {
        Value::Array(elements) => pending.extend(elements.drain(..).filter(is_container)),
        Value::Object(members) => pending.extend(
            members
                .entries
                .drain(..)
                .map(|(_, v)| v)
                .filter(is_container),
        ),
        Value::Null | Value::Primitive(_) => {}
    }
}

/// True when `json` opens more than `max_depth` containers at once.
/// Brackets inside string literals are ignored; malformed text is left for
/// the parser to report.
fn nesting_exceeds(json: &str, max_depth: usize) -> bool {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for b in json.bytes() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                if depth > max_depth {
                    return true;
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    false
}

impl Primitive {
    fn kind_name(&self) -> &'static str {
        match self {
            Primitive::Bool(_) => "boolean",
            Primitive::Number(_) => "number",
            Primitive::String(_) => "string",
        }
    }

    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Primitive::Bool(b) => Ok(*b),
            other => Err(TreeError::TypeMismatch {
                expected: "boolean",
                found: other.kind_name(),
            }),
        }
    }

    pub fn as_number(&self) -> Result<&Number> {
        match self {
            Primitive::Number(n) => Ok(n),
            other => Err(TreeError::TypeMismatch {
                expected: "number",
                found: other.kind_name(),
            }),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Primitive::String(s) => Ok(s),
            other => Err(TreeError::TypeMismatch {
                expected: "string",
                found: other.kind_name(),
            }),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Bool(b) => write!(f, "{b}"),
            Primitive::Number(n) => write!(f, "{n}"),
            Primitive::String(s) => f.write_str(s),
        }
    }
}

/// Object members in insertion order.
///
/// Stored as `Vec<(String, Value)>` rather than a hash map: objects in real
/// documents are small, and order is part of the contract. Lookups are linear.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Members {
    entries: Vec<(String, Value)>,
}

impl Members {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Sets `key` to `value`. An existing key keeps its position and gets the
    /// new value; the previous value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut slot.1, value));
        }
        self.entries.push((key, value));
        None
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// True for any present key, including one whose value is `Null`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Members {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut members = Members::new();
        for (k, v) in iter {
            members.insert(k, v);
        }
        members
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Primitive(Primitive::Bool(b))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Primitive(Primitive::Number(Number::from(n)))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Primitive(Primitive::Number(Number::from(n)))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Primitive(Primitive::String(s.to_owned()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Primitive(Primitive::String(s))
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Value::Array(elements)
    }
}

impl From<Members> for Value {
    fn from(members: Members) -> Self {
        Value::Object(members)
    }
}

/// Bridge from serde_json's tree. With `preserve_order` enabled the member
/// order is the order of the source document.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::from(b),
            serde_json::Value::Number(n) => Value::Primitive(Primitive::Number(n)),
            serde_json::Value::String(s) => Value::from(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                let mut members = Members::with_capacity(map.len());
                for (k, v) in map {
                    members.insert(k, Value::from(v));
                }
                Value::Object(members)
            }
        }
    }
}
