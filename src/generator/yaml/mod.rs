//! Ordered YAML value tree and the hand-written emitter used for Clash output.
//!
//! Clash clients expect one proxy per line in `{ key: value }` form, which a
//! generic serializer does not produce, so documents are assembled line by line
//! from [`YamlValue`]s rendered by [`emitter`].

pub mod emitter;

use linked_hash_map::LinkedHashMap;

pub use emitter::{flow_key, flow_obj, flow_val, to_block};

/// Mapping that keeps insertion order.
pub type Mapping = LinkedHashMap<String, YamlValue>;

#[derive(Debug, Clone, PartialEq)]
pub enum YamlValue {
    /// Omitted when it is the value of a mapping key.
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
    Seq(Vec<YamlValue>),
    Map(Mapping),
}

impl YamlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, YamlValue::Null)
    }

    pub fn is_scalar(&self) -> bool {
        !matches!(self, YamlValue::Seq(_) | YamlValue::Map(_))
    }
}

impl From<&str> for YamlValue {
    fn from(value: &str) -> Self {
        YamlValue::Str(value.to_string())
    }
}

impl From<String> for YamlValue {
    fn from(value: String) -> Self {
        YamlValue::Str(value)
    }
}

impl From<&String> for YamlValue {
    fn from(value: &String) -> Self {
        YamlValue::Str(value.clone())
    }
}

impl From<bool> for YamlValue {
    fn from(value: bool) -> Self {
        YamlValue::Bool(value)
    }
}

impl From<u16> for YamlValue {
    fn from(value: u16) -> Self {
        YamlValue::Int(value.into())
    }
}

impl From<u32> for YamlValue {
    fn from(value: u32) -> Self {
        YamlValue::Int(value.into())
    }
}

impl From<i64> for YamlValue {
    fn from(value: i64) -> Self {
        YamlValue::Int(value)
    }
}

impl From<Mapping> for YamlValue {
    fn from(value: Mapping) -> Self {
        YamlValue::Map(value)
    }
}

impl<T: Into<YamlValue>> From<Vec<T>> for YamlValue {
    fn from(values: Vec<T>) -> Self {
        YamlValue::Seq(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<YamlValue>> From<Option<T>> for YamlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(YamlValue::Null, Into::into)
    }
}
