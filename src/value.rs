//! Boundary representation for untyped input.
//!
//! `DynamicValue` is only used at the API edge where a value of arbitrary runtime kind must be accepted (a
//! dynamically typed caller, a deserialized payload). Greeting code narrows it to `&str` immediately.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use greeter_core::lang::kinds::{self, KindId};

/// A value of arbitrary runtime kind.
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Null,
    Array(Vec<DynamicValue>),
    /// Plain keyed structure (no named constructor).
    Object(BTreeMap<String, DynamicValue>),
    Date(DateTime<Utc>),
    /// Instance of a user-defined class, named by its constructor.
    Instance {
        constructor: String,
        fields: BTreeMap<String, DynamicValue>,
    },
}

impl DynamicValue {
    /// Build a plain object from `(key, value)` pairs.
    pub fn object<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<DynamicValue>,
    {
        DynamicValue::Object(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Build an instance of a named class with no fields.
    pub fn instance(constructor: impl Into<String>) -> Self {
        DynamicValue::Instance {
            constructor: constructor.into(),
            fields: BTreeMap::new(),
        }
    }

    /// The registry kind of this value, or `None` for class instances.
    pub fn kind(&self) -> Option<KindId> {
        match self {
            DynamicValue::Text(_) => Some(KindId::String),
            DynamicValue::Number(_) => Some(KindId::Number),
            DynamicValue::Boolean(_) => Some(KindId::Boolean),
            DynamicValue::Null => Some(KindId::Null),
            DynamicValue::Array(_) => Some(KindId::Array),
            DynamicValue::Object(_) => Some(KindId::Object),
            DynamicValue::Date(_) => Some(KindId::Date),
            DynamicValue::Instance { .. } => None,
        }
    }

    /// Display name of this value's runtime kind, as embedded in rejection messages.
    pub fn type_name(&self) -> &str {
        match self {
            DynamicValue::Instance { constructor, .. } => constructor,
            DynamicValue::Text(_) => kinds::as_str(KindId::String),
            DynamicValue::Number(_) => kinds::as_str(KindId::Number),
            DynamicValue::Boolean(_) => kinds::as_str(KindId::Boolean),
            DynamicValue::Null => kinds::as_str(KindId::Null),
            DynamicValue::Array(_) => kinds::as_str(KindId::Array),
            DynamicValue::Object(_) => kinds::as_str(KindId::Object),
            DynamicValue::Date(_) => kinds::as_str(KindId::Date),
        }
    }

    /// Borrow the text if this value is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DynamicValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for DynamicValue {
    fn from(s: &str) -> Self {
        DynamicValue::Text(s.to_owned())
    }
}

impl From<String> for DynamicValue {
    fn from(s: String) -> Self {
        DynamicValue::Text(s)
    }
}

impl From<f64> for DynamicValue {
    fn from(n: f64) -> Self {
        DynamicValue::Number(n)
    }
}

impl From<i32> for DynamicValue {
    fn from(n: i32) -> Self {
        DynamicValue::Number(f64::from(n))
    }
}

impl From<i64> for DynamicValue {
    fn from(n: i64) -> Self {
        DynamicValue::Number(n as f64)
    }
}

impl From<bool> for DynamicValue {
    fn from(b: bool) -> Self {
        DynamicValue::Boolean(b)
    }
}

impl From<DateTime<Utc>> for DynamicValue {
    fn from(d: DateTime<Utc>) -> Self {
        DynamicValue::Date(d)
    }
}

impl<T: Into<DynamicValue>> From<Vec<T>> for DynamicValue {
    fn from(items: Vec<T>) -> Self {
        DynamicValue::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<DynamicValue>> From<Option<T>> for DynamicValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(DynamicValue::Null, Into::into)
    }
}

impl From<serde_json::Value> for DynamicValue {
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value;

        match v {
            Value::Null => DynamicValue::Null,
            Value::Bool(b) => DynamicValue::Boolean(b),
            // Non-finite numbers cannot appear in parsed JSON; NaN is only a fallback.
            Value::Number(n) => DynamicValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => DynamicValue::Text(s),
            Value::Array(items) => DynamicValue::Array(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => DynamicValue::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names_follow_constructor_naming() {
        assert_eq!(DynamicValue::from("x").type_name(), "String");
        assert_eq!(DynamicValue::from(2).type_name(), "Number");
        assert_eq!(DynamicValue::from(true).type_name(), "Boolean");
        assert_eq!(DynamicValue::Null.type_name(), "Null");
        assert_eq!(DynamicValue::from(vec![1, 2]).type_name(), "Array");
        assert_eq!(DynamicValue::object([("name", "World")]).type_name(), "Object");
        assert_eq!(DynamicValue::from(Utc::now()).type_name(), "Date");
    }

    #[test]
    fn instance_is_named_by_its_constructor() {
        let v = DynamicValue::instance("Person");
        assert_eq!(v.kind(), None);
        assert_eq!(v.type_name(), "Person");
    }

    #[test]
    fn json_maps_onto_kinds() {
        let v: DynamicValue = serde_json::json!({ "name": "World", "tags": [1, null, false] }).into();
        assert_eq!(v.kind(), Some(KindId::Object));

        let DynamicValue::Object(map) = v else {
            panic!("expected object");
        };
        assert_eq!(map["name"], DynamicValue::Text("World".into()));
        assert_eq!(
            map["tags"],
            DynamicValue::Array(vec![
                DynamicValue::Number(1.0),
                DynamicValue::Null,
                DynamicValue::Boolean(false)
            ])
        );
    }

    #[test]
    fn none_becomes_null() {
        assert_eq!(DynamicValue::from(None::<i32>), DynamicValue::Null);
        assert_eq!(DynamicValue::from(Some("a")), DynamicValue::Text("a".into()));
    }
}
