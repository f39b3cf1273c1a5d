//! Plugin parameters: a named value of one of three collection shapes.
//!
//! On the wire a parameter is `{name, string?, array?, map?}`. Internally the
//! shape is fixed once, when the parameter is decoded or created.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterShape {
    String,
    Array,
    Map,
}

impl ParameterShape {
    /// Shape declared by a plugin announcement's `collectionType`.
    ///
    /// `None` for values the console does not know how to edit.
    pub fn from_collection_type(collection_type: &str) -> Option<Self> {
        match collection_type {
            "" | "string" => Some(ParameterShape::String),
            "array" => Some(ParameterShape::Array),
            "map" => Some(ParameterShape::Map),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterShape::String => "string",
            ParameterShape::Array => "array",
            ParameterShape::Map => "map",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterValue {
    String(String),
    Array(Vec<String>),
    Map(BTreeMap<String, String>),
}

impl ParameterValue {
    pub fn empty(shape: ParameterShape) -> Self {
        match shape {
            ParameterShape::String => ParameterValue::String(String::new()),
            ParameterShape::Array => ParameterValue::Array(Vec::new()),
            ParameterShape::Map => ParameterValue::Map(BTreeMap::new()),
        }
    }

    pub fn shape(&self) -> ParameterShape {
        match self {
            ParameterValue::String(_) => ParameterShape::String,
            ParameterValue::Array(_) => ParameterShape::Array,
            ParameterValue::Map(_) => ParameterShape::Map,
        }
    }

    /// The value itself when it already has `shape`, otherwise the empty
    /// value of that shape.
    pub fn coerce(&self, shape: ParameterShape) -> Self {
        if self.shape() == shape {
            self.clone()
        } else {
            Self::empty(shape)
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ParameterValue::String(s) => s.is_empty(),
            ParameterValue::Array(items) => items.is_empty(),
            ParameterValue::Map(entries) => entries.is_empty(),
        }
    }

    /// One-line rendering for read-only views
    pub fn display(&self) -> String {
        match self {
            ParameterValue::String(s) => s.clone(),
            ParameterValue::Array(items) => items.join(", "),
            ParameterValue::Map(entries) => entries
                .iter()
                .map(|(k, v)| format!("{}='{}'", k, v))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PluginParameterWire", into = "PluginParameterWire")]
pub struct PluginParameter {
    pub name: String,
    pub value: ParameterValue,
}

impl PluginParameter {
    pub fn new(name: impl Into<String>, value: ParameterValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, ParameterValue::String(value.into()))
    }

    pub fn array<I, S>(name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            ParameterValue::Array(items.into_iter().map(Into::into).collect()),
        )
    }

    pub fn map<I, K, V>(name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(
            name,
            ParameterValue::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        )
    }
}

#[derive(Serialize, Deserialize)]
struct PluginParameterWire {
    #[serde(default)]
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    array: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    map: Option<BTreeMap<String, String>>,
}

impl From<PluginParameterWire> for PluginParameter {
    fn from(wire: PluginParameterWire) -> Self {
        let value = match (wire.array, wire.map, wire.string) {
            (Some(items), _, _) => ParameterValue::Array(items),
            (None, Some(entries), _) => ParameterValue::Map(entries),
            (None, None, s) => ParameterValue::String(s.unwrap_or_default()),
        };
        Self {
            name: wire.name,
            value,
        }
    }
}

impl From<PluginParameter> for PluginParameterWire {
    fn from(param: PluginParameter) -> Self {
        let mut wire = PluginParameterWire {
            name: param.name,
            string: None,
            array: None,
            map: None,
        };
        match param.value {
            ParameterValue::String(s) => wire.string = Some(s),
            ParameterValue::Array(items) => wire.array = Some(items),
            ParameterValue::Map(entries) => wire.map = Some(entries),
        }
        wire
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_fixed_on_decode() {
        let params: Vec<PluginParameter> = serde_json::from_str(
            r#"[
                {"name": "a", "array": ["x", "y"]},
                {"name": "m", "map": {"k": "v"}},
                {"name": "s", "string": "value"},
                {"name": "bare"}
            ]"#,
        )
        .unwrap();

        assert_eq!(params[0], PluginParameter::array("a", ["x", "y"]));
        assert_eq!(params[1], PluginParameter::map("m", [("k", "v")]));
        assert_eq!(params[2], PluginParameter::string("s", "value"));
        assert_eq!(params[3], PluginParameter::string("bare", ""));
    }

    #[test]
    fn test_array_wins_over_other_fields() {
        let param: PluginParameter =
            serde_json::from_str(r#"{"name": "p", "string": "s", "array": []}"#).unwrap();
        assert_eq!(param.value.shape(), ParameterShape::Array);
    }

    #[test]
    fn test_encode_writes_single_shape_field() {
        let encoded = serde_json::to_value(PluginParameter::array("p", ["1"])).unwrap();
        assert_eq!(encoded, serde_json::json!({"name": "p", "array": ["1"]}));
    }

    #[test]
    fn test_collection_type_mapping() {
        assert_eq!(
            ParameterShape::from_collection_type(""),
            Some(ParameterShape::String)
        );
        assert_eq!(
            ParameterShape::from_collection_type("map"),
            Some(ParameterShape::Map)
        );
        assert_eq!(ParameterShape::from_collection_type("object"), None);
    }

    #[test]
    fn test_coerce_mismatched_shape_is_empty() {
        let value = ParameterValue::String("x".into());
        assert_eq!(
            value.coerce(ParameterShape::Array),
            ParameterValue::Array(vec![])
        );
        assert_eq!(value.coerce(ParameterShape::String), value);
    }
}
