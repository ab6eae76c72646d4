use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::prop::Result;

/// JSON-like value exchanged with callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
	/// JSON `null`; also the export result for unexportable slots.
	#[default]
	Null,
	/// JSON boolean.
	Bool(bool),
	/// JSON number, always carried as `f64`.
	Number(f64),
	/// JSON string.
	String(String),
	/// Ordered JSON array.
	Array(Vec<Value>),
	/// JSON object with unique keys.
	Object(BTreeMap<String, Value>),
}

impl Value {
	/// Parse JSON text into a value tree.
	pub fn from_json_str(input: &str) -> Result<Self> {
		Ok(serde_json::from_str(input)?)
	}

	/// Build an object value from key/value pairs; later duplicates win.
	pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
		Self::Object(entries.into_iter().map(|(key, value)| (key.into(), value)).collect())
	}

	/// Short label for the JSON type of this value.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::Number(_) => "number",
			Self::String(_) => "string",
			Self::Array(_) => "array",
			Self::Object(_) => "object",
		}
	}

	/// Whether this is `Null`.
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Borrow the string payload.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(value) => Some(value),
			_ => None,
		}
	}

	/// Numeric payload.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Number(value) => Some(*value),
			_ => None,
		}
	}

	/// Boolean payload.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(value) => Some(*value),
			_ => None,
		}
	}

	/// Borrow array elements.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Self::Array(items) => Some(items),
			_ => None,
		}
	}

	/// Borrow object entries.
	pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
		match self {
			Self::Object(map) => Some(map),
			_ => None,
		}
	}

	pub(crate) fn describe(&self) -> String {
		match self {
			Self::String(value) => format!("string {value:?}"),
			Self::Number(value) => format!("number {value}"),
			other => other.kind_name().to_owned(),
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Value>) -> Self {
		Self::Array(items)
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(value) => Self::Bool(value),
			serde_json::Value::Number(number) => number.as_f64().map_or(Self::Null, Self::Number),
			serde_json::Value::String(value) => Self::String(value),
			serde_json::Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
			serde_json::Value::Object(map) => Self::Object(map.into_iter().map(|(key, value)| (key, Self::from(value))).collect()),
		}
	}
}

impl From<Value> for serde_json::Value {
	fn from(value: Value) -> Self {
		match value {
			Value::Null => Self::Null,
			Value::Bool(value) => Self::Bool(value),
			Value::Number(value) => serde_json::Number::from_f64(value).map_or(Self::Null, Self::Number),
			Value::String(value) => Self::String(value),
			Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
			Value::Object(map) => Self::Object(map.into_iter().map(|(key, value)| (key, Self::from(value))).collect()),
		}
	}
}
