//! Lenient field readers for request parameters.
//!
//! Every reader returns its default when the input is not an object, the field is absent, or
//! the field has the wrong JSON type. None of them fail.

use std::collections::BTreeMap;

use crate::prop::Value;

/// String field, or `default`.
pub fn get_string(obj: &Value, field: &str, default: &str) -> String {
	match lookup(obj, field) {
		Some(Value::String(value)) => value.clone(),
		_ => default.to_owned(),
	}
}

/// Number field, or `default`.
pub fn get_number(obj: &Value, field: &str, default: f64) -> f64 {
	lookup(obj, field).and_then(Value::as_f64).unwrap_or(default)
}

/// Boolean field, or `default`.
pub fn get_bool(obj: &Value, field: &str, default: bool) -> bool {
	lookup(obj, field).and_then(Value::as_bool).unwrap_or(default)
}

/// Number field truncated toward zero (saturating at the `i32` bounds), or `default`.
pub fn get_int(obj: &Value, field: &str, default: i32) -> i32 {
	match lookup(obj, field).and_then(Value::as_f64) {
		Some(number) if !number.is_nan() => number.trunc() as i32,
		_ => default,
	}
}

/// Nested object field.
pub fn get_object<'v>(obj: &'v Value, field: &str) -> Option<&'v BTreeMap<String, Value>> {
	lookup(obj, field).and_then(Value::as_object)
}

/// Array field.
pub fn get_array<'v>(obj: &'v Value, field: &str) -> Option<&'v [Value]> {
	lookup(obj, field).and_then(Value::as_array)
}

/// Vector field given as `{x, y, z}` (either case) or `[x, y, z, ...]`.
///
/// Missing object components keep the matching `default` component.
pub fn get_vector3(obj: &Value, field: &str, default: [f64; 3]) -> [f64; 3] {
	read_triple(obj, field, ["x", "y", "z"], default)
}

/// Rotator field given as `{pitch, yaw, roll}` (either case) or `[pitch, yaw, roll, ...]`.
pub fn get_rotator3(obj: &Value, field: &str, default: [f64; 3]) -> [f64; 3] {
	read_triple(obj, field, ["pitch", "yaw", "roll"], default)
}

fn lookup<'v>(obj: &'v Value, field: &str) -> Option<&'v Value> {
	obj.as_object()?.get(field)
}

fn read_triple(obj: &Value, field: &str, names: [&str; 3], default: [f64; 3]) -> [f64; 3] {
	match lookup(obj, field) {
		Some(Value::Object(map)) => {
			let mut out = default;
			for (slot, name) in out.iter_mut().zip(names) {
				let value = map.get(name).or_else(|| map.get(&capitalize(name))).and_then(Value::as_f64);
				if let Some(value) = value {
					*slot = value;
				}
			}
			out
		}
		Some(Value::Array(items)) if items.len() >= 3 => {
			let mut out = default;
			for (slot, item) in out.iter_mut().zip(items) {
				*slot = item.as_f64().unwrap_or(*slot);
			}
			out
		}
		_ => default,
	}
}

fn capitalize(name: &str) -> String {
	let mut chars = name.chars();
	match chars.next() {
		Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
		None => String::new(),
	}
}
