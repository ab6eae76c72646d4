use std::collections::BTreeMap;

use crate::prop::host::target_is_valid;
use crate::prop::{HandleOf, Property, PropError, PropertyKind, ReflectHost, Result, Slot, StructShape, StructSlot, Value};

/// Handling of JSON keys that name no field during struct import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownFieldPolicy {
	/// Skip the key.
	Ignore,
	/// Fail with [`PropError::UnresolvedField`].
	Error,
}

/// Runtime limits and behavior switches for applying values.
#[derive(Debug, Clone)]
pub struct ApplyOptions {
	/// Maximum element count accepted for one array, set, or map write.
	pub max_container_elems: usize,
	/// Maximum nested struct depth during JSON struct import.
	pub max_struct_depth: u32,
	/// What to do with struct import keys that match no field.
	pub unknown_struct_fields: UnknownFieldPolicy,
}

impl Default for ApplyOptions {
	fn default() -> Self {
		Self {
			max_container_elems: 4096,
			max_struct_depth: 16,
			unknown_struct_fields: UnknownFieldPolicy::Ignore,
		}
	}
}

impl ApplyOptions {
	/// Preset that rejects unknown struct import keys.
	pub fn strict() -> Self {
		Self {
			unknown_struct_fields: UnknownFieldPolicy::Error,
			..Self::default()
		}
	}
}

/// Apply `value` to a property slot using [`ApplyOptions::default`].
pub fn apply_property<H: ReflectHost>(host: &mut H, container: &HandleOf<H>, property: &Property, value: &Value) -> Result<()> {
	apply_property_with(host, container, property, value, &ApplyOptions::default())
}

/// Apply `value` to a property slot.
///
/// The new slot contents are fully converted before the host is asked to write, so on error
/// the slot is left untouched. Containers are rebuilt from empty rather than merged.
pub fn apply_property_with<H: ReflectHost>(host: &mut H, container: &HandleOf<H>, property: &Property, value: &Value, opt: &ApplyOptions) -> Result<()> {
	if !host.is_live(container) {
		return Err(PropError::InvalidContainer {
			detail: format!("{:?} ({})", container.address, container.scope),
		});
	}
	if !target_is_valid(host, container, property) {
		return Err(PropError::InvalidProperty {
			property: property.name.to_string(),
			scope: container.scope.to_string(),
		});
	}

	let slot = convert_value(host, container, property, value, opt, 0)?;
	host.write_slot(container, property, slot)?;
	log::debug!("applied {} to {}.{}", value.kind_name(), container.scope, property.name);
	Ok(())
}

fn convert_value<H: ReflectHost>(host: &H, container: &HandleOf<H>, property: &Property, value: &Value, opt: &ApplyOptions, depth: u32) -> Result<Slot> {
	let label = property.name.as_ref();
	match &property.kind {
		PropertyKind::Struct(type_name) => convert_struct(host, container, property, type_name, value, opt, depth),
		PropertyKind::Array(inner) => {
			let items = expect_array(label, value, opt)?;
			Ok(Slot::Array(convert_elements(host, label, inner, items)?))
		}
		PropertyKind::Set(inner) => {
			let items = expect_array(label, value, opt)?;
			let mut unique: Vec<Slot> = Vec::with_capacity(items.len());
			for slot in convert_elements(host, label, inner, items)? {
				if !unique.contains(&slot) {
					unique.push(slot);
				}
			}
			Ok(Slot::Set(unique))
		}
		PropertyKind::Map { key, value: value_kind } => {
			let Value::Object(entries) = value else {
				return Err(mismatch(label, "object", value));
			};
			check_len(label, entries.len(), opt)?;
			convert_map(host, label, key, value_kind, entries)
		}
		kind => convert_scalar(host, label, kind, value),
	}
}

fn convert_scalar<H: ReflectHost>(host: &H, label: &str, kind: &PropertyKind, value: &Value) -> Result<Slot> {
	match kind {
		PropertyKind::Bool => convert_bool(label, value),
		PropertyKind::String => match value {
			Value::String(text) => Ok(Slot::Str(text.clone())),
			other => Err(mismatch(label, "string", other)),
		},
		PropertyKind::Name => match value {
			Value::String(text) => Ok(Slot::Name(text.clone())),
			other => Err(mismatch(label, "string", other)),
		},
		PropertyKind::Float => Ok(Slot::Float(number_of(label, value)? as f32)),
		PropertyKind::Double => Ok(Slot::Double(number_of(label, value)?)),
		PropertyKind::Int32 => {
			let number = integer_of(label, value)?;
			i32::try_from(number).map(Slot::Int32).map_err(|_| out_of_range(label, "int32", number))
		}
		PropertyKind::Int64 => Ok(Slot::Int64(integer_of(label, value)?)),
		PropertyKind::Byte { enum_name: None } => {
			let number = integer_of(label, value)?;
			u8::try_from(number).map(Slot::Byte).map_err(|_| out_of_range(label, "byte", number))
		}
		PropertyKind::Byte { enum_name: Some(enum_name) } => {
			let number = enum_value_of(host, label, enum_name, value)?;
			u8::try_from(number).map(Slot::Byte).map_err(|_| PropError::InvalidEnumValue {
				enum_name: enum_name.to_string(),
				input: number.to_string(),
			})
		}
		PropertyKind::Enum { enum_name } => Ok(Slot::Enum(enum_value_of(host, label, enum_name, value)?)),
		PropertyKind::ObjectRef => match value {
			Value::String(identifier) if identifier.is_empty() => Ok(Slot::Object(None)),
			Value::String(identifier) => host
				.resolve_object(identifier)
				.map(|path| Slot::Object(Some(path)))
				.ok_or_else(|| PropError::UnresolvedReference {
					identifier: identifier.clone(),
				}),
			other => Err(mismatch(label, "object path string", other)),
		},
		PropertyKind::SoftObjectRef => soft_path(label, value).map(Slot::SoftObject),
		PropertyKind::SoftClassRef => soft_path(label, value).map(Slot::SoftClass),
		other => Err(PropError::UnsupportedKind {
			property: label.to_owned(),
			kind: other.describe(),
		}),
	}
}

fn convert_bool(label: &str, value: &Value) -> Result<Slot> {
	match value {
		Value::Bool(flag) => Ok(Slot::Bool(*flag)),
		Value::Number(number) => Ok(Slot::Bool(*number != 0.0)),
		Value::String(text) => Ok(Slot::Bool(text.eq_ignore_ascii_case("true"))),
		other => Err(mismatch(label, "bool, number, or string", other)),
	}
}

fn soft_path(label: &str, value: &Value) -> Result<Option<String>> {
	match value {
		Value::Null => Ok(None),
		Value::String(path) if path.is_empty() => Ok(None),
		Value::String(path) => Ok(Some(path.clone())),
		other => Err(mismatch(label, "path string or null", other)),
	}
}

fn number_of(label: &str, value: &Value) -> Result<f64> {
	let number = match value {
		Value::Number(number) => *number,
		Value::String(text) => text.trim().parse::<f64>().map_err(|_| mismatch(label, "number or numeric string", value))?,
		other => return Err(mismatch(label, "number or numeric string", other)),
	};
	if !number.is_finite() {
		return Err(mismatch(label, "finite number", value));
	}
	Ok(number)
}

/// Integer conversion truncating toward zero.
fn integer_of(label: &str, value: &Value) -> Result<i64> {
	if let Some(exact) = value.as_str().and_then(|text| text.trim().parse::<i64>().ok()) {
		return Ok(exact);
	}

	let number = number_of(label, value)?;
	let truncated = number.trunc();
	if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
		return Err(mismatch(label, "number within int64 range", value));
	}
	Ok(truncated as i64)
}

fn enum_value_of<H: ReflectHost>(host: &H, label: &str, enum_name: &str, value: &Value) -> Result<i64> {
	let def = host.enum_def(enum_name).ok_or_else(|| PropError::UnsupportedKind {
		property: label.to_owned(),
		kind: format!("enum<{enum_name}> without definition"),
	})?;

	match value {
		Value::String(input) => def.value_by_name(input).ok_or_else(|| PropError::InvalidEnumValue {
			enum_name: enum_name.to_owned(),
			input: input.clone(),
		}),
		Value::Number(number) => {
			let candidate = number.trunc() as i64;
			if number.is_finite() && def.contains_value(candidate) {
				Ok(candidate)
			} else {
				Err(PropError::InvalidEnumValue {
					enum_name: enum_name.to_owned(),
					input: number.to_string(),
				})
			}
		}
		other => Err(mismatch(label, "enum name or number", other)),
	}
}

fn convert_struct<H: ReflectHost>(
	host: &H,
	container: &HandleOf<H>,
	property: &Property,
	type_name: &str,
	value: &Value,
	opt: &ApplyOptions,
	depth: u32,
) -> Result<Slot> {
	let label = property.name.as_ref();
	match value {
		Value::Array(items) => {
			let Some(components) = StructShape::of(type_name).components() else {
				return Err(mismatch(label, "JSON object string", value));
			};
			if items.len() < 3 {
				return Err(mismatch(label, "array of at least 3 numbers", value));
			}

			let mut item = current_struct(host, container, property, type_name);
			for (name, component) in components.iter().zip(items) {
				let Value::Number(number) = component else {
					return Err(mismatch(label, "array of at least 3 numbers", component));
				};
				item.set_number(name, *number);
			}
			Ok(Slot::Struct(item))
		}
		Value::String(text) => {
			let parsed = match Value::from_json_str(text) {
				Ok(Value::Object(map)) => map,
				_ => {
					return Err(PropError::TypeMismatch {
						property: label.to_owned(),
						expected: "JSON object string (textual struct import is unsupported)",
						got: value.describe(),
					});
				}
			};
			import_struct(host, container, property, type_name, &parsed, opt, depth)
		}
		Value::Object(map) if depth > 0 => import_struct(host, container, property, type_name, map, opt, depth),
		other => Err(mismatch(label, "array shorthand or JSON object string", other)),
	}
}

fn current_struct<H: ReflectHost>(host: &H, container: &HandleOf<H>, property: &Property, type_name: &str) -> StructSlot {
	match host.read_slot(container, property) {
		Some(Slot::Struct(item)) => item,
		_ => StructSlot::new(type_name),
	}
}

/// Field-by-field struct conversion; nothing is written until the caller stores the result.
fn import_struct<H: ReflectHost>(
	host: &H,
	container: &HandleOf<H>,
	property: &Property,
	type_name: &str,
	map: &BTreeMap<String, Value>,
	opt: &ApplyOptions,
	depth: u32,
) -> Result<Slot> {
	if depth >= opt.max_struct_depth {
		return Err(PropError::DepthExceeded {
			max_depth: opt.max_struct_depth,
		});
	}

	let inner = host.struct_container(container, property).ok_or_else(|| PropError::InvalidContainer {
		detail: format!("struct {} of {}", property.name, container.scope),
	})?;
	let mut item = current_struct(host, container, property, type_name);
	let mut claimed: Vec<(Box<str>, &str)> = Vec::with_capacity(map.len());

	for (key, field_value) in map {
		let Some(field) = find_field(host, &inner.scope, key) else {
			match opt.unknown_struct_fields {
				UnknownFieldPolicy::Ignore => {
					log::debug!("struct import ignoring unknown field {key} on {type_name}");
					continue;
				}
				UnknownFieldPolicy::Error => {
					return Err(PropError::UnresolvedField {
						field: key.clone(),
						struct_name: type_name.to_owned(),
					});
				}
			}
		};

		if let Some((_, first)) = claimed.iter().find(|(name, _)| *name == field.name) {
			return Err(PropError::TypeMismatch {
				property: format!("{type_name}.{}", field.name),
				expected: "one key per field",
				got: format!("keys {first:?} and {key:?}"),
			});
		}

		let slot = convert_value(host, &inner, &field, field_value, opt, depth + 1)?;
		item.set_field(&field.name, slot);
		claimed.push((field.name.clone(), key.as_str()));
	}

	Ok(Slot::Struct(item))
}

fn find_field<H: ReflectHost>(host: &H, scope: &str, key: &str) -> Option<Property> {
	if let Some(field) = host.find_property(scope, key) {
		return Some(field.clone());
	}
	host.properties(scope)?
		.iter()
		.find(|candidate| candidate.name.eq_ignore_ascii_case(key))
		.cloned()
}

fn expect_array<'v>(label: &str, value: &'v Value, opt: &ApplyOptions) -> Result<&'v [Value]> {
	let Value::Array(items) = value else {
		return Err(mismatch(label, "array", value));
	};
	check_len(label, items.len(), opt)?;
	Ok(items)
}

fn check_len(label: &str, count: usize, opt: &ApplyOptions) -> Result<()> {
	if count > opt.max_container_elems {
		return Err(PropError::TooManyElements {
			property: label.to_owned(),
			count,
			max: opt.max_container_elems,
		});
	}
	Ok(())
}

fn convert_elements<H: ReflectHost>(host: &H, label: &str, inner: &PropertyKind, items: &[Value]) -> Result<Vec<Slot>> {
	items
		.iter()
		.enumerate()
		.map(|(idx, item)| convert_element(host, &format!("{label}[{idx}]"), inner, item))
		.collect()
}

/// Element rule for containers: text, bool, and numeric kinds only.
fn convert_element<H: ReflectHost>(host: &H, label: &str, inner: &PropertyKind, value: &Value) -> Result<Slot> {
	match (inner, value) {
		(PropertyKind::String, Value::Number(number)) => Ok(Slot::Str(number.to_string())),
		(PropertyKind::Name, Value::Number(number)) => Ok(Slot::Name(number.to_string())),
		(
			PropertyKind::String
			| PropertyKind::Name
			| PropertyKind::Bool
			| PropertyKind::Float
			| PropertyKind::Double
			| PropertyKind::Int32
			| PropertyKind::Int64
			| PropertyKind::Byte { .. },
			_,
		) => convert_scalar(host, label, inner, value),
		(other, _) => Err(PropError::UnsupportedKind {
			property: label.to_owned(),
			kind: format!("element kind {}", other.describe()),
		}),
	}
}

fn convert_map<H: ReflectHost>(host: &H, label: &str, key_kind: &PropertyKind, value_kind: &PropertyKind, entries: &BTreeMap<String, Value>) -> Result<Slot> {
	let mut out = Vec::with_capacity(entries.len());
	let mut sources: Vec<&str> = Vec::with_capacity(entries.len());
	for (key, entry) in entries {
		let entry_label = format!("{label}[{key:?}]");
		let key_slot = match key_kind {
			PropertyKind::String => Slot::Str(key.clone()),
			PropertyKind::Name => Slot::Name(key.clone()),
			PropertyKind::Int32 => key
				.trim()
				.parse::<i32>()
				.map(Slot::Int32)
				.map_err(|_| mismatch(&entry_label, "int32 key", &Value::String(key.clone())))?,
			other => {
				return Err(PropError::UnsupportedKind {
					property: label.to_owned(),
					kind: format!("map key kind {}", other.describe()),
				});
			}
		};
		// Int32 keys like "1" and "01" convert to the same slot.
		if let Some(at) = out.iter().position(|(existing, _)| *existing == key_slot) {
			return Err(PropError::TypeMismatch {
				property: entry_label,
				expected: "unique map key",
				got: format!("key {key:?} colliding with {:?}", sources[at]),
			});
		}
		out.push((key_slot, convert_element(host, &entry_label, value_kind, entry)?));
		sources.push(key.as_str());
	}
	Ok(Slot::Map(out))
}

fn mismatch(label: &str, expected: &'static str, got: &Value) -> PropError {
	PropError::TypeMismatch {
		property: label.to_owned(),
		expected,
		got: got.describe(),
	}
}

fn out_of_range(label: &str, kind: &'static str, number: i64) -> PropError {
	PropError::TypeMismatch {
		property: label.to_owned(),
		expected: kind,
		got: format!("out-of-range number {number}"),
	}
}

#[cfg(test)]
mod tests;
