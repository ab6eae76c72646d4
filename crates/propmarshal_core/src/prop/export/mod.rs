use std::collections::BTreeMap;

use crate::prop::host::target_is_valid;
use crate::prop::{HandleOf, Property, PropertyKind, ReflectHost, Slot, StructShape, StructSlot, Value};

/// Export one property's current contents as a [`Value`].
///
/// Returns `Value::Null` when the container is stale, the property is not declared by the
/// container's scope, or the slot has no export rule. Export never fails.
pub fn export_property<H: ReflectHost>(host: &H, container: &HandleOf<H>, property: &Property) -> Value {
	if !target_is_valid(host, container, property) {
		log::debug!("export skipped: {} is not a live property of {}", property.name, container.scope);
		return Value::Null;
	}

	let Some(slot) = host.read_slot(container, property) else {
		log::debug!("export skipped: host returned no slot for {}", property.name);
		return Value::Null;
	};

	export_slot(host, &property.kind, &slot)
}

/// Export a slot read for a property of `kind`.
pub fn export_slot<H: ReflectHost>(host: &H, kind: &PropertyKind, slot: &Slot) -> Value {
	match (kind, slot) {
		(PropertyKind::Bool, Slot::Bool(value)) => Value::Bool(*value),
		(PropertyKind::String, Slot::Str(value)) | (PropertyKind::Name, Slot::Name(value)) => Value::String(value.clone()),
		(PropertyKind::Float, Slot::Float(value)) => Value::Number(f64::from(*value)),
		(PropertyKind::Double, Slot::Double(value)) => Value::Number(*value),
		(PropertyKind::Int32, Slot::Int32(value)) => Value::Number(f64::from(*value)),
		(PropertyKind::Int64, Slot::Int64(value)) => Value::Number(*value as f64),
		(PropertyKind::Byte { enum_name }, Slot::Byte(value)) => enum_label(host, enum_name.as_deref(), i64::from(*value)),
		(PropertyKind::Enum { enum_name }, Slot::Enum(value)) => enum_label(host, Some(&**enum_name), *value),
		(PropertyKind::ObjectRef, Slot::Object(path))
		| (PropertyKind::SoftObjectRef, Slot::SoftObject(path))
		| (PropertyKind::SoftClassRef, Slot::SoftClass(path)) => path.clone().map_or(Value::Null, Value::String),
		(PropertyKind::Struct(type_name), Slot::Struct(item)) => export_struct(host, type_name, item),
		(PropertyKind::Array(inner), Slot::Array(items)) | (PropertyKind::Set(inner), Slot::Set(items)) => {
			Value::Array(items.iter().map(|item| export_element(host, inner, item)).collect())
		}
		(PropertyKind::Map { key, value }, Slot::Map(entries)) => {
			let mut out = BTreeMap::new();
			for (idx, (entry_key, entry_value)) in entries.iter().enumerate() {
				out.insert(map_key(key, entry_key, idx), export_element(host, value, entry_value));
			}
			Value::Object(out)
		}
		(kind, slot) => {
			log::debug!("no export rule for {} slot {slot:?}", kind.describe());
			Value::Null
		}
	}
}

fn enum_label<H: ReflectHost>(host: &H, enum_name: Option<&str>, value: i64) -> Value {
	let name = enum_name.and_then(|name| host.enum_def(name)).and_then(|def| def.name_by_value(value));
	match name {
		Some(name) => Value::String(name.to_owned()),
		None => Value::Number(value as f64),
	}
}

fn export_struct<H: ReflectHost>(host: &H, type_name: &str, item: &StructSlot) -> Value {
	if let Some(components) = StructShape::of(type_name).components() {
		let numbers: Option<Vec<Value>> = components
			.iter()
			.map(|name| item.field(name).and_then(Slot::as_f64).map(Value::Number))
			.collect();
		if let Some(numbers) = numbers {
			return Value::Array(numbers);
		}
		log::debug!("{type_name} struct is missing shorthand components, exporting as text");
	}

	Value::String(host.export_text(&Slot::Struct(item.clone())))
}

/// Container elements: scalar kinds take the direct rule, everything else the textual fallback.
fn export_element<H: ReflectHost>(host: &H, inner: &PropertyKind, slot: &Slot) -> Value {
	if inner.is_scalar() {
		let value = export_slot(host, inner, slot);
		if !value.is_null() || matches!(slot, Slot::Object(None) | Slot::SoftObject(None) | Slot::SoftClass(None)) {
			return value;
		}
	}
	Value::String(host.export_text(slot))
}

fn map_key(kind: &PropertyKind, slot: &Slot, idx: usize) -> String {
	match (kind, slot) {
		(PropertyKind::String, Slot::Str(value)) | (PropertyKind::Name, Slot::Name(value)) => value.clone(),
		(PropertyKind::Int32, Slot::Int32(value)) => value.to_string(),
		_ => format!("key_{idx}"),
	}
}
