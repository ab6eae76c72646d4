use std::collections::BTreeMap;

use crate::prop::{ApplyOptions, HandleOf, PropError, ReflectHost, Result, Value, apply_property_with, export_property, resolve_path};

/// Resolve `path` from `root` and export the terminal property.
pub fn get_property_value<H: ReflectHost>(host: &H, root: &HandleOf<H>, path: &str) -> Result<Value> {
	let resolved = resolve_path(host, root, path)?;
	Ok(export_property(host, &resolved.container, &resolved.property))
}

/// Resolve `path` from `root`, apply `value`, and return the re-exported result.
pub fn set_property_value<H: ReflectHost>(host: &mut H, root: &HandleOf<H>, path: &str, value: &Value, opt: &ApplyOptions) -> Result<Value> {
	let resolved = resolve_path(host, root, path)?;
	apply_property_with(host, &resolved.container, &resolved.property, value, opt)?;
	Ok(export_property(host, &resolved.container, &resolved.property))
}

/// Export every declared property of `container` into one object value.
pub fn export_container<H: ReflectHost>(host: &H, container: &HandleOf<H>) -> Result<Value> {
	if !host.is_live(container) {
		return Err(PropError::InvalidContainer {
			detail: format!("{:?} ({})", container.address, container.scope),
		});
	}
	let properties = host.properties(&container.scope).ok_or_else(|| PropError::InvalidContainer {
		detail: format!("unknown scope {}", container.scope),
	})?;

	let out: BTreeMap<String, Value> = properties
		.iter()
		.map(|property| (property.name.to_string(), export_property(host, container, property)))
		.collect();
	Ok(Value::Object(out))
}
