use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::prop::memory::MemoryHost;
use crate::prop::{ApplyOptions, EnumDef, PropError, Property, Result, Value, set_property_value};

/// Serializable description of a whole object table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSpec {
	/// Enum definitions.
	#[serde(default)]
	pub enums: Vec<EnumDef>,
	/// Class and struct definitions.
	#[serde(default)]
	pub types: Vec<TypeSpec>,
	/// Objects to spawn.
	#[serde(default)]
	pub objects: Vec<ObjectSpec>,
}

/// One class or struct definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSpec {
	/// Type name.
	pub name: Box<str>,
	/// Declared properties in order.
	#[serde(default)]
	pub properties: Vec<Property>,
}

/// One object and its initial values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectSpec {
	/// Canonical object path.
	pub path: Box<str>,
	/// Class name.
	pub class: Box<str>,
	/// Initial values keyed by dotted property path.
	#[serde(default)]
	pub values: BTreeMap<String, Value>,
}

impl MemoryHost {
	/// Build a host from a world description.
	///
	/// All objects are spawned before any value is applied, so references may point forward.
	pub fn from_world(spec: &WorldSpec) -> Result<Self> {
		let mut host = Self::new();
		for def in &spec.enums {
			host.define_enum(def.clone())?;
		}
		for item in &spec.types {
			host.define_type(&item.name, item.properties.clone())?;
		}

		let mut roots = Vec::with_capacity(spec.objects.len());
		for object in &spec.objects {
			roots.push(host.spawn(&object.path, &object.class)?);
		}

		let opt = ApplyOptions::default();
		for (object, root) in spec.objects.iter().zip(&roots) {
			for (path, value) in &object.values {
				set_property_value(&mut host, root, path, value, &opt)?;
			}
		}
		Ok(host)
	}

	/// Parse a JSON world description.
	pub fn from_json_str(input: &str) -> Result<Self> {
		let spec: WorldSpec = serde_json::from_str(input)?;
		Self::from_world(&spec)
	}

	/// Read and parse a JSON world description file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let text = std::fs::read_to_string(path)?;
		log::debug!("loading world from {}", path.display());
		Self::from_json_str(&text).map_err(|err| match err {
			PropError::Json(inner) => PropError::HostRejected {
				operation: "load",
				detail: format!("{}: {inner}", path.display()),
			},
			other => other,
		})
	}
}
