use std::collections::{BTreeMap, HashMap};

use crate::prop::{ContainerHandle, EnumDef, HandleOf, PropError, Property, PropertyKind, ReflectHost, Result, Slot, SlotField, StructSlot};

mod world;

pub use world::{ObjectSpec, TypeSpec, WorldSpec};

const MAX_DEFAULT_DEPTH: u32 = 32;

/// Location of a container inside a [`MemoryHost`]: an object plus a chain of struct fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemAddress {
	/// Canonical object path.
	pub object: Box<str>,
	/// Struct field names walked from the object root.
	pub chain: Vec<Box<str>>,
}

/// Owned object table implementing [`ReflectHost`] without an engine.
#[derive(Debug, Clone)]
pub struct MemoryHost {
	types: HashMap<Box<str>, Vec<Property>>,
	enums: HashMap<Box<str>, EnumDef>,
	objects: BTreeMap<Box<str>, StructSlot>,
}

impl Default for MemoryHost {
	fn default() -> Self {
		Self::new()
	}
}

impl MemoryHost {
	/// Create a host with the built-in `Vector` and `Rotator` structs.
	pub fn new() -> Self {
		let mut types = HashMap::new();
		types.insert(
			Box::from("Vector"),
			["X", "Y", "Z"].iter().map(|name| Property::new(name, PropertyKind::Double)).collect(),
		);
		types.insert(
			Box::from("Rotator"),
			["Pitch", "Yaw", "Roll"].iter().map(|name| Property::new(name, PropertyKind::Double)).collect(),
		);
		Self {
			types,
			enums: HashMap::new(),
			objects: BTreeMap::new(),
		}
	}

	/// Register a class or struct type.
	pub fn define_type(&mut self, name: &str, properties: Vec<Property>) -> Result<()> {
		if self.types.contains_key(name) {
			return Err(rejected("define_type", format!("type {name} already defined")));
		}
		for (idx, property) in properties.iter().enumerate() {
			if properties[..idx].iter().any(|earlier| earlier.name == property.name) {
				return Err(rejected("define_type", format!("duplicate property {} on {name}", property.name)));
			}
		}
		self.types.insert(name.into(), properties);
		Ok(())
	}

	/// Register an enum.
	pub fn define_enum(&mut self, def: EnumDef) -> Result<()> {
		if self.enums.contains_key(&def.name) {
			return Err(rejected("define_enum", format!("enum {} already defined", def.name)));
		}
		self.enums.insert(def.name.clone(), def);
		Ok(())
	}

	/// Create a default-initialised object of `class` at `path`.
	pub fn spawn(&mut self, path: &str, class: &str) -> Result<HandleOf<Self>> {
		if self.objects.contains_key(path) {
			return Err(rejected("spawn", format!("object {path} already exists")));
		}
		let storage = self.default_struct(class, 0)?;
		self.objects.insert(path.into(), storage);
		log::debug!("spawned {path} ({class})");
		Ok(ContainerHandle::new(root_address(path), class))
	}

	/// Remove an object; handles to it become stale.
	pub fn destroy(&mut self, path: &str) -> bool {
		self.objects.remove(path).is_some()
	}

	/// Root handle for the object at `path`.
	pub fn object(&self, path: &str) -> Option<HandleOf<Self>> {
		self.object_container(path)
	}

	/// Canonical paths of all live objects, sorted.
	pub fn object_paths(&self) -> impl Iterator<Item = &str> {
		self.objects.keys().map(AsRef::as_ref)
	}

	fn default_struct(&self, type_name: &str, depth: u32) -> Result<StructSlot> {
		if depth >= MAX_DEFAULT_DEPTH {
			return Err(rejected("spawn", format!("struct {type_name} nests too deeply")));
		}
		let properties = self
			.types
			.get(type_name)
			.ok_or_else(|| rejected("spawn", format!("unknown type {type_name}")))?;

		let mut fields = Vec::with_capacity(properties.len());
		for property in properties {
			fields.push(SlotField {
				name: property.name.clone(),
				slot: self.default_slot(&property.kind, depth)?,
			});
		}
		Ok(StructSlot {
			type_name: type_name.into(),
			fields,
		})
	}

	fn default_slot(&self, kind: &PropertyKind, depth: u32) -> Result<Slot> {
		Ok(match kind {
			PropertyKind::Bool => Slot::Bool(false),
			PropertyKind::String => Slot::Str(String::new()),
			PropertyKind::Name => Slot::Name(String::new()),
			PropertyKind::Float => Slot::Float(0.0),
			PropertyKind::Double => Slot::Double(0.0),
			PropertyKind::Int32 => Slot::Int32(0),
			PropertyKind::Int64 => Slot::Int64(0),
			PropertyKind::Byte { enum_name } => {
				let first = enum_name.as_deref().and_then(|name| self.first_enum_value(name));
				Slot::Byte(first.and_then(|value| u8::try_from(value).ok()).unwrap_or(0))
			}
			PropertyKind::Enum { enum_name } => Slot::Enum(self.first_enum_value(enum_name).unwrap_or(0)),
			PropertyKind::ObjectRef => Slot::Object(None),
			PropertyKind::SoftObjectRef => Slot::SoftObject(None),
			PropertyKind::SoftClassRef => Slot::SoftClass(None),
			PropertyKind::Struct(type_name) => Slot::Struct(self.default_struct(type_name, depth + 1)?),
			PropertyKind::Array(_) => Slot::Array(Vec::new()),
			PropertyKind::Map { .. } => Slot::Map(Vec::new()),
			PropertyKind::Set(_) => Slot::Set(Vec::new()),
		})
	}

	fn first_enum_value(&self, name: &str) -> Option<i64> {
		self.enums.get(name)?.members.first().map(|member| member.value)
	}

	fn storage(&self, address: &MemAddress) -> Option<&StructSlot> {
		let mut current = self.objects.get(&address.object)?;
		for name in &address.chain {
			match current.field(name)? {
				Slot::Struct(inner) => current = inner,
				_ => return None,
			}
		}
		Some(current)
	}

	fn storage_mut(&mut self, address: &MemAddress) -> Option<&mut StructSlot> {
		let mut current = self.objects.get_mut(&address.object)?;
		for name in &address.chain {
			match current.field_mut(name)? {
				Slot::Struct(inner) => current = inner,
				_ => return None,
			}
		}
		Some(current)
	}
}

impl ReflectHost for MemoryHost {
	type Address = MemAddress;

	fn properties(&self, scope: &str) -> Option<&[Property]> {
		self.types.get(scope).map(Vec::as_slice)
	}

	fn is_live(&self, container: &HandleOf<Self>) -> bool {
		self.storage(&container.address).is_some_and(|item| item.type_name == container.scope)
	}

	fn read_slot(&self, container: &HandleOf<Self>, property: &Property) -> Option<Slot> {
		self.storage(&container.address)?.field(&property.name).cloned()
	}

	fn write_slot(&mut self, container: &HandleOf<Self>, property: &Property, slot: Slot) -> Result<()> {
		if !slot.fits(&property.kind) {
			return Err(rejected("write_slot", format!("slot does not fit {} for {}", property.kind.describe(), property.name)));
		}
		let storage = self.storage_mut(&container.address).ok_or_else(|| PropError::InvalidContainer {
			detail: format!("{:?} ({})", container.address, container.scope),
		})?;
		let existing = storage.field_mut(&property.name).ok_or_else(|| PropError::InvalidProperty {
			property: property.name.to_string(),
			scope: container.scope.to_string(),
		})?;
		*existing = slot;
		Ok(())
	}

	fn struct_container(&self, container: &HandleOf<Self>, property: &Property) -> Option<HandleOf<Self>> {
		let PropertyKind::Struct(type_name) = &property.kind else {
			return None;
		};
		match self.storage(&container.address)?.field(&property.name)? {
			Slot::Struct(item) if item.type_name == *type_name => {
				let mut address = container.address.clone();
				address.chain.push(property.name.clone());
				Some(ContainerHandle::new(address, type_name))
			}
			_ => None,
		}
	}

	fn object_container(&self, path: &str) -> Option<HandleOf<Self>> {
		let storage = self.objects.get(path)?;
		Some(ContainerHandle::new(root_address(path), &storage.type_name))
	}

	fn resolve_object(&self, identifier: &str) -> Option<String> {
		if self.objects.contains_key(identifier) {
			return Some(identifier.to_owned());
		}
		if identifier.contains('.') {
			return None;
		}

		let asset = identifier.rsplit('/').next().filter(|asset| !asset.is_empty())?;
		let package_path = format!("{identifier}.{asset}");
		self.objects.contains_key(package_path.as_str()).then_some(package_path)
	}

	fn enum_def(&self, name: &str) -> Option<&EnumDef> {
		self.enums.get(name)
	}
}

fn root_address(path: &str) -> MemAddress {
	MemAddress {
		object: path.into(),
		chain: Vec::new(),
	}
}

fn rejected(operation: &'static str, detail: String) -> PropError {
	PropError::HostRejected { operation, detail }
}
