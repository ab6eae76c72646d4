use crate::prop::PropertyKind;

/// Host-neutral contents of one reflected slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
	/// Boolean.
	Bool(bool),
	/// Owned string.
	Str(String),
	/// Name, stored as text.
	Name(String),
	/// 32-bit float.
	Float(f32),
	/// 64-bit float.
	Double(f64),
	/// Signed 32-bit integer.
	Int32(i32),
	/// Signed 64-bit integer.
	Int64(i64),
	/// Unsigned byte, plain or enum-valued.
	Byte(u8),
	/// Wide enum underlying value.
	Enum(i64),
	/// Direct object reference by canonical path; `None` is null.
	Object(Option<String>),
	/// Soft object reference by path; `None` is null.
	SoftObject(Option<String>),
	/// Soft class reference by path; `None` is null.
	SoftClass(Option<String>),
	/// Inline struct value.
	Struct(StructSlot),
	/// Ordered list.
	Array(Vec<Slot>),
	/// Ordered key/value pairs.
	Map(Vec<(Slot, Slot)>),
	/// Unique elements.
	Set(Vec<Slot>),
}

/// Struct payload: type name plus fields in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct StructSlot {
	/// Struct type name.
	pub type_name: Box<str>,
	/// Field values.
	pub fields: Vec<SlotField>,
}

/// One named struct field value.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotField {
	/// Declared field name.
	pub name: Box<str>,
	/// Field contents.
	pub slot: Slot,
}

impl StructSlot {
	/// Create an empty struct payload.
	pub fn new(type_name: &str) -> Self {
		Self {
			type_name: type_name.into(),
			fields: Vec::new(),
		}
	}

	/// Look up a field by exact name.
	pub fn field(&self, name: &str) -> Option<&Slot> {
		self.fields.iter().find(|field| field.name.as_ref() == name).map(|field| &field.slot)
	}

	/// Mutable field lookup by exact name.
	pub fn field_mut(&mut self, name: &str) -> Option<&mut Slot> {
		self.fields.iter_mut().find(|field| field.name.as_ref() == name).map(|field| &mut field.slot)
	}

	/// Replace a field, appending it when absent.
	pub fn set_field(&mut self, name: &str, slot: Slot) {
		match self.field_mut(name) {
			Some(existing) => *existing = slot,
			None => self.fields.push(SlotField { name: name.into(), slot }),
		}
	}

	/// Builder-style [`StructSlot::set_field`].
	pub fn with_field(mut self, name: &str, slot: Slot) -> Self {
		self.set_field(name, slot);
		self
	}

	/// Store a number into a numeric field, keeping its float/double width.
	pub(crate) fn set_number(&mut self, name: &str, value: f64) {
		let slot = match self.field(name) {
			Some(Slot::Float(_)) => Slot::Float(value as f32),
			_ => Slot::Double(value),
		};
		self.set_field(name, slot);
	}
}

impl Slot {
	/// Numeric payload widened to `f64`.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Float(value) => Some(f64::from(*value)),
			Self::Double(value) => Some(*value),
			Self::Int32(value) => Some(f64::from(*value)),
			Self::Int64(value) => Some(*value as f64),
			Self::Byte(value) => Some(f64::from(*value)),
			Self::Enum(value) => Some(*value as f64),
			_ => None,
		}
	}

	/// Whether this slot has the shape `kind` stores; checks one level of container elements.
	pub fn fits(&self, kind: &PropertyKind) -> bool {
		match (kind, self) {
			(PropertyKind::Bool, Self::Bool(_))
			| (PropertyKind::String, Self::Str(_))
			| (PropertyKind::Name, Self::Name(_))
			| (PropertyKind::Float, Self::Float(_))
			| (PropertyKind::Double, Self::Double(_))
			| (PropertyKind::Int32, Self::Int32(_))
			| (PropertyKind::Int64, Self::Int64(_))
			| (PropertyKind::Byte { .. }, Self::Byte(_))
			| (PropertyKind::Enum { .. }, Self::Enum(_))
			| (PropertyKind::ObjectRef, Self::Object(_))
			| (PropertyKind::SoftObjectRef, Self::SoftObject(_))
			| (PropertyKind::SoftClassRef, Self::SoftClass(_)) => true,
			(PropertyKind::Struct(name), Self::Struct(item)) => item.type_name == *name,
			(PropertyKind::Array(inner), Self::Array(items)) | (PropertyKind::Set(inner), Self::Set(items)) => {
				items.iter().all(|item| item.fits_shallow(inner))
			}
			(PropertyKind::Map { key, value }, Self::Map(entries)) => entries.iter().all(|(k, v)| k.fits_shallow(key) && v.fits_shallow(value)),
			_ => false,
		}
	}

	fn fits_shallow(&self, kind: &PropertyKind) -> bool {
		match (kind, self) {
			(PropertyKind::Array(_), Self::Array(_)) | (PropertyKind::Set(_), Self::Set(_)) | (PropertyKind::Map { .. }, Self::Map(_)) => true,
			_ => self.fits(kind),
		}
	}
}
