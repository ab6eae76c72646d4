use serde::{Deserialize, Serialize};

/// Closed set of reflected property kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
	/// Boolean slot.
	Bool,
	/// Owned string slot.
	String,
	/// Interned name slot, exported as a string.
	Name,
	/// 32-bit float slot.
	Float,
	/// 64-bit float slot.
	Double,
	/// Signed 32-bit integer slot.
	Int32,
	/// Signed 64-bit integer slot.
	Int64,
	/// Unsigned byte, optionally carrying an enum.
	Byte {
		/// Enum type when the byte stores an enum value.
		#[serde(default, rename = "enum")]
		enum_name: Option<Box<str>>,
	},
	/// Wide enum with a signed integer underlying value.
	Enum {
		/// Enum type name.
		#[serde(rename = "enum")]
		enum_name: Box<str>,
	},
	/// Direct reference to another object.
	ObjectRef,
	/// Soft reference to an object by path.
	SoftObjectRef,
	/// Soft reference to a class by path.
	SoftClassRef,
	/// Inline struct of the named type.
	Struct(Box<str>),
	/// Ordered list of elements.
	Array(Box<PropertyKind>),
	/// Key/value map.
	Map {
		/// Key kind.
		key: Box<PropertyKind>,
		/// Value kind.
		value: Box<PropertyKind>,
	},
	/// Unordered set of unique elements.
	Set(Box<PropertyKind>),
}

/// Well-known struct layouts with a JSON array shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructShape {
	/// Three components `X`, `Y`, `Z`.
	Vector3,
	/// Three components `Pitch`, `Yaw`, `Roll`.
	Rotator3,
	/// Any other struct.
	Opaque,
}

impl StructShape {
	/// Classify a struct type name.
	pub fn of(type_name: &str) -> Self {
		if type_name.eq_ignore_ascii_case("Vector") {
			Self::Vector3
		} else if type_name.eq_ignore_ascii_case("Rotator") {
			Self::Rotator3
		} else {
			Self::Opaque
		}
	}

	/// Component field names for the shorthand, in array order.
	pub fn components(self) -> Option<[&'static str; 3]> {
		match self {
			Self::Vector3 => Some(["X", "Y", "Z"]),
			Self::Rotator3 => Some(["Pitch", "Yaw", "Roll"]),
			Self::Opaque => None,
		}
	}
}

impl PropertyKind {
	/// Struct kind for the built-in `Vector` type.
	pub fn vector3() -> Self {
		Self::Struct("Vector".into())
	}

	/// Struct kind for the built-in `Rotator` type.
	pub fn rotator3() -> Self {
		Self::Struct("Rotator".into())
	}

	/// Plain (non-enum) byte kind.
	pub fn byte() -> Self {
		Self::Byte { enum_name: None }
	}

	/// Byte kind storing the named enum.
	pub fn byte_enum(enum_name: &str) -> Self {
		Self::Byte {
			enum_name: Some(enum_name.into()),
		}
	}

	/// Wide enum kind.
	pub fn enumeration(enum_name: &str) -> Self {
		Self::Enum { enum_name: enum_name.into() }
	}

	/// Array kind with the given element kind.
	pub fn array_of(inner: PropertyKind) -> Self {
		Self::Array(Box::new(inner))
	}

	/// Set kind with the given element kind.
	pub fn set_of(inner: PropertyKind) -> Self {
		Self::Set(Box::new(inner))
	}

	/// Map kind with the given key and value kinds.
	pub fn map_of(key: PropertyKind, value: PropertyKind) -> Self {
		Self::Map {
			key: Box::new(key),
			value: Box::new(value),
		}
	}

	/// Element kind of an array or set.
	pub fn element_kind(&self) -> Option<&PropertyKind> {
		match self {
			Self::Array(inner) | Self::Set(inner) => Some(&**inner),
			_ => None,
		}
	}

	/// Key kind of a map.
	pub fn key_kind(&self) -> Option<&PropertyKind> {
		match self {
			Self::Map { key, .. } => Some(&**key),
			_ => None,
		}
	}

	/// Value kind of a map.
	pub fn value_kind(&self) -> Option<&PropertyKind> {
		match self {
			Self::Map { value, .. } => Some(&**value),
			_ => None,
		}
	}

	/// Struct type name for struct kinds.
	pub fn struct_name(&self) -> Option<&str> {
		match self {
			Self::Struct(name) => Some(&**name),
			_ => None,
		}
	}

	/// Enum type name for enum and enum-byte kinds.
	pub fn enum_name(&self) -> Option<&str> {
		match self {
			Self::Byte { enum_name } => enum_name.as_deref(),
			Self::Enum { enum_name } => Some(&**enum_name),
			_ => None,
		}
	}

	/// Whether this is an array, map, or set.
	pub fn is_container(&self) -> bool {
		matches!(self, Self::Array(_) | Self::Map { .. } | Self::Set(_))
	}

	/// Whether values of this kind export without a textual fallback.
	pub fn is_scalar(&self) -> bool {
		!self.is_container() && !matches!(self, Self::Struct(_))
	}

	/// Lowercase label used in messages.
	pub fn label(&self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::String => "string",
			Self::Name => "name",
			Self::Float => "float",
			Self::Double => "double",
			Self::Int32 => "int32",
			Self::Int64 => "int64",
			Self::Byte { enum_name: None } => "byte",
			Self::Byte { enum_name: Some(_) } => "enum byte",
			Self::Enum { .. } => "enum",
			Self::ObjectRef => "object reference",
			Self::SoftObjectRef => "soft object reference",
			Self::SoftClassRef => "soft class reference",
			Self::Struct(_) => "struct",
			Self::Array(_) => "array",
			Self::Map { .. } => "map",
			Self::Set(_) => "set",
		}
	}

	/// Human-readable kind including type parameters, e.g. `array<int32>`.
	pub fn describe(&self) -> String {
		match self {
			Self::Byte { enum_name: Some(name) } => format!("byte<{name}>"),
			Self::Enum { enum_name } => format!("enum<{enum_name}>"),
			Self::Struct(name) => format!("struct<{name}>"),
			Self::Array(inner) => format!("array<{}>", inner.describe()),
			Self::Set(inner) => format!("set<{}>", inner.describe()),
			Self::Map { key, value } => format!("map<{}, {}>", key.describe(), value.describe()),
			other => other.label().to_owned(),
		}
	}
}

/// Named, typed slot declared by a class or struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
	/// Declared property name, matched case-sensitively.
	pub name: Box<str>,
	/// Property kind.
	pub kind: PropertyKind,
}

impl Property {
	/// Create a property descriptor.
	pub fn new(name: &str, kind: PropertyKind) -> Self {
		Self { name: name.into(), kind }
	}
}

/// One enum member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMember {
	/// Member name, possibly qualified as `Enum::Member`.
	pub name: Box<str>,
	/// Underlying value.
	pub value: i64,
}

/// Enum definition with its legal values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDef {
	/// Enum type name.
	pub name: Box<str>,
	/// Members in declaration order.
	pub members: Vec<EnumMember>,
}

impl EnumDef {
	/// Create an enum definition from `(name, value)` pairs.
	pub fn new<'a>(name: &str, members: impl IntoIterator<Item = (&'a str, i64)>) -> Self {
		Self {
			name: name.into(),
			members: members
				.into_iter()
				.map(|(name, value)| EnumMember { name: name.into(), value })
				.collect(),
		}
	}

	/// Short member name for a value.
	pub fn name_by_value(&self, value: i64) -> Option<&str> {
		self.members.iter().find(|member| member.value == value).map(|member| short_name(&member.name))
	}

	/// Resolve a member name, trying the bare form before the qualified form.
	pub fn value_by_name(&self, input: &str) -> Option<i64> {
		if let Some(member) = self.members.iter().find(|member| member.name.as_ref() == input) {
			return Some(member.value);
		}

		let qualified = format!("{}::{input}", self.name);
		self.members.iter().find(|member| member.name.as_ref() == qualified).map(|member| member.value)
	}

	/// Whether `value` belongs to the legal value set.
	pub fn contains_value(&self, value: i64) -> bool {
		self.members.iter().any(|member| member.value == value)
	}
}

fn short_name(name: &str) -> &str {
	name.rsplit_once("::").map_or(name, |(_, tail)| tail)
}
