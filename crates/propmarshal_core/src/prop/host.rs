use std::fmt;

use crate::prop::{EnumDef, Property, Result, Slot, text};

/// Borrowed view of a container: a host address plus the type whose properties it holds.
///
/// Handles are cheap to clone and only meaningful for the call that produced them; a host may
/// invalidate them whenever an object is destroyed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerHandle<A> {
	/// Host-defined address of the container storage.
	pub address: A,
	/// Type name whose declared properties live at `address`.
	pub scope: Box<str>,
}

impl<A> ContainerHandle<A> {
	/// Pair an address with its scope type.
	pub fn new(address: A, scope: &str) -> Self {
		Self {
			address,
			scope: scope.into(),
		}
	}
}

/// Container handle type for a host.
pub type HandleOf<H> = ContainerHandle<<H as ReflectHost>::Address>;

/// Reflection capabilities the marshalling core needs from its host.
pub trait ReflectHost {
	/// Host-defined container address.
	type Address: Clone + fmt::Debug + PartialEq;

	/// Declared properties of a class or struct type, or `None` for an unknown type.
	fn properties(&self, scope: &str) -> Option<&[Property]>;

	/// Look up a declared property by exact name.
	fn find_property(&self, scope: &str, name: &str) -> Option<&Property> {
		self.properties(scope)?.iter().find(|property| property.name.as_ref() == name)
	}

	/// Whether `container` still refers to live storage of its scope type.
	fn is_live(&self, container: &ContainerHandle<Self::Address>) -> bool;

	/// Read the current contents of a property slot.
	fn read_slot(&self, container: &ContainerHandle<Self::Address>, property: &Property) -> Option<Slot>;

	/// Replace the contents of a property slot.
	fn write_slot(&mut self, container: &ContainerHandle<Self::Address>, property: &Property, slot: Slot) -> Result<()>;

	/// Handle to the inline struct stored in `property`.
	fn struct_container(&self, container: &ContainerHandle<Self::Address>, property: &Property) -> Option<ContainerHandle<Self::Address>>;

	/// Handle to the object at a canonical path.
	fn object_container(&self, path: &str) -> Option<ContainerHandle<Self::Address>>;

	/// Resolve (loading if needed) an object identifier to its canonical path.
	fn resolve_object(&self, identifier: &str) -> Option<String>;

	/// Enum definition by type name.
	fn enum_def(&self, name: &str) -> Option<&EnumDef>;

	/// Textual export of a slot that has no direct JSON form.
	fn export_text(&self, slot: &Slot) -> String {
		text::export_slot_text(slot)
	}
}

/// Whether `property` is a declared property of a live `container`.
pub(crate) fn target_is_valid<H: ReflectHost>(host: &H, container: &HandleOf<H>, property: &Property) -> bool {
	host.is_live(container) && host.find_property(&container.scope, &property.name) == Some(property)
}
