mod access;
mod apply;
mod error;
mod export;
pub mod fields;
mod host;
mod kind;
mod memory;
mod resolve;
mod slot;
#[cfg(test)]
mod test_support;
pub(crate) mod text;
mod value;

/// Composed resolve-then-read/write entry points.
pub use access::{export_container, get_property_value, set_property_value};
/// Value-to-slot conversion entry points and options.
pub use apply::{ApplyOptions, UnknownFieldPolicy, apply_property, apply_property_with};
/// Error, category, and result aliases.
pub use error::{ErrorKind, PropError, Result};
/// Slot-to-value export entry points.
pub use export::{export_property, export_slot};
/// Container handles and the host reflection trait.
pub use host::{ContainerHandle, HandleOf, ReflectHost};
/// Property descriptors, kinds, and enum definitions.
pub use kind::{EnumDef, EnumMember, Property, PropertyKind, StructShape};
/// In-memory reference host and its world description.
pub use memory::{MemAddress, MemoryHost, ObjectSpec, TypeSpec, WorldSpec};
/// Dotted path parsing and resolution.
pub use resolve::{PropertyPath, ResolvedPath, descend_into, resolve_container, resolve_parsed, resolve_path};
/// Host-neutral stored property values.
pub use slot::{Slot, SlotField, StructSlot};
/// Engine-style textual export.
pub use text::export_slot_text;
/// Dynamic JSON-shaped value.
pub use value::Value;
