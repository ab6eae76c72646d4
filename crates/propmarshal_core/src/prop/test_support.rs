use crate::prop::{EnumDef, HandleOf, MemoryHost, Property, PropertyKind};

pub(crate) const HERO: &str = "/Game/Level.Hero";
pub(crate) const SIDEKICK: &str = "/Game/Level.Sidekick";
pub(crate) const CRATE: &str = "/Game/Props/Crate.Crate";

/// Host with an `Actor` class covering every property kind, plus three actors.
pub(crate) fn actor_host() -> MemoryHost {
	let mut host = MemoryHost::new();
	host.define_enum(EnumDef::new("EMode", [("A", 0), ("B", 1)])).expect("EMode defines");
	host.define_enum(EnumDef::new(
		"ELightUnits",
		[("ELightUnits::Unitless", 0), ("ELightUnits::Candelas", 1), ("ELightUnits::Lumens", 2)],
	))
	.expect("ELightUnits defines");

	host.define_type(
		"Transform",
		vec![
			Property::new("Location", PropertyKind::vector3()),
			Property::new("Rotation", PropertyKind::rotator3()),
			Property::new("Scale", PropertyKind::Float),
		],
	)
	.expect("Transform defines");
	host.define_type(
		"Tag",
		vec![Property::new("Label", PropertyKind::String), Property::new("Weight", PropertyKind::Float)],
	)
	.expect("Tag defines");
	host.define_type(
		"Actor",
		vec![
			Property::new("Name", PropertyKind::Name),
			Property::new("Label", PropertyKind::String),
			Property::new("Hidden", PropertyKind::Bool),
			Property::new("Health", PropertyKind::Int32),
			Property::new("Score", PropertyKind::Int64),
			Property::new("Speed", PropertyKind::Double),
			Property::new("Intensity", PropertyKind::Float),
			Property::new("Level", PropertyKind::byte()),
			Property::new("Mode", PropertyKind::byte_enum("EMode")),
			Property::new("Units", PropertyKind::enumeration("ELightUnits")),
			Property::new("Transform", PropertyKind::Struct("Transform".into())),
			Property::new("Badge", PropertyKind::Struct("Tag".into())),
			Property::new("Owner", PropertyKind::ObjectRef),
			Property::new("Mesh", PropertyKind::SoftObjectRef),
			Property::new("Class", PropertyKind::SoftClassRef),
			Property::new("Counts", PropertyKind::array_of(PropertyKind::Int32)),
			Property::new("Names", PropertyKind::array_of(PropertyKind::Name)),
			Property::new("Tags", PropertyKind::array_of(PropertyKind::Struct("Tag".into()))),
			Property::new("Grid", PropertyKind::array_of(PropertyKind::array_of(PropertyKind::Int32))),
			Property::new("Flags", PropertyKind::set_of(PropertyKind::Name)),
			Property::new("Stats", PropertyKind::map_of(PropertyKind::Name, PropertyKind::Float)),
			Property::new("ById", PropertyKind::map_of(PropertyKind::Int32, PropertyKind::String)),
		],
	)
	.expect("Actor defines");

	for path in [HERO, SIDEKICK, CRATE] {
		host.spawn(path, "Actor").expect("actor spawns");
	}
	host
}

/// Root handle for an object that must exist.
pub(crate) fn root(host: &MemoryHost, path: &str) -> HandleOf<MemoryHost> {
	host.object(path).expect("object exists")
}

/// Descriptor of an `Actor` property by name.
pub(crate) fn actor_prop(host: &MemoryHost, name: &str) -> Property {
	use crate::prop::ReflectHost;

	host.find_property("Actor", name).cloned().expect("actor property exists")
}
