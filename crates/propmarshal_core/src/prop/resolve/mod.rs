use crate::prop::{ContainerHandle, HandleOf, Property, PropError, PropertyKind, ReflectHost, Result, Slot};

/// Parsed dotted property path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPath {
	/// Non-empty segments in traversal order.
	pub segments: Vec<Box<str>>,
}

impl PropertyPath {
	/// Split on `.`; empty tokens from leading, trailing, or doubled separators are dropped.
	pub fn parse(input: &str) -> Result<Self> {
		let segments: Vec<Box<str>> = input.split('.').filter(|segment| !segment.is_empty()).map(Box::from).collect();
		if segments.is_empty() {
			return Err(PropError::InvalidPath { path: input.to_owned() });
		}
		Ok(Self { segments })
	}
}

/// Terminal property and the container that holds it.
#[derive(Debug, Clone)]
pub struct ResolvedPath<A> {
	/// Owning object or struct container.
	pub container: ContainerHandle<A>,
	/// Property descriptor for the final segment.
	pub property: Property,
}

/// Resolve a dotted path from `root`, descending through object references and inline structs.
pub fn resolve_path<H: ReflectHost>(host: &H, root: &HandleOf<H>, path: &str) -> Result<ResolvedPath<H::Address>> {
	if !host.is_live(root) {
		return Err(PropError::InvalidContainer {
			detail: format!("root object {:?} is null or destroyed", root.address),
		});
	}
	let parsed = PropertyPath::parse(path)?;
	resolve_parsed(host, root, &parsed)
}

/// Resolve an already parsed path.
pub fn resolve_parsed<H: ReflectHost>(host: &H, root: &HandleOf<H>, path: &PropertyPath) -> Result<ResolvedPath<H::Address>> {
	let total = path.segments.len();
	let mut container = root.clone();

	for (idx, segment) in path.segments.iter().enumerate() {
		let index = idx + 1;
		let property = host
			.find_property(&container.scope, segment)
			.cloned()
			.ok_or_else(|| PropError::UnresolvedSegment {
				segment: segment.to_string(),
				scope: container.scope.to_string(),
				index,
				total,
			})?;

		if index == total {
			return Ok(ResolvedPath { container, property });
		}

		container = descend_into(host, &container, &property, index, total)?;
	}

	Err(PropError::InvalidPath {
		path: path.segments.join("."),
	})
}

/// Resolve `path` and step into the container its final property leads to.
pub fn resolve_container<H: ReflectHost>(host: &H, root: &HandleOf<H>, path: &str) -> Result<HandleOf<H>> {
	let resolved = resolve_path(host, root, path)?;
	let total = PropertyPath::parse(path)?.segments.len();
	descend_into(host, &resolved.container, &resolved.property, total, total)
}

/// Container reached through `property`: the referenced object or the inline struct.
///
/// `index` and `total` place the property in its path for error reporting.
pub fn descend_into<H: ReflectHost>(
	host: &H,
	container: &HandleOf<H>,
	property: &Property,
	index: usize,
	total: usize,
) -> Result<HandleOf<H>> {
	let segment = &property.name;
	log::trace!("descending through {}.{segment} ({})", container.scope, property.kind.describe());
	match &property.kind {
		PropertyKind::ObjectRef => match host.read_slot(container, property) {
			Some(Slot::Object(Some(target))) => host
				.object_container(&target)
				.ok_or(PropError::UnresolvedReference { identifier: target }),
			Some(Slot::Object(None)) => Err(PropError::NullReference {
				segment: segment.to_string(),
				index,
				total,
			}),
			_ => Err(PropError::InvalidContainer {
				detail: format!("unreadable object property {segment} on {}", container.scope),
			}),
		},
		PropertyKind::Struct(_) => host.struct_container(container, property).ok_or_else(|| PropError::InvalidContainer {
			detail: format!("unreadable struct property {segment} on {}", container.scope),
		}),
		other => Err(PropError::CannotTraverse {
			segment: segment.to_string(),
			kind: other.label(),
			index,
			total,
		}),
	}
}
