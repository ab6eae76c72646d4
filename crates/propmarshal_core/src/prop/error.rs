use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, PropError>;

/// Coarse failure classes shared by every [`PropError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// Missing, stale, or malformed container, property, path, or value argument.
	InvalidInput,
	/// JSON value type is incompatible with the target property kind.
	TypeMismatch,
	/// Named property does not exist in the current scope.
	UnresolvedName,
	/// Object or soft-object identifier could not be found.
	UnresolvedReference,
	/// Name or number does not map to a member of the target enum.
	InvalidEnumValue,
	/// Property kind has no conversion rule.
	UnsupportedKind,
	/// Intermediate path segment cannot be traversed.
	TraversalError,
}

/// Errors produced while resolving paths and applying values to reflected properties.
#[derive(Debug, Error)]
pub enum PropError {
	/// Filesystem failure while loading a world description.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON text could not be parsed.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Container handle no longer refers to live storage.
	#[error("invalid container: {detail}")]
	InvalidContainer {
		/// Description of the rejected handle.
		detail: String,
	},
	/// Property descriptor does not belong to the container's scope.
	#[error("invalid property {property} for scope {scope}")]
	InvalidProperty {
		/// Property name from the descriptor.
		property: String,
		/// Scope the container reports.
		scope: String,
	},
	/// Path string was empty or had no usable segments.
	#[error("invalid property path: {path:?}")]
	InvalidPath {
		/// Original user-provided path string.
		path: String,
	},
	/// Host rejected a slot write or definition.
	#[error("host rejected {operation}: {detail}")]
	HostRejected {
		/// Host operation that failed.
		operation: &'static str,
		/// Host-provided reason.
		detail: String,
	},
	/// Struct import nested deeper than the configured limit.
	#[error("struct import depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Inbound container value exceeded the configured element limit.
	#[error("too many elements for {property}: count={count}, max={max}")]
	TooManyElements {
		/// Target property.
		property: String,
		/// Inbound element count.
		count: usize,
		/// Maximum permitted element count.
		max: usize,
	},
	/// JSON value type cannot be assigned to the property kind.
	#[error("type mismatch for {property}: expected {expected}, got {got}")]
	TypeMismatch {
		/// Target property or element label.
		property: String,
		/// Accepted JSON shapes.
		expected: &'static str,
		/// Description of the offending value.
		got: String,
	},
	/// Path segment names no property in the current scope.
	#[error("property '{segment}' not found in scope '{scope}' (segment {index} of {total})")]
	UnresolvedSegment {
		/// Offending segment.
		segment: String,
		/// Scope that was searched.
		scope: String,
		/// 1-based segment position.
		index: usize,
		/// Total segment count.
		total: usize,
	},
	/// Struct import key names no field of the struct.
	#[error("field '{field}' not found in struct '{struct_name}'")]
	UnresolvedField {
		/// Offending JSON key.
		field: String,
		/// Struct type that was searched.
		struct_name: String,
	},
	/// Object identifier could not be resolved.
	#[error("failed to resolve object reference: {identifier}")]
	UnresolvedReference {
		/// Identifier or path that failed to resolve.
		identifier: String,
	},
	/// Enum name or numeric value is not a member.
	#[error("invalid enum value '{input}' for enum '{enum_name}'")]
	InvalidEnumValue {
		/// Enum type name.
		enum_name: String,
		/// Offending name or number.
		input: String,
	},
	/// No conversion rule exists for the property kind.
	#[error("unsupported kind {kind} for {property}")]
	UnsupportedKind {
		/// Target property or element label.
		property: String,
		/// Description of the unsupported kind.
		kind: String,
	},
	/// Intermediate segment is neither an object reference nor a struct.
	#[error("cannot traverse into property '{segment}' of kind {kind} (segment {index} of {total})")]
	CannotTraverse {
		/// Offending segment.
		segment: String,
		/// Kind label of the property.
		kind: &'static str,
		/// 1-based segment position.
		index: usize,
		/// Total segment count.
		total: usize,
	},
	/// Intermediate object reference is null.
	#[error("object property '{segment}' is null (segment {index} of {total})")]
	NullReference {
		/// Offending segment.
		segment: String,
		/// 1-based segment position.
		index: usize,
		/// Total segment count.
		total: usize,
	},
}

impl PropError {
	/// Classify this error into one of the [`ErrorKind`] buckets.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::Io(_)
			| Self::Json(_)
			| Self::InvalidContainer { .. }
			| Self::InvalidProperty { .. }
			| Self::InvalidPath { .. }
			| Self::HostRejected { .. }
			| Self::DepthExceeded { .. }
			| Self::TooManyElements { .. } => ErrorKind::InvalidInput,
			Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
			Self::UnresolvedSegment { .. } | Self::UnresolvedField { .. } => ErrorKind::UnresolvedName,
			Self::UnresolvedReference { .. } => ErrorKind::UnresolvedReference,
			Self::InvalidEnumValue { .. } => ErrorKind::InvalidEnumValue,
			Self::UnsupportedKind { .. } => ErrorKind::UnsupportedKind,
			Self::CannotTraverse { .. } | Self::NullReference { .. } => ErrorKind::TraversalError,
		}
	}
}
