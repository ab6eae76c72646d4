use std::path::Path;

use propmarshal::prop::{HandleOf, MemoryHost, PropError, Result, Value};

/// Load a world file and look up the root object.
pub(crate) fn load_object(world: &Path, object: &str) -> Result<(MemoryHost, HandleOf<MemoryHost>)> {
	let host = MemoryHost::load(world)?;
	let root = host.object(object).ok_or_else(|| PropError::InvalidContainer {
		detail: format!("no object {object} in {}", world.display()),
	})?;
	log::info!("loaded {} ({} objects)", world.display(), host.object_paths().count());
	Ok((host, root))
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}

/// Render a value as compact JSON for text output.
pub(crate) fn render_value(value: &Value) -> String {
	serde_json::to_string(value).unwrap_or_else(|_| "null".to_owned())
}
