use std::path::PathBuf;

use propmarshal::prop::{PropError, ReflectHost, Result, resolve_container};

use crate::cmd::util::{emit_json, load_object};

#[derive(clap::Args)]
pub struct Args {
	pub world: PathBuf,
	#[arg(long)]
	pub object: String,
	/// Struct or object-reference property to list instead of the object itself.
	#[arg(long)]
	pub path: Option<String>,
	#[arg(long)]
	pub json: bool,
}

/// List declared property names and kinds.
pub fn run(args: Args) -> Result<()> {
	let Args { world, object, path, json } = args;

	let (host, root) = load_object(&world, &object)?;
	let container = match path.as_deref() {
		Some(path) => resolve_container(&host, &root, path)?,
		None => root,
	};
	let properties = host.properties(&container.scope).ok_or_else(|| PropError::InvalidContainer {
		detail: format!("unknown scope {}", container.scope),
	})?;

	if json {
		return emit_json(&PropsJson {
			object: &object,
			scope: &container.scope,
			properties: properties
				.iter()
				.map(|property| PropJson {
					name: &property.name,
					kind: property.kind.describe(),
				})
				.collect(),
		});
	}

	println!("scope: {}", container.scope);
	for property in properties {
		println!("  {}: {}", property.name, property.kind.describe());
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct PropsJson<'a> {
	object: &'a str,
	scope: &'a str,
	properties: Vec<PropJson<'a>>,
}

#[derive(serde::Serialize)]
struct PropJson<'a> {
	name: &'a str,
	kind: String,
}
