use std::path::PathBuf;

use propmarshal::prop::{Value, export_property, resolve_path};

use crate::cmd::util::{emit_json, load_object, render_value};

#[derive(clap::Args)]
pub struct Args {
	pub world: PathBuf,
	#[arg(long)]
	pub object: String,
	#[arg(long)]
	pub path: String,
	#[arg(long)]
	pub json: bool,
}

/// Resolve one property path and print its exported value.
pub fn run(args: Args) -> propmarshal::prop::Result<()> {
	let Args { world, object, path, json } = args;

	let (host, root) = load_object(&world, &object)?;
	let resolved = resolve_path(&host, &root, &path)?;
	let value = export_property(&host, &resolved.container, &resolved.property);

	if json {
		return emit_json(&GetJson {
			object: &object,
			path: &path,
			scope: &resolved.container.scope,
			kind: resolved.property.kind.describe(),
			value,
		});
	}

	println!("object: {object}");
	println!("path: {path}");
	println!("scope: {}", resolved.container.scope);
	println!("kind: {}", resolved.property.kind.describe());
	println!("value: {}", render_value(&value));
	Ok(())
}

#[derive(serde::Serialize)]
struct GetJson<'a> {
	object: &'a str,
	path: &'a str,
	scope: &'a str,
	kind: String,
	value: Value,
}
