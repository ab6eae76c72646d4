use std::path::PathBuf;

use propmarshal::prop::{ApplyOptions, Value, apply_property_with, export_property, resolve_path};

use crate::cmd::util::{emit_json, load_object, render_value};

#[derive(clap::Args)]
pub struct Args {
	pub world: PathBuf,
	#[arg(long)]
	pub object: String,
	#[arg(long)]
	pub path: String,
	/// JSON text of the value to apply.
	#[arg(long)]
	pub value: String,
	/// Reject struct import keys that match no field.
	#[arg(long)]
	pub strict: bool,
	#[arg(long)]
	pub json: bool,
}

/// Apply a JSON value to one property of a loaded world and print before/after.
///
/// The world file itself is not rewritten.
pub fn run(args: Args) -> propmarshal::prop::Result<()> {
	let Args {
		world,
		object,
		path,
		value,
		strict,
		json,
	} = args;

	let input = Value::from_json_str(&value)?;
	let opt = if strict { ApplyOptions::strict() } else { ApplyOptions::default() };

	let (mut host, root) = load_object(&world, &object)?;
	let resolved = resolve_path(&host, &root, &path)?;
	let before = export_property(&host, &resolved.container, &resolved.property);
	apply_property_with(&mut host, &resolved.container, &resolved.property, &input, &opt)?;
	let after = export_property(&host, &resolved.container, &resolved.property);
	log::info!("applied {path} on {object}");

	if json {
		return emit_json(&SetJson {
			object: &object,
			path: &path,
			kind: resolved.property.kind.describe(),
			before,
			after,
		});
	}

	println!("object: {object}");
	println!("path: {path}");
	println!("kind: {}", resolved.property.kind.describe());
	println!("before: {}", render_value(&before));
	println!("after: {}", render_value(&after));
	Ok(())
}

#[derive(serde::Serialize)]
struct SetJson<'a> {
	object: &'a str,
	path: &'a str,
	kind: String,
	before: Value,
	after: Value,
}
