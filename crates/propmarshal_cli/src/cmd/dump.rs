use std::path::PathBuf;

use propmarshal::prop::{ReflectHost, Value, export_container};

use crate::cmd::util::{emit_json, load_object, render_value};

#[derive(clap::Args)]
pub struct Args {
	pub world: PathBuf,
	#[arg(long)]
	pub object: String,
	#[arg(long)]
	pub json: bool,
}

/// Export and print every declared property of one object.
pub fn run(args: Args) -> propmarshal::prop::Result<()> {
	let Args { world, object, json } = args;

	let (host, root) = load_object(&world, &object)?;
	let values = export_container(&host, &root)?;

	if json {
		return emit_json(&DumpJson {
			object: &object,
			class: &root.scope,
			values,
		});
	}

	println!("object: {object}");
	println!("class: {}", root.scope);
	for property in host.properties(&root.scope).unwrap_or_default() {
		let value = values.as_object().and_then(|map| map.get(property.name.as_ref()));
		println!("  {} = {}", property.name, value.map_or_else(|| "null".to_owned(), render_value));
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct DumpJson<'a> {
	object: &'a str,
	class: &'a str,
	values: Value,
}
