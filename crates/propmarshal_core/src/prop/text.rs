use std::fmt::Write as _;

use crate::prop::Slot;

/// Render a slot in the parenthesised export-text format, e.g. `(X=1.000000,Y=2.000000)`.
///
/// Top-level strings and names are written raw; inside structs and containers they are quoted.
pub fn export_slot_text(slot: &Slot) -> String {
	let mut out = String::new();
	write_slot(&mut out, slot, false);
	out
}

fn write_slot(out: &mut String, slot: &Slot, nested: bool) {
	match slot {
		Slot::Bool(value) => out.push_str(if *value { "True" } else { "False" }),
		Slot::Str(value) | Slot::Name(value) => {
			if nested {
				let _ = write!(out, "{value:?}");
			} else {
				out.push_str(value);
			}
		}
		Slot::Float(value) => {
			let _ = write!(out, "{value:.6}");
		}
		Slot::Double(value) => {
			let _ = write!(out, "{value:.6}");
		}
		Slot::Int32(value) => {
			let _ = write!(out, "{value}");
		}
		Slot::Int64(value) | Slot::Enum(value) => {
			let _ = write!(out, "{value}");
		}
		Slot::Byte(value) => {
			let _ = write!(out, "{value}");
		}
		Slot::Object(path) | Slot::SoftObject(path) | Slot::SoftClass(path) => out.push_str(path.as_deref().unwrap_or("None")),
		Slot::Struct(item) => {
			out.push('(');
			for (idx, field) in item.fields.iter().enumerate() {
				if idx > 0 {
					out.push(',');
				}
				out.push_str(&field.name);
				out.push('=');
				write_slot(out, &field.slot, true);
			}
			out.push(')');
		}
		Slot::Array(items) | Slot::Set(items) => {
			out.push('(');
			for (idx, item) in items.iter().enumerate() {
				if idx > 0 {
					out.push(',');
				}
				write_slot(out, item, true);
			}
			out.push(')');
		}
		Slot::Map(entries) => {
			out.push('(');
			for (idx, (key, value)) in entries.iter().enumerate() {
				if idx > 0 {
					out.push(',');
				}
				out.push('(');
				write_slot(out, key, true);
				out.push_str(", ");
				write_slot(out, value, true);
				out.push(')');
			}
			out.push(')');
		}
	}
}
