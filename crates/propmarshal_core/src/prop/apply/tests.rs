use super::{ApplyOptions, apply_property, apply_property_with};
use crate::prop::test_support::{CRATE, HERO, SIDEKICK, actor_host, actor_prop, root};
use crate::prop::{ErrorKind, MemoryHost, PropError, Property, PropertyKind, ReflectHost, Value, export_property, get_property_value};

fn json(input: &str) -> Value {
	Value::from_json_str(input).expect("json parses")
}

fn apply(host: &mut MemoryHost, name: &str, value: Value) -> Result<Value, PropError> {
	let hero = root(host, HERO);
	let property = actor_prop(host, name);
	apply_property(host, &hero, &property, &value)?;
	Ok(export_property(host, &hero, &property))
}

fn apply_err(host: &mut MemoryHost, name: &str, value: Value) -> PropError {
	apply(host, name, value).expect_err("apply should fail")
}

fn read(host: &MemoryHost, name: &str) -> Value {
	export_property(host, &root(host, HERO), &actor_prop(host, name))
}

#[test]
fn scalars_round_trip() {
	let mut host = actor_host();
	assert_eq!(apply(&mut host, "Hidden", Value::Bool(true)).expect("bool"), Value::Bool(true));
	assert_eq!(apply(&mut host, "Label", Value::from("hello")).expect("string"), Value::from("hello"));
	assert_eq!(apply(&mut host, "Name", Value::from("Bob")).expect("name"), Value::from("Bob"));
	assert_eq!(apply(&mut host, "Health", Value::Number(42.0)).expect("int32"), Value::Number(42.0));
	assert_eq!(apply(&mut host, "Score", Value::Number(1_099_511_627_776.0)).expect("int64"), Value::Number(1_099_511_627_776.0));
	assert_eq!(apply(&mut host, "Intensity", Value::Number(0.5)).expect("float"), Value::Number(0.5));
	assert_eq!(apply(&mut host, "Speed", Value::Number(1.25)).expect("double"), Value::Number(1.25));
	assert_eq!(apply(&mut host, "Level", Value::Number(200.0)).expect("byte"), Value::Number(200.0));
}

#[test]
fn bool_accepts_numbers_and_strings() {
	let mut host = actor_host();
	assert_eq!(apply(&mut host, "Hidden", Value::Number(2.0)).expect("number"), Value::Bool(true));
	assert_eq!(apply(&mut host, "Hidden", Value::from("no")).expect("string"), Value::Bool(false));
	assert_eq!(apply(&mut host, "Hidden", Value::from("TRUE")).expect("string"), Value::Bool(true));
	assert_eq!(apply_err(&mut host, "Hidden", Value::Null).kind(), ErrorKind::TypeMismatch);
}

#[test]
fn numeric_strings_parse_and_garbage_is_rejected() {
	let mut host = actor_host();
	assert_eq!(apply(&mut host, "Intensity", Value::from(" 12.5 ")).expect("numeric string"), Value::Number(12.5));

	let err = apply_err(&mut host, "Intensity", Value::from("abc"));
	assert_eq!(err.kind(), ErrorKind::TypeMismatch);
	assert_eq!(err.to_string(), r#"type mismatch for Intensity: expected number or numeric string, got string "abc""#);
	assert_eq!(read(&host, "Intensity"), Value::Number(12.5));
}

#[test]
fn non_finite_numeric_strings_are_rejected() {
	let mut host = actor_host();
	apply(&mut host, "Intensity", Value::Number(1.5)).expect("float");
	apply(&mut host, "Speed", Value::Number(2.5)).expect("double");

	let err = apply_err(&mut host, "Intensity", Value::from("NaN"));
	assert_eq!(err.kind(), ErrorKind::TypeMismatch);
	assert_eq!(err.to_string(), r#"type mismatch for Intensity: expected finite number, got string "NaN""#);
	for input in ["inf", "infinity", "-inf", " Infinity "] {
		let err = apply_err(&mut host, "Speed", Value::from(input));
		assert!(matches!(&err, PropError::TypeMismatch { expected: "finite number", .. }), "{input}: {err:?}");
	}
	assert_eq!(apply_err(&mut host, "Health", Value::from("NaN")).kind(), ErrorKind::TypeMismatch);

	assert_eq!(read(&host, "Intensity"), Value::Number(1.5));
	assert_eq!(read(&host, "Speed"), Value::Number(2.5));
}

#[test]
fn integers_truncate_and_check_range() {
	let mut host = actor_host();
	assert_eq!(apply(&mut host, "Health", Value::Number(3.9)).expect("positive"), Value::Number(3.0));
	assert_eq!(apply(&mut host, "Health", Value::Number(-3.9)).expect("negative"), Value::Number(-3.0));
	assert_eq!(apply(&mut host, "Health", Value::from("7")).expect("string"), Value::Number(7.0));

	assert_eq!(apply_err(&mut host, "Health", Value::Number(1e10)).kind(), ErrorKind::TypeMismatch);
	assert_eq!(apply_err(&mut host, "Level", Value::Number(300.0)).kind(), ErrorKind::TypeMismatch);
	assert_eq!(apply_err(&mut host, "Score", Value::Number(f64::INFINITY)).kind(), ErrorKind::TypeMismatch);
	assert_eq!(read(&host, "Health"), Value::Number(7.0));
}

#[test]
fn enums_export_names_for_names_and_numbers() {
	let mut host = actor_host();
	assert_eq!(apply(&mut host, "Mode", Value::from("B")).expect("name"), Value::from("B"));
	assert_eq!(apply(&mut host, "Mode", Value::Number(0.0)).expect("number"), Value::from("A"));
	assert_eq!(apply(&mut host, "Mode", Value::Number(1.0)).expect("number"), Value::from("B"));

	assert_eq!(apply(&mut host, "Units", Value::from("Lumens")).expect("bare"), Value::from("Lumens"));
	assert_eq!(apply(&mut host, "Units", Value::from("ELightUnits::Candelas")).expect("qualified"), Value::from("Candelas"));
}

#[test]
fn invalid_enum_inputs_name_enum_and_input() {
	let mut host = actor_host();
	let err = apply_err(&mut host, "Units", Value::from("Watts"));
	assert_eq!(err.kind(), ErrorKind::InvalidEnumValue);
	assert_eq!(err.to_string(), "invalid enum value 'Watts' for enum 'ELightUnits'");

	assert_eq!(apply_err(&mut host, "Mode", Value::Number(9.0)).kind(), ErrorKind::InvalidEnumValue);
	assert_eq!(apply_err(&mut host, "Mode", Value::from("b")).kind(), ErrorKind::InvalidEnumValue);
	assert_eq!(apply_err(&mut host, "Mode", Value::Bool(true)).kind(), ErrorKind::TypeMismatch);
}

#[test]
fn object_refs_resolve_or_clear() {
	let mut host = actor_host();
	assert_eq!(apply(&mut host, "Owner", Value::from(SIDEKICK)).expect("path"), Value::from(SIDEKICK));
	assert_eq!(apply(&mut host, "Owner", Value::from("/Game/Props/Crate")).expect("package path"), Value::from(CRATE));
	assert_eq!(apply(&mut host, "Owner", Value::from("")).expect("clear"), Value::Null);

	let err = apply_err(&mut host, "Owner", Value::from("/Game/Missing"));
	assert_eq!(err.kind(), ErrorKind::UnresolvedReference);
	assert_eq!(apply_err(&mut host, "Owner", Value::Number(1.0)).kind(), ErrorKind::TypeMismatch);
}

#[test]
fn soft_refs_store_paths_without_loading() {
	let mut host = actor_host();
	assert_eq!(apply(&mut host, "Mesh", Value::from("/Game/Meshes/Box.Box")).expect("soft"), Value::from("/Game/Meshes/Box.Box"));
	assert_eq!(apply(&mut host, "Mesh", Value::Null).expect("null clears"), Value::Null);
	assert_eq!(apply(&mut host, "Class", Value::from("/Script/Engine.Actor")).expect("class"), Value::from("/Script/Engine.Actor"));
	assert_eq!(apply(&mut host, "Class", Value::from("")).expect("empty clears"), Value::Null);
}

#[test]
fn arrays_clear_then_fill() {
	let mut host = actor_host();
	apply(&mut host, "Counts", json("[1, 2]")).expect("first fill");
	assert_eq!(apply(&mut host, "Counts", json("[9]")).expect("second fill"), json("[9]"));
	assert_eq!(apply(&mut host, "Names", json(r#"[1, "a"]"#)).expect("names"), json(r#"["1", "a"]"#));
}

#[test]
fn bad_array_element_rejects_whole_array() {
	let mut host = actor_host();
	apply(&mut host, "Counts", json("[4, 5]")).expect("fill");

	let err = apply_err(&mut host, "Counts", json(r#"[1, "x"]"#));
	assert_eq!(err.kind(), ErrorKind::TypeMismatch);
	assert!(err.to_string().contains("Counts[1]"), "{err}");
	assert_eq!(read(&host, "Counts"), json("[4, 5]"));

	assert_eq!(apply_err(&mut host, "Counts", json(r#"{"a": 1}"#)).kind(), ErrorKind::TypeMismatch);
	assert_eq!(apply_err(&mut host, "Grid", json("[[1]]")).kind(), ErrorKind::UnsupportedKind);
	assert_eq!(apply_err(&mut host, "Tags", json(r#"["x"]"#)).kind(), ErrorKind::UnsupportedKind);
}

#[test]
fn container_limit_is_enforced() {
	let mut host = actor_host();
	let hero = root(&host, HERO);
	let counts = actor_prop(&host, "Counts");
	let opt = ApplyOptions {
		max_container_elems: 2,
		..ApplyOptions::default()
	};

	let err = apply_property_with(&mut host, &hero, &counts, &json("[1, 2, 3]"), &opt).expect_err("limit applies");
	assert!(matches!(err, PropError::TooManyElements { count: 3, max: 2, .. }), "{err:?}");
}

#[test]
fn sets_drop_duplicates_and_maps_convert_keys() {
	let mut host = actor_host();
	assert_eq!(apply(&mut host, "Flags", json(r#"["a", "b", "a"]"#)).expect("set"), json(r#"["a", "b"]"#));
	assert_eq!(apply(&mut host, "Stats", json(r#"{"speed": 2, "armor": "1.5"}"#)).expect("map"), json(r#"{"armor": 1.5, "speed": 2}"#));
	assert_eq!(apply(&mut host, "ById", json(r#"{"10": "ten"}"#)).expect("int keys"), json(r#"{"10": "ten"}"#));

	assert_eq!(apply_err(&mut host, "ById", json(r#"{"ten": "ten"}"#)).kind(), ErrorKind::TypeMismatch);
	assert_eq!(apply_err(&mut host, "Stats", json("[1]")).kind(), ErrorKind::TypeMismatch);
}

#[test]
fn map_keys_colliding_after_conversion_are_rejected() {
	let mut host = actor_host();
	apply(&mut host, "ById", json(r#"{"5": "five"}"#)).expect("prefill");

	let err = apply_err(&mut host, "ById", json(r#"{"1": "one", "01": "zero-one", " 1": "space"}"#));
	assert_eq!(err.kind(), ErrorKind::TypeMismatch);
	assert_eq!(err.to_string(), r#"type mismatch for ById["01"]: expected unique map key, got key "01" colliding with " 1""#);
	assert_eq!(read(&host, "ById"), json(r#"{"5": "five"}"#));

	assert_eq!(apply(&mut host, "Stats", json(r#"{"a": 1, "A": 2}"#)).expect("name keys stay distinct"), json(r#"{"A": 2, "a": 1}"#));
}

#[test]
fn vector_shorthand_round_trips() {
	let mut host = actor_host();
	let hero = root(&host, HERO);
	let transform_prop = actor_prop(&host, "Transform");
	let transform = host.struct_container(&hero, &transform_prop).expect("transform container");
	let location = host.find_property("Transform", "Location").cloned().expect("location");

	apply_property(&mut host, &transform, &location, &json("[1.0, 2.0, 3.0]")).expect("shorthand applies");
	assert_eq!(export_property(&host, &transform, &location), json("[1.0, 2.0, 3.0]"));

	let err = apply_property(&mut host, &transform, &location, &json("[1.0, 2.0]")).expect_err("short array fails");
	assert_eq!(err.kind(), ErrorKind::TypeMismatch);
	let err = apply_property(&mut host, &transform, &location, &json(r#"[1.0, "2", 3.0]"#)).expect_err("non-number fails");
	assert_eq!(err.kind(), ErrorKind::TypeMismatch);
	assert_eq!(export_property(&host, &transform, &location), json("[1.0, 2.0, 3.0]"));
}

#[test]
fn struct_imports_from_json_object_string() {
	let mut host = actor_host();
	let badge = apply(&mut host, "Badge", Value::from(r#"{"label": "door", "Weight": 2}"#)).expect("badge imports");
	assert_eq!(badge, Value::from(r#"(Label="door",Weight=2.000000)"#));

	let transform = r#"{"Location": [1, 2, 3], "Rotation": {"Yaw": 90}, "Scale": 2}"#;
	apply(&mut host, "Transform", Value::from(transform)).expect("transform imports");

	let hero = root(&host, HERO);
	assert_eq!(get_property_value(&host, &hero, "Transform.Location").expect("location"), json("[1, 2, 3]"));
	assert_eq!(get_property_value(&host, &hero, "Transform.Rotation").expect("rotation"), json("[0, 90, 0]"));
	assert_eq!(get_property_value(&host, &hero, "Transform.Scale").expect("scale"), Value::Number(2.0));
}

#[test]
fn struct_import_rejects_unsupported_shapes() {
	let mut host = actor_host();
	let err = apply_err(&mut host, "Badge", Value::from(r#"(Label="door")"#));
	assert_eq!(err.kind(), ErrorKind::TypeMismatch);
	assert!(err.to_string().contains("textual struct import is unsupported"), "{err}");

	assert_eq!(apply_err(&mut host, "Badge", json("[1, 2, 3]")).kind(), ErrorKind::TypeMismatch);
	assert_eq!(apply_err(&mut host, "Badge", json(r#"{"Label": "x"}"#)).kind(), ErrorKind::TypeMismatch);
	assert_eq!(apply_err(&mut host, "Badge", Value::from(r#"{"Weight": "heavy"}"#)).kind(), ErrorKind::TypeMismatch);
	assert_eq!(read(&host, "Badge"), Value::from(r#"(Label="",Weight=0.000000)"#));
}

#[test]
fn unknown_struct_fields_follow_policy() {
	let mut host = actor_host();
	let hero = root(&host, HERO);
	let badge = actor_prop(&host, "Badge");
	let input = Value::from(r#"{"Label": "gate", "Colour": "red"}"#);

	let err = apply_property_with(&mut host, &hero, &badge, &input, &ApplyOptions::strict()).expect_err("strict rejects");
	assert_eq!(err.kind(), ErrorKind::UnresolvedName);
	assert_eq!(err.to_string(), "field 'Colour' not found in struct 'Tag'");
	assert_eq!(read(&host, "Badge"), Value::from(r#"(Label="",Weight=0.000000)"#));

	apply_property(&mut host, &hero, &badge, &input).expect("default ignores");
	assert_eq!(read(&host, "Badge"), Value::from(r#"(Label="gate",Weight=0.000000)"#));
}

#[test]
fn case_folded_struct_keys_cannot_set_one_field_twice() {
	let mut host = actor_host();
	let hero = root(&host, HERO);
	let badge = actor_prop(&host, "Badge");

	let err = apply_property(&mut host, &hero, &badge, &Value::from(r#"{"Label": "a", "label": "b"}"#)).expect_err("collision fails");
	assert_eq!(err.kind(), ErrorKind::TypeMismatch);
	assert_eq!(err.to_string(), r#"type mismatch for Tag.Label: expected one key per field, got keys "Label" and "label""#);
	assert_eq!(read(&host, "Badge"), Value::from(r#"(Label="",Weight=0.000000)"#));

	apply_property(&mut host, &hero, &badge, &Value::from(r#"{"label": "b", "weight": 2}"#)).expect("folded keys apply");
	assert_eq!(read(&host, "Badge"), Value::from(r#"(Label="b",Weight=2.000000)"#));
}

#[test]
fn struct_depth_limit_applies() {
	let mut host = actor_host();
	let hero = root(&host, HERO);
	let badge = actor_prop(&host, "Badge");
	let opt = ApplyOptions {
		max_struct_depth: 0,
		..ApplyOptions::default()
	};

	let err = apply_property_with(&mut host, &hero, &badge, &Value::from("{}"), &opt).expect_err("depth applies");
	assert!(matches!(err, PropError::DepthExceeded { max_depth: 0 }), "{err:?}");
}

#[test]
fn stale_container_and_foreign_property_are_invalid_input() {
	let mut host = actor_host();
	let hero = root(&host, HERO);

	let foreign = Property::new("Health", PropertyKind::Float);
	let err = apply_property(&mut host, &hero, &foreign, &Value::Number(1.0)).expect_err("foreign rejected");
	assert!(matches!(err, PropError::InvalidProperty { .. }), "{err:?}");

	let health = actor_prop(&host, "Health");
	host.destroy(HERO);
	let err = apply_property(&mut host, &hero, &health, &Value::Number(1.0)).expect_err("stale rejected");
	assert_eq!(err.kind(), ErrorKind::InvalidInput);
	assert!(matches!(err, PropError::InvalidContainer { .. }), "{err:?}");
}
