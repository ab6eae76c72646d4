use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use propmarshal_testkit::{fixture_path as shared_fixture_path, target_dir as workspace_target_dir};

static PROPMARSHAL_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn level_fixture() -> String {
	shared_fixture_path("level.json").to_string_lossy().into_owned()
}

pub(crate) fn run_propmarshal(args: &[&str]) -> Output {
	Command::new(propmarshal_bin()).args(args).output().expect("propmarshal command executes")
}

pub(crate) fn run_propmarshal_json(args: &[&str]) -> serde_json::Value {
	let output = run_propmarshal(args);
	assert!(
		output.status.success(),
		"propmarshal command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

/// Run a command expected to fail and return its stderr.
pub(crate) fn run_propmarshal_err(args: &[&str]) -> String {
	let output = run_propmarshal(args);
	assert_eq!(output.status.code(), Some(1), "expected exit status 1, got {}", output.status);
	String::from_utf8_lossy(&output.stderr).into_owned()
}

fn propmarshal_bin() -> &'static PathBuf {
	PROPMARSHAL_BIN.get_or_init(resolve_propmarshal_bin)
}

fn resolve_propmarshal_bin() -> PathBuf {
	if let Some(path) = option_env!("CARGO_BIN_EXE_propmarshal") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let mut bin = workspace_target_dir().join("debug");
	bin.push(if cfg!(windows) { "propmarshal.exe" } else { "propmarshal" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "propmarshal"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build propmarshal binary at {}", bin.display());

	bin
}
