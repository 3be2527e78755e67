//! Utilities for all integration tests

// Lints
#![allow(
	dead_code,
	reason = "This module is used from many tests, which might not use everything"
)]

// Imports
use {
	anyhow::Context,
	mkcheck::{Args, Harness, Report},
	std::{fs, path::Path},
	tempdir::TempDir,
};

/// Build tool that behaves like `make` with a phony `clean` target
pub const PHONY_TOOL: &str = r#"
case "$1" in
	"") printf '#!/bin/sh\n' > program && chmod +x program ;;
	clean) rm -f program ;;
	*) echo "unknown target: $1" >&2; exit 2 ;;
esac
"#;

/// Build tool whose `clean` also removes a file named `clean`
pub const CLOBBERING_TOOL: &str = r#"
case "$1" in
	"") printf '#!/bin/sh\n' > program && chmod +x program ;;
	clean) rm -f program clean ;;
	*) exit 2 ;;
esac
"#;

/// Build tool that treats `clean` as up to date when a file named `clean` exists
pub const NON_PHONY_TOOL: &str = r#"
case "$1" in
	"") printf '#!/bin/sh\n' > program && chmod +x program ;;
	clean) [ -e clean ] || rm -f program ;;
	*) exit 2 ;;
esac
"#;

/// Creates a directory with a `tool.sh` build tool script
pub fn with_tool(script: &str) -> Result<TempDir, anyhow::Error> {
	let temp_dir = TempDir::new("mkcheck").context("Unable to create temporary directory")?;
	fs::write(temp_dir.path().join("tool.sh"), script).context("Unable to write build tool")?;

	Ok(temp_dir)
}

/// Returns arguments to run in `dir` using its `tool.sh`
pub fn args(dir: &Path) -> Args {
	Args {
		dir: Some(dir.to_owned()),
		tool: Some("sh".to_owned()),
		tool_args: vec!["tool.sh".to_owned()],
		..Args::default()
	}
}

/// Runs the harness with `args` and returns its report
pub async fn run_report(args: &Args) -> Result<Report, anyhow::Error> {
	tracing::info!(?args, "Arguments");
	let harness = Harness::from_args(args).await.context("Unable to create harness")?;

	Ok(harness.run().await)
}

/// Checks if `file` is a regular file within `dir`
pub fn is_file(dir: &Path, file: &str) -> Result<bool, anyhow::Error> {
	let path = dir.join(file);
	match fs::metadata(&path) {
		Ok(metadata) => Ok(metadata.is_file()),
		Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
		Err(err) => Err(err).with_context(|| format!("Unable to check {path:?}")),
	}
}
