//! Logger

// Imports
use {
	std::{env, env::VarError},
	tracing::metadata::LevelFilter,
	tracing_subscriber::{prelude::*, EnvFilter},
};

/// Initializes the logger.
///
/// `verbose` raises the default level from `INFO` to `DEBUG` (1) or `TRACE` (2+).
/// `RUST_LOG` still takes precedence.
pub fn init(verbose: u8) {
	// Warnings to emit after configuring the logger
	let mut warnings = vec![];

	// Check if we need to use colors
	let log_use_color = match env::var("RUST_LOG_COLOR").map(|var| var.to_lowercase()).as_deref() {
		// By default / `1` / `yes` / `true`, use colors
		Err(VarError::NotPresent) | Ok("1" | "yes" | "true") => true,

		// On `0`, `no`, `false`, don't
		Ok("0" | "no" | "false") => false,

		// Else don't use colors, but warn
		Ok(env) => {
			warnings.push(format!(
				"Ignoring unknown `RUST_LOG_COLOR` value: {env:?}, expected `0`, `1`, `yes`, `no`, `true`, `false`"
			));
			false
		},
		Err(VarError::NotUnicode(err)) => {
			warnings.push(format!("Ignoring non-utf8 `RUST_LOG_COLOR`: {err:?}"));
			false
		},
	};

	let default_level = match verbose {
		0 => LevelFilter::INFO,
		1 => LevelFilter::DEBUG,
		_ => LevelFilter::TRACE,
	};

	// Then create the terminal layer
	// Note: Logs go to stderr, stdout is reserved for the check report
	let fmt_layer = tracing_subscriber::fmt::layer()
		.with_ansi(log_use_color)
		.with_writer(std::io::stderr)
		.with_filter(
			EnvFilter::builder()
				.with_default_directive(default_level.into())
				.from_env_lossy(),
		);

	// Finally initialize
	tracing_subscriber::registry().with(fmt_layer).init();

	// And emit any warnings
	for warning in warnings {
		tracing::warn!(target: "mkcheck_log", "{warning}");
	}
}
