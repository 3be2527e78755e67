//! `mkcheck` smoke-test harness for make-like build tools

// Lints
#![allow(clippy::print_stderr, reason = "We're a binary that should talk to the user")]

// Modules
mod logger;

// Imports
use {
	clap::Parser,
	mkcheck::{AppError, Args},
	std::process::ExitCode,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
	// Get all args
	let args = Args::parse();

	// Initialize the logger
	logger::init(args.verbose);
	tracing::trace!(?args, "Arguments");

	match mkcheck::run(args).await {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			// Note: Failed checks were already logged by the runner
			if !matches!(err, AppError::ChecksFailed { .. }) {
				tracing::error!(err = %err.pretty(), "Unable to run checks");
			}
			eprintln!("Error: {err}");
			ExitCode::FAILURE
		},
	}
}
