//! Cli manager

// Imports
use std::path::PathBuf;

/// Data from the command line
#[derive(PartialEq, Eq, Clone, Default, Debug)]
#[derive(clap::Parser)]
#[clap(author, version, about)]
pub struct Args {
	/// Working directory.
	///
	/// The build description must be here. Defaults to the current directory
	#[clap(long = "dir", short = 'C')]
	pub dir: Option<PathBuf>,

	/// Config path.
	///
	/// Defaults to `mkcheck.yaml` in the working directory, if it exists
	#[clap(long = "config")]
	pub config_path: Option<PathBuf>,

	/// Build tool program.
	///
	/// Defaults to `make`
	#[clap(long = "tool")]
	pub tool: Option<String>,

	/// Extra leading argument for the build tool.
	///
	/// May be passed multiple times
	#[clap(long = "tool-arg", allow_hyphen_values = true)]
	pub tool_args: Vec<String>,

	/// Artifact produced by the default build.
	///
	/// Defaults to `program`
	#[clap(long = "artifact")]
	pub artifact: Option<String>,

	/// Target that removes all build outputs.
	///
	/// Defaults to `clean`
	#[clap(long = "clean-target")]
	pub clean_target: Option<String>,

	/// Timeout for each build tool invocation, in milliseconds
	#[clap(long = "timeout-ms")]
	pub timeout_ms: Option<u64>,

	/// Only run these checks.
	///
	/// Checks always run in their standard order
	#[clap(long = "check")]
	pub checks: Vec<String>,

	/// Keep running checks after one fails
	#[clap(long = "keep-going", short = 'k')]
	pub keep_going: bool,

	/// Keep files created by failed checks
	#[clap(long = "keep-failed-files")]
	pub keep_failed_files: bool,

	/// List all checks and exit
	#[clap(long = "list")]
	pub list: bool,

	/// Increase log verbosity
	#[clap(long = "verbose", short = 'v', action = clap::ArgAction::Count)]
	pub verbose: u8,
}
