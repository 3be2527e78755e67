//! `mkcheck` smoke-test harness for make-like build tools

// Lints
#![allow(
	clippy::print_stdout,
	clippy::print_stderr,
	reason = "We're a binary that should talk to the user"
)]

// Modules
mod args;
pub mod check;
pub mod checks;
mod config;
mod error;
mod guard;
mod invoke;
pub mod runner;
mod util;
mod workdir;

// Exports
pub use self::{
	args::Args,
	config::{Config, Settings},
	error::AppError,
	guard::FileGuard,
	invoke::Invocation,
	runner::{Outcome, Report, Runner},
	workdir::Workdir,
};

// Imports
use {
	self::check::{Check, CheckEnv},
	std::env,
};

/// A harness ready to run
#[derive(Clone, Debug)]
pub struct Harness {
	/// Runner
	runner: Runner,

	/// Selected checks
	checks: Vec<Check>,
}

impl Harness {
	/// Creates a harness from the command line.
	///
	/// Resolves the working directory and config, and selects the checks to run.
	pub async fn from_args(args: &Args) -> Result<Self, AppError> {
		let workdir = match &args.dir {
			Some(dir) => dir.clone(),
			None => env::current_dir().map_err(AppError::get_current_dir())?,
		};
		tracing::debug!(?workdir, "Working directory");

		let config = Config::find(&workdir, args.config_path.as_deref()).await?;
		tracing::trace!(?config, "Loaded config");

		let settings = Settings::resolve(workdir, config, args);
		tracing::debug!(?settings, "Settings");

		let checks = checks::standard(&settings.artifact, &settings.clean_target);
		let checks = Runner::select(checks, &args.checks)?;

		Ok(Self::new(settings, checks))
	}

	/// Creates a harness from settings and checks
	#[must_use]
	pub fn new(settings: Settings, checks: Vec<Check>) -> Self {
		let env = CheckEnv {
			workdir:           Workdir::new(settings.workdir),
			tool:              settings.tool,
			timeout:           settings.timeout,
			keep_failed_files: settings.keep_failed_files,
		};

		Self {
			runner: Runner::new(env, settings.keep_going),
			checks,
		}
	}

	/// Returns the selected checks
	#[must_use]
	pub fn checks(&self) -> &[Check] {
		&self.checks
	}

	/// Returns the working directory
	#[must_use]
	pub fn workdir(&self) -> &Workdir {
		&self.runner.env().workdir
	}

	/// Runs all selected checks
	pub async fn run(&self) -> Report {
		self.runner.run(&self.checks).await
	}
}

/// Runs the harness with `args`, reporting each check on stdout.
///
/// Returns an error if any check failed.
pub async fn run(args: Args) -> Result<(), AppError> {
	let harness = Harness::from_args(&args).await?;

	if args.list {
		for check in harness.checks() {
			println!("{}\t{}", check.name, check.description);
		}
		return Ok(());
	}

	tracing::info!(
		workdir = ?harness.workdir().path(),
		"Running {} checks",
		harness.checks().len()
	);
	let report = harness.run().await;
	for (name, outcome) in report.outcomes() {
		match outcome {
			Outcome::Passed => println!("{name}: ok"),
			Outcome::Failed(_) => println!("{name}: FAILED"),
			Outcome::Skipped => println!("{name}: skipped"),
		}
	}

	report.into_result()
}

