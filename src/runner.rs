//! Check runner

// Imports
use {
	crate::{
		check::{Check, CheckEnv},
		AppError,
	},
	indexmap::IndexMap,
	std::time::Instant,
};

/// Outcome of a single check
#[derive(Debug)]
pub enum Outcome {
	/// Passed
	Passed,

	/// Failed
	Failed(AppError),

	/// Not run, due to an earlier failure
	Skipped,
}

impl Outcome {
	/// Returns if this outcome is a failure
	#[must_use]
	pub const fn is_failed(&self) -> bool {
		matches!(self, Self::Failed(_))
	}
}

/// Report of a run, with the outcome of every selected check, in order
#[derive(Debug, Default)]
pub struct Report {
	/// Outcomes
	outcomes: IndexMap<String, Outcome>,
}

impl Report {
	/// Returns the outcome of check `name`, if it was selected
	#[must_use]
	pub fn outcome(&self, name: &str) -> Option<&Outcome> {
		self.outcomes.get(name)
	}

	/// Returns all outcomes, in order
	pub fn outcomes(&self) -> impl Iterator<Item = (&str, &Outcome)> {
		self.outcomes.iter().map(|(name, outcome)| (name.as_str(), outcome))
	}

	/// Returns the number of failed checks
	#[must_use]
	pub fn failed(&self) -> usize {
		self.outcomes.values().filter(|outcome| outcome.is_failed()).count()
	}

	/// Returns an error if any check failed
	pub fn into_result(self) -> Result<(), AppError> {
		match self.failed() {
			0 => Ok(()),
			failed => Err(AppError::ChecksFailed {
				failed,
				total: self.outcomes.len(),
			}),
		}
	}
}

/// Check runner
#[derive(Clone, Debug)]
pub struct Runner {
	/// Environment
	env: CheckEnv,

	/// If we should keep going after a check fails
	keep_going: bool,
}

impl Runner {
	/// Creates a new runner
	#[must_use]
	pub const fn new(env: CheckEnv, keep_going: bool) -> Self {
		Self { env, keep_going }
	}

	/// Returns the environment checks run in
	#[must_use]
	pub const fn env(&self) -> &CheckEnv {
		&self.env
	}

	/// Selects the checks named `names` from `checks`.
	///
	/// The order of `checks` is kept, regardless of the order of `names`.
	/// If `names` is empty, all checks are selected.
	pub fn select(checks: Vec<Check>, names: &[String]) -> Result<Vec<Check>, AppError> {
		if names.is_empty() {
			return Ok(checks);
		}

		if let Some(name) = names
			.iter()
			.find(|name| !checks.iter().any(|check| &check.name == *name))
		{
			return Err(AppError::UnknownCheck {
				name:  name.clone(),
				known: checks.into_iter().map(|check| check.name).collect(),
			});
		}

		Ok(checks.into_iter().filter(|check| names.contains(&check.name)).collect())
	}

	/// Runs all `checks`, in order.
	///
	/// Unless keeping going, the first failure skips all remaining checks.
	pub async fn run(&self, checks: &[Check]) -> Report {
		let mut report = Report::default();
		let mut failed = false;

		for check in checks {
			if failed && !self.keep_going {
				tracing::debug!(check = %check.name, "Skipping check");
				let _ = report.outcomes.insert(check.name.clone(), Outcome::Skipped);
				continue;
			}

			tracing::debug!(check = %check.name, description = %check.description, "Running check");
			let start = Instant::now();
			let outcome = match check.run(&self.env).await {
				Ok(()) => {
					tracing::info!(check = %check.name, "Check passed in {:.2?}", start.elapsed());
					Outcome::Passed
				},
				Err(err) => {
					let err = AppError::check(&check.name)(err);
					tracing::error!(err = %err.pretty(), "Check failed");
					failed = true;
					Outcome::Failed(err)
				},
			};

			let _ = report.outcomes.insert(check.name.clone(), outcome);
		}

		report
	}
}
