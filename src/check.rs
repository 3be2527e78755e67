//! Checks

// Imports
use {
	crate::{invoke::Invocation, workdir::Workdir, AppError},
	std::time::Duration,
};

/// Expected state of a file
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Expect {
	/// A regular file exists
	File,

	/// No regular file exists
	Missing,

	/// A regular file exists with exactly these contents
	Contents(String),
}

/// Check step
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Step {
	/// Create an empty file, removed once the check finishes
	Touch {
		/// File name
		file: String,
	},

	/// Invoke the build tool
	Invoke {
		/// Extra arguments to the build tool
		args: Vec<String>,

		/// Assertion message if the tool exits unsuccessfully.
		///
		/// When `None`, the exit status is reported as-is.
		on_failure: Option<String>,
	},

	/// Assert the state of a file
	Expect {
		/// File name
		file: String,

		/// Expected state
		expect: Expect,

		/// Assertion message
		message: String,
	},
}

/// Environment checks run in
#[derive(Clone, Debug)]
pub struct CheckEnv {
	/// Working directory
	pub workdir: Workdir,

	/// Build tool program and any leading arguments
	pub tool: Vec<String>,

	/// Timeout for each invocation
	pub timeout: Duration,

	/// If files created by a failed check should be kept
	pub keep_failed_files: bool,
}

/// A named check
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Check {
	/// Name
	pub name: String,

	/// Description
	pub description: String,

	/// Steps, in order
	pub steps: Vec<Step>,
}

impl Check {
	/// Creates a new check without any steps
	pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			name:        name.into(),
			description: description.into(),
			steps:       vec![],
		}
	}

	/// Adds a step creating `file`
	#[must_use]
	pub fn touch(mut self, file: impl Into<String>) -> Self {
		self.steps.push(Step::Touch { file: file.into() });
		self
	}

	/// Adds a step invoking the build tool with `args`
	#[must_use]
	pub fn invoke<I>(mut self, args: I) -> Self
	where
		I: IntoIterator<Item: Into<String>>,
	{
		self.steps.push(Step::Invoke {
			args:       args.into_iter().map(Into::into).collect(),
			on_failure: None,
		});
		self
	}

	/// Adds a step invoking the build tool with `args`, where failing is an assertion error
	#[must_use]
	pub fn invoke_or_fail<I>(mut self, args: I, message: impl Into<String>) -> Self
	where
		I: IntoIterator<Item: Into<String>>,
	{
		self.steps.push(Step::Invoke {
			args:       args.into_iter().map(Into::into).collect(),
			on_failure: Some(message.into()),
		});
		self
	}

	/// Adds a step asserting the state of `file`
	#[must_use]
	pub fn expect(mut self, file: impl Into<String>, expect: Expect, message: impl Into<String>) -> Self {
		self.steps.push(Step::Expect {
			file: file.into(),
			expect,
			message: message.into(),
		});
		self
	}

	/// Runs this check.
	///
	/// Stops at the first failing step. Files created by the check are
	/// removed on every exit path, unless `env.keep_failed_files` is set
	/// and the check failed.
	pub async fn run(&self, env: &CheckEnv) -> Result<(), AppError> {
		let mut guards = vec![];

		for step in &self.steps {
			match step {
				Step::Touch { file } => guards.push(env.workdir.touch(file, env.keep_failed_files).await?),

				Step::Invoke { args, on_failure } => {
					let invocation = Invocation::new(&env.tool, args);
					match (invocation.run(env.workdir.path(), env.timeout).await, on_failure) {
						(Ok(()), _) => (),
						(Err(err @ AppError::Invocation { .. }), Some(message)) =>
							return Err(AppError::Assertion {
								check:   self.name.clone(),
								message: message.clone(),
								err:     Some(Box::new(err)),
							}),
						(Err(err), _) => return Err(err),
					}
				},

				Step::Expect { file, expect, message } => {
					let holds = match expect {
						Expect::File => env.workdir.is_file(file).await?,
						Expect::Missing => !env.workdir.is_file(file).await?,
						Expect::Contents(contents) =>
							env.workdir.read(file).await?.as_deref() == Some(contents.as_str()),
					};
					tracing::debug!(check = %self.name, %file, ?expect, holds, "Checked file");

					if !holds {
						return Err(AppError::assertion(&self.name, message));
					}
				},
			}
		}

		for guard in guards {
			guard.release().await?;
		}

		Ok(())
	}
}
