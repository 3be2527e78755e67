//! Errors

// Imports
use {
	itertools::Itertools,
	std::{error::Error as StdError, fmt, io, path::PathBuf, process::ExitStatus, time::Duration},
};

/// App error
///
/// Error that will be bubbled up to main when a fatal error occurs
#[derive(Debug, thiserror::Error)]
pub enum AppError {
	/// Get current directory
	#[error("Unable to get current directory")]
	GetCurrentDir {
		/// Underlying error
		#[source]
		err: io::Error,
	},

	/// Check file
	#[error("Unable to check file {file_path:?}")]
	CheckFile {
		/// File we failed to check
		file_path: PathBuf,

		/// Underlying error
		#[source]
		err: io::Error,
	},

	/// Read file
	#[error("Unable to read file {file_path:?}")]
	ReadFile {
		/// File we failed to read
		file_path: PathBuf,

		/// Underlying error
		#[source]
		err: io::Error,
	},

	/// Create file
	#[error("Unable to create file {file_path:?}")]
	CreateFile {
		/// File we failed to create
		file_path: PathBuf,

		/// Underlying error
		#[source]
		err: io::Error,
	},

	/// Remove file
	#[error("Unable to remove file {file_path:?}")]
	RemoveFile {
		/// File we failed to remove
		file_path: PathBuf,

		/// Underlying error
		#[source]
		err: io::Error,
	},

	/// Parse yaml
	#[error("Unable to parse yaml file {yaml_path:?}")]
	ParseYaml {
		/// Yaml path
		yaml_path: PathBuf,

		/// Underlying error
		#[source]
		err: serde_yaml::Error,
	},

	/// Invocation was empty
	#[error("Build tool command was empty")]
	InvocationEmpty,

	/// Spawn command
	#[error("Unable to spawn {}", CmdDisplay(.cmd))]
	SpawnCommand {
		/// Command
		cmd: Vec<String>,

		/// Underlying error
		#[source]
		err: io::Error,
	},

	/// Wait for command
	#[error("Unable to wait for {}", CmdDisplay(.cmd))]
	WaitCommand {
		/// Command
		cmd: Vec<String>,

		/// Underlying error
		#[source]
		err: io::Error,
	},

	/// Command exited unsuccessfully
	#[error("Command {} exited with {status}", CmdDisplay(.cmd))]
	Invocation {
		/// Command
		cmd: Vec<String>,

		/// Exit status
		status: ExitStatus,
	},

	/// Command timed out
	#[error("Command {} did not finish within {timeout:?}", CmdDisplay(.cmd))]
	Timeout {
		/// Command
		cmd: Vec<String>,

		/// Timeout that elapsed
		timeout: Duration,
	},

	/// Assertion failed
	#[error("Assertion failed in check {check:?}: {message}")]
	Assertion {
		/// Check name
		check: String,

		/// Message
		message: String,

		/// Underlying error, if the assertion was caused by one
		#[source]
		err: Option<Box<Self>>,
	},

	/// Unknown check requested
	#[error("Unknown check {name:?}, expected one of: {}", .known.join(", "))]
	UnknownCheck {
		/// Requested name
		name: String,

		/// All known checks
		known: Vec<String>,
	},

	/// Check failed
	#[error("Check {name:?} failed")]
	Check {
		/// Check name
		name: String,

		/// Underlying error
		#[source]
		err: Box<Self>,
	},

	/// Exiting due to failed checks
	#[error("{failed} of {total} checks failed")]
	ChecksFailed {
		/// Number of failed checks
		failed: usize,

		/// Number of checks that were selected
		total: usize,
	},
}

/// Error shortcuts
///
/// These are functions that return functions to pass to `.map_err` to
/// specify a certain error.
impl AppError {
	pub fn get_current_dir() -> impl FnOnce(io::Error) -> Self {
		move |err| Self::GetCurrentDir { err }
	}

	pub fn check_file(file_path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
		move |err| Self::CheckFile {
			file_path: file_path.into(),
			err,
		}
	}

	pub fn read_file(file_path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
		move |err| Self::ReadFile {
			file_path: file_path.into(),
			err,
		}
	}

	pub fn create_file(file_path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
		move |err| Self::CreateFile {
			file_path: file_path.into(),
			err,
		}
	}

	pub fn remove_file(file_path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
		move |err| Self::RemoveFile {
			file_path: file_path.into(),
			err,
		}
	}

	pub fn parse_yaml(yaml_path: impl Into<PathBuf>) -> impl FnOnce(serde_yaml::Error) -> Self {
		move |err| Self::ParseYaml {
			yaml_path: yaml_path.into(),
			err,
		}
	}

	pub fn spawn_command(cmd: &[String]) -> impl FnOnce(io::Error) -> Self + '_ {
		move |err| Self::SpawnCommand { cmd: cmd.to_vec(), err }
	}

	pub fn wait_command(cmd: &[String]) -> impl FnOnce(io::Error) -> Self + '_ {
		move |err| Self::WaitCommand { cmd: cmd.to_vec(), err }
	}

	pub fn check(name: impl Into<String>) -> impl FnOnce(Self) -> Self {
		move |err| Self::Check {
			name: name.into(),
			err:  Box::new(err),
		}
	}

	/// Creates an assertion error without an underlying cause
	pub fn assertion(check: impl Into<String>, message: impl Into<String>) -> Self {
		Self::Assertion {
			check:   check.into(),
			message: message.into(),
			err:     None,
		}
	}

	/// Returns the innermost error kind, skipping any `Check` wrappers
	#[must_use]
	pub fn kind(&self) -> &Self {
		match self {
			Self::Check { err, .. } => err.kind(),
			_ => self,
		}
	}

	/// Returns this error as a pretty-printable type, including all sources
	#[must_use]
	pub const fn pretty(&self) -> PrettyDisplay<'_> {
		PrettyDisplay(self)
	}
}

/// Pretty display for [`AppError`]
#[derive(Debug)]
pub struct PrettyDisplay<'a>(&'a AppError);

impl fmt::Display for PrettyDisplay<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)?;

		let mut source = self.0.source();
		while let Some(err) = source {
			write!(f, "\n  caused by: {err}")?;
			source = err.source();
		}

		Ok(())
	}
}

/// Display for a command's arguments
struct CmdDisplay<'a>(&'a [String]);

impl fmt::Display for CmdDisplay<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "`{}`", self.0.iter().format(" "))
	}
}
