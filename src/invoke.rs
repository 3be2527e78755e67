//! External invocations

// Imports
use {
	crate::AppError,
	itertools::Itertools,
	std::{path::Path, process::Stdio, time::Duration},
	tokio::{process::Command, time},
};

/// An invocation of the build tool
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Invocation {
	/// Program followed by all arguments
	cmd: Vec<String>,
}

impl Invocation {
	/// Creates an invocation of `tool` with extra arguments `args`
	pub fn new<I>(tool: &[String], args: I) -> Self
	where
		I: IntoIterator<Item: Into<String>>,
	{
		let cmd = tool.iter().cloned().chain(args.into_iter().map(Into::into)).collect();
		Self { cmd }
	}

	/// Returns the full command
	#[must_use]
	pub fn cmd(&self) -> &[String] {
		&self.cmd
	}

	/// Runs this invocation in `cwd`, waiting up to `timeout` for it to exit.
	///
	/// If the timeout elapses, the process is killed.
	pub async fn run(&self, cwd: &Path, timeout: Duration) -> Result<(), AppError> {
		let (program, args) = self.cmd.split_first().ok_or(AppError::InvocationEmpty)?;

		let mut cmd = Command::new(program);
		cmd.args(args)
			.current_dir(cwd)
			.stdin(Stdio::null())
			.kill_on_drop(true);

		tracing::info!(target: "mkcheck_exec", "{}", self.cmd.iter().format(" "));
		let mut child = cmd.spawn().map_err(AppError::spawn_command(&self.cmd))?;

		let res = time::timeout(timeout, child.wait()).await;
		let status = match res {
			Ok(status) => status.map_err(AppError::wait_command(&self.cmd))?,
			Err(_) => {
				if let Err(err) = child.kill().await {
					tracing::warn!(cmd = ?self.cmd, ?err, "Unable to kill timed out command");
				}

				return Err(AppError::Timeout {
					cmd: self.cmd.clone(),
					timeout,
				});
			},
		};
		tracing::trace!(cmd = ?self.cmd, ?status, "Command exited");

		match status.success() {
			true => Ok(()),
			false => Err(AppError::Invocation {
				cmd: self.cmd.clone(),
				status,
			}),
		}
	}
}
