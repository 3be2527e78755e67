// Lints
#![expect(clippy::tests_outside_test_module, reason = "We're an integration test")]

// Modules
mod util;

// Imports
use mkcheck::{checks, AppError, Args, Outcome};

/// Returns the assertion message of a failed check
fn assertion_message(outcome: Option<&Outcome>) -> Option<&str> {
	match outcome {
		Some(Outcome::Failed(err)) => match err.kind() {
			AppError::Assertion { message, .. } => Some(message.as_str()),
			_ => None,
		},
		_ => None,
	}
}

/// A tool that deletes the colliding file fails the phony check, and the
/// file is cleaned up afterwards
#[tokio::test]
#[tracing_test::traced_test]
async fn clobbered_file() -> Result<(), anyhow::Error> {
	let temp_dir = util::with_tool(util::CLOBBERING_TOOL)?;
	let args = Args {
		checks: vec![checks::PHONY_CLEAN.to_owned()],
		..util::args(temp_dir.path())
	};

	let report = util::run_report(&args).await?;
	let message = assertion_message(report.outcome(checks::PHONY_CLEAN));
	anyhow::ensure!(
		message == Some("file incorrectly removed"),
		"Unexpected outcome: {report:?}"
	);

	Ok(())
}

/// A tool that treats `clean` as a file never removes the artifact
#[tokio::test]
#[tracing_test::traced_test]
async fn non_phony_target() -> Result<(), anyhow::Error> {
	let temp_dir = util::with_tool(util::NON_PHONY_TOOL)?;
	let args = util::args(temp_dir.path());

	let report = util::run_report(&args).await?;
	anyhow::ensure!(
		matches!(report.outcome(checks::BUILD), Some(Outcome::Passed)),
		"Unexpected outcome: {report:?}"
	);
	anyhow::ensure!(
		matches!(report.outcome(checks::CLEAN), Some(Outcome::Passed)),
		"Unexpected outcome: {report:?}"
	);
	let message = assertion_message(report.outcome(checks::PHONY_CLEAN));
	anyhow::ensure!(
		message == Some("artifact not removed by clean"),
		"Unexpected outcome: {report:?}"
	);

	// The colliding file is removed even though the check failed
	anyhow::ensure!(!util::is_file(temp_dir.path(), "clean")?, "Colliding file was left behind");

	Ok(())
}

/// Files of failed checks are kept when asked to
#[tokio::test]
#[tracing_test::traced_test]
async fn keep_failed_files() -> Result<(), anyhow::Error> {
	let temp_dir = util::with_tool(util::NON_PHONY_TOOL)?;
	let args = Args {
		checks: vec![checks::PHONY_CLEAN.to_owned()],
		keep_failed_files: true,
		..util::args(temp_dir.path())
	};

	let res = mkcheck::run(args).await;
	anyhow::ensure!(
		matches!(res, Err(AppError::ChecksFailed { failed: 1, total: 1 })),
		"Expected failed checks, found {res:?}"
	);
	anyhow::ensure!(util::is_file(temp_dir.path(), "clean")?, "Colliding file was removed");

	Ok(())
}
