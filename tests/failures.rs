// Lints
#![expect(clippy::tests_outside_test_module, reason = "We're an integration test")]

// Modules
mod util;

// Imports
use mkcheck::{checks, AppError, Args, Outcome};

/// Build tool whose default target fails
const FAILING_TOOL: &str = r#"
case "$1" in
	"") exit 1 ;;
	clean) rm -f program ;;
esac
"#;

/// Build tool that exits successfully without creating anything
const LAZY_TOOL: &str = "exit 0";

/// Build tool that hangs
const HANGING_TOOL: &str = "exec sleep 10";

/// A failing invocation aborts the remaining checks
#[tokio::test]
#[tracing_test::traced_test]
async fn invocation_failure() -> Result<(), anyhow::Error> {
	let temp_dir = util::with_tool(FAILING_TOOL)?;
	let report = util::run_report(&util::args(temp_dir.path())).await?;

	anyhow::ensure!(
		matches!(
			report.outcome(checks::BUILD),
			Some(Outcome::Failed(err)) if matches!(err.kind(), AppError::Invocation { .. })
		),
		"Unexpected outcome: {report:?}"
	);
	for name in [checks::CLEAN, checks::PHONY_CLEAN] {
		anyhow::ensure!(
			matches!(report.outcome(name), Some(Outcome::Skipped)),
			"Check {name:?} wasn't skipped: {report:?}"
		);
	}

	Ok(())
}

/// Keeping going runs every check
#[tokio::test]
#[tracing_test::traced_test]
async fn keep_going() -> Result<(), anyhow::Error> {
	let temp_dir = util::with_tool(FAILING_TOOL)?;
	let args = Args {
		keep_going: true,
		..util::args(temp_dir.path())
	};

	let report = util::run_report(&args).await?;
	anyhow::ensure!(report.failed() == 3, "Expected all checks to fail: {report:?}");

	let res = report.into_result();
	anyhow::ensure!(
		matches!(res, Err(AppError::ChecksFailed { failed: 3, total: 3 })),
		"Unexpected result {res:?}"
	);

	Ok(())
}

/// A successful build without an artifact is an assertion failure
#[tokio::test]
#[tracing_test::traced_test]
async fn missing_artifact() -> Result<(), anyhow::Error> {
	let temp_dir = util::with_tool(LAZY_TOOL)?;
	let report = util::run_report(&util::args(temp_dir.path())).await?;

	anyhow::ensure!(
		matches!(
			report.outcome(checks::BUILD),
			Some(Outcome::Failed(err))
				if matches!(err.kind(), AppError::Assertion { message, .. } if message == "artifact not created")
		),
		"Unexpected outcome: {report:?}"
	);

	Ok(())
}

/// A hanging tool times out instead of blocking forever
#[tokio::test]
#[tracing_test::traced_test]
async fn timeout() -> Result<(), anyhow::Error> {
	let temp_dir = util::with_tool(HANGING_TOOL)?;
	let args = Args {
		timeout_ms: Some(200),
		checks: vec![checks::BUILD.to_owned()],
		..util::args(temp_dir.path())
	};

	let report = util::run_report(&args).await?;
	anyhow::ensure!(
		matches!(
			report.outcome(checks::BUILD),
			Some(Outcome::Failed(err)) if matches!(err.kind(), AppError::Timeout { .. })
		),
		"Unexpected outcome: {report:?}"
	);

	Ok(())
}

/// A missing build tool can't be spawned
#[tokio::test]
#[tracing_test::traced_test]
async fn missing_tool() -> Result<(), anyhow::Error> {
	let temp_dir = util::with_tool("")?;
	let args = Args {
		dir: Some(temp_dir.path().to_owned()),
		tool: Some("mkcheck-missing-build-tool".to_owned()),
		checks: vec![checks::BUILD.to_owned()],
		..Args::default()
	};

	let res = mkcheck::run(args).await;
	anyhow::ensure!(
		matches!(res, Err(AppError::ChecksFailed { failed: 1, total: 1 })),
		"Unexpected result {res:?}"
	);

	Ok(())
}
