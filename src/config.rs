//! Configuration

// Imports
use {
	crate::{util, AppError, Args},
	std::{
		path::{Path, PathBuf},
		time::Duration,
	},
	tokio::fs,
};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "mkcheck.yaml";

/// Config file.
///
/// Every field is optional, and is overridden by the command line.
#[derive(PartialEq, Eq, Clone, Default, Debug)]
#[derive(serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Build tool program and any leading arguments
	pub tool: Option<Vec<String>>,

	/// Artifact
	pub artifact: Option<String>,

	/// Clean target
	pub clean_target: Option<String>,

	/// Invocation timeout in milliseconds
	pub timeout_ms: Option<u64>,

	/// Keep going
	pub keep_going: Option<bool>,

	/// Keep failed files
	pub keep_failed_files: Option<bool>,
}

impl Config {
	/// Loads the config at `config_path`
	pub async fn load(config_path: &Path) -> Result<Self, AppError> {
		let contents = fs::read_to_string(config_path)
			.await
			.map_err(AppError::read_file(config_path))?;

		// Note: `serde_yaml` fails on empty documents, but an empty config is fine
		if contents.trim().is_empty() {
			return Ok(Self::default());
		}

		serde_yaml::from_str(&contents).map_err(AppError::parse_yaml(config_path))
	}

	/// Finds and loads the config for `workdir`.
	///
	/// If `config_path` is given it must exist, else `mkcheck.yaml` in `workdir`
	/// is used if it exists, else the default config is returned.
	pub async fn find(workdir: &Path, config_path: Option<&Path>) -> Result<Self, AppError> {
		if let Some(config_path) = config_path {
			return Self::load(config_path).await;
		}

		let config_path = workdir.join(CONFIG_FILE_NAME);
		match util::fs_try_exists_symlink(&config_path)
			.await
			.map_err(AppError::check_file(&config_path))?
		{
			true => {
				tracing::debug!(?config_path, "Found config");
				Self::load(&config_path).await
			},
			false => {
				tracing::debug!(?config_path, "No config found, using defaults");
				Ok(Self::default())
			},
		}
	}
}

/// Harness settings, after merging the config with the command line
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Settings {
	/// Working directory
	pub workdir: PathBuf,

	/// Build tool program and any leading arguments
	pub tool: Vec<String>,

	/// Artifact
	pub artifact: String,

	/// Clean target
	pub clean_target: String,

	/// Timeout for each invocation
	pub timeout: Duration,

	/// Keep going
	pub keep_going: bool,

	/// Keep failed files
	pub keep_failed_files: bool,
}

impl Settings {
	/// Default build tool
	pub const DEFAULT_TOOL: &'static str = "make";

	/// Default artifact
	pub const DEFAULT_ARTIFACT: &'static str = "program";

	/// Default clean target
	pub const DEFAULT_CLEAN_TARGET: &'static str = "clean";

	/// Default invocation timeout
	pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

	/// Merges `args` over `config`.
	///
	/// Passing `--tool` replaces the whole configured tool, including its
	/// arguments. `--tool-arg`s are appended.
	pub fn resolve(workdir: PathBuf, config: Config, args: &Args) -> Self {
		let mut tool = match &args.tool {
			Some(tool) => vec![tool.clone()],
			None => config.tool.unwrap_or_else(|| vec![Self::DEFAULT_TOOL.to_owned()]),
		};
		tool.extend(args.tool_args.iter().cloned());

		let timeout = args
			.timeout_ms
			.or(config.timeout_ms)
			.map_or(Self::DEFAULT_TIMEOUT, Duration::from_millis);

		Self {
			workdir,
			tool,
			artifact: args
				.artifact
				.clone()
				.or(config.artifact)
				.unwrap_or_else(|| Self::DEFAULT_ARTIFACT.to_owned()),
			clean_target: args
				.clean_target
				.clone()
				.or(config.clean_target)
				.unwrap_or_else(|| Self::DEFAULT_CLEAN_TARGET.to_owned()),
			timeout,
			keep_going: args.keep_going || config.keep_going.unwrap_or(false),
			keep_failed_files: args.keep_failed_files || config.keep_failed_files.unwrap_or(false),
		}
	}
}
