//! Working directory

// Imports
use {
	crate::{guard::FileGuard, util, AppError},
	std::path::{Path, PathBuf},
	tokio::fs,
};

/// Working directory shared by all checks.
///
/// Every file a check touches and every command it runs is relative to this
/// directory. The process' current directory is never changed.
#[derive(Clone, Debug)]
pub struct Workdir {
	/// Path
	path: PathBuf,
}

impl Workdir {
	/// Creates a new working directory handle
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// Returns the path of this directory
	#[must_use]
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Returns the path of `file` within this directory
	#[must_use]
	pub fn join(&self, file: impl AsRef<Path>) -> PathBuf {
		self.path.join(file)
	}

	/// Checks if `file` is a regular file
	pub async fn is_file(&self, file: &str) -> Result<bool, AppError> {
		let file_path = self.join(file);
		util::fs_is_file(&file_path)
			.await
			.map_err(AppError::check_file(file_path))
	}

	/// Reads `file`, if it's a regular file
	pub async fn read(&self, file: &str) -> Result<Option<String>, AppError> {
		let file_path = self.join(file);
		util::fs_read_file_opt(&file_path)
			.await
			.map_err(AppError::read_file(file_path))
	}

	/// Creates an empty `file`, returning a guard that removes it.
	///
	/// Any existing file is truncated.
	pub async fn touch(&self, file: &str, keep_on_failure: bool) -> Result<FileGuard, AppError> {
		let file_path = self.join(file);
		fs::write(&file_path, "")
			.await
			.map_err(AppError::create_file(&file_path))?;
		tracing::debug!(?file_path, "Created file");

		Ok(FileGuard::new(file_path, keep_on_failure))
	}
}
