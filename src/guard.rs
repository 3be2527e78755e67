//! File guards

// Imports
use {
	crate::AppError,
	std::{fs, io, path::PathBuf},
};

/// Guard over a file created as a check precondition.
///
/// The file is removed by [`release`](Self::release) once the check
/// succeeds. If the guard is instead dropped (because the check failed
/// before releasing it), the file is removed as well, unless the guard
/// was created with `keep_on_failure`, in which case it's left behind
/// for inspection.
#[derive(Debug)]
#[must_use = "Dropping the guard removes the file"]
pub struct FileGuard {
	/// File path, if not yet released
	file_path: Option<PathBuf>,

	/// If the file should be kept when dropped without being released
	keep_on_failure: bool,
}

impl FileGuard {
	/// Creates a new guard over `file_path`
	pub fn new(file_path: impl Into<PathBuf>, keep_on_failure: bool) -> Self {
		Self {
			file_path: Some(file_path.into()),
			keep_on_failure,
		}
	}

	/// Releases the guard, removing the file.
	///
	/// A file that is already gone isn't an error.
	pub async fn release(mut self) -> Result<(), AppError> {
		let Some(file_path) = self.file_path.take() else {
			return Ok(());
		};

		match tokio::fs::remove_file(&file_path).await {
			Ok(()) => {
				tracing::debug!(?file_path, "Removed file");
				Ok(())
			},
			Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
			Err(err) => Err(AppError::remove_file(file_path)(err)),
		}
	}
}

impl Drop for FileGuard {
	fn drop(&mut self) {
		let Some(file_path) = self.file_path.take() else {
			return;
		};

		if self.keep_on_failure {
			tracing::info!(?file_path, "Keeping file of failed check for inspection");
			return;
		}

		match fs::remove_file(&file_path) {
			Ok(()) => tracing::debug!(?file_path, "Removed file of failed check"),
			Err(err) if err.kind() == io::ErrorKind::NotFound => (),
			Err(err) => tracing::warn!(?file_path, ?err, "Unable to remove file of failed check"),
		}
	}
}
