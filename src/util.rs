//! Utilities

// Imports
use {
	std::{io, path::Path},
	tokio::fs,
};

/// Async `std::fs_try_exists` using [`symlink_metadata`](fs::symlink_metadata).
pub async fn fs_try_exists_symlink(path: impl AsRef<Path> + Send) -> Result<bool, io::Error> {
	match fs::symlink_metadata(path).await {
		Ok(_) => Ok(true),
		Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
		Err(err) => Err(err),
	}
}

/// Checks if `path` is a regular file, following symlinks.
///
/// Missing paths are not an error, they're just not a file.
pub async fn fs_is_file(path: impl AsRef<Path> + Send) -> Result<bool, io::Error> {
	match fs::metadata(path).await {
		Ok(metadata) => Ok(metadata.is_file()),
		Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
		Err(err) => Err(err),
	}
}

/// Reads `path` as a string, if it's a regular file
pub async fn fs_read_file_opt(path: impl AsRef<Path> + Send) -> Result<Option<String>, io::Error> {
	let path = path.as_ref();
	if !self::fs_is_file(path).await? {
		return Ok(None);
	}

	match fs::read_to_string(path).await {
		Ok(contents) => Ok(Some(contents)),
		// Note: Might have been removed between the check and the read
		Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
		Err(err) => Err(err),
	}
}
