use crate::error::{Result, RtlifyError};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Files found under a root, plus entries that could not be read.
#[derive(Debug, Default)]
pub struct Discovered {
	/// Matching files, sorted by path.
	pub files: Vec<PathBuf>,

	/// Traversal errors for entries that were skipped.
	pub errors: Vec<RtlifyError>,
}

/// Recursively collect files under `root` whose extension is in `extensions`.
///
/// Directories named in `exclude` are not descended into. An unreadable
/// entry is recorded in `errors` and traversal continues.
pub fn find_files(root: &Path, extensions: &[String], exclude: &[String]) -> Result<Discovered> {
	if !root.is_dir() {
		return Err(RtlifyError::RootNotFound {
			path: root.to_path_buf(),
		});
	}

	let mut discovered = Discovered::default();
	let walker = WalkDir::new(root)
		.sort_by_file_name()
		.into_iter()
		.filter_entry(|e| e.depth() == 0 || !is_excluded(e, exclude));

	for entry in walker {
		match entry {
			Ok(entry) => {
				if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
					discovered.files.push(entry.into_path());
				}
			}
			Err(source) => {
				let path = source.path().unwrap_or(root).to_path_buf();
				discovered.errors.push(RtlifyError::WalkError { path, source });
			}
		}
	}

	Ok(discovered)
}

fn is_excluded(entry: &DirEntry, exclude: &[String]) -> bool {
	entry.file_type().is_dir()
		&& entry
			.file_name()
			.to_str()
			.is_some_and(|name| exclude.iter().any(|ex| ex == name))
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
	path.extension()
		.and_then(OsStr::to_str)
		.is_some_and(|ext| extensions.iter().any(|want| want == ext))
}
