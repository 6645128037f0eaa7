//! File processing for rtlify.
//!
//! This module handles:
//! - Discovering candidate files under a components root
//! - Rewriting each file in place, only when its content changes
//! - Collecting per-file outcomes into a summary

pub mod discover;

pub use discover::{Discovered, find_files};

use crate::error::{Result, RtlifyError};
use crate::transform::DocumentProcessor;
use std::path::{Path, PathBuf};

/// Whether changed files are written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
	/// Persist changed content.
	Write,

	/// Only report which files would change.
	Check,
}

/// What happened to a single file.
#[derive(Debug)]
pub enum FileOutcome {
	/// Content changed (and was written, unless checking).
	Updated,

	/// No rule changed the content.
	Unchanged,

	/// The file could not be read, traversed or written.
	Failed(RtlifyError),
}

/// Outcome for one path.
#[derive(Debug)]
pub struct FileReport {
	pub path: PathBuf,
	pub outcome: FileOutcome,
}

/// Aggregated outcomes for a batch.
#[derive(Debug, Default)]
pub struct Summary {
	/// One report per file that was processed.
	pub reports: Vec<FileReport>,

	/// Directory entries that could not be traversed. Not counted in `total`.
	pub skipped: Vec<FileReport>,
}

impl Summary {
	/// Number of files processed.
	pub fn total(&self) -> usize {
		self.reports.len()
	}

	/// Number of directory entries that could not be traversed.
	pub fn skipped(&self) -> usize {
		self.skipped.len()
	}

	pub fn updated(&self) -> usize {
		self.count(|o| matches!(o, FileOutcome::Updated))
	}

	pub fn unchanged(&self) -> usize {
		self.count(|o| matches!(o, FileOutcome::Unchanged))
	}

	pub fn failed(&self) -> usize {
		self.count(|o| matches!(o, FileOutcome::Failed(_)))
	}

	fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
		self.reports.iter().filter(|r| pred(&r.outcome)).count()
	}
}

/// Rewrite a single file.
///
/// Returns true when the content changed. In [`WriteMode::Check`] nothing is
/// written.
pub fn process_file(path: &Path, processor: &DocumentProcessor, mode: WriteMode) -> Result<bool> {
	let content = std::fs::read_to_string(path).map_err(|source| RtlifyError::FileReadError {
		path: path.to_path_buf(),
		source,
	})?;

	let Some(rewritten) = processor.rewrite(&content) else {
		return Ok(false);
	};

	if mode == WriteMode::Write {
		std::fs::write(path, rewritten).map_err(|source| RtlifyError::FileWriteError {
			path: path.to_path_buf(),
			source,
		})?;
	}

	Ok(true)
}

/// Rewrite every file in `paths`.
///
/// A failure on one file is recorded and does not stop the others.
pub fn process_files<I>(paths: I, processor: &DocumentProcessor, mode: WriteMode) -> Summary
where
	I: IntoIterator<Item = PathBuf>,
{
	let mut summary = Summary::default();

	for path in paths {
		let outcome = match process_file(&path, processor, mode) {
			Ok(true) => {
				tracing::info!(path = %path.display(), "updated");
				FileOutcome::Updated
			}
			Ok(false) => {
				tracing::debug!(path = %path.display(), "no changes needed");
				FileOutcome::Unchanged
			}
			Err(e) => {
				tracing::warn!(path = %path.display(), error = %e, "failed to process file");
				FileOutcome::Failed(e)
			}
		};
		summary.reports.push(FileReport { path, outcome });
	}

	summary
}

/// Process discovered files, recording traversal errors as skipped entries.
pub fn process_discovered(
	discovered: Discovered,
	processor: &DocumentProcessor,
	mode: WriteMode,
) -> Summary {
	let mut summary = process_files(discovered.files, processor, mode);

	for error in discovered.errors {
		let path = match &error {
			RtlifyError::WalkError { path, .. } => path.clone(),
			_ => PathBuf::new(),
		};
		tracing::warn!(path = %path.display(), error = %error, "failed to read directory entry");
		summary.skipped.push(FileReport {
			path,
			outcome: FileOutcome::Failed(error),
		});
	}

	summary
}
