use crate::config::parser::parse_config_file;
use crate::config::types::LoadedConfig;
use crate::error::{Result, RtlifyError};
use std::path::{Path, PathBuf};

/// File name looked up in each directory of the cascade.
pub const CONFIG_FILE_NAME: &str = ".rtlify.toml";

/// Find and load the nearest config file.
///
/// The lookup order is:
/// 1. `.rtlify.toml` in `start_dir`, then each parent directory
/// 2. `~/.rtlify.toml`
///
/// The first file found wins. Returns `None` when there is no config at all.
pub fn discover_config(start_dir: &Path) -> Result<Option<LoadedConfig>> {
	for dir in start_dir.ancestors() {
		let config_path = dir.join(CONFIG_FILE_NAME);
		if config_path.is_file() {
			return load_from(config_path).map(Some);
		}
	}

	let user_path = user_config_path()?;
	if user_path.is_file() {
		return load_from(user_path).map(Some);
	}

	Ok(None)
}

/// Load the config that applies to `start_dir`, or `explicit` if given.
///
/// Falls back to built-in defaults when nothing is found.
pub fn load_config(start_dir: &Path, explicit: Option<&Path>) -> Result<LoadedConfig> {
	if let Some(path) = explicit {
		return load_from(path.to_path_buf());
	}

	match discover_config(start_dir)? {
		Some(loaded) => Ok(loaded),
		None => {
			tracing::debug!("no config file found, using defaults");
			Ok(LoadedConfig::default())
		}
	}
}

fn load_from(path: PathBuf) -> Result<LoadedConfig> {
	let config = parse_config_file(&path)?;
	tracing::debug!(path = %path.display(), "loaded config");
	Ok(LoadedConfig {
		config,
		path: Some(path),
	})
}

/// Get the path to the user's config file.
pub fn user_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(RtlifyError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(CONFIG_FILE_NAME))
}
