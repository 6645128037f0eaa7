use crate::error::RtlifyError;
use crate::rules::Rule;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Directory processed when neither the CLI nor a config names one.
pub const DEFAULT_ROOT: &str = "src/components";

/// Extension processed when neither the CLI nor a config names any.
pub const DEFAULT_EXTENSION: &str = "tsx";

/// Top-level configuration from a `.rtlify.toml` file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
	/// Directory to scan, relative to the config file's directory.
	pub root: PathBuf,

	/// File extensions to process, with or without a leading dot.
	pub extensions: Vec<String>,

	/// Directory names skipped during traversal.
	pub exclude: Vec<String>,

	/// Rules appended after the built-in table, in order.
	pub rules: Vec<Rule>,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			root: PathBuf::from(DEFAULT_ROOT),
			extensions: vec![DEFAULT_EXTENSION.to_string()],
			exclude: Vec::new(),
			rules: Vec::new(),
		}
	}
}

impl Config {
	/// Validate extensions and extra rules.
	pub fn validate(&self) -> Result<(), RtlifyError> {
		if self.extensions.is_empty() {
			return Err(RtlifyError::InvalidConfig {
				message: "extensions must not be empty".to_string(),
			});
		}

		if let Some(ext) = self
			.extensions
			.iter()
			.find(|ext| ext.trim_start_matches('.').is_empty())
		{
			return Err(RtlifyError::InvalidConfig {
				message: format!("invalid extension: {ext:?}"),
			});
		}

		for rule in &self.rules {
			if rule.pattern.is_empty() {
				return Err(RtlifyError::InvalidConfig {
					message: format!("{} rule has an empty pattern", rule.kind.as_str()),
				});
			}
		}

		Ok(())
	}

	/// Extensions without their leading dot.
	pub fn normalized_extensions(&self) -> Vec<String> {
		self.extensions
			.iter()
			.map(|ext| ext.trim_start_matches('.').to_string())
			.collect()
	}
}

/// A configuration with the file it came from, if any.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from. `None` for built-in defaults.
	pub path: Option<PathBuf>,
}

impl LoadedConfig {
	/// Resolve the configured root against the config file's directory,
	/// or against `cwd` when no file was loaded.
	pub fn root_dir(&self, cwd: &Path) -> PathBuf {
		let base = self
			.path
			.as_deref()
			.and_then(Path::parent)
			.unwrap_or(cwd);
		base.join(&self.config.root)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rules::MatchKind;

	#[test]
	fn test_default_config() {
		let config = Config::default();
		assert_eq!(config.root, PathBuf::from("src/components"));
		assert_eq!(config.extensions, vec!["tsx"]);
		assert!(config.validate().is_ok());
	}

	#[test]
	fn test_empty_extensions_rejected() {
		let config = Config {
			extensions: Vec::new(),
			..Default::default()
		};
		assert!(matches!(
			config.validate(),
			Err(RtlifyError::InvalidConfig { .. })
		));
	}

	#[test]
	fn test_dot_only_extension_rejected() {
		let config = Config {
			extensions: vec![".".to_string()],
			..Default::default()
		};
		assert!(config.validate().is_err());
	}

	#[test]
	fn test_empty_rule_pattern_rejected() {
		let config = Config {
			rules: vec![Rule {
				kind: MatchKind::Prefix,
				pattern: String::new(),
				replacement: "x".to_string(),
			}],
			..Default::default()
		};
		assert!(config.validate().is_err());
	}

	#[test]
	fn test_normalized_extensions() {
		let config = Config {
			extensions: vec![".tsx".to_string(), "jsx".to_string()],
			..Default::default()
		};
		assert_eq!(config.normalized_extensions(), vec!["tsx", "jsx"]);
	}

	#[test]
	fn test_root_dir_relative_to_config_file() {
		let loaded = LoadedConfig {
			config: Config::default(),
			path: Some(PathBuf::from("/project/.rtlify.toml")),
		};
		assert_eq!(
			loaded.root_dir(Path::new("/elsewhere")),
			PathBuf::from("/project/src/components")
		);
	}

	#[test]
	fn test_root_dir_defaults_to_cwd() {
		let loaded = LoadedConfig::default();
		assert_eq!(
			loaded.root_dir(Path::new("/work")),
			PathBuf::from("/work/src/components")
		);
	}
}
