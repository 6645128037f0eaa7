//! Configuration loading and parsing for rtlify.
//!
//! This module handles:
//! - TOML config file parsing and validation
//! - Directory cascade discovery
//! - The `--init` template

pub mod cascade;
pub mod parser;
pub mod template;
pub mod types;

pub use cascade::{CONFIG_FILE_NAME, discover_config, load_config, user_config_path};
pub use parser::{parse_config_file, parse_config_str};
pub use template::generate_init_template;
pub use types::{Config, DEFAULT_EXTENSION, DEFAULT_ROOT, LoadedConfig};
