//! Rtlify - rewrite directional utility classes into logical start/end classes.
//!
//! This library provides the core functionality for rtlify, including:
//! - The ordered rule table and its compiled matchers
//! - Selector, prefix and marker rewrite passes
//! - Configuration file parsing and discovery
//! - File discovery and batch rewriting with per-file outcomes
//!
//! # Example
//!
//! ```
//! use rtlify::transform;
//!
//! let output = transform("pl-4 pr-2 rounded-tl-lg [data-side=left]");
//! assert_eq!(output, "ps-4 pe-2 rounded-ts-lg [data-side=start]");
//! ```

pub mod config;
pub mod error;
pub mod files;
pub mod rules;
pub mod transform;

pub use error::{Result, RtlifyError};
pub use transform::{DocumentProcessor, transform};
