//! Rewrite rules for rtlify.
//!
//! This module handles:
//! - The ordered built-in rule table
//! - Compiling rules into boundary-aware matchers
//! - The selector, prefix and marker rewrite passes

pub mod matcher;
pub mod rewriter;
pub mod table;

pub use matcher::{CompiledRule, ConflictReason, OrderingConflict, RuleTable};
pub use rewriter::{AttributeSelectorRewriter, SymmetricClassPass, TokenPrefixRewriter};
pub use table::{MatchKind, Rule, SELECTOR_ATTRIBUTE, builtin_rules};
