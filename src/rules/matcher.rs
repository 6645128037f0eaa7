use crate::error::{Result, RtlifyError};
use crate::rules::table::{MatchKind, Rule, builtin_rules};
use regex::{NoExpand, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

static BUILTIN_TABLE: LazyLock<RuleTable> = LazyLock::new(|| {
	RuleTable::new(builtin_rules()).expect("built-in rules are escaped literals")
});

/// A rule with its matcher compiled once, up front.
#[derive(Debug, Clone)]
pub struct CompiledRule {
	/// The original rule.
	pub rule: Rule,

	/// Compiled matcher for the rule's search text.
	pub regex: Regex,

	emitted: String,
}

impl CompiledRule {
	/// Compile a rule into its matcher.
	///
	/// - prefix rules anchor an ASCII word boundary on the left edge only
	/// - exact-token rules anchor an ASCII word boundary on both edges
	/// - attribute-selector rules match the bracketed literal as-is
	pub fn compile(rule: Rule) -> Result<Self> {
		if rule.pattern.is_empty() {
			return Err(RtlifyError::InvalidConfig {
				message: format!("{} rule has an empty pattern", rule.kind.as_str()),
			});
		}

		let escaped = regex::escape(&rule.search_text());
		let source = match rule.kind {
			MatchKind::Prefix => format!(r"(?-u:\b){escaped}"),
			MatchKind::ExactToken => format!(r"(?-u:\b){escaped}(?-u:\b)"),
			MatchKind::AttributeSelector => escaped,
		};
		let regex = compile_regex(&source)?;
		let emitted = rule.emitted_text();

		Ok(CompiledRule {
			rule,
			regex,
			emitted,
		})
	}

	/// Replace every match with the rule's replacement.
	///
	/// Returns true when the text changed.
	pub fn apply(&self, text: &mut Cow<'_, str>) -> bool {
		self.replace_with(text, &self.emitted)
	}

	/// Replace every match with `emitted`, inserted literally.
	///
	/// `text` stays borrowed unless the result actually differs.
	pub fn replace_with(&self, text: &mut Cow<'_, str>, emitted: &str) -> bool {
		let replaced = match self.regex.replace_all(text.as_ref(), NoExpand(emitted)) {
			Cow::Owned(s) if s != text.as_ref() => Some(s),
			_ => None,
		};

		match replaced {
			Some(s) => {
				*text = Cow::Owned(s);
				true
			}
			None => false,
		}
	}
}

/// Compile a regex pattern string.
fn compile_regex(pattern: &str) -> Result<Regex> {
	Regex::new(pattern).map_err(|source| RtlifyError::InvalidRegex {
		pattern: pattern.to_string(),
		source,
	})
}

/// Why two rules are in the wrong relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictReason {
	/// The earlier rule rewrites text the later rule's pattern needs.
	Shadowed,

	/// The later rule matches text the earlier rule produced.
	Reprocessed,
}

/// A pair of substituting rules whose order breaks the table invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingConflict {
	pub earlier: Rule,
	pub later: Rule,
	pub reason: ConflictReason,
}

/// An ordered, immutable set of compiled rules.
#[derive(Debug, Clone)]
pub struct RuleTable {
	rules: Vec<CompiledRule>,
}

impl RuleTable {
	/// Compile `rules`, keeping their order.
	pub fn new(rules: Vec<Rule>) -> Result<Self> {
		let rules = rules
			.into_iter()
			.map(CompiledRule::compile)
			.collect::<Result<Vec<_>>>()?;
		Ok(RuleTable { rules })
	}

	/// The process-wide built-in table.
	pub fn builtin() -> &'static RuleTable {
		&BUILTIN_TABLE
	}

	/// The built-in rules followed by `extra`.
	pub fn with_extra_rules(extra: &[Rule]) -> Result<Self> {
		let mut rules = builtin_rules();
		rules.extend_from_slice(extra);
		Self::new(rules)
	}

	/// All rules, in order.
	pub fn rules(&self) -> &[CompiledRule] {
		&self.rules
	}

	/// Rules of one kind, in table order.
	pub fn of_kind(&self, kind: MatchKind) -> impl Iterator<Item = &CompiledRule> {
		self.rules.iter().filter(move |r| r.rule.kind == kind)
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	/// Find rule pairs whose order would silently corrupt output.
	///
	/// Only substituting kinds are checked; identity rules and exact-token
	/// markers never change text, so they cannot conflict.
	pub fn ordering_conflicts(&self) -> Vec<OrderingConflict> {
		let mut conflicts = Vec::new();

		for kind in [MatchKind::AttributeSelector, MatchKind::Prefix] {
			let rules: Vec<_> = self
				.of_kind(kind)
				.filter(|r| !r.rule.is_identity())
				.collect();

			for (i, earlier) in rules.iter().enumerate() {
				for later in &rules[i + 1..] {
					let reason = if earlier.regex.is_match(&later.rule.search_text()) {
						ConflictReason::Shadowed
					} else if later.regex.is_match(&earlier.emitted) {
						ConflictReason::Reprocessed
					} else {
						continue;
					};

					conflicts.push(OrderingConflict {
						earlier: earlier.rule.clone(),
						later: later.rule.clone(),
						reason,
					});
				}
			}
		}

		conflicts
	}
}
