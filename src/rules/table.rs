use serde::Deserialize;

/// Attribute name whose bracketed selector values are rewritten.
pub const SELECTOR_ATTRIBUTE: &str = "data-side";

/// How a rule's pattern is located in a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchKind {
	/// Matches tokens that begin with the pattern at a word boundary.
	/// Only the matched prefix is replaced.
	#[default]
	Prefix,

	/// Matches the pattern as a whole token (word boundary on both sides).
	ExactToken,

	/// Matches the literal `[data-side=<pattern>]` selector.
	AttributeSelector,
}

impl MatchKind {
	pub fn as_str(self) -> &'static str {
		match self {
			MatchKind::Prefix => "prefix",
			MatchKind::ExactToken => "exact-token",
			MatchKind::AttributeSelector => "attribute-selector",
		}
	}
}

/// A single rewrite rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rule {
	/// How the pattern is matched.
	#[serde(default)]
	pub kind: MatchKind,

	/// Text to look for. For attribute-selector rules this is the selector value.
	pub pattern: String,

	/// Text substituted for the pattern.
	pub replacement: String,
}

impl Rule {
	pub fn prefix(pattern: &str, replacement: &str) -> Self {
		Self::new(MatchKind::Prefix, pattern, replacement)
	}

	pub fn exact_token(pattern: &str, replacement: &str) -> Self {
		Self::new(MatchKind::ExactToken, pattern, replacement)
	}

	pub fn attribute_selector(value: &str, replacement: &str) -> Self {
		Self::new(MatchKind::AttributeSelector, value, replacement)
	}

	fn new(kind: MatchKind, pattern: &str, replacement: &str) -> Self {
		Rule {
			kind,
			pattern: pattern.to_string(),
			replacement: replacement.to_string(),
		}
	}

	/// True for rules that map a token onto itself.
	pub fn is_identity(&self) -> bool {
		self.pattern == self.replacement
	}

	/// The literal text this rule searches for.
	pub fn search_text(&self) -> String {
		match self.kind {
			MatchKind::AttributeSelector => selector_literal(&self.pattern),
			MatchKind::Prefix | MatchKind::ExactToken => self.pattern.clone(),
		}
	}

	/// The literal text this rule emits in place of a match.
	pub fn emitted_text(&self) -> String {
		match self.kind {
			MatchKind::AttributeSelector => selector_literal(&self.replacement),
			MatchKind::Prefix | MatchKind::ExactToken => self.replacement.clone(),
		}
	}
}

fn selector_literal(value: &str) -> String {
	format!("[{SELECTOR_ATTRIBUTE}={value}]")
}

/// The built-in rules, in application order.
///
/// Within each kind, order matters: a corner prefix such as `rounded-tl-`
/// sits ahead of the side prefix `rounded-l-` it overlaps with. Identity
/// entries mark tokens that are already logical and must stay untouched.
pub fn builtin_rules() -> Vec<Rule> {
	let mut rules = vec![
		Rule::attribute_selector("left", "start"),
		Rule::attribute_selector("right", "end"),
	];

	let prefixes: &[(&str, &str)] = &[
		// Spacing and positioning
		("pl-", "ps-"),
		("pr-", "pe-"),
		("ml-", "ms-"),
		("mr-", "me-"),
		("left-", "start-"),
		("right-", "end-"),
		("translate-x-", "translate-x-"),
		("space-x-", "space-x-"),
		("space-y-", "space-y-"),
		("gap-x-", "gap-x-"),
		("gap-y-", "gap-y-"),
		// Border radius
		("rounded-tl-", "rounded-ts-"),
		("rounded-tr-", "rounded-te-"),
		("rounded-bl-", "rounded-bs-"),
		("rounded-br-", "rounded-be-"),
		("rounded-l-", "rounded-s-"),
		("rounded-l ", "rounded-s "),
		("rounded-r ", "rounded-e "),
		("rounded-r-", "rounded-e-"),
		// Border width
		("border-tl-", "border-ts-"),
		("border-tr-", "border-te-"),
		("border-bl-", "border-bs-"),
		("border-br-", "border-be-"),
		("border-l ", "border-s "),
		("border-r ", "border-e "),
		("border-l-", "border-s-"),
		("border-r-", "border-e-"),
		// Flex and grid
		("justify-start", "justify-start"),
		("justify-end", "justify-end"),
		("items-start", "items-start"),
		("items-end", "items-end"),
		// Text alignment
		("text-left", "text-start"),
		("text-right", "text-end"),
		// Animation
		("slide-in-from-left", "slide-in-from-start"),
		("slide-in-from-right", "slide-in-from-end"),
		("slide-out-to-left", "slide-out-to-start"),
		("slide-out-to-right", "slide-out-to-end"),
	];
	rules.extend(prefixes.iter().map(|(p, r)| Rule::prefix(p, r)));

	let markers: &[(&str, &str)] = &[
		("rtl:space-x-reverse", "rtl:space-x-reverse"),
		("rtl:space-y-reverse", "rtl:space-y-reverse"),
		("rtl:translate-x-reverse", "rtl:translate-x-reverse"),
		("rtl:slide-in-from-start", "rtl:slide-in-from-end"),
		("rtl:slide-in-from-end", "rtl:slide-in-from-start"),
		("rtl:slide-out-to-start", "rtl:slide-out-to-end"),
		("rtl:slide-out-to-end", "rtl:slide-out-to-start"),
	];
	rules.extend(markers.iter().map(|(p, r)| Rule::exact_token(p, r)));

	rules
}
