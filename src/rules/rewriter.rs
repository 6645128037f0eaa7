use crate::rules::matcher::{CompiledRule, RuleTable};
use crate::rules::table::MatchKind;
use std::borrow::Cow;

/// Rewrites `[data-side=left|right]` selector literals.
///
/// Runs before the prefix pass so that prefix rules keyed on `left-` or
/// `right-` never see bracket syntax.
#[derive(Debug, Clone, Copy)]
pub struct AttributeSelectorRewriter<'t> {
	table: &'t RuleTable,
}

impl<'t> AttributeSelectorRewriter<'t> {
	pub fn new(table: &'t RuleTable) -> Self {
		Self { table }
	}

	/// Returns true when any selector was rewritten.
	pub fn rewrite(&self, text: &mut Cow<'_, str>) -> bool {
		apply_in_order(self.table.of_kind(MatchKind::AttributeSelector), text)
	}
}

/// Applies every prefix rule, in table order, to the same text.
#[derive(Debug, Clone, Copy)]
pub struct TokenPrefixRewriter<'t> {
	table: &'t RuleTable,
}

impl<'t> TokenPrefixRewriter<'t> {
	pub fn new(table: &'t RuleTable) -> Self {
		Self { table }
	}

	/// Returns true when any prefix was rewritten.
	pub fn rewrite(&self, text: &mut Cow<'_, str>) -> bool {
		apply_in_order(self.table.of_kind(MatchKind::Prefix), text)
	}
}

/// Normalizes RTL marker classes that appear as whole tokens.
///
/// Matched markers are re-emitted verbatim. The swap counterpart stored in
/// each rule is not substituted: doing so would flip the marker again on
/// every run.
#[derive(Debug, Clone, Copy)]
pub struct SymmetricClassPass<'t> {
	table: &'t RuleTable,
}

impl<'t> SymmetricClassPass<'t> {
	pub fn new(table: &'t RuleTable) -> Self {
		Self { table }
	}

	/// Returns true when the text changed.
	pub fn rewrite(&self, text: &mut Cow<'_, str>) -> bool {
		let mut changed = false;
		for marker in self.table.of_kind(MatchKind::ExactToken) {
			if !text.contains(marker.rule.pattern.as_str()) {
				continue;
			}
			changed |= marker.replace_with(text, &marker.rule.pattern);
		}
		changed
	}
}

fn apply_in_order<'r>(
	rules: impl Iterator<Item = &'r CompiledRule>,
	text: &mut Cow<'_, str>,
) -> bool {
	let mut changed = false;
	for rule in rules {
		if rule.apply(text) {
			tracing::trace!(
				pattern = %rule.rule.pattern,
				replacement = %rule.rule.replacement,
				"rule applied"
			);
			changed = true;
		}
	}
	changed
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rules::table::Rule;

	fn run(pass: impl Fn(&mut Cow<'_, str>) -> bool, input: &str) -> String {
		let mut text = Cow::Borrowed(input);
		pass(&mut text);
		text.into_owned()
	}

	#[test]
	fn test_selector_rewriter_left_and_right() {
		let table = RuleTable::builtin();
		let pass = AttributeSelectorRewriter::new(table);
		assert_eq!(
			run(|t| pass.rewrite(t), "[data-side=left]:pl-2 [data-side=right]:pr-2"),
			"[data-side=start]:pl-2 [data-side=end]:pr-2"
		);
	}

	#[test]
	fn test_selector_rewriter_ignores_other_selectors() {
		let pass = AttributeSelectorRewriter::new(RuleTable::builtin());
		let input = r#"[data-side=start] [data-side=top] [data-align=left] data-side="left""#;
		assert_eq!(run(|t| pass.rewrite(t), input), input);
	}

	#[test]
	fn test_prefix_rewriter_does_not_touch_selectors() {
		let pass = TokenPrefixRewriter::new(RuleTable::builtin());
		assert_eq!(
			run(|t| pass.rewrite(t), "[data-side=left] pl-4"),
			"[data-side=left] ps-4"
		);
	}

	#[test]
	fn test_prefix_rewriter_applies_in_table_order() {
		let table = RuleTable::new(vec![
			Rule::prefix("rounded-bl-", "rounded-bs-"),
			Rule::prefix("rounded-l-", "rounded-s-"),
		])
		.unwrap();
		let pass = TokenPrefixRewriter::new(&table);
		assert_eq!(
			run(|t| pass.rewrite(t), "rounded-bl-lg rounded-l-md"),
			"rounded-bs-lg rounded-s-md"
		);
	}

	#[test]
	fn test_prefix_rewriter_chains_through_earlier_output() {
		// A later rule sees what an earlier rule produced
		let table = RuleTable::new(vec![
			Rule::prefix("pl-", "ps-"),
			Rule::prefix("ps-", "px-"),
		])
		.unwrap();
		let pass = TokenPrefixRewriter::new(&table);
		assert_eq!(run(|t| pass.rewrite(t), "pl-4"), "px-4");
	}

	#[test]
	fn test_prefix_rewriter_trailing_space_rules() {
		let pass = TokenPrefixRewriter::new(RuleTable::builtin());
		assert_eq!(
			run(|t| pass.rewrite(t), "rounded-l border-r p-2"),
			"rounded-s border-e p-2"
		);
		// Without the trailing space the bare side token is left alone
		assert_eq!(run(|t| pass.rewrite(t), r#""rounded-l""#), r#""rounded-l""#);
	}

	#[test]
	fn test_marker_pass_reemits_markers() {
		let pass = SymmetricClassPass::new(RuleTable::builtin());
		let input = "rtl:space-x-reverse rtl:slide-in-from-start rtl:slide-out-to-end";

		let mut text = Cow::Borrowed(input);
		assert!(!pass.rewrite(&mut text));
		assert_eq!(text, input);
	}

	#[test]
	fn test_marker_pass_without_markers() {
		let pass = SymmetricClassPass::new(RuleTable::builtin());
		let mut text = Cow::Borrowed("space-x-2");
		assert!(!pass.rewrite(&mut text));
		assert!(matches!(text, Cow::Borrowed(_)));
	}
}
