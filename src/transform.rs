//! Document-level rewriting.

use crate::rules::{AttributeSelectorRewriter, RuleTable, SymmetricClassPass, TokenPrefixRewriter};
use std::borrow::Cow;

/// Runs the selector, prefix and marker passes over whole documents.
#[derive(Debug, Clone, Copy)]
pub struct DocumentProcessor<'t> {
	table: &'t RuleTable,
}

impl<'t> DocumentProcessor<'t> {
	pub fn new(table: &'t RuleTable) -> Self {
		Self { table }
	}

	/// A processor over the built-in rule table.
	pub fn builtin() -> DocumentProcessor<'static> {
		DocumentProcessor::new(RuleTable::builtin())
	}

	pub fn table(&self) -> &'t RuleTable {
		self.table
	}

	/// Rewrite `content`, returning it borrowed when no rule changed anything.
	pub fn transform<'a>(&self, content: &'a str) -> Cow<'a, str> {
		let mut text = Cow::Borrowed(content);
		AttributeSelectorRewriter::new(self.table).rewrite(&mut text);
		TokenPrefixRewriter::new(self.table).rewrite(&mut text);
		SymmetricClassPass::new(self.table).rewrite(&mut text);
		text
	}

	/// Rewrite `content`, returning `None` when nothing changed.
	pub fn rewrite(&self, content: &str) -> Option<String> {
		match self.transform(content) {
			Cow::Owned(s) if s != content => Some(s),
			_ => None,
		}
	}
}

/// Rewrite `content` with the built-in rule table.
pub fn transform(content: &str) -> Cow<'_, str> {
	DocumentProcessor::builtin().transform(content)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rules::Rule;

	#[test]
	fn test_end_to_end() {
		assert_eq!(
			transform("pl-4 pr-2 rounded-tl-lg [data-side=left]"),
			"ps-4 pe-2 rounded-ts-lg [data-side=start]"
		);
	}

	#[test]
	fn test_component_source() {
		let input = r#"<SheetContent
  className={cn(
    "fixed inset-y-0 left-0 h-full border-r pl-6 text-left",
    "data-[state=open]:slide-in-from-left sm:mr-2 rounded-bl-md",
    "[data-side=right]:rounded-r-lg"
  )}
/>"#;
		let expected = r#"<SheetContent
  className={cn(
    "fixed inset-y-0 start-0 h-full border-e ps-6 text-start",
    "data-[state=open]:slide-in-from-start sm:me-2 rounded-bs-md",
    "[data-side=end]:rounded-e-lg"
  )}
/>"#;
		assert_eq!(transform(input), expected);
	}

	#[test]
	fn test_token_boundary_safety() {
		assert_eq!(transform("superprice-3 pr-4"), "superprice-3 pe-4");
		assert_eq!(transform("html-4 xml-2"), "html-4 xml-2");
	}

	#[test]
	fn test_selector_vs_html_attribute() {
		assert_eq!(
			transform(r#"<div class="pl-4" data-side="left">"#),
			r#"<div class="ps-4" data-side="left">"#
		);
		assert_eq!(
			transform("[data-side=left]:ml-1"),
			"[data-side=start]:ms-1"
		);
	}

	#[test]
	fn test_specific_corner_before_side() {
		assert_eq!(transform("rounded-bl-lg"), "rounded-bs-lg");
		assert_eq!(transform("rounded-l-lg rounded-tr-sm"), "rounded-s-lg rounded-te-sm");
		assert_eq!(transform("border-l-2 border-br-4"), "border-s-2 border-be-4");
	}

	#[test]
	fn test_logical_tokens_unchanged() {
		let input = "text-start justify-end items-start space-x-2 rtl:space-x-reverse";
		let output = transform(input);
		assert_eq!(output, input);
		assert!(matches!(output, Cow::Borrowed(_)));
	}

	#[test]
	fn test_no_match_returns_input() {
		let input = "export const Button = () => <button className=\"p-2 mt-4\" />";
		assert!(matches!(transform(input), Cow::Borrowed(s) if s == input));
		assert_eq!(DocumentProcessor::builtin().rewrite(input), None);
	}

	#[test]
	fn test_rewrite_reports_change() {
		let processor = DocumentProcessor::builtin();
		assert_eq!(processor.rewrite("mr-2"), Some("me-2".to_string()));
	}

	#[test]
	fn test_idempotence() {
		let samples = [
			"pl-4 pr-2 rounded-tl-lg [data-side=left]",
			"left-0 right-4 -left-2 translate-x-1/2 rtl:translate-x-reverse",
			"rounded-l rounded-r border-l border-r border-tl-2 border-r-4",
			"text-left text-right justify-start items-end gap-x-2 space-y-1",
			"slide-in-from-left slide-in-from-right slide-out-to-left slide-out-to-right",
			"rtl:slide-in-from-left rtl:slide-out-to-right rtl:space-y-reverse",
			"[data-side=left] [data-side=right] [data-side=top] data-side=\"left\"",
			"md:pl-[calc(100%-2rem)] hover:mr-auto group-hover:rounded-br-xl",
		];

		for sample in samples {
			let once = transform(sample).into_owned();
			let twice = transform(&once).into_owned();
			assert_eq!(once, twice, "not idempotent for {sample:?}");
		}
	}

	#[test]
	fn test_idempotence_over_rule_pairs() {
		let table = RuleTable::builtin();
		let fragments: Vec<String> = table
			.rules()
			.iter()
			.flat_map(|r| [r.rule.pattern.clone(), r.rule.replacement.clone()])
			.collect();

		for a in &fragments {
			for b in &fragments {
				for sep in ["", " ", "-", ":"] {
					let sample = format!("{a}{sep}{b}");
					let once = transform(&sample).into_owned();
					let twice = transform(&once).into_owned();
					assert_eq!(once, twice, "not idempotent for {sample:?}");
				}
			}
		}
	}

	#[test]
	fn test_token_after_non_ascii_letter() {
		assert_eq!(transform("épl-4"), "éps-4");
		assert_eq!(transform("نصpl-4 تtext-left"), "نصps-4 تtext-start");
	}

	#[test]
	fn test_custom_table() {
		let table = RuleTable::with_extra_rules(&[Rule::prefix("float-left", "float-start")]).unwrap();
		let processor = DocumentProcessor::new(&table);
		assert_eq!(processor.transform("float-left ml-4"), "float-start ms-4");
	}
}
