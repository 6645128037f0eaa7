/// Template written by `rtlify --init`.
pub fn generate_init_template() -> String {
	r#"# rtlify configuration
#
# Directory to scan, relative to this file.
root = "src/components"

# File extensions to rewrite.
extensions = ["tsx"]

# Directory names to skip while scanning.
exclude = ["node_modules"]

# Extra rules, applied after the built-in table.
# kind is one of "prefix" (default), "exact-token" or "attribute-selector".
#
# [[rules]]
# pattern = "scroll-ml-"
# replacement = "scroll-ms-"
"#
	.to_string()
}
