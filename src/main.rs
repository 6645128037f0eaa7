use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use rtlify::DocumentProcessor;
use rtlify::config::{CONFIG_FILE_NAME, LoadedConfig, generate_init_template, load_config};
use rtlify::files::{FileOutcome, Summary, WriteMode, find_files, process_discovered};
use rtlify::rules::RuleTable;

#[derive(Parser)]
#[command(name = "rtlify")]
#[command(
	author,
	version,
	about = "Rewrite directional utility classes into logical start/end classes"
)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Directory to process (defaults to the configured root, then src/components).
	/// A directory named like a subcommand must be written as ./rules
	#[arg(value_name = "PATH")]
	path: Option<PathBuf>,

	/// File extension to process; repeat for several (defaults to tsx)
	#[arg(short, long = "ext", value_name = "EXT")]
	extensions: Vec<String>,

	/// Report files that would change without writing them
	#[arg(long)]
	check: bool,

	/// Rewrite standard input to standard output
	#[arg(long, conflicts_with_all = ["check", "path", "init"])]
	stdin: bool,

	/// Use this config file instead of discovering .rtlify.toml
	#[arg(short, long, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Log progress at info level (otherwise RUST_LOG, default warn)
	#[arg(short, long)]
	verbose: bool,

	/// Create a template .rtlify.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .rtlify.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the effective rule table in application order
	Rules,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	if cli.init {
		return handle_init(cli.force);
	}

	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let config_path = cli.config.as_ref().map(|path| cwd.join(path));
	let loaded =
		load_config(&cwd, config_path.as_deref()).context("Failed to load configuration")?;
	let table = build_table(&loaded)?;
	let table = table.as_ref().unwrap_or_else(|| RuleTable::builtin());
	let processor = DocumentProcessor::new(table);

	if let Some(Commands::Rules) = cli.command {
		return handle_rules(table);
	}

	if cli.stdin {
		return handle_stdin(&processor);
	}

	let root = match cli.path {
		Some(path) => cwd.join(path),
		None => loaded.root_dir(&cwd),
	};
	let extensions = if cli.extensions.is_empty() {
		loaded.config.normalized_extensions()
	} else {
		cli.extensions
			.iter()
			.map(|ext| ext.trim_start_matches('.').to_string())
			.collect()
	};
	let mode = if cli.check {
		WriteMode::Check
	} else {
		WriteMode::Write
	};

	handle_process(&root, &extensions, &loaded.config.exclude, &processor, mode)
}

fn init_logging(verbose: bool) {
	let filter = if verbose {
		EnvFilter::new("info")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
	};
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

/// Extend the built-in table with config rules, if there are any.
fn build_table(loaded: &LoadedConfig) -> Result<Option<RuleTable>> {
	if loaded.config.rules.is_empty() {
		return Ok(None);
	}

	let table = RuleTable::with_extra_rules(&loaded.config.rules)
		.context("Failed to compile configured rules")?;

	for conflict in table.ordering_conflicts() {
		tracing::warn!(
			earlier = %conflict.earlier.pattern,
			later = %conflict.later.pattern,
			reason = ?conflict.reason,
			"rule order may corrupt output"
		);
	}

	Ok(Some(table))
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{CONFIG_FILE_NAME} already exists. Use --force to overwrite.");
	}

	std::fs::write(&config_path, generate_init_template())
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {CONFIG_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

fn handle_rules(table: &RuleTable) -> Result<ExitCode> {
	for (i, compiled) in table.rules().iter().enumerate() {
		let rule = &compiled.rule;
		let note = if rule.is_identity() { "  (unchanged)" } else { "" };
		println!(
			"{:>3}. {:<18} {:?} -> {:?}{}",
			i + 1,
			rule.kind.as_str(),
			rule.search_text(),
			rule.emitted_text(),
			note
		);
	}
	Ok(ExitCode::SUCCESS)
}

fn handle_stdin(processor: &DocumentProcessor) -> Result<ExitCode> {
	let mut content = String::new();
	std::io::stdin()
		.read_to_string(&mut content)
		.context("Failed to read standard input")?;

	print!("{}", processor.transform(&content));
	Ok(ExitCode::SUCCESS)
}

fn handle_process(
	root: &Path,
	extensions: &[String],
	exclude: &[String],
	processor: &DocumentProcessor,
	mode: WriteMode,
) -> Result<ExitCode> {
	let discovered = find_files(root, extensions, exclude)
		.with_context(|| format!("Failed to scan {}", root.display()))?;

	println!("Starting RTL transformation...");
	println!("Found {} files to process", discovered.files.len());

	let summary = process_discovered(discovered, processor, mode);
	print_report(&summary, mode);

	let needs_attention = summary.failed() > 0
		|| summary.skipped() > 0
		|| (mode == WriteMode::Check && summary.updated() > 0);
	if needs_attention {
		Ok(ExitCode::FAILURE)
	} else {
		Ok(ExitCode::SUCCESS)
	}
}

fn print_report(summary: &Summary, mode: WriteMode) {
	let (verb, label) = match mode {
		WriteMode::Write => ("Updated", "Files updated"),
		WriteMode::Check => ("Would update", "Files to update"),
	};

	for report in &summary.reports {
		match &report.outcome {
			FileOutcome::Updated => println!("{verb}: {}", report.path.display()),
			FileOutcome::Unchanged => {}
			FileOutcome::Failed(e) => {
				eprintln!("Error processing {}: {}", report.path.display(), describe(e))
			}
		}
	}
	for report in &summary.skipped {
		if let FileOutcome::Failed(e) = &report.outcome {
			eprintln!("Skipped {}: {}", report.path.display(), describe(e));
		}
	}

	println!();
	println!("Summary:");
	println!("Total files processed: {}", summary.total());
	println!("{label}: {}", summary.updated());
	println!("Files unchanged: {}", summary.unchanged());
	println!("Files failed: {}", summary.failed());
	if summary.skipped() > 0 {
		println!("Entries skipped: {}", summary.skipped());
	}
}

/// Render an error with its source chain on one line.
fn describe(error: &dyn std::error::Error) -> String {
	let mut message = error.to_string();
	let mut source = error.source();
	while let Some(cause) = source {
		message.push_str(": ");
		message.push_str(&cause.to_string());
		source = cause.source();
	}
	message
}
