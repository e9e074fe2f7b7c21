//! Docs Completeness CLI - command-line entry point for the documentation gate
//!
//! CDD Principle: Application Layer - CLI coordinates user interactions with domain services
//! - Running with no arguments checks `docs/**/*.md` under the working directory
//! - Stdout carries only violation output; logs go to stderr
//! - The process exit code is the violation count

use anyhow::Context;
use clap::{Parser, ValueEnum};
use docs_completeness::config::DEFAULT_CONFIG_FILES;
use docs_completeness::{CheckerConfig, CompletenessChecker, OutputFormat};
use std::path::PathBuf;
use std::process;

/// Check that every Markdown file under docs/ has YAML frontmatter and a title
#[derive(Parser)]
#[command(name = "validate-completeness")]
#[command(version)]
#[command(about = "Checks that every Markdown file in docs/ has frontmatter and a title")]
#[command(
    long_about = "Scans docs/**/*.md relative to the working directory. Each file must start \
                  with `---` and its first line must contain `# `. The exit code is the number \
                  of violations found."
)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation root, overriding the configuration
    #[arg(long)]
    root: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    format: OutputFormatArg,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, ValueEnum, PartialEq)]
enum OutputFormatArg {
    Plain,
    Json,
    Github,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Plain => OutputFormat::Plain,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Github => OutputFormat::GitHub,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let mut config = load_config(cli.config)?;

    if let Some(root) = cli.root {
        config.docs.root = root;
    }

    let checker = CompletenessChecker::new_with_config(config)
        .context("Invalid configuration")?
        .with_format(cli.format.into());

    let report = checker.run().context("Documentation check aborted")?;

    Ok(report.exit_code())
}

fn load_config(config_path: Option<PathBuf>) -> anyhow::Result<CheckerConfig> {
    match config_path {
        Some(path) => Ok(CheckerConfig::load_from_file(&path)?),
        None => {
            let config = CheckerConfig::discover(".").with_context(|| {
                format!("Failed to load one of {}", DEFAULT_CONFIG_FILES.join(", "))
            })?;
            Ok(config)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
