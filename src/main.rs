//! sidediff command-line interface.
//!
//! Compares two text files line by line and writes a side-by-side HTML
//! report (or prints terminal, plain or JSON output).

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sidediff::output::DEFAULT_REPORT_NAME;
use sidediff::{compute_diff, format_diff, input, write_report, OutputFormat, OutputOptions};
use std::env;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

/// sidediff - line diff with side-by-side reports
///
/// Aligns two files with a longest common subsequence and marks every line
/// as kept, added, removed or modified.
#[derive(Parser)]
#[command(name = "sidediff")]
#[command(version)]
#[command(about = "Line diff with side-by-side HTML reports", long_about = None)]
#[command(author = "Sidediff Contributors")]
struct Cli {
    /// First file to compare ("-" for standard input)
    #[arg(value_name = "FIRST")]
    first: PathBuf,

    /// Second file to compare ("-" for standard input)
    #[arg(value_name = "SECOND")]
    second: PathBuf,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "html")]
    format: OutputFormatArg,

    /// Report path for HTML output (defaults to diff.html in the working directory)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Hide kept lines in terminal and plain output
    #[arg(short, long)]
    compact: bool,

    /// Maximum length for displayed lines
    #[arg(long, default_value = "120")]
    max_value_length: usize,

    /// Verbose output (debug logging to stderr)
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (no report location message, no summary)
    #[arg(short, long)]
    quiet: bool,
}

/// Output format argument for clap
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormatArg {
    /// Side-by-side HTML report written to a file
    Html,
    /// Colored terminal output
    Terminal,
    /// Plain text (no colors)
    Plain,
    /// JSON representation
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Html => OutputFormat::Html,
            OutputFormatArg::Terminal => OutputFormat::Terminal,
            OutputFormatArg::Plain => OutputFormat::Plain,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(2);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Column title for an input: its resolved path, or `<stdin>`.
fn input_label(path: &Path, base: &Path) -> String {
    if input::is_stdin(path) {
        "<stdin>".to_string()
    } else {
        input::resolve_path(base, path).display().to_string()
    }
}

fn run(cli: Cli) -> Result<i32> {
    let base = env::current_dir().context("Can't determine the working directory")?;

    input::check_inputs(&cli.first, &cli.second)?;
    let first = input::load(&cli.first, &base).context("Can't read the first file")?;
    let second = input::load(&cli.second, &base).context("Can't read the second file")?;

    let diff = compute_diff(&first, &second);

    let output_format: OutputFormat = cli.format.into();
    let output_options = OutputOptions {
        compact: cli.compact,
        max_value_length: cli.max_value_length,
        first_label: input_label(&cli.first, &base),
        second_label: input_label(&cli.second, &base),
    };

    let output = format_diff(&diff, &output_format, &output_options)
        .context("Failed to format diff output")?;

    if output_format == OutputFormat::Html {
        let report_name = cli
            .output
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_NAME));
        let report_path = base.join(report_name);
        write_report(&report_path, &output)?;
        if !cli.quiet {
            println!("Report generated in: {}", report_path.display());
        }
    } else if !cli.quiet {
        println!("{}", output);
    } else {
        for line in output.lines() {
            if !line.starts_with("Summary:") && !line.trim().is_empty() {
                println!("{}", line);
            }
        }
    }

    if diff.is_empty() {
        Ok(0)
    } else {
        Ok(1)
    }
}
