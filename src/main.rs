use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use tracing::{info, Level};

use n7m::{all_numeronyms, find_pair, input, text_to_numeronym};

#[derive(Parser, Debug)]
#[command(name = "n7m")]
#[command(about = "Convert words to numeronym abbreviations (internationalization -> i18n)")]
#[command(version)]
struct Cli {
    /// Raise diagnostic verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert every token in the input text, keeping separators intact
    Convert {
        /// Text to convert; multiple arguments are joined with single spaces
        text: Vec<String>,

        /// Read the text from a file instead of the arguments
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Emit a JSON report instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// List every abbreviation variant of a single token
    Variants {
        /// Token to enumerate
        token: String,

        /// Emit a JSON report instead of one variant per line
        #[arg(long)]
        json: bool,
    },

    /// Find the first two values that sum to the target
    Pair {
        /// Target sum
        #[arg(long, allow_negative_numbers = true)]
        target: i64,

        /// Values to scan, in order
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Emit a JSON report instead of a summary line
        #[arg(long)]
        json: bool,
    },
}

/// JSON report for `convert`
#[derive(Serialize, Debug)]
struct ConvertReport<'a> {
    /// Text as resolved from arguments, file, or stdin
    input: &'a str,
    /// Converted text with separators preserved
    output: &'a str,
}

/// JSON report for `variants`
#[derive(Serialize, Debug)]
struct VariantsReport<'a> {
    /// Token the variants were enumerated from
    token: &'a str,
    /// Number of variants
    count: usize,
    /// Variants in contractual order (prefix length, then suffix start)
    variants: &'a [String],
}

/// JSON report for `pair`
#[derive(Serialize, Debug)]
struct PairReport {
    /// Target sum searched for
    target: i64,
    /// Index of the earlier element
    i: usize,
    /// Index of the later element
    j: usize,
    /// Value at index i
    left: i64,
    /// Value at index j
    right: i64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so stdout stays pipe-clean for results
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Convert { text, file, json } => run_convert(&text, file.as_deref(), json),
        Command::Variants { token, json } => run_variants(&token, json),
        Command::Pair {
            target,
            values,
            json,
        } => run_pair(&values, target, json),
    }
}

fn run_convert(args: &[String], file: Option<&Path>, json: bool) -> Result<()> {
    let text = input::gather_text(args, file)?;
    info!(chars = text.chars().count(), "converting text");

    let output = text_to_numeronym(&text);
    if json {
        let report = ConvertReport {
            input: &text,
            output: &output,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if output.ends_with('\n') {
        // piped input already carries its trailing newline
        print!("{output}");
    } else {
        println!("{output}");
    }
    Ok(())
}

fn run_variants(token: &str, json: bool) -> Result<()> {
    let variants = all_numeronyms(token);
    info!(token, count = variants.len(), "enumerated variants");

    if json {
        let report = VariantsReport {
            token,
            count: variants.len(),
            variants: &variants,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for variant in &variants {
            println!("{variant}");
        }
    }
    Ok(())
}

fn run_pair(values: &[i64], target: i64, json: bool) -> Result<()> {
    info!(count = values.len(), target, "scanning for a pair");

    let (i, j) = find_pair(values, target)?;
    if json {
        let report = PairReport {
            target,
            i,
            j,
            left: values[i],
            right: values[j],
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "indices {i} and {j}: {} + {} = {target}",
            values[i], values[j]
        );
    }
    Ok(())
}
