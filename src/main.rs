//! Decompound CLI - Unsupervised Compound Splitting
//!
//! Command-line drivers around the splitting engine: a batch mode emitting
//! one diagnostic record per input line, and a text mode rewriting stdin
//! with compounds split into space-separated atoms.

use clap::{Args, Parser, Subcommand};
use decompound::knowledge::io;
use decompound::{DashPolicy, Result, SplitReport, Splitter, SplitterConfig, DELIMITER};
use log::{debug, error};
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "decompound")]
#[command(author = "Decompound Contributors")]
#[command(version)]
#[command(about = "Unsupervised compound word splitting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Split one column of a tab-separated file, emitting a diagnostic
    /// record per line
    Split {
        /// Knowledge file with words and their split candidates (.gz ok)
        #[arg(short, long)]
        knowledge: PathBuf,

        /// Word-count file used for filtering and scoring (.gz ok)
        #[arg(short = 'c', long)]
        word_counts: PathBuf,

        /// Tab-separated input file with the words to split
        #[arg(short, long)]
        input: PathBuf,

        /// Zero-based column of the word in each input line
        #[arg(short = 'w', long, default_value = "0")]
        word_index: usize,

        #[command(flatten)]
        params: SplitterArgs,
    },

    /// Read text from stdin and write it back with every word split into
    /// space-separated atoms
    Text {
        /// Knowledge file with words and their split candidates (.gz ok)
        #[arg(short, long)]
        knowledge: PathBuf,

        /// Word-count file used for filtering and scoring (.gz ok)
        #[arg(short = 'c', long)]
        word_counts: PathBuf,

        #[command(flatten)]
        params: SplitterArgs,
    },
}

#[derive(Args)]
struct SplitterArgs {
    /// Smoothing factor for frequency scoring
    #[arg(long, default_value = "0.01")]
    epsilon: f64,

    /// Minimal length of a candidate atom
    #[arg(long, default_value = "5")]
    min_word_length: usize,

    /// Minimal word count for knowledge rows (0 disables filtering)
    #[arg(long, default_value = "50")]
    min_word_count: u64,

    /// Length up to which fragments are glued to their right neighbor
    #[arg(long, default_value = "3")]
    prefix_length: usize,

    /// Length up to which fragments are glued to their left neighbor
    #[arg(long, default_value = "3")]
    suffix_length: usize,

    /// Dashed-word heuristic: remove|split|ignore (legacy: 1|2|3)
    #[arg(long, default_value = "ignore", value_parser = parse_dash_policy)]
    dash_words: DashPolicy,

    /// Capitalize atoms before frequency lookup (case-sensitive vocabularies)
    #[arg(short, long)]
    uppercase_first_letter: bool,
}

impl SplitterArgs {
    fn to_config(&self) -> SplitterConfig {
        SplitterConfig {
            epsilon: self.epsilon,
            min_word_length: self.min_word_length,
            min_word_count: self.min_word_count,
            prefix_length: self.prefix_length,
            suffix_length: self.suffix_length,
            dash_words: self.dash_words,
            uppercase_first_letter: self.uppercase_first_letter,
        }
    }
}

fn parse_dash_policy(value: &str) -> std::result::Result<DashPolicy, String> {
    match value {
        "remove" | "1" => Ok(DashPolicy::Remove),
        "split" | "2" => Ok(DashPolicy::Split),
        "ignore" | "3" => Ok(DashPolicy::Ignore),
        other => Err(format!(
            "invalid dash policy {other:?}, expected remove, split or ignore"
        )),
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let result = match cli.command {
        Commands::Split {
            knowledge,
            word_counts,
            input,
            word_index,
            params,
        } => split_file(knowledge, word_counts, input, word_index, &params),

        Commands::Text {
            knowledge,
            word_counts,
            params,
        } => split_text(knowledge, word_counts, &params),
    };

    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
}

/// Batch driver: applies the splitter to one column of a tab-separated file
/// and prints the diagnostic record evaluation tooling consumes.
fn split_file(
    knowledge: PathBuf,
    word_counts: PathBuf,
    input: PathBuf,
    word_index: usize,
    params: &SplitterArgs,
) -> Result<()> {
    let splitter = Splitter::prepare(params.to_config(), &word_counts, &knowledge)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let reader = io::open_lines(&input)?;
    for line in reader.lines() {
        let line = line?;
        let word = match line.split('\t').nth(word_index) {
            Some(word) => word,
            None => {
                log::warn!("no column {word_index} in line {line:?}, skipping");
                continue;
            }
        };
        let report = splitter.split_report(word)?;
        write_record(&mut out, &report, &line)?;
    }
    Ok(())
}

/// Writes the ten-column record: winner label and segmentation, first-dash
/// label and segmentation, the four raw candidates, the word frequency
/// (-1 when unknown), and the original line.
fn write_record(out: &mut impl Write, report: &SplitReport, line: &str) -> Result<()> {
    debug!(
        "{}: fallback atoms {:?}, absorbed {}",
        report.word, report.fallback_atoms, report.fallback_absorbed
    );
    let frequency = report.frequency.map(|c| c as i64).unwrap_or(-1);
    writeln!(
        out,
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        report.winner_label,
        report.winner,
        report.first_dash_label,
        report.first_dash,
        report.candidates[0],
        report.candidates[1],
        report.candidates[2],
        report.candidates[3],
        frequency,
        line
    )?;
    Ok(())
}

/// Text driver: every whitespace-separated word of every stdin line is
/// replaced by its segmentation, delimiters rendered as spaces.
fn split_text(knowledge: PathBuf, word_counts: PathBuf, params: &SplitterArgs) -> Result<()> {
    let splitter = Splitter::prepare(params.to_config(), &word_counts, &knowledge)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line?;
        let mut pieces = Vec::new();
        for word in line.split_whitespace() {
            let segmentation = match splitter.split(word)? {
                Some(segmentation) => segmentation,
                None => word.to_string(),
            };
            pieces.push(segmentation.replace(DELIMITER, " "));
        }
        writeln!(out, "{}", pieces.join(" "))?;
    }
    Ok(())
}
