use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use text_stats::{config, report, TextStats};

/// text_stats — word counts, vocabulary and frequency statistics for text files.
///
/// Relative paths are resolved against TEXT_STATS_BASE_DIR (default: the
/// working directory). Settings may also come from a .env file.
#[derive(Parser)]
#[command(name = "text_stats")]
#[command(version = "0.1.0")]
#[command(about = "Word statistics for plain-text files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (overridden by RUST_LOG)
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every statistic for a text file
    Stats {
        /// Path to the text file
        #[arg(value_name = "FILE_PATH")]
        file_path: String,

        /// Print a JSON summary instead
        #[arg(long)]
        json: bool,
    },

    /// Write the analysis CSV for one or more text files
    ///
    /// The header comes from the sample CSV; each file adds one row of
    /// filepath, total words, sentence count and most common word.
    Export {
        /// Paths to the text files
        #[arg(value_name = "FILE_PATH", required = true)]
        file_paths: Vec<String>,

        /// Destination CSV file
        #[arg(short, long, value_name = "CSV")]
        output: String,

        /// Sample CSV to read the header from (default: TEXT_STATS_SAMPLE_CSV)
        #[arg(long, value_name = "CSV")]
        sample: Option<String>,
    },

    /// Cosine similarity between the word frequencies of two files
    Compare {
        #[arg(value_name = "FIRST")]
        first: String,

        #[arg(value_name = "SECOND")]
        second: String,
    },
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_stats(stats: &TextStats) {
    let frequencies: BTreeMap<_, _> = stats.frequencies().into_iter().collect();
    let percents: BTreeMap<_, _> = stats.percent_frequencies().into_iter().collect();

    println!("File: {}", stats.filepath());
    println!("Sentence count is {}", stats.sentence_count());
    println!("Words list is {:?}", stats.words());
    println!("Word count is {}", stats.word_count());
    println!("Vocabulary is {:?}", stats.vocabulary());
    println!("Frequencies are {:?}", frequencies);
    match stats.most_common() {
        Some((word, count)) => {
            println!("Most common word and its frequency is {:?}, {}", word, count)
        }
        None => println!("Most common word: none (no words)"),
    }
    println!("Percent frequencies are {:?}", percents);
}

fn export(file_paths: &[String], output: &str, sample: Option<String>) -> Result<()> {
    let sample_path = sample
        .map(PathBuf::from)
        .unwrap_or_else(config::sample_csv_path);
    let header = report::read_sample_csv(&sample_path)?;

    info!(files = file_paths.len(), "analyzing documents");
    let stats: Vec<TextStats> = file_paths
        .par_iter()
        .map(|path| TextStats::open(path))
        .collect::<Result<_>>()?;

    report::write_batch(&header, &stats, output)?;
    println!("Wrote {} row(s) to '{}'.", stats.len(), output);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Stats { file_path, json } => {
            let stats = TextStats::open(&file_path)?;
            if json {
                println!("{}", report::summary_json(&stats.summary())?);
            } else {
                print_stats(&stats);
            }
            Ok(())
        }
        Commands::Export {
            file_paths,
            output,
            sample,
        } => export(&file_paths, &output, sample),
        Commands::Compare { first, second } => {
            let a = TextStats::open(&first)?;
            let b = TextStats::open(&second)?;
            println!("{:.6}", a.similarity_with(&b));
            Ok(())
        }
    }
}

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    if let Err(e) = run(cli) {
        eprintln!("\nError: {:#}", e);
        std::process::exit(1);
    }
}
