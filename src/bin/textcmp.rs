//! textcmp command-line front end.
//!
//! Reads two documents from files or the command line, compares them and
//! prints the similarity, synonym pairs and readability grades.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use textcmp::config::TextcmpConfig;
use textcmp::extract::extract_path;
use textcmp::{
    CompareError, Comparator, ComparisonResult, Lexicon, OpTag, SimilarityConfig, char_diff,
    install_shared,
};

/// Exit code when one or both documents are missing.
const EXIT_MISSING_INPUT: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "textcmp",
    version,
    about = "Compare two documents: similarity, synonyms, readability"
)]
struct Cli {
    /// First document as a file (takes precedence over --first-text)
    #[arg(long, value_name = "PATH")]
    first_file: Option<PathBuf>,

    /// First document as literal text
    #[arg(long, value_name = "TEXT")]
    first_text: Option<String>,

    /// Second document as a file (takes precedence over --second-text)
    #[arg(long, value_name = "PATH")]
    second_file: Option<PathBuf>,

    /// Second document as literal text
    #[arg(long, value_name = "TEXT")]
    second_text: Option<String>,

    /// YAML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// WordNet dict/ directory; overrides the configured lexicon
    #[arg(long, value_name = "DIR")]
    wordnet: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Also print the character edit script between the two documents
    #[arg(long)]
    diff: bool,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config = match &cli.config {
        Some(path) => TextcmpConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => TextcmpConfig::default(),
    };

    let lexicon = match &cli.wordnet {
        Some(dir) => Lexicon::from_wordnet_dir(dir)?,
        None => config.lexicon.load()?,
    };
    info!(synsets = lexicon.len(), "lexicon_ready");
    install_shared(lexicon)?;

    let first = read_input(cli.first_file.as_deref(), cli.first_text.as_deref())?;
    let second = read_input(cli.second_file.as_deref(), cli.second_text.as_deref())?;

    let compare_config = config.into_compare_config();
    let similarity_config = compare_config.similarity.clone();
    let comparator = Comparator::with_shared_lexicon(compare_config)?;

    let result = match comparator.compare(&first, &second) {
        Ok(result) => result,
        Err(CompareError::MissingInput { side }) => {
            eprintln!("warning: no text provided for {side}; provide both documents to compare");
            process::exit(EXIT_MISSING_INPUT);
        }
        Err(err) => return Err(err.into()),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result);
    }
    if cli.diff {
        print_diff(&first, &second, &similarity_config);
    }
    Ok(())
}

fn init_tracing(cli: &Cli) {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

// A file wins over typed text; neither yields an empty document.
fn read_input(file: Option<&Path>, text: Option<&str>) -> anyhow::Result<String> {
    match (file, text) {
        (Some(path), _) => {
            extract_path(path).with_context(|| format!("failed to extract {}", path.display()))
        }
        (None, Some(text)) => Ok(text.to_string()),
        (None, None) => Ok(String::new()),
    }
}

fn print_report(result: &ComparisonResult) {
    println!(
        "Similarity: {} ({})",
        result.similarity_display(),
        result.band
    );

    if result.synonyms.is_empty() {
        println!("Synonyms: none found");
    } else {
        println!("Synonyms ({}):", result.synonyms.len());
        for pair in &result.synonyms {
            println!(
                "  {} ~ {}  [{}]",
                pair.first, pair.second, pair.shared_lemma
            );
        }
    }

    println!("Readability (Flesch-Kincaid grade):");
    for (label, report) in ["first", "second"].iter().zip(&result.reports) {
        println!(
            "  {label:<6} {:.2}  ({} sentences, {} words, {} syllables)",
            report.grade, report.sentences, report.words, report.syllables
        );
    }
}

fn print_diff(first: &str, second: &str, cfg: &SimilarityConfig) {
    println!("Edit script (first -> second):");
    for seg in char_diff(first, second, cfg) {
        let op = seg.op;
        match op.tag {
            OpTag::Equal => {}
            OpTag::Replace => println!(
                "  replace {}..{} {:?} -> {:?}",
                op.a_start, op.a_end, seg.removed, seg.inserted
            ),
            OpTag::Delete => println!("  delete  {}..{} {:?}", op.a_start, op.a_end, seg.removed),
            OpTag::Insert => println!("  insert  at {} {:?}", op.a_start, seg.inserted),
        }
    }
}
