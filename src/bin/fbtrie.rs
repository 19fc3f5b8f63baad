//! Command-line spelling correction against a word list.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{info, Level};

use fbtrie::prelude::*;

#[derive(Parser)]
#[command(name = "fbtrie")]
#[command(about = "Spelling correction with parametric Levenshtein automata", long_about = None)]
struct Cli {
    /// Log to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List lexicon words close to each typo
    Correct {
        /// Lexicon file
        #[arg(short, long)]
        dict: PathBuf,

        /// Lexicon file format
        #[arg(short, long, value_enum, default_value = "text")]
        format: LexiconFormat,

        /// Maximum edit distance (1 or 2)
        #[arg(short = 'n', long, default_value = "2")]
        distance: u8,

        /// Include distances in output
        #[arg(long)]
        with_distance: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,

        /// Misspelled words to correct
        #[arg(required = true)]
        typos: Vec<String>,
    },

    /// Check whether candidates are within the edit distance of a word
    Accepts {
        /// Word the automaton is built for
        word: String,

        /// Strings to test
        #[arg(required = true)]
        candidates: Vec<String>,

        /// Maximum edit distance (1 or 2)
        #[arg(short = 'n', long, default_value = "2")]
        distance: u8,
    },

    /// Show lexicon statistics
    Info {
        /// Lexicon file
        #[arg(short, long)]
        dict: PathBuf,

        /// Lexicon file format
        #[arg(short, long, value_enum, default_value = "text")]
        format: LexiconFormat,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum LexiconFormat {
    /// One word per line, `#` starts a comment line
    Text,
    /// JSON array of words
    Json,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One correction per line
    Text,
    /// One JSON object per typo
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    typo: &'a str,
    corrections: Vec<Candidate>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn load_lexicon(path: &Path, format: LexiconFormat) -> Result<SpellChecker> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open lexicon file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let checker = match format {
        LexiconFormat::Text => PlainTextSerializer::deserialize(reader),
        LexiconFormat::Json => JsonSerializer::deserialize(reader),
    }
    .with_context(|| format!("Failed to read lexicon from {}", path.display()))?;

    if checker.is_empty() {
        bail!("Lexicon file is empty: {}", path.display());
    }
    info!(path = %path.display(), words = checker.len(), "loaded lexicon");
    Ok(checker)
}

fn run_correct(
    checker: &SpellChecker,
    typos: &[String],
    distance: u8,
    with_distance: bool,
    output: OutputFormat,
) -> Result<()> {
    for typo in typos {
        let corrections = checker
            .ranked_corrections(typo, distance)
            .with_context(|| format!("Failed to correct {typo:?}"))?;

        match output {
            OutputFormat::Json => {
                let report = Report { typo, corrections };
                println!("{}", serde_json::to_string(&report)?);
            }
            OutputFormat::Text => {
                for candidate in corrections {
                    if with_distance {
                        println!("{}\t{}\t{}", typo, candidate.term, candidate.distance);
                    } else {
                        println!("{}\t{}", typo, candidate.term);
                    }
                }
            }
        }
    }
    Ok(())
}

fn run_accepts(word: &str, candidates: &[String], distance: u8) -> Result<()> {
    let mut automaton = ParametricAutomaton::new(word, distance)
        .with_context(|| format!("Cannot build an automaton for {word:?}"))?;
    for candidate in candidates {
        println!("{}\t{}", candidate, automaton.accepts_word(candidate));
    }
    Ok(())
}

fn show_info(checker: &SpellChecker) {
    println!("Words: {}", checker.len());
    println!("Forward nodes: {}", checker.forward().node_count());
    println!("Backward nodes: {}", checker.backward().node_count());
    let longest = checker.words().map(|w| w.chars().count()).max().unwrap_or(0);
    println!("Longest word: {longest}");
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Correct {
            dict,
            format,
            distance,
            with_distance,
            output,
            typos,
        } => {
            let checker = load_lexicon(&dict, format)?;
            run_correct(&checker, &typos, distance, with_distance, output)?;
        }

        Commands::Accepts {
            word,
            candidates,
            distance,
        } => run_accepts(&word, &candidates, distance)?,

        Commands::Info { dict, format } => {
            let checker = load_lexicon(&dict, format)?;
            show_info(&checker);
        }
    }

    Ok(())
}
