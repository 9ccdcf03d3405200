use tailo::check;
use tailo::numbered;
use tailo::{add_tone_to_syllable, parse_syllable};

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "Tai-lo Tool")]
#[command(version = "0.1.0")]
#[command(about = "Add and parse Tai-lo tone marks", long_about = None)]
struct Cli {
    /// Log debug information to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a tone mark to a syllable, e.g. `mark tai 5` prints "tâi"
    Mark { syllable: String, tone: u32 },

    /// Split a tone-marked syllable into base spelling and tone number
    Parse {
        syllable: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert numbered notation ("Tai5-gi2") to tone marks
    ToMarked { numbered: String },

    /// Convert tone marks ("Tâi-gí") to numbered notation
    ToNumbered { marked: String },

    /// Check that every syllable in a file (one per line) survives parsing and re-marking
    Check { input_file: PathBuf },
}

#[derive(Serialize, Debug)]
struct ParsedSyllable<'a> {
    syllable: &'a str,
    base: String,
    tone: u32,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("tailo=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tailo=warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

fn check_file(path: &Path) -> anyhow::Result<()> {
    let file = File::open(path).context(format!("Could not open file {}", path.display()))?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<io::Result<Vec<String>>>()
        .context(format!("Could not read file {}", path.display()))?;
    let num_lines = lines.len();

    let failures = check::round_trip_check(&lines);
    for failure in &failures {
        eprintln!("{failure}");
    }
    if !failures.is_empty() {
        bail!("Round trip check failed for {} of {num_lines} lines", failures.len());
    }
    eprintln!("Round trip check ok!");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Mark { syllable, tone } => {
            println!("{}", add_tone_to_syllable(&syllable, tone)?);
        }
        Command::Parse { syllable, json } => {
            let (base, tone) = parse_syllable(&syllable)?;
            if json {
                let parsed = ParsedSyllable {
                    syllable: &syllable,
                    base,
                    tone,
                };
                println!("{}", serde_json::to_string(&parsed)?);
            } else {
                println!("{base} {tone}");
            }
        }
        Command::ToMarked { numbered } => {
            println!("{}", numbered::mark_from_numbered(&numbered)?);
        }
        Command::ToNumbered { marked } => {
            println!("{}", numbered::numbered_from_mark(&marked)?);
        }
        Command::Check { input_file } => check_file(&input_file)?,
    }
    Ok(())
}
