//! Minutely CLI - Parse and validate transcript files
//!
//! # Commands
//!
//! ```bash
//! minutely parse meeting.txt        # Parse a transcript to JSON entries
//! minutely validate meeting.txt     # Advisory validation report
//! minutely stats meeting.txt        # Duration, word count, sections
//! ```
//!
//! All commands accept `--mode strict|lenient|auto` (default: auto, which
//! picks strict when the file matches the canonical `- HH:MM:SS section
//! content` format).

use clap::{Parser, Subcommand, ValueEnum};
use minutely::{process_transcript_file, ParseMode, ProcessOptions};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "minutely")]
#[command(about = "Parse and validate meeting transcripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Auto,
    Strict,
    Lenient,
}

impl From<ModeArg> for ParseMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Auto => ParseMode::Auto,
            ModeArg::Strict => ParseMode::Strict,
            ModeArg::Lenient => ParseMode::Lenient,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a transcript file and output JSON entries
    Parse {
        /// Input transcript file
        input: PathBuf,

        /// Parser selection
        #[arg(short, long, value_enum, default_value = "auto")]
        mode: ModeArg,

        /// Skip the advisory validation pass
        #[arg(long)]
        no_validate: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a transcript file and report findings
    Validate {
        /// Input transcript file
        input: PathBuf,

        /// Parser selection
        #[arg(short, long, value_enum, default_value = "auto")]
        mode: ModeArg,
    },

    /// Show duration, word count and sections for a transcript file
    Stats {
        /// Input transcript file
        input: PathBuf,

        /// Parser selection
        #[arg(short, long, value_enum, default_value = "auto")]
        mode: ModeArg,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input,
            mode,
            no_validate,
            output,
        } => cmd_parse(&input, mode, no_validate, output.as_deref()),

        Commands::Validate { input, mode } => cmd_validate(&input, mode),

        Commands::Stats {
            input,
            mode,
            output,
        } => cmd_stats(&input, mode, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_parse(
    input: &Path,
    mode: ModeArg,
    no_validate: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Parsing transcript: {}", input.display());

    let options = ProcessOptions {
        mode: mode.into(),
        skip_validation: no_validate,
    };
    let result = process_transcript_file(input, &options)?;

    eprintln!("   Mode: {:?}", result.mode);
    eprintln!("Parsed {} entries", result.entries.len());

    if !no_validate && !result.validation.warnings.is_empty() {
        eprintln!("   Warnings: {}", result.validation.warnings.len());
        for warning in result.validation.warnings.iter().take(5) {
            eprintln!("     - {}", warning);
        }
    }

    let json = serde_json::to_string_pretty(&result.entries)?;
    write_output(&json, output)?;

    Ok(())
}

fn cmd_validate(input: &Path, mode: ModeArg) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Validating transcript: {}", input.display());

    let options = ProcessOptions {
        mode: mode.into(),
        skip_validation: false,
    };
    let result = process_transcript_file(input, &options)?;

    let json = serde_json::to_string_pretty(&result.validation)?;
    println!("{}", json);

    if result.validation.is_valid {
        eprintln!("All {} entries valid", result.entries.len());
    } else {
        eprintln!("Validation found {} error(s)", result.validation.errors.len());
        std::process::exit(1);
    }

    Ok(())
}

fn cmd_stats(
    input: &Path,
    mode: ModeArg,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Computing stats: {}", input.display());

    let options = ProcessOptions {
        mode: mode.into(),
        skip_validation: true,
    };
    let result = process_transcript_file(input, &options)?;

    eprintln!(
        "   {} entries, {} words, {} section(s)",
        result.entries.len(),
        result.stats.word_count,
        result.stats.sections.len()
    );

    let json = serde_json::to_string_pretty(&result.stats)?;
    write_output(&json, output)?;

    Ok(())
}

fn write_output(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            eprintln!("Saved to: {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
