//! WordNet → MBQL export CLI
//!
//! Dumps a synset corpus as Ground statements for a downstream
//! knowledge-graph loader.
//!
//! # Usage
//!
//! ```bash
//! # Full corpus dump to stdout
//! wordnet_mbql --corpus corpora/wordnet_en.json
//!
//! # Only the synsets for one word
//! wordnet_mbql dog --corpus corpora/wordnet_en.json
//!
//! # Write to a file; logs go to stderr
//! RUST_LOG=info wordnet_mbql --corpus corpora/wordnet_en.json -o seed.mbql
//! ```

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use wordnet_mbql::{JsonCorpus, SynsetExporter, WriterSink};

#[derive(Parser)]
#[command(name = "wordnet_mbql")]
#[command(version = "0.1.0")]
#[command(about = "Export a synset corpus as MBQL Ground statements")]
struct Cli {
    /// Lookup term; exports every synset when omitted
    term: Option<String>,

    /// Path to the JSON corpus file
    #[arg(short, long, env = "WORDNET_CORPUS")]
    corpus: PathBuf,

    /// Write statements to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Statements go to stdout; keep the log stream on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let corpus = JsonCorpus::load(&cli.corpus)
        .with_context(|| format!("loading corpus from {}", cli.corpus.display()))?;

    let exporter = SynsetExporter::new(&corpus);

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating output file {}", path.display()))?;
            let mut sink = WriterSink::new(file);
            exporter.export(cli.term.as_deref(), &mut sink)?;
        }
        None => {
            let stdout = io::stdout();
            let mut sink = WriterSink::new(stdout.lock());
            exporter.export(cli.term.as_deref(), &mut sink)?;
        }
    }

    Ok(())
}
