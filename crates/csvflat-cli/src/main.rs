// crates/csvflat-cli/src/main.rs

use std::io::BufWriter;

use anyhow::Context;
use clap::Parser;

use csvflat_core::{flatten_stream, FlattenStats, ParserConfig};

mod input;

#[derive(Parser)]
#[command(name = "csvflat")]
#[command(
    about = "Output records from CSV FILE(s) with embedded newlines replaced by spaces",
    long_about = None
)]
pub struct Cli {
    /// Delimiting character for the input FILE(s); also joins output fields
    #[arg(short = 'd', long = "delimiter", value_name = "CHAR", default_value = ",")]
    pub delimiter: String,

    /// CSV quoting character (double-quote is the default)
    #[arg(short = 'Q', long = "csv-quote", value_name = "CHAR", default_value = "\"")]
    pub csv_quote: String,

    /// Print a per-file summary line to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Input FILEs; with none (or "-") standard input is read
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Bad delimiter/quote is fatal before any file is touched.
    let config = ParserConfig::from_args(&cli.delimiter, &cli.csv_quote)?;

    let files = if cli.files.is_empty() {
        vec!["-".to_string()]
    } else {
        cli.files
    };

    let mut failures = 0usize;
    for name in &files {
        match flatten_file(name, config) {
            Ok(stats) => {
                if cli.verbose {
                    eprintln!(
                        "flatten ok: file={} records={} fields={}",
                        name, stats.records, stats.fields
                    );
                }
            }
            Err(e) => {
                // One bad file does not stop the run; the exit status
                // still reports the failure.
                eprintln!("csvflat: {name}: {e:#}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn flatten_file(name: &str, config: ParserConfig) -> anyhow::Result<FlattenStats> {
    let reader = input::open(name)?;
    let stdout = std::io::stdout();
    let writer = BufWriter::new(stdout.lock());
    let stats = flatten_stream(config, reader, writer)
        .with_context(|| format!("flatten {name}"))?;
    Ok(stats)
}
