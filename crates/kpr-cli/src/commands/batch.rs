//! Batch command - process a folder of letter files into a table.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use kpr_core::{
    BatchOutcome, BatchProcessor, CancelToken, TABLE_HEADER, YandexResolver, request_number,
};

use crate::reader::PlainTextReader;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input directory or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output table path (default: output.csv)
    #[arg(short, long, default_value = "output.csv")]
    output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: TableFormat,

    /// Look up missing tax IDs through web search
    #[arg(long)]
    resolve: bool,

    /// Print the zero-padded request number assigned to each record
    #[arg(long)]
    numbers: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum TableFormat {
    /// CSV table with the fixed column order
    Csv,
    /// JSON array of records
    Json,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    // A directory means "all .txt files inside"; anything else is a glob.
    let pattern = if PathBuf::from(&args.input).is_dir() {
        format!("{}/*.txt", args.input.trim_end_matches('/'))
    } else {
        args.input.clone()
    };

    let files: Vec<PathBuf> = glob(&pattern)?.filter_map(|entry| entry.ok()).collect();

    if files.is_empty() {
        anyhow::bail!("No letter files found for: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let mut processor = BatchProcessor::new(&config);
    if args.resolve || config.resolver.enabled {
        processor = processor.with_resolver(Box::new(YandexResolver::new(&config.resolver)?));
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let outcome = processor.run(&PlainTextReader, &files, &CancelToken::new(), |progress| {
        pb.set_position(progress.processed as u64);
    })?;
    pb.finish_with_message("Complete");

    write_table(&args.output, args.format, &outcome)?;
    println!(
        "{} Table written to {}",
        style("✓").green(),
        args.output.display()
    );

    if args.numbers {
        let width = config.extraction.request_number_width;
        for record in &outcome.records {
            println!(
                "  {} {}",
                request_number(record.sequence_number, width),
                record.name
            );
        }
    }

    // Print summary
    println!();
    println!(
        "{} {} in {:?}",
        style("✓").green(),
        outcome.summary(),
        start.elapsed()
    );

    if !outcome.failures.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for failure in &outcome.failures {
            println!("  - {}: {}", failure.path.display(), failure.reason);
        }
    }

    Ok(())
}

fn write_table(path: &PathBuf, format: TableFormat, outcome: &BatchOutcome) -> anyhow::Result<()> {
    match format {
        TableFormat::Csv => {
            let mut writer = csv::Writer::from_path(path)?;
            writer.write_record(TABLE_HEADER)?;
            for record in &outcome.records {
                writer.write_record(record.to_row())?;
            }
            writer.flush()?;
        }
        TableFormat::Json => {
            fs::write(path, serde_json::to_string_pretty(&outcome.records)?)?;
        }
    }

    debug!("wrote {} rows", outcome.records.len());
    Ok(())
}
