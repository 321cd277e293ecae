//! Extract command - pull organization data from a single letter file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use kpr_core::{
    DocumentReader, ExtractedRecord, InnResolver, LetterParser, TABLE_HEADER, YandexResolver,
    resolver::needs_resolution,
};

use crate::reader::PlainTextReader;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input letter file (plain text, one paragraph per line)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Look up a missing tax ID through web search
    #[arg(long)]
    resolve: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let lines = PlainTextReader.read_lines(&args.input)?;
    let parser =
        LetterParser::new().with_default_legal_form(config.extraction.default_legal_form.clone());
    let mut record = parser.parse(&lines);
    record.sequence_number = 1;

    if (args.resolve || config.resolver.enabled)
        && needs_resolution(&record.inn, &config.resolver.placeholder_inn)
    {
        let resolver = YandexResolver::new(&config.resolver)?;
        if let Some(inn) = resolver.resolve(&record.name) {
            record.inn = inn;
        }
    }

    let content = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&record)?,
        OutputFormat::Csv => format_record_csv(&record)?,
        OutputFormat::Text => format_record_text(&record),
    };

    match args.output {
        Some(path) => {
            fs::write(&path, content)?;
            println!(
                "{} Wrote output to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => println!("{content}"),
    }

    Ok(())
}

/// Render one record as a CSV table with the fixed column order.
pub fn format_record_csv(record: &ExtractedRecord) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(TABLE_HEADER)?;
    writer.write_record(record.to_row())?;
    Ok(String::from_utf8(writer.into_inner()?)?)
}

fn format_record_text(record: &ExtractedRecord) -> String {
    let mut out = String::new();
    for (header, value) in TABLE_HEADER.iter().zip(record.to_row()) {
        out.push_str(&format!("{header}: {value}\n"));
    }
    out
}
