use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use wasf_core::canonical::canonical_key;
use wasf_core::config::AppConfig;
use wasf_core::error::WasfError;
use wasf_core::intake::load_raw_outputs;
use wasf_core::models::AssetRecord;
use wasf_core::pipeline::{process_batch, NoCorrection};
use wasf_core::quality::{assess, Shortfall};

#[derive(Debug, Parser)]
#[command(name = "wasf", version, about)]
struct Cli {
    /// Config file to use instead of the user config.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse one raw model response (file, or stdin when omitted).
    Parse { file: Option<PathBuf> },
    /// Parse every raw response in a directory and disambiguate names.
    Batch {
        dir: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Print the comparison key of each name.
    Key { names: Vec<String> },
    /// Print the effective configuration, optionally writing it out.
    Config {
        #[arg(long)]
        write: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Tsv,
}

#[derive(Debug, Serialize)]
struct ParseReport<'a> {
    english_name: &'a str,
    arabic_name: &'a str,
    tags: &'a str,
    needs_correction: bool,
    shortfalls: &'a [Shortfall],
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "wasf=debug" } else { "wasf=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "wasf failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), WasfError> {
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    match cli.command {
        Command::Parse { file } => {
            let raw = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let meta = wasf_parse::parse_metadata(&raw);
            let verdict = assess(&meta.arabic_name, &meta.tags, &config.quality);
            let report = ParseReport {
                english_name: &meta.english_name,
                arabic_name: &meta.arabic_name,
                tags: &meta.tags,
                needs_correction: verdict.needs_correction(),
                shortfalls: verdict.shortfalls(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Batch { dir, format } => {
            let tasks = load_raw_outputs(&dir, &config.intake.extensions)?;
            let records: Vec<AssetRecord> = process_batch(&tasks, &config, &NoCorrection)
                .into_iter()
                .map(AssetRecord::from)
                .collect();
            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&records)?),
                Format::Tsv => print!("{}", render_tsv(&records)),
            }
        }
        Command::Key { names } => {
            for name in names {
                println!("{}", canonical_key(&name));
            }
        }
        Command::Config { write } => {
            if write {
                match &cli.config {
                    Some(path) => config.save_to(path)?,
                    None => config.save()?,
                }
                tracing::info!("Config written");
            }
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}

/// Header plus one line per record; tabs and newlines inside cells become spaces.
fn render_tsv(records: &[AssetRecord]) -> String {
    let mut out = AssetRecord::COLUMNS.join("\t");
    out.push('\n');
    for record in records {
        let cells: Vec<String> = record
            .row()
            .iter()
            .map(|cell| cell.replace(['\t', '\n', '\r'], " "))
            .collect();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }
    out
}
